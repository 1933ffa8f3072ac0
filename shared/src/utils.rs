// Filename and period helpers shared between the engine and any front end.

use crate::models::SourcePeriod;
use regex::Regex;
use std::sync::OnceLock;

// The RCV export naming convention ends in `_YYYYMM.<ext>`, e.g.
// `RCV_COMPRA_REGISTRO_15661465-3_202401.xlsx`. The `csv` extension is
// admitted alongside the spreadsheet ones because delimited exports of the
// same register follow the same naming rule.
fn period_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"_(\d{6})\.(?i:xlsx|xls|csv)$").expect("period pattern is valid")
    })
}

/// Extract the registration period from a source filename.
///
/// Returns `None` when the filename carries no `_YYYYMM` suffix or the
/// month digits are out of range; callers treat that as a per-file warning,
/// never a batch failure.
pub fn extract_period(filename: &str) -> Option<SourcePeriod> {
    let captures = period_pattern().captures(filename)?;
    let digits = captures.get(1)?.as_str();
    let year: i32 = digits[..4].parse().ok()?;
    let month: u32 = digits[4..].parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(SourcePeriod { year, month })
}

/// Suggested name for the generated CSV: `DJ1866_<YYYY><MM>.csv` using the
/// most frequent period in the batch. Ties go to the earliest period, and
/// an empty batch falls back to a bare `DJ1866.csv`.
pub fn suggested_output_name(periods: &[SourcePeriod]) -> String {
    let mut counts: Vec<(SourcePeriod, usize)> = Vec::new();
    for period in periods {
        match counts.iter_mut().find(|(p, _)| p == period) {
            Some((_, n)) => *n += 1,
            None => counts.push((*period, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    match counts.first() {
        Some((period, _)) => format!("DJ1866_{}{:02}.csv", period.year, period.month),
        None => "DJ1866.csv".to_string(),
    }
}
