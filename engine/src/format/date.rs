// Document date formatter for output column C7 (`ddmmyyyy`).

use chrono::NaiveDate;

// Source cells are day/month/year with slashes; dashes and ISO order show
// up when a spreadsheet has been round-tripped through other tooling, and
// Excel-typed cells may carry a time-of-day suffix.
const INPUT_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Parse a raw date cell. Blank or unparseable input yields `None`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let date_part = trimmed.split_whitespace().next()?;
    INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date_part, fmt).ok())
}

/// Format as the 8-character `ddmmyyyy` the SII layout requires; anything
/// unparseable degrades to the empty string, which the C7 validation rules
/// flag downstream.
pub fn format_date_ddmmyyyy(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%d%m%Y").to_string(),
        None => String::new(),
    }
}
