// Merges the per-file record sequences of a batch into one ordered
// collection, plus the per-file display summaries.

use crate::format::amount;
use shared::models::{CanonicalRecord, FileSummary, SourcePeriod};

/// Concatenate per-file record sequences in submission order, preserving
/// row order within each file, and compute a summary (record count, litres
/// sum) per non-empty file. The summaries are display data only.
pub fn aggregate(per_file: Vec<Vec<CanonicalRecord>>) -> (Vec<CanonicalRecord>, Vec<FileSummary>) {
    let mut combined = Vec::new();
    let mut summaries = Vec::new();

    for records in per_file {
        if let Some(first) = records.first() {
            summaries.push(FileSummary {
                file: first.source_file.clone(),
                period: SourcePeriod {
                    year: first.registration_year,
                    month: first.registration_month,
                },
                record_count: records.len(),
                total_litres: records
                    .iter()
                    .map(|r| amount::parse_number(&r.litres).unwrap_or(0.0))
                    .sum(),
            });
        }
        combined.extend(records);
    }

    (combined, summaries)
}
