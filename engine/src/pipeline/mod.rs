// Batch pipeline: period extraction -> ingestion -> mapping -> aggregation
// -> formatting -> validation -> encoding.
//
// Every per-file failure is scoped to that file; the batch always runs to
// completion. The record collection is replaced wholesale between stages,
// never mutated in place, so each stage stays a pure transform. An edited
// collection can be re-rendered by calling `render_records` again.

pub mod aggregator;
pub mod encoder;
pub mod mapper;
pub mod validator;

use crate::data::rcv_source::RcvSourceParser;
use crate::error::EngineError;
use crate::format;
use shared::models::{
    BatchReport, CanonicalRecord, FileStatus, FileWarning, FormattedRecord, SourcePeriod,
    ValidationReport,
};
use shared::utils;
use std::path::Path;
use tracing::{error, info, warn};

/// Formatted and encoded form of one record collection.
pub struct ExportArtifacts {
    pub formatted: Vec<FormattedRecord>,
    pub validation: ValidationReport,
    pub bytes: Vec<u8>,
}

/// Full outcome of a batch run.
pub struct BatchOutput {
    /// The combined canonical records, in submission-then-row order.
    pub records: Vec<CanonicalRecord>,
    pub formatted: Vec<FormattedRecord>,
    /// The final Latin-1 byte stream.
    pub bytes: Vec<u8>,
    pub report: BatchReport,
    /// `DJ1866_<YYYY><MM>.csv`, from the most frequent period in the batch.
    pub suggested_name: String,
}

/// Format, validate and encode a record collection.
///
/// This is the re-entry point after operator edits: replace the collection
/// and call again. Validation is advisory and never blocks the encode; a
/// non-Latin-1 character in any field is the one fatal condition.
pub fn render_records(records: &[CanonicalRecord]) -> Result<ExportArtifacts, EngineError> {
    let formatted = format::format_records(records);
    let validation = validator::validate(&formatted);
    let bytes = encoder::encode(&formatted)?;
    Ok(ExportArtifacts { formatted, validation, bytes })
}

/// Process a batch of RCV export files into the DJ 1866 byte stream.
///
/// Files are processed in submission order. A file whose name carries no
/// period suffix, whose schema is malformed, or whose filters leave no
/// qualifying rows contributes zero records and a per-file status entry;
/// only an entirely empty batch or an encoding failure is fatal.
pub fn process_batch<P: AsRef<Path>>(paths: &[P]) -> Result<BatchOutput, EngineError> {
    let mut slots: Vec<Option<FileStatus>> = Vec::new();
    let mut per_file: Vec<Vec<CanonicalRecord>> = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let Some(period) = utils::extract_period(&file_name) else {
            warn!(file = %file_name, "Skipping file: no _YYYYMM period suffix in name");
            slots.push(Some(FileStatus::Skipped {
                file: file_name,
                warning: FileWarning::NoPeriodInFilename,
            }));
            continue;
        };

        let rows = match RcvSourceParser::load_records_from_csv(&path.to_string_lossy()) {
            Ok(rows) => rows,
            Err(err) => {
                error!(file = %file_name, error = %err, "Failed to ingest source file");
                slots.push(Some(FileStatus::Failed { file: file_name, error: err.to_string() }));
                continue;
            }
        };

        let mapped = mapper::map_file(&rows, period, &file_name);
        match mapped.warning {
            Some(warning) => {
                warn!(file = %file_name, warning = %warning, "File contributed no records");
                slots.push(Some(FileStatus::Skipped { file: file_name, warning }));
            }
            None => {
                info!(
                    file = %file_name,
                    period = %period.label(),
                    records = mapped.records.len(),
                    "Mapped source file"
                );
                per_file.push(mapped.records);
                slots.push(None);
            }
        }
    }

    let (records, summaries) = aggregator::aggregate(per_file);
    if records.is_empty() {
        return Err(EngineError::EmptyBatchError);
    }

    let total_litres = summaries.iter().map(|s| s.total_litres).sum();
    let mut summaries = summaries.into_iter();
    let files: Vec<FileStatus> = slots
        .into_iter()
        .map(|slot| match slot {
            Some(status) => status,
            // One summary exists for every mapped (non-empty) file.
            None => FileStatus::Ok(summaries.next().expect("summary for mapped file")),
        })
        .collect();

    let periods = distinct_periods(&records);
    let suggested_name =
        utils::suggested_output_name(&records.iter().map(record_period).collect::<Vec<_>>());

    let artifacts = render_records(&records)?;
    info!(
        records = records.len(),
        bytes = artifacts.bytes.len(),
        validations_passed = artifacts.validation.all_passed(),
        "Batch encoded"
    );

    let report = BatchReport {
        files,
        total_records: records.len(),
        total_litres,
        periods,
        validation: artifacts.validation.clone(),
        output_bytes: artifacts.bytes.len(),
    };

    Ok(BatchOutput {
        records,
        formatted: artifacts.formatted,
        bytes: artifacts.bytes,
        report,
        suggested_name,
    })
}

fn record_period(record: &CanonicalRecord) -> SourcePeriod {
    SourcePeriod { year: record.registration_year, month: record.registration_month }
}

/// Distinct periods in first-appearance order.
fn distinct_periods(records: &[CanonicalRecord]) -> Vec<SourcePeriod> {
    let mut periods = Vec::new();
    for record in records {
        let period = record_period(record);
        if !periods.contains(&period) {
            periods.push(period);
        }
    }
    periods
}
