use serde::{Deserialize, Serialize};

/// Tax-treatment code marking petroleum/diesel purchases in RCV exports.
/// Only rows carrying this code qualify for the DJ 1866 filing.
pub const PETROLEUM_TAX_CODE: i64 = 28;

/// Document type reported in column C5. The SII filing covers electronic
/// invoices only, so every record carries this constant.
pub const DOC_TYPE_ELECTRONIC_INVOICE: u8 = 2;

/// Registration period derived from a source filename suffix `_YYYYMM.`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SourcePeriod {
    pub year: i32,
    pub month: u32,
}

impl SourcePeriod {
    pub fn label(&self) -> String {
        format!("{:02}/{}", self.month, self.year)
    }
}

/// One qualifying purchase row, carried through the pipeline in raw form.
///
/// Numeric and date fields stay as the original cell text: the source
/// spreadsheets are loosely typed, and the SII formatters define the
/// fallback for anything unparseable. Converting here would force sentinel
/// values and lose the distinction between "blank" and "garbage".
///
/// Invariant: a CanonicalRecord exists only for rows whose tax-treatment
/// code was 28 and whose litres cell was non-blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    /// Seller tax ID (RUT), raw; may or may not carry the `-DV` suffix.
    pub seller_tax_id: String,
    /// Purchased volume in litres, raw cell text. Non-blank by invariant.
    pub litres: String,
    /// Specific diesel tax amount (IEPD), raw cell text.
    pub special_tax_amount: String,
    /// Always `DOC_TYPE_ELECTRONIC_INVOICE`; no other type is representable.
    pub document_type: u8,
    /// Invoice number (folio), raw cell text.
    pub document_number: String,
    /// Document date, raw cell text (day/month/year order in the source).
    pub document_date: String,
    pub registration_month: u32,
    pub registration_year: i32,
    /// Name of the source file this record came from.
    pub source_file: String,
}

/// The nine positional output fields of one DJ 1866 line, already in their
/// final textual form. Formatting is one-directional: these are never
/// parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRecord {
    /// C1: RUT numeric part, up to 8 chars.
    pub c1: String,
    /// C2: RUT check digit, up to 1 char (digit or `K`).
    pub c2: String,
    /// C3: litres, decimal with 2 fractional digits and `.` separator.
    pub c3: String,
    /// C4: IEPD amount, integer, up to 15 digits.
    pub c4: String,
    /// C5: document type, always `"2"`.
    pub c5: String,
    /// C6: document number, integer, up to 10 digits.
    pub c6: String,
    /// C7: document date, `ddmmyyyy`.
    pub c7: String,
    /// C8: registration month, zero-padded to 2 digits.
    pub c8: String,
    /// C9: registration year, 4 digits.
    pub c9: String,
}

impl FormattedRecord {
    /// Fields in output column order.
    pub fn fields(&self) -> [&str; 9] {
        [
            &self.c1, &self.c2, &self.c3, &self.c4, &self.c5, &self.c6, &self.c7, &self.c8,
            &self.c9,
        ]
    }
}

/// Per-file ingestion summary, for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSummary {
    pub file: String,
    pub period: SourcePeriod,
    pub record_count: usize,
    pub total_litres: f64,
}

/// Outcome of one advisory validation rule over the formatted records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCheck {
    pub rule: String,
    /// Number of records violating the rule; 0 means the rule passed.
    pub failing: usize,
}

impl RuleCheck {
    pub fn passed(&self) -> bool {
        self.failing == 0
    }
}

/// Results of all advisory validation rules. Advisory means exactly that:
/// a failing rule is surfaced to the operator but never blocks the export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checks: Vec<RuleCheck>,
}

impl ValidationReport {
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(RuleCheck::passed)
    }
}

/// Why a file contributed zero records without being a hard error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileWarning {
    /// Filename carried no `_YYYYMM` period suffix; file skipped entirely.
    NoPeriodInFilename,
    /// No rows with tax-treatment code 28.
    NoPetroleumRows,
    /// Code-28 rows existed but all had blank litres.
    NoValidLitres,
}

impl std::fmt::Display for FileWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileWarning::NoPeriodInFilename => {
                write!(f, "could not extract period (YYYYMM) from filename")
            }
            FileWarning::NoPetroleumRows => {
                write!(f, "no petroleum rows (tax-treatment code 28) found")
            }
            FileWarning::NoValidLitres => write!(f, "no rows with a valid litres value"),
        }
    }
}

/// Per-file processing status within a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileStatus {
    Ok(FileSummary),
    Skipped { file: String, warning: FileWarning },
    Failed { file: String, error: String },
}

/// Batch-level outcome handed to the display layer: per-file status,
/// totals, distinct periods and the advisory validation results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub files: Vec<FileStatus>,
    pub total_records: usize,
    pub total_litres: f64,
    pub periods: Vec<SourcePeriod>,
    pub validation: ValidationReport,
    pub output_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_label_is_zero_padded() {
        let p = SourcePeriod { year: 2024, month: 1 };
        assert_eq!(p.label(), "01/2024");
    }

    #[test]
    fn formatted_record_fields_are_in_column_order() {
        let r = FormattedRecord {
            c1: "15661465".into(),
            c2: "3".into(),
            c3: "1500.50".into(),
            c4: "45678".into(),
            c5: "2".into(),
            c6: "123456".into(),
            c7: "15012024".into(),
            c8: "01".into(),
            c9: "2024".into(),
        };
        assert_eq!(
            r.fields(),
            ["15661465", "3", "1500.50", "45678", "2", "123456", "15012024", "01", "2024"]
        );
    }

    #[test]
    fn validation_report_all_passed() {
        let report = ValidationReport {
            checks: vec![
                RuleCheck { rule: "a".into(), failing: 0 },
                RuleCheck { rule: "b".into(), failing: 2 },
            ],
        };
        assert!(!report.all_passed());
        assert!(report.checks[0].passed());
    }
}
