// Maps the raw rows of one source file into CanonicalRecords.
//
// The registration period is an explicit parameter: deriving it from the
// filename is the caller's concern, which keeps this step pure and
// testable with literal inputs.

use crate::data::rcv_source::RawSourceRecord;
use shared::models::{
    CanonicalRecord, FileWarning, SourcePeriod, DOC_TYPE_ELECTRONIC_INVOICE, PETROLEUM_TAX_CODE,
};

/// Mapping outcome for one file. Zero records is not an error; the warning
/// tells the operator which filter emptied the set.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedFile {
    pub records: Vec<CanonicalRecord>,
    pub warning: Option<FileWarning>,
}

/// True when the tax-treatment cell denotes petroleum/diesel (code 28).
/// Cells arrive as text and spreadsheets render integers as "28" or
/// "28.0", so the comparison is numeric.
fn is_petroleum(code: &str) -> bool {
    code.trim()
        .parse::<f64>()
        .map_or(false, |n| n == PETROLEUM_TAX_CODE as f64)
}

/// Filter one file's rows to qualifying purchases and map them, keeping
/// original row order. `document_type` is forced to 2 (electronic
/// invoice): the filing has no representation for any other type.
pub fn map_file(
    rows: &[RawSourceRecord],
    period: SourcePeriod,
    source_file: &str,
) -> MappedFile {
    let petroleum: Vec<&RawSourceRecord> =
        rows.iter().filter(|row| is_petroleum(&row.tax_treatment_code)).collect();
    if petroleum.is_empty() {
        return MappedFile { records: Vec::new(), warning: Some(FileWarning::NoPetroleumRows) };
    }

    let records: Vec<CanonicalRecord> = petroleum
        .into_iter()
        .filter(|row| !row.litres.trim().is_empty())
        .map(|row| CanonicalRecord {
            seller_tax_id: row.seller_tax_id.clone(),
            litres: row.litres.clone(),
            special_tax_amount: row.special_tax_amount.clone(),
            document_type: DOC_TYPE_ELECTRONIC_INVOICE,
            document_number: row.document_number.clone(),
            document_date: row.document_date.clone(),
            registration_month: period.month,
            registration_year: period.year,
            source_file: source_file.to_string(),
        })
        .collect();

    if records.is_empty() {
        MappedFile { records, warning: Some(FileWarning::NoValidLitres) }
    } else {
        MappedFile { records, warning: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, litres: &str) -> RawSourceRecord {
        RawSourceRecord {
            seller_tax_id: "15661465-3".to_string(),
            tax_treatment_code: code.to_string(),
            litres: litres.to_string(),
            special_tax_amount: "45678".to_string(),
            document_number: "123456".to_string(),
            document_date: "15/01/2024".to_string(),
        }
    }

    const PERIOD: SourcePeriod = SourcePeriod { year: 2024, month: 1 };

    #[test]
    fn test_map_file_keeps_only_code_28_with_litres() {
        let rows = vec![row("28", "1500.5"), row("14", "900"), row("28", ""), row("28.0", "10")];
        let mapped = map_file(&rows, PERIOD, "a.csv");
        assert!(mapped.warning.is_none());
        assert_eq!(mapped.records.len(), 2);
        assert!(mapped
            .records
            .iter()
            .all(|r| r.document_type == DOC_TYPE_ELECTRONIC_INVOICE));
        assert_eq!(mapped.records[0].litres, "1500.5");
        assert_eq!(mapped.records[1].litres, "10");
    }

    #[test]
    fn test_map_file_carries_period_and_provenance() {
        let mapped = map_file(&[row("28", "1500.5")], PERIOD, "a.csv");
        let record = &mapped.records[0];
        assert_eq!(record.registration_month, 1);
        assert_eq!(record.registration_year, 2024);
        assert_eq!(record.source_file, "a.csv");
    }

    #[test]
    fn test_map_file_no_petroleum_rows() {
        let mapped = map_file(&[row("14", "1500.5")], PERIOD, "a.csv");
        assert!(mapped.records.is_empty());
        assert_eq!(mapped.warning, Some(FileWarning::NoPetroleumRows));
    }

    #[test]
    fn test_map_file_no_valid_litres() {
        let mapped = map_file(&[row("28", ""), row("28", "   ")], PERIOD, "a.csv");
        assert!(mapped.records.is_empty());
        assert_eq!(mapped.warning, Some(FileWarning::NoValidLitres));
    }

    #[test]
    fn test_map_file_empty_input() {
        let mapped = map_file(&[], PERIOD, "a.csv");
        assert_eq!(mapped.warning, Some(FileWarning::NoPetroleumRows));
    }
}
