// SII field formatters: one pure function per logical value, plus the
// assembly from CanonicalRecord to the nine positional output columns.

pub mod amount;
pub mod date;
pub mod rut;

use shared::models::{CanonicalRecord, FormattedRecord};

/// Maximum characters for the IEPD amount (column C4).
pub const IEPD_MAX_DIGITS: usize = 15;
/// Maximum characters for the document number (column C6).
pub const DOCUMENT_NUMBER_MAX_DIGITS: usize = 10;

/// Derive the nine output columns for one record. Formatting never fails;
/// every formatter degrades to its documented fallback.
pub fn format_record(record: &CanonicalRecord) -> FormattedRecord {
    let (c1, c2) = rut::split_rut(&record.seller_tax_id);
    FormattedRecord {
        c1,
        c2,
        c3: amount::format_decimal(&record.litres),
        c4: amount::format_integer(&record.special_tax_amount, IEPD_MAX_DIGITS),
        c5: record.document_type.to_string(),
        c6: amount::format_integer(&record.document_number, DOCUMENT_NUMBER_MAX_DIGITS),
        c7: date::format_date_ddmmyyyy(&record.document_date),
        c8: format!("{:02}", record.registration_month),
        c9: record.registration_year.to_string(),
    }
}

pub fn format_records(records: &[CanonicalRecord]) -> Vec<FormattedRecord> {
    records.iter().map(format_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DOC_TYPE_ELECTRONIC_INVOICE;

    fn sample_record() -> CanonicalRecord {
        CanonicalRecord {
            seller_tax_id: "15661465-3".to_string(),
            litres: "1500.5".to_string(),
            special_tax_amount: "45678".to_string(),
            document_type: DOC_TYPE_ELECTRONIC_INVOICE,
            document_number: "123456".to_string(),
            document_date: "15/01/2024".to_string(),
            registration_month: 1,
            registration_year: 2024,
            source_file: "RCV_COMPRA_REGISTRO_15661465-3_202401.xlsx".to_string(),
        }
    }

    #[test]
    fn test_format_record_all_columns() {
        let formatted = format_record(&sample_record());
        assert_eq!(
            formatted.fields(),
            ["15661465", "3", "1500.50", "45678", "2", "123456", "15012024", "01", "2024"]
        );
    }

    #[test]
    fn test_format_record_degrades_bad_cells() {
        let mut record = sample_record();
        record.litres = "abc".to_string();
        record.special_tax_amount = String::new();
        record.document_date = "???".to_string();
        let formatted = format_record(&record);
        assert_eq!(formatted.c3, "0.00");
        assert_eq!(formatted.c4, "0");
        assert_eq!(formatted.c7, "");
    }
}
