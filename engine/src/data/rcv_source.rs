// Ingestion of RCV purchase-register exports.
//
// Spreadsheet parsing proper is an upstream concern; what the pipeline
// needs is "rows as an ordered sequence of named fields". This module
// provides that shape for `;`-delimited exports of the register, resolving
// columns by header name so column order in the source is free. Every
// field is kept as raw text; interpretation happens in the formatters.

use crate::error::EngineError;
use anyhow::anyhow;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};

// Required columns, by the exact header names the RCV export uses.
pub const COL_SELLER_TAX_ID: &str = "RUT Proveedor";
pub const COL_TAX_TREATMENT_CODE: &str = "Codigo Otro Impuesto";
pub const COL_LITRES: &str = "Litros";
pub const COL_TAX_AMOUNT: &str = "Valor Otro Impuesto";
pub const COL_DOCUMENT_NUMBER: &str = "Folio";
pub const COL_DOCUMENT_DATE: &str = "Fecha Docto";

/// One source row, untyped. Ephemeral: exists only until the mapper has
/// filtered and mapped it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSourceRecord {
    pub seller_tax_id: String,
    pub tax_treatment_code: String,
    pub litres: String,
    pub special_tax_amount: String,
    pub document_number: String,
    pub document_date: String,
}

pub struct RcvSourceParser;

impl RcvSourceParser {
    /// Load all rows of one RCV export, in original row order.
    ///
    /// A missing required column is a malformed-source-schema error scoped
    /// to this file; the caller keeps processing the rest of the batch.
    pub fn load_records_from_csv(file_path: &str) -> Result<Vec<RawSourceRecord>, EngineError> {
        let file = File::open(file_path)?;
        Self::parse_reader(BufReader::new(file), file_path)
    }

    pub fn parse_reader<R: Read>(
        reader: R,
        source_name: &str,
    ) -> Result<Vec<RawSourceRecord>, EngineError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true) // ragged rows read as blanks, not errors
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let col_rut = Self::column_index(&headers, COL_SELLER_TAX_ID, source_name)?;
        let col_code = Self::column_index(&headers, COL_TAX_TREATMENT_CODE, source_name)?;
        let col_litres = Self::column_index(&headers, COL_LITRES, source_name)?;
        let col_amount = Self::column_index(&headers, COL_TAX_AMOUNT, source_name)?;
        let col_folio = Self::column_index(&headers, COL_DOCUMENT_NUMBER, source_name)?;
        let col_date = Self::column_index(&headers, COL_DOCUMENT_DATE, source_name)?;

        let mut rows = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| {
                anyhow!("Error reading record at line {} of '{}': {}", idx + 2, source_name, e)
            })?;
            rows.push(RawSourceRecord {
                seller_tax_id: Self::field(&record, col_rut),
                tax_treatment_code: Self::field(&record, col_code),
                litres: Self::field(&record, col_litres),
                special_tax_amount: Self::field(&record, col_amount),
                document_number: Self::field(&record, col_folio),
                document_date: Self::field(&record, col_date),
            });
        }
        Ok(rows)
    }

    fn column_index(
        headers: &StringRecord,
        name: &str,
        source_name: &str,
    ) -> Result<usize, EngineError> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| EngineError::SourceSchemaError {
                file: source_name.to_string(),
                column: name.to_string(),
            })
    }

    fn field(record: &StringRecord, pos: usize) -> String {
        record.get(pos).unwrap_or("").to_string()
    }
}
