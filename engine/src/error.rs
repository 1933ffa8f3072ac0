use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Malformed source schema in '{file}': missing column '{column}'")]
    SourceSchemaError { file: String, column: String },

    #[error("No records to export: every file in the batch was skipped or failed")]
    EmptyBatchError,

    #[error(
        "Field {field} of record {record} contains character '{character}' \
         not representable in Latin-1"
    )]
    EncodingError {
        record: usize,
        field: &'static str,
        character: char,
    },

    // Catch-all for anyhow errors when direct conversion is suitable
    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}

impl EngineError {
    /// Whether this error condemns the whole export rather than one file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EngineError::EncodingError { .. } | EngineError::EmptyBatchError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_error_is_fatal() {
        let err = EngineError::EncodingError { record: 3, field: "C1", character: 'ł' };
        assert!(err.is_fatal());
        assert!(err.to_string().contains("Latin-1"));
    }

    #[test]
    fn schema_error_is_scoped_to_file() {
        let err = EngineError::SourceSchemaError {
            file: "compras_202401.csv".to_string(),
            column: "Litros".to_string(),
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("Litros"));
    }
}
