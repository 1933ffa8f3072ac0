// Renders formatted records to the exact byte layout the SII ingests:
// 9 fields joined by `;`, no quoting or escaping ever, no header, CRLF
// after every line including the last, whole stream Latin-1.

use crate::error::EngineError;
use shared::models::FormattedRecord;

const FIELD_NAMES: [&str; 9] = ["C1", "C2", "C3", "C4", "C5", "C6", "C7", "C8", "C9"];

/// Encode the record collection to its final byte stream. Deterministic:
/// the same input always yields byte-identical output.
///
/// A character above U+00FF in any field fails the whole export; bytes are
/// never substituted.
pub fn encode(records: &[FormattedRecord]) -> Result<Vec<u8>, EngineError> {
    let mut out = Vec::new();
    for (line, record) in records.iter().enumerate() {
        for (pos, (name, field)) in FIELD_NAMES.iter().copied().zip(record.fields()).enumerate() {
            if pos > 0 {
                out.push(b';');
            }
            push_latin1(&mut out, field, line + 1, name)?;
        }
        out.extend_from_slice(b"\r\n");
    }
    Ok(out)
}

// Latin-1 is the identity mapping over U+0000..=U+00FF.
fn push_latin1(
    out: &mut Vec<u8>,
    value: &str,
    record: usize,
    field: &'static str,
) -> Result<(), EngineError> {
    for ch in value.chars() {
        let code = ch as u32;
        if code > 0xFF {
            return Err(EngineError::EncodingError { record, field, character: ch });
        }
        out.push(code as u8);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FormattedRecord {
        FormattedRecord {
            c1: "15661465".to_string(),
            c2: "3".to_string(),
            c3: "1500.50".to_string(),
            c4: "45678".to_string(),
            c5: "2".to_string(),
            c6: "123456".to_string(),
            c7: "15012024".to_string(),
            c8: "01".to_string(),
            c9: "2024".to_string(),
        }
    }

    #[test]
    fn test_encode_exact_line_layout() {
        let bytes = encode(&[sample()]).unwrap();
        assert_eq!(bytes, b"15661465;3;1500.50;45678;2;123456;15012024;01;2024\r\n");
    }

    #[test]
    fn test_encode_terminates_every_line_including_last() {
        let bytes = encode(&[sample(), sample()]).unwrap();
        assert!(bytes.ends_with(b"\r\n"));
        assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 2);
    }

    #[test]
    fn test_encode_no_header_and_empty_input() {
        assert_eq!(encode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_is_idempotent() {
        let records = vec![sample(), sample()];
        assert_eq!(encode(&records).unwrap(), encode(&records).unwrap());
    }

    #[test]
    fn test_encode_latin1_characters_pass() {
        let mut record = sample();
        record.c2 = "Ñ".to_string(); // U+00D1, representable in Latin-1
        let bytes = encode(&[record]).unwrap();
        assert!(bytes.contains(&0xD1));
    }

    #[test]
    fn test_encode_non_latin1_is_fatal_and_names_the_field() {
        let mut record = sample();
        record.c2 = "ł".to_string(); // U+0142, outside Latin-1
        let err = encode(&[sample(), record]).unwrap_err();
        match err {
            EngineError::EncodingError { record, field, character } => {
                assert_eq!(record, 2);
                assert_eq!(field, "C2");
                assert_eq!(character, 'ł');
            }
            other => panic!("expected EncodingError, got {other:?}"),
        }
    }

    #[test]
    fn test_encode_never_quotes_fields() {
        let mut record = sample();
        // A stray quote or space in a field is emitted verbatim.
        record.c2 = "\"".to_string();
        let bytes = encode(&[record]).unwrap();
        assert_eq!(&bytes[8..11], b";\";");
    }
}
