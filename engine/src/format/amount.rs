// Numeric output formatters for columns C3 (litres), C4 (IEPD) and
// C6 (document number).

/// Parse a raw cell as a number; blank or non-numeric cells yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Fixed-point decimal with exactly 2 fractional digits and `.` as the
/// separator, no thousands grouping. Missing or non-numeric input degrades
/// to `"0.00"` rather than failing: one bad cell must never block the
/// export.
///
/// The SII layout documents 12 integer digits for this field but the
/// reference pipeline never truncated the integer portion; behavior kept
/// as-is (see DESIGN.md).
pub fn format_decimal(raw: &str) -> String {
    match parse_number(raw) {
        Some(n) => format!("{:.2}", n),
        None => "0.00".to_string(),
    }
}

/// Integer field: fractional part truncated toward zero, then the decimal
/// *string* is truncated to `max_digits` characters. Missing or
/// non-numeric input degrades to `"0"`.
pub fn format_integer(raw: &str, max_digits: usize) -> String {
    match parse_number(raw) {
        Some(n) => {
            let digits = (n.trunc() as i128).to_string();
            digits.chars().take(max_digits).collect()
        }
        None => "0".to_string(),
    }
}
