// Chilean RUT handling for output columns C1/C2.
//
// Source cells carry the tax ID in whatever shape the upstream system
// produced: "12345678-9", "12.345.678-9", "123456785", sometimes blank.
// The SII layout wants the numeric part and the check digit as separate
// positional fields, so this splits rather than validates; the check digit
// is never verified algorithmically.

/// Split a raw taxpayer identifier into `(numeric_part, check_digit)`.
///
/// With exactly one `-`, the left side keeps only its digits and the right
/// side (trimmed, upper-cased) becomes the check digit, which may be the
/// literal `K`. Without a single hyphen, everything that is not a digit or
/// `K` is stripped from the whole string and the last remaining character
/// is taken as the check digit. The numeric part is capped at 8 characters
/// and the check digit at 1.
///
/// Empty input, or input with nothing left after stripping, yields
/// `("", "")`; the validator flags that downstream.
pub fn split_rut(raw: &str) -> (String, String) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (String::new(), String::new());
    }

    let parts: Vec<&str> = trimmed.split('-').collect();
    let (num, dv) = if parts.len() == 2 {
        let num: String = parts[0].chars().filter(char::is_ascii_digit).collect();
        let dv = parts[1].trim().to_uppercase();
        (num, dv)
    } else {
        // No hyphen (or more than one): strip to digits and K over the
        // whole string, last character is the check digit.
        let cleaned: String = trimmed
            .to_uppercase()
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == 'K')
            .collect();
        if cleaned.chars().count() > 1 {
            let mut chars = cleaned.chars();
            let dv = chars.next_back().map(String::from).unwrap_or_default();
            (chars.collect(), dv)
        } else {
            (cleaned, String::new())
        }
    };

    (num.chars().take(8).collect(), dv.chars().take(1).collect())
}
