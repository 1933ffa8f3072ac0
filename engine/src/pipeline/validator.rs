// Advisory structural checks over the formatted records.
//
// Each rule reports a count of offending records. A failing rule never
// blocks the export; the operator sees the counts before downloading.

use shared::models::{FormattedRecord, RuleCheck, ValidationReport};

pub const RULE_C1_NON_EMPTY: &str = "C1 (RUT numeric part) non-empty";
pub const RULE_C7_NON_EMPTY: &str = "C7 (document date) non-empty";
pub const RULE_C7_LENGTH: &str = "C7 (document date) length = 8";
pub const RULE_C1_LENGTH: &str = "C1 (RUT numeric part) length >= 7";

pub fn validate(records: &[FormattedRecord]) -> ValidationReport {
    let rules: [(&str, fn(&FormattedRecord) -> bool); 4] = [
        (RULE_C1_NON_EMPTY, |r| r.c1.is_empty()),
        (RULE_C7_NON_EMPTY, |r| r.c7.is_empty()),
        (RULE_C7_LENGTH, |r| r.c7.chars().count() != 8),
        // Proxy for "looks like a real RUT"; the check digit itself is
        // never verified.
        (RULE_C1_LENGTH, |r| r.c1.chars().count() < 7),
    ];

    ValidationReport {
        checks: rules
            .iter()
            .map(|(rule, offends)| RuleCheck {
                rule: rule.to_string(),
                failing: records.iter().filter(|r| offends(r)).count(),
            })
            .collect(),
    }
}
