use crate::rule::Rule;
use credguard_types::ids;
use std::sync::Arc;

/// Requires at least one ASCII digit (`0`-`9`).
pub fn rule() -> Rule {
    Rule::new(
        ids::RULE_DIGIT,
        ids::MSG_DIGIT,
        Arc::new(|candidate: &str| candidate.chars().any(|c| c.is_ascii_digit())),
    )
}
