use crate::rule::Rule;
use credguard_types::ids;
use std::sync::Arc;

/// Requires at least one ASCII uppercase letter (`A`-`Z`).
pub fn rule() -> Rule {
    Rule::new(
        ids::RULE_UPPERCASE,
        ids::MSG_UPPERCASE,
        Arc::new(|candidate: &str| candidate.chars().any(|c| c.is_ascii_uppercase())),
    )
}
