use crate::rule::Rule;
use credguard_types::ids;
use std::sync::Arc;

/// Requires at least `min` characters.
///
/// Length counts Unicode scalar values, not bytes.
pub fn rule(min: usize) -> Rule {
    Rule::new(
        ids::RULE_MIN_LENGTH,
        ids::MSG_MIN_LENGTH,
        Arc::new(move |candidate: &str| candidate.chars().count() >= min),
    )
}
