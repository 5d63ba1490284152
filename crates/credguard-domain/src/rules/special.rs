use crate::rule::Rule;
use credguard_types::ids;
use std::sync::Arc;

/// Requires at least one of the given special characters.
pub fn rule(chars: &[char]) -> Rule {
    let accepted: Vec<char> = chars.to_vec();
    Rule::new(
        ids::RULE_SPECIAL,
        ids::MSG_SPECIAL,
        Arc::new(move |candidate: &str| candidate.chars().any(|c| accepted.contains(&c))),
    )
}
