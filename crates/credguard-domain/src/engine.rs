use crate::rule::RuleSet;
use credguard_types::{Evaluation, UnmetRule};

/// Evaluate a candidate against a rule set.
///
/// Every rule runs in declaration order regardless of earlier failures; the
/// unmet subset keeps that order. Total over any string, empty included, and
/// free of side effects.
pub fn evaluate(candidate: &str, rules: &RuleSet) -> Evaluation {
    let unmet: Vec<UnmetRule> = rules
        .iter()
        .filter(|rule| !rule.is_met(candidate))
        .map(|rule| UnmetRule {
            id: rule.id().to_string(),
            description: rule.description().to_string(),
        })
        .collect();

    Evaluation::new(unmet)
}
