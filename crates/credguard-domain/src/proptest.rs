//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Validity deriving from the unmet subset
//! - Evaluation determinism (no hidden state)
//! - Unmet-rule ordering following rule set declaration order
//! - Monitor notification counts matching validity transitions

use crate::engine::evaluate;
use crate::monitor::{Monitor, NotifyPolicy};
use crate::rule::{ConfigurationError, Rule, RuleSet};
use crate::rules::default_policy;
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for arbitrary candidates, including empty and non-ASCII strings.
fn arb_candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        any::<String>(),
        prop::string::string_regex("[a-zA-Z0-9.*-]{0,24}").unwrap(),
    ]
}

/// Shapes of simple pure predicates (kept `Debug`-able for proptest).
#[derive(Clone, Copy, Debug)]
enum PredicateKind {
    AlwaysMet,
    NeverMet,
    HasDigit,
    MinLen(usize),
}

impl PredicateKind {
    fn into_predicate(self) -> Arc<dyn Fn(&str) -> bool + Send + Sync> {
        match self {
            PredicateKind::AlwaysMet => Arc::new(|_: &str| true),
            PredicateKind::NeverMet => Arc::new(|_: &str| false),
            PredicateKind::HasDigit => {
                Arc::new(|c: &str| c.chars().any(|ch| ch.is_ascii_digit()))
            }
            PredicateKind::MinLen(n) => Arc::new(move |c: &str| c.chars().count() >= n),
        }
    }
}

fn arb_predicate_kind() -> impl Strategy<Value = PredicateKind> {
    prop_oneof![
        Just(PredicateKind::AlwaysMet),
        Just(PredicateKind::NeverMet),
        Just(PredicateKind::HasDigit),
        (0usize..16).prop_map(PredicateKind::MinLen),
    ]
}

/// Strategy for a rule set with unique ids and arbitrary predicates.
fn arb_rule_set() -> impl Strategy<Value = RuleSet> {
    prop::collection::btree_set("[a-z][a-z0-9_.]{0,15}", 0..8).prop_flat_map(|ids| {
        let ids: Vec<String> = ids.into_iter().collect();
        let count = ids.len();
        (
            Just(ids),
            prop::collection::vec(arb_predicate_kind(), count..=count),
        )
            .prop_map(|(ids, kinds)| {
                let rules = ids
                    .into_iter()
                    .zip(kinds)
                    .map(|(id, kind)| {
                        let description = format!("rule.{id}");
                        Rule::new(id, description, kind.into_predicate())
                    })
                    .collect();
                RuleSet::build(rules).expect("generated ids are unique")
            })
    })
}

// ============================================================================
// Property tests: evaluation invariants
// ============================================================================

proptest! {
    /// For all candidates, validity holds exactly when no rule is unmet.
    #[test]
    fn validity_iff_no_unmet_rules(candidate in arb_candidate(), rules in arb_rule_set()) {
        let eval = evaluate(&candidate, &rules);
        prop_assert_eq!(eval.is_valid(), eval.unmet.is_empty());
    }

    /// Evaluating twice with the same rule set yields identical results.
    #[test]
    fn evaluation_is_deterministic(candidate in arb_candidate(), rules in arb_rule_set()) {
        let first = evaluate(&candidate, &rules);
        let second = evaluate(&candidate, &rules);
        prop_assert_eq!(first, second);
    }

    /// Unmet rules preserve rule set declaration order for any input.
    #[test]
    fn unmet_preserves_declaration_order(candidate in arb_candidate(), rules in arb_rule_set()) {
        let eval = evaluate(&candidate, &rules);

        let declared: Vec<&str> = rules.iter().map(Rule::id).collect();
        let expected: Vec<&str> = declared
            .iter()
            .copied()
            .filter(|id| eval.unmet.iter().any(|u| u.id == *id))
            .collect();
        let actual: Vec<&str> = eval.unmet.iter().map(|u| u.id.as_str()).collect();

        prop_assert_eq!(actual, expected);
    }

    /// The unmet subset never repeats a rule and never invents one.
    #[test]
    fn unmet_is_a_subset_of_the_rule_set(candidate in arb_candidate(), rules in arb_rule_set()) {
        let eval = evaluate(&candidate, &rules);
        let declared: BTreeSet<&str> = rules.iter().map(Rule::id).collect();

        let mut seen = BTreeSet::new();
        for unmet in &eval.unmet {
            prop_assert!(declared.contains(unmet.id.as_str()));
            prop_assert!(seen.insert(unmet.id.as_str()), "duplicate unmet rule {}", unmet.id);
        }
    }

    /// Default policy: every candidate maps to exactly one of the two states.
    #[test]
    fn default_policy_is_total(candidate in arb_candidate()) {
        let eval = evaluate(&candidate, &default_policy());
        prop_assert!(eval.unmet.len() <= 4);
        prop_assert_eq!(eval.is_valid(), eval.unmet.is_empty());
    }
}

// ============================================================================
// Property tests: rule set construction
// ============================================================================

proptest! {
    /// Any duplicated id fails construction, whatever the position.
    #[test]
    fn duplicate_ids_always_fail(
        id in "[a-z][a-z0-9_.]{0,15}",
        fillers in prop::collection::btree_set("[a-z][a-z0-9_.]{0,15}", 0..5),
        insert_at in 0usize..6,
    ) {
        let always: Arc<dyn Fn(&str) -> bool + Send + Sync> = Arc::new(|_: &str| true);

        let mut rules: Vec<Rule> = fillers
            .iter()
            .filter(|f| *f != &id)
            .map(|f| Rule::new(f.clone(), format!("rule.{f}"), Arc::clone(&always)))
            .collect();

        let at = insert_at.min(rules.len());
        rules.insert(at, Rule::new(id.clone(), format!("rule.{id}"), Arc::clone(&always)));
        rules.push(Rule::new(id.clone(), format!("rule.{id}"), Arc::clone(&always)));

        let err = RuleSet::build(rules).unwrap_err();
        prop_assert_eq!(err, ConfigurationError::DuplicateRuleId { id });
    }
}

// ============================================================================
// Property tests: monitor notification contract
// ============================================================================

proptest! {
    /// Under the transition-only policy the number of notifications equals
    /// the number of validity transitions across the update sequence, with
    /// the monitor starting in the invalid state.
    #[test]
    fn notifications_match_transitions(candidates in prop::collection::vec(arb_candidate(), 1..20)) {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&notifications);
        let mut monitor = Monitor::with_policy(default_policy(), NotifyPolicy::on_transition());
        monitor.on_validity_change(move |valid| sink.borrow_mut().push(valid));

        let mut expected = Vec::new();
        let mut prev = false;
        let policy = default_policy();
        for candidate in &candidates {
            let valid = evaluate(candidate, &policy).is_valid();
            if valid != prev {
                expected.push(valid);
            }
            prev = valid;
        }

        for candidate in &candidates {
            monitor.update(candidate);
        }

        prop_assert_eq!(&*notifications.borrow(), &expected);
    }

    /// The monitor's view always agrees with a direct evaluation.
    #[test]
    fn monitor_agrees_with_direct_evaluation(candidates in prop::collection::vec(arb_candidate(), 1..10)) {
        let mut monitor = Monitor::new(default_policy());
        let policy = default_policy();

        for candidate in &candidates {
            let from_monitor = monitor.update(candidate).clone();
            let direct = evaluate(candidate, &policy);
            prop_assert_eq!(from_monitor, direct);
        }
    }
}
