//! Observer shell around `evaluate`.
//!
//! The candidate stays owned by the caller and is pushed in per update; the
//! monitor never polls or subscribes to an input source. Evaluation is
//! synchronous and runs to completion before `update` returns.

use crate::engine::evaluate;
use crate::rule::RuleSet;
use credguard_types::Evaluation;

/// When the registered listener is invoked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifyPolicy {
    /// Notify on the very first evaluation even when it does not change the
    /// observed state (the monitor starts invalid). Matches the original
    /// component's mount behavior when `true`.
    pub on_initial: bool,
    /// Notify on every evaluation, not only on validity transitions.
    pub on_every_evaluation: bool,
}

impl NotifyPolicy {
    pub fn on_transition() -> Self {
        Self {
            on_initial: false,
            on_every_evaluation: false,
        }
    }

    pub fn on_every_evaluation() -> Self {
        Self {
            on_initial: true,
            on_every_evaluation: true,
        }
    }
}

impl Default for NotifyPolicy {
    fn default() -> Self {
        Self {
            on_initial: true,
            on_every_evaluation: false,
        }
    }
}

type ValidityListener = Box<dyn FnMut(bool)>;

/// Re-evaluates on every candidate change and reports validity transitions.
///
/// Holds no mutable state between updates beyond the latest evaluation; the
/// rule set itself is immutable. Two externally meaningful states exist,
/// valid and invalid, and every candidate maps to exactly one of them.
pub struct Monitor {
    rules: RuleSet,
    policy: NotifyPolicy,
    listener: Option<ValidityListener>,
    latest: Option<Evaluation>,
}

impl Monitor {
    pub fn new(rules: RuleSet) -> Self {
        Self::with_policy(rules, NotifyPolicy::default())
    }

    pub fn with_policy(rules: RuleSet, policy: NotifyPolicy) -> Self {
        Self {
            rules,
            policy,
            listener: None,
            latest: None,
        }
    }

    /// Register the validity listener. One listener per monitor; registering
    /// again replaces the previous one.
    pub fn on_validity_change(&mut self, listener: impl FnMut(bool) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Push the current candidate and re-evaluate.
    ///
    /// Invokes the listener at most once per call: on a validity transition,
    /// on the first evaluation if the policy says so, or unconditionally when
    /// `on_every_evaluation` is set. The monitor starts in the invalid state
    /// (`is_valid` is false before the first update), so a first evaluation
    /// that comes out valid is a transition and notifies even when
    /// `on_initial` is off. Without a listener the evaluation still runs so
    /// unmet-rule data stays available.
    pub fn update(&mut self, candidate: &str) -> &Evaluation {
        let next = evaluate(candidate, &self.rules);

        let first = self.latest.is_none();
        let prev_valid = self.latest.as_ref().is_some_and(|prev| prev.valid);
        let notify = self.policy.on_every_evaluation
            || prev_valid != next.valid
            || (first && self.policy.on_initial);
        if notify && let Some(listener) = self.listener.as_mut() {
            listener(next.valid);
        }

        self.latest.insert(next)
    }

    /// The most recent evaluation, if any candidate was pushed yet.
    pub fn latest(&self) -> Option<&Evaluation> {
        self.latest.as_ref()
    }

    /// Current validity; `false` before the first update.
    pub fn is_valid(&self) -> bool {
        self.latest.as_ref().is_some_and(Evaluation::is_valid)
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
