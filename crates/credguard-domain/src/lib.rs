//! Pure policy evaluation (no IO).
//!
//! Input: a candidate string pushed in by the caller.
//! Output: the ordered subset of unmet rules + aggregate validity.

#![forbid(unsafe_code)]

pub mod monitor;
pub mod rule;

mod engine;
pub mod rules;

pub use engine::evaluate;
pub use monitor::{Monitor, NotifyPolicy};
pub use rule::{ConfigurationError, Predicate, Rule, RuleSet};

#[cfg(test)]
mod proptest;
