//! Public facade over the credguard evaluation engine and protocol types.
//!
//! Embedding consumers depend on this crate; the CLI and settings layers
//! depend on the underlying crates directly.

#![forbid(unsafe_code)]

pub use credguard_domain::{
    evaluate, rules, ConfigurationError, Monitor, NotifyPolicy, Predicate, Rule, RuleSet,
};
pub use credguard_types::{ids, Evaluation, UnmetRule};
