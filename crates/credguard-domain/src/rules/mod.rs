//! Builtin rule catalog.
//!
//! One file per rule. `default_policy` wires them into the canonical
//! four-rule credential policy; rule order here is the reporting order.

use crate::rule::RuleSet;

pub mod digit;
pub mod min_length;
pub mod special;
pub mod uppercase;


/// Minimum candidate length required by the default policy.
pub const DEFAULT_MIN_LENGTH: usize = 12;

/// Special characters accepted by the default policy.
pub const DEFAULT_SPECIAL_CHARS: [char; 3] = ['.', '*', '-'];

/// The default credential policy: uppercase, length >= 12, digit, special.
///
/// Rule ids in the catalog are unique by construction, so building the set
/// cannot fail.
pub fn default_policy() -> RuleSet {
    RuleSet::build(vec![
        uppercase::rule(),
        min_length::rule(DEFAULT_MIN_LENGTH),
        digit::rule(),
        special::rule(&DEFAULT_SPECIAL_CHARS),
    ])
    .unwrap_or_else(|err| unreachable!("builtin rule ids collide: {err}"))
}
