//! Stable identifiers for rules and their description keys.
//!
//! `rule id` is a dotted namespace. Description keys are opaque message keys
//! resolved by the presentation layer; the engine never interprets them.

// Rules
pub const RULE_UPPERCASE: &str = "credential.uppercase";
pub const RULE_MIN_LENGTH: &str = "credential.min_length";
pub const RULE_DIGIT: &str = "credential.digit";
pub const RULE_SPECIAL: &str = "credential.special";

// Description keys: credential.uppercase
pub const MSG_UPPERCASE: &str = "rule.credential.uppercase";

// Description keys: credential.min_length
pub const MSG_MIN_LENGTH: &str = "rule.credential.min_length";

// Description keys: credential.digit
pub const MSG_DIGIT: &str = "rule.credential.digit";

// Description keys: credential.special
pub const MSG_SPECIAL: &str = "rule.credential.special";
