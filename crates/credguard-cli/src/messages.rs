//! Message registry for rule ids and description keys.
//!
//! This is the presentation side of the localization boundary: everywhere
//! below the CLI a description is an opaque key. Only here does it become
//! English text.

use credguard_types::ids;

/// Resolved text for a rule or description key.
#[derive(Debug, Clone)]
pub struct Message {
    /// Short name of the rule.
    pub title: &'static str,
    /// The requirement, phrased for display next to an input field.
    pub requirement: &'static str,
    /// A candidate that satisfies the rule.
    pub example: &'static str,
}

/// Look up a message by rule id or description key.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_message(identifier: &str) -> Option<Message> {
    match identifier {
        ids::RULE_UPPERCASE | ids::MSG_UPPERCASE => Some(Message {
            title: "Uppercase Letter",
            requirement: "at least one uppercase letter (A-Z)",
            example: "Passphrase",
        }),
        ids::RULE_MIN_LENGTH | ids::MSG_MIN_LENGTH => Some(Message {
            title: "Minimum Length",
            requirement: "at least 12 characters",
            example: "abcdefghijkl",
        }),
        ids::RULE_DIGIT | ids::MSG_DIGIT => Some(Message {
            title: "Digit",
            requirement: "at least one digit (0-9)",
            example: "passw0rd",
        }),
        ids::RULE_SPECIAL | ids::MSG_SPECIAL => Some(Message {
            title: "Special Character",
            requirement: "at least one of the characters . * -",
            example: "pass.word",
        }),
        _ => None,
    }
}

/// List all known rule ids.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_UPPERCASE,
        ids::RULE_MIN_LENGTH,
        ids::RULE_DIGIT,
        ids::RULE_SPECIAL,
    ]
}

/// Render a message the way `credguard explain` prints it.
pub fn format_message(identifier: &str, message: &Message) -> String {
    format!(
        "{}\n\nidentifier: {}\nrequires:   {}\nexample:    {}\n",
        message.title, identifier, message.requirement, message.example
    )
}

/// Render the not-found hint with the known identifiers.
pub fn format_not_found(identifier: &str) -> String {
    let known = all_rule_ids().join(", ");
    format!("unknown identifier: {identifier}\nknown rule ids: {known}\n")
}
