use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifiers for credguard artifacts.
pub const SCHEMA_REPORT_V1: &str = "credguard.report.v1";
pub const SCHEMA_CONFIG_V1: &str = "credguard.config.v1";

/// A rule the current candidate does not satisfy.
///
/// Carries rule metadata only, never the candidate itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnmetRule {
    /// Stable rule identifier (e.g. `credential.uppercase`).
    pub id: String,
    /// Opaque message key for the requirement text.
    pub description: String,
}

/// Result of evaluating one candidate against a rule set.
///
/// `unmet` preserves rule set declaration order. Created fresh per
/// evaluation and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Evaluation {
    pub unmet: Vec<UnmetRule>,
    /// True iff `unmet` is empty. Derived at construction.
    pub valid: bool,
}

impl Evaluation {
    pub fn new(unmet: Vec<UnmetRule>) -> Self {
        let valid = unmet.is_empty();
        Self { unmet, valid }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Ids of the unmet rules, in rule set order.
    pub fn unmet_ids(&self) -> Vec<&str> {
        self.unmet.iter().map(|r| r.id.as_str()).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Outer shape of the report the CLI emits for a single evaluation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub evaluated_at: OffsetDateTime,
    /// Profile the rule set was resolved from.
    pub profile: String,
    pub valid: bool,
    pub unmet: Vec<UnmetRule>,
}
