use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `credguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CredguardConfigV1 {
    /// Optional schema string for tooling (`credguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile the rule set starts from (`standard` or `minimal`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When the validity listener fires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<NotifyConfig>,

    /// Map of rule id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NotifyConfig {
    /// Notify on the very first evaluation (default true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_initial: Option<bool>,

    /// Notify on every evaluation instead of only on transitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_every_evaluation: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Minimum length (only meaningful for `credential.min_length`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,

    /// Accepted special characters (only meaningful for `credential.special`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars: Option<String>,
}
