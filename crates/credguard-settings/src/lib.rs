//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CredguardConfigV1, NotifyConfig, RuleConfig};
pub use resolve::{Overrides, ResolvedPolicy};

/// Parse `credguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CredguardConfigV1> {
    let cfg: CredguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective policy used by the engine (profile + overrides + per-rule config).
pub fn resolve_policy(
    cfg: CredguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedPolicy> {
    resolve::resolve_policy(cfg, overrides)
}
