use crate::model::CredguardConfigV1;
use crate::presets::{self, CATALOG_ORDER};
use anyhow::Context;
use credguard_domain::rules::{digit, min_length, special, uppercase};
use credguard_domain::{NotifyPolicy, Rule, RuleSet};
use credguard_types::ids;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub min_length: Option<u32>,
}

/// The effective policy the engine evaluates with.
#[derive(Clone, Debug)]
pub struct ResolvedPolicy {
    pub profile: String,
    pub notify: NotifyPolicy,
    pub rules: RuleSet,
}

pub(crate) fn resolve_policy(
    cfg: CredguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedPolicy> {
    let profile = overrides
        .profile
        .or(cfg.profile)
        .unwrap_or_else(|| "standard".to_string());

    let mut draft = presets::preset(&profile);

    if let Some(notify) = cfg.notify {
        if let Some(on_initial) = notify.on_initial {
            draft.notify.on_initial = on_initial;
        }
        if let Some(on_every) = notify.on_every_evaluation {
            draft.notify.on_every_evaluation = on_every;
        }
    }

    // Per-rule overrides. Unknown ids are config typos, not extension points:
    // there is no predicate to attach to them.
    for (rule_id, rc) in cfg.rules.iter() {
        let entry = draft.rules.get_mut(rule_id).with_context(|| {
            format!(
                "unknown rule id: {rule_id} (expected one of {})",
                CATALOG_ORDER.join(", ")
            )
        })?;

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(min) = rc.min {
            if min == 0 {
                anyhow::bail!("min must be at least 1 for {rule_id}");
            }
            entry.min = min as usize;
        }
        if let Some(chars) = rc.chars.as_deref() {
            if chars.is_empty() {
                anyhow::bail!("chars must not be empty for {rule_id}");
            }
            entry.chars = chars.chars().collect();
        }
    }

    if let Some(min) = overrides.min_length {
        if min == 0 {
            anyhow::bail!("min-length override must be at least 1");
        }
        if let Some(entry) = draft.rules.get_mut(ids::RULE_MIN_LENGTH) {
            entry.min = min as usize;
        }
    }

    // Build the rule set in catalog order; config map order never matters.
    let mut rules: Vec<Rule> = Vec::new();
    for id in CATALOG_ORDER {
        let Some(settings) = draft.rules.get(id) else {
            continue;
        };
        if !settings.enabled {
            continue;
        }
        rules.push(match id {
            ids::RULE_UPPERCASE => uppercase::rule(),
            ids::RULE_MIN_LENGTH => min_length::rule(settings.min),
            ids::RULE_DIGIT => digit::rule(),
            ids::RULE_SPECIAL => special::rule(&settings.chars),
            _ => continue,
        });
    }
    let rules = RuleSet::build(rules).context("build rule set")?;

    Ok(ResolvedPolicy {
        profile: draft.profile,
        notify: draft.notify,
        rules,
    })
}
