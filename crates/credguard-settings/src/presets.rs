use credguard_domain::rules::{DEFAULT_MIN_LENGTH, DEFAULT_SPECIAL_CHARS};
use credguard_domain::NotifyPolicy;
use credguard_types::ids;
use std::collections::BTreeMap;

/// Canonical rule order, regardless of config map order.
pub(crate) const CATALOG_ORDER: [&str; 4] = [
    ids::RULE_UPPERCASE,
    ids::RULE_MIN_LENGTH,
    ids::RULE_DIGIT,
    ids::RULE_SPECIAL,
];

/// Per-rule settings after preset selection, before config overrides.
///
/// `min` is only read by `credential.min_length`, `chars` only by
/// `credential.special`; the other rules ignore them.
#[derive(Clone, Debug)]
pub(crate) struct RuleSettings {
    pub enabled: bool,
    pub min: usize,
    pub chars: Vec<char>,
}

impl RuleSettings {
    pub(crate) fn enabled() -> Self {
        Self {
            enabled: true,
            min: DEFAULT_MIN_LENGTH,
            chars: DEFAULT_SPECIAL_CHARS.to_vec(),
        }
    }

    pub(crate) fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::enabled()
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct PolicyDraft {
    pub profile: String,
    pub notify: NotifyPolicy,
    pub rules: BTreeMap<String, RuleSettings>,
}

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into config.
pub(crate) fn preset(profile: &str) -> PolicyDraft {
    match profile {
        "minimal" => minimal_profile(),
        // default
        _ => standard_profile(),
    }
}

/// The exact four-rule default credential policy.
fn standard_profile() -> PolicyDraft {
    let mut rules = BTreeMap::new();
    for id in CATALOG_ORDER {
        rules.insert(id.to_string(), RuleSettings::enabled());
    }
    PolicyDraft {
        profile: "standard".to_string(),
        notify: NotifyPolicy::default(),
        rules,
    }
}

/// Length requirement only.
fn minimal_profile() -> PolicyDraft {
    let mut rules = BTreeMap::new();
    for id in CATALOG_ORDER {
        let settings = if id == ids::RULE_MIN_LENGTH {
            RuleSettings::enabled()
        } else {
            RuleSettings::disabled()
        };
        rules.insert(id.to_string(), settings);
    }
    PolicyDraft {
        profile: "minimal".to_string(),
        notify: NotifyPolicy::default(),
        rules,
    }
}
