use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// A rule predicate: `true` means "requirement satisfied".
///
/// Predicates must be pure (deterministic, side-effect free) and total over
/// any string, including the empty string.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single named requirement a candidate must satisfy.
#[derive(Clone)]
pub struct Rule {
    id: String,
    description: String,
    predicate: Predicate,
}

impl Rule {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        predicate: Predicate,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            predicate,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Opaque message key; resolved by the presentation layer, never here.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_met(&self, candidate: &str) -> bool {
        (self.predicate)(candidate)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Raised only at rule set construction time. Fatal to construction; fix the
/// policy definition rather than catching it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("duplicate rule id: {id}")]
    DuplicateRuleId { id: String },
}

/// An immutable ordered policy.
///
/// Order is significant: it determines the order in which unmet requirements
/// are reported. Changing policy means building a new rule set.
#[derive(Clone, Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build a rule set from an ordered list of rules.
    ///
    /// Rule ids must be unique within the set.
    pub fn build(rules: Vec<Rule>) -> Result<Self, ConfigurationError> {
        let mut seen = BTreeSet::new();
        for rule in &rules {
            if !seen.insert(rule.id()) {
                return Err(ConfigurationError::DuplicateRuleId {
                    id: rule.id().to_string(),
                });
            }
        }
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}
