//! Matcher configuration.
//!
//! Built-in rules cover every field type; a [`MatcherConfig`] only lists the
//! rules that differ. Overrides are partial: any attribute left out keeps the
//! built-in value.
//!
//! ```
//! use field_format::config::MatcherConfig;
//!
//! let config = MatcherConfig::from_json_str(r#"{
//!     "rules": {
//!         "UPC": { "pattern": "^[0-9]{12}$" },
//!         "REFERENCE": { "pattern": "[;]", "polarity": "require_no_match" }
//!     }
//! }"#)?;
//! assert_eq!(config.len(), 2);
//! # Ok::<(), field_format::MatcherError>(())
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MatcherResult;
use crate::field_type::FieldType;
use crate::normalize::Normalizer;
use crate::rule::{PatternRule, Polarity};

/// Per-field-type overrides on top of the built-in rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    /// Overrides keyed by field type identifier.
    pub rules: BTreeMap<FieldType, RuleOverride>,
}

/// Partial replacement of a [`PatternRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalizer: Option<Normalizer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unicode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_insensitive: Option<bool>,
}

impl RuleOverride {
    /// Override that only replaces the pattern.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Sets the polarity.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }

    /// Sets the normalizer.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = Some(normalizer);
        self
    }

    /// Sets the Unicode flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_unicode(mut self, unicode: bool) -> Self {
        self.unicode = Some(unicode);
        self
    }

    /// Sets the case-insensitive flag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = Some(case_insensitive);
        self
    }

    /// Applies the override to a base rule.
    #[must_use]
    pub fn apply(&self, mut rule: PatternRule) -> PatternRule {
        if let Some(pattern) = &self.pattern {
            rule.pattern = pattern.clone().into();
        }
        if let Some(polarity) = self.polarity {
            rule.polarity = polarity;
        }
        if let Some(normalizer) = self.normalizer {
            rule.normalizer = normalizer;
        }
        if let Some(unicode) = self.unicode {
            rule.unicode = unicode;
        }
        if let Some(case_insensitive) = self.case_insensitive {
            rule.case_insensitive = case_insensitive;
        }
        rule
    }
}

impl MatcherConfig {
    /// Creates an empty configuration (built-in rules only).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON configuration document.
    pub fn from_json_str(json: &str) -> MatcherResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds or replaces the override for a field type.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_rule(mut self, field_type: FieldType, rule: RuleOverride) -> Self {
        self.rules.insert(field_type, rule);
        self
    }

    /// Effective rule for a field type: the built-in rule with any override
    /// applied.
    #[must_use]
    pub fn rule_for(&self, field_type: FieldType) -> PatternRule {
        let builtin = PatternRule::builtin(field_type);
        match self.rules.get(&field_type) {
            Some(rule) => rule.apply(builtin),
            None => builtin,
        }
    }

    /// Number of overridden field types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
