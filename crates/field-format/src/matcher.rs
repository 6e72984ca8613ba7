//! The type matcher: field type → rule → verdict.
//!
//! ```text
//! value ─▶ empty? ─yes─▶ valid
//!            │no
//!            ▼
//!        normalize(rule) ─▶ regex(rule) ─▶ polarity(rule) ─▶ valid / invalid
//! ```
//!
//! The rule table is compiled once and only read afterwards, so a single
//! [`TypeMatcher`] can be shared by any number of threads without locking.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::MatcherConfig;
use crate::error::{MatcherError, MatcherResult};
use crate::field_type::FieldType;
use crate::rule::PatternRule;
use crate::value::AsFieldValue;

static GLOBAL: LazyLock<TypeMatcher> = LazyLock::new(|| {
    TypeMatcher::new().expect("built-in field type patterns must compile")
});

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of checking one value against one field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome<'a> {
    /// Whether the value conforms to its field type.
    pub valid: bool,
    /// The value after normalization; this is what a violation message
    /// should show. Empty when the value was absent.
    pub normalized_value: Cow<'a, str>,
}

impl ValidationOutcome<'_> {
    fn absent() -> Self {
        Self {
            valid: true,
            normalized_value: Cow::Borrowed(""),
        }
    }

    /// Detaches the outcome from the validated value.
    #[must_use]
    pub fn into_owned(self) -> ValidationOutcome<'static> {
        ValidationOutcome {
            valid: self.valid,
            normalized_value: Cow::Owned(self.normalized_value.into_owned()),
        }
    }
}

// ============================================================================
// TYPE MATCHER
// ============================================================================

#[derive(Debug)]
struct CompiledRule {
    rule: PatternRule,
    regex: Regex,
}

/// Validates string values against field types.
///
/// # Examples
///
/// ```
/// use field_format::{FieldType, TypeMatcher};
///
/// let matcher = TypeMatcher::global();
///
/// assert!(matcher.is_valid(FieldType::PostCode, Some("SW1A 1AA")));
/// assert!(!matcher.is_valid(FieldType::Message, Some("hi <b>")));
/// assert!(matcher.is_valid(FieldType::Url, None));
///
/// let outcome = matcher.validate(FieldType::Name, Some(r"O\'Brien"));
/// assert!(outcome.valid);
/// assert_eq!(outcome.normalized_value, "O'Brien");
/// ```
#[derive(Debug)]
pub struct TypeMatcher {
    /// One entry per field type, indexed by [`FieldType::index`].
    rules: Box<[CompiledRule]>,
}

impl TypeMatcher {
    /// Compiles the built-in rule table.
    pub fn new() -> MatcherResult<Self> {
        Self::from_config(&MatcherConfig::default())
    }

    /// Compiles the built-in rule table with `config` overrides applied.
    ///
    /// Fails with [`MatcherError::Pattern`] if any effective pattern does not
    /// compile; a broken rule is never silently treated as "no match".
    pub fn from_config(config: &MatcherConfig) -> MatcherResult<Self> {
        let rules = FieldType::ALL
            .iter()
            .map(|&field_type| {
                let rule = config.rule_for(field_type);
                let regex = rule
                    .compile()
                    .map_err(|source| MatcherError::Pattern { field_type, source })?;
                Ok(CompiledRule { rule, regex })
            })
            .collect::<MatcherResult<Vec<_>>>()?;

        debug!(
            rules = rules.len(),
            overrides = config.len(),
            "compiled field type rule table"
        );

        Ok(Self {
            rules: rules.into_boxed_slice(),
        })
    }

    /// Process-wide matcher with the built-in rules, compiled on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    fn compiled(&self, field_type: FieldType) -> &CompiledRule {
        &self.rules[field_type.index()]
    }

    /// Effective rule for a field type.
    #[must_use]
    pub fn rule(&self, field_type: FieldType) -> &PatternRule {
        &self.compiled(field_type).rule
    }

    /// Normalizes a value the way `field_type` does before matching.
    #[must_use]
    pub fn normalize<'a>(&self, field_type: FieldType, value: &'a str) -> Cow<'a, str> {
        self.rule(field_type).normalizer.apply(value)
    }

    /// Returns whether `value` conforms to `field_type`.
    ///
    /// Absent and empty values are always valid.
    #[must_use]
    pub fn is_valid(&self, field_type: FieldType, value: Option<&str>) -> bool {
        self.validate(field_type, value).valid
    }

    /// Checks `value` against `field_type` and returns the verdict together
    /// with the normalized value.
    #[must_use]
    pub fn validate<'a>(&self, field_type: FieldType, value: Option<&'a str>) -> ValidationOutcome<'a> {
        let value = match value {
            Some(value) if !value.is_empty() => value,
            _ => return ValidationOutcome::absent(),
        };

        let CompiledRule { rule, regex } = self.compiled(field_type);
        let normalized = rule.normalizer.apply(value);
        let matched = regex.is_match(&normalized);
        let valid = rule.polarity.apply(matched);

        trace!(
            field_type = %field_type,
            polarity = ?rule.polarity,
            matched,
            valid,
            "evaluated field format"
        );

        ValidationOutcome {
            valid,
            normalized_value: normalized,
        }
    }

    /// Checks an untyped value.
    ///
    /// Fails with [`MatcherError::InvalidInput`] when the value is not
    /// string-shaped, which is distinct from a value of the wrong format.
    pub fn check<'a, V>(&self, field_type: FieldType, value: &'a V) -> MatcherResult<ValidationOutcome<'a>>
    where
        V: AsFieldValue + ?Sized,
    {
        let value = value.as_field_value()?;
        Ok(self.validate(field_type, value))
    }

    /// Checks an untyped value against a field type given by identifier.
    ///
    /// Fails with [`MatcherError::UnknownType`], listing every valid
    /// identifier, when `type_name` is not one of them.
    pub fn validate_named<'a, V>(&self, type_name: &str, value: &'a V) -> MatcherResult<ValidationOutcome<'a>>
    where
        V: AsFieldValue + ?Sized,
    {
        let field_type: FieldType = type_name.parse().inspect_err(|_| {
            warn!(type_name, "unknown field type identifier");
        })?;
        self.check(field_type, value)
    }
}
