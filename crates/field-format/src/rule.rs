//! Pattern rules: what each field type matches and how the match is read.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::field_type::FieldType;
use crate::normalize::Normalizer;
use crate::patterns::{self, imported};

// ============================================================================
// POLARITY
// ============================================================================

/// Whether a value is valid when its pattern matches or when it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Valid iff the pattern matches.
    #[default]
    RequireMatch,
    /// Valid iff the pattern matches nowhere in the value.
    RequireNoMatch,
}

impl Polarity {
    /// Turns a raw match result into a validity verdict.
    #[inline]
    #[must_use]
    pub const fn apply(self, matched: bool) -> bool {
        match self {
            Self::RequireMatch => matched,
            Self::RequireNoMatch => !matched,
        }
    }
}

// ============================================================================
// PATTERN RULE
// ============================================================================

/// Pattern, regex flags, polarity and normalizer for one field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Regular expression source, anchoring included.
    pub pattern: Cow<'static, str>,
    /// How a match is turned into a verdict.
    #[serde(default)]
    pub polarity: Polarity,
    /// Applied to the value before matching.
    #[serde(default)]
    pub normalizer: Normalizer,
    /// Unicode-aware classes (negation by code point, `\pL`, ...).
    #[serde(default)]
    pub unicode: bool,
    /// Case-insensitive matching.
    #[serde(default)]
    pub case_insensitive: bool,
}

impl PatternRule {
    /// Creates a byte-oriented, case-sensitive, require-match rule.
    pub fn new(pattern: impl Into<Cow<'static, str>>) -> Self {
        Self {
            pattern: pattern.into(),
            polarity: Polarity::RequireMatch,
            normalizer: Normalizer::Identity,
            unicode: false,
            case_insensitive: false,
        }
    }

    /// Enables Unicode-aware classes.
    #[must_use = "builder methods must be chained or built"]
    pub fn unicode(mut self) -> Self {
        self.unicode = true;
        self
    }

    /// Enables case-insensitive matching.
    #[must_use = "builder methods must be chained or built"]
    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Inverts the polarity: the value is valid only if nothing matches.
    #[must_use = "builder methods must be chained or built"]
    pub fn forbidding(mut self) -> Self {
        self.polarity = Polarity::RequireNoMatch;
        self
    }

    /// Sets the normalizer.
    #[must_use = "builder methods must be chained or built"]
    pub fn normalized_with(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Built-in rule for a field type.
    ///
    /// The match is exhaustive, so adding a variant without a rule does not
    /// compile.
    #[must_use]
    pub fn builtin(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Name => Self::new(patterns::NAME)
                .unicode()
                .normalized_with(Normalizer::StripSlashes),
            FieldType::CatalogName => Self::new(patterns::CATALOG_NAME).unicode(),
            FieldType::GenericName => Self::new(patterns::GENERIC_NAME).unicode(),
            FieldType::CityName => Self::new(patterns::CITY_NAME).unicode(),
            FieldType::Address => Self::new(patterns::ADDRESS).unicode(),
            FieldType::PostCode => Self::new(patterns::POST_CODE),
            FieldType::PhoneNumber => Self::new(patterns::PHONE_NUMBER),
            FieldType::Message => Self::new(patterns::MESSAGE)
                .case_insensitive()
                .forbidding(),
            FieldType::LanguageIsoCode => Self::new(imported::LANGUAGE_ISO_CODE),
            FieldType::LanguageCode => Self::new(patterns::LANGUAGE_CODE),
            FieldType::CurrencyIsoCode => Self::new(imported::ALPHA_ISO_CODE),
            FieldType::FileName => Self::new(patterns::FILE_NAME),
            FieldType::DniLite => Self::new(imported::DNI_LITE),
            FieldType::StateIsoCode => Self::new(imported::STATE_ISO_CODE),
            FieldType::Upc => Self::new(imported::UPC),
            FieldType::Ean13 => Self::new(imported::EAN_13),
            FieldType::Isbn => Self::new(imported::ISBN),
            FieldType::Reference => Self::new(imported::REFERENCE).unicode(),
            FieldType::ModuleName => Self::new(patterns::MODULE_NAME),
            FieldType::Url => Self::new(patterns::URL).unicode(),
            FieldType::WebserviceKey => Self::new(patterns::WEBSERVICE_KEY).case_insensitive(),
        }
    }

    /// Compiles the pattern with this rule's flags.
    pub fn compile(&self) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&self.pattern)
            .unicode(self.unicode)
            .case_insensitive(self.case_insensitive)
            .build()
    }
}
