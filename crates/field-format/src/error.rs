//! Error types for the field type matcher.
//!
//! A value that does not conform to its field type is *not* an error; it is a
//! normal negative [`ValidationOutcome`](crate::ValidationOutcome). Everything
//! here is a caller or configuration mistake and is surfaced immediately.

use crate::field_type::FieldType;

/// Error type for matcher construction and untyped lookups.
#[derive(Debug, thiserror::Error)]
pub enum MatcherError {
    /// The field type identifier is not part of the closed set.
    #[error("unknown field type `{name}`, expected one of: {}", .valid.join(", "))]
    UnknownType {
        /// The identifier that was looked up.
        name: String,
        /// Every valid identifier, in declaration order.
        valid: &'static [&'static str],
    },

    /// The value is not string-shaped.
    #[error("invalid input: expected {expected}, got {actual}")]
    InvalidInput {
        /// Shape the matcher accepts.
        expected: &'static str,
        /// Shape that was supplied.
        actual: &'static str,
    },

    /// A rule's pattern could not be compiled by the regex engine.
    #[error("invalid pattern for {field_type}: {source}")]
    Pattern {
        /// Field type whose rule is broken.
        field_type: FieldType,
        /// Underlying engine error.
        #[source]
        source: regex::Error,
    },

    /// A matcher configuration document could not be parsed.
    #[error("invalid matcher configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl MatcherError {
    /// Creates an [`UnknownType`](Self::UnknownType) error listing every
    /// valid identifier.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType {
            name: name.into(),
            valid: FieldType::NAMES,
        }
    }

    /// Creates an [`InvalidInput`](Self::InvalidInput) error for a value that
    /// should have been a string.
    pub fn not_a_string(actual: &'static str) -> Self {
        Self::InvalidInput {
            expected: "string",
            actual,
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownType { .. } => "FIELD_TYPE_UNKNOWN",
            Self::InvalidInput { .. } => "FIELD_INVALID_INPUT",
            Self::Pattern { .. } => "FIELD_PATTERN",
            Self::Config(_) => "FIELD_CONFIG",
        }
    }

    /// Whether the operation might succeed if retried with the same input.
    ///
    /// Every variant is a programmer or configuration error, so this is
    /// always `false`.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Result type for matcher operations.
pub type MatcherResult<T> = Result<T, MatcherError>;
