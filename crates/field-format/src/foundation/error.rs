//! Structured validation errors for host frameworks.
//!
//! String fields use `Cow<'static, str>` so static codes and messages never
//! allocate.

use std::borrow::Cow;
use std::fmt;

use crate::error::MatcherError;
use crate::field_type::FieldType;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error: code, message, optional field path and
/// message parameters.
///
/// # Examples
///
/// ```
/// use field_format::foundation::ValidationError;
/// use field_format::FieldType;
///
/// let error = ValidationError::field_format(FieldType::PostCode, "75001!")
///     .with_field("address.post_code");
///
/// assert_eq!(error.code, "field_format");
/// assert_eq!(error.param("type"), Some("POST_CODE"));
/// assert_eq!(error.param("value"), Some("75001!"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and message lookup.
    pub code: Cow<'static, str>,

    /// Default human-readable message in English.
    pub message: Cow<'static, str>,

    /// Optional field path (`user.email`, `items[0].name`).
    pub field: Option<Cow<'static, str>>,

    /// Ordered message parameters.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a message parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Creates a "field_format" error. `value` should be the normalized
    /// value, which is what the host displays.
    pub fn field_format(field_type: FieldType, value: impl Into<Cow<'static, str>>) -> Self {
        Self::new(
            "field_format",
            format!("Value is not a valid {field_type}"),
        )
        .with_param("type", field_type.as_str())
        .with_param("value", value)
    }

    /// Creates a "type_mismatch" error.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("type_mismatch", "Type mismatch")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<MatcherError> for ValidationError {
    fn from(error: MatcherError) -> Self {
        match error {
            MatcherError::InvalidInput { expected, actual } => Self::type_mismatch(expected, actual),
            MatcherError::UnknownType { ref name, .. } => {
                let name = name.clone();
                Self::new("unknown_field_type", error.to_string()).with_param("type", name)
            }
            other => Self::new(other.code(), other.to_string()),
        }
    }
}
