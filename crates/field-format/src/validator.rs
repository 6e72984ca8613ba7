//! Field formats as [`Validate`] implementations.
//!
//! A host framework that works with structured errors wraps a field type in
//! [`FieldFormat`]; a failed check becomes a `field_format` error carrying
//! the field type and the normalized value.

use crate::field_type::FieldType;
use crate::foundation::{Validate, ValidationError};
use crate::matcher::TypeMatcher;
use crate::value::AsFieldValue;

/// Validates strings against one field type.
///
/// # Examples
///
/// ```
/// use field_format::prelude::*;
///
/// let validator = field_format(FieldType::Name);
/// assert!(validator.validate("Zoë").is_ok());
///
/// let error = validator.validate(r"Agent\ 007").unwrap_err();
/// assert_eq!(error.param("value"), Some("Agent 007"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FieldFormat<'m> {
    field_type: FieldType,
    matcher: &'m TypeMatcher,
}

impl FieldFormat<'static> {
    /// Creates a validator backed by [`TypeMatcher::global`].
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self::with_matcher(field_type, TypeMatcher::global())
    }
}

impl<'m> FieldFormat<'m> {
    /// Creates a validator backed by a specific matcher.
    #[must_use]
    pub fn with_matcher(field_type: FieldType, matcher: &'m TypeMatcher) -> Self {
        Self {
            field_type,
            matcher,
        }
    }

    /// The field type checked by this validator.
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Validates an untyped value.
    ///
    /// A value of the wrong shape becomes a `type_mismatch` error.
    pub fn validate_any<V>(&self, value: &V) -> Result<(), ValidationError>
    where
        V: AsFieldValue + ?Sized,
    {
        match value.as_field_value()? {
            Some(value) => self.validate(value),
            None => Ok(()),
        }
    }
}

impl Validate for FieldFormat<'_> {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let outcome = self.matcher.validate(self.field_type, Some(input));
        if outcome.valid {
            Ok(())
        } else {
            Err(ValidationError::field_format(
                self.field_type,
                outcome.normalized_value.into_owned(),
            ))
        }
    }
}

/// Creates a [`FieldFormat`] validator backed by the global matcher.
#[must_use]
pub fn field_format(field_type: FieldType) -> FieldFormat<'static> {
    FieldFormat::new(field_type)
}
