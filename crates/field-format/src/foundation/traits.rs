//! Core traits for plugging field formats into a host validation framework.

use crate::combinators::{And, Not};
use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait every validator implements.
///
/// Generic over the input type so `str` validators and validators over host
/// types cannot be mixed up at compile time.
///
/// # Examples
///
/// ```
/// use field_format::foundation::{Validate, ValidationError};
///
/// struct MaxLength(usize);
///
/// impl Validate for MaxLength {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().count() <= self.0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("max_length", "too long"))
///         }
///     }
/// }
///
/// assert!(MaxLength(5).validate("hello").is_ok());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Combinator methods, implemented for every [`Validate`].
pub trait ValidateExt: Validate + Sized {
    /// Both validators must pass. Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Inverts the validator.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}
