//! Validation foundation shared with host frameworks.
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//!
//! The matcher itself answers with a boolean and a normalized value. This
//! layer turns a negative answer into a structured error the host can
//! attach to a form field and translate.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
