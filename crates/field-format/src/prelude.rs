//! Prelude module for convenient imports.
//!
//! ```
//! use field_format::prelude::*;
//!
//! let validator = field_format(FieldType::ModuleName);
//! assert!(validator.validate("ps_checkout").is_ok());
//! ```

pub use crate::combinators::{And, Not, and, not};
pub use crate::config::{MatcherConfig, RuleOverride};
pub use crate::error::{MatcherError, MatcherResult};
pub use crate::field_type::FieldType;
pub use crate::foundation::{Validate, ValidateExt, ValidationError};
pub use crate::matcher::{TypeMatcher, ValidationOutcome};
pub use crate::normalize::Normalizer;
pub use crate::rule::{PatternRule, Polarity};
pub use crate::validator::{FieldFormat, field_format};
pub use crate::value::AsFieldValue;
