//! # field-format
//!
//! Validates string values against a closed set of named field types
//! (person name, postal code, phone number, ISO codes, product identifiers,
//! URLs, ...) through one dispatch table of field type → pattern rule.
//!
//! ## Quick Start
//!
//! ```
//! use field_format::{FieldType, TypeMatcher};
//!
//! let matcher = TypeMatcher::global();
//!
//! assert!(matcher.is_valid(FieldType::PostCode, Some("75001")));
//! assert!(!matcher.is_valid(FieldType::PostCode, Some("75001!")));
//!
//! // MESSAGE forbids markup characters anywhere in the value.
//! assert!(!matcher.is_valid(FieldType::Message, Some("HI <B>")));
//! ```
//!
//! ## Rules
//!
//! Every [`FieldType`] resolves to a [`PatternRule`]: a regular expression,
//! its flags, a [`Polarity`] (must match / must not match) and a
//! [`Normalizer`] applied before matching. Built-in rules can be overridden
//! per type with a [`MatcherConfig`](config::MatcherConfig).
//!
//! ## Untyped input
//!
//! Identifiers and values arriving from deserialized requests go through
//! [`TypeMatcher::validate_named`], which reports
//! [`MatcherError::UnknownType`] and [`MatcherError::InvalidInput`] instead
//! of a silent `false`.

pub mod combinators;
pub mod config;
pub mod error;
pub mod field_type;
pub mod foundation;
mod macros;
pub mod matcher;
pub mod normalize;
pub mod patterns;
pub mod prelude;
pub mod rule;
pub mod validator;
pub mod value;

pub use error::{MatcherError, MatcherResult};
pub use field_type::FieldType;
pub use matcher::{TypeMatcher, ValidationOutcome};
pub use normalize::Normalizer;
pub use rule::{PatternRule, Polarity};
pub use value::AsFieldValue;
