//! Conversion of host values into the optional string the matcher checks.
//!
//! Typed callers pass `&str` / `Option<&str>` straight to
//! [`TypeMatcher::validate`](crate::TypeMatcher::validate). Untyped input
//! (deserialized requests) goes through [`AsFieldValue`], which is where a
//! value of the wrong shape is told apart from a value of the wrong format.

use std::borrow::Cow;

use crate::error::MatcherError;

/// Types that can be presented to the matcher as an optional string.
///
/// `Ok(None)` means the value is absent and therefore valid.
pub trait AsFieldValue {
    /// Borrows the string to validate.
    fn as_field_value(&self) -> Result<Option<&str>, MatcherError>;
}

impl AsFieldValue for str {
    #[inline]
    fn as_field_value(&self) -> Result<Option<&str>, MatcherError> {
        Ok(Some(self))
    }
}

impl AsFieldValue for String {
    #[inline]
    fn as_field_value(&self) -> Result<Option<&str>, MatcherError> {
        Ok(Some(self.as_str()))
    }
}

impl AsFieldValue for Cow<'_, str> {
    #[inline]
    fn as_field_value(&self) -> Result<Option<&str>, MatcherError> {
        Ok(Some(self.as_ref()))
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    #[inline]
    fn as_field_value(&self) -> Result<Option<&str>, MatcherError> {
        (**self).as_field_value()
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    #[inline]
    fn as_field_value(&self) -> Result<Option<&str>, MatcherError> {
        match self {
            Some(value) => value.as_field_value(),
            None => Ok(None),
        }
    }
}

impl AsFieldValue for serde_json::Value {
    fn as_field_value(&self) -> Result<Option<&str>, MatcherError> {
        match self {
            Self::Null => Ok(None),
            Self::String(s) => Ok(Some(s.as_str())),
            Self::Bool(_) => Err(MatcherError::not_a_string("boolean")),
            Self::Number(_) => Err(MatcherError::not_a_string("number")),
            Self::Array(_) => Err(MatcherError::not_a_string("array")),
            Self::Object(_) => Err(MatcherError::not_a_string("object")),
        }
    }
}
