//! Value normalization applied before pattern evaluation.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Transformation applied to a raw value before its pattern is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalizer {
    /// Value is matched as given.
    #[default]
    Identity,
    /// Undo backslash escaping, see [`strip_slashes`].
    StripSlashes,
}

impl Normalizer {
    /// Applies the normalization, borrowing when nothing changes.
    #[must_use]
    pub fn apply(self, value: &str) -> Cow<'_, str> {
        match self {
            Self::Identity => Cow::Borrowed(value),
            Self::StripSlashes => strip_slashes(value),
        }
    }
}

/// Removes one level of backslash escaping.
///
/// `\x` becomes `x` for any character, `\0` becomes NUL and a lone trailing
/// backslash is dropped. Borrows when the value has no backslash.
///
/// ```
/// use field_format::normalize::strip_slashes;
///
/// assert_eq!(strip_slashes(r"O\'Brien"), "O'Brien");
/// assert_eq!(strip_slashes(r"C:\\dir"), r"C:\dir");
/// assert_eq!(strip_slashes("plain"), "plain");
/// ```
#[must_use]
pub fn strip_slashes(value: &str) -> Cow<'_, str> {
    if !value.contains('\\') {
        return Cow::Borrowed(value);
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('\0'),
            Some(escaped) => out.push(escaped),
            None => {}
        }
    }
    Cow::Owned(out)
}
