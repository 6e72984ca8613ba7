//! Pattern literals for every field type.
//!
//! Each pattern keeps its own anchoring: most are full-string (`^...$`),
//! [`MESSAGE`] is a find-anywhere pattern used with inverted polarity.
//! Non-ASCII characters (`°`, `¤`) are literal code points.

// ============================================================================
// CHARACTER SETS
// ============================================================================

/// Characters forbidden in catalog names.
pub const CATALOG_CHARS: &str = "<>;=#{}";

/// Characters forbidden in generic names.
pub const GENERIC_NAME_CHARS: &str = "<>={}";

/// Characters forbidden anywhere in a message.
pub const MESSAGE_CHARS: &str = "<>{}";

/// Characters forbidden in person names (regex class syntax).
pub const NAME_CHARS: &str = "0-9!<>,;?=+()@#\"°{}_$%:";

// ============================================================================
// OWNED PATTERNS
// ============================================================================

pub const NAME: &str = r#"^[^0-9!<>,;?=+()@#"°{}_$%:¤|]*$"#;
pub const CATALOG_NAME: &str = r"^[^<>;=#{}]*$";
pub const GENERIC_NAME: &str = r"^[^<>={}]*$";
pub const CITY_NAME: &str = r#"^[^!<>;?=+@#"°{}_$%]*$"#;
pub const ADDRESS: &str = r"^[^!<>?=+@{}_$%]*$";
pub const POST_CODE: &str = r"^[a-zA-Z 0-9-]+$";
pub const PHONE_NUMBER: &str = r"^[+0-9. ()/-]*$";
pub const MESSAGE: &str = r"[<>{}]";
pub const LANGUAGE_CODE: &str = r"^[a-zA-Z]{2}(-[a-zA-Z]{2})?$";
pub const FILE_NAME: &str = r"^[a-zA-Z0-9_.-]+$";
pub const MODULE_NAME: &str = r"^[a-zA-Z0-9_-]+$";
pub const URL: &str = r"^[~:#,$%&_=\(\)\.\? \+\-@/a-zA-Z0-9\pL\pS-]+$";
pub const WEBSERVICE_KEY: &str = r"^[a-zA-Z0-9@#?\-_]+$";

// ============================================================================
// IMPORTED PATTERNS
// ============================================================================

/// Identifier patterns owned by other domain modules (localization,
/// currency, address, product catalog).
///
/// They are referenced here as opaque literals; a deployment that needs
/// different definitions overrides them through
/// [`MatcherConfig`](crate::config::MatcherConfig) rather than editing this
/// module.
pub mod imported {
    pub const LANGUAGE_ISO_CODE: &str = r"^[a-zA-Z]{2,3}$";
    pub const ALPHA_ISO_CODE: &str = r"^[a-zA-Z]{3}$";
    pub const DNI_LITE: &str = r"^[0-9A-Za-z.-]{1,16}$";
    pub const STATE_ISO_CODE: &str = r"^[a-zA-Z0-9]{1,4}((-)[a-zA-Z0-9]{1,4})?$";
    pub const UPC: &str = r"^[0-9]{0,12}$";
    pub const EAN_13: &str = r"^[0-9]{0,13}$";
    pub const ISBN: &str = r"^[0-9-]{0,32}$";
    pub const REFERENCE: &str = r"^[^<>;={}]*$";
}
