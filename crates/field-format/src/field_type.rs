//! The closed set of field types.
//!
//! External identifiers are `SCREAMING_SNAKE_CASE` (`"POST_CODE"`,
//! `"EAN_13"`) and are what crosses the host boundary: `Display`, `FromStr`
//! and serde all use them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::MatcherError;

crate::field_types! {
    /// Tag identifying which validation rule applies to a value.
    ///
    /// Every variant resolves to exactly one
    /// [`PatternRule`](crate::rule::PatternRule).
    pub enum FieldType {
        /// Person name (first or last name).
        Name => "NAME",
        /// Catalog object name (product, category, ...).
        CatalogName => "CATALOG_NAME",
        /// Generic free-form name.
        GenericName => "GENERIC_NAME",
        /// City name.
        CityName => "CITY_NAME",
        /// Street address line.
        Address => "ADDRESS",
        /// Postal code.
        PostCode => "POST_CODE",
        /// Phone number with common separators.
        PhoneNumber => "PHONE_NUMBER",
        /// Free text that must not contain markup characters.
        Message => "MESSAGE",
        /// Two or three letter language ISO code.
        LanguageIsoCode => "LANGUAGE_ISO_CODE",
        /// Language code with optional region (`en`, `en-US`).
        LanguageCode => "LANGUAGE_CODE",
        /// Three letter currency ISO code.
        CurrencyIsoCode => "CURRENCY_ISO_CODE",
        /// File name without path separators.
        FileName => "FILE_NAME",
        /// Lightweight national identification number.
        DniLite => "DNI_LITE",
        /// State ISO code (`CA`, `US-CA`).
        StateIsoCode => "STATE_ISO_CODE",
        /// Universal Product Code.
        Upc => "UPC",
        /// EAN-13 barcode.
        Ean13 => "EAN_13",
        /// ISBN.
        Isbn => "ISBN",
        /// Internal product reference.
        Reference => "REFERENCE",
        /// Module technical name.
        ModuleName => "MODULE_NAME",
        /// URL.
        Url => "URL",
        /// Webservice access key.
        WebserviceKey => "WEBSERVICE_KEY",
    }
}

impl FieldType {
    /// Every valid external identifier, for diagnostics.
    #[must_use]
    pub fn names() -> &'static [&'static str] {
        Self::NAMES
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| MatcherError::unknown_type(s))
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
