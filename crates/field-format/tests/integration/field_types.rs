//! Integration test: every field type against conforming and
//! non-conforming values.

use field_format::{FieldType, TypeMatcher};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
// NAME
#[case(FieldType::Name, "Jean-Pierre", true)]
#[case(FieldType::Name, "José", true)]
#[case(FieldType::Name, "O'Brien", true)]
#[case(FieldType::Name, "Dr. Smith", true)]
#[case(FieldType::Name, "John2", false)]
#[case(FieldType::Name, "Smith, John", false)]
#[case(FieldType::Name, "a|b", false)]
#[case(FieldType::Name, "x°", false)]
#[case(FieldType::Name, "¤", false)]
// CATALOG_NAME
#[case(FieldType::CatalogName, "Summer sale 50%", true)]
#[case(FieldType::CatalogName, "a=b", false)]
#[case(FieldType::CatalogName, "#1", false)]
// GENERIC_NAME
#[case(FieldType::GenericName, "Tag #1", true)]
#[case(FieldType::GenericName, "{x}", false)]
// CITY_NAME
#[case(FieldType::CityName, "Saint-Étienne", true)]
#[case(FieldType::CityName, "L'Haÿ-les-Roses", true)]
#[case(FieldType::CityName, "Paris 75", true)]
#[case(FieldType::CityName, "Paris!", false)]
// ADDRESS
#[case(FieldType::Address, "12, rue de la Paix", true)]
#[case(FieldType::Address, "#5 Main St", true)]
#[case(FieldType::Address, "a@b", false)]
#[case(FieldType::Address, "50%", false)]
// POST_CODE
#[case(FieldType::PostCode, "75001", true)]
#[case(FieldType::PostCode, "SW1A 1AA", true)]
#[case(FieldType::PostCode, "K1A-0B1", true)]
#[case(FieldType::PostCode, "75001!", false)]
// PHONE_NUMBER
#[case(FieldType::PhoneNumber, "+33 (0)1-23-45", true)]
#[case(FieldType::PhoneNumber, "+1 (415) 555.1234", true)]
#[case(FieldType::PhoneNumber, "0612/345678", true)]
#[case(FieldType::PhoneNumber, "call me", false)]
// MESSAGE
#[case(FieldType::Message, "hello", true)]
#[case(FieldType::Message, "hi <b>", false)]
#[case(FieldType::Message, "HI <B>", false)]
#[case(FieldType::Message, "a { b", false)]
#[case(FieldType::Message, "price > 5", false)]
// LANGUAGE_ISO_CODE
#[case(FieldType::LanguageIsoCode, "en", true)]
#[case(FieldType::LanguageIsoCode, "fra", true)]
#[case(FieldType::LanguageIsoCode, "e", false)]
#[case(FieldType::LanguageIsoCode, "english", false)]
// LANGUAGE_CODE
#[case(FieldType::LanguageCode, "en-US", true)]
#[case(FieldType::LanguageCode, "en", true)]
#[case(FieldType::LanguageCode, "en_US", false)]
#[case(FieldType::LanguageCode, "en-USA", false)]
// CURRENCY_ISO_CODE
#[case(FieldType::CurrencyIsoCode, "EUR", true)]
#[case(FieldType::CurrencyIsoCode, "usd", true)]
#[case(FieldType::CurrencyIsoCode, "EU", false)]
#[case(FieldType::CurrencyIsoCode, "EURO", false)]
// FILE_NAME
#[case(FieldType::FileName, "report_2024.pdf", true)]
#[case(FieldType::FileName, "my file.pdf", false)]
#[case(FieldType::FileName, "../etc", false)]
// DNI_LITE
#[case(FieldType::DniLite, "X1234567-L", true)]
#[case(FieldType::DniLite, "12345678901234567", false)]
#[case(FieldType::DniLite, "12 34", false)]
// STATE_ISO_CODE
#[case(FieldType::StateIsoCode, "CA", true)]
#[case(FieldType::StateIsoCode, "US-CA", true)]
#[case(FieldType::StateIsoCode, "ABCD-EFGH", true)]
#[case(FieldType::StateIsoCode, "12345", false)]
#[case(FieldType::StateIsoCode, "US_CA", false)]
// UPC
#[case(FieldType::Upc, "012345678905", true)]
#[case(FieldType::Upc, "0123456789012", false)]
#[case(FieldType::Upc, "12A", false)]
// EAN_13
#[case(FieldType::Ean13, "4006381333931", true)]
#[case(FieldType::Ean13, "400638133393A", false)]
// ISBN
#[case(FieldType::Isbn, "978-3-16-148410-0", true)]
#[case(FieldType::Isbn, "ISBN 978", false)]
// REFERENCE
#[case(FieldType::Reference, "REF-001/a", true)]
#[case(FieldType::Reference, "demo_1", true)]
#[case(FieldType::Reference, "ref;1", false)]
// MODULE_NAME
#[case(FieldType::ModuleName, "ps_checkout", true)]
#[case(FieldType::ModuleName, "my.module", false)]
// URL
#[case(FieldType::Url, "https://example.com/path?q=1&x=2", true)]
#[case(FieldType::Url, "https://пример.рф/страница", true)]
#[case(FieldType::Url, "https://example.com/!", false)]
#[case(FieldType::Url, "https://example.com/[1]", false)]
// WEBSERVICE_KEY
#[case(FieldType::WebserviceKey, "ABCD1234@#?-_", true)]
#[case(FieldType::WebserviceKey, "abcd", true)]
#[case(FieldType::WebserviceKey, "abc def", false)]
#[case(FieldType::WebserviceKey, "key!", false)]
fn field_type_cases(#[case] field_type: FieldType, #[case] value: &str, #[case] expected: bool) {
    assert_eq!(
        TypeMatcher::global().is_valid(field_type, Some(value)),
        expected,
        "{field_type} {value:?}"
    );
}

#[rstest]
fn absent_and_empty_always_valid(
    #[values(None, Some(""))] value: Option<&str>,
) {
    for field_type in FieldType::ALL {
        assert!(TypeMatcher::global().is_valid(*field_type, value), "{field_type}");
    }
}

#[test]
fn escaped_name_validates_like_unescaped() {
    let matcher = TypeMatcher::global();

    let escaped = matcher.validate(FieldType::Name, Some(r"d\'Artagnan"));
    let plain = matcher.validate(FieldType::Name, Some("d'Artagnan"));

    assert_eq!(escaped.valid, plain.valid);
    assert_eq!(escaped.normalized_value, plain.normalized_value);
}

#[test]
fn normalized_value_is_untouched_except_escaped_name() {
    let matcher = TypeMatcher::global();
    let value = r"a\'b";

    for field_type in FieldType::ALL {
        let outcome = matcher.validate(*field_type, Some(value));
        if *field_type == FieldType::Name {
            assert_eq!(outcome.normalized_value, "a'b");
        } else {
            assert_eq!(outcome.normalized_value, value, "{field_type}");
        }
    }
}
