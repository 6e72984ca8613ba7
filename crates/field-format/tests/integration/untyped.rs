//! Integration test: identifiers and values arriving as untyped input.

use field_format::{FieldType, MatcherError, TypeMatcher};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn unknown_type_enumerates_every_identifier() {
    let err = TypeMatcher::global()
        .validate_named("NOT_A_TYPE", "anything")
        .unwrap_err();

    assert_eq!(err.code(), "FIELD_TYPE_UNKNOWN");
    assert_eq!(
        err.to_string(),
        "unknown field type `NOT_A_TYPE`, expected one of: NAME, CATALOG_NAME, GENERIC_NAME, \
         CITY_NAME, ADDRESS, POST_CODE, PHONE_NUMBER, MESSAGE, LANGUAGE_ISO_CODE, LANGUAGE_CODE, \
         CURRENCY_ISO_CODE, FILE_NAME, DNI_LITE, STATE_ISO_CODE, UPC, EAN_13, ISBN, REFERENCE, \
         MODULE_NAME, URL, WEBSERVICE_KEY"
    );
}

#[test]
fn identifiers_are_case_sensitive() {
    assert!(TypeMatcher::global().validate_named("post_code", "75001").is_err());
}

#[test]
fn request_payload() {
    let payload = json!({
        "fields": [
            { "type": "POST_CODE", "value": "SW1A 1AA" },
            { "type": "MESSAGE", "value": "HI <B>" },
            { "type": "NAME", "value": null },
        ]
    });

    let verdicts: Vec<bool> = payload["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|field| {
            let type_name = field["type"].as_str().unwrap();
            TypeMatcher::global()
                .validate_named(type_name, &field["value"])
                .unwrap()
                .valid
        })
        .collect();

    assert_eq!(verdicts, [true, false, true]);
}

#[test]
fn wrong_shape_is_not_a_failed_match() {
    let matcher = TypeMatcher::global();

    let err = matcher.check(FieldType::Ean13, &json!(4_006_381_333_931_u64)).unwrap_err();
    assert!(matches!(err, MatcherError::InvalidInput { expected: "string", actual: "number" }));

    let value = json!("4006381333931");
    let outcome = matcher.check(FieldType::Ean13, &value).unwrap();
    assert!(outcome.valid);
}

#[test]
fn optional_strings() {
    let matcher = TypeMatcher::global();
    let missing: Option<String> = None;
    let present = Some(String::from("fr"));

    assert!(matcher.check(FieldType::LanguageIsoCode, &missing).unwrap().valid);
    assert!(matcher.check(FieldType::LanguageIsoCode, &present).unwrap().valid);
}
