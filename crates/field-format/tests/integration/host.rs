//! Integration test: field formats inside a host validation flow.

use field_format::prelude::*;
use serde_json::json;

struct Form<'a> {
    fields: Vec<(&'static str, FieldType, &'a str)>,
}

impl Form<'_> {
    fn errors(&self) -> Vec<ValidationError> {
        self.fields
            .iter()
            .filter_map(|(name, field_type, value)| {
                field_format(*field_type)
                    .validate(value)
                    .err()
                    .map(|e| e.with_field(*name))
            })
            .collect()
    }
}

#[test]
fn form_reports_each_violation_with_normalized_value() {
    let form = Form {
        fields: vec![
            ("firstname", FieldType::Name, r"Jean\-Luc"),
            ("lastname", FieldType::Name, r"Picard\;"),
            ("postcode", FieldType::PostCode, "75001"),
            ("message", FieldType::Message, "<script>"),
        ],
    };

    let errors = form.errors();
    assert_eq!(errors.len(), 2);

    assert_eq!(errors[0].field.as_deref(), Some("lastname"));
    assert_eq!(errors[0].param("value"), Some("Picard;"));

    assert_eq!(errors[1].field.as_deref(), Some("message"));
    assert_eq!(errors[1].param("type"), Some("MESSAGE"));
}

#[test]
fn composed_with_other_validators() {
    let key = field_format(FieldType::WebserviceKey).and(not(field_format(FieldType::Upc)));

    assert!(key.validate("K3Y@PRIVATE").is_ok());
    // All digits: a valid key, but rejected because it looks like a UPC.
    assert!(key.validate("123456").is_err());
}

#[test]
fn outcome_serializes_for_error_payloads() {
    let outcome = TypeMatcher::global().validate(FieldType::Name, Some(r"O\'Brien"));
    assert_eq!(
        serde_json::to_value(&outcome).unwrap(),
        json!({ "valid": true, "normalized_value": "O'Brien" })
    );
}

#[test]
fn validate_any_on_json() {
    let validator = field_format(FieldType::LanguageCode);
    assert!(validator.validate_any(&json!("pt-BR")).is_ok());

    let error = validator.validate_any(&json!({"lang": "pt"})).unwrap_err();
    assert_eq!(error.code, "type_mismatch");
    assert_eq!(error.param("actual"), Some("object"));
}
