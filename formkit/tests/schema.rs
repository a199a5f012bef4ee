//! Tests for schema-based validation and schema documents.

use formkit::{
    ConstraintKind, CriteriaMode, FormError, FormValues, Schema, SchemaDocument, SchemaField,
    SchemaValidator, Validator, Value,
};

fn schema() -> Schema {
    Schema::new()
        .field(
            SchemaField::string("username")
                .min_length(3, "too short")
                .required("the username is required"),
        )
        .field(
            SchemaField::string("password")
                .required("the password is required")
                .min_length(8, "too short"),
        )
        .field(SchemaField::boolean("isMarried"))
        .field(
            SchemaField::string("gender")
                .required("enter your gender")
                .one_of(["male", "female"], "pick male or female"),
        )
}

#[test]
fn test_every_invalid_field_is_reported() {
    let validator = SchemaValidator::new(schema());
    let values = FormValues::new()
        .with("username", "ab")
        .with("password", "short")
        .with("isMarried", false)
        .with("gender", "male");

    let errors = validator.validate(&values, CriteriaMode::FirstError);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.message("username"), Some("too short"));
    assert_eq!(errors.message("password"), Some("too short"));
}

#[test]
fn test_required_checked_first_within_field() {
    let validator = SchemaValidator::new(schema());
    let errors = validator.validate(&FormValues::new(), CriteriaMode::FirstError);

    assert_eq!(errors.message("username"), Some("the username is required"));
    assert_eq!(errors.message("gender"), Some("enter your gender"));
    assert!(!errors.contains("isMarried"));
}

#[test]
fn test_one_of_rejects_unknown_value() {
    let validator = SchemaValidator::new(schema());
    let values = FormValues::new().with("gender", "Male");

    let error = validator
        .validate_field("gender", &values, CriteriaMode::FirstError)
        .unwrap();
    assert_eq!(error.kind, ConstraintKind::OneOf);
}

#[test]
fn test_type_mismatch_is_reported() {
    let schema = Schema::new().field(SchemaField::boolean("isMarried").type_error("yes or no"));
    let validator = SchemaValidator::new(schema);
    let values = FormValues::new().with("isMarried", "true");

    let errors = validator.validate(&values, CriteriaMode::FirstError);
    let error = errors.get("isMarried").unwrap();
    assert_eq!(error.kind, ConstraintKind::Type);
    assert_eq!(error.message, "yes or no");
}

#[test]
fn test_refinement_sees_whole_snapshot() {
    let schema = Schema::new()
        .field(SchemaField::string("password").required("required"))
        .field(
            SchemaField::string("confirm")
                .required("required")
                .refine(|v| v.text("confirm") == v.text("password"), "passwords differ"),
        );
    let validator = SchemaValidator::new(schema);

    let differ = FormValues::new().with("password", "12345678").with("confirm", "1234");
    let errors = validator.validate(&differ, CriteriaMode::FirstError);
    assert_eq!(errors.message("confirm"), Some("passwords differ"));

    let empty = FormValues::new().with("password", "12345678").with("confirm", "");
    let errors = validator.validate(&empty, CriteriaMode::FirstError);
    assert_eq!(errors.message("confirm"), Some("required"));
}

#[test]
fn test_later_field_replaces_earlier() {
    let schema = Schema::new()
        .field(SchemaField::string("a").required("first"))
        .field(SchemaField::string("a").required("second"));
    assert_eq!(schema.len(), 1);

    let errors = SchemaValidator::new(schema).validate(&FormValues::new(), CriteriaMode::FirstError);
    assert_eq!(errors.message("a"), Some("second"));
}

const DOCUMENT: &str = r#"{
  "fields": [
    {
      "name": "email",
      "type": "string",
      "rules": [
        { "rule": "required", "message": "the email address is required" },
        { "rule": "pattern", "value": "[a-z0-9]+@[a-z]+.[a-z]{2,3}", "message": "email is incorrect format" }
      ]
    },
    {
      "name": "isMarried",
      "type": "boolean"
    },
    {
      "name": "gender",
      "type": "string",
      "rules": [
        { "rule": "oneOf", "value": ["male", "female"], "message": "enter your gender" }
      ]
    }
  ]
}"#;

#[test]
fn test_document_compiles_to_equivalent_schema() {
    let schema = Schema::from_json(DOCUMENT).unwrap();
    let validator = SchemaValidator::new(schema);
    assert_eq!(validator.fields(), vec!["email", "isMarried", "gender"]);

    let values = FormValues::new()
        .with("email", "not-an-email")
        .with("isMarried", true)
        .with("gender", "other");
    let errors = validator.validate(&values, CriteriaMode::FirstError);
    assert_eq!(errors.message("email"), Some("email is incorrect format"));
    assert_eq!(errors.message("gender"), Some("enter your gender"));

    let values = FormValues::new()
        .with("email", "a@b.co")
        .with("isMarried", Value::Bool(false))
        .with("gender", "female");
    assert!(validator.validate(&values, CriteriaMode::FirstError).is_empty());
}

#[test]
fn test_document_with_bad_pattern_fails_to_compile() {
    let doc = SchemaDocument::from_json(
        r#"{"fields":[{"name":"a","type":"string","rules":[{"rule":"pattern","value":"(","message":"x"}]}]}"#,
    )
    .unwrap();
    assert!(matches!(doc.compile().unwrap_err(), FormError::InvalidPattern { .. }));
}
