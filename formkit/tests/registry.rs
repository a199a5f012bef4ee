//! Tests for field descriptors and the registry.

use formkit::{FieldDescriptor, FieldKind, FieldOption, FieldRegistry, FormError, Value};

fn gender() -> FieldDescriptor {
    FieldDescriptor::new("gender", FieldKind::Radio)
        .option(FieldOption::new("Male", "male"))
        .option(FieldOption::new("Female", "female"))
}

#[test]
fn test_registry_keeps_declaration_order() {
    let registry = FieldRegistry::new(vec![
        FieldDescriptor::new("username", FieldKind::Text),
        FieldDescriptor::new("email", FieldKind::Email),
        gender(),
    ])
    .unwrap();

    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec!["username", "email", "gender"]);
    assert_eq!(registry.position("gender"), Some(2));
}

#[test]
fn test_registry_rejects_duplicate_names() {
    let err = FieldRegistry::new(vec![
        FieldDescriptor::new("email", FieldKind::Email),
        FieldDescriptor::new("email", FieldKind::Text),
    ])
    .unwrap_err();
    assert!(matches!(err, FormError::DuplicateField { ref name } if name == "email"));
}

#[test]
fn test_registry_rejects_empty_name() {
    let err = FieldRegistry::new(vec![FieldDescriptor::new("", FieldKind::Text)]).unwrap_err();
    assert!(matches!(err, FormError::EmptyFieldName));
}

#[test]
fn test_radio_requires_options() {
    let err =
        FieldRegistry::new(vec![FieldDescriptor::new("gender", FieldKind::Radio)]).unwrap_err();
    assert!(matches!(err, FormError::MissingOptions { .. }));
}

#[test]
fn test_options_only_on_radio() {
    let err = FieldRegistry::new(vec![
        FieldDescriptor::new("username", FieldKind::Text).option(FieldOption::new("A", "a")),
    ])
    .unwrap_err();
    assert!(matches!(err, FormError::UnexpectedOptions { kind: FieldKind::Text, .. }));
}

#[test]
fn test_radio_rejects_repeated_option_values() {
    let err = FieldRegistry::new(vec![gender().option(FieldOption::new("Other", "male"))])
        .unwrap_err();
    assert!(matches!(err, FormError::DuplicateOption { ref value, .. } if value == "male"));
}

#[test]
fn test_descriptor_defaults() {
    let checkbox = FieldDescriptor::new("isMarried", FieldKind::Checkbox);
    assert_eq!(checkbox.initial_value(), Value::Bool(false));
    assert_eq!(checkbox.id(), "isMarried");

    let text = FieldDescriptor::new("username", FieldKind::Text)
        .element_id("user-input")
        .default_value("guest");
    assert_eq!(text.initial_value(), Value::from("guest"));
    assert_eq!(text.id(), "user-input");
}

#[test]
fn test_default_must_fit_kind() {
    let err = FieldRegistry::new(vec![
        FieldDescriptor::new("isMarried", FieldKind::Checkbox).default_value(Value::Null),
    ])
    .unwrap_err();
    assert!(matches!(err, FormError::InputMismatch { input: "null", .. }));
}
