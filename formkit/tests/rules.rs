//! Tests for inline, rule-based validation.

use formkit::{
    Constraint, ConstraintKind, CriteriaMode, FieldDescriptor, FieldKind, FieldRegistry,
    FormValues, RuleBasedValidator, Validator,
};

fn registry() -> FieldRegistry {
    FieldRegistry::new(vec![
        FieldDescriptor::new("username", FieldKind::Text)
            .rule(Constraint::required("the username is required"))
            .rule(Constraint::min_length(3, "too short")),
        FieldDescriptor::new("email", FieldKind::Email)
            .rule(Constraint::pattern("[a-z0-9]+@[a-z]+.[a-z]{2,3}", "bad email").unwrap())
            .rule(Constraint::required("the email address is required")),
        FieldDescriptor::new("nickname", FieldKind::Text),
    ])
    .unwrap()
}

#[test]
fn test_required_wins_over_min_length() {
    let validator = RuleBasedValidator::from_registry(&registry());
    let values = FormValues::new().with("username", "").with("email", "a@b.co");

    let errors = validator.validate(&values, CriteriaMode::FirstError);
    let error = errors.get("username").unwrap();
    assert_eq!(error.kind, ConstraintKind::Required);
    assert_eq!(error.message, "the username is required");
    assert_eq!(error.types.len(), 1);
}

#[test]
fn test_required_runs_before_pattern_regardless_of_declaration() {
    let validator = RuleBasedValidator::from_registry(&registry());
    let values = FormValues::new().with("username", "abc").with("email", "");

    let errors = validator.validate(&values, CriteriaMode::FirstError);
    assert_eq!(
        errors.message("email"),
        Some("the email address is required")
    );
}

#[test]
fn test_fields_are_validated_independently() {
    let validator = RuleBasedValidator::from_registry(&registry());
    let values = FormValues::new().with("username", "ab").with("email", "nope");

    let errors = validator.validate(&values, CriteriaMode::FirstError);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.message("username"), Some("too short"));
    assert_eq!(errors.message("email"), Some("bad email"));
    assert!(!errors.contains("nickname"));
}

#[test]
fn test_criteria_all_collects_every_failure() {
    let registry = FieldRegistry::new(vec![
        FieldDescriptor::new("code", FieldKind::Text)
            .rule(Constraint::min_length(4, "too short"))
            .rule(Constraint::pattern("^[0-9]+$", "digits only").unwrap()),
    ])
    .unwrap();
    let validator = RuleBasedValidator::from_registry(&registry);
    let values = FormValues::new().with("code", "ab");

    let first = validator.validate(&values, CriteriaMode::FirstError);
    assert_eq!(first.get("code").unwrap().types.len(), 1);

    let all = validator.validate(&values, CriteriaMode::All);
    let error = all.get("code").unwrap();
    assert_eq!(error.message, "too short");
    assert_eq!(
        error.types,
        vec![
            (ConstraintKind::MinLength, "too short".to_string()),
            (ConstraintKind::Pattern, "digits only".to_string()),
        ]
    );
}

#[test]
fn test_custom_rule_runs_last() {
    let registry = FieldRegistry::new(vec![
        FieldDescriptor::new("name", FieldKind::Text)
            .rule(Constraint::check(|v| v.as_str() != Some("root"), "reserved"))
            .rule(Constraint::required("required")),
    ])
    .unwrap();
    let validator = RuleBasedValidator::from_registry(&registry);

    let empty = validator.validate(&FormValues::new().with("name", ""), CriteriaMode::FirstError);
    assert_eq!(empty.message("name"), Some("required"));

    let root = validator.validate(&FormValues::new().with("name", "root"), CriteriaMode::FirstError);
    assert_eq!(root.get("name").unwrap().kind, ConstraintKind::Validate);
}

#[test]
fn test_validate_field_only_checks_that_field() {
    let validator = RuleBasedValidator::from_registry(&registry());
    let values = FormValues::new().with("username", "ab").with("email", "");

    let error = validator
        .validate_field("username", &values, CriteriaMode::FirstError)
        .unwrap();
    assert_eq!(error.field, "username");
    assert!(validator
        .validate_field("nickname", &values, CriteriaMode::FirstError)
        .is_none());
}

#[test]
#[should_panic(expected = "validator exploded")]
fn test_panicking_rule_propagates() {
    let registry = FieldRegistry::new(vec![
        FieldDescriptor::new("x", FieldKind::Text)
            .rule(Constraint::custom(|_| panic!("validator exploded"))),
    ])
    .unwrap();
    let validator = RuleBasedValidator::from_registry(&registry);
    validator.validate(&FormValues::new().with("x", "1"), CriteriaMode::FirstError);
}
