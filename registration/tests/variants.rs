//! Behaviour shared by all three registration variants.

use std::cell::{Cell, RefCell};

use formkit::{ConstraintKind, FormController, FormOptions, RawInput};
use registration::fields::{
    EMAIL_FORMAT, EMAIL_REQUIRED, GENDER_REQUIRED, PASSWORD_REQUIRED, USERNAME_REQUIRED,
    USERNAME_TOO_SHORT,
};
use registration::{RegistrationValues, Variant};

fn form(variant: Variant) -> FormController {
    variant
        .build()
        .unwrap()
        .into_controller(FormOptions::default())
        .unwrap()
}

fn fill_valid(form: &mut FormController) {
    form.handle_change("username", RawInput::text("abc")).unwrap();
    form.handle_change("email", RawInput::text("a@b.co")).unwrap();
    form.handle_change("password", RawInput::text("12345678")).unwrap();
    form.handle_change("gender", RawInput::radio("male", true)).unwrap();
    form.handle_change("isMarried", RawInput::checked(true)).unwrap();
}

#[test]
fn test_empty_submit_flags_every_required_field() {
    for variant in Variant::ALL {
        let mut form = form(variant);
        let called = Cell::new(false);

        let outcome = form.submit(|_| called.set(true));

        assert!(outcome.is_rejected(), "{variant}");
        assert!(!called.get(), "{variant}");
        assert_eq!(form.errors().message("username"), Some(USERNAME_REQUIRED), "{variant}");
        assert_eq!(form.errors().message("email"), Some(EMAIL_REQUIRED), "{variant}");
        assert_eq!(form.errors().message("password"), Some(PASSWORD_REQUIRED), "{variant}");
        assert_eq!(form.errors().message("gender"), Some(GENDER_REQUIRED), "{variant}");
        assert!(!form.errors().contains("isMarried"), "{variant}");
    }
}

#[test]
fn test_short_username_is_the_only_error() {
    for variant in Variant::ALL {
        let mut form = form(variant);
        fill_valid(&mut form);
        form.handle_change("username", RawInput::text("ab")).unwrap();

        form.submit(|_| panic!("must not submit"));

        assert_eq!(form.errors().len(), 1, "{variant}");
        let error = form.error("username").unwrap();
        assert_eq!(error.kind, ConstraintKind::MinLength, "{variant}");
        assert_eq!(error.message, USERNAME_TOO_SHORT, "{variant}");
    }
}

#[test]
fn test_valid_entry_submits_once_with_full_snapshot() {
    let expected = RegistrationValues {
        username: "abc".into(),
        email: "a@b.co".into(),
        password: "12345678".into(),
        is_married: true,
        gender: "male".into(),
    };

    for variant in Variant::ALL {
        let mut form = form(variant);
        fill_valid(&mut form);

        let delivered = RefCell::new(Vec::new());
        let outcome = form.submit(|values| {
            delivered
                .borrow_mut()
                .push(RegistrationValues::try_from(values).unwrap());
        });

        assert!(outcome.is_submitted(), "{variant}: {}", form.errors());
        assert_eq!(delivered.into_inner(), vec![expected.clone()], "{variant}");
    }
}

#[test]
fn test_snapshot_serializes_with_form_field_names() {
    let mut form = form(Variant::Rules);
    fill_valid(&mut form);
    let json = serde_json::to_string(form.values()).unwrap();
    assert_eq!(
        json,
        r#"{"username":"abc","email":"a@b.co","password":"12345678","isMarried":true,"gender":"male"}"#
    );
}

#[test]
fn test_rule_variant_reports_required_before_min_length() {
    let mut form = form(Variant::Rules);
    form.submit(|_| {});
    let error = form.error("username").unwrap();
    assert_eq!(error.kind, ConstraintKind::Required);
}

#[test]
fn test_schema_variants_report_two_fields_at_once() {
    for variant in [Variant::Schema, Variant::Document] {
        let mut form = form(variant);
        fill_valid(&mut form);
        form.handle_change("username", RawInput::text("ab")).unwrap();
        form.handle_change("email", RawInput::text("nope")).unwrap();

        form.submit(|_| {});

        assert_eq!(form.errors().len(), 2, "{variant}");
        assert_eq!(form.errors().message("email"), Some(EMAIL_FORMAT), "{variant}");
        assert!(form.errors().contains("username"), "{variant}");
    }
}

#[test]
fn test_correction_clears_error_without_resubmitting() {
    for variant in Variant::ALL {
        let mut form = form(variant);
        fill_valid(&mut form);
        form.handle_change("email", RawInput::text("nope")).unwrap();
        form.submit(|_| {});
        assert!(form.error("email").is_some(), "{variant}");

        form.handle_change("email", RawInput::text("a@b.co")).unwrap();

        assert!(form.error("email").is_none(), "{variant}");
        assert_eq!(form.submit_count(), 1, "{variant}");
    }
}

#[test]
fn test_gender_accepts_listed_options() {
    for variant in Variant::ALL {
        let mut form = form(variant);
        fill_valid(&mut form);
        form.handle_change("gender", RawInput::radio("female", true)).unwrap();
        assert!(form.trigger("gender").unwrap(), "{variant}");
    }
}

#[test]
fn test_variants_share_field_order() {
    for variant in Variant::ALL {
        let form = form(variant);
        let names: Vec<&str> = form.registry().names().collect();
        assert_eq!(
            names,
            ["username", "email", "password", "isMarried", "gender"],
            "{variant}"
        );
    }
}

#[test]
fn test_cleared_checkbox_still_converts() {
    for variant in Variant::ALL {
        let mut form = form(variant);
        fill_valid(&mut form);
        form.set_value("isMarried", formkit::Value::Null).unwrap();

        let delivered = RefCell::new(None);
        form.submit(|values| {
            *delivered.borrow_mut() = Some(RegistrationValues::try_from(values).unwrap());
        });

        let values = delivered.into_inner().unwrap();
        assert!(!values.is_married, "{variant}");
    }
}
