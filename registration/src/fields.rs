//! The registration form's fields and its three validation variants.
//!
//! All variants render the same five descriptors. They differ only in where
//! the rules live: inline on the descriptors, in a schema built in code, or
//! in a JSON schema document.

use formkit::{
    Constraint, FieldDescriptor, FieldKind, FieldOption, FieldRegistry, FormController,
    FormOptions, RuleBasedValidator, Schema, SchemaField, SchemaValidator, Validator,
};

/// Email format accepted by the form. Unanchored: a match anywhere passes.
pub const EMAIL_PATTERN: &str = "[a-z0-9]+@[a-z]+.[a-z]{2,3}";

/// The JSON schema document used by [`document_based`].
pub const SCHEMA_DOCUMENT: &str = include_str!("../schema/registration.json");

pub const USERNAME_REQUIRED: &str = "the username is required";
pub const USERNAME_TOO_SHORT: &str = "your username must contain at least 3 character";
pub const EMAIL_REQUIRED: &str = "the email address is required";
pub const EMAIL_FORMAT: &str = "email is incorrect format";
pub const PASSWORD_REQUIRED: &str = "the password is required";
pub const PASSWORD_TOO_SHORT: &str = "your password must contain at least 8 character";
pub const GENDER_REQUIRED: &str = "enter your gender";
pub const GENDER_UNKNOWN: &str = "gender must be male or female";

/// Which validation variant to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Rules declared inline on each descriptor.
    Rules,
    /// A schema built in code.
    Schema,
    /// A schema compiled from [`SCHEMA_DOCUMENT`].
    Document,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Rules, Variant::Schema, Variant::Document];

    /// Build the fields and validator of this variant.
    pub fn build(self) -> formkit::Result<FormVariant> {
        match self {
            Variant::Rules => rule_based(),
            Variant::Schema => schema_based(),
            Variant::Document => document_based(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Rules => "rules",
            Variant::Schema => "schema",
            Variant::Document => "document",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registry paired with the strategy that validates it.
pub struct FormVariant {
    pub registry: FieldRegistry,
    pub validator: Box<dyn Validator>,
}

impl FormVariant {
    /// Create the controller for this variant.
    pub fn into_controller(self, options: FormOptions) -> formkit::Result<FormController> {
        FormController::new(self.registry, self.validator, options)
    }
}

fn username() -> FieldDescriptor {
    FieldDescriptor::new("username", FieldKind::Text)
        .label("Username")
        .element_id("username")
}

fn email() -> FieldDescriptor {
    FieldDescriptor::new("email", FieldKind::Email)
        .label("Email Address")
        .element_id("email")
}

fn password() -> FieldDescriptor {
    FieldDescriptor::new("password", FieldKind::Password)
        .label("Password")
        .element_id("password")
}

fn is_married() -> FieldDescriptor {
    FieldDescriptor::new("isMarried", FieldKind::Checkbox)
        .label("Is Married Before")
        .element_id("isMarried")
}

fn gender() -> FieldDescriptor {
    FieldDescriptor::new("gender", FieldKind::Radio).with_options([
        FieldOption::new("Male", "male"),
        FieldOption::new("Female", "female"),
    ])
}

/// Descriptors without rules, shared by the schema variants.
fn descriptors() -> Vec<FieldDescriptor> {
    vec![username(), email(), password(), is_married(), gender()]
}

/// Rules declared inline on each descriptor.
pub fn rule_based() -> formkit::Result<FormVariant> {
    let registry = FieldRegistry::new(vec![
        username()
            .rule(Constraint::required(USERNAME_REQUIRED))
            .rule(Constraint::min_length(3, USERNAME_TOO_SHORT)),
        email()
            .rule(Constraint::required(EMAIL_REQUIRED))
            .rule(Constraint::pattern(EMAIL_PATTERN, EMAIL_FORMAT)?),
        password()
            .rule(Constraint::required(PASSWORD_REQUIRED))
            .rule(Constraint::min_length(8, PASSWORD_TOO_SHORT)),
        is_married(),
        gender().rule(Constraint::custom(|value| {
            value.is_empty().then(|| GENDER_REQUIRED.to_string())
        })),
    ])?;
    let validator = RuleBasedValidator::from_registry(&registry);
    Ok(FormVariant {
        registry,
        validator: Box::new(validator),
    })
}

/// The schema equivalent of the inline rules.
pub fn registration_schema() -> formkit::Result<Schema> {
    Ok(Schema::new()
        .field(
            SchemaField::string("username")
                .required(USERNAME_REQUIRED)
                .min_length(3, USERNAME_TOO_SHORT),
        )
        .field(
            SchemaField::string("email")
                .required(EMAIL_REQUIRED)
                .pattern(EMAIL_PATTERN, EMAIL_FORMAT)?,
        )
        .field(
            SchemaField::string("password")
                .required(PASSWORD_REQUIRED)
                .min_length(8, PASSWORD_TOO_SHORT),
        )
        .field(SchemaField::boolean("isMarried"))
        .field(
            SchemaField::string("gender")
                .required(GENDER_REQUIRED)
                .one_of(["male", "female"], GENDER_UNKNOWN),
        ))
}

/// A schema built in code.
pub fn schema_based() -> formkit::Result<FormVariant> {
    Ok(FormVariant {
        registry: FieldRegistry::new(descriptors())?,
        validator: Box::new(SchemaValidator::new(registration_schema()?)),
    })
}

/// A schema compiled from the bundled JSON document.
pub fn document_based() -> formkit::Result<FormVariant> {
    let schema = Schema::from_json(SCHEMA_DOCUMENT)?;
    Ok(FormVariant {
        registry: FieldRegistry::new(descriptors())?,
        validator: Box::new(SchemaValidator::new(schema)),
    })
}
