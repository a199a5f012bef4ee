//! Error types

use crate::field::FieldKind;
use crate::validation::ValueType;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FormError>;

/// Errors raised while defining or driving a form.
///
/// These are programming errors: a malformed registry, a schema that refers to
/// fields the form does not have, or an input event that does not fit the
/// field it targets. A value that fails validation is not an error here; it is
/// reported through [`FormErrors`](crate::FormErrors).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// A descriptor was declared with an empty name.
    #[error("Field name must not be empty")]
    EmptyFieldName,

    /// A validator expects a value type the field's kind cannot hold.
    #[error("Field '{field}' of kind {kind} cannot hold {expected} values")]
    TypeMismatch {
        field: String,
        kind: FieldKind,
        expected: ValueType,
    },

    /// Two descriptors share a name.
    #[error("Field '{name}' is declared more than once")]
    DuplicateField { name: String },

    /// A name that is not part of the registry was referenced.
    #[error("Field '{name}' is not registered")]
    UnknownField { name: String },

    /// A radio field was declared without options.
    #[error("Radio field '{field}' has no options")]
    MissingOptions { field: String },

    /// A non-radio field was declared with options.
    #[error("Field '{field}' of kind {kind} cannot have options")]
    UnexpectedOptions { field: String, kind: FieldKind },

    /// Two options of one radio field share a value.
    #[error("Radio field '{field}' declares option '{value}' more than once")]
    DuplicateOption { field: String, value: String },

    /// A pattern constraint could not be compiled.
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An input event does not match the kind of the field it targets.
    #[error("Field '{field}' of kind {kind} cannot accept {input} input")]
    InputMismatch {
        field: String,
        kind: FieldKind,
        input: &'static str,
    },

    /// A radio input carried a value that is not one of the field's options.
    #[error("Radio field '{field}' has no option '{value}'")]
    UnknownOption { field: String, value: String },

    /// A schema document named a constraint that does not exist.
    #[error("Unknown constraint '{name}' on field '{field}'")]
    UnknownConstraint { field: String, name: String },

    /// A schema document rule has a missing or malformed argument.
    #[error("Rule '{rule}' on field '{field}' has an invalid value")]
    InvalidRuleValue { field: String, rule: String },

    /// A schema document could not be parsed.
    #[error("Invalid schema document: {0}")]
    SchemaDocument(#[source] serde_json::Error),

    /// A values snapshot could not be converted into the requested type.
    #[error("Cannot convert form values: {0}")]
    Snapshot(#[source] serde_json::Error),
}

impl FormError {
    /// Creates a new unknown field error.
    pub fn unknown_field(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }

    /// Creates a new input mismatch error.
    pub fn input_mismatch(field: impl Into<String>, kind: FieldKind, input: &'static str) -> Self {
        Self::InputMismatch {
            field: field.into(),
            kind,
            input,
        }
    }
}
