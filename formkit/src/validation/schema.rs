//! Whole-object schemas.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constraint::{Constraint, ConstraintKind};
use crate::error::Result;
use crate::field::FieldKind;
use crate::options::CriteriaMode;
use crate::value::{FormValues, Value};

use super::result::{FieldError, FormErrors};
use super::validator::{Validator, evaluate_constraints, in_precedence_order};

/// The value type a schema field expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    #[serde(alias = "bool")]
    Boolean,
}

impl ValueType {
    /// Returns `true` if `value` has this type. `Null` fits every type.
    pub fn accepts(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null) | (ValueType::String, Value::Text(_)) | (ValueType::Boolean, Value::Bool(_))
        )
    }

    /// The type a field of `kind` holds.
    pub fn of_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Checkbox => ValueType::Boolean,
            _ => ValueType::String,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A check over the whole snapshot, reported on one field.
#[derive(Clone)]
pub struct Refinement {
    predicate: Arc<dyn Fn(&FormValues) -> bool + Send + Sync>,
    message: String,
}

impl Refinement {
    pub fn new<F>(predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    fn evaluate(&self, values: &FormValues) -> Option<String> {
        if (self.predicate)(values) {
            None
        } else {
            Some(self.message.clone())
        }
    }
}

impl std::fmt::Debug for Refinement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Refinement")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Schema entry for one field.
#[derive(Debug, Clone)]
pub struct SchemaField {
    name: String,
    value_type: ValueType,
    type_message: Option<String>,
    constraints: Vec<Constraint>,
    refinements: Vec<Refinement>,
}

impl SchemaField {
    pub fn new(name: impl Into<String>, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            value_type,
            type_message: None,
            constraints: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// A field holding text.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::String)
    }

    /// A field holding a checkbox state.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ValueType::Boolean)
    }

    /// Message reported when the value has the wrong type.
    pub fn type_error(mut self, message: impl Into<String>) -> Self {
        self.type_message = Some(message.into());
        self
    }

    /// Add any constraint.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.constraint(Constraint::required(message))
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.constraint(Constraint::min_length(min, message))
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.constraint(Constraint::max_length(max, message))
    }

    /// Add a pattern constraint. Fails if the pattern does not compile.
    pub fn pattern(self, pattern: &str, message: impl Into<String>) -> Result<Self> {
        Ok(self.constraint(Constraint::pattern(pattern, message)?))
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.constraint(Constraint::email(message))
    }

    pub fn one_of<I, S>(self, values: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraint(Constraint::one_of(values, message))
    }

    /// Add a check over the whole snapshot.
    ///
    /// Refinements only run once the field's own constraints pass.
    pub fn refine<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FormValues) -> bool + Send + Sync + 'static,
    {
        self.refinements.push(Refinement::new(predicate, message));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    fn check(&self, values: &FormValues, criteria: CriteriaMode) -> Option<FieldError> {
        let value = values.get(&self.name).unwrap_or(&Value::Null);

        if !self.value_type.accepts(value) {
            let message = self.type_message.clone().unwrap_or_else(|| {
                format!("{} must be a {}", self.name, self.value_type.as_str())
            });
            return Some(FieldError::new(&self.name, ConstraintKind::Type, message));
        }

        let mut failures = evaluate_constraints(&self.constraints, value, criteria);
        if failures.is_empty() {
            for refinement in &self.refinements {
                if let Some(message) = refinement.evaluate(values) {
                    failures.push((ConstraintKind::Validate, message));
                    if criteria == CriteriaMode::FirstError {
                        break;
                    }
                }
            }
        }

        FieldError::from_failures(&self.name, failures)
    }
}

/// An ordered set of schema fields.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<SchemaField>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. A later entry with the same name replaces the earlier one.
    pub fn field(mut self, field: SchemaField) -> Self {
        let field = SchemaField {
            constraints: in_precedence_order(field.constraints),
            ..field
        };
        match self.fields.iter_mut().find(|f| f.name == field.name) {
            Some(slot) => *slot = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Validates the full snapshot against a [`Schema`].
///
/// Every schema field is checked on every run; one field's failure never
/// hides another's.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    schema: Schema,
}

impl SchemaValidator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl From<Schema> for SchemaValidator {
    fn from(schema: Schema) -> Self {
        Self::new(schema)
    }
}

impl Validator for SchemaValidator {
    fn name(&self) -> &'static str {
        "schema"
    }

    fn fields(&self) -> Vec<&str> {
        self.schema.iter().map(|f| f.name()).collect()
    }

    fn value_type(&self, field: &str) -> Option<ValueType> {
        self.schema.get(field).map(|f| f.value_type())
    }

    fn validate(&self, values: &FormValues, criteria: CriteriaMode) -> FormErrors {
        self.schema
            .iter()
            .filter_map(|field| field.check(values, criteria))
            .collect()
    }
}
