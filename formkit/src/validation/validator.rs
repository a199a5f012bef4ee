//! The validation strategy trait.

use crate::constraint::{Constraint, ConstraintKind};
use crate::options::CriteriaMode;
use crate::value::{FormValues, Value};

use super::result::{FieldError, FormErrors};
use super::schema::ValueType;

/// A validation strategy.
///
/// Validation is synchronous and pure: the same snapshot always produces the
/// same errors. A custom predicate that panics is not caught.
pub trait Validator: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Names of the fields this strategy constrains.
    fn fields(&self) -> Vec<&str>;

    /// The value type this strategy expects for `field`, if it checks types.
    fn value_type(&self, _field: &str) -> Option<ValueType> {
        None
    }

    /// Validate every field of the snapshot.
    fn validate(&self, values: &FormValues, criteria: CriteriaMode) -> FormErrors;

    /// Validate a single field.
    ///
    /// The default runs the full validation and keeps the one entry, which
    /// is what whole-object strategies need.
    fn validate_field(
        &self,
        field: &str,
        values: &FormValues,
        criteria: CriteriaMode,
    ) -> Option<FieldError> {
        self.validate(values, criteria).remove(field)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fields(&self) -> Vec<&str> {
        (**self).fields()
    }

    fn value_type(&self, field: &str) -> Option<ValueType> {
        (**self).value_type(field)
    }

    fn validate(&self, values: &FormValues, criteria: CriteriaMode) -> FormErrors {
        (**self).validate(values, criteria)
    }

    fn validate_field(
        &self,
        field: &str,
        values: &FormValues,
        criteria: CriteriaMode,
    ) -> Option<FieldError> {
        (**self).validate_field(field, values, criteria)
    }
}

/// Run `constraints` (already in precedence order) against one value.
pub(crate) fn evaluate_constraints(
    constraints: &[Constraint],
    value: &Value,
    criteria: CriteriaMode,
) -> Vec<(ConstraintKind, String)> {
    let mut failures = Vec::new();
    for constraint in constraints {
        if let Some(message) = constraint.evaluate(value) {
            failures.push((constraint.kind(), message));
            if criteria == CriteriaMode::FirstError {
                break;
            }
        }
    }
    failures
}

/// Stable-sort constraints into evaluation order.
pub(crate) fn in_precedence_order(mut constraints: Vec<Constraint>) -> Vec<Constraint> {
    constraints.sort_by_key(|c| c.kind().precedence());
    constraints
}
