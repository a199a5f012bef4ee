//! Inline, per-field rules.

use crate::constraint::Constraint;
use crate::options::CriteriaMode;
use crate::registry::FieldRegistry;
use crate::value::{FormValues, Value};

use super::result::{FieldError, FormErrors};
use super::validator::{Validator, evaluate_constraints, in_precedence_order};

/// Validates each field against the constraints declared on its descriptor.
///
/// Fields are independent: a failure in one never affects another. Within a
/// field, constraints run `required` first, then length, then format, then
/// custom checks; ties keep declaration order.
#[derive(Debug, Clone)]
pub struct RuleBasedValidator {
    fields: Vec<(String, Vec<Constraint>)>,
}

impl RuleBasedValidator {
    /// Collect the inline rules of every registered field.
    pub fn from_registry(registry: &FieldRegistry) -> Self {
        let fields = registry
            .iter()
            .filter(|f| !f.rules().is_empty())
            .map(|f| (f.name().to_string(), in_precedence_order(f.rules().to_vec())))
            .collect();
        Self { fields }
    }

    fn check(
        &self,
        name: &str,
        constraints: &[Constraint],
        values: &FormValues,
        criteria: CriteriaMode,
    ) -> Option<FieldError> {
        let value = values.get(name).unwrap_or(&Value::Null);
        FieldError::from_failures(name, evaluate_constraints(constraints, value, criteria))
    }
}

impl Validator for RuleBasedValidator {
    fn name(&self) -> &'static str {
        "rules"
    }

    fn fields(&self) -> Vec<&str> {
        self.fields.iter().map(|(n, _)| n.as_str()).collect()
    }

    fn validate(&self, values: &FormValues, criteria: CriteriaMode) -> FormErrors {
        self.fields
            .iter()
            .filter_map(|(name, constraints)| self.check(name, constraints, values, criteria))
            .collect()
    }

    fn validate_field(
        &self,
        field: &str,
        values: &FormValues,
        criteria: CriteriaMode,
    ) -> Option<FieldError> {
        let (name, constraints) = self.fields.iter().find(|(n, _)| n == field)?;
        self.check(name, constraints, values, criteria)
    }
}
