//! The form controller.
//!
//! [`FormController`] owns a form's values, errors and per-field state. A
//! renderer registers each descriptor to get a [`FieldBinding`], forwards raw
//! input events to it, and reads values and error messages back for display.

mod binding;
mod state;

pub use binding::{FieldBinding, RawInput};
pub use state::{FieldState, FieldStatus};

use crate::error::{FormError, Result};
use crate::field::{FieldDescriptor, FieldKind};
use crate::options::{FormOptions, RevalidateMode, ValidationMode};
use crate::registry::FieldRegistry;
use crate::validation::{FieldError, FormErrors, Validator, ValueType};
use crate::value::{FormValues, Value};

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field was valid and the callback ran.
    Submitted,
    /// Validation failed; `errors` fields are invalid and the callback did not run.
    Rejected { errors: usize },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_submitted()
    }
}

/// Drives one form: input binding, validation and submission.
///
/// Before the first submit, fields are validated according to
/// [`FormOptions::mode`]; afterwards according to
/// [`FormOptions::revalidate_mode`]. A triggered field validation only
/// updates that field's error, even when the strategy checks the whole
/// snapshot.
pub struct FormController {
    registry: FieldRegistry,
    validator: Box<dyn Validator>,
    options: FormOptions,
    values: FormValues,
    errors: FormErrors,
    /// Indexed by registry position.
    states: Vec<FieldState>,
    submit_count: u32,
}

impl FormController {
    /// Create a controller for `registry` validated by `validator`.
    ///
    /// Fails if the validator constrains a field the registry does not have,
    /// or expects a value type the field's kind cannot hold.
    pub fn new<V>(registry: FieldRegistry, validator: V, options: FormOptions) -> Result<Self>
    where
        V: Validator + 'static,
    {
        check_validator(&registry, &validator)?;

        log::debug!(
            "Creating form with {} fields, {} validation, {:?}",
            registry.len(),
            validator.name(),
            options
        );

        let values = initial_values(&registry);
        let states = vec![FieldState::default(); registry.len()];

        Ok(Self {
            registry,
            validator: Box::new(validator),
            options,
            values,
            errors: FormErrors::new(),
            states,
            submit_count: 0,
        })
    }

    // -------------------------------------------------------------------------
    // Binding
    // -------------------------------------------------------------------------

    /// Get the binding for a registered field.
    pub fn register(&self, name: &str) -> Result<FieldBinding> {
        Ok(FieldBinding::new(self.registry.require(name)?))
    }

    /// Bindings for every field, in declaration order.
    pub fn bindings(&self) -> Vec<FieldBinding> {
        self.registry.iter().map(FieldBinding::new).collect()
    }

    // -------------------------------------------------------------------------
    // Input events
    // -------------------------------------------------------------------------

    /// Apply a change event to a field.
    pub fn handle_change(&mut self, name: &str, input: RawInput) -> Result<()> {
        let index = self.index_of(name)?;
        log::trace!("Change on '{}': {:?}", name, input);

        let value = read_input(
            &self.registry,
            index,
            self.values.get(name).unwrap_or(&Value::Null),
            input,
        )?;
        self.apply_value(index, value);
        Ok(())
    }

    /// Apply a blur event to a field.
    pub fn handle_blur(&mut self, name: &str) -> Result<()> {
        let index = self.index_of(name)?;
        self.states[index].touched = true;

        if self.validates_on_blur() {
            self.validate_at(index);
        }
        Ok(())
    }

    /// Set a value programmatically. Validation timing is the same as for a
    /// change event.
    ///
    /// [`Value::Null`] resets the field to its initial value, so a checkbox
    /// always holds a boolean.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let index = self.index_of(name)?;
        let field = self.registry.at(index);
        let value = match value.into() {
            Value::Null => field.initial_value(),
            value => value,
        };
        field.check_value(&value)?;
        self.apply_value(index, value);
        Ok(())
    }

    fn apply_value(&mut self, index: usize, value: Value) {
        let name = self.field_name(index).to_string();
        if !self.states[index].dirty {
            log::debug!("Field '{}' is now dirty", name);
        }
        self.states[index].dirty = true;
        self.values.set(name, value);

        if self.validates_on_change(index) {
            self.validate_at(index);
        }
    }

    fn validates_on_change(&self, index: usize) -> bool {
        if self.is_submitted() {
            return self.options.revalidate_mode == RevalidateMode::OnChange;
        }
        match self.options.mode {
            ValidationMode::OnChange | ValidationMode::All => true,
            ValidationMode::OnTouched => self.states[index].touched,
            ValidationMode::OnSubmit | ValidationMode::OnBlur => false,
        }
    }

    fn validates_on_blur(&self) -> bool {
        if self.is_submitted() {
            return self.options.revalidate_mode == RevalidateMode::OnBlur;
        }
        matches!(
            self.options.mode,
            ValidationMode::OnBlur | ValidationMode::OnTouched | ValidationMode::All
        )
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Validate the current snapshot without touching stored errors.
    pub fn validate(&self) -> FormErrors {
        self.validator
            .validate(&self.values, self.options.criteria_mode)
    }

    /// Validate one field and store the result. Returns `true` if it is valid.
    pub fn trigger(&mut self, name: &str) -> Result<bool> {
        let index = self.index_of(name)?;
        Ok(self.validate_at(index).is_none())
    }

    /// Validate every field and store the result. Returns `true` if all are valid.
    pub fn trigger_all(&mut self) -> bool {
        self.run_full_validation();
        self.errors.is_empty()
    }

    fn validate_at(&mut self, index: usize) -> Option<&FieldError> {
        let name = self.field_name(index).to_string();
        let error = self
            .validator
            .validate_field(&name, &self.values, self.options.criteria_mode);

        match &error {
            Some(e) => log::debug!("Field '{}' invalid ({}): {}", name, e.kind, e.message),
            None => log::debug!("Field '{}' valid", name),
        }

        self.states[index].validated = true;
        self.errors.update(&name, error);
        self.errors.get(&name)
    }

    fn run_full_validation(&mut self) {
        self.errors = self.validate();
        for state in &mut self.states {
            state.validated = true;
        }
        log::debug!(
            "Validated form with {} validation: {} invalid fields",
            self.validator.name(),
            self.errors.len()
        );
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate the whole form and, if it is valid, hand the values to `on_valid`.
    ///
    /// On failure the errors stay populated for display and `on_valid` is not
    /// called. The form stays editable either way.
    pub fn submit<F>(&mut self, on_valid: F) -> SubmitOutcome
    where
        F: FnOnce(&FormValues),
    {
        self.submit_or(on_valid, |_| {})
    }

    /// Like [`submit`](Self::submit), calling `on_invalid` with the errors on failure.
    pub fn submit_or<F, G>(&mut self, on_valid: F, on_invalid: G) -> SubmitOutcome
    where
        F: FnOnce(&FormValues),
        G: FnOnce(&FormErrors),
    {
        self.submit_count += 1;
        self.run_full_validation();

        if self.errors.is_empty() {
            log::info!("Form submitted (attempt {})", self.submit_count);
            on_valid(&self.values);
            SubmitOutcome::Submitted
        } else {
            log::warn!(
                "Form submission rejected (attempt {}): {}",
                self.submit_count,
                self.errors
            );
            on_invalid(&self.errors);
            SubmitOutcome::Rejected {
                errors: self.errors.len(),
            }
        }
    }

    /// Restore initial values and forget errors, field states and submissions.
    pub fn reset(&mut self) {
        self.values = initial_values(&self.registry);
        self.errors.clear();
        self.states.fill(FieldState::default());
        self.submit_count = 0;
        log::debug!("Form reset");
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    /// Name of the validation strategy in use.
    pub fn strategy(&self) -> &'static str {
        self.validator.name()
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&FieldError> {
        self.errors.get(name)
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn field_state(&self, name: &str) -> Option<FieldState> {
        self.registry.position(name).map(|i| self.states[i])
    }

    pub fn field_status(&self, name: &str) -> Option<FieldStatus> {
        self.field_state(name)
            .map(|state| FieldStatus::derive(state, self.errors.contains(name)))
    }

    /// Check if the form was submitted at least once.
    pub fn is_submitted(&self) -> bool {
        self.submit_count > 0
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// Check if no field currently has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Check if any field was changed.
    pub fn is_dirty(&self) -> bool {
        self.states.iter().any(|s| s.dirty)
    }

    /// The first invalid field in declaration order (for focusing).
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.registry.names().find(|n| self.errors.contains(n))
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.registry
            .position(name)
            .ok_or_else(|| FormError::unknown_field(name))
    }

    fn field_name(&self, index: usize) -> &str {
        self.descriptor(index).name()
    }

    fn descriptor(&self, index: usize) -> &FieldDescriptor {
        self.registry.at(index)
    }
}

impl std::fmt::Debug for FormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormController")
            .field("strategy", &self.validator.name())
            .field("options", &self.options)
            .field("values", &self.values)
            .field("errors", &self.errors)
            .field("submit_count", &self.submit_count)
            .finish_non_exhaustive()
    }
}

fn check_validator(registry: &FieldRegistry, validator: &dyn Validator) -> Result<()> {
    for name in validator.fields() {
        let field = registry.require(name)?;
        if let Some(expected) = validator.value_type(name)
            && expected != ValueType::of_kind(field.kind())
        {
            return Err(FormError::TypeMismatch {
                field: name.to_string(),
                kind: field.kind(),
                expected,
            });
        }
    }
    Ok(())
}

fn initial_values(registry: &FieldRegistry) -> FormValues {
    let mut values = FormValues::new();
    for field in registry {
        values.set(field.name(), field.initial_value());
    }
    values
}

/// Turn a raw event into the field's new value.
fn read_input(
    registry: &FieldRegistry,
    index: usize,
    current: &Value,
    input: RawInput,
) -> Result<Value> {
    let field = registry.at(index);
    let mismatch = |input: &RawInput| FormError::input_mismatch(field.name(), field.kind(), input.shape());

    match (field.kind(), input) {
        (kind, RawInput::Text(text)) if kind.is_textual() => Ok(Value::Text(text)),
        (FieldKind::Checkbox, RawInput::Checked(checked)) => Ok(Value::Bool(checked)),
        (FieldKind::Radio, RawInput::Radio { value, checked }) => {
            if field.find_option(&value).is_none() {
                return Err(FormError::UnknownOption {
                    field: field.name().to_string(),
                    value,
                });
            }
            if checked {
                Ok(Value::Text(value))
            } else if current.as_str() == Some(value.as_str()) {
                Ok(field.initial_value())
            } else {
                Ok(current.clone())
            }
        }
        (_, input) => Err(mismatch(&input)),
    }
}
