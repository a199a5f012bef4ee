//! Field descriptors

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::error::{FormError, Result};
use crate::value::Value;

/// The kind of input a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Checkbox,
    Radio,
}

impl FieldKind {
    /// Returns `true` for kinds edited as free text.
    pub fn is_textual(self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Email | FieldKind::Password)
    }

    /// The value a field of this kind holds before any input.
    pub fn empty_value(self) -> Value {
        match self {
            FieldKind::Checkbox => Value::Bool(false),
            _ => Value::Text(String::new()),
        }
    }

    /// Lowercase name, as used in markup.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One choice of a radio field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    /// Text shown next to the choice.
    pub label: String,
    /// Value bound to the field when the choice is checked.
    pub value: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Static description of one form input.
///
/// Descriptors are built once and handed to a
/// [`FieldRegistry`](crate::FieldRegistry), which checks them and owns them
/// from then on.
///
/// # Example
///
/// ```
/// use formkit::{Constraint, FieldDescriptor, FieldKind, FieldOption};
///
/// let gender = FieldDescriptor::new("gender", FieldKind::Radio)
///     .option(FieldOption::new("Male", "male"))
///     .option(FieldOption::new("Female", "female"))
///     .rule(Constraint::required("enter your gender"));
///
/// assert_eq!(gender.options().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    name: String,
    label: Option<String>,
    element_id: Option<String>,
    kind: FieldKind,
    options: Vec<FieldOption>,
    rules: Vec<Constraint>,
    default_value: Option<Value>,
}

impl FieldDescriptor {
    /// Create a descriptor with no label, options or rules.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            element_id: None,
            kind,
            options: Vec::new(),
            rules: Vec::new(),
            default_value: None,
        }
    }

    /// Set the label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the element id used to attach the label to the input.
    pub fn element_id(mut self, id: impl Into<String>) -> Self {
        self.element_id = Some(id.into());
        self
    }

    /// Add a radio option.
    pub fn option(mut self, option: FieldOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add several radio options.
    pub fn with_options(mut self, options: impl IntoIterator<Item = FieldOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Add an inline validation rule.
    pub fn rule(mut self, constraint: Constraint) -> Self {
        self.rules.push(constraint);
        self
    }

    /// Set the value the field starts with and returns to on reset.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label_text(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The element id, falling back to the field name.
    pub fn id(&self) -> &str {
        self.element_id.as_deref().unwrap_or(&self.name)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    pub fn rules(&self) -> &[Constraint] {
        &self.rules
    }

    /// The starting value: the explicit default, or the kind's empty value.
    pub fn initial_value(&self) -> Value {
        self.default_value
            .clone()
            .unwrap_or_else(|| self.kind.empty_value())
    }

    /// Check that `value` can be stored in this field.
    ///
    /// Checkboxes take booleans; the other kinds take text. A radio value must
    /// be empty or one of the options. `Null` fits no kind.
    pub fn check_value(&self, value: &Value) -> Result<()> {
        let fits = match (self.kind, value) {
            (FieldKind::Checkbox, Value::Bool(_)) => true,
            (FieldKind::Radio, Value::Text(v)) => {
                if !v.is_empty() && self.find_option(v).is_none() {
                    return Err(FormError::UnknownOption {
                        field: self.name.clone(),
                        value: v.clone(),
                    });
                }
                true
            }
            (kind, Value::Text(_)) => kind.is_textual(),
            _ => false,
        };

        if fits {
            Ok(())
        } else {
            Err(FormError::input_mismatch(
                &self.name,
                self.kind,
                value.type_name(),
            ))
        }
    }

    /// Look up an option by its value.
    pub fn find_option(&self, value: &str) -> Option<&FieldOption> {
        self.options.iter().find(|o| o.value == value)
    }
}
