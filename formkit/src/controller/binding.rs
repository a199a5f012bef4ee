//! Bindings between rendered inputs and the controller.

use crate::error::Result;
use crate::field::{FieldDescriptor, FieldKind, FieldOption};

use super::FormController;

/// A raw input event, as read from the rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// New content of a text, email or password input.
    Text(String),
    /// New state of a checkbox.
    Checked(bool),
    /// One radio input of a group changed its checked state.
    Radio { value: String, checked: bool },
}

impl RawInput {
    pub fn text(value: impl Into<String>) -> Self {
        RawInput::Text(value.into())
    }

    pub fn checked(checked: bool) -> Self {
        RawInput::Checked(checked)
    }

    pub fn radio(value: impl Into<String>, checked: bool) -> Self {
        RawInput::Radio {
            value: value.into(),
            checked,
        }
    }

    /// Short name of the input shape, for error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            RawInput::Text(_) => "text",
            RawInput::Checked(_) => "checked",
            RawInput::Radio { .. } => "radio",
        }
    }
}

/// Everything a renderer needs to connect one input to a form.
///
/// Returned by [`FormController::register`]. The binding holds no reference to
/// the controller; its handlers take the controller explicitly, so a
/// renderer can keep bindings around between events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    name: String,
    id: String,
    label: Option<String>,
    kind: FieldKind,
    options: Vec<FieldOption>,
}

impl FieldBinding {
    pub(crate) fn new(descriptor: &FieldDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            id: descriptor.id().to_string(),
            label: descriptor.label_text().map(str::to_string),
            kind: descriptor.kind(),
            options: descriptor.options().to_vec(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element id of the rendered input.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Radio options. One input is rendered per option, all sharing this
    /// binding's name.
    pub fn options(&self) -> &[FieldOption] {
        &self.options
    }

    /// Element id of one radio option's input.
    pub fn option_id(&self, value: &str) -> String {
        format!("{}-{}", self.id, value)
    }

    /// Change handler.
    pub fn change(&self, form: &mut FormController, input: RawInput) -> Result<()> {
        form.handle_change(&self.name, input)
    }

    /// Blur handler.
    pub fn blur(&self, form: &mut FormController) -> Result<()> {
        form.handle_blur(&self.name)
    }
}
