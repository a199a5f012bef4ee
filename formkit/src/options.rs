//! Form configuration.

use serde::{Deserialize, Serialize};

/// When fields are validated before the form was first submitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationMode {
    /// Only on submit.
    #[default]
    OnSubmit,
    /// On every change.
    OnChange,
    /// When a field loses focus.
    OnBlur,
    /// On the first blur, then on every change.
    OnTouched,
    /// On both change and blur.
    All,
}

/// When fields are validated again after the first submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevalidateMode {
    /// On every change.
    #[default]
    OnChange,
    /// When a field loses focus.
    OnBlur,
    /// Only on the next submit.
    OnSubmit,
}

/// How many failing constraints are collected per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CriteriaMode {
    /// Stop at the first failing constraint of each field.
    #[default]
    FirstError,
    /// Collect every failing constraint of each field.
    All,
}

/// Options for a [`FormController`](crate::FormController).
///
/// Deserializes from camelCase keys; missing keys take their defaults.
///
/// # Example
///
/// ```
/// use formkit::{CriteriaMode, FormOptions, RevalidateMode};
///
/// let options: FormOptions = serde_json::from_str(r#"{ "criteriaMode": "all" }"#).unwrap();
/// assert_eq!(options.criteria_mode, CriteriaMode::All);
/// assert_eq!(options.revalidate_mode, RevalidateMode::OnChange);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormOptions {
    /// Validation timing before the first submit.
    pub mode: ValidationMode,
    /// Validation timing after the first submit.
    #[serde(rename = "reValidateMode")]
    pub revalidate_mode: RevalidateMode,
    /// Errors collected per field.
    pub criteria_mode: CriteriaMode,
}

impl FormOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the validation mode used before the first submit.
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the validation mode used after the first submit.
    pub fn revalidate_mode(mut self, mode: RevalidateMode) -> Self {
        self.revalidate_mode = mode;
        self
    }

    /// Set how many errors are collected per field.
    pub fn criteria_mode(mut self, mode: CriteriaMode) -> Self {
        self.criteria_mode = mode;
        self
    }
}
