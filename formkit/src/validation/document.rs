//! JSON schema documents.
//!
//! The declarative counterpart of [`Schema`]: the same constraints written as
//! data, so a form's rules can live outside the code.
//!
//! ```json
//! {
//!   "fields": [
//!     {
//!       "name": "username",
//!       "type": "string",
//!       "rules": [
//!         { "rule": "required", "message": "the username is required" },
//!         { "rule": "minLength", "value": 3, "message": "too short" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::constraint::Constraint;
use crate::error::{FormError, Result};

use super::schema::{Schema, SchemaField, ValueType};

/// A parsed schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub fields: Vec<DocumentField>,
}

/// One field of a schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentField {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_message: Option<String>,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// One rule of a document field: a constraint name, its argument and message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    pub message: String,
}

impl SchemaDocument {
    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(FormError::SchemaDocument)
    }

    /// Compile the document into a [`Schema`].
    ///
    /// Fails on unknown rule names, rule arguments of the wrong shape, and
    /// patterns that do not compile.
    pub fn compile(&self) -> Result<Schema> {
        let mut schema = Schema::new();
        for field in &self.fields {
            schema = schema.field(field.compile()?);
        }
        log::debug!("Compiled schema document with {} fields", self.fields.len());
        Ok(schema)
    }
}

impl DocumentField {
    fn compile(&self) -> Result<SchemaField> {
        let mut field = SchemaField::new(&self.name, self.value_type);
        if let Some(message) = &self.type_message {
            field = field.type_error(message);
        }
        for rule in &self.rules {
            field = field.constraint(rule.compile(&self.name)?);
        }
        Ok(field)
    }
}

impl RuleSpec {
    fn compile(&self, field: &str) -> Result<Constraint> {
        let message = self.message.clone();
        let constraint = match self.rule.as_str() {
            "required" => Constraint::required(message),
            "email" => Constraint::email(message),
            "minLength" => Constraint::min_length(self.length(field)?, message),
            "maxLength" => Constraint::max_length(self.length(field)?, message),
            "pattern" => {
                let pattern = self
                    .value
                    .as_ref()
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| self.invalid_value(field))?;
                Constraint::pattern(pattern, message)?
            }
            "oneOf" => {
                let values = self
                    .value
                    .as_ref()
                    .and_then(|v| v.as_array())
                    .ok_or_else(|| self.invalid_value(field))?
                    .iter()
                    .map(|v| v.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                    .ok_or_else(|| self.invalid_value(field))?;
                Constraint::one_of(values, message)
            }
            _ => {
                return Err(FormError::UnknownConstraint {
                    field: field.to_string(),
                    name: self.rule.clone(),
                });
            }
        };
        Ok(constraint)
    }

    fn length(&self, field: &str) -> Result<usize> {
        self.value
            .as_ref()
            .and_then(|v| v.as_u64())
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| self.invalid_value(field))
    }

    fn invalid_value(&self, field: &str) -> FormError {
        FormError::InvalidRuleValue {
            field: field.to_string(),
            rule: self.rule.clone(),
        }
    }
}

impl Schema {
    /// Parse and compile a JSON schema document.
    pub fn from_json(json: &str) -> Result<Self> {
        SchemaDocument::from_json(json)?.compile()
    }
}
