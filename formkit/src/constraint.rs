//! Validation constraints
//!
//! A [`Constraint`] is one check with its own message. Rule-based forms attach
//! constraints to descriptors; schemas attach them to schema fields. Both
//! evaluate them the same way.

use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::value::Value;

/// Custom check: returns `Some(message)` when the value is invalid.
pub type Predicate = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Identifies which constraint produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKind {
    Required,
    MinLength,
    MaxLength,
    Pattern,
    Email,
    OneOf,
    /// A schema-level type check.
    Type,
    /// A custom predicate or whole-object refinement.
    Validate,
}

impl ConstraintKind {
    /// Evaluation rank. Lower ranks run first within a field.
    pub fn precedence(self) -> u8 {
        match self {
            ConstraintKind::Type => 0,
            ConstraintKind::Required => 1,
            ConstraintKind::MinLength | ConstraintKind::MaxLength => 2,
            ConstraintKind::Pattern | ConstraintKind::Email | ConstraintKind::OneOf => 3,
            ConstraintKind::Validate => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConstraintKind::Required => "required",
            ConstraintKind::MinLength => "minLength",
            ConstraintKind::MaxLength => "maxLength",
            ConstraintKind::Pattern => "pattern",
            ConstraintKind::Email => "email",
            ConstraintKind::OneOf => "oneOf",
            ConstraintKind::Type => "type",
            ConstraintKind::Validate => "validate",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation check.
///
/// Every constraint except [`Required`](Constraint::Required) and
/// [`Custom`](Constraint::Custom) accepts an empty value, so optional fields
/// only have to satisfy their format rules once something was entered.
#[derive(Clone)]
pub enum Constraint {
    /// Value must be present: not null, not `""`, not an unchecked box.
    Required { message: String },
    /// Text must have at least `min` characters.
    MinLength { min: usize, message: String },
    /// Text must have at most `max` characters.
    MaxLength { max: usize, message: String },
    /// Text must match the pattern somewhere.
    Pattern { regex: Regex, message: String },
    /// Text must be a valid email address.
    Email { message: String },
    /// Text must be one of the listed values.
    OneOf { values: Vec<String>, message: String },
    /// Arbitrary check. Runs on empty values too.
    Custom { predicate: Predicate },
}

impl Constraint {
    pub fn required(message: impl Into<String>) -> Self {
        Self::Required {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::MinLength {
            min,
            message: message.into(),
        }
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::MaxLength {
            max,
            message: message.into(),
        }
    }

    /// Compile a pattern constraint.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| FormError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self::Pattern {
            regex,
            message: message.into(),
        })
    }

    pub fn email(message: impl Into<String>) -> Self {
        Self::Email {
            message: message.into(),
        }
    }

    pub fn one_of<I, S>(values: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf {
            values: values.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }

    /// A custom check returning the error message, or `None` when valid.
    ///
    /// A predicate that panics is not caught; the panic reaches the caller of
    /// whatever triggered validation.
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        Self::Custom {
            predicate: Arc::new(predicate),
        }
    }

    /// A custom boolean check with a fixed message.
    pub fn check<F>(f: F, message: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        Self::custom(move |v| if f(v) { None } else { Some(message.clone()) })
    }

    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Required { .. } => ConstraintKind::Required,
            Constraint::MinLength { .. } => ConstraintKind::MinLength,
            Constraint::MaxLength { .. } => ConstraintKind::MaxLength,
            Constraint::Pattern { .. } => ConstraintKind::Pattern,
            Constraint::Email { .. } => ConstraintKind::Email,
            Constraint::OneOf { .. } => ConstraintKind::OneOf,
            Constraint::Custom { .. } => ConstraintKind::Validate,
        }
    }

    /// Check a value. Returns the error message on failure.
    pub fn evaluate(&self, value: &Value) -> Option<String> {
        match self {
            Constraint::Required { message } => value.is_missing().then(|| message.clone()),
            Constraint::Custom { predicate } => predicate(value),
            _ if value.is_empty() => None,
            Constraint::MinLength { min, message } => value
                .as_str()
                .filter(|s| s.chars().count() < *min)
                .map(|_| message.clone()),
            Constraint::MaxLength { max, message } => value
                .as_str()
                .filter(|s| s.chars().count() > *max)
                .map(|_| message.clone()),
            Constraint::Pattern { regex, message } => value
                .as_str()
                .filter(|s| !regex.is_match(s))
                .map(|_| message.clone()),
            Constraint::Email { message } => value
                .as_str()
                .filter(|s| !email_address::EmailAddress::is_valid(s))
                .map(|_| message.clone()),
            Constraint::OneOf { values, message } => value
                .as_str()
                .filter(|s| !values.iter().any(|v| v == s))
                .map(|_| message.clone()),
        }
    }
}

impl std::fmt::Debug for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Required { message } => {
                f.debug_struct("Required").field("message", message).finish()
            }
            Constraint::MinLength { min, message } => f
                .debug_struct("MinLength")
                .field("min", min)
                .field("message", message)
                .finish(),
            Constraint::MaxLength { max, message } => f
                .debug_struct("MaxLength")
                .field("max", max)
                .field("message", message)
                .finish(),
            Constraint::Pattern { regex, message } => f
                .debug_struct("Pattern")
                .field("regex", &regex.as_str())
                .field("message", message)
                .finish(),
            Constraint::Email { message } => {
                f.debug_struct("Email").field("message", message).finish()
            }
            Constraint::OneOf { values, message } => f
                .debug_struct("OneOf")
                .field("values", values)
                .field("message", message)
                .finish(),
            Constraint::Custom { .. } => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_unchecked_box() {
        let c = Constraint::required("must accept");
        assert_eq!(c.evaluate(&Value::Bool(false)), Some("must accept".into()));
        assert_eq!(c.evaluate(&Value::Bool(true)), None);
    }

    #[test]
    fn test_format_rules_skip_empty_values() {
        let min = Constraint::min_length(3, "short");
        let pattern = Constraint::pattern("^x+$", "bad").unwrap();
        assert_eq!(min.evaluate(&Value::from("")), None);
        assert_eq!(pattern.evaluate(&Value::Null), None);
        assert_eq!(min.evaluate(&Value::from("ab")), Some("short".into()));
    }

    #[test]
    fn test_min_length_counts_chars() {
        let c = Constraint::min_length(3, "short");
        assert_eq!(c.evaluate(&Value::from("äöü")), None);
    }

    #[test]
    fn test_pattern_is_unanchored() {
        let c = Constraint::pattern("[a-z0-9]+@[a-z]+.[a-z]{2,3}", "bad").unwrap();
        assert_eq!(c.evaluate(&Value::from("  a@b.co  ")), None);
        assert_eq!(c.evaluate(&Value::from("nope")), Some("bad".into()));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let err = Constraint::pattern("(unclosed", "bad").unwrap_err();
        assert!(matches!(err, FormError::InvalidPattern { .. }));
    }

    #[test]
    fn test_custom_sees_empty_values() {
        let c = Constraint::custom(|v| v.is_empty().then(|| "enter your gender".to_string()));
        assert_eq!(c.evaluate(&Value::from("")), Some("enter your gender".into()));
        assert_eq!(c.evaluate(&Value::from("male")), None);
    }
}
