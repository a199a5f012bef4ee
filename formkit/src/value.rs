//! Field values and the form values snapshot

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{FormError, Result};

/// The current value of a single field.
///
/// Text-like inputs and radio groups hold [`Value::Text`], checkboxes hold
/// [`Value::Bool`]. [`Value::Null`] stands for "no value at all". A form never
/// stores it: setting a field to `Null` resets the field to its initial value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// Checkbox state.
    Bool(bool),
    /// Text content or selected option value.
    Text(String),
}

impl Value {
    /// Returns `true` for `Null` and the empty string.
    ///
    /// `Bool(false)` is not empty; it is a definite answer.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.is_empty(),
            Value::Bool(_) => false,
        }
    }

    /// Returns `true` if this value is a "no" for a required check.
    ///
    /// Unlike [`is_empty`](Self::is_empty) this also treats an unchecked
    /// checkbox as missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Bool(false)) || self.is_empty()
    }

    /// Returns the text content, if this is a text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a bool value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Text(_) => "string",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Snapshot of every field's current value, in registry order.
///
/// Serializes as a JSON object keyed by field name, preserving the order in
/// which fields were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: Vec<(String, Value)>,
}

impl FormValues {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the text value for a field, or `""` if absent or not text.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(Value::as_str).unwrap_or("")
    }

    /// Returns the bool value for a field, or `false` if absent or not bool.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Sets a field value, appending the field if it is new.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns `true` if the snapshot has an entry for the field.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of fields in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the snapshot has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Converts the snapshot into a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(n, v)| {
                let json = match v {
                    Value::Null => serde_json::Value::Null,
                    Value::Bool(b) => serde_json::Value::Bool(*b),
                    Value::Text(s) => serde_json::Value::String(s.clone()),
                };
                (n.clone(), json)
            })
            .collect();
        serde_json::Value::Object(map)
    }

    /// Converts the snapshot into a typed struct.
    ///
    /// # Example
    ///
    /// ```
    /// use formkit::FormValues;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Login {
    ///     user: String,
    ///     remember: bool,
    /// }
    ///
    /// let values = FormValues::new().with("user", "abc").with("remember", true);
    /// let login: Login = values.deserialize_into().unwrap();
    /// assert_eq!(login.user, "abc");
    /// assert!(login.remember);
    /// ```
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.to_json()).map_err(FormError::Snapshot)
    }
}

impl Serialize for FormValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_treats_unchecked_as_missing() {
        assert!(Value::Bool(false).is_missing());
        assert!(!Value::Bool(false).is_empty());
        assert!(Value::Null.is_missing());
        assert!(Value::from("").is_missing());
        assert!(!Value::from(" ").is_missing());
    }

    #[test]
    fn test_serialize_preserves_declaration_order() {
        let values = FormValues::new()
            .with("username", "abc")
            .with("email", "a@b.co")
            .with("isMarried", true);
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"{"username":"abc","email":"a@b.co","isMarried":true}"#);
    }

    #[test]
    fn test_set_replaces_existing_entry() {
        let mut values = FormValues::new().with("gender", "");
        values.set("gender", "male");
        assert_eq!(values.len(), 1);
        assert_eq!(values.text("gender"), "male");
    }
}
