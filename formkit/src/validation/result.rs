use serde::Serialize;
use serde::ser::SerializeMap;

use crate::constraint::ConstraintKind;

/// The validation error of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name.
    pub field: String,
    /// Constraint that produced `message`.
    pub kind: ConstraintKind,
    /// Message to show next to the field.
    pub message: String,
    /// Every failing constraint, in evaluation order.
    ///
    /// Holds only the reported failure unless errors are collected with
    /// [`CriteriaMode::All`](crate::CriteriaMode::All).
    pub types: Vec<(ConstraintKind, String)>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: ConstraintKind, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            field: field.into(),
            kind,
            types: vec![(kind, message.clone())],
            message,
        }
    }

    /// Build an error from every failure of one field. `None` if there are none.
    pub fn from_failures(
        field: impl Into<String>,
        failures: Vec<(ConstraintKind, String)>,
    ) -> Option<Self> {
        let (kind, message) = failures.first().cloned()?;
        Some(Self {
            field: field.into(),
            kind,
            message,
            types: failures,
        })
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Current error per field. A field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get the error for a field.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    /// Get the message for a field.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Record an error, replacing any previous error of the same field.
    pub fn insert(&mut self, error: FieldError) {
        match self.errors.iter_mut().find(|e| e.field == error.field) {
            Some(slot) => *slot = error,
            None => self.errors.push(error),
        }
    }

    /// Remove and return the error of a field.
    pub fn remove(&mut self, field: &str) -> Option<FieldError> {
        let index = self.errors.iter().position(|e| e.field == field)?;
        Some(self.errors.remove(index))
    }

    /// Set or clear the error of a field.
    pub fn update(&mut self, field: &str, error: Option<FieldError>) {
        match error {
            Some(error) => self.insert(error),
            None => {
                self.remove(field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Get the first recorded error (if any).
    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Names of the fields with errors.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }
}

impl FromIterator<FieldError> for FormErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = FormErrors::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

impl std::fmt::Display for FormErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Serializes as `{ field: { "type": kind, "message": message } }`.
impl Serialize for FormErrors {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Entry<'a> {
            #[serde(rename = "type")]
            kind: ConstraintKind,
            message: &'a str,
        }

        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(
                &error.field,
                &Entry {
                    kind: error.kind,
                    message: &error.message,
                },
            )?;
        }
        map.end()
    }
}
