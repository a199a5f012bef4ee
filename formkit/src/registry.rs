//! Field registry

use std::collections::HashSet;

use crate::error::{FormError, Result};
use crate::field::{FieldDescriptor, FieldKind};

/// Ordered, immutable list of the fields a form has.
///
/// The registry is the single source of truth for which fields exist: values
/// and errors are only ever keyed by names found here.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<FieldDescriptor>,
}

impl FieldRegistry {
    /// Build a registry, checking every descriptor.
    ///
    /// Fails if a name is empty or repeated, a radio field has no options,
    /// a non-radio field has options, a radio field repeats an option
    /// value, or a default does not fit its field.
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self> {
        let mut seen = HashSet::new();

        for field in &fields {
            let name = field.name();
            if name.is_empty() {
                return Err(FormError::EmptyFieldName);
            }
            if !seen.insert(name) {
                return Err(FormError::DuplicateField {
                    name: name.to_string(),
                });
            }
            check_options(field)?;
            field.check_value(&field.initial_value())?;
        }

        log::debug!("Registered {} form fields", fields.len());
        Ok(Self { fields })
    }

    /// Iterate over descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter()
    }

    /// Look up a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Look up a descriptor by name, failing if it is not registered.
    pub fn require(&self, name: &str) -> Result<&FieldDescriptor> {
        self.get(name).ok_or_else(|| FormError::unknown_field(name))
    }

    /// Descriptor at a position. Panics if out of range, like slice indexing.
    pub(crate) fn at(&self, index: usize) -> &FieldDescriptor {
        &self.fields[index]
    }

    /// Position of a field in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldRegistry {
    type Item = &'a FieldDescriptor;
    type IntoIter = std::slice::Iter<'a, FieldDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

fn check_options(field: &FieldDescriptor) -> Result<()> {
    let options = field.options();

    if field.kind() != FieldKind::Radio {
        if !options.is_empty() {
            return Err(FormError::UnexpectedOptions {
                field: field.name().to_string(),
                kind: field.kind(),
            });
        }
        return Ok(());
    }

    if options.is_empty() {
        return Err(FormError::MissingOptions {
            field: field.name().to_string(),
        });
    }

    let mut values = HashSet::new();
    for option in options {
        if !values.insert(option.value.as_str()) {
            return Err(FormError::DuplicateOption {
                field: field.name().to_string(),
                value: option.value.clone(),
            });
        }
    }

    Ok(())
}
