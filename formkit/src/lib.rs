//! Headless form state and validation.
//!
//! A form is described by a [`FieldRegistry`] of [`FieldDescriptor`]s and
//! driven by a [`FormController`], which owns the current [`FormValues`] and
//! the derived [`FormErrors`]. Validation is pluggable through the
//! [`Validator`] trait: rules declared inline on each descriptor
//! ([`RuleBasedValidator`]) or a whole-object [`Schema`]
//! ([`SchemaValidator`]), which can also be compiled from a JSON
//! [`SchemaDocument`].
//!
//! # Example
//!
//! ```
//! use formkit::{
//!     Constraint, FieldDescriptor, FieldKind, FieldRegistry, FormController, FormOptions,
//!     RawInput, RuleBasedValidator,
//! };
//!
//! let registry = FieldRegistry::new(vec![
//!     FieldDescriptor::new("username", FieldKind::Text)
//!         .label("Username")
//!         .rule(Constraint::required("the username is required"))
//!         .rule(Constraint::min_length(3, "too short")),
//! ])
//! .unwrap();
//!
//! let validator = RuleBasedValidator::from_registry(&registry);
//! let mut form = FormController::new(registry, validator, FormOptions::default()).unwrap();
//!
//! form.handle_change("username", RawInput::text("ab")).unwrap();
//! assert!(form.submit(|_| unreachable!()).is_rejected());
//! assert_eq!(form.error("username").unwrap().message, "too short");
//! ```

pub mod constraint;
pub mod controller;
pub mod error;
pub mod field;
pub mod options;
pub mod registry;
pub mod validation;
pub mod value;

pub use constraint::{Constraint, ConstraintKind, Predicate};
pub use controller::{
    FieldBinding, FieldState, FieldStatus, FormController, RawInput, SubmitOutcome,
};
pub use error::{FormError, Result};
pub use field::{FieldDescriptor, FieldKind, FieldOption};
pub use options::{CriteriaMode, FormOptions, RevalidateMode, ValidationMode};
pub use registry::FieldRegistry;
pub use validation::{
    FieldError, FormErrors, Refinement, RuleBasedValidator, Schema, SchemaDocument,
    SchemaField, SchemaValidator, ValueType, Validator,
};
pub use value::{FormValues, Value};
