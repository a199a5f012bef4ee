//! Form validation strategies.
//!
//! Both strategies share the [`Validator`] trait, so a
//! [`FormController`](crate::FormController) does not care where the rules
//! live:
//!
//! - [`RuleBasedValidator`] reads the constraints declared inline on each
//!   [`FieldDescriptor`](crate::FieldDescriptor).
//! - [`SchemaValidator`] checks the whole values snapshot against a
//!   [`Schema`], built in code or compiled from a JSON [`SchemaDocument`].
//!
//! # Example
//!
//! ```
//! use formkit::{CriteriaMode, FormValues, Schema, SchemaField, SchemaValidator, Validator};
//!
//! let schema = Schema::new()
//!     .field(SchemaField::string("username").required("required").min_length(3, "too short"))
//!     .field(SchemaField::string("password").required("required").min_length(8, "too short"));
//! let validator = SchemaValidator::new(schema);
//!
//! let values = FormValues::new().with("username", "ab").with("password", "");
//! let errors = validator.validate(&values, CriteriaMode::FirstError);
//! assert_eq!(errors.len(), 2);
//! ```

mod document;
mod result;
mod rules;
mod schema;
mod validator;

pub use document::{DocumentField, RuleSpec, SchemaDocument};
pub use result::{FieldError, FormErrors};
pub use rules::RuleBasedValidator;
pub use schema::{Refinement, Schema, SchemaField, SchemaValidator, ValueType};
pub use validator::Validator;
