//! A registration form (username, email, password, married checkbox, gender
//! radio) built on `formkit`, with three interchangeable validation variants
//! and a keyboard-driven terminal model.

pub mod app;
pub mod error;
pub mod fields;
pub mod values;

pub use app::{AppAction, Key, Line, RegistrationApp, Span, Tone};
pub use error::{AppError, Result};
pub use fields::{FormVariant, Variant, document_based, rule_based, schema_based};
pub use values::RegistrationValues;
