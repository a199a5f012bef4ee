//! Typed registration values.

use formkit::FormValues;
use serde::{Deserialize, Serialize};

/// The values of a submitted registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationValues {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_married: bool,
    pub gender: String,
}

impl TryFrom<&FormValues> for RegistrationValues {
    type Error = formkit::FormError;

    fn try_from(values: &FormValues) -> Result<Self, Self::Error> {
        values.deserialize_into()
    }
}
