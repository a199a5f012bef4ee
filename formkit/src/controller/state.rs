//! Per-field interaction state.

/// What has happened to a field so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    /// The user changed the value at least once.
    pub dirty: bool,
    /// The field lost focus at least once.
    pub touched: bool,
    /// The field was validated at least once.
    pub validated: bool,
}

/// Where a field is in its lifecycle.
///
/// `Pristine -> Dirty` on the first input, then `Valid`/`Invalid` once the
/// field is validated. Fields stay editable after submission, so `Invalid`
/// returns to `Valid` as soon as an input satisfies every rule. A field the
/// user never changed stays `Pristine` unless validation flagged it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Pristine,
    Dirty,
    Valid,
    Invalid,
}

impl FieldStatus {
    pub(crate) fn derive(state: FieldState, has_error: bool) -> Self {
        if has_error {
            FieldStatus::Invalid
        } else if !state.dirty {
            FieldStatus::Pristine
        } else if state.validated {
            FieldStatus::Valid
        } else {
            FieldStatus::Dirty
        }
    }
}
