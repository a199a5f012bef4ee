//! Error types

/// Errors surfaced by the registration app.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The form rejected an event or could not be built.
    #[error("Form error: {0}")]
    Form(#[from] formkit::FormError),

    /// Terminal I/O failed.
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),

    /// The logger could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, AppError>;
