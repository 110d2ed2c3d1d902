//! Error types for the rc-app service layer.

/// Application error type shared by the CLI and GUI frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Circuit error: {0}")]
    Circuit(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<rc_circuit::CircuitError> for AppError {
    fn from(err: rc_circuit::CircuitError) -> Self {
        AppError::Circuit(err.to_string())
    }
}
