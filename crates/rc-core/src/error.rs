use thiserror::Error;

/// Scalar validation failure, named after the offending quantity.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RcError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },
}

pub type RcResult<T> = Result<T, RcError>;
