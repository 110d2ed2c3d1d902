//! Error types for circuit evaluation.

use rc_core::RcError;
use thiserror::Error;

/// Errors raised when circuit inputs cannot produce a physical trajectory.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircuitError {
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} = {value} {unit} is outside the accepted range [{min}, {max}] {unit}")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    #[error("At least one sample is required")]
    NoSamples,
}

pub type CircuitResult<T> = Result<T, CircuitError>;

impl From<RcError> for CircuitError {
    fn from(e: RcError) -> Self {
        match e {
            RcError::NonFinite { what, value } => CircuitError::NonFinite { what, value },
            RcError::NonPositive { what, value } => CircuitError::NonPositive { what, value },
        }
    }
}
