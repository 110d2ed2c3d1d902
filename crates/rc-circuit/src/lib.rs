//! Series RC charging transient.
//!
//! Provides:
//! - Circuit parameters with range-validated setters
//! - Accepted input ranges and defaults
//! - Linear time sampling
//! - Closed-form charge/voltage evaluation (integrating-factor solution)
//! - Circuit summary values (time constant, asymptotes, settling table)

pub mod error;
pub mod params;
pub mod ranges;
pub mod sampling;
pub mod summary;
pub mod transient;

pub use error::{CircuitError, CircuitResult};
pub use params::CircuitParams;
pub use ranges::{
    CAPACITANCE_UF, DEFAULT_SAMPLES, FALLBACK_HORIZON_S, HORIZON_TIME_CONSTANTS, ParamRange,
    RESISTANCE_OHM, SOURCE_VOLTAGE_V,
};
pub use sampling::linspace;
pub use summary::{CircuitSummary, SettlingRow, settling_table};
pub use transient::{
    Trajectory, charge_at, charge_fraction, evaluate, plot_horizon, time_constant, voltage_at,
};
