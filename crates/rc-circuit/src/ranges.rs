//! Accepted input ranges and defaults for the circuit parameters.

use rc_core::{Real, ensure_finite};

use crate::error::{CircuitError, CircuitResult};

/// Closed interval accepted by an input, with its default and an optional UI step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: Real,
    pub max: Real,
    /// Slider increment. A hint for input surfaces, not enforced by validation.
    pub step: Option<Real>,
    pub default: Real,
}

impl ParamRange {
    pub const fn new(min: Real, max: Real, default: Real) -> Self {
        Self {
            min,
            max,
            step: None,
            default,
        }
    }

    pub const fn with_step(self, step: Real) -> Self {
        Self {
            step: Some(step),
            ..self
        }
    }

    /// NaN is never contained.
    pub fn contains(&self, v: Real) -> bool {
        v >= self.min && v <= self.max
    }

    /// Clamp into the range; NaN maps to the default.
    pub fn clamp(&self, v: Real) -> Real {
        if v.is_nan() {
            self.default
        } else {
            v.clamp(self.min, self.max)
        }
    }

    /// Validate a raw input against the range.
    pub fn check(&self, v: Real, what: &'static str, unit: &'static str) -> CircuitResult<Real> {
        let v = ensure_finite(v, what)?;
        if self.contains(v) {
            Ok(v)
        } else {
            Err(CircuitError::OutOfRange {
                what,
                value: v,
                min: self.min,
                max: self.max,
                unit,
            })
        }
    }
}

/// Resistance input, ohms.
pub const RESISTANCE_OHM: ParamRange = ParamRange::new(100.0, 10_000.0, 1_000.0).with_step(100.0);

/// Capacitance input, microfarads (converted to farads at the parameter boundary).
pub const CAPACITANCE_UF: ParamRange = ParamRange::new(0.1, 1_000.0, 100.0);

/// Source voltage input, volts.
pub const SOURCE_VOLTAGE_V: ParamRange = ParamRange::new(1.0, 30.0, 5.0);

/// Points per trajectory.
pub const DEFAULT_SAMPLES: usize = 500;

/// Plot horizon in time constants; 1 - e^-5 covers 99.3% of the asymptote.
pub const HORIZON_TIME_CONSTANTS: Real = 5.0;

/// Horizon used when the time constant is degenerate.
pub const FALLBACK_HORIZON_S: Real = 1.0;
