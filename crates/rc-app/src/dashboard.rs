//! Dashboard configuration object and the computed view model.

use rc_circuit::{CircuitParams, CircuitSummary, DEFAULT_SAMPLES, Trajectory};

use crate::chart::ChartSpec;
use crate::error::AppResult;
use crate::magnitude::Magnitude;

/// Everything the input surface controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSettings {
    pub params: CircuitParams,
    pub magnitude: Magnitude,
    pub show_derivation: bool,
    pub samples: usize,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            params: CircuitParams::default(),
            magnitude: Magnitude::default(),
            show_derivation: true,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// One full recomputation from a [`DashboardSettings`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: CircuitSummary,
    pub trajectory: Trajectory,
    pub chart: ChartSpec,
}

/// Evaluate the circuit once and build the chart for the selected magnitude.
pub fn build_dashboard(settings: &DashboardSettings) -> AppResult<Dashboard> {
    let summary = settings.params.summary();
    let trajectory = settings.params.evaluate(settings.samples)?;
    let chart = ChartSpec::for_magnitude(&trajectory, &summary, settings.magnitude);

    Ok(Dashboard {
        summary,
        trajectory,
        chart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn defaults_mirror_input_surface() {
        let settings = DashboardSettings::default();
        assert!(settings.show_derivation);
        assert_eq!(settings.samples, 500);
        assert_eq!(settings.magnitude, Magnitude::Charge);
        assert_eq!(settings.params, CircuitParams::default());
    }

    #[test]
    fn zero_samples_surface_as_circuit_error() {
        let settings = DashboardSettings {
            samples: 0,
            ..DashboardSettings::default()
        };
        let err = build_dashboard(&settings).unwrap_err();
        assert!(matches!(err, AppError::Circuit(_)));
    }
}
