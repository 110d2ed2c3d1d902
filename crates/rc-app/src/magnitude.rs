//! Which trajectory the chart shows.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    /// Capacitor charge q(t)
    #[default]
    Charge,
    /// Capacitor voltage Vc(t)
    Voltage,
}

impl Magnitude {
    pub const ALL: [Magnitude; 2] = [Magnitude::Charge, Magnitude::Voltage];

    /// Label for the selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Charge => "Charge q(t) [C]",
            Self::Voltage => "Capacitor voltage Vc(t) [V]",
        }
    }

    pub fn series_name(self) -> &'static str {
        match self {
            Self::Charge => "q(t)",
            Self::Voltage => "Vc(t)",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Self::Charge => "Charge q(t) [C]",
            Self::Voltage => "Voltage Vc(t) [V]",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Charge => "Capacitor charge over time",
            Self::Voltage => "Capacitor voltage over time",
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Charge => write!(f, "charge"),
            Self::Voltage => write!(f, "voltage"),
        }
    }
}

impl FromStr for Magnitude {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "charge" | "q" => Ok(Self::Charge),
            "voltage" | "vc" => Ok(Self::Voltage),
            other => Err(AppError::InvalidInput(format!(
                "Unknown magnitude: {} (expected charge or voltage)",
                other
            ))),
        }
    }
}
