//! Circuit parameter set with range-validated setters.

use rc_core::units::si;
use rc_core::{Capacitance, Real, Resistance, Time, Voltage, microfarad, ohm, s, volt};

use crate::error::CircuitResult;
use crate::ranges::{CAPACITANCE_UF, RESISTANCE_OHM, SOURCE_VOLTAGE_V};
use crate::summary::CircuitSummary;
use crate::transient::{self, Trajectory};

/// Resistance, capacitance and source voltage of a series RC circuit.
///
/// Every value held here lies inside the accepted input ranges, so the
/// time constant is always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircuitParams {
    resistance: Resistance,
    capacitance: Capacitance,
    source_voltage: Voltage,
}

impl Default for CircuitParams {
    fn default() -> Self {
        Self {
            resistance: ohm(RESISTANCE_OHM.default),
            capacitance: microfarad(CAPACITANCE_UF.default),
            source_voltage: volt(SOURCE_VOLTAGE_V.default),
        }
    }
}

impl CircuitParams {
    /// Build from input-surface units (Ω, μF, V), validating each range.
    pub fn from_inputs(r_ohm: Real, c_uf: Real, e0_v: Real) -> CircuitResult<Self> {
        let mut params = Self::default();
        params.set_resistance_ohm(r_ohm)?;
        params.set_capacitance_uf(c_uf)?;
        params.set_source_voltage_v(e0_v)?;
        Ok(params)
    }

    /// Build from input-surface units, clamping each value into its range.
    pub fn clamped(r_ohm: Real, c_uf: Real, e0_v: Real) -> Self {
        Self {
            resistance: ohm(RESISTANCE_OHM.clamp(r_ohm)),
            capacitance: microfarad(CAPACITANCE_UF.clamp(c_uf)),
            source_voltage: volt(SOURCE_VOLTAGE_V.clamp(e0_v)),
        }
    }

    pub fn resistance(&self) -> Resistance {
        self.resistance
    }

    pub fn capacitance(&self) -> Capacitance {
        self.capacitance
    }

    pub fn source_voltage(&self) -> Voltage {
        self.source_voltage
    }

    pub fn resistance_ohm(&self) -> Real {
        si::ohms(self.resistance)
    }

    pub fn capacitance_farad(&self) -> Real {
        si::farads(self.capacitance)
    }

    pub fn capacitance_uf(&self) -> Real {
        si::microfarads(self.capacitance)
    }

    pub fn source_voltage_v(&self) -> Real {
        si::volts(self.source_voltage)
    }

    pub fn set_resistance_ohm(&mut self, r_ohm: Real) -> CircuitResult<()> {
        let r = RESISTANCE_OHM.check(r_ohm, "resistance", "ohm")?;
        self.resistance = ohm(r);
        Ok(())
    }

    pub fn set_capacitance_uf(&mut self, c_uf: Real) -> CircuitResult<()> {
        let c = CAPACITANCE_UF.check(c_uf, "capacitance", "uF")?;
        self.capacitance = microfarad(c);
        Ok(())
    }

    pub fn set_source_voltage_v(&mut self, e0_v: Real) -> CircuitResult<()> {
        let e0 = SOURCE_VOLTAGE_V.check(e0_v, "source voltage", "V")?;
        self.source_voltage = volt(e0);
        Ok(())
    }

    /// τ = R·C.
    pub fn time_constant(&self) -> Time {
        s(transient::time_constant(
            self.resistance_ohm(),
            self.capacitance_farad(),
        ))
    }

    pub fn evaluate(&self, samples: usize) -> CircuitResult<Trajectory> {
        transient::evaluate(
            self.resistance_ohm(),
            self.capacitance_farad(),
            self.source_voltage_v(),
            samples,
        )
    }

    pub fn summary(&self) -> CircuitSummary {
        CircuitSummary::new(
            self.resistance_ohm(),
            self.capacitance_farad(),
            self.source_voltage_v(),
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CircuitParams {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CircuitParams", 3)?;
        state.serialize_field("resistance_ohm", &self.resistance_ohm())?;
        state.serialize_field("capacitance_farad", &self.capacitance_farad())?;
        state.serialize_field("source_voltage_v", &self.source_voltage_v())?;
        state.end()
    }
}
