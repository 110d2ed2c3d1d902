// rc-core/src/units.rs

use uom::si::f64::{
    Capacitance as UomCapacitance, ElectricCharge as UomElectricCharge,
    ElectricPotential as UomElectricPotential, ElectricalResistance as UomElectricalResistance,
    Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Resistance = UomElectricalResistance;
pub type Capacitance = UomCapacitance;
pub type Voltage = UomElectricPotential;
pub type Charge = UomElectricCharge;
pub type Time = UomTime;

#[inline]
pub fn ohm(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

#[inline]
pub fn farad(v: f64) -> Capacitance {
    use uom::si::capacitance::farad;
    Capacitance::new::<farad>(v)
}

#[inline]
pub fn microfarad(v: f64) -> Capacitance {
    use uom::si::capacitance::microfarad;
    Capacitance::new::<microfarad>(v)
}

#[inline]
pub fn volt(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn coulomb(v: f64) -> Charge {
    use uom::si::electric_charge::coulomb;
    Charge::new::<coulomb>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

/// Raw SI readers, used where the math drops down to `f64`.
pub mod si {
    use super::*;

    #[inline]
    pub fn ohms(r: Resistance) -> f64 {
        r.get::<uom::si::electrical_resistance::ohm>()
    }

    #[inline]
    pub fn farads(c: Capacitance) -> f64 {
        c.get::<uom::si::capacitance::farad>()
    }

    #[inline]
    pub fn microfarads(c: Capacitance) -> f64 {
        c.get::<uom::si::capacitance::microfarad>()
    }

    #[inline]
    pub fn volts(v: Voltage) -> f64 {
        v.get::<uom::si::electric_potential::volt>()
    }

    #[inline]
    pub fn coulombs(q: Charge) -> f64 {
        q.get::<uom::si::electric_charge::coulomb>()
    }

    #[inline]
    pub fn seconds(t: Time) -> f64 {
        t.get::<uom::si::time::second>()
    }
}
