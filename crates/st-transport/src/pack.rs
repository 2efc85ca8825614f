//! Property samples: everything one evaluation produces at a single point.

use crate::clamp::ClampedPoint;
use st_core::units::{
    DynVisc, EnthalpyDiffusivity, Pressure, SpecHeatCapacity, Temperature, ThermalConductivity, k,
    pa, pa_s, w_per_mk,
};

/// Raw transport properties at one clamped point.
///
/// Values are whatever the backend returned; non-finite results are passed
/// through untouched and callers check finiteness themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropertySample {
    /// The point the backend actually saw.
    pub point: ClampedPoint,
    /// Dynamic viscosity [Pa·s]
    pub mu: f64,
    /// Thermal conductivity [W/(m·K)]
    pub kappa: f64,
    /// Isobaric specific heat capacity [J/(kg·K)]
    pub cp: f64,
    /// Thermal diffusivity for enthalpy, `kappa / cp` [kg/(m·s)]
    pub alpha: f64,
}

impl PropertySample {
    /// Whether every property is finite.
    pub fn is_finite(&self) -> bool {
        self.mu.is_finite() && self.kappa.is_finite() && self.cp.is_finite() && self.alpha.is_finite()
    }
}

/// Unit-typed transport properties from a single state.
///
/// `p` and `t` are the clamped inputs, so a pack always describes the state
/// that was actually evaluated.
#[derive(Clone, Debug)]
pub struct TransportPropertyPack {
    /// Pressure [Pa]
    pub p: Pressure,

    /// Temperature [K]
    pub t: Temperature,

    /// Dynamic viscosity [Pa·s]
    pub mu: DynVisc,

    /// Thermal conductivity [W/(m·K)]
    pub kappa: ThermalConductivity,

    /// Specific heat capacity at constant pressure [J/(kg·K)]
    pub cp: SpecHeatCapacity,

    /// Thermal diffusivity for enthalpy [kg/(m·s)]
    pub alpha: EnthalpyDiffusivity,

    /// Whether either input was moved onto a bound.
    pub clamped: bool,
}

impl TransportPropertyPack {
    /// Return a summary string of all contained properties (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Pack(P={:.0}Pa,T={:.2}K,mu={:.4e}Pa·s,kappa={:.4}W/m·K,cp={:.1}J/kg·K,alpha={:.4e}kg/m·s{})",
            self.p.value,
            self.t.value,
            self.mu.value,
            self.kappa.value,
            self.cp,
            self.alpha,
            if self.clamped { ",clamped" } else { "" }
        )
    }
}

impl From<PropertySample> for TransportPropertyPack {
    fn from(sample: PropertySample) -> Self {
        Self {
            p: pa(sample.point.p),
            t: k(sample.point.t),
            mu: pa_s(sample.mu),
            kappa: w_per_mk(sample.kappa),
            cp: sample.cp,
            alpha: sample.alpha,
            clamped: sample.point.was_clamped(),
        }
    }
}
