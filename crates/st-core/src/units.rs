// st-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Pressure as UomPressure,
    ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type ThermalConductivity = UomThermalConductivity;

/// Specific heat capacity [J/(kg·K)].
///
/// Not one of the aliases above, so we use f64 with clear documentation.
pub type SpecHeatCapacity = f64;

/// Thermal diffusivity on an enthalpy basis, `kappa / cp` [kg/(m·s)].
pub type EnthalpyDiffusivity = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn w_per_mk(v: f64) -> ThermalConductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalConductivity::new::<watt_per_meter_kelvin>(v)
}

pub mod constants {
    /// IF97 specific gas constant of water [kJ/(kg·K)].
    pub const R_WATER_KJ_KG_K: f64 = 0.461_526;
    /// Critical temperature of water [K].
    pub const T_CRIT_K: f64 = 647.096;
    /// Critical density of water [kg/m³].
    pub const RHO_CRIT_KG_M3: f64 = 322.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _mu = pa_s(1e-3);
        let _kappa = w_per_mk(0.6);
    }

    #[test]
    fn megapascal_scales_to_pascal() {
        assert!((mpa(1.0).value - 1.0e6).abs() < 1e-6);
    }
}
