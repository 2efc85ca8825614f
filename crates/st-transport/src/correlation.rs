//! Backend correlation trait.

use std::sync::Arc;

/// Pure transport-property functions of pressure [Pa] and temperature [K].
///
/// Implementations must be thread-safe (Send + Sync) and side-effect free:
/// the same inputs always give the same outputs. The evaluator only calls
/// them with points inside its bounds, and refuses bounds that reach past
/// the ranges reported here. Outside their own domain implementations should
/// return a non-finite value rather than panic.
pub trait TransportCorrelation: Send + Sync {
    /// Get the correlation name (for debugging/logging).
    fn name(&self) -> &str;

    /// Temperature range [K] over which all three properties are defined.
    fn temperature_range(&self) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Pressure range [Pa] over which all three properties are defined at
    /// every temperature in `[t_min, t_max]`.
    fn pressure_range(&self, _t_min: f64, _t_max: f64) -> (f64, f64) {
        (f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Dynamic viscosity [Pa·s].
    fn mu(&self, p: f64, t: f64) -> f64;

    /// Thermal conductivity [W/(m·K)].
    fn kappa(&self, p: f64, t: f64) -> f64;

    /// Isobaric specific heat capacity [J/(kg·K)].
    fn cp(&self, p: f64, t: f64) -> f64;
}

impl<C: TransportCorrelation + ?Sized> TransportCorrelation for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn temperature_range(&self) -> (f64, f64) {
        (**self).temperature_range()
    }

    fn pressure_range(&self, t_min: f64, t_max: f64) -> (f64, f64) {
        (**self).pressure_range(t_min, t_max)
    }

    fn mu(&self, p: f64, t: f64) -> f64 {
        (**self).mu(p, t)
    }

    fn kappa(&self, p: f64, t: f64) -> f64 {
        (**self).kappa(p, t)
    }

    fn cp(&self, p: f64, t: f64) -> f64 {
        (**self).cp(p, t)
    }
}
