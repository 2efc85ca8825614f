//! IAPWS-IF97 correlation backend for water and steam.
//!
//! Provides the three pure functions the evaluator needs, all in SI units:
//! - `mu(p, T)` dynamic viscosity [Pa·s]
//! - `kappa(p, T)` thermal conductivity [W/(m·K)]
//! - `cp(p, T)` isobaric specific heat capacity [J/(kg·K)]
//!
//! Only forward (p, T) evaluation is implemented: region selection, the
//! Gibbs formulations of regions 1, 2 and 5, and the Helmholtz formulation of
//! region 3 with a density solve. Backward equations are out of scope.
//!
//! # Example
//!
//! ```
//! use st_transport::{If97, TransportCorrelation};
//!
//! let water = If97;
//! let mu = water.mu(101_325.0, 300.0);
//! assert!(mu > 8.0e-4 && mu < 9.0e-4);
//! ```

mod region1;
mod region2;
mod region3;
mod region5;
pub mod saturation;
mod transport;

use crate::correlation::TransportCorrelation;
use thiserror::Error;

/// Lowest temperature of the formulation [K].
pub const T_MIN_K: f64 = 273.15;
/// Upper temperature of regions 1-3 [K].
pub const T_MAX_K: f64 = 1073.15;
/// Upper temperature of region 5 [K].
pub const T_MAX_R5_K: f64 = 2273.15;
/// Upper pressure of regions 1-3 [MPa].
pub const P_MAX_MPA: f64 = 100.0;
/// Upper pressure of region 5 [MPa].
pub const P_MAX_R5_MPA: f64 = 50.0;

/// Errors raised by the IF97 forward equations.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum If97Error {
    #[error("Non-finite input")]
    NonFiniteInput,

    #[error("Temperature out of IF97 range: {t_k} K")]
    TemperatureOutOfRange { t_k: f64 },

    #[error("Pressure out of IF97 range: {p_mpa} MPa")]
    PressureOutOfRange { p_mpa: f64 },

    #[error("Invalid intermediate value")]
    InvalidIntermediateValue,

    #[error("No convergence for {what}")]
    NoConvergence { what: &'static str },
}

pub type If97Result<T> = Result<T, If97Error>;

/// IF97 regions reachable from a (p, T) query.
///
/// Region 4 (the saturation line itself) has no single (p, T) state; points
/// on it resolve to region 1 when `p >= psat(T)` and to region 2 otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    R1,
    R2,
    R3,
    R5,
}

/// Density and cp at one state point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointProps {
    /// Density [kg/m³]
    pub density: f64,
    /// Isobaric specific heat capacity [J/(kg·K)]
    pub cp: f64,
}

/// Select the IF97 region for pressure [MPa] and temperature [K].
pub fn region_from_p_t(p_mpa: f64, t_k: f64) -> If97Result<Region> {
    if !p_mpa.is_finite() || !t_k.is_finite() {
        return Err(If97Error::NonFiniteInput);
    }
    if p_mpa <= 0.0 {
        return Err(If97Error::PressureOutOfRange { p_mpa });
    }
    if t_k > T_MAX_K {
        if t_k > T_MAX_R5_K {
            return Err(If97Error::TemperatureOutOfRange { t_k });
        }
        if p_mpa > P_MAX_R5_MPA {
            return Err(If97Error::PressureOutOfRange { p_mpa });
        }
        return Ok(Region::R5);
    }
    if t_k < T_MIN_K {
        return Err(If97Error::TemperatureOutOfRange { t_k });
    }
    if p_mpa > P_MAX_MPA {
        return Err(If97Error::PressureOutOfRange { p_mpa });
    }

    if t_k <= 623.15 {
        if p_mpa >= saturation::psat_mpa(t_k)? {
            Ok(Region::R1)
        } else {
            Ok(Region::R2)
        }
    } else if p_mpa > saturation::b23_p_mpa(t_k) {
        Ok(Region::R3)
    } else {
        Ok(Region::R2)
    }
}

fn point_props(p_mpa: f64, t_k: f64) -> If97Result<PointProps> {
    match region_from_p_t(p_mpa, t_k)? {
        Region::R1 => region1::props(p_mpa, t_k),
        Region::R2 => region2::props(p_mpa, t_k),
        Region::R3 => region3::props(p_mpa, t_k),
        Region::R5 => region5::props(p_mpa, t_k),
    }
}

/// Density [kg/m³] at pressure [MPa] and temperature [K].
pub fn density_p_t(p_mpa: f64, t_k: f64) -> If97Result<f64> {
    point_props(p_mpa, t_k).map(|props| props.density)
}

/// Isobaric specific heat capacity [J/(kg·K)].
pub fn cp_p_t(p_mpa: f64, t_k: f64) -> If97Result<f64> {
    point_props(p_mpa, t_k).map(|props| props.cp)
}

/// Dynamic viscosity [Pa·s].
pub fn viscosity_p_t(p_mpa: f64, t_k: f64) -> If97Result<f64> {
    let props = point_props(p_mpa, t_k)?;
    transport::viscosity(props.density, t_k)
}

/// Thermal conductivity [W/(m·K)].
pub fn thermal_conductivity_p_t(p_mpa: f64, t_k: f64) -> If97Result<f64> {
    let props = point_props(p_mpa, t_k)?;
    transport::thermal_conductivity(p_mpa, props.density, t_k)
}

/// IF97 water/steam as a [`TransportCorrelation`].
///
/// Stateless, so a single value can be shared freely across threads.
/// Failures of the forward equations surface as `NaN`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct If97;

impl If97 {
    fn or_nan(what: &'static str, p: f64, t: f64, result: If97Result<f64>) -> f64 {
        result.unwrap_or_else(|err| {
            tracing::debug!(property = what, p, t, error = %err, "IF97 evaluation failed");
            f64::NAN
        })
    }
}

impl TransportCorrelation for If97 {
    fn name(&self) -> &str {
        "IAPWS-IF97"
    }

    fn temperature_range(&self) -> (f64, f64) {
        (T_MIN_K, transport::VISC_T_MAX_K)
    }

    fn pressure_range(&self, _t_min: f64, t_max: f64) -> (f64, f64) {
        let mut p_max_mpa = P_MAX_MPA.min(transport::conductivity_p_max_mpa(t_max));
        if t_max > T_MAX_K {
            p_max_mpa = p_max_mpa.min(P_MAX_R5_MPA);
        }
        (f64::MIN_POSITIVE, p_max_mpa * 1e6)
    }

    fn mu(&self, p: f64, t: f64) -> f64 {
        Self::or_nan("mu", p, t, viscosity_p_t(p / 1e6, t))
    }

    fn kappa(&self, p: f64, t: f64) -> f64 {
        Self::or_nan("kappa", p, t, thermal_conductivity_p_t(p / 1e6, t))
    }

    fn cp(&self, p: f64, t: f64) -> f64 {
        Self::or_nan("cp", p, t, cp_p_t(p / 1e6, t))
    }
}
