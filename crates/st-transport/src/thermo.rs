//! Thermodynamic base layer: composition weight and temperature bounds.
//!
//! The transport evaluator is layered on top of a base that knows how much
//! of the substance it represents (moles), over which temperature range it
//! is valid, and how two such bases combine when mixed.

use crate::error::{ConfigError, TransportResult};
use crate::record::{Record, read_scalar, read_scalar_or, read_string_or, write_scalar, write_string};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Capability interface of the thermodynamic base.
///
/// Combination is composition-weighted: `combine_add` describes mixing two
/// quantities of substance, `combine_subtract` removes one from another and
/// `scale` changes the amount without changing intensive properties.
pub trait EquationOfStateBase: Clone + fmt::Debug + Send + Sync {
    /// Label identifying the substance.
    fn name(&self) -> &str;

    /// Same base under another label.
    fn with_name(&self, name: &str) -> Self;

    /// Composition weight (number of moles).
    fn moles(&self) -> f64;

    /// Lowest valid temperature [K].
    fn t_min(&self) -> f64;

    /// Highest valid temperature [K].
    fn t_max(&self) -> f64;

    /// Composition-weighted sum of two bases.
    fn combine_add(&self, other: &Self) -> Self;

    /// Composition-weighted difference of two bases.
    fn combine_subtract(&self, other: &Self) -> Self;

    /// Base with its amount multiplied by `s`.
    fn scale(&self, s: f64) -> Self;

    /// Parse the base's own fields from a configuration record.
    fn from_record(record: &Record) -> TransportResult<Self>;

    /// Write the base's own fields into a configuration record.
    fn write_record(&self, record: &mut Record);
}

/// Amounts below this are replaced by it when subtracting.
const SMALL: f64 = 1e-15;

/// Species label, amount, molecular weight and temperature range.
///
/// Record keys: `name` (optional, default `specie`), `nMoles` (optional,
/// default 1), `molWeight` [kg/kmol], `TMin` [K] and `TMax` [K].
/// Combinations keep the label of the left operand.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecieThermo {
    name: String,
    n_moles: f64,
    mol_weight: f64,
    t_min: f64,
    t_max: f64,
}

impl SpecieThermo {
    pub const NAME: &'static str = "name";
    pub const N_MOLES: &'static str = "nMoles";
    pub const MOL_WEIGHT: &'static str = "molWeight";
    pub const T_MIN: &'static str = "TMin";
    pub const T_MAX: &'static str = "TMax";

    /// Label used when a record does not give one.
    pub const DEFAULT_NAME: &'static str = "specie";

    /// Molecular weight of water [kg/kmol].
    pub const WATER_MOL_WEIGHT: f64 = 18.015_268;

    /// Create a base, validating amount, weight and temperature range.
    pub fn new(n_moles: f64, mol_weight: f64, t_min: f64, t_max: f64) -> TransportResult<Self> {
        st_core::ensure_finite(n_moles, Self::N_MOLES)?;
        if !mol_weight.is_finite() || mol_weight <= 0.0 {
            return Err(ConfigError::InvalidValue {
                key: Self::MOL_WEIGHT.to_string(),
                reason: "must be positive and finite",
            }
            .into());
        }
        st_core::ensure_bounds(t_min, t_max, "temperature")?;
        Ok(Self {
            name: Self::DEFAULT_NAME.to_string(),
            n_moles,
            mol_weight,
            t_min,
            t_max,
        })
    }

    /// One mole of water over the IF97 temperature range of regions 1-3,
    /// 273.15 K to 1073.15 K.
    ///
    /// The IF97 conductivity only holds up to 100 MPa below 773.15 K,
    /// 70 MPa up to 923.15 K and 40 MPa above, so over this full range an
    /// IF97 evaluator accepts at most `pMax = 40 MPa`. Narrow the range with
    /// [`SpecieThermo::new`] to allow higher pressures.
    pub fn water() -> Self {
        Self {
            name: "water".to_string(),
            n_moles: 1.0,
            mol_weight: Self::WATER_MOL_WEIGHT,
            t_min: crate::if97::T_MIN_K,
            t_max: crate::if97::T_MAX_K,
        }
    }

    /// Molecular weight [kg/kmol].
    pub fn mol_weight(&self) -> f64 {
        self.mol_weight
    }
}

impl EquationOfStateBase for SpecieThermo {
    fn name(&self) -> &str {
        &self.name
    }

    fn with_name(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    fn moles(&self) -> f64 {
        self.n_moles
    }

    fn t_min(&self) -> f64 {
        self.t_min
    }

    fn t_max(&self) -> f64 {
        self.t_max
    }

    fn combine_add(&self, other: &Self) -> Self {
        let n_moles = self.n_moles + other.n_moles;
        Self {
            name: self.name.clone(),
            n_moles,
            mol_weight: n_moles
                / (self.n_moles / self.mol_weight + other.n_moles / other.mol_weight),
            t_min: self.t_min.max(other.t_min),
            t_max: self.t_max.min(other.t_max),
        }
    }

    fn combine_subtract(&self, other: &Self) -> Self {
        let mut n_moles = self.n_moles - other.n_moles;
        if n_moles.abs() < SMALL {
            n_moles = SMALL;
        }
        Self {
            name: self.name.clone(),
            n_moles,
            mol_weight: n_moles
                / (self.n_moles / self.mol_weight - other.n_moles / other.mol_weight),
            t_min: self.t_min.max(other.t_min),
            t_max: self.t_max.min(other.t_max),
        }
    }

    fn scale(&self, s: f64) -> Self {
        Self {
            n_moles: s * self.n_moles,
            ..self.clone()
        }
    }

    fn from_record(record: &Record) -> TransportResult<Self> {
        let name = read_string_or(record, Self::NAME, Self::DEFAULT_NAME)?;
        let n_moles = read_scalar_or(record, Self::N_MOLES, 1.0)?;
        let mol_weight = read_scalar(record, Self::MOL_WEIGHT)?;
        let t_min = read_scalar(record, Self::T_MIN)?;
        let t_max = read_scalar(record, Self::T_MAX)?;
        let base = Self::new(n_moles, mol_weight, t_min, t_max)?;
        Ok(Self { name, ..base })
    }

    fn write_record(&self, record: &mut Record) {
        write_string(record, Self::NAME, &self.name);
        write_scalar(record, Self::N_MOLES, self.n_moles);
        write_scalar(record, Self::MOL_WEIGHT, self.mol_weight);
        write_scalar(record, Self::T_MIN, self.t_min);
        write_scalar(record, Self::T_MAX, self.t_max);
    }
}

impl Add for &SpecieThermo {
    type Output = SpecieThermo;

    fn add(self, rhs: Self) -> SpecieThermo {
        self.combine_add(rhs)
    }
}

impl Sub for &SpecieThermo {
    type Output = SpecieThermo;

    fn sub(self, rhs: Self) -> SpecieThermo {
        self.combine_subtract(rhs)
    }
}

impl Mul<&SpecieThermo> for f64 {
    type Output = SpecieThermo;

    fn mul(self, rhs: &SpecieThermo) -> SpecieThermo {
        rhs.scale(self)
    }
}
