//! Bounded transport-property evaluator.
//!
//! Wraps a backend correlation with input clamping: every (p, T) query is
//! first moved into `[pMin, pMax] x [TMin, TMax]` and only then handed to the
//! backend, so the backend never sees a point outside the evaluator's domain.
//! Pressure bounds live on the evaluator; temperature bounds and the
//! composition weight belong to the thermodynamic base.

use crate::clamp::{ClampCounter, ClampSide, ClampedPoint};
use crate::correlation::TransportCorrelation;
use crate::error::{ConfigError, TransportResult};
use crate::if97::If97;
use crate::pack::{PropertySample, TransportPropertyPack};
use crate::record::{Record, read_scalar, write_scalar};
use crate::thermo::EquationOfStateBase;
use st_core::units::{Pressure, Temperature};
use st_core::{clamp_to, ensure_bounds};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

/// Transport properties of a substance over a bounded (p, T) domain.
///
/// Construction validates `pMin < pMax` and checks that the whole domain
/// lies inside the backend's validity range; the base validates its own
/// temperature ordering. After that the value is immutable except through the
/// in-place blending operations, which take `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedPropertyEvaluator<B, C = If97> {
    base: B,
    p_min: f64,
    p_max: f64,
    backend: C,
}

impl<B, C> BoundedPropertyEvaluator<B, C>
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    /// Record key of the lower pressure bound.
    pub const P_MIN: &'static str = "pMin";
    /// Record key of the upper pressure bound.
    pub const P_MAX: &'static str = "pMax";

    /// Wrap `base` with pressure bounds [Pa] and an explicit backend.
    ///
    /// Fails with [`ConfigError::OutsideBackendRange`] when any point of
    /// `[pMin, pMax] x [TMin, TMax]` is outside what `backend` can evaluate.
    pub fn with_backend(base: B, p_min: f64, p_max: f64, backend: C) -> TransportResult<Self> {
        ensure_bounds(p_min, p_max, "pressure")?;
        let (t_min, t_max) = (base.t_min(), base.t_max());
        let t_valid = backend.temperature_range();
        ensure_inside(&backend, "temperature", (t_min, t_max), t_valid)?;
        let p_valid = backend.pressure_range(t_min, t_max);
        ensure_inside(&backend, "pressure", (p_min, p_max), p_valid)?;
        Ok(Self {
            base,
            p_min,
            p_max,
            backend,
        })
    }

    /// Build from a configuration record: `pMin` and `pMax` are read here,
    /// every other key is left to the base.
    pub fn from_config_with(record: &Record, backend: C) -> TransportResult<Self> {
        let p_min = read_scalar(record, Self::P_MIN)?;
        let p_max = read_scalar(record, Self::P_MAX)?;
        let base = B::from_record(record)?;
        tracing::debug!(
            backend = backend.name(),
            p_min,
            p_max,
            t_min = base.t_min(),
            t_max = base.t_max(),
            "transport evaluator configured"
        );
        Self::with_backend(base, p_min, p_max, backend)
    }

    /// Independent copy of `other`.
    pub fn from_copy(other: &Self) -> Self {
        other.clone()
    }

    /// Thermodynamic base holding the amount and temperature bounds.
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Correlation the clamped points are handed to.
    pub fn backend(&self) -> &C {
        &self.backend
    }

    /// Label of the substance, from the base.
    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// Copy under another name, with the same bounds, amount and backend.
    pub fn with_name(&self, name: &str) -> Self {
        self.with_base(self.base.with_name(name))
    }

    /// Lower pressure bound [Pa].
    pub fn p_min(&self) -> f64 {
        self.p_min
    }

    /// Upper pressure bound [Pa].
    pub fn p_max(&self) -> f64 {
        self.p_max
    }

    /// Lower temperature bound [K], from the base.
    pub fn t_min(&self) -> f64 {
        self.base.t_min()
    }

    /// Upper temperature bound [K], from the base.
    pub fn t_max(&self) -> f64 {
        self.base.t_max()
    }

    /// Composition weight, from the base.
    pub fn moles(&self) -> f64 {
        self.base.moles()
    }

    /// Clamp `p` [Pa] and `t` [K] into the domain, each axis independently.
    pub fn clamp(&self, p: f64, t: f64) -> ClampedPoint {
        let (t_min, t_max) = (self.base.t_min(), self.base.t_max());
        let point = ClampedPoint {
            p: clamp_to(p, self.p_min, self.p_max),
            t: clamp_to(t, t_min, t_max),
            pressure: ClampSide::classify(p, self.p_min, self.p_max),
            temperature: ClampSide::classify(t, t_min, t_max),
        };
        if point.pressure.is_clamped() {
            tracing::trace!(axis = "pressure", requested = p, clamped = point.p, "input clamped");
        }
        if point.temperature.is_clamped() {
            tracing::trace!(axis = "temperature", requested = t, clamped = point.t, "input clamped");
        }
        point
    }

    /// Dynamic viscosity [Pa·s] at the clamped point.
    pub fn viscosity(&self, p: f64, t: f64) -> f64 {
        let point = self.clamp(p, t);
        self.backend.mu(point.p, point.t)
    }

    /// Thermal conductivity [W/(m·K)] at the clamped point.
    pub fn thermal_conductivity(&self, p: f64, t: f64) -> f64 {
        let point = self.clamp(p, t);
        self.backend.kappa(point.p, point.t)
    }

    /// Thermal diffusivity for enthalpy, `kappa / cp` [kg/(m·s)].
    ///
    /// A zero `cp` gives a non-finite result.
    pub fn thermal_diffusivity(&self, p: f64, t: f64) -> f64 {
        let point = self.clamp(p, t);
        self.backend.kappa(point.p, point.t) / self.backend.cp(point.p, point.t)
    }

    /// All properties at one point, with one clamp and one backend call each.
    pub fn evaluate(&self, p: f64, t: f64) -> PropertySample {
        self.sample_at(self.clamp(p, t))
    }

    /// Like [`evaluate`](Self::evaluate), tallying clamp events in `counter`.
    pub fn evaluate_observed(&self, p: f64, t: f64, counter: &ClampCounter) -> PropertySample {
        let point = self.clamp(p, t);
        counter.observe(&point);
        self.sample_at(point)
    }

    /// Unit-typed evaluation.
    pub fn evaluate_pack(&self, p: Pressure, t: Temperature) -> TransportPropertyPack {
        self.evaluate(p.value, t.value).into()
    }

    fn sample_at(&self, point: ClampedPoint) -> PropertySample {
        let mu = self.backend.mu(point.p, point.t);
        let kappa = self.backend.kappa(point.p, point.t);
        let cp = self.backend.cp(point.p, point.t);
        PropertySample {
            point,
            mu,
            kappa,
            cp,
            alpha: kappa / cp,
        }
    }

    /// Mixture of `self` and `other`; pressure bounds are taken from `self`.
    pub fn combine_add(&self, other: &Self) -> Self {
        self.with_base(self.base.combine_add(&other.base))
    }

    /// `self` with `other` removed; pressure bounds are taken from `self`.
    pub fn combine_subtract(&self, other: &Self) -> Self {
        self.with_base(self.base.combine_subtract(&other.base))
    }

    /// Same substance with its amount multiplied by `s`.
    pub fn scale_by(&self, s: f64) -> Self {
        self.with_base(self.base.scale(s))
    }

    /// What has to be added to `self` to obtain `other`: `other - self`.
    pub fn equivalence_delta(&self, other: &Self) -> Self {
        other.combine_subtract(self)
    }

    /// In-place [`combine_add`](Self::combine_add).
    pub fn add_in_place(&mut self, other: &Self) {
        let before = self.base.moles();
        self.base = self.base.combine_add(&other.base);
        self.trace_mole_ratios(before, other);
    }

    /// In-place [`combine_subtract`](Self::combine_subtract).
    pub fn subtract_in_place(&mut self, other: &Self) {
        let before = self.base.moles();
        self.base = self.base.combine_subtract(&other.base);
        self.trace_mole_ratios(before, other);
    }

    /// In-place [`scale_by`](Self::scale_by).
    pub fn scale_in_place(&mut self, s: f64) {
        self.base = self.base.scale(s);
    }

    // Ratios relative to the blended amount; not kept on the value.
    fn trace_mole_ratios(&self, before: f64, other: &Self) {
        let n = self.base.moles();
        tracing::trace!(molr1 = before / n, molr2 = other.base.moles() / n, "blend ratios");
    }

    fn with_base(&self, base: B) -> Self {
        Self {
            base,
            p_min: self.p_min,
            p_max: self.p_max,
            backend: self.backend.clone(),
        }
    }

    /// Write the base's fields, then `pMin` and `pMax`, into `record`.
    pub fn write_record(&self, record: &mut Record) {
        self.base.write_record(record);
        write_scalar(record, Self::P_MIN, self.p_min);
        write_scalar(record, Self::P_MAX, self.p_max);
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        self.write_record(&mut record);
        record
    }
}

fn ensure_inside<C: TransportCorrelation>(
    backend: &C,
    what: &'static str,
    (lo, hi): (f64, f64),
    (valid_lo, valid_hi): (f64, f64),
) -> Result<(), ConfigError> {
    if lo >= valid_lo && hi <= valid_hi {
        return Ok(());
    }
    Err(ConfigError::OutsideBackendRange {
        what,
        backend: backend.name().to_string(),
        lo,
        hi,
        valid_lo,
        valid_hi,
    })
}

impl<B: EquationOfStateBase> BoundedPropertyEvaluator<B, If97> {
    /// Wrap `base` with pressure bounds [Pa], evaluated with IF97.
    pub fn from_base(base: B, p_min: f64, p_max: f64) -> TransportResult<Self> {
        Self::with_backend(base, p_min, p_max, If97)
    }

    /// Build from a configuration record, evaluated with IF97.
    pub fn from_config(record: &Record) -> TransportResult<Self> {
        Self::from_config_with(record, If97)
    }
}

/// One `key value;` line per field.
impl<B, C> fmt::Display for BoundedPropertyEvaluator<B, C>
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.to_record() {
            match (value.as_f64(), value.as_str()) {
                (Some(v), _) => writeln!(f, "{key} {v};")?,
                (None, Some(s)) => writeln!(f, "{key} {s};")?,
                (None, None) => writeln!(f, "{key} {value:?};")?,
            }
        }
        Ok(())
    }
}

impl<B, C> Add for &BoundedPropertyEvaluator<B, C>
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    type Output = BoundedPropertyEvaluator<B, C>;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine_add(rhs)
    }
}

impl<B, C> Sub for &BoundedPropertyEvaluator<B, C>
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    type Output = BoundedPropertyEvaluator<B, C>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.combine_subtract(rhs)
    }
}

impl<B, C> Mul<f64> for &BoundedPropertyEvaluator<B, C>
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    type Output = BoundedPropertyEvaluator<B, C>;

    fn mul(self, s: f64) -> Self::Output {
        self.scale_by(s)
    }
}

impl<B, C> Mul<&BoundedPropertyEvaluator<B, C>> for f64
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    type Output = BoundedPropertyEvaluator<B, C>;

    fn mul(self, rhs: &BoundedPropertyEvaluator<B, C>) -> Self::Output {
        rhs.scale_by(self)
    }
}

impl<B, C> AddAssign<&BoundedPropertyEvaluator<B, C>> for BoundedPropertyEvaluator<B, C>
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    fn add_assign(&mut self, rhs: &Self) {
        self.add_in_place(rhs);
    }
}

impl<B, C> SubAssign<&BoundedPropertyEvaluator<B, C>> for BoundedPropertyEvaluator<B, C>
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    fn sub_assign(&mut self, rhs: &Self) {
        self.subtract_in_place(rhs);
    }
}

impl<B, C> MulAssign<f64> for BoundedPropertyEvaluator<B, C>
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    fn mul_assign(&mut self, s: f64) {
        self.scale_in_place(s);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::thermo::SpecieThermo;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Smooth;

    impl TransportCorrelation for Smooth {
        fn name(&self) -> &str {
            "smooth"
        }
        fn mu(&self, p: f64, t: f64) -> f64 {
            1e-3 * (1.0 + p * 1e-9) * (300.0 / t)
        }
        fn kappa(&self, p: f64, t: f64) -> f64 {
            0.6 + p * 1e-10 + t * 1e-5
        }
        fn cp(&self, _p: f64, t: f64) -> f64 {
            4000.0 + t
        }
    }

    fn eval(n: f64, w: f64) -> BoundedPropertyEvaluator<SpecieThermo, Smooth> {
        let base = SpecieThermo::new(n, w, 300.0, 600.0).unwrap();
        BoundedPropertyEvaluator::with_backend(base, 1e5, 1e7, Smooth).unwrap()
    }

    proptest! {
        #[test]
        fn viscosity_depends_only_on_clamped_point(p in -1e8_f64..1e9, t in 0.0_f64..2000.0) {
            let e = eval(1.0, 18.0);
            let pc = clamp_to(p, e.p_min(), e.p_max());
            let tc = clamp_to(t, e.t_min(), e.t_max());
            prop_assert_eq!(e.viscosity(p, t), e.viscosity(pc, tc));
            prop_assert_eq!(e.thermal_conductivity(p, t), e.thermal_conductivity(pc, tc));
        }

        #[test]
        fn clamped_point_lies_inside_bounds(p in proptest::num::f64::ANY, t in proptest::num::f64::ANY) {
            let e = eval(1.0, 18.0);
            let point = e.clamp(p, t);
            prop_assert!(point.p >= e.p_min() && point.p <= e.p_max());
            prop_assert!(point.t >= e.t_min() && point.t <= e.t_max());
        }

        #[test]
        fn self_addition_keeps_intensive_values(n in 0.1_f64..10.0, w in 1.0_f64..100.0) {
            let a = eval(n, w);
            let twice = a.combine_add(&a);
            prop_assert_eq!(twice.moles(), 2.0 * n);
            prop_assert!((twice.base().mol_weight() - w).abs() <= 1e-12 * w);
            prop_assert_eq!(twice.t_min(), a.t_min());
            prop_assert_eq!(twice.t_max(), a.t_max());
        }

        #[test]
        fn delta_recovers_target_base(
            na in 0.5_f64..2.0,
            nb in 3.0_f64..6.0,
            wa in 10.0_f64..30.0,
            wb in 10.0_f64..30.0,
        ) {
            let a = eval(na, wa);
            let b = eval(nb, wb);
            let back = a.combine_add(&a.equivalence_delta(&b));
            prop_assert!((back.moles() - nb).abs() <= 1e-12 * nb);
            prop_assert!((back.base().mol_weight() - wb).abs() <= 1e-9 * wb);
        }

        #[test]
        fn unit_scale_is_identity(n in 0.1_f64..10.0, w in 1.0_f64..100.0) {
            let a = eval(n, w);
            prop_assert_eq!(a.scale_by(1.0), a);
        }
    }
}
