//! Transport property sweeps.
//!
//! Evaluates an evaluator along a pressure or temperature range with the other
//! coordinate held fixed. Points are independent, so they are computed in
//! parallel; results keep the order of the generated points.

use crate::correlation::TransportCorrelation;
use crate::error::{TransportError, TransportResult};
use crate::evaluator::BoundedPropertyEvaluator;
use crate::pack::TransportPropertyPack;
use crate::thermo::EquationOfStateBase;
use rayon::prelude::*;
use std::fmt;

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepType {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of a single parameter sweep, in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a validated sweep.
    pub fn new(start: f64, end: f64, num_points: usize, sweep_type: SweepType) -> TransportResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(invalid("sweep endpoints must be finite"));
        }
        if num_points < 2 {
            return Err(invalid("sweep must have at least 2 points"));
        }
        if (start - end).abs() < 1e-12 {
            return Err(invalid("start and end values must be different"));
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(invalid("logarithmic sweep needs positive endpoints"));
        }
        Ok(Self {
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    pub fn linear(start: f64, end: f64, num_points: usize) -> TransportResult<Self> {
        Self::new(start, end, num_points, SweepType::Linear)
    }

    pub fn logarithmic(start: f64, end: f64, num_points: usize) -> TransportResult<Self> {
        Self::new(start, end, num_points, SweepType::Logarithmic)
    }

    /// Generate all points in the sweep. The last point is exactly `end`.
    pub fn generate_points(&self) -> Vec<f64> {
        if self.num_points < 2 {
            return vec![self.start];
        }
        let steps = (self.num_points - 1) as f64;
        let mut points: Vec<f64> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end - self.start) / steps;
                (0..self.num_points)
                    .map(|i| self.start + i as f64 * delta)
                    .collect()
            }
            SweepType::Logarithmic => {
                let log_start = self.start.ln();
                let log_delta = (self.end.ln() - log_start) / steps;
                (0..self.num_points)
                    .map(|i| (log_start + i as f64 * log_delta).exp())
                    .collect()
            }
        };
        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

fn invalid(what: &str) -> TransportError {
    TransportError::InvalidArg {
        what: what.to_string(),
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} to {} ({} points, {})",
            self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

/// Result of a transport property sweep.
#[derive(Debug, Clone)]
pub struct SweepResult {
    /// Independent variable values (the sweep parameter, before clamping)
    pub independent_values: Vec<f64>,
    /// One pack per independent value, in the same order
    pub packs: Vec<TransportPropertyPack>,
    /// Number of points where either input was clamped
    pub clamped_points: usize,
}

impl SweepResult {
    fn from_packs(independent_values: Vec<f64>, packs: Vec<TransportPropertyPack>) -> Self {
        let clamped_points = packs.iter().filter(|pack| pack.clamped).count();
        Self {
            independent_values,
            packs,
            clamped_points,
        }
    }

    pub fn len(&self) -> usize {
        self.packs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packs.is_empty()
    }

    /// Viscosity array [Pa·s]
    pub fn viscosity_pa_s(&self) -> Vec<f64> {
        self.packs.iter().map(|pack| pack.mu.value).collect()
    }

    /// Thermal conductivity array [W/(m·K)]
    pub fn conductivity_w_m_k(&self) -> Vec<f64> {
        self.packs.iter().map(|pack| pack.kappa.value).collect()
    }

    /// Thermal diffusivity array [kg/(m·s)]
    pub fn diffusivity_kg_m_s(&self) -> Vec<f64> {
        self.packs.iter().map(|pack| pack.alpha).collect()
    }

    /// Number of points whose properties are all finite.
    pub fn num_finite(&self) -> usize {
        self.packs
            .iter()
            .filter(|pack| {
                pack.mu.value.is_finite()
                    && pack.kappa.value.is_finite()
                    && pack.cp.is_finite()
                    && pack.alpha.is_finite()
            })
            .count()
    }
}

/// Execute a pressure sweep at fixed temperature [K].
pub fn execute_pressure_sweep<B, C>(
    evaluator: &BoundedPropertyEvaluator<B, C>,
    sweep: &SweepDefinition,
    fixed_temperature_k: f64,
) -> SweepResult
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    let pressures = sweep.generate_points();
    tracing::debug!(%sweep, t = fixed_temperature_k, "pressure sweep");
    let packs = pressures
        .par_iter()
        .map(|&p| TransportPropertyPack::from(evaluator.evaluate(p, fixed_temperature_k)))
        .collect();
    SweepResult::from_packs(pressures, packs)
}

/// Execute a temperature sweep at fixed pressure [Pa].
pub fn execute_temperature_sweep<B, C>(
    evaluator: &BoundedPropertyEvaluator<B, C>,
    sweep: &SweepDefinition,
    fixed_pressure_pa: f64,
) -> SweepResult
where
    B: EquationOfStateBase,
    C: TransportCorrelation + Clone,
{
    let temperatures = sweep.generate_points();
    tracing::debug!(%sweep, p = fixed_pressure_pa, "temperature sweep");
    let packs = temperatures
        .par_iter()
        .map(|&t| TransportPropertyPack::from(evaluator.evaluate(fixed_pressure_pa, t)))
        .collect();
    SweepResult::from_packs(temperatures, packs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermo::SpecieThermo;

    fn water(t_min: f64, t_max: f64) -> BoundedPropertyEvaluator<SpecieThermo> {
        let base = SpecieThermo::new(1.0, SpecieThermo::WATER_MOL_WEIGHT, t_min, t_max).unwrap();
        BoundedPropertyEvaluator::from_base(base, 1e5, 1e7).unwrap()
    }

    #[test]
    fn linear_sweep_generation() {
        let sweep = SweepDefinition::linear(300.0, 400.0, 5).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 300.0).abs() < 1e-9);
        assert!((points[2] - 350.0).abs() < 1e-9);
        assert_eq!(points[4], 400.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep = SweepDefinition::logarithmic(1e5, 1e6, 3).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], 1e5);
        assert_eq!(points[2], 1e6);
        let expected_mid = (1e5_f64 * 1e6_f64).sqrt();
        assert!((points[1] - expected_mid).abs() / expected_mid < 1e-9);
    }

    #[test]
    fn rejects_invalid_definitions() {
        assert!(SweepDefinition::linear(300.0, 400.0, 1).is_err());
        assert!(SweepDefinition::linear(300.0, 300.0, 5).is_err());
        assert!(SweepDefinition::logarithmic(0.0, 1e6, 5).is_err());
        assert!(SweepDefinition::linear(f64::NAN, 1.0, 5).is_err());
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs())
    }

    #[test]
    fn temperature_sweep_keeps_order() {
        let eval = water(300.0, 600.0);
        let sweep = SweepDefinition::linear(300.0, 450.0, 4).unwrap();
        let result = execute_temperature_sweep(&eval, &sweep, 1e6);

        assert_eq!(result.len(), 4);
        assert_eq!(result.clamped_points, 0);
        assert_eq!(result.num_finite(), 4);
        for (t, pack) in result.independent_values.iter().zip(&result.packs) {
            assert!((pack.t.value - t).abs() < 1e-9);
            assert!(close(pack.mu.value, eval.viscosity(1e6, *t)));
        }
        // Liquid viscosity falls with temperature.
        let mu = result.viscosity_pa_s();
        assert!(mu.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn pressure_sweep_counts_clamped_points() {
        let eval = water(300.0, 600.0);
        let sweep = SweepDefinition::linear(5e4, 1.5e7, 3).unwrap();
        let result = execute_pressure_sweep(&eval, &sweep, 350.0);

        assert_eq!(result.clamped_points, 2);
        assert!(result.packs[0].clamped);
        assert!(!result.packs[1].clamped);
        assert!(close(result.packs[0].mu.value, eval.viscosity(1e5, 350.0)));
        assert!(close(result.packs[2].mu.value, eval.viscosity(1e7, 350.0)));
    }
}
