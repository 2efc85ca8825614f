//! st-transport: bounded transport-property evaluation for water and steam.
//!
//! Contains:
//! - correlation (backend trait: mu, kappa, cp of (p, T))
//! - if97 (IAPWS-IF97 backend)
//! - thermo (composition-weighted base with temperature bounds)
//! - evaluator (clamping evaluator and blending operators)
//! - record (configuration records)
//! - clamp, pack, sweeps

pub mod clamp;
pub mod correlation;
pub mod error;
pub mod evaluator;
pub mod if97;
pub mod pack;
pub mod record;
pub mod sweeps;
pub mod thermo;

pub use clamp::{ClampCounter, ClampSide, ClampedPoint};
pub use correlation::TransportCorrelation;
pub use error::{ConfigError, TransportError, TransportResult};
pub use evaluator::BoundedPropertyEvaluator;
pub use if97::If97;
pub use pack::{PropertySample, TransportPropertyPack};
pub use record::{
    Record, read_scalar, read_scalar_or, read_string_or, record_from_scalars, write_scalar,
    write_string,
};
pub use sweeps::{
    SweepDefinition, SweepResult, SweepType, execute_pressure_sweep, execute_temperature_sweep,
};
pub use thermo::{EquationOfStateBase, SpecieThermo};

/// Evaluator over the species base with the IF97 backend.
pub type WaterTransport = BoundedPropertyEvaluator<SpecieThermo, If97>;
