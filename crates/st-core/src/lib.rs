//! st-core: numeric foundation for steam transport evaluation.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + clamping and float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
