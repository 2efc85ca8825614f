use crate::{CoreError, CoreResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Bound `v` to `[lo, hi]`: upper bound first, then lower bound.
///
/// Unlike `f64::clamp` this never panics, and a NaN input lands on `hi`.
#[inline]
pub fn clamp_to(v: Real, lo: Real, hi: Real) -> Real {
    v.min(hi).max(lo)
}

/// Check that `[lo, hi]` is a finite, non-empty interval.
pub fn ensure_bounds(lo: Real, hi: Real, what: &'static str) -> CoreResult<()> {
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return Err(CoreError::InvalidBounds { what, lo, hi });
    }
    Ok(())
}
