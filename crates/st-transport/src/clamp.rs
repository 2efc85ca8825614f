//! Clamp observation.
//!
//! Out-of-range inputs are clamped silently: results never carry a flag and
//! no error is raised. These types let callers see when it happened.

use std::sync::atomic::{AtomicU64, Ordering};

/// Where a requested value sat relative to its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampSide {
    Within,
    Below,
    Above,
}

impl ClampSide {
    /// Classify `requested` against `[lo, hi]`. NaN counts as above, since
    /// clamping sends it to `hi`.
    pub fn classify(requested: f64, lo: f64, hi: f64) -> Self {
        if requested < lo {
            ClampSide::Below
        } else if requested <= hi {
            ClampSide::Within
        } else {
            ClampSide::Above
        }
    }

    pub fn is_clamped(self) -> bool {
        self != ClampSide::Within
    }
}

/// A (p, T) pair after clamping, with what happened on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedPoint {
    /// Clamped pressure [Pa]
    pub p: f64,
    /// Clamped temperature [K]
    pub t: f64,
    pub pressure: ClampSide,
    pub temperature: ClampSide,
}

impl ClampedPoint {
    pub fn was_clamped(&self) -> bool {
        self.pressure.is_clamped() || self.temperature.is_clamped()
    }
}

/// Thread-safe tally of evaluations and clamp events.
#[derive(Debug, Default)]
pub struct ClampCounter {
    evaluations: AtomicU64,
    pressure_clamps: AtomicU64,
    temperature_clamps: AtomicU64,
}

impl ClampCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluation at `point`.
    pub fn observe(&self, point: &ClampedPoint) {
        self.evaluations.fetch_add(1, Ordering::Relaxed);
        if point.pressure.is_clamped() {
            self.pressure_clamps.fetch_add(1, Ordering::Relaxed);
        }
        if point.temperature.is_clamped() {
            self.temperature_clamps.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn evaluations(&self) -> u64 {
        self.evaluations.load(Ordering::Relaxed)
    }

    pub fn pressure_clamps(&self) -> u64 {
        self.pressure_clamps.load(Ordering::Relaxed)
    }

    pub fn temperature_clamps(&self) -> u64 {
        self.temperature_clamps.load(Ordering::Relaxed)
    }

    pub fn reset(&self) {
        self.evaluations.store(0, Ordering::Relaxed);
        self.pressure_clamps.store(0, Ordering::Relaxed);
        self.temperature_clamps.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_sides() {
        assert_eq!(ClampSide::classify(5.0, 1.0, 10.0), ClampSide::Within);
        assert_eq!(ClampSide::classify(1.0, 1.0, 10.0), ClampSide::Within);
        assert_eq!(ClampSide::classify(10.0, 1.0, 10.0), ClampSide::Within);
        assert_eq!(ClampSide::classify(0.5, 1.0, 10.0), ClampSide::Below);
        assert_eq!(ClampSide::classify(11.0, 1.0, 10.0), ClampSide::Above);
        assert_eq!(ClampSide::classify(f64::NAN, 1.0, 10.0), ClampSide::Above);
    }

    #[test]
    fn counter_tallies_each_axis() {
        let counter = ClampCounter::new();
        let inside = ClampedPoint {
            p: 1.0,
            t: 1.0,
            pressure: ClampSide::Within,
            temperature: ClampSide::Within,
        };
        let both = ClampedPoint {
            pressure: ClampSide::Above,
            temperature: ClampSide::Below,
            ..inside
        };

        counter.observe(&inside);
        counter.observe(&both);
        counter.observe(&both);

        assert_eq!(counter.evaluations(), 3);
        assert_eq!(counter.pressure_clamps(), 2);
        assert_eq!(counter.temperature_clamps(), 2);
        assert!(!inside.was_clamped());
        assert!(both.was_clamped());

        counter.reset();
        assert_eq!(counter.evaluations(), 0);
    }
}
