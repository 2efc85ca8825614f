//! Region 5: high-temperature steam above 1073.15 K.

use super::{If97Error, If97Result, PointProps};
use st_core::units::constants::R_WATER_KJ_KG_K;

const T_STAR_K: f64 = 1000.0;

/// (J, n) for the ideal-gas part γ° = ln π + Σ n τ^J.
const IDEAL: [(i32, f64); 6] = [
    (0, -13.179_983_674_201),
    (1, 6.854_084_163_443_4),
    (-3, -0.024_805_148_933_466),
    (-2, 0.369_015_349_803_33),
    (-1, -3.116_131_821_392_5),
    (2, -0.329_616_265_389_17),
];

/// (I, J, n) for the residual part γʳ = Σ n π^I τ^J (2007 revision).
const RESIDUAL: [(i32, i32, f64); 6] = [
    (1, 1, 1.573_640_485_525_9e-3),
    (1, 2, 9.015_376_167_394_4e-4),
    (1, 3, -5.027_007_767_764_8e-3),
    (2, 3, 2.244_003_740_948_5e-6),
    (2, 9, -4.116_327_545_347_1e-6),
    (3, 7, 3.791_945_482_295_5e-8),
];

pub(crate) fn props(p_mpa: f64, t_k: f64) -> If97Result<PointProps> {
    let pi = p_mpa;
    let tau = T_STAR_K / t_k;

    let mut g0_tautau = 0.0;
    for &(j, n) in &IDEAL {
        let fj = j as f64;
        g0_tautau += n * fj * (fj - 1.0) * tau.powi(j - 2);
    }

    let mut gr_pi = 0.0;
    let mut gr_tautau = 0.0;
    for &(i, j, n) in &RESIDUAL {
        let (fi, fj) = (i as f64, j as f64);
        gr_pi += n * fi * pi.powi(i - 1) * tau.powi(j);
        gr_tautau += n * pi.powi(i) * fj * (fj - 1.0) * tau.powi(j - 2);
    }

    let v = R_WATER_KJ_KG_K * t_k * pi * (1.0 / pi + gr_pi) / (p_mpa * 1000.0);
    let cp = -R_WATER_KJ_KG_K * tau * tau * (g0_tautau + gr_tautau) * 1000.0;
    if !v.is_finite() || v <= 0.0 || !cp.is_finite() {
        return Err(If97Error::InvalidIntermediateValue);
    }
    Ok(PointProps {
        density: 1.0 / v,
        cp,
    })
}
