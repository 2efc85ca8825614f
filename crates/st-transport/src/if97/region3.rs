//! Region 3: near-critical fluid, Helmholtz free energy in (ρ, T).
//!
//! The formulation is explicit in density, so a (p, T) query first solves
//! `p(ρ, T) = p` by scanning a density grid for a sign change and bisecting.

use super::{If97Error, If97Result, PointProps, saturation};
use st_core::units::constants::{R_WATER_KJ_KG_K, RHO_CRIT_KG_M3, T_CRIT_K};

/// Density grid covering region 3 [kg/m³].
const RHO_SCAN_MIN: f64 = 80.0;
const RHO_SCAN_MAX: f64 = 800.0;
const RHO_SCAN_STEP: f64 = 5.0;
const BISECTION_MAX_ITER: usize = 200;

/// (I, J, n) for φ = n₁ ln δ + Σ n δ^I τ^J. The first row is the log term.
const COEFFS: [(i32, i32, f64); 40] = [
    (0, 0, 1.065_807_002_851_3),
    (0, 0, -15.732_845_290_239),
    (0, 1, 20.944_396_974_307),
    (0, 2, -7.686_770_787_871_6),
    (0, 7, 2.618_594_778_795_4),
    (0, 10, -2.808_078_114_862),
    (0, 12, 1.205_336_969_651_7),
    (0, 23, -8.456_681_281_250_2e-3),
    (1, 2, -1.265_431_547_771_4),
    (1, 6, -1.152_440_780_668_1),
    (1, 15, 0.885_210_439_843_18),
    (1, 17, -0.642_077_651_816_07),
    (2, 0, 0.384_934_601_866_71),
    (2, 2, -0.852_147_088_242_06),
    (2, 6, 4.897_228_154_187_7),
    (2, 7, -3.050_261_725_696_5),
    (2, 22, 0.039_420_536_879_154),
    (2, 26, 0.125_584_084_243_08),
    (3, 0, -0.279_993_296_987_1),
    (3, 2, 1.389_979_956_946),
    (3, 4, -2.018_991_502_357),
    (3, 16, -8.214_763_717_396_3e-3),
    (3, 26, -0.475_960_357_349_23),
    (4, 0, 0.043_984_074_473_5),
    (4, 2, -0.444_764_354_287_39),
    (4, 4, 0.905_720_707_197_33),
    (4, 26, 0.705_224_500_879_67),
    (5, 1, 0.107_705_126_263_32),
    (5, 3, -0.329_136_232_589_54),
    (5, 26, -0.508_710_620_411_58),
    (6, 0, -0.022_175_400_873_096),
    (6, 2, 0.094_260_751_665_092),
    (6, 26, 0.164_362_784_479_61),
    (7, 2, -0.013_503_372_241_348),
    (8, 26, -0.014_834_345_352_472),
    (9, 2, 5.792_295_362_808_4e-4),
    (9, 26, 3.230_890_470_371_1e-3),
    (10, 0, 8.096_480_299_621_5e-5),
    (10, 1, -1.655_767_979_503_7e-4),
    (11, 26, -4.492_389_906_181_5e-5),
];

/// Helmholtz derivatives needed for pressure and cp.
struct Phi {
    delta: f64,
    tau: f64,
    d: f64,
    dd: f64,
    tt: f64,
    dt: f64,
}

fn phi(rho: f64, t_k: f64) -> Phi {
    let delta = rho / RHO_CRIT_KG_M3;
    let tau = T_CRIT_K / t_k;
    let n1 = COEFFS[0].2;

    let mut out = Phi {
        delta,
        tau,
        d: n1 / delta,
        dd: -n1 / (delta * delta),
        tt: 0.0,
        dt: 0.0,
    };
    for &(i, j, n) in &COEFFS[1..] {
        let (fi, fj) = (i as f64, j as f64);
        out.d += n * fi * delta.powi(i - 1) * tau.powi(j);
        out.dd += n * fi * (fi - 1.0) * delta.powi(i - 2) * tau.powi(j);
        out.tt += n * delta.powi(i) * fj * (fj - 1.0) * tau.powi(j - 2);
        out.dt += n * fi * delta.powi(i - 1) * fj * tau.powi(j - 1);
    }
    out
}

/// Pressure [MPa] from density [kg/m³] and temperature [K].
pub(crate) fn pressure(rho: f64, t_k: f64) -> f64 {
    let phi = phi(rho, t_k);
    rho * R_WATER_KJ_KG_K * t_k * phi.delta * phi.d / 1000.0
}

fn cp(rho: f64, t_k: f64) -> f64 {
    let Phi {
        delta,
        tau,
        d,
        dd,
        tt,
        dt,
    } = phi(rho, t_k);
    let num = (delta * d - delta * tau * dt).powi(2);
    let den = 2.0 * delta * d + delta * delta * dd;
    R_WATER_KJ_KG_K * (-tau * tau * tt + num / den) * 1000.0
}

/// Solve `p(ρ, T) = p_mpa` for ρ.
///
/// Liquid-like states (at or above saturation, or supercritical) take the
/// densest root; vapour-like states below saturation take the lightest.
pub(crate) fn density(p_mpa: f64, t_k: f64) -> If97Result<f64> {
    let vapour_like = t_k < T_CRIT_K && p_mpa < saturation::psat_mpa(t_k)?;
    let steps = ((RHO_SCAN_MAX - RHO_SCAN_MIN) / RHO_SCAN_STEP) as usize;
    let grid = (0..=steps).map(|i| RHO_SCAN_MIN + i as f64 * RHO_SCAN_STEP);
    let grid: Vec<f64> = if vapour_like {
        grid.collect()
    } else {
        grid.rev().collect()
    };

    let residual = |rho: f64| pressure(rho, t_k) - p_mpa;
    let bracket = grid.windows(2).find_map(|w| {
        let (fa, fb) = (residual(w[0]), residual(w[1]));
        if fa == 0.0 {
            Some((w[0], w[0]))
        } else if fa.signum() != fb.signum() {
            Some((w[0], w[1]))
        } else {
            None
        }
    });
    let (mut a, mut b) = bracket.ok_or(If97Error::NoConvergence {
        what: "region 3 density bracket",
    })?;

    let mut fa = residual(a);
    for _ in 0..BISECTION_MAX_ITER {
        let mid = 0.5 * (a + b);
        if (b - a).abs() <= 1e-12 * mid.abs() {
            break;
        }
        let fm = residual(mid);
        if fm == 0.0 {
            return Ok(mid);
        }
        if fm.signum() == fa.signum() {
            a = mid;
            fa = fm;
        } else {
            b = mid;
        }
    }
    Ok(0.5 * (a + b))
}

pub(crate) fn props(p_mpa: f64, t_k: f64) -> If97Result<PointProps> {
    let density = density(p_mpa, t_k)?;
    let cp = cp(density, t_k);
    if !cp.is_finite() {
        return Err(If97Error::InvalidIntermediateValue);
    }
    Ok(PointProps { density, cp })
}

#[cfg(test)]
mod tests {
    use super::*;

    // IF97 verification table, ρ = 500 kg/m³, T = 650 K
    #[test]
    fn verification_pressure_and_cp() {
        assert!((pressure(500.0, 650.0) - 25.583_701_8).abs() < 1e-6);
        assert!((cp(500.0, 650.0) - 13_893.571_7).abs() < 1e-1);
        assert!((pressure(200.0, 650.0) - 22.293_064_3).abs() < 1e-6);
        assert!((pressure(500.0, 750.0) - 78.309_563_9).abs() < 1e-6);
    }

    #[test]
    fn density_inverts_pressure() {
        for &(rho, t) in &[(500.0, 650.0), (200.0, 650.0), (500.0, 750.0)] {
            let p = pressure(rho, t);
            let solved = density(p, t).unwrap();
            assert!((solved - rho).abs() < 1e-6, "rho {rho} T {t}: solved {solved}");
        }
    }

    #[test]
    fn liquid_like_state_below_critical() {
        let psat = saturation::psat_mpa(640.0).unwrap();
        let rho = density(psat + 5.0, 640.0).unwrap();
        assert!(rho > 400.0 && rho < 700.0, "rho = {rho}");
    }
}
