//! Transport correlations evaluated from density and temperature.
//!
//! - dynamic viscosity: IAPWS 1985 release
//! - thermal conductivity: IAPWS 1998 industrial formulation

use super::{If97Error, If97Result};

const VISC_T_STAR: f64 = 647.226;
const VISC_RHO_STAR: f64 = 317.763;
const VISC_MU_STAR: f64 = 55.071e-6;

const VISC_H0: [f64; 4] = [1.0, 0.978_197, 0.579_829, -0.202_354];

/// H[i][j]: i is the power of (1/T̄ − 1), j the power of (ρ̄ − 1).
const VISC_H: [[f64; 7]; 6] = [
    [0.513_204_7, 0.215_177_8, -0.281_810_7, 0.177_806_4, -0.041_766_1, 0.0, 0.0],
    [0.320_565_6, 0.731_788_3, -1.070_786, 0.460_504, 0.0, -0.015_783_86, 0.0],
    [0.0, 1.241_044, -1.263_184, 0.234_037_9, 0.0, 0.0, 0.0],
    [0.0, 1.476_783, 0.0, -0.492_417_9, 0.160_043_5, 0.0, -0.003_629_481],
    [-0.778_256_7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.188_544_7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

const COND_T_STAR: f64 = 647.26;
const COND_RHO_STAR: f64 = 317.7;

/// Upper temperature of the viscosity correlation [K].
pub(crate) const VISC_T_MAX_K: f64 = 1173.15;

/// Upper pressure [MPa] of the conductivity formulation at `t_k`.
///
/// Non-increasing in temperature, so its value at the top of a temperature
/// range holds over the whole range.
pub(crate) fn conductivity_p_max_mpa(t_k: f64) -> f64 {
    if t_k < 773.15 {
        100.0
    } else if t_k <= 923.15 {
        70.0
    } else {
        40.0
    }
}

/// Dynamic viscosity [Pa·s].
pub(crate) fn viscosity(rho: f64, t_k: f64) -> If97Result<f64> {
    if t_k > VISC_T_MAX_K {
        return Err(If97Error::TemperatureOutOfRange { t_k });
    }
    let t = t_k / VISC_T_STAR;
    let r = rho / VISC_RHO_STAR;

    let denom: f64 = VISC_H0
        .iter()
        .enumerate()
        .map(|(i, h)| h / t.powi(i as i32))
        .sum();
    let mu0 = t.sqrt() / denom;

    let x = 1.0 / t - 1.0;
    let y = r - 1.0;
    let mut sum = 0.0;
    for (i, row) in VISC_H.iter().enumerate() {
        for (j, h) in row.iter().enumerate() {
            if *h != 0.0 {
                sum += h * x.powi(i as i32) * y.powi(j as i32);
            }
        }
    }
    let mu1 = (r * sum).exp();

    let mu = mu0 * mu1 * VISC_MU_STAR;
    if !mu.is_finite() {
        return Err(If97Error::InvalidIntermediateValue);
    }
    Ok(mu)
}

/// Thermal conductivity [W/(m·K)].
pub(crate) fn thermal_conductivity(p_mpa: f64, rho: f64, t_k: f64) -> If97Result<f64> {
    if p_mpa > conductivity_p_max_mpa(t_k) {
        return Err(If97Error::PressureOutOfRange { p_mpa });
    }

    let t = t_k / COND_T_STAR;
    let r = rho / COND_RHO_STAR;

    let k0 = t.sqrt() * (0.010_281_1 + 0.029_962_1 * t + 0.015_614_6 * t * t - 0.004_224_64 * t.powi(3));
    let k1 = -0.397_07 + 0.400_302 * r + 1.06 * (-0.171_587 * (r + 2.392_19).powi(2)).exp();

    let dt = (t - 1.0).abs() + 0.003_089_76;
    let q = 2.0 + 0.082_299_4 / dt.powf(0.6);
    let s = if t >= 1.0 {
        1.0 / dt
    } else {
        10.093_2 / dt.powf(0.6)
    };
    let k2 = (0.070_130_9 / t.powi(10) + 0.011_852)
        * r.powf(1.8)
        * (0.642_857 * (1.0 - r.powf(2.8))).exp()
        + 0.001_699_37 * s * r.powf(q) * ((q / (1.0 + q)) * (1.0 - r.powf(1.0 + q))).exp()
        - 1.02 * (-4.117_17 * t.powf(1.5) - 6.179_37 / r.powi(5)).exp();

    let kappa = k0 + k1 + k2;
    if !kappa.is_finite() {
        return Err(If97Error::InvalidIntermediateValue);
    }
    Ok(kappa)
}
