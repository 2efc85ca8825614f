//! Saturation line (region 4) and the region 2/3 boundary.

use super::{If97Error, If97Result};
use st_core::units::constants::T_CRIT_K;

const N: [f64; 10] = [
    1_167.052_145_276_7,
    -724_213.167_032_06,
    -17.073_846_940_092,
    12_020.824_702_47,
    -3_232_555.032_233_3,
    14.915_108_613_53,
    -4_823.265_736_159_1,
    405_113.405_420_57,
    -0.238_555_575_678_49,
    650.175_348_447_98,
];

/// Saturation pressure [MPa] at `t_k`, valid for 273.15 K ≤ T ≤ 647.096 K.
pub fn psat_mpa(t_k: f64) -> If97Result<f64> {
    if !t_k.is_finite() {
        return Err(If97Error::NonFiniteInput);
    }
    if !(273.15..=T_CRIT_K).contains(&t_k) {
        return Err(If97Error::TemperatureOutOfRange { t_k });
    }
    let theta = t_k + N[8] / (t_k - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return Err(If97Error::InvalidIntermediateValue);
    }
    Ok((2.0 * c / (-b + disc.sqrt())).powi(4))
}

/// Pressure [MPa] on the region 2/3 boundary at `t_k`.
pub fn b23_p_mpa(t_k: f64) -> f64 {
    348.051_856_289_69 - 1.167_185_987_997_5 * t_k + 1.019_297_003_932_6e-3 * t_k * t_k
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturation_verification_points() {
        assert!((psat_mpa(300.0).unwrap() - 3.536_589_45e-3).abs() < 1e-10);
        assert!((psat_mpa(500.0).unwrap() - 2.638_897_76).abs() < 1e-7);
        assert!((psat_mpa(600.0).unwrap() - 12.344_314_6).abs() < 1e-6);
    }

    #[test]
    fn saturation_rejects_supercritical() {
        assert!(matches!(
            psat_mpa(700.0),
            Err(If97Error::TemperatureOutOfRange { .. })
        ));
    }

    #[test]
    fn b23_verification_point() {
        assert!((b23_p_mpa(623.15) - 16.529_164_3).abs() < 1e-6);
    }
}
