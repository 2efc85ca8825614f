//! Region 1: compressed liquid, Gibbs free energy formulation.

use super::{If97Error, If97Result, PointProps};
use st_core::units::constants::R_WATER_KJ_KG_K;

const P_STAR_MPA: f64 = 16.53;
const T_STAR_K: f64 = 1386.0;

/// (I, J, n) for γ = Σ n (7.1 − π)^I (τ − 1.222)^J.
const COEFFS: [(i32, i32, f64); 34] = [
    (0, -2, 0.146_329_712_131_67),
    (0, -1, -0.845_481_871_691_14),
    (0, 0, -3.756_360_367_204),
    (0, 1, 3.385_516_916_838_5),
    (0, 2, -0.957_919_633_878_72),
    (0, 3, 0.157_720_385_132_28),
    (0, 4, -0.016_616_417_199_501),
    (0, 5, 8.121_462_998_356_8e-4),
    (1, -9, 2.831_908_012_380_4e-4),
    (1, -7, -6.070_630_156_587_4e-4),
    (1, -1, -0.018_990_068_218_419),
    (1, 0, -0.032_529_748_770_505),
    (1, 1, -0.021_841_717_175_414),
    (1, 3, -5.283_835_796_993e-5),
    (2, -3, -4.718_432_107_326_7e-4),
    (2, 0, -3.000_178_079_302_6e-4),
    (2, 1, 4.766_139_390_698_7e-5),
    (2, 3, -4.414_184_533_084_6e-6),
    (2, 17, -7.269_499_629_759_4e-16),
    (3, -4, -3.167_964_484_505_4e-5),
    (3, 0, -2.827_079_798_531_2e-6),
    (3, 6, -8.520_512_812_010_3e-10),
    (4, -5, -2.242_528_190_8e-6),
    (4, -2, -6.517_122_289_560_1e-7),
    (4, 10, -1.434_172_993_792_4e-13),
    (5, -8, -4.051_699_686_011_7e-7),
    (8, -11, -1.273_430_174_164_1e-9),
    (8, -6, -1.742_487_123_063_4e-10),
    (21, -29, -6.876_213_129_553_1e-19),
    (23, -31, 1.447_830_782_852_1e-20),
    (29, -38, 2.633_578_166_279_5e-23),
    (30, -39, -1.194_762_264_007_1e-23),
    (31, -40, 1.822_809_458_140_4e-24),
    (32, -41, -9.353_708_729_245_8e-26),
];

pub(crate) fn props(p_mpa: f64, t_k: f64) -> If97Result<PointProps> {
    let pi = p_mpa / P_STAR_MPA;
    let tau = T_STAR_K / t_k;
    let a = 7.1 - pi;
    let b = tau - 1.222;

    let mut g_pi = 0.0;
    let mut g_tautau = 0.0;
    for &(i, j, n) in &COEFFS {
        let (fi, fj) = (i as f64, j as f64);
        g_pi -= n * fi * a.powi(i - 1) * b.powi(j);
        g_tautau += n * a.powi(i) * fj * (fj - 1.0) * b.powi(j - 2);
    }

    // v = R T π γ_π / p, with R in kJ/(kg·K) and p in MPa
    let v = R_WATER_KJ_KG_K * t_k * pi * g_pi / (p_mpa * 1000.0);
    let cp = -R_WATER_KJ_KG_K * tau * tau * g_tautau * 1000.0;
    if !v.is_finite() || v <= 0.0 || !cp.is_finite() {
        return Err(If97Error::InvalidIntermediateValue);
    }
    Ok(PointProps {
        density: 1.0 / v,
        cp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // IF97 verification table, T = 300 K, p = 3 MPa
    #[test]
    fn verification_point() {
        let props = props(3.0, 300.0).unwrap();
        let v = 1.0 / props.density;
        assert!((v - 0.100_215_168e-2).abs() < 1e-9, "v = {v}");
        assert!((props.cp - 4_173.012_18).abs() < 1e-2, "cp = {}", props.cp);
    }
}
