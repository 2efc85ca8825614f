//! Region 2: superheated vapour, ideal-gas plus residual Gibbs free energy.

use super::{If97Error, If97Result, PointProps};
use st_core::units::constants::R_WATER_KJ_KG_K;

const T_STAR_K: f64 = 540.0;

/// (J, n) for the ideal-gas part γ° = ln π + Σ n τ^J.
const IDEAL: [(i32, f64); 9] = [
    (0, -9.692_768_650_021_7),
    (1, 10.086_655_968_018),
    (-5, -0.005_608_791_128_302),
    (-4, 0.071_452_738_081_455),
    (-3, -0.407_104_982_239_28),
    (-2, 1.424_081_917_144_4),
    (-1, -4.383_951_131_945),
    (2, -0.284_086_324_607_72),
    (3, 0.021_268_463_753_307),
];

/// (I, J, n) for the residual part γʳ = Σ n π^I (τ − 0.5)^J.
const RESIDUAL: [(i32, i32, f64); 43] = [
    (1, 0, -1.773_174_247_321_3e-3),
    (1, 1, -0.017_834_862_292_358),
    (1, 2, -0.045_996_013_696_365),
    (1, 3, -0.057_581_259_083_432),
    (1, 6, -0.050_325_278_727_93),
    (2, 1, -3.303_264_167_020_3e-5),
    (2, 2, -1.894_898_751_631_5e-4),
    (2, 4, -3.939_277_724_335_5e-3),
    (2, 7, -0.043_797_295_650_573),
    (2, 36, -2.667_454_791_408_7e-5),
    (3, 0, 2.048_173_769_230_9e-8),
    (3, 1, 4.387_066_728_443_5e-7),
    (3, 3, -3.227_767_723_857e-5),
    (3, 6, -1.503_392_454_214_8e-3),
    (3, 35, -0.040_668_253_562_649),
    (4, 1, -7.884_730_955_936_7e-10),
    (4, 2, 1.279_071_785_228_5e-8),
    (4, 3, 4.822_537_271_850_7e-7),
    (5, 7, 2.292_207_633_766_1e-6),
    (6, 3, -1.671_476_645_106_1e-11),
    (6, 16, -2.117_147_232_135_5e-3),
    (6, 35, -23.895_741_934_104),
    (7, 0, -5.905_956_432_427e-18),
    (7, 11, -1.262_180_889_910_1e-6),
    (7, 25, -0.038_946_842_435_739),
    (8, 8, 1.125_621_136_045_9e-11),
    (8, 36, -8.231_134_089_799_8),
    (9, 13, 1.980_971_280_208_8e-8),
    (10, 4, 1.040_696_521_017_4e-19),
    (10, 10, -1.023_474_709_592_9e-13),
    (10, 14, -1.001_817_937_951_1e-9),
    (16, 29, -8.088_290_864_698_5e-11),
    (16, 50, 0.106_930_318_794_09),
    (18, 57, -0.336_622_505_741_71),
    (20, 20, 8.918_584_535_542_1e-25),
    (20, 35, 3.062_931_687_623_2e-13),
    (20, 48, -4.200_246_769_820_8e-6),
    (21, 21, -5.905_602_968_563_9e-26),
    (22, 53, 3.782_694_761_345_7e-6),
    (23, 39, -1.276_860_893_468_1e-15),
    (24, 26, 7.308_761_059_506_1e-29),
    (24, 40, 5.541_471_535_077_8e-17),
    (24, 58, -9.436_970_724_121e-7),
];

pub(crate) fn props(p_mpa: f64, t_k: f64) -> If97Result<PointProps> {
    let pi = p_mpa;
    let tau = T_STAR_K / t_k;
    let b = tau - 0.5;

    let mut g0_tautau = 0.0;
    for &(j, n) in &IDEAL {
        let fj = j as f64;
        g0_tautau += n * fj * (fj - 1.0) * tau.powi(j - 2);
    }

    let mut gr_pi = 0.0;
    let mut gr_tautau = 0.0;
    for &(i, j, n) in &RESIDUAL {
        let (fi, fj) = (i as f64, j as f64);
        gr_pi += n * fi * pi.powi(i - 1) * b.powi(j);
        gr_tautau += n * pi.powi(i) * fj * (fj - 1.0) * b.powi(j - 2);
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

#[cfg(test)]
mod tests {
    use super::*;

    // IF97 verification table, T = 300 K, p = 0.0035 MPa
    #[test]
    fn verification_point() {
        let props = props(0.0035, 300.0).unwrap();
        let v = 1.0 / props.density;
        assert!((v - 39.491_386_6).abs() < 1e-5, "v = {v}");
        assert!((props.cp - 1_913.001_62).abs() < 1e-2, "cp = {}", props.cp);
    }
}
