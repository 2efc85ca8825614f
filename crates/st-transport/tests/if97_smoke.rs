//! IF97 evaluator integration tests.
//!
//! Reference values are the IAPWS verification tables and steam-table values;
//! tolerances are loose enough to absorb the rounding of the published tables
//! while still catching a wrong region or unit.

use st_core::units::{k, mpa};
use st_transport::{
    BoundedPropertyEvaluator, ClampCounter, If97, SpecieThermo, TransportCorrelation,
    WaterTransport, record_from_scalars,
};

fn water(p_min: f64, p_max: f64, t_min: f64, t_max: f64) -> WaterTransport {
    let base = SpecieThermo::new(1.0, SpecieThermo::WATER_MOL_WEIGHT, t_min, t_max).unwrap();
    BoundedPropertyEvaluator::from_base(base, p_min, p_max).unwrap()
}

#[test]
fn liquid_water_at_1atm_300k() {
    let eval = water(1e3, 4e7, 273.15, 1073.15);
    let sample = eval.evaluate(101_325.0, 300.0);

    assert!(!sample.point.was_clamped());
    assert!((sample.mu - 8.538e-4).abs() < 5e-6, "mu = {}", sample.mu);
    assert!((sample.kappa - 0.6103).abs() < 5e-3, "kappa = {}", sample.kappa);
    assert!((sample.cp - 4181.0).abs() < 3.0, "cp = {}", sample.cp);
    assert!((sample.alpha - sample.kappa / sample.cp).abs() < 1e-18);
}

#[test]
fn superheated_steam_at_1000k() {
    let eval = water(1e3, 4e7, 273.15, 1073.15);
    let pack = eval.evaluate_pack(mpa(0.1), k(1000.0));

    assert!((pack.mu.value - 3.759e-5).abs() < 5e-7, "{}", pack.summary());
    assert!((pack.kappa.value - 0.0973).abs() < 2e-3, "{}", pack.summary());
}

#[test]
fn clamping_hides_the_region_change() {
    // Without clamping 20 MPa at 650 K would be near-critical (region 3).
    let eval = water(1e5, 1e7, 300.0, 600.0);
    let clamped = eval.viscosity(2e7, 650.0);
    assert_eq!(clamped, eval.viscosity(1e7, 600.0));
    assert_eq!(clamped, If97.mu(1e7, 600.0));
}

#[test]
fn viscosity_rises_with_pressure_in_liquid() {
    let eval = water(1e5, 4e7, 273.15, 1073.15);
    let low = eval.viscosity(1e7, 400.0);
    let high = eval.viscosity(2e7, 400.0);
    assert!((low - 2.2113e-4).abs() < 2e-6, "mu = {low}");
    assert!((high - 2.2370e-4).abs() < 2e-6, "mu = {high}");
    assert!(high > low);
}

#[test]
fn configured_evaluator_matches_direct_construction() {
    let record = record_from_scalars([
        ("nMoles", 1.0),
        ("molWeight", SpecieThermo::WATER_MOL_WEIGHT),
        ("TMin", 300.0),
        ("TMax", 600.0),
        ("pMin", 1e5),
        ("pMax", 1e7),
    ]);
    let configured = WaterTransport::from_config(&record).unwrap();
    assert_eq!(configured, water(1e5, 1e7, 300.0, 600.0));
}

#[test]
fn mixture_of_water_parcels_evaluates_like_water() {
    let a = water(1e5, 1e7, 300.0, 600.0);
    let b = 3.0 * &a;
    let mix = &a + &b;

    assert_eq!(mix.moles(), 4.0);
    assert!((mix.base().mol_weight() - SpecieThermo::WATER_MOL_WEIGHT).abs() < 1e-12);
    assert_eq!(mix.viscosity(5e6, 450.0), a.viscosity(5e6, 450.0));
}

#[test]
fn evaluators_are_shareable_across_threads() {
    let eval = water(1e5, 1e7, 300.0, 600.0);
    let counter = ClampCounter::new();

    std::thread::scope(|scope| {
        for i in 0..4 {
            let eval = &eval;
            let counter = &counter;
            scope.spawn(move || {
                let t = 350.0 + 100.0 * i as f64;
                let sample = eval.evaluate_observed(5e6, t, counter);
                assert!(sample.is_finite());
            });
        }
    });

    assert_eq!(counter.evaluations(), 4);
    // 650 K lies above TMax.
    assert_eq!(counter.temperature_clamps(), 1);
    assert_eq!(counter.pressure_clamps(), 0);
}

#[test]
fn every_point_of_an_accepted_domain_is_finite() {
    let eval = water(1e3, 4e7, 273.15, 1073.15);
    // Requests run past pMax and TMax to exercise the clamped edges too.
    for i in (0..=80).step_by(2) {
        let p = 1e3 + i as f64 * (1e8 - 1e3) / 200.0;
        for j in (0..=200).step_by(5) {
            let t = 273.15 + j as f64 * 4.0;
            let sample = eval.evaluate(p, t);
            assert!(sample.is_finite(), "non-finite at p = {p}, T = {t}: {sample:?}");
        }
    }
}

#[test]
fn narrow_cool_domain_may_reach_100_mpa() {
    let eval = water(1e5, 1e8, 273.15, 700.0);
    for t in [280.0, 400.0, 550.0, 700.0] {
        assert!(eval.evaluate(1e8, t).is_finite(), "T = {t}");
    }
}
