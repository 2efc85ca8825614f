use st_config::{PropertyFile, ProjectError, ValidationError, evaluator, load, load_yaml, save, save_json, save_yaml};
use st_transport::{SpecieThermo, WaterTransport};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

fn sample_file() -> PropertyFile {
    let base = SpecieThermo::new(1.0, SpecieThermo::WATER_MOL_WEIGHT, 273.15, 1073.15).unwrap();
    let full = WaterTransport::from_base(base, 1e3, 4e7).unwrap();
    let narrow_base = SpecieThermo::new(2.0, SpecieThermo::WATER_MOL_WEIGHT, 300.0, 600.0).unwrap();
    let narrow = WaterTransport::from_base(narrow_base, 1e5, 1e7)
        .unwrap()
        .with_name("condensate");

    let mut file = PropertyFile::new("Water sets");
    file.insert_evaluator("full", &full);
    file.insert_evaluator("narrow", &narrow);
    file
}

#[test]
fn roundtrip_yaml() {
    let file = sample_file();
    let path = temp_path("st_config_roundtrip.yaml");

    save_yaml(&path, &file).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn roundtrip_json_by_extension() {
    let file = sample_file();
    let path = temp_path("st_config_roundtrip.json");

    save(&path, &file).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.trim_start().starts_with('{'));

    let loaded = load(&path).unwrap();
    assert_eq!(file, loaded);
}

#[test]
fn evaluators_survive_the_roundtrip() {
    let file = sample_file();
    let path = temp_path("st_config_evaluators.json");
    save_json(&path, &file).unwrap();
    let loaded = load(&path).unwrap();

    let before = evaluator(&file, "narrow").unwrap();
    let after = evaluator(&loaded, "narrow").unwrap();
    assert_eq!(before, after);
    assert_eq!(after.p_min(), 1e5);
    assert_eq!(after.moles(), 2.0);
    assert_eq!(after.name(), "condensate");
    assert_eq!(before.viscosity(2e7, 400.0), after.viscosity(1e7, 400.0));
}

#[test]
fn handwritten_yaml_with_integers_loads() {
    let path = temp_path("st_config_handwritten.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: Boiler\ncomponents:\n  feedwater:\n    molWeight: 18.015268\n    TMin: 280\n    TMax: 620\n    pMin: 100000\n    pMax: 2.5e7\n",
    )
    .unwrap();

    let file = load(&path).unwrap();
    let eval = evaluator(&file, "feedwater").unwrap();
    assert_eq!(eval.t_min(), 280.0);
    assert_eq!(eval.p_max(), 2.5e7);
    assert_eq!(eval.moles(), 1.0);
    assert_eq!(eval.name(), "feedwater");
}

#[test]
fn invalid_component_is_rejected_on_load() {
    let path = temp_path("st_config_invalid.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: Broken\ncomponents:\n  steam:\n    molWeight: 18.0\n    TMin: 300\n    TMax: 600\n    pMax: 2.0e7\n",
    )
    .unwrap();

    assert!(matches!(
        load(&path),
        Err(ProjectError::Validation(ValidationError::InvalidComponent { .. }))
    ));
}

#[test]
fn explicit_name_wins_over_component_key() {
    let path = temp_path("st_config_named.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: Plant\ncomponents:\n  hp:\n    name: live steam\n    molWeight: 18.015268\n    TMin: 500\n    TMax: 900\n    pMin: 1.0e6\n    pMax: 3.0e7\n",
    )
    .unwrap();

    let file = load(&path).unwrap();
    assert_eq!(evaluator(&file, "hp").unwrap().name(), "live steam");
}

#[test]
fn pressure_beyond_if97_conductivity_is_rejected_on_load() {
    let path = temp_path("st_config_too_high.yaml");
    std::fs::write(
        &path,
        "version: 1\nname: Supercritical\ncomponents:\n  hp:\n    molWeight: 18.015268\n    TMin: 300\n    TMax: 1000\n    pMin: 1.0e5\n    pMax: 1.0e8\n",
    )
    .unwrap();

    assert!(matches!(
        load(&path),
        Err(ProjectError::Validation(ValidationError::InvalidComponent { .. }))
    ));
}

#[test]
fn unknown_component_is_reported() {
    let file = sample_file();
    assert!(matches!(
        evaluator(&file, "missing"),
        Err(ProjectError::UnknownComponent { .. })
    ));
}

#[test]
fn saving_an_empty_file_fails() {
    let path = temp_path("st_config_empty.yaml");
    assert!(matches!(
        save_yaml(&path, &PropertyFile::new("empty")),
        Err(ProjectError::Validation(ValidationError::NoComponents { .. }))
    ));
}
