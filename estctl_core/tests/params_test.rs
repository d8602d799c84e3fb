// Parameter file loading and saving across every supported format
use estctl_core::error::EstctlError;
use estctl_core::params::{ControllerParams, ParamsFormat, SimParams};
use estctl_core::scheduling::LoopConfig;
use std::fs;

fn custom_params() -> SimParams {
    let mut params = SimParams::default();
    params.plant.initial_position = -2.5;
    params.plant.damping = 0.5;
    params.estimator.alpha = 0.3;
    params.controller = ControllerParams {
        kp: 2.0,
        kd: 0.8,
        target: 10.0,
        ..Default::default()
    }
    .with_limits(-2.0, 2.0);
    params.run = LoopConfig::standard().with_tick_count(200);
    params
}

#[test]
fn test_save_and_load_each_format() {
    let dir = tempfile::tempdir().unwrap();
    let params = custom_params();

    for name in ["sim.yaml", "sim.yml", "sim.toml", "sim.json"] {
        let path = dir.path().join(name);
        params.save_to_disk(&path).unwrap();
        let loaded = SimParams::load_from_disk(&path).unwrap();
        assert_eq!(loaded, params, "mismatch for {}", name);
    }
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config").join("sim.yaml");

    SimParams::default().save_to_disk(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SimParams::load_from_disk(&dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, EstctlError::Io(_)));
}

#[test]
fn test_load_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.ini");
    fs::write(&path, "kp = 1").unwrap();

    let err = SimParams::load_from_disk(&path).unwrap_err();
    assert!(matches!(err, EstctlError::Config(_)));
}

#[test]
fn test_load_malformed_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.yaml");
    fs::write(&path, "controller: [not, a, map").unwrap();

    let err = SimParams::load_from_disk(&path).unwrap_err();
    assert!(matches!(err, EstctlError::Yaml(_)));
}

#[test]
fn test_load_rejects_bad_timestep() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.toml");
    fs::write(&path, "[run]\ndt = 0.0\n").unwrap();

    let err = SimParams::load_from_disk(&path).unwrap_err();
    assert!(matches!(err, EstctlError::InvalidTimestep(_)));
}

#[test]
fn test_rendered_default_omits_unset_limits() {
    let yaml = SimParams::default().render(ParamsFormat::Yaml).unwrap();
    assert!(yaml.contains("kp: 0.1"));
    assert!(!yaml.contains("u_max"));
    assert!(!yaml.contains("report_every"));
}
