//! End-to-end tests for the scene → artifacts pipeline.

use panelnest_cli::{load_scene, run, Outputs, SceneObject};
use panelnest_core::NestConfig;

fn cabinet() -> Vec<SceneObject> {
    vec![
        SceneObject::new("left side", [18.0, 720.0, 560.0]),
        SceneObject::new("right side", [560.0, 18.0, 720.0]),
        SceneObject::new("top", [800.0, 560.0, 18.0]),
        SceneObject::new("plinth block", [100.0, 100.0, 800.0]),
    ]
}

#[test]
fn test_writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = Outputs {
        csv: Some(dir.path().join("cut.csv")),
        dxf: Some(dir.path().join("cut.dxf")),
        json: Some(dir.path().join("cut.json")),
    };

    let report = run(cabinet(), &NestConfig::default(), &outputs).unwrap();

    assert_eq!(report.result.panel_count(), 3);
    assert_eq!(report.written.len(), 3);
    assert!(report.skipped.is_empty());

    let csv = std::fs::read_to_string(dir.path().join("cut.csv")).unwrap();
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.starts_with("Sheet,Width (mm),Height (mm),Thickness (mm)\n"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("cut.json")).unwrap())
            .unwrap();
    assert_eq!(json["summary"]["panels"], 3);
    assert_eq!(json["result"]["placements"][0]["panel"]["source"], "top");
}

#[test]
fn test_no_panels_skips_csv_and_dxf() {
    let dir = tempfile::tempdir().unwrap();
    let outputs = Outputs {
        csv: Some(dir.path().join("cut.csv")),
        dxf: Some(dir.path().join("cut.dxf")),
        json: None,
    };
    let scene = vec![SceneObject::new("block", [100.0, 100.0, 100.0])];

    let report = run(scene, &NestConfig::default(), &outputs).unwrap();

    assert!(report.result.is_empty());
    assert!(report.written.is_empty());
    assert_eq!(report.skipped.len(), 2);
    assert!(!dir.path().join("cut.csv").exists());
    assert!(!dir.path().join("cut.dxf").exists());
}

#[test]
fn test_strict_mode_rejects_negative_extents() {
    let scene = vec![SceneObject::new("broken", [-18.0, 720.0, 560.0])];
    let config = NestConfig::new().with_validation(true);
    let err = run(scene, &config, &Outputs::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid panel"));
}

#[test]
fn test_load_scene_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scene.json");
    std::fs::write(&path, serde_json::to_string(&cabinet()).unwrap()).unwrap();

    let objects = load_scene(&path).unwrap();
    assert_eq!(objects, cabinet());
    assert!(load_scene(dir.path().join("missing.json")).is_err());
}
