use ps_core::{AlphaSweep, ReynoldsSweep};
use ps_plan::schema::*;
use ps_plan::{load_json, load_yaml, save_json, save_yaml};
use std::path::PathBuf;

fn sample_plan() -> SweepPlan {
    SweepPlan {
        version: 1,
        airfoils: vec!["NACA 4412".to_string(), "NACA 0012".to_string()],
        mach: vec![0.001, 0.1],
        reynolds: ReynoldsSweep {
            start: 30_000,
            end: 90_000,
            step: 30_000,
        },
        alpha: AlphaSweep {
            start: -4.0,
            end: 16.0,
            step: 1.0,
        },
        solver: SolverDef::default(),
        paneling: PanelingDef::default(),
        output_dir: PathBuf::from("output"),
    }
}

#[test]
fn roundtrip_yaml() {
    let plan = sample_plan();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("ps_plan_roundtrip.yaml");

    save_yaml(&path, &plan).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(plan, loaded);
}

#[test]
fn roundtrip_json() {
    let plan = sample_plan();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("ps_plan_roundtrip.json");

    save_json(&path, &plan).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(plan, loaded);
}

#[test]
fn save_refuses_invalid_plan() {
    let mut plan = sample_plan();
    plan.airfoils.clear();

    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("ps_plan_invalid.yaml");

    assert!(save_yaml(&path, &plan).is_err());
}

#[test]
fn load_refuses_invalid_plan() {
    let temp_dir = std::env::temp_dir();
    let path = temp_dir.join("ps_plan_bad_airfoil.yaml");
    std::fs::write(
        &path,
        r#"
version: 1
airfoils: ["NACA 23012"]
mach: [0.1]
reynolds: { start: 30000, end: 30000, step: 1 }
alpha: { start: -4.0, end: 16.0, step: 1.0 }
"#,
    )
    .unwrap();

    assert!(load_yaml(&path).is_err());
}
