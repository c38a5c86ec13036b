//! CLI dispatch tests driving RunContext against scene files on disk

use porter::cli::{Commands, RunContext};
use porter::error::PortError;
use porter::scene::io::load_scene;
use porter::scene::Component;
use std::path::PathBuf;
use tempfile::TempDir;

const DOC: &str = r#"{ "roots": [
    { "name": "Avatar", "children": [
        { "name": "Hips",
          "components": [ { "type": "dynamic_bone", "root": "Hair" } ],
          "children": [ { "name": "Hair" } ] }
    ] },
    { "name": "Avatar2", "children": [
        { "name": "Hips", "children": [ { "name": "Hair" } ] }
    ] }
] }"#;

fn write_doc(temp: &TempDir) -> PathBuf {
    let path = temp.path().join("scene.json");
    std::fs::write(&path, DOC).unwrap();
    path
}

fn apply_command(scene: PathBuf, output: Option<PathBuf>, dry_run: bool) -> Commands {
    Commands::Apply {
        scene,
        source: "Avatar".to_string(),
        destination: "Avatar2".to_string(),
        avatar_descriptor: false,
        animator: false,
        dynamic_bone: true,
        dynamic_bone_collider: false,
        all: false,
        output,
        dry_run,
        format: "text".to_string(),
    }
}

#[test]
fn test_apply_writes_scene_in_place() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);

    let output = RunContext::default()
        .execute(&apply_command(path.clone(), None, false))
        .unwrap();
    assert!(output.contains("ported DynamicBone"));
    assert!(output.contains("1 component(s) ported, 0 unresolved reference(s)"));

    let scene = load_scene(&path).unwrap();
    let d_hips = scene.resolve_path("Avatar2/Hips").unwrap();
    let d_hair = scene.resolve_path("Avatar2/Hips/Hair").unwrap();
    match &scene.components(d_hips)[0] {
        Component::DynamicBone(b) => assert_eq!(b.root, Some(d_hair)),
        other => panic!("unexpected component: {:?}", other),
    }
}

#[test]
fn test_apply_respects_output_path() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);
    let out = temp.path().join("result.json");

    RunContext::default()
        .execute(&apply_command(path.clone(), Some(out.clone()), false))
        .unwrap();

    // Original untouched, result carries the ported component.
    let original = load_scene(&path).unwrap();
    let d_hips = original.resolve_path("Avatar2/Hips").unwrap();
    assert!(original.components(d_hips).is_empty());

    let result = load_scene(&out).unwrap();
    let d_hips = result.resolve_path("Avatar2/Hips").unwrap();
    assert_eq!(result.components(d_hips).len(), 1);
}

#[test]
fn test_apply_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);
    let before = std::fs::read_to_string(&path).unwrap();

    let output = RunContext::default()
        .execute(&apply_command(path.clone(), None, true))
        .unwrap();
    assert!(output.contains("ported DynamicBone"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_apply_unknown_root_is_missing_root() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);

    let command = Commands::Apply {
        scene: path,
        source: "Nobody".to_string(),
        destination: "Avatar2".to_string(),
        avatar_descriptor: false,
        animator: false,
        dynamic_bone: true,
        dynamic_bone_collider: false,
        all: false,
        output: None,
        dry_run: false,
        format: "text".to_string(),
    };
    let err = RunContext::default().execute(&command).unwrap_err();
    assert!(matches!(err, PortError::MissingRoot("source")));
}

#[test]
fn test_apply_json_report() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);

    let command = Commands::Apply {
        scene: path,
        source: "Avatar".to_string(),
        destination: "Avatar2".to_string(),
        avatar_descriptor: false,
        animator: false,
        dynamic_bone: false,
        dynamic_bone_collider: false,
        all: true,
        output: None,
        dry_run: true,
        format: "json".to_string(),
    };
    let output = RunContext::default().execute(&command).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["ported"][0]["component"], "DynamicBone");
    assert_eq!(value["failures"].as_array().unwrap().len(), 0);
}

#[test]
fn test_inspect_renders_hierarchy() {
    let temp = TempDir::new().unwrap();
    let path = write_doc(&temp);

    let command = Commands::Inspect {
        scene: path,
        node: Some("Avatar/Hips".to_string()),
        format: "text".to_string(),
    };
    let output = RunContext::default().execute(&command).unwrap();
    assert!(output.starts_with("Hips [DynamicBone]"));
    assert!(output.contains("  Hair"));
}
