//! Scene document load/save against real files

use anyhow::Result;
use porter::error::SceneError;
use porter::scene::io::{load_scene, save_scene, scene_from_str};
use porter::scene::{Component, LipSyncStyle};
use tempfile::TempDir;

const AVATAR_DOC: &str = r#"{
    "roots": [
        {
            "name": "Avatar",
            "components": [
                {
                    "type": "avatar_descriptor",
                    "view_position": [0.0, 1.6, 0.1],
                    "lip_sync": "viseme_blend_shape",
                    "viseme_skinned_mesh": "Body"
                },
                { "type": "animator", "controller": "AvatarCtrl" }
            ],
            "children": [
                {
                    "name": "Body",
                    "components": [
                        { "type": "skinned_mesh_renderer", "mesh": "BodyMesh", "root_bone": "Hips" }
                    ]
                },
                {
                    "name": "Armature",
                    "children": [
                        {
                            "name": "Hips",
                            "components": [
                                { "type": "dynamic_bone", "root": "Hips" },
                                { "type": "dynamic_bone_collider", "radius": 0.08 }
                            ]
                        }
                    ]
                }
            ]
        }
    ]
}"#;

#[test]
fn test_load_full_avatar_document() -> Result<()> {
    let scene = scene_from_str(AVATAR_DOC)?;
    let root = scene.resolve_path("Avatar")?;
    let body = scene.resolve_path("Avatar/Body")?;
    let hips = scene.resolve_path("Avatar/Armature/Hips")?;

    assert_eq!(scene.components(root).len(), 2);
    match &scene.components(root)[0] {
        Component::AvatarDescriptor(d) => {
            assert_eq!(d.view_position, [0.0, 1.6, 0.1]);
            assert_eq!(d.lip_sync, LipSyncStyle::VisemeBlendShape);
            assert_eq!(d.viseme_skinned_mesh, Some(body));
        }
        other => panic!("unexpected component: {:?}", other),
    }
    match &scene.components(body)[0] {
        Component::SkinnedMeshRenderer(r) => assert_eq!(r.root_bone, Some(hips)),
        other => panic!("unexpected component: {:?}", other),
    }
    assert_eq!(scene.components(hips).len(), 2);
    Ok(())
}

#[test]
fn test_save_and_reload_file() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("avatar.scene.json");

    let scene = scene_from_str(AVATAR_DOC)?;
    save_scene(&path, &scene)?;
    let reloaded = load_scene(&path)?;

    let body = reloaded.resolve_path("Avatar/Body")?;
    match &reloaded.components(reloaded.resolve_path("Avatar")?)[0] {
        Component::AvatarDescriptor(d) => assert_eq!(d.viseme_skinned_mesh, Some(body)),
        other => panic!("unexpected component: {:?}", other),
    }
    Ok(())
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = load_scene(&temp.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SceneError::IoError(_)));
}

#[test]
fn test_load_malformed_json_is_document_error() {
    let err = scene_from_str("{ not json").unwrap_err();
    assert!(matches!(err, SceneError::DocumentError(_)));
}

#[test]
fn test_unknown_component_type_rejected() {
    let err = scene_from_str(
        r#"{ "roots": [ { "name": "A", "components": [ { "type": "particle_system" } ] } ] }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::DocumentError(_)));
}
