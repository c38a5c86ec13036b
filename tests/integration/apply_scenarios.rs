//! End-to-end porting scenarios over in-memory scenes

use porter::porter::{apply, PortTargets};
use porter::scene::io::{scene_from_str, scene_to_string};
use porter::scene::Component;

fn dynamic_bone_only() -> PortTargets {
    PortTargets {
        dynamic_bone: true,
        ..PortTargets::none()
    }
}

/// Source "Avatar" with a dynamic bone on "Hips" referencing "Hair";
/// destination "Avatar2" has both "Hips" and "Hair". The copy lands on the
/// destination "Hips" and its reference points at the destination "Hair".
#[test]
fn test_scenario_a_reference_remapped() {
    let mut scene = scene_from_str(
        r#"{ "roots": [
            { "name": "Avatar", "children": [
                { "name": "Hips",
                  "components": [ { "type": "dynamic_bone", "root": "Hair" } ],
                  "children": [ { "name": "Hair" } ] }
            ] },
            { "name": "Avatar2", "children": [
                { "name": "Hips" },
                { "name": "Hair" }
            ] }
        ] }"#,
    )
    .unwrap();

    let src = scene.resolve_path("Avatar").unwrap();
    let dst = scene.resolve_path("Avatar2").unwrap();
    let report = apply(&mut scene, src, dst, &dynamic_bone_only()).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.ported.len(), 1);

    let d_hips = scene.resolve_path("Avatar2/Hips").unwrap();
    let d_hair = scene.resolve_path("Avatar2/Hair").unwrap();
    match &scene.components(d_hips)[0] {
        Component::DynamicBone(b) => assert_eq!(b.root, Some(d_hair)),
        other => panic!("unexpected component: {:?}", other),
    }
}

/// Same as scenario A, but the destination lacks "Hair": the component is
/// still copied, the field keeps the source reference, and exactly one
/// failure names the field and owning component.
#[test]
fn test_scenario_b_unresolved_reference_reported() {
    let mut scene = scene_from_str(
        r#"{ "roots": [
            { "name": "Avatar", "children": [
                { "name": "Hips",
                  "components": [ { "type": "dynamic_bone", "root": "Hair" } ],
                  "children": [ { "name": "Hair" } ] }
            ] },
            { "name": "Avatar2", "children": [ { "name": "Hips" } ] }
        ] }"#,
    )
    .unwrap();

    let src = scene.resolve_path("Avatar").unwrap();
    let dst = scene.resolve_path("Avatar2").unwrap();
    let s_hair = scene.resolve_path("Avatar/Hips/Hair").unwrap();
    let report = apply(&mut scene, src, dst, &dynamic_bone_only()).unwrap();

    assert_eq!(report.ported.len(), 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].field, "root");
    assert_eq!(report.failures[0].component, "DynamicBone");
    assert_eq!(report.failures[0].target, "Hair");

    let d_hips = scene.resolve_path("Avatar2/Hips").unwrap();
    match &scene.components(d_hips)[0] {
        Component::DynamicBone(b) => assert_eq!(b.root, Some(s_hair)),
        other => panic!("unexpected component: {:?}", other),
    }
}

/// Source "LeftEye" has no same-named sibling on the destination side: its
/// whole subtree contributes nothing to the run.
#[test]
fn test_scenario_c_unmatched_subtree_untouched() {
    let mut scene = scene_from_str(
        r#"{ "roots": [
            { "name": "Avatar", "children": [
                { "name": "LeftEye",
                  "components": [ { "type": "dynamic_bone" } ],
                  "children": [
                    { "name": "Pupil", "components": [ { "type": "dynamic_bone" } ] }
                  ] }
            ] },
            { "name": "Avatar2", "children": [ { "name": "RightEye" } ] }
        ] }"#,
    )
    .unwrap();

    let src = scene.resolve_path("Avatar").unwrap();
    let dst = scene.resolve_path("Avatar2").unwrap();
    let report = apply(&mut scene, src, dst, &PortTargets::all()).unwrap();

    assert!(report.ported.is_empty());
    for id in scene.preorder(dst) {
        assert!(scene.components(id).is_empty());
    }
}

/// With only the animator toggle enabled, other component types on the
/// same nodes are not walked or copied.
#[test]
fn test_scenario_d_toggles_are_independent() {
    let mut scene = scene_from_str(
        r#"{ "roots": [
            { "name": "Avatar", "components": [
                { "type": "animator", "controller": "AvatarCtrl" },
                { "type": "dynamic_bone" },
                { "type": "dynamic_bone_collider" }
            ] },
            { "name": "Avatar2" }
        ] }"#,
    )
    .unwrap();

    let src = scene.resolve_path("Avatar").unwrap();
    let dst = scene.resolve_path("Avatar2").unwrap();
    let targets = PortTargets {
        animator: true,
        ..PortTargets::none()
    };
    let report = apply(&mut scene, src, dst, &targets).unwrap();

    assert_eq!(report.ported.len(), 1);
    assert_eq!(report.ported[0].component, "UnityEngine.Animator");
    assert_eq!(scene.components(dst).len(), 1);
    match &scene.components(dst)[0] {
        Component::Animator(a) => assert_eq!(a.controller.as_deref(), Some("AvatarCtrl")),
        other => panic!("unexpected component: {:?}", other),
    }
}

/// Renderer references resolve only against nodes that carry a renderer.
#[test]
fn test_renderer_reference_resolution() {
    let mut scene = scene_from_str(
        r#"{ "roots": [
            { "name": "Avatar",
              "components": [
                { "type": "avatar_descriptor", "viseme_skinned_mesh": "Body" }
              ],
              "children": [
                { "name": "Body",
                  "components": [ { "type": "skinned_mesh_renderer", "mesh": "M" } ] }
              ] },
            { "name": "Avatar2", "children": [
                { "name": "Body" },
                { "name": "Body",
                  "components": [ { "type": "skinned_mesh_renderer", "mesh": "M" } ] }
            ] }
        ] }"#,
    )
    .unwrap();

    let src = scene.resolve_path("Avatar").unwrap();
    let dst = scene.resolve_path("Avatar2").unwrap();
    let targets = PortTargets {
        avatar_descriptor: true,
        ..PortTargets::none()
    };
    let report = apply(&mut scene, src, dst, &targets).unwrap();
    assert!(report.is_clean());

    // The first "Body" carries no renderer; the reference must land on
    // the second.
    let with_renderer = scene.children(dst)[1];
    match &scene.components(dst)[0] {
        Component::AvatarDescriptor(d) => {
            assert_eq!(d.viseme_skinned_mesh, Some(with_renderer))
        }
        other => panic!("unexpected component: {:?}", other),
    }
}

/// Two runs from identical fresh state produce field-for-field identical
/// destinations.
#[test]
fn test_idempotence_across_fresh_runs() {
    let doc = r#"{ "roots": [
        { "name": "Avatar", "children": [
            { "name": "Hips",
              "components": [
                { "type": "dynamic_bone", "root": "Hair", "damping": 0.25 },
                { "type": "dynamic_bone_collider", "radius": 0.3 }
              ],
              "children": [ { "name": "Hair" } ] }
        ] },
        { "name": "Avatar2", "children": [
            { "name": "Hips", "children": [ { "name": "Hair" } ] }
        ] }
    ] }"#;

    let run = || {
        let mut scene = scene_from_str(doc).unwrap();
        let src = scene.resolve_path("Avatar").unwrap();
        let dst = scene.resolve_path("Avatar2").unwrap();
        apply(&mut scene, src, dst, &PortTargets::all()).unwrap();
        scene_to_string(&scene).unwrap()
    };

    assert_eq!(run(), run());
}
