//! Scene document serialization
//!
//! Scenes persist as JSON documents. Component reference fields appear in
//! documents as slash-separated node paths, which pick out one node even
//! when several hierarchies in the scene share node names. The loader
//! builds the full tree first, attaches components with references unset,
//! then resolves every recorded path; a bare name (hand-written documents)
//! falls back to a scene-wide pre-order search honoring the field's
//! reference kind. An unresolvable reference is a load error — a document
//! must not start out with dangling references.

use crate::error::SceneError;
use crate::scene::component::{
    reference_fields, Animator, AvatarDescriptor, ColliderBound, ColliderDirection, Component,
    CullingMode, DynamicBone, DynamicBoneCollider, LipSyncStyle, RefFieldSpec, SkinnedMeshRenderer,
};
use crate::scene::{ComponentSlot, NodeId, RefKind, Scene, DEFAULT_KIND};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct SceneDoc {
    roots: Vec<NodeDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeDoc {
    name: String,
    #[serde(default = "default_kind")]
    kind: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    components: Vec<ComponentDoc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<NodeDoc>,
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

/// Document form of a component: reference fields are node names.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ComponentDoc {
    AvatarDescriptor {
        #[serde(default)]
        view_position: [f32; 3],
        #[serde(default)]
        lip_sync: LipSyncStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        viseme_skinned_mesh: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lip_sync_jaw_bone: Option<String>,
    },
    Animator {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        controller: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        avatar: Option<String>,
        #[serde(default)]
        apply_root_motion: bool,
        #[serde(default)]
        culling_mode: CullingMode,
    },
    DynamicBone {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        root: Option<String>,
        #[serde(default = "default_update_rate")]
        update_rate: f32,
        #[serde(default = "default_tenth")]
        damping: f32,
        #[serde(default = "default_tenth")]
        elasticity: f32,
        #[serde(default = "default_tenth")]
        stiffness: f32,
        #[serde(default)]
        inert: f32,
        #[serde(default)]
        radius: f32,
        #[serde(default)]
        end_length: f32,
        #[serde(default)]
        gravity: [f32; 3],
        #[serde(default)]
        force: [f32; 3],
    },
    DynamicBoneCollider {
        #[serde(default)]
        center: [f32; 3],
        #[serde(default = "default_collider_radius")]
        radius: f32,
        #[serde(default)]
        height: f32,
        #[serde(default)]
        direction: ColliderDirection,
        #[serde(default)]
        bound: ColliderBound,
    },
    SkinnedMeshRenderer {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mesh: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        root_bone: Option<String>,
        #[serde(default = "default_true")]
        enabled: bool,
    },
}

fn default_update_rate() -> f32 {
    60.0
}

fn default_tenth() -> f32 {
    0.1
}

fn default_collider_radius() -> f32 {
    0.5
}

fn default_true() -> bool {
    true
}

/// A reference recorded during tree building, resolved once the whole
/// scene exists.
struct PendingRef {
    slot: ComponentSlot,
    spec: &'static RefFieldSpec,
    name: String,
}

/// Load a scene from a JSON file.
pub fn load_scene(path: &Path) -> Result<Scene, SceneError> {
    let text = std::fs::read_to_string(path)?;
    scene_from_str(&text)
}

/// Parse a scene from JSON text.
pub fn scene_from_str(text: &str) -> Result<Scene, SceneError> {
    let doc: SceneDoc = serde_json::from_str(text)?;
    let mut scene = Scene::new();
    let mut pending = Vec::new();

    for root_doc in &doc.roots {
        let root = scene.add_root(&root_doc.name, &root_doc.kind);
        build_subtree(&mut scene, root, root_doc, &mut pending)?;
    }

    for p in pending {
        match resolve_reference(&scene, &p.name, p.spec.kind) {
            Some(target) => (p.spec.set)(scene.component_mut(p.slot)?, target),
            None => {
                return Err(SceneError::UnresolvedReference {
                    field: p.spec.name.to_string(),
                    name: p.name,
                    kind: p.spec.kind.type_name(),
                })
            }
        }
    }

    Ok(scene)
}

/// Resolve a document reference string. Saved documents carry full slash
/// paths, which stay anchored to their own hierarchy; bare names from
/// hand-written documents fall back to a scene-wide pre-order search.
fn resolve_reference(scene: &Scene, text: &str, kind: RefKind) -> Option<NodeId> {
    if let Ok(id) = scene.resolve_path(text) {
        if scene.satisfies(id, kind) {
            return Some(id);
        }
    }
    scene.find_by_name(text, kind)
}

fn build_subtree(
    scene: &mut Scene,
    id: NodeId,
    doc: &NodeDoc,
    pending: &mut Vec<PendingRef>,
) -> Result<(), SceneError> {
    for component_doc in &doc.components {
        let (component, names) = from_doc(component_doc);
        let slot = scene.attach(id, component)?;
        let specs = reference_fields(scene.component(slot)?.kind());
        for (spec, name) in specs.iter().zip(names) {
            if let Some(name) = name {
                pending.push(PendingRef { slot, spec, name });
            }
        }
    }
    for child_doc in &doc.children {
        let child = scene.add_child(id, &child_doc.name, &child_doc.kind)?;
        build_subtree(scene, child, child_doc, pending)?;
    }
    Ok(())
}

/// Convert a component document into a component with references unset,
/// returning the reference names in schema-table order.
fn from_doc(doc: &ComponentDoc) -> (Component, Vec<Option<String>>) {
    match doc {
        ComponentDoc::AvatarDescriptor {
            view_position,
            lip_sync,
            viseme_skinned_mesh,
            lip_sync_jaw_bone,
        } => (
            Component::AvatarDescriptor(AvatarDescriptor {
                view_position: *view_position,
                lip_sync: *lip_sync,
                viseme_skinned_mesh: None,
                lip_sync_jaw_bone: None,
            }),
            vec![viseme_skinned_mesh.clone(), lip_sync_jaw_bone.clone()],
        ),
        ComponentDoc::Animator {
            controller,
            avatar,
            apply_root_motion,
            culling_mode,
        } => (
            Component::Animator(Animator {
                controller: controller.clone(),
                avatar: avatar.clone(),
                apply_root_motion: *apply_root_motion,
                culling_mode: *culling_mode,
            }),
            vec![],
        ),
        ComponentDoc::DynamicBone {
            root,
            update_rate,
            damping,
            elasticity,
            stiffness,
            inert,
            radius,
            end_length,
            gravity,
            force,
        } => (
            Component::DynamicBone(DynamicBone {
                root: None,
                update_rate: *update_rate,
                damping: *damping,
                elasticity: *elasticity,
                stiffness: *stiffness,
                inert: *inert,
                radius: *radius,
                end_length: *end_length,
                gravity: *gravity,
                force: *force,
            }),
            vec![root.clone()],
        ),
        ComponentDoc::DynamicBoneCollider {
            center,
            radius,
            height,
            direction,
            bound,
        } => (
            Component::DynamicBoneCollider(DynamicBoneCollider {
                center: *center,
                radius: *radius,
                height: *height,
                direction: *direction,
                bound: *bound,
            }),
            vec![],
        ),
        ComponentDoc::SkinnedMeshRenderer {
            mesh,
            root_bone,
            enabled,
        } => (
            Component::SkinnedMeshRenderer(SkinnedMeshRenderer {
                mesh: mesh.clone(),
                root_bone: None,
                enabled: *enabled,
            }),
            vec![root_bone.clone()],
        ),
    }
}

/// Save a scene to a JSON file (pretty-printed).
pub fn save_scene(path: &Path, scene: &Scene) -> Result<(), SceneError> {
    let text = scene_to_string(scene)?;
    std::fs::write(path, text)?;
    Ok(())
}

/// Render a scene as JSON text. Reference fields are written as the
/// referenced node's full path, so a reload cannot re-point them at a
/// same-named node in another hierarchy.
pub fn scene_to_string(scene: &Scene) -> Result<String, SceneError> {
    let mut roots = Vec::new();
    for &root in scene.roots() {
        roots.push(to_node_doc(scene, root)?);
    }
    let doc = SceneDoc { roots };
    let mut text = serde_json::to_string_pretty(&doc)?;
    text.push('\n');
    Ok(text)
}

fn to_node_doc(scene: &Scene, id: NodeId) -> Result<NodeDoc, SceneError> {
    let mut components = Vec::new();
    for component in scene.components(id) {
        components.push(to_doc(scene, component)?);
    }
    let mut children = Vec::new();
    for &child in scene.children(id) {
        children.push(to_node_doc(scene, child)?);
    }
    Ok(NodeDoc {
        name: scene.name(id).to_string(),
        kind: scene.kind(id).to_string(),
        components,
        children,
    })
}

fn ref_path(scene: &Scene, id: Option<NodeId>) -> Result<Option<String>, SceneError> {
    id.map(|id| scene.node(id).map(|_| scene.path_of(id)))
        .transpose()
}

fn to_doc(scene: &Scene, component: &Component) -> Result<ComponentDoc, SceneError> {
    Ok(match component {
        Component::AvatarDescriptor(d) => ComponentDoc::AvatarDescriptor {
            view_position: d.view_position,
            lip_sync: d.lip_sync,
            viseme_skinned_mesh: ref_path(scene, d.viseme_skinned_mesh)?,
            lip_sync_jaw_bone: ref_path(scene, d.lip_sync_jaw_bone)?,
        },
        Component::Animator(a) => ComponentDoc::Animator {
            controller: a.controller.clone(),
            avatar: a.avatar.clone(),
            apply_root_motion: a.apply_root_motion,
            culling_mode: a.culling_mode,
        },
        Component::DynamicBone(b) => ComponentDoc::DynamicBone {
            root: ref_path(scene, b.root)?,
            update_rate: b.update_rate,
            damping: b.damping,
            elasticity: b.elasticity,
            stiffness: b.stiffness,
            inert: b.inert,
            radius: b.radius,
            end_length: b.end_length,
            gravity: b.gravity,
            force: b.force,
        },
        Component::DynamicBoneCollider(c) => ComponentDoc::DynamicBoneCollider {
            center: c.center,
            radius: c.radius,
            height: c.height,
            direction: c.direction,
            bound: c.bound,
        },
        Component::SkinnedMeshRenderer(r) => ComponentDoc::SkinnedMeshRenderer {
            mesh: r.mesh.clone(),
            root_bone: ref_path(scene, r.root_bone)?,
            enabled: r.enabled,
        },
    })
}
