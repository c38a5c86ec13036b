//! Component types and the reference-field schema
//!
//! The portable component set is fixed: avatar descriptor, animator, dynamic
//! bone, and dynamic bone collider. The skinned mesh renderer is attachable
//! but never a port target; it exists so renderer-reference fields have
//! something to resolve against.
//!
//! Reference-bearing fields are enumerated by a static schema table per
//! component kind instead of runtime introspection: each entry names the
//! field, its reference kind, and typed getter/setter functions.

use crate::scene::NodeId;
use serde::{Deserialize, Serialize};

/// Lip sync acquisition style for an avatar descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LipSyncStyle {
    Default,
    JawFlapBone,
    JawFlapBlendShape,
    VisemeBlendShape,
}

impl Default for LipSyncStyle {
    fn default() -> Self {
        LipSyncStyle::Default
    }
}

/// Animator culling behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CullingMode {
    AlwaysAnimate,
    CullUpdateTransforms,
    CullCompletely,
}

impl Default for CullingMode {
    fn default() -> Self {
        CullingMode::AlwaysAnimate
    }
}

/// Capsule axis of a dynamic bone collider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColliderDirection {
    X,
    Y,
    Z,
}

impl Default for ColliderDirection {
    fn default() -> Self {
        ColliderDirection::Y
    }
}

/// Whether a collider keeps bones outside or inside its volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColliderBound {
    Outside,
    Inside,
}

impl Default for ColliderBound {
    fn default() -> Self {
        ColliderBound::Outside
    }
}

/// Avatar descriptor configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvatarDescriptor {
    pub view_position: [f32; 3],
    pub lip_sync: LipSyncStyle,
    /// Renderer-reference: node carrying the viseme mesh renderer.
    pub viseme_skinned_mesh: Option<NodeId>,
    /// Node-reference: jaw bone transform.
    pub lip_sync_jaw_bone: Option<NodeId>,
}

/// Animator configuration. Asset references are opaque names; they are
/// copied verbatim, never remapped.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Animator {
    pub controller: Option<String>,
    pub avatar: Option<String>,
    pub apply_root_motion: bool,
    pub culling_mode: CullingMode,
}

/// Dynamic bone simulation configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicBone {
    /// Node-reference: root transform of the simulated chain.
    pub root: Option<NodeId>,
    pub update_rate: f32,
    pub damping: f32,
    pub elasticity: f32,
    pub stiffness: f32,
    pub inert: f32,
    pub radius: f32,
    pub end_length: f32,
    pub gravity: [f32; 3],
    pub force: [f32; 3],
}

impl Default for DynamicBone {
    fn default() -> Self {
        Self {
            root: None,
            update_rate: 60.0,
            damping: 0.1,
            elasticity: 0.1,
            stiffness: 0.1,
            inert: 0.0,
            radius: 0.0,
            end_length: 0.0,
            gravity: [0.0; 3],
            force: [0.0; 3],
        }
    }
}

/// Dynamic bone collider configuration. No reference fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicBoneCollider {
    pub center: [f32; 3],
    pub radius: f32,
    pub height: f32,
    pub direction: ColliderDirection,
    pub bound: ColliderBound,
}

impl Default for DynamicBoneCollider {
    fn default() -> Self {
        Self {
            center: [0.0; 3],
            radius: 0.5,
            height: 0.0,
            direction: ColliderDirection::default(),
            bound: ColliderBound::default(),
        }
    }
}

/// Skinned mesh renderer. Attachable so renderer-references can resolve,
/// but excluded from the portable target set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SkinnedMeshRenderer {
    pub mesh: Option<String>,
    /// Node-reference: root bone transform.
    pub root_bone: Option<NodeId>,
    pub enabled: bool,
}

/// A typed configuration object attached to exactly one node.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    AvatarDescriptor(AvatarDescriptor),
    Animator(Animator),
    DynamicBone(DynamicBone),
    DynamicBoneCollider(DynamicBoneCollider),
    SkinnedMeshRenderer(SkinnedMeshRenderer),
}

/// Discriminant of [`Component`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    AvatarDescriptor,
    Animator,
    DynamicBone,
    DynamicBoneCollider,
    SkinnedMeshRenderer,
}

impl ComponentKind {
    /// Qualified type name used for filter suffix matching and log output.
    pub fn type_name(self) -> &'static str {
        match self {
            ComponentKind::AvatarDescriptor => "VRCSDK2.VRC_AvatarDescriptor",
            ComponentKind::Animator => "UnityEngine.Animator",
            ComponentKind::DynamicBone => "DynamicBone",
            ComponentKind::DynamicBoneCollider => "DynamicBoneCollider",
            ComponentKind::SkinnedMeshRenderer => "UnityEngine.SkinnedMeshRenderer",
        }
    }
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Component::AvatarDescriptor(_) => ComponentKind::AvatarDescriptor,
            Component::Animator(_) => ComponentKind::Animator,
            Component::DynamicBone(_) => ComponentKind::DynamicBone,
            Component::DynamicBoneCollider(_) => ComponentKind::DynamicBoneCollider,
            Component::SkinnedMeshRenderer(_) => ComponentKind::SkinnedMeshRenderer,
        }
    }

    /// Qualified type name of this component.
    pub fn type_name(&self) -> &'static str {
        self.kind().type_name()
    }
}

/// What a reference field may point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    /// Any node (every node is usable as a transform).
    Node,
    /// A node carrying a skinned mesh renderer component.
    Renderer,
}

impl RefKind {
    /// Type name of the referenced value, for log output.
    pub fn type_name(self) -> &'static str {
        match self {
            RefKind::Node => "UnityEngine.Transform",
            RefKind::Renderer => "UnityEngine.SkinnedMeshRenderer",
        }
    }
}

/// One reference-bearing field of a component kind.
pub struct RefFieldSpec {
    pub name: &'static str,
    pub kind: RefKind,
    pub get: fn(&Component) -> Option<NodeId>,
    pub set: fn(&mut Component, NodeId),
}

fn get_viseme_skinned_mesh(c: &Component) -> Option<NodeId> {
    match c {
        Component::AvatarDescriptor(d) => d.viseme_skinned_mesh,
        _ => None,
    }
}

fn set_viseme_skinned_mesh(c: &mut Component, id: NodeId) {
    if let Component::AvatarDescriptor(d) = c {
        d.viseme_skinned_mesh = Some(id);
    }
}

fn get_lip_sync_jaw_bone(c: &Component) -> Option<NodeId> {
    match c {
        Component::AvatarDescriptor(d) => d.lip_sync_jaw_bone,
        _ => None,
    }
}

fn set_lip_sync_jaw_bone(c: &mut Component, id: NodeId) {
    if let Component::AvatarDescriptor(d) = c {
        d.lip_sync_jaw_bone = Some(id);
    }
}

fn get_dynamic_bone_root(c: &Component) -> Option<NodeId> {
    match c {
        Component::DynamicBone(b) => b.root,
        _ => None,
    }
}

fn set_dynamic_bone_root(c: &mut Component, id: NodeId) {
    if let Component::DynamicBone(b) = c {
        b.root = Some(id);
    }
}

fn get_root_bone(c: &Component) -> Option<NodeId> {
    match c {
        Component::SkinnedMeshRenderer(r) => r.root_bone,
        _ => None,
    }
}

fn set_root_bone(c: &mut Component, id: NodeId) {
    if let Component::SkinnedMeshRenderer(r) = c {
        r.root_bone = Some(id);
    }
}

static AVATAR_DESCRIPTOR_REFS: [RefFieldSpec; 2] = [
    RefFieldSpec {
        name: "viseme_skinned_mesh",
        kind: RefKind::Renderer,
        get: get_viseme_skinned_mesh,
        set: set_viseme_skinned_mesh,
    },
    RefFieldSpec {
        name: "lip_sync_jaw_bone",
        kind: RefKind::Node,
        get: get_lip_sync_jaw_bone,
        set: set_lip_sync_jaw_bone,
    },
];

static DYNAMIC_BONE_REFS: [RefFieldSpec; 1] = [RefFieldSpec {
    name: "root",
    kind: RefKind::Node,
    get: get_dynamic_bone_root,
    set: set_dynamic_bone_root,
}];

static SKINNED_MESH_RENDERER_REFS: [RefFieldSpec; 1] = [RefFieldSpec {
    name: "root_bone",
    kind: RefKind::Node,
    get: get_root_bone,
    set: set_root_bone,
}];

/// Reference-field schema for a component kind. Kinds without reference
/// fields return an empty slice.
pub fn reference_fields(kind: ComponentKind) -> &'static [RefFieldSpec] {
    match kind {
        ComponentKind::AvatarDescriptor => &AVATAR_DESCRIPTOR_REFS,
        ComponentKind::DynamicBone => &DYNAMIC_BONE_REFS,
        ComponentKind::SkinnedMeshRenderer => &SKINNED_MESH_RENDERER_REFS,
        ComponentKind::Animator | ComponentKind::DynamicBoneCollider => &[],
    }
}
