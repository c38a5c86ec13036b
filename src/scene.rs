//! In-memory scene graph
//!
//! A [`Scene`] is an arena of named, ordered nodes. One scene may hold
//! several independent hierarchies, mirroring an editor scene containing
//! both the source and the destination avatar. The source hierarchy is
//! only read; porting mutates the destination hierarchy in place.

use crate::error::SceneError;

pub mod component;
pub mod io;
pub mod node;

pub use component::{
    reference_fields, Animator, AvatarDescriptor, ColliderBound, ColliderDirection, Component,
    ComponentKind, CullingMode, DynamicBone, DynamicBoneCollider, LipSyncStyle, RefFieldSpec,
    RefKind, SkinnedMeshRenderer,
};
pub use node::{Node, NodeId, DEFAULT_KIND};

/// Address of a component by owning node and attachment index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSlot {
    pub node: NodeId,
    pub index: usize,
}

/// Arena of nodes plus the ordered list of hierarchy roots.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` was issued by this scene.
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Ordered hierarchy roots.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Add a new hierarchy root.
    pub fn add_root(&mut self, name: impl Into<String>, kind: impl Into<String>) -> NodeId {
        let id = self.push(Node::new(name, kind));
        self.roots.push(id);
        id
    }

    /// Add a child under `parent`, appended after existing siblings.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<NodeId, SceneError> {
        if !self.contains(parent) {
            return Err(SceneError::NodeNotFound(parent));
        }
        let mut node = Node::new(name, kind);
        node.parent = Some(parent);
        let id = self.push(node);
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Node access.
    pub fn node(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes.get(id.0).ok_or(SceneError::NodeNotFound(id))
    }

    /// Node name. Convenience over [`Scene::node`] for ids known to be valid.
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Node kind.
    pub fn kind(&self, id: NodeId) -> &str {
        &self.nodes[id.0].kind
    }

    /// Ordered children of `id`.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Components attached to `id`, in attachment order.
    pub fn components(&self, id: NodeId) -> &[Component] {
        &self.nodes[id.0].components
    }

    /// Component at a slot.
    pub fn component(&self, slot: ComponentSlot) -> Result<&Component, SceneError> {
        self.node(slot.node)?
            .components
            .get(slot.index)
            .ok_or(SceneError::ComponentNotFound {
                node: slot.node,
                index: slot.index,
            })
    }

    /// Mutable component access.
    pub fn component_mut(&mut self, slot: ComponentSlot) -> Result<&mut Component, SceneError> {
        if !self.contains(slot.node) {
            return Err(SceneError::NodeNotFound(slot.node));
        }
        self.nodes[slot.node.0]
            .components
            .get_mut(slot.index)
            .ok_or(SceneError::ComponentNotFound {
                node: slot.node,
                index: slot.index,
            })
    }

    /// Attach a component to `id` as the last component.
    pub fn attach(&mut self, id: NodeId, component: Component) -> Result<ComponentSlot, SceneError> {
        if !self.contains(id) {
            return Err(SceneError::NodeNotFound(id));
        }
        let components = &mut self.nodes[id.0].components;
        components.push(component);
        Ok(ComponentSlot {
            node: id,
            index: components.len() - 1,
        })
    }

    /// Slash-separated path from the owning root down to `id`.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments = vec![self.name(id).to_string()];
        let mut current = id;
        while let Some(parent) = self.nodes[current.0].parent {
            segments.push(self.name(parent).to_string());
            current = parent;
        }
        segments.reverse();
        segments.join("/")
    }

    /// Resolve a slash-separated path. The first segment selects a root by
    /// name; each further segment selects the first same-named child.
    pub fn resolve_path(&self, path: &str) -> Result<NodeId, SceneError> {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let root_name = segments
            .next()
            .ok_or_else(|| SceneError::PathNotFound(path.to_string()))?;
        let mut current = self
            .roots
            .iter()
            .copied()
            .find(|&r| self.name(r) == root_name)
            .ok_or_else(|| SceneError::PathNotFound(path.to_string()))?;
        for segment in segments {
            current = self
                .children(current)
                .iter()
                .copied()
                .find(|&c| self.name(c) == segment)
                .ok_or_else(|| SceneError::PathNotFound(path.to_string()))?;
        }
        Ok(current)
    }

    /// Pre-order (parent before children) node sequence of a subtree.
    pub fn preorder(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            for &child in self.children(id).iter().rev() {
                stack.push(child);
            }
        }
        order
    }

    /// First node in pre-order under `root` (inclusive) named `name` that
    /// satisfies `kind`. Nodes with the right name but without the required
    /// component are passed over and the search continues.
    pub fn find_reference_target(
        &self,
        root: NodeId,
        name: &str,
        kind: RefKind,
    ) -> Option<NodeId> {
        self.preorder(root)
            .into_iter()
            .find(|&id| self.name(id) == name && self.satisfies(id, kind))
    }

    /// Whether `id` can be the target of a reference of `kind`.
    pub(crate) fn satisfies(&self, id: NodeId, kind: RefKind) -> bool {
        match kind {
            RefKind::Node => true,
            RefKind::Renderer => self
                .components(id)
                .iter()
                .any(|c| matches!(c, Component::SkinnedMeshRenderer(_))),
        }
    }

    /// First node in pre-order across all roots with the given name.
    /// Used by the document loader to resolve name references.
    pub fn find_by_name(&self, name: &str, kind: RefKind) -> Option<NodeId> {
        self.roots
            .iter()
            .find_map(|&root| self.find_reference_target(root, name, kind))
    }
}
