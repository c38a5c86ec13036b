//! Scene node types and arena identifiers

use crate::scene::Component;

/// Identifier of a node inside a [`Scene`](crate::scene::Scene) arena.
///
/// Ids are only meaningful for the scene that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index, for diagnostics only.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named element of an ordered scene hierarchy.
///
/// Names are not unique scene-wide, but matching is only well-defined when
/// they are unique among siblings.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// Concrete node type; compared during tree matching.
    pub kind: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) components: Vec<Component>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            parent: None,
            children: Vec::new(),
            components: Vec::new(),
        }
    }

    /// Parent node, if this is not a hierarchy root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Ordered child nodes.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Components in attachment order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

/// Default node kind used when a scene document omits one.
pub const DEFAULT_KIND: &str = "node";
