//! Dual-tree matcher
//!
//! Walks the source and destination hierarchies in lockstep and lazily
//! yields every source component selected by the filter, paired with the
//! destination node matched by name and kind. Pure traversal: nothing is
//! mutated, and a fresh walker re-walks from scratch.

use crate::scene::{Component, ComponentSlot, NodeId, Scene};
use std::collections::VecDeque;

/// Selects components by qualified-type-name suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFilter {
    suffix: String,
}

impl ComponentFilter {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn matches(&self, component: &Component) -> bool {
        component.type_name().ends_with(&self.suffix)
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

/// A matched triple: source node, its destination match, and one source
/// component selected by the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortCandidate {
    pub source: NodeId,
    pub destination: NodeId,
    pub component: ComponentSlot,
}

/// Depth-first, pre-order walker over matched (source, destination) pairs.
///
/// At each pair, components are yielded in attachment order before the
/// children are visited. A source child matches the first destination
/// sibling (in enumeration order) with equal name and kind; no uniqueness
/// check is made. Source subtrees without a match are skipped silently.
pub struct MatchWalker<'a> {
    scene: &'a Scene,
    filter: ComponentFilter,
    stack: Vec<(NodeId, NodeId)>,
    yielded: VecDeque<PortCandidate>,
}

impl<'a> MatchWalker<'a> {
    /// Walker rooted at the given pair. Roots that do not belong to the
    /// scene produce an empty sequence.
    pub fn new(
        scene: &'a Scene,
        source_root: NodeId,
        destination_root: NodeId,
        filter: ComponentFilter,
    ) -> Self {
        let stack = if scene.contains(source_root) && scene.contains(destination_root) {
            vec![(source_root, destination_root)]
        } else {
            Vec::new()
        };
        Self {
            scene,
            filter,
            stack,
            yielded: VecDeque::new(),
        }
    }

    fn visit(&mut self, source: NodeId, destination: NodeId) {
        for (index, component) in self.scene.components(source).iter().enumerate() {
            if self.filter.matches(component) {
                self.yielded.push_back(PortCandidate {
                    source,
                    destination,
                    component: ComponentSlot {
                        node: source,
                        index,
                    },
                });
            }
        }

        // Reversed so the leftmost child is popped first.
        for &child in self.scene.children(source).iter().rev() {
            let matched = self.scene.children(destination).iter().copied().find(|&d| {
                self.scene.name(d) == self.scene.name(child)
                    && self.scene.kind(d) == self.scene.kind(child)
            });
            if let Some(matched) = matched {
                self.stack.push((child, matched));
            }
        }
    }
}

impl Iterator for MatchWalker<'_> {
    type Item = PortCandidate;

    fn next(&mut self) -> Option<PortCandidate> {
        loop {
            if let Some(candidate) = self.yielded.pop_front() {
                return Some(candidate);
            }
            let (source, destination) = self.stack.pop()?;
            self.visit(source, destination);
        }
    }
}
