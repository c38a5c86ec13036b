//! Apply operation
//!
//! One run ports every enabled target component type from the source
//! hierarchy to the destination hierarchy. Each enabled toggle drives an
//! independent, fresh tree walk; the run always completes, collecting
//! per-field remap failures instead of aborting.

use crate::cloner::{clone_component, RemapFailure};
use crate::error::PortError;
use crate::matcher::{ComponentFilter, MatchWalker};
use crate::scene::{ComponentKind, NodeId, Scene};
use tracing::info;

/// Target component toggles for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortTargets {
    pub avatar_descriptor: bool,
    pub animator: bool,
    pub dynamic_bone: bool,
    pub dynamic_bone_collider: bool,
}

impl PortTargets {
    pub fn all() -> Self {
        Self {
            avatar_descriptor: true,
            animator: true,
            dynamic_bone: true,
            dynamic_bone_collider: true,
        }
    }

    pub fn none() -> Self {
        Self {
            avatar_descriptor: false,
            animator: false,
            dynamic_bone: false,
            dynamic_bone_collider: false,
        }
    }

    pub fn any(&self) -> bool {
        self.avatar_descriptor || self.animator || self.dynamic_bone || self.dynamic_bone_collider
    }

    /// Filters for the enabled toggles, in the fixed run order. Each filter
    /// is a full qualified type name used as a suffix match, so the toggles
    /// produce disjoint yields.
    pub fn filters(&self) -> Vec<ComponentFilter> {
        let toggles = [
            (self.avatar_descriptor, ComponentKind::AvatarDescriptor),
            (self.animator, ComponentKind::Animator),
            (self.dynamic_bone, ComponentKind::DynamicBone),
            (self.dynamic_bone_collider, ComponentKind::DynamicBoneCollider),
        ];
        toggles
            .into_iter()
            .filter(|(enabled, _)| *enabled)
            .map(|(_, kind)| ComponentFilter::new(kind.type_name()))
            .collect()
    }
}

impl Default for PortTargets {
    fn default() -> Self {
        Self::all()
    }
}

/// One successfully attached copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortedComponent {
    /// Qualified type name of the component.
    pub component: &'static str,
    /// Path of the source node it came from.
    pub source: String,
    /// Path of the destination node it was attached to.
    pub destination: String,
}

/// Best-effort result of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortReport {
    pub ported: Vec<PortedComponent>,
    pub failures: Vec<RemapFailure>,
}

impl PortReport {
    /// True when every reference field of every ported component resolved.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Port all enabled target components from `source_root`'s hierarchy to
/// `destination_root`'s hierarchy, mutating the destination in place.
///
/// Both roots must exist in the scene; that precondition is the only
/// fatal failure once the run has started.
pub fn apply(
    scene: &mut Scene,
    source_root: NodeId,
    destination_root: NodeId,
    targets: &PortTargets,
) -> Result<PortReport, PortError> {
    if !scene.contains(source_root) {
        return Err(PortError::MissingRoot("source"));
    }
    if !scene.contains(destination_root) {
        return Err(PortError::MissingRoot("destination"));
    }

    info!(
        source = %scene.path_of(source_root),
        destination = %scene.path_of(destination_root),
        "applying"
    );

    let mut report = PortReport::default();
    for filter in targets.filters() {
        // Candidates are collected before cloning; the walk reads only the
        // source side, which cloning never touches.
        let candidates: Vec<_> =
            MatchWalker::new(scene, source_root, destination_root, filter).collect();
        for candidate in candidates {
            let failures = clone_component(scene, &candidate, destination_root)?;
            report.ported.push(PortedComponent {
                component: scene.component(candidate.component)?.type_name(),
                source: scene.path_of(candidate.source),
                destination: scene.path_of(candidate.destination),
            });
            report.failures.extend(failures);
        }
    }

    info!("done");
    Ok(report)
}
