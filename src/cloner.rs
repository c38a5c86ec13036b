//! Component cloner
//!
//! Duplicates a matched component onto its destination node and rewrites
//! reference fields to point at the destination hierarchy's equivalently
//! named nodes. Field remap failures are non-fatal: they are logged,
//! recorded, and leave the field pointing at the original source node.

use crate::error::SceneError;
use crate::matcher::PortCandidate;
use crate::scene::{reference_fields, NodeId, Scene};
use tracing::{error, info};

/// A reference field that could not be rewritten to the destination
/// hierarchy. The field keeps its original (foreign) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemapFailure {
    /// Qualified type name of the owning component.
    pub component: &'static str,
    /// Field name from the reference schema.
    pub field: &'static str,
    /// Type name of the referenced value.
    pub field_type: &'static str,
    /// Name of the node the field referenced on the source side.
    pub target: String,
    /// Path of the source node the component came from.
    pub source: String,
}

/// Copy the candidate's component onto its destination node, rewriting
/// reference fields against `destination_root`'s subtree.
///
/// The staging copy is an owned value: it is either attached or dropped,
/// on every path. Returns the remap failures; errors only surface for
/// malformed candidates (component slot no longer present).
pub fn clone_component(
    scene: &mut Scene,
    candidate: &PortCandidate,
    destination_root: NodeId,
) -> Result<Vec<RemapFailure>, SceneError> {
    let mut copy = scene.component(candidate.component)?.clone();
    let source_path = scene.path_of(candidate.source);
    info!(
        component = copy.type_name(),
        source = %source_path,
        "porting component"
    );

    let mut failures = Vec::new();
    for spec in reference_fields(copy.kind()) {
        let Some(referenced) = (spec.get)(&copy) else {
            continue;
        };
        let target_name = match scene.node(referenced) {
            Ok(node) => node.name.clone(),
            Err(_) => {
                // Dangling source reference; nothing to search for.
                error!(
                    component = copy.type_name(),
                    field = spec.name,
                    source = %source_path,
                    "reference field points at a node outside the scene"
                );
                failures.push(RemapFailure {
                    component: copy.type_name(),
                    field: spec.name,
                    field_type: spec.kind.type_name(),
                    target: String::new(),
                    source: source_path.clone(),
                });
                continue;
            }
        };

        match scene.find_reference_target(destination_root, &target_name, spec.kind) {
            Some(found) => {
                info!(
                    component = copy.type_name(),
                    field = spec.name,
                    field_type = spec.kind.type_name(),
                    target = %target_name,
                    "replacing reference"
                );
                (spec.set)(&mut copy, found);
            }
            None => {
                error!(
                    component = copy.type_name(),
                    field = spec.name,
                    field_type = spec.kind.type_name(),
                    target = %target_name,
                    source = %source_path,
                    "failed to replace reference"
                );
                failures.push(RemapFailure {
                    component: copy.type_name(),
                    field: spec.name,
                    field_type: spec.kind.type_name(),
                    target: target_name,
                    source: source_path.clone(),
                });
            }
        }
    }

    scene.attach(candidate.destination, copy)?;
    Ok(failures)
}
