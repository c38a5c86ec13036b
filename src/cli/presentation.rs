//! CLI presentation: text and JSON rendering of run results and scenes.

use crate::error::PortError;
use crate::porter::PortReport;
use crate::scene::{NodeId, Scene};
use serde_json::json;

/// Render an apply report as human-readable text.
pub fn format_apply_result_text(report: &PortReport) -> String {
    let mut lines = Vec::new();
    for ported in &report.ported {
        lines.push(format!(
            "ported {} from {} to {}",
            ported.component, ported.source, ported.destination
        ));
    }
    for failure in &report.failures {
        lines.push(format!(
            "unresolved ({}){} '{}' in {} at {}",
            failure.field_type, failure.field, failure.target, failure.component, failure.source
        ));
    }
    lines.push(format!(
        "done: {} component(s) ported, {} unresolved reference(s)",
        report.ported.len(),
        report.failures.len()
    ));
    lines.join("\n")
}

/// Render an apply report as JSON.
pub fn format_apply_result_json(report: &PortReport) -> Result<String, PortError> {
    let value = json!({
        "ported": report.ported.iter().map(|p| json!({
            "component": p.component,
            "source": p.source,
            "destination": p.destination,
        })).collect::<Vec<_>>(),
        "failures": report.failures.iter().map(|f| json!({
            "component": f.component,
            "field": f.field,
            "field_type": f.field_type,
            "target": f.target,
            "source": f.source,
        })).collect::<Vec<_>>(),
    });
    serde_json::to_string_pretty(&value)
        .map_err(|e| PortError::ConfigError(format!("Failed to render report: {}", e)))
}

/// Render a hierarchy (or a subtree) as indented text with component names.
pub fn format_inspect_text(scene: &Scene, roots: &[NodeId]) -> String {
    let mut lines = Vec::new();
    for &root in roots {
        render_node_text(scene, root, 0, &mut lines);
    }
    lines.join("\n")
}

fn render_node_text(scene: &Scene, id: NodeId, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let components: Vec<_> = scene
        .components(id)
        .iter()
        .map(|c| c.type_name())
        .collect();
    if components.is_empty() {
        lines.push(format!("{}{}", indent, scene.name(id)));
    } else {
        lines.push(format!(
            "{}{} [{}]",
            indent,
            scene.name(id),
            components.join(", ")
        ));
    }
    for &child in scene.children(id) {
        render_node_text(scene, child, depth + 1, lines);
    }
}

/// Render a hierarchy (or a subtree) as JSON.
pub fn format_inspect_json(scene: &Scene, roots: &[NodeId]) -> Result<String, PortError> {
    let value = json!({
        "roots": roots.iter().map(|&r| render_node_json(scene, r)).collect::<Vec<_>>(),
    });
    serde_json::to_string_pretty(&value)
        .map_err(|e| PortError::ConfigError(format!("Failed to render scene: {}", e)))
}

fn render_node_json(scene: &Scene, id: NodeId) -> serde_json::Value {
    json!({
        "name": scene.name(id),
        "kind": scene.kind(id),
        "components": scene.components(id).iter().map(|c| c.type_name()).collect::<Vec<_>>(),
        "children": scene.children(id).iter().map(|&c| render_node_json(scene, c)).collect::<Vec<_>>(),
    })
}
