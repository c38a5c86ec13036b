//! Error types for the component porter.
//!
//! Per-field reference remap failures are deliberately absent here: they are
//! non-fatal, logged, and collected into the port report instead of
//! propagating as errors.

use crate::scene::NodeId;
use thiserror::Error;

/// Scene graph and scene document errors
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("Node not found: {0:?}")]
    NodeNotFound(NodeId),

    #[error("No node at path: {0}")]
    PathNotFound(String),

    #[error("No component at index {index} on node {node:?}")]
    ComponentNotFound { node: NodeId, index: usize },

    #[error("Unresolved reference '{name}' in field {field} ({kind})")]
    UnresolvedReference {
        field: String,
        name: String,
        kind: &'static str,
    },

    #[error("Scene I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Scene document error: {0}")]
    DocumentError(#[from] serde_json::Error),
}

/// Porting and CLI-level errors
#[derive(Debug, Error)]
pub enum PortError {
    #[error("Missing {0} root; select both hierarchies before applying")]
    MissingRoot(&'static str),

    #[error("Scene error: {0}")]
    SceneError(#[from] SceneError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for PortError {
    fn from(err: toml::de::Error) -> Self {
        PortError::ConfigError(err.to_string())
    }
}
