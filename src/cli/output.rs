//! CLI output: user-facing error mapping.

use crate::error::PortError;

/// Map an error to a user-facing message.
pub fn map_error(err: &PortError) -> String {
    match err {
        PortError::MissingRoot(_) => format!("Error: {}", err),
        PortError::SceneError(e) => format!("Error: {}", e),
        PortError::ConfigError(e) => format!("Error: {}", e),
    }
}
