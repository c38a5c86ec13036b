//! CLI route: run context and dispatch. Loads scene documents, resolves the
//! selected roots, runs the port, and persists the result.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_apply_result_json, format_apply_result_text, format_inspect_json, format_inspect_text,
};
use crate::config::{ConfigLoader, PorterConfig};
use crate::error::PortError;
use crate::porter::{apply, PortTargets};
use crate::scene::io::{load_scene, save_scene};
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: resolved configuration only; each
/// command performs one independent full run.
pub struct RunContext {
    config: PorterConfig,
}

impl RunContext {
    /// Create run context from an optional config path, falling back to
    /// `porter.toml` in the working directory.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, PortError> {
        let config = if let Some(ref path) = config_path {
            ConfigLoader::load_from_file(path)?
        } else {
            ConfigLoader::load(Path::new("."))?
        };
        Ok(Self { config })
    }

    /// Build a context from an already-loaded configuration.
    pub fn with_config(config: PorterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PorterConfig {
        &self.config
    }

    /// Execute a parsed command, returning the rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, PortError> {
        match command {
            Commands::Apply {
                scene,
                source,
                destination,
                avatar_descriptor,
                animator,
                dynamic_bone,
                dynamic_bone_collider,
                all,
                output,
                dry_run,
                format,
            } => {
                let targets = self.resolve_targets(
                    *all,
                    *avatar_descriptor,
                    *animator,
                    *dynamic_bone,
                    *dynamic_bone_collider,
                );
                self.run_apply(
                    scene,
                    source,
                    destination,
                    &targets,
                    output.as_deref(),
                    *dry_run,
                    format,
                )
            }
            Commands::Inspect {
                scene,
                node,
                format,
            } => self.run_inspect(scene, node.as_deref(), format),
        }
    }

    /// Toggle precedence: `--all`, then any explicit flag set, then the
    /// configured defaults.
    fn resolve_targets(
        &self,
        all: bool,
        avatar_descriptor: bool,
        animator: bool,
        dynamic_bone: bool,
        dynamic_bone_collider: bool,
    ) -> PortTargets {
        if all {
            return PortTargets::all();
        }
        let explicit = PortTargets {
            avatar_descriptor,
            animator,
            dynamic_bone,
            dynamic_bone_collider,
        };
        if explicit.any() {
            explicit
        } else {
            PortTargets::from(&self.config.targets)
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn run_apply(
        &self,
        scene_path: &Path,
        source: &str,
        destination: &str,
        targets: &PortTargets,
        output: Option<&Path>,
        dry_run: bool,
        format: &str,
    ) -> Result<String, PortError> {
        let mut scene = load_scene(scene_path)?;

        // Precondition: both roots must resolve before the run starts.
        let source_root = scene
            .resolve_path(source)
            .map_err(|_| PortError::MissingRoot("source"))?;
        let destination_root = scene
            .resolve_path(destination)
            .map_err(|_| PortError::MissingRoot("destination"))?;

        let report = apply(&mut scene, source_root, destination_root, targets)?;

        if dry_run {
            info!("dry run; scene document not written");
        } else {
            let out_path = output.unwrap_or(scene_path);
            save_scene(out_path, &scene)?;
            info!(path = %out_path.display(), "scene document written");
        }

        match format {
            "json" => format_apply_result_json(&report),
            _ => Ok(format_apply_result_text(&report)),
        }
    }

    fn run_inspect(
        &self,
        scene_path: &Path,
        node: Option<&str>,
        format: &str,
    ) -> Result<String, PortError> {
        let scene = load_scene(scene_path)?;
        let roots = match node {
            Some(path) => vec![scene.resolve_path(path)?],
            None => scene.roots().to_vec(),
        };
        match format {
            "json" => format_inspect_json(&scene, &roots),
            _ => Ok(format_inspect_text(&scene, &roots)),
        }
    }
}

impl Default for RunContext {
    fn default() -> Self {
        Self::with_config(PorterConfig::default())
    }
}
