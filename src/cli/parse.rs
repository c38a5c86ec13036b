//! CLI parse: clap types for Porter. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Porter CLI - Port components between matching scene hierarchies
#[derive(Parser)]
#[command(name = "porter")]
#[command(about = "Port components between structurally-matching scene hierarchies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable all logging output
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Port enabled target components from one hierarchy to another
    Apply {
        /// Scene document (JSON)
        scene: PathBuf,

        /// Path of the source hierarchy root (e.g. "Avatar")
        #[arg(long)]
        source: String,

        /// Path of the destination hierarchy root (e.g. "Avatar2")
        #[arg(long)]
        destination: String,

        /// Port avatar descriptor components
        #[arg(long)]
        avatar_descriptor: bool,

        /// Port animator components
        #[arg(long)]
        animator: bool,

        /// Port dynamic bone components
        #[arg(long)]
        dynamic_bone: bool,

        /// Port dynamic bone collider components
        #[arg(long)]
        dynamic_bone_collider: bool,

        /// Port all target component types
        #[arg(long, conflicts_with_all = [
            "avatar_descriptor", "animator", "dynamic_bone", "dynamic_bone_collider"
        ])]
        all: bool,

        /// Write the result here instead of back to the scene document
        #[arg(long)]
        output: Option<PathBuf>,

        /// Run without writing the scene document
        #[arg(long)]
        dry_run: bool,

        /// Report format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Show a scene hierarchy with its attached components
    Inspect {
        /// Scene document (JSON)
        scene: PathBuf,

        /// Limit output to the subtree at this path
        #[arg(long)]
        node: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}
