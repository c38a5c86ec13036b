//! Integration test modules

mod apply_scenarios;
mod cli_commands;
mod scene_documents;
