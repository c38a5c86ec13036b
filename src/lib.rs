//! Porter: Component Porting Between Scene Hierarchies
//!
//! Copies a fixed set of component types from one hierarchy of named nodes
//! to a structurally-matching second hierarchy, remapping reference fields
//! from source-node names to the corresponding destination nodes.

pub mod cli;
pub mod cloner;
pub mod config;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod porter;
pub mod scene;
