//! Core primitives for the ddlgen schema exporter.
//!
//! This crate provides the file-write and append primitives shared by the
//! generation and merge layers, plus the fundamental script types.

mod file;
mod script;
mod utils;

// File operations
pub use file::{append_block, ensure_parent_dirs, write_script};
// Fundamental types
pub use script::ScriptKind;
// String utilities
pub use utils::to_snake_case;
