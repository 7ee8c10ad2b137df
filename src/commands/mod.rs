//! Command implementations for the mlinstall CLI

pub mod completions;
pub mod install;
pub mod version;
