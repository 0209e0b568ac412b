//! CLI command handlers
//!
//! This module contains all CLI-related functionality including:
//! - Argument parsing structures
//! - Command implementations
//! - Output rendering

pub mod args;
pub mod commands;
pub mod output;
pub mod router;

// Re-export the main CLI structures for convenience
pub use args::{Cli, Commands, InventoryArgs};
pub use router::execute_command;
