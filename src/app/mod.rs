//! Application module
//!
//! This module contains application-level functionality including:
//! - Verbosity and working directory settings
//! - Logging setup
//! - Fatal error reporting

pub mod config;
pub mod error_handling;
pub mod logging;

// Re-export main application functions
pub use config::AppConfig;
pub use error_handling::{exit_code_for, handle_fatal_error};
pub use logging::init_logging;
