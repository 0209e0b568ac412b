//! Error handling utilities
//!
//! This module provides centralized error handling for the application.

use tracing::error;

use crate::error::Error;

/// Exit code for successful runs
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for environment or data failures
pub const EXIT_GENERAL_ERROR: i32 = 1;
/// Exit code for bad arguments or invalid user input
pub const EXIT_ARGUMENT_ERROR: i32 = 2;

/// Map an error to the process exit code
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(err) if err.is_user_error() => EXIT_ARGUMENT_ERROR,
        _ => EXIT_GENERAL_ERROR,
    }
}

/// Handle fatal errors and exit with appropriate status code
///
/// The error message is always shown; the cause chain is added when
/// `verbose >= 1`.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {}", error);

    eprintln!("Error: {error}");
    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    std::process::exit(exit_code_for(&error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_argument_errors() {
        let err = anyhow::Error::new(Error::Validation("missing assignee".into()));
        assert_eq!(exit_code_for(&err), EXIT_ARGUMENT_ERROR);

        let err = anyhow::Error::new(Error::NotFound("rec-phase-9".into()));
        assert_eq!(exit_code_for(&err), EXIT_ARGUMENT_ERROR);
    }

    #[test]
    fn test_other_errors_are_general_errors() {
        let err = anyhow::Error::new(Error::Config("bad toml".into()));
        assert_eq!(exit_code_for(&err), EXIT_GENERAL_ERROR);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code_for(&err), EXIT_GENERAL_ERROR);
        assert_ne!(EXIT_SUCCESS, EXIT_GENERAL_ERROR);
    }
}
