//! Diagnostics for the planner binary
//!
//! Events are written to stderr; stdout only ever carries rendered reports,
//! so `mioa recommend -vv --format json | jq` keeps working.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::app::config::AppConfig;

/// Optional fields attached to each log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogDetail {
    pub target: bool,
    pub thread_ids: bool,
    pub line_numbers: bool,
}

impl LogDetail {
    /// Module targets from -vv, thread ids and line numbers from -vvv
    pub fn for_verbosity(verbose: u8) -> Self {
        Self {
            target: verbose >= 2,
            thread_ids: verbose >= 3,
            line_numbers: verbose >= 3,
        }
    }
}

/// Install the global subscriber; call once per process
pub fn init_logging(config: &AppConfig) {
    let detail = LogDetail::for_verbosity(config.verbose);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level()))
        .with_writer(std::io::stderr)
        .with_target(detail.target)
        .with_thread_ids(detail.thread_ids)
        .with_line_number(detail.line_numbers)
        .init();

    debug!(
        "Planner logging at {} (working dir {})",
        config.log_level(),
        config.working_dir.display()
    );
    if let Some(path) = &config.config_path {
        debug!("Planner config requested: {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_grows_with_verbosity() {
        assert_eq!(
            LogDetail::for_verbosity(0),
            LogDetail {
                target: false,
                thread_ids: false,
                line_numbers: false
            }
        );
        assert!(LogDetail::for_verbosity(2).target);
        assert!(!LogDetail::for_verbosity(2).thread_ids);

        let full = LogDetail::for_verbosity(3);
        assert!(full.thread_ids && full.line_numbers);
    }
}
