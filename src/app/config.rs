//! Application configuration
//!
//! Process-wide settings derived from the command line, as opposed to the
//! planner settings read from `mioa.toml`.

use anyhow::Result;
use std::path::PathBuf;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Working directory used to look up `mioa.toml`
    pub working_dir: PathBuf,
    /// Explicit planner config file from `--config`
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(verbose: u8) -> Result<Self> {
        let working_dir = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to get current directory: {}", e))?;

        Ok(Self {
            verbose,
            working_dir,
            config_path: None,
        })
    }

    /// Set the working directory
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,tokio=debug",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            working_dir: PathBuf::from("."),
            config_path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_by_verbosity() {
        let levels: Vec<_> = (0..4)
            .map(|verbose| AppConfig { verbose, ..AppConfig::default() }.log_level())
            .collect();
        assert_eq!(levels, vec!["info", "debug", "trace", "trace,tokio=debug"]);
    }

    #[test]
    fn test_builders() {
        let config = AppConfig::default()
            .with_working_dir(PathBuf::from("/tmp"))
            .with_config_path(Some(PathBuf::from("mioa.toml")));
        assert_eq!(config.working_dir, PathBuf::from("/tmp"));
        assert_eq!(config.config_path, Some(PathBuf::from("mioa.toml")));
    }
}
