use super::{get_global_config_dir, PlannerConfig, LOCAL_CONFIG_FILE};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Locates and reads the planner configuration
pub struct ConfigLoader {
    working_dir: PathBuf,
    global_dir: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            global_dir: get_global_config_dir(),
        }
    }

    /// Override the per-user config directory
    pub fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    /// Load configuration, then apply environment overrides
    ///
    /// An explicit path must exist. Otherwise `./mioa.toml` is tried, then the
    /// per-user `config.toml`, then built-in defaults.
    pub fn load(&self, explicit: Option<&Path>) -> Result<PlannerConfig> {
        let mut config = self.load_file(explicit)?;
        config.merge_env_vars();
        Ok(config)
    }

    /// Load configuration without looking at the environment
    pub fn load_file(&self, explicit: Option<&Path>) -> Result<PlannerConfig> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return read_config(path);
        }

        for candidate in self.candidates() {
            if candidate.exists() {
                return read_config(&candidate);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(PlannerConfig::default())
    }

    fn candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.working_dir.join(LOCAL_CONFIG_FILE)];
        if let Some(global_dir) = &self.global_dir {
            candidates.push(global_dir.join("config.toml"));
        }
        candidates
    }
}

fn read_config(path: &Path) -> Result<PlannerConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content).map_err(|e| {
        Error::Config(format!("Invalid configuration in {}: {}", path.display(), e))
    })?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}
