use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub mod loader;

pub use loader::ConfigLoader;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "mioa.toml";

/// Get the per-user configuration directory
pub fn get_global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "mioa", "mioa").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Rendering format for command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Inventory file; the built-in sample inventory is used when unset
    pub inventory: Option<PathBuf>,
    /// Datacenter capacity file for capacity checks
    pub datacenters: Option<PathBuf>,
    pub format: OutputFormat,
    /// Simulated latency of the sample inventory provider
    pub mock_delay_ms: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            inventory: None,
            datacenters: None,
            format: OutputFormat::Text,
            mock_delay_ms: 1000,
        }
    }
}

impl PlannerConfig {
    pub fn mock_delay(&self) -> Duration {
        Duration::from_millis(self.mock_delay_ms)
    }

    /// Apply `MIOA_*` environment overrides
    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(inventory) = lookup("MIOA_INVENTORY") {
            self.inventory = Some(PathBuf::from(inventory));
        }

        if let Some(datacenters) = lookup("MIOA_DATACENTERS") {
            self.datacenters = Some(PathBuf::from(datacenters));
        }

        if let Some(format) = lookup("MIOA_FORMAT") {
            match format.parse() {
                Ok(format) => self.format = format,
                Err(e) => tracing::warn!("Ignoring MIOA_FORMAT: {}", e),
            }
        }

        if let Some(delay) = lookup("MIOA_MOCK_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => self.mock_delay_ms = ms,
                Err(e) => tracing::warn!("Ignoring MIOA_MOCK_DELAY_MS: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert!(config.inventory.is_none());
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.mock_delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: PlannerConfig = toml::from_str(
            r#"
            inventory = "vms.json"
            format = "yaml"
            "#,
        )
        .unwrap();
        assert_eq!(config.inventory, Some(PathBuf::from("vms.json")));
        assert_eq!(config.format, OutputFormat::Yaml);
        assert_eq!(config.mock_delay_ms, 1000);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: std::result::Result<PlannerConfig, _> = toml::from_str("inventroy = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_vars() {
        let vars: HashMap<&str, &str> = [
            ("MIOA_INVENTORY", "/data/vms.yaml"),
            ("MIOA_FORMAT", "JSON"),
            ("MIOA_MOCK_DELAY_MS", "0"),
        ]
        .into_iter()
        .collect();

        let mut config = PlannerConfig::default();
        config.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.inventory, Some(PathBuf::from("/data/vms.yaml")));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.mock_delay_ms, 0);
        assert!(config.datacenters.is_none());
    }

    #[test]
    fn test_merge_vars_ignores_bad_values() {
        let mut config = PlannerConfig::default();
        config.merge_vars(|key| match key {
            "MIOA_FORMAT" => Some("xml".to_string()),
            "MIOA_MOCK_DELAY_MS" => Some("soon".to_string()),
            _ => None,
        });
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("yml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
