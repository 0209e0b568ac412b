//! Command implementation modules
//!
//! This module contains the implementation of each CLI command.
//! Each command is implemented as a separate module for better organization.

pub mod accept;
pub mod capacity;
pub mod inventory;
pub mod recommend;
pub mod summary;

// Re-export command execution functions
pub use accept::{run_accept_command, AcceptParams};
pub use capacity::run_capacity_command;
pub use inventory::run_inventory_command;
pub use recommend::run_recommend_command;
pub use summary::run_summary_command;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::args::InventoryArgs;
use crate::config::{OutputFormat, PlannerConfig};
use crate::inventory::{
    filter_by_region, FileInventoryProvider, InventoryProvider, MockInventoryProvider, Vm,
};

/// Settings shared by every command
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub planner: PlannerConfig,
}

impl CommandContext {
    pub fn new(planner: PlannerConfig) -> Self {
        Self { planner }
    }

    /// Explicit format flag, else the configured default
    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.planner.format)
    }

    /// Provider for the inventory selected by flags and configuration
    pub fn inventory_provider(&self, args: &InventoryArgs) -> Box<dyn InventoryProvider> {
        match args.inventory.as_ref().or(self.planner.inventory.as_ref()) {
            Some(path) => Box::new(FileInventoryProvider::new(path)),
            None => Box::new(MockInventoryProvider::new(self.planner.mock_delay())),
        }
    }

    /// Fetch the inventory and apply the region filter
    pub async fn load_inventory(&self, args: &InventoryArgs) -> Result<Vec<Vm>> {
        let provider = self.inventory_provider(args);
        info!("Loading inventory from {}", provider.describe());

        let vms = provider
            .fetch()
            .await
            .with_context(|| format!("Failed to load inventory from {}", provider.describe()))?;

        Ok(match &args.region {
            Some(region) => {
                let filtered = filter_by_region(&vms, region);
                debug!("{} of {} VMs are in region {}", filtered.len(), vms.len(), region);
                filtered
            }
            None => vms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn context() -> CommandContext {
        CommandContext::new(PlannerConfig {
            mock_delay_ms: 0,
            ..PlannerConfig::default()
        })
    }

    #[test]
    fn test_format_flag_overrides_config() {
        let ctx = context();
        assert_eq!(ctx.format(None), OutputFormat::Text);
        assert_eq!(ctx.format(Some(OutputFormat::Yaml)), OutputFormat::Yaml);
    }

    #[test]
    fn test_provider_selection() {
        let ctx = context();
        let sample = ctx.inventory_provider(&InventoryArgs::default());
        assert!(sample.describe().starts_with("sample inventory"));

        let args = InventoryArgs {
            inventory: Some(PathBuf::from("vms.json")),
            region: None,
        };
        assert_eq!(ctx.inventory_provider(&args).describe(), "vms.json");
    }

    #[tokio::test]
    async fn test_load_inventory_filters_region() {
        let ctx = context();
        let args = InventoryArgs {
            inventory: None,
            region: Some("APAC".to_string()),
        };
        let vms = ctx.load_inventory(&args).await.unwrap();
        assert_eq!(vms.len(), 9);
        assert!(vms.iter().all(|vm| vm.region == "APAC"));
    }
}
