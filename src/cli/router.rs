//! Command routing and execution
//!
//! This module handles routing CLI commands to their respective implementations.

use crate::app::AppConfig;
use crate::cli::args::{Commands, InventoryArgs};
use crate::cli::commands::*;
use crate::config::ConfigLoader;
use anyhow::Result;

/// Execute a CLI command based on the parsed arguments
pub async fn execute_command(command: Option<Commands>, app: &AppConfig) -> Result<()> {
    let planner = ConfigLoader::new(&app.working_dir).load(app.config_path.as_deref())?;
    let ctx = CommandContext::new(planner);

    match command {
        Some(Commands::Recommend { inventory, format }) => {
            run_recommend_command(&ctx, inventory, format).await
        }
        Some(Commands::Summary { inventory, format }) => {
            run_summary_command(&ctx, inventory, format).await
        }
        Some(Commands::Inventory { inventory, format }) => {
            run_inventory_command(&ctx, inventory, format).await
        }
        Some(Commands::Capacity {
            region,
            vms,
            datacenters,
            format,
        }) => run_capacity_command(&ctx, &region, vms, datacenters, format).await,
        Some(Commands::Accept {
            id,
            change_request,
            assigned_to,
            name,
            existing,
            inventory,
            format,
        }) => {
            run_accept_command(
                &ctx,
                AcceptParams {
                    id,
                    change_request,
                    assigned_to,
                    name,
                    existing,
                },
                inventory,
                format,
            )
            .await
        }
        None => {
            // Default to recommend with configured values
            run_recommend_command(&ctx, InventoryArgs::default(), None).await
        }
    }
}
