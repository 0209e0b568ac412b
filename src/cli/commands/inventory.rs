//! Inventory command implementation
//!
//! Lists the VMs that would be fed to the recommendation engine.

use anyhow::Result;

use super::CommandContext;
use crate::cli::args::InventoryArgs;
use crate::cli::output::{inventory_text, render, scored};
use crate::config::OutputFormat;

/// Run the inventory command
pub async fn run_inventory_command(
    ctx: &CommandContext,
    args: InventoryArgs,
    format: Option<OutputFormat>,
) -> Result<()> {
    let vms = ctx.load_inventory(&args).await?;
    let entries = scored(&vms);

    let rendered = render(&entries, ctx.format(format), |e| inventory_text(e))?;
    print!("{rendered}");
    Ok(())
}
