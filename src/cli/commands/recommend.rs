//! Recommend command implementation
//!
//! Runs the recommendation engine over the selected inventory and prints the
//! ranked phases.

use anyhow::Result;
use tracing::info;

use super::CommandContext;
use crate::cli::args::InventoryArgs;
use crate::cli::output::{phases_text, render};
use crate::config::OutputFormat;
use crate::core::recommendation::generate_recommended_phases;

/// Run the recommend command
pub async fn run_recommend_command(
    ctx: &CommandContext,
    args: InventoryArgs,
    format: Option<OutputFormat>,
) -> Result<()> {
    let vms = ctx.load_inventory(&args).await?;
    let phases = generate_recommended_phases(&vms);
    info!("Recommended {} phases for {} VMs", phases.len(), vms.len());

    let rendered = render(&phases, ctx.format(format), |p| phases_text(p))?;
    print!("{rendered}");
    Ok(())
}
