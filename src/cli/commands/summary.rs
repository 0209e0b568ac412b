//! Summary command implementation

use anyhow::Result;

use super::CommandContext;
use crate::cli::args::InventoryArgs;
use crate::cli::output::{render, summary_text};
use crate::config::OutputFormat;
use crate::core::recommendation::phase_recommendation_summary;

/// Run the summary command
pub async fn run_summary_command(
    ctx: &CommandContext,
    args: InventoryArgs,
    format: Option<OutputFormat>,
) -> Result<()> {
    let vms = ctx.load_inventory(&args).await?;
    let summary = phase_recommendation_summary(&vms);

    let rendered = render(&summary, ctx.format(format), summary_text)?;
    print!("{rendered}");
    Ok(())
}
