//! Accept command implementation
//!
//! Turns one recommendation of the current run into a planned phase record.

use anyhow::Result;
use tracing::info;

use super::CommandContext;
use crate::cli::args::InventoryArgs;
use crate::cli::output::render;
use crate::config::OutputFormat;
use crate::core::phase::PhaseDraft;
use crate::core::recommendation::generate_recommended_phases;
use crate::error::Error;

/// Operator input completing the phase form
#[derive(Debug, Clone)]
pub struct AcceptParams {
    pub id: String,
    pub change_request: String,
    pub assigned_to: String,
    pub name: Option<String>,
    pub existing: usize,
}

/// Run the accept command
///
/// Recommendation ids are only stable within one run, so the phases are
/// regenerated from the same inventory and looked up by id.
pub async fn run_accept_command(
    ctx: &CommandContext,
    params: AcceptParams,
    args: InventoryArgs,
    format: Option<OutputFormat>,
) -> Result<()> {
    let vms = ctx.load_inventory(&args).await?;
    let phases = generate_recommended_phases(&vms);

    let recommendation = phases
        .iter()
        .find(|phase| phase.id == params.id)
        .ok_or_else(|| Error::NotFound(format!("Recommendation '{}'", params.id)))?;

    let mut draft = PhaseDraft::from_recommendation(recommendation)
        .with_change_request(params.change_request)
        .with_assignee(params.assigned_to);
    if let Some(name) = params.name {
        draft = draft.with_name(name);
    }

    let phase = draft.into_phase(params.existing, chrono::Local::now().date_naive())?;
    info!("Accepted {} as phase {}", recommendation.id, phase.id);

    let format = format.unwrap_or(OutputFormat::Json);
    let rendered = render(&phase, format, |p| {
        format!(
            "Phase {} created: {} ({} VMs, {} / {}, CR {}, assigned to {})\n",
            p.id, p.name, p.vm_count, p.region, p.category, p.change_request, p.assigned_to
        )
    })?;
    println!("{}", rendered.trim_end());
    Ok(())
}
