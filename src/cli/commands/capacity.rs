//! Capacity command implementation

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, warn};

use super::CommandContext;
use crate::cli::output::{capacity_text, render};
use crate::config::OutputFormat;
use crate::core::capacity::check_phase_capacity;
use crate::inventory::datacenter::load_datacenters;
use crate::inventory::sample_datacenters;

/// Run the capacity command
pub async fn run_capacity_command(
    ctx: &CommandContext,
    region: &str,
    vm_count: usize,
    datacenters: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<()> {
    let datacenters = match datacenters.or_else(|| ctx.planner.datacenters.clone()) {
        Some(path) => load_datacenters(&path)
            .with_context(|| format!("Failed to load datacenters from {}", path.display()))?,
        None => {
            debug!("No datacenter file configured, using built-in datacenters");
            sample_datacenters()
        }
    };

    match check_phase_capacity(region, vm_count, &datacenters) {
        Some(report) => {
            if report.used_fallback {
                warn!("No datacenter matches {}, using default capacity", region);
            }
            let rendered = render(&report, ctx.format(format), capacity_text)?;
            print!("{rendered}");
        }
        None => println!("Nothing to check: the phase has no VMs or no region."),
    }
    Ok(())
}
