//! Rendering of command results
//!
//! Every command renders the same serializable value either as JSON, YAML or
//! a human-readable text layout.

use serde::Serialize;
use std::fmt::Write;

use crate::config::OutputFormat;
use crate::core::capacity::CapacityReport;
use crate::core::recommendation::{score_vm, PhaseRecommendationSummary, RecommendedPhase};
use crate::error::Result;
use crate::inventory::Vm;

/// Serialize `value` in the requested format, using `text` for plain output
pub fn render<T, F>(value: &T, format: OutputFormat, text: F) -> Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Text => text(value),
    })
}

/// A VM together with its individual priority score
#[derive(Debug, Clone, Serialize)]
pub struct ScoredVm<'a> {
    #[serde(flatten)]
    pub vm: &'a Vm,
    pub score: i64,
}

pub fn scored(vms: &[Vm]) -> Vec<ScoredVm<'_>> {
    vms.iter()
        .map(|vm| ScoredVm {
            vm,
            score: score_vm(vm),
        })
        .collect()
}

pub fn phases_text(phases: &[RecommendedPhase]) -> String {
    let mut out = String::new();
    if phases.is_empty() {
        out.push_str("No phases recommended: the inventory is empty.\n");
        return out;
    }

    let _ = writeln!(out, "Recommended migration phases ({})", phases.len());
    for (idx, phase) in phases.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}. {} [{}]", idx + 1, phase.name, phase.id);
        let _ = writeln!(
            out,
            "   Priority: {} | Complexity: {} | Duration: {} | VMs: {}",
            phase.priority,
            phase.complexity,
            phase.estimated_duration,
            phase.vms.len()
        );
        let _ = writeln!(out, "   {}", phase.reason);
        for note in &phase.recommendations {
            let _ = writeln!(out, "   - {note}");
        }
        let names: Vec<&str> = phase.vms.iter().map(|vm| vm.name.as_str()).collect();
        let _ = writeln!(out, "   Members: {}", names.join(", "));
    }
    out
}

pub fn summary_text(summary: &PhaseRecommendationSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total phases: {}", summary.total_phases);

    if !summary.recommended_order.is_empty() {
        let _ = writeln!(out, "\nRecommended order:");
        for line in &summary.recommended_order {
            let _ = writeln!(out, "  {line}");
        }
    }

    let _ = writeln!(out, "\nKey insights:");
    for insight in &summary.key_insights {
        let _ = writeln!(out, "  - {insight}");
    }
    out
}

pub fn inventory_text(vms: &[ScoredVm<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<6} {:<10} {:<22} {:<12} {:<4} {:>4} {:>7} {:>9} {:>6}",
        "ID", "NAME", "SERVICE", "REGION", "CAT", "CPU", "MEM(GB)", "DISK(GB)", "SCORE"
    );
    for entry in vms {
        let vm = entry.vm;
        let _ = writeln!(
            out,
            "{:<6} {:<10} {:<22} {:<12} {:<4} {:>4} {:>7} {:>9} {:>6}",
            vm.id,
            vm.name,
            vm.service_name,
            vm.region,
            vm.category,
            vm.cpu,
            vm.memory,
            vm.storage,
            entry.score
        );
    }
    let _ = writeln!(out, "\n{} VMs", vms.len());
    out
}

pub fn capacity_text(report: &CapacityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Capacity check for {} VMs in {}: {:?}",
        report.vm_count, report.region, report.overall
    );
    if report.used_fallback {
        let _ = writeln!(out, "(no datacenter matched the region; using default capacity)");
    }
    for resource in &report.resources {
        let _ = writeln!(
            out,
            "  {:<8} needed {} {unit}, available {} of {} {unit}, remaining {} {unit} ({}% used) - {:?}",
            resource.name,
            resource.needed,
            resource.available,
            resource.total,
            resource.remaining,
            resource.utilization_percent,
            resource.status,
            unit = resource.unit,
        );
    }
    if let Some(advisory) = report.advisory() {
        let _ = writeln!(out, "\n{advisory}");
    }
    out
}
