//! Aggregate insights over a recommendation run

use serde::{Deserialize, Serialize};

use super::policy::Complexity;
use super::RecommendedPhase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseRecommendationSummary {
    pub total_phases: usize,
    /// "{n}. {name} ({priority} Priority)" per ranked phase
    pub recommended_order: Vec<String>,
    pub key_insights: Vec<String>,
}

/// Summarize an already-ranked phase list
///
/// `total_vms` is the size of the inventory the phases were generated from,
/// which can exceed the number of VMs placed in phases when some carry an
/// unknown category.
pub fn summarize_phases(
    phases: &[RecommendedPhase],
    total_vms: usize,
) -> PhaseRecommendationSummary {
    let recommended_order = phases
        .iter()
        .enumerate()
        .map(|(idx, phase)| {
            format!("{}. {} ({} Priority)", idx + 1, phase.name, phase.priority)
        })
        .collect();

    let c1_phases = phases.iter().filter(|p| p.category == "C1").count();
    let complex_phases = phases
        .iter()
        .filter(|p| p.complexity == Complexity::Complex)
        .count();
    let total_days: u32 = phases.iter().map(|p| p.estimated_days()).sum();

    PhaseRecommendationSummary {
        total_phases: phases.len(),
        recommended_order,
        key_insights: vec![
            format!("Total VMs to migrate: {total_vms}"),
            format!("Recommended to start with {c1_phases} C1 phases (Direct Migration)"),
            format!("{complex_phases} complex phases identified - schedule these last"),
            format!("Estimated total duration: {total_days} days if executed sequentially"),
        ],
    }
}

/// Leading integer of a duration label such as "3 days"; 0 when absent
pub fn parse_duration_days(label: &str) -> u32 {
    let digits: String = label
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
