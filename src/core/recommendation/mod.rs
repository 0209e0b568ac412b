//! Migration phase recommendation engine
//!
//! Partitions a VM inventory into suggested migration phases. The pipeline is
//! a chain of pure transformations:
//!
//! 1. score every VM ([`scoring`])
//! 2. group by region, then category ([`grouping`])
//! 3. synthesize one phase per non-empty (region, category) pair ([`synthesis`])
//! 4. rank phases globally ([`ranking`])
//! 5. derive aggregate insights ([`summary`])
//!
//! Running the pipeline twice on the same input yields identical output,
//! including the `rec-phase-N` ids, which restart at 1 on every run.

pub mod grouping;
pub mod policy;
pub mod ranking;
pub mod scoring;
pub mod summary;
pub mod synthesis;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inventory::Vm;

pub use grouping::{group_by_region_then_category, CategoryBucket, RegionGroup};
pub use policy::{policy_for, policy_for_code, CategoryPolicy, Complexity, Priority};
pub use ranking::rank_phases;
pub use scoring::score_vm;
pub use summary::{parse_duration_days, summarize_phases, PhaseRecommendationSummary};
pub use synthesis::{synthesize_phases, EffortEstimate};

/// A proposed batch of VMs sharing region and category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedPhase {
    /// Run-scoped id, `rec-phase-N`
    pub id: String,
    pub name: String,
    pub priority: Priority,
    pub reason: String,
    /// Never empty; ordered by descending VM score
    pub vms: Vec<Vm>,
    pub region: String,
    pub category: String,
    pub estimated_duration: String,
    pub complexity: Complexity,
    pub recommendations: Vec<String>,
}

impl RecommendedPhase {
    /// Day count read back from `estimated_duration`
    pub fn estimated_days(&self) -> u32 {
        parse_duration_days(&self.estimated_duration)
    }
}

/// Generate ranked phase recommendations for an inventory
pub fn generate_recommended_phases(vms: &[Vm]) -> Vec<RecommendedPhase> {
    let groups = group_by_region_then_category(vms);
    let phases = synthesize_phases(&groups);
    debug!(
        "Generated {} phases from {} VMs across {} regions",
        phases.len(),
        vms.len(),
        groups.len()
    );
    rank_phases(phases)
}

/// Summarize the recommendations for an inventory
///
/// Regenerates the phases rather than reusing an earlier run so that the
/// summary always agrees with a fresh [`generate_recommended_phases`] call.
/// Use [`summarize_phases`] to avoid the extra work when the ranked phases are
/// already at hand.
pub fn phase_recommendation_summary(vms: &[Vm]) -> PhaseRecommendationSummary {
    let phases = generate_recommended_phases(vms);
    summarize_phases(&phases, vms.len())
}
