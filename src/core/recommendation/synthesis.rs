//! Build recommended phases from grouped VMs

use tracing::trace;

use super::grouping::RegionGroup;
use super::policy::{policy_for, CategoryPolicy};
use super::RecommendedPhase;
use crate::inventory::{Category, Vm};

const WORKDAY_HOURS: u32 = 8;

/// Effort estimate for a group of VMs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffortEstimate {
    pub total_hours: u32,
    pub days: u32,
}

impl EffortEstimate {
    /// Hours saturate at `u32::MAX` for inventories too large to count
    pub fn new(vm_count: usize, hours_per_vm: u32) -> Self {
        let total_hours = u32::try_from(vm_count)
            .unwrap_or(u32::MAX)
            .saturating_mul(hours_per_vm);
        Self {
            total_hours,
            days: total_hours.div_ceil(WORKDAY_HOURS),
        }
    }

    /// Human-readable duration such as "1 day" or "3 days"
    pub fn duration_label(&self) -> String {
        format_days(self.days)
    }
}

pub fn format_days(days: u32) -> String {
    format!("{} day{}", days, if days != 1 { "s" } else { "" })
}

/// Turn region groups into phases, in generation order
///
/// Regions keep their first-seen order and categories follow the fixed
/// C1..C5 order. Buckets with an unknown category code produce no phase. Ids
/// are numbered from 1 across the whole run.
pub fn synthesize_phases(groups: &[RegionGroup<'_>]) -> Vec<RecommendedPhase> {
    groups
        .iter()
        .flat_map(|group| {
            Category::ALL.into_iter().filter_map(move |category| {
                group
                    .bucket(category)
                    .filter(|bucket| !bucket.vms.is_empty())
                    .map(|bucket| (group.region, category, &bucket.vms))
            })
        })
        .enumerate()
        .map(|(idx, (region, category, vms))| {
            build_phase(idx + 1, region, policy_for(category), vms)
        })
        .collect()
}

fn build_phase(
    sequence: usize,
    region: &str,
    policy: &CategoryPolicy,
    vms: &[&Vm],
) -> RecommendedPhase {
    let estimate = EffortEstimate::new(vms.len(), policy.complexity.hours_per_vm());

    let mut recommendations: Vec<String> =
        policy.notes.iter().map(|note| note.to_string()).collect();
    recommendations.push(format!("Total VMs: {}", vms.len()));
    recommendations.push(format!("Estimated effort: {} hours", estimate.total_hours));

    let phase = RecommendedPhase {
        id: format!("rec-phase-{sequence}"),
        name: format!("{} - Category {} Migration", region, policy.category),
        priority: policy.priority,
        reason: policy.reason.to_string(),
        vms: vms.iter().map(|vm| (*vm).clone()).collect(),
        region: region.to_string(),
        category: policy.category.code().to_string(),
        estimated_duration: estimate.duration_label(),
        complexity: policy.complexity,
        recommendations,
    };

    trace!(
        "Synthesized {} with {} VMs ({})",
        phase.id,
        phase.vms.len(),
        phase.estimated_duration
    );
    phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recommendation::grouping::group_by_region_then_category;
    use crate::core::recommendation::policy::{Complexity, Priority};

    fn vm(id: &str, region: &str, category: &str) -> Vm {
        Vm::new(id, format!("VM{id}"), "svc", region, category, 2, 8, 300)
    }

    #[test]
    fn test_effort_rounding() {
        let estimate = EffortEstimate::new(5, 2);
        assert_eq!(estimate.total_hours, 10);
        assert_eq!(estimate.days, 2);
        assert_eq!(estimate.duration_label(), "2 days");

        assert_eq!(EffortEstimate::new(4, 2).duration_label(), "1 day");
        assert_eq!(EffortEstimate::new(1, 8).duration_label(), "1 day");
        assert_eq!(EffortEstimate::new(3, 8).duration_label(), "3 days");
    }

    #[test]
    fn test_effort_saturates_on_huge_counts() {
        let estimate = EffortEstimate::new(1_000_000_000, 8);
        assert_eq!(estimate.total_hours, u32::MAX);
        assert_eq!(estimate.days, u32::MAX.div_ceil(8));

        let estimate = EffortEstimate::new(usize::MAX, 2);
        assert_eq!(estimate.total_hours, u32::MAX);
    }

    #[test]
    fn test_format_days_plural() {
        assert_eq!(format_days(0), "0 days");
        assert_eq!(format_days(1), "1 day");
        assert_eq!(format_days(12), "12 days");
    }

    #[test]
    fn test_categories_follow_fixed_order() {
        let vms = vec![
            vm("1", "US-East", "C3"),
            vm("2", "US-East", "C1"),
            vm("3", "US-East", "C2"),
        ];
        let groups = group_by_region_then_category(&vms);
        let phases = synthesize_phases(&groups);
        let categories: Vec<_> = phases.iter().map(|p| p.category.as_str()).collect();
        assert_eq!(categories, vec!["C1", "C2", "C3"]);
    }

    #[test]
    fn test_ids_increment_across_regions() {
        let vms = vec![
            vm("1", "US-East", "C1"),
            vm("2", "APAC", "C5"),
            vm("3", "US-East", "C4"),
        ];
        let groups = group_by_region_then_category(&vms);
        let phases = synthesize_phases(&groups);
        let ids: Vec<_> = phases.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["rec-phase-1", "rec-phase-2", "rec-phase-3"]);
        assert_eq!(phases[1].name, "US-East - Category C4 Migration");
        assert_eq!(phases[2].name, "APAC - Category C5 Migration");
    }

    #[test]
    fn test_phase_fields_from_policy() {
        let vms = vec![vm("1", "APAC", "C5")];
        let groups = group_by_region_then_category(&vms);
        let phase = &synthesize_phases(&groups)[0];

        assert_eq!(phase.priority, Priority::Low);
        assert_eq!(phase.complexity, Complexity::Complex);
        assert_eq!(phase.region, "APAC");
        assert_eq!(phase.estimated_duration, "1 day");
        assert_eq!(phase.recommendations.len(), 5);
        assert_eq!(phase.recommendations[3], "Total VMs: 1");
        assert_eq!(phase.recommendations[4], "Estimated effort: 8 hours");
    }

    #[test]
    fn test_unknown_category_is_skipped() {
        let vms = vec![vm("1", "APAC", "C7"), vm("2", "APAC", "C2")];
        let groups = group_by_region_then_category(&vms);
        let phases = synthesize_phases(&groups);
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].id, "rec-phase-1");
        assert_eq!(phases[0].category, "C2");
    }
}
