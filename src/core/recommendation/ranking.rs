//! Global execution order of recommended phases

use std::cmp::Reverse;

use super::RecommendedPhase;

/// Sort phases by priority, then by simplicity, both descending
///
/// The sort is stable: phases that tie keep their generation order.
pub fn rank_phases(mut phases: Vec<RecommendedPhase>) -> Vec<RecommendedPhase> {
    phases.sort_by_key(|phase| {
        (
            Reverse(phase.priority.weight()),
            Reverse(phase.complexity.weight()),
        )
    });
    phases
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::recommendation::policy::{Complexity, Priority};

    fn phase(id: &str, priority: Priority, complexity: Complexity) -> RecommendedPhase {
        RecommendedPhase {
            id: id.to_string(),
            name: id.to_string(),
            priority,
            reason: String::new(),
            vms: Vec::new(),
            region: "R".to_string(),
            category: "C1".to_string(),
            estimated_duration: "1 day".to_string(),
            complexity,
            recommendations: Vec::new(),
        }
    }

    fn ids(phases: &[RecommendedPhase]) -> Vec<&str> {
        phases.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_priority_dominates() {
        let ranked = rank_phases(vec![
            phase("low", Priority::Low, Complexity::Simple),
            phase("high", Priority::High, Complexity::Complex),
            phase("medium", Priority::Medium, Complexity::Simple),
        ]);
        assert_eq!(ids(&ranked), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_complexity_breaks_ties() {
        let ranked = rank_phases(vec![
            phase("complex", Priority::Medium, Complexity::Complex),
            phase("moderate", Priority::Medium, Complexity::Moderate),
        ]);
        assert_eq!(ids(&ranked), vec!["moderate", "complex"]);
    }

    #[test]
    fn test_full_ties_are_stable() {
        let ranked = rank_phases(vec![
            phase("a", Priority::High, Complexity::Simple),
            phase("b", Priority::High, Complexity::Moderate),
            phase("c", Priority::High, Complexity::Simple),
        ]);
        assert_eq!(ids(&ranked), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_empty() {
        assert!(rank_phases(Vec::new()).is_empty());
    }
}
