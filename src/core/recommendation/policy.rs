//! Category policy table
//!
//! Each migration category carries a fixed scoring weight, priority,
//! complexity, rationale and list of operator notes. Phase-level priority and
//! complexity come exclusively from this table.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::inventory::Category;

/// Scheduling priority of a recommended phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Ranking weight, higher runs earlier
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected migration effort of a recommended phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Simple,
    Moderate,
    Complex,
}

impl Complexity {
    /// Ranking weight used as tie-break, simpler runs earlier
    pub fn weight(&self) -> u8 {
        match self {
            Complexity::Simple => 3,
            Complexity::Moderate => 2,
            Complexity::Complex => 1,
        }
    }

    /// Engineering hours budgeted per VM
    pub fn hours_per_vm(&self) -> u32 {
        match self {
            Complexity::Simple => 2,
            Complexity::Moderate => 4,
            Complexity::Complex => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Simple => "Simple",
            Complexity::Moderate => "Moderate",
            Complexity::Complex => "Complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static policy for one migration category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPolicy {
    pub category: Category,
    /// Bonus added to a VM's individual score
    pub weight: i64,
    pub priority: Priority,
    pub complexity: Complexity,
    pub reason: &'static str,
    pub notes: &'static [&'static str],
}

static POLICIES: [CategoryPolicy; 5] = [
    CategoryPolicy {
        category: Category::C1,
        weight: 50,
        priority: Priority::High,
        complexity: Complexity::Simple,
        reason: "Direct migration with minimal complexity. No clusters, RDM, or appliances. Ideal for initial migration phase.",
        notes: &[
            "Start with smallest VMs to build confidence",
            "Use this phase to validate migration process",
            "Low risk, quick wins for stakeholder confidence",
        ],
    },
    CategoryPolicy {
        category: Category::C2,
        weight: 40,
        priority: Priority::High,
        complexity: Complexity::Moderate,
        reason: "Storage offloading required for large VMs. Good candidate after C1 success.",
        notes: &[
            "Ensure adequate storage capacity in target",
            "Plan for storage optimization post-migration",
            "Monitor storage performance during migration",
        ],
    },
    CategoryPolicy {
        category: Category::C3,
        weight: 30,
        priority: Priority::Medium,
        complexity: Complexity::Moderate,
        reason: "Appliance VMs require optimization. Should be tackled after simpler migrations.",
        notes: &[
            "Review appliance configurations before migration",
            "Plan for appliance reconfiguration in OpenShift",
            "Allocate additional time for testing",
        ],
    },
    CategoryPolicy {
        category: Category::C4,
        weight: 20,
        priority: Priority::Medium,
        complexity: Complexity::Complex,
        reason: "Large appliance VMs require both storage offloading and optimization.",
        notes: &[
            "Conduct thorough pre-migration assessment",
            "Ensure sufficient resources in target environment",
            "Plan for extended cutover window",
        ],
    },
    CategoryPolicy {
        category: Category::C5,
        weight: 10,
        priority: Priority::Low,
        complexity: Complexity::Complex,
        reason: "RDM (Raw Device Mapping) requires special handling and compressed migration.",
        notes: &[
            "RDM requires careful planning and conversion",
            "Consider this phase only after team has migration experience",
            "Allocate buffer time for troubleshooting",
        ],
    },
];

/// Look up the policy for a known category
pub fn policy_for(category: Category) -> &'static CategoryPolicy {
    // Table order mirrors Category::ALL
    &POLICIES[category as usize]
}

/// Look up the policy for a raw category code; unknown codes have no policy
pub fn policy_for_code(code: &str) -> Option<&'static CategoryPolicy> {
    Category::parse(code).map(policy_for)
}
