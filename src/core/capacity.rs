//! Phase capacity check against target datacenter resources
//!
//! Estimates what a phase of `n` VMs needs on the target platform and compares
//! it with the aggregated free capacity of the datacenters in a region.

use serde::{Deserialize, Serialize};

use crate::inventory::{Datacenter, ResourceQuota};

/// Average footprint assumed for every migrated VM
const CORES_PER_VM: f64 = 4.0;
const MEMORY_GB_PER_VM: f64 = 8.0;
const STORAGE_GB_PER_VM: f64 = 100.0;
const NETWORK_GBPS_PER_VM: f64 = 0.1;

/// Resource status, ordered from best to worst
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityStatus {
    Ready,
    Warning,
    Critical,
}

impl CapacityStatus {
    /// Classify the headroom left after placing `needed` into `available`
    pub fn classify(available: f64, needed: f64) -> Self {
        let remaining = available - needed;
        if remaining >= needed * 0.5 {
            CapacityStatus::Ready
        } else if remaining >= 0.0 {
            CapacityStatus::Warning
        } else {
            CapacityStatus::Critical
        }
    }

    pub fn advisory(&self) -> Option<&'static str> {
        match self {
            CapacityStatus::Ready => None,
            CapacityStatus::Warning => {
                Some("Limited capacity. Migration is possible but with minimal headroom.")
            }
            CapacityStatus::Critical => Some(
                "Insufficient capacity detected. Please reduce VM count or provision additional resources.",
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceNeeds {
    pub compute: f64,
    pub memory: f64,
    pub storage: f64,
    pub network: f64,
}

/// Estimated needs of a phase with `vm_count` VMs (cores, GB, TB, Gbps)
pub fn estimate_needs(vm_count: usize) -> ResourceNeeds {
    let n = vm_count as f64;
    ResourceNeeds {
        compute: n * CORES_PER_VM,
        memory: n * MEMORY_GB_PER_VM,
        storage: round1(n * STORAGE_GB_PER_VM / 1024.0),
        network: round1(n * NETWORK_GBPS_PER_VM),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Capacity {
    pub available: f64,
    pub total: f64,
}

impl Capacity {
    pub const fn new(available: f64, total: f64) -> Self {
        Self { available, total }
    }
}

/// Aggregated capacity of a region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionCapacity {
    pub compute: Capacity,
    pub memory: Capacity,
    pub storage: Capacity,
    pub network: Capacity,
}

/// Assumed capacity when no datacenter matches a region
pub const FALLBACK_CAPACITY: RegionCapacity = RegionCapacity {
    compute: Capacity::new(2400.0, 3200.0),
    memory: Capacity::new(4800.0, 6400.0),
    storage: Capacity::new(180.0, 250.0),
    network: Capacity::new(80.0, 100.0),
};

/// Sum the capacity of every datacenter whose country code equals `region`
pub fn region_capacity(region: &str, datacenters: &[Datacenter]) -> RegionCapacity {
    let matching: Vec<&Datacenter> = datacenters
        .iter()
        .filter(|dc| dc.country_code == region)
        .collect();

    if matching.is_empty() {
        return FALLBACK_CAPACITY;
    }

    RegionCapacity {
        compute: sum_quota(&matching, |dc| &dc.resources.compute),
        memory: sum_quota(&matching, |dc| &dc.resources.memory),
        storage: sum_quota(&matching, |dc| &dc.resources.storage),
        network: sum_quota(&matching, |dc| &dc.resources.network),
    }
}

fn sum_quota(datacenters: &[&Datacenter], pick: fn(&Datacenter) -> &ResourceQuota) -> Capacity {
    datacenters
        .iter()
        .fold(Capacity::new(0.0, 0.0), |acc, &dc| {
            let quota = pick(dc);
            Capacity::new(acc.available + quota.available, acc.total + quota.total)
        })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCheck {
    pub name: String,
    pub unit: String,
    pub available: f64,
    pub total: f64,
    pub needed: f64,
    pub remaining: f64,
    pub utilization_percent: u32,
    pub status: CapacityStatus,
}

impl ResourceCheck {
    fn new(name: &str, unit: &str, capacity: Capacity, needed: f64) -> Self {
        let utilization_percent = if capacity.total > 0.0 {
            ((capacity.total - capacity.available) / capacity.total * 100.0)
                .round()
                .max(0.0) as u32
        } else {
            0
        };

        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            available: capacity.available,
            total: capacity.total,
            needed,
            remaining: capacity.available - needed,
            utilization_percent,
            status: CapacityStatus::classify(capacity.available, needed),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityReport {
    pub region: String,
    pub vm_count: usize,
    pub used_fallback: bool,
    pub resources: Vec<ResourceCheck>,
    pub overall: CapacityStatus,
}

impl CapacityReport {
    pub fn advisory(&self) -> Option<&'static str> {
        self.overall.advisory()
    }
}

/// Check whether a region can absorb a phase of `vm_count` VMs
///
/// Returns `None` for an empty region name or an empty phase.
pub fn check_phase_capacity(
    region: &str,
    vm_count: usize,
    datacenters: &[Datacenter],
) -> Option<CapacityReport> {
    if region.is_empty() || vm_count == 0 {
        return None;
    }

    let needs = estimate_needs(vm_count);
    let capacity = region_capacity(region, datacenters);
    let used_fallback = !datacenters.iter().any(|dc| dc.country_code == region);

    let resources = vec![
        ResourceCheck::new("Compute", "cores", capacity.compute, needs.compute),
        ResourceCheck::new("Memory", "GB", capacity.memory, needs.memory),
        ResourceCheck::new("Storage", "TB", capacity.storage, needs.storage),
        ResourceCheck::new("Network", "Gbps", capacity.network, needs.network),
    ];

    let overall = if resources.iter().all(|r| r.status == CapacityStatus::Ready) {
        CapacityStatus::Ready
    } else if resources.iter().any(|r| r.status == CapacityStatus::Critical) {
        CapacityStatus::Critical
    } else {
        CapacityStatus::Warning
    };

    Some(CapacityReport {
        region: region.to_string(),
        vm_count,
        used_fallback,
        resources,
        overall,
    })
}
