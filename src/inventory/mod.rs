//! VM inventory model and providers
//!
//! The inventory is the sole input of the recommendation engine. Records are
//! read-only values; the engine copies them into phases but never mutates them.

pub mod datacenter;
pub mod provider;
pub mod sample;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use datacenter::{Datacenter, OpenShiftCluster, ResourceQuota, SiteStatus};
pub use provider::{FileInventoryProvider, InventoryProvider, MockInventoryProvider};
pub use sample::{sample_datacenters, sample_inventory};

/// Migration category taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    C1,
    C2,
    C3,
    C4,
    C5,
}

impl Category {
    /// Fixed synthesis order, simplest first
    pub const ALL: [Category; 5] = [
        Category::C1,
        Category::C2,
        Category::C3,
        Category::C4,
        Category::C5,
    ];

    /// Parse a category code. Matching is exact and case-sensitive.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "C1" => Some(Category::C1),
            "C2" => Some(Category::C2),
            "C3" => Some(Category::C3),
            "C4" => Some(Category::C4),
            "C5" => Some(Category::C5),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Category::C1 => "C1",
            Category::C2 => "C2",
            Category::C3 => "C3",
            Category::C4 => "C4",
            Category::C5 => "C5",
        }
    }

    /// Migration strategy associated with the category
    pub fn migration_type(&self) -> &'static str {
        match self {
            Category::C1 => "Direct",
            Category::C2 => "Storage Offloading",
            Category::C3 | Category::C4 => "Optimization",
            Category::C5 => "Direct With Compressed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A virtual machine scheduled for migration
///
/// `category` keeps the raw code from the source data so that unknown codes
/// can flow through the engine instead of being rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vm {
    pub id: String,
    pub name: String,
    pub service_name: String,
    pub region: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub datacenter: String,
    pub category: String,
    pub cpu: f64,
    /// Memory size in GB
    pub memory: f64,
    /// Storage size in GB
    pub storage: f64,
    #[serde(default = "default_phase")]
    pub phase: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub os: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_scheduled_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_patch_discovered_at: Option<String>,
}

fn default_phase() -> String {
    "-".to_string()
}

fn default_status() -> String {
    "Active".to_string()
}

impl Vm {
    /// Build a VM with the fields the engine reads; display-only fields get defaults
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        service_name: impl Into<String>,
        region: impl Into<String>,
        category: impl Into<String>,
        cpu: impl Into<f64>,
        memory: impl Into<f64>,
        storage: impl Into<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            service_name: service_name.into(),
            region: region.into(),
            country: String::new(),
            datacenter: String::new(),
            category: category.into(),
            cpu: cpu.into(),
            memory: memory.into(),
            storage: storage.into(),
            phase: default_phase(),
            status: default_status(),
            os: String::new(),
            change_request_id: None,
            patch_scheduled_at: None,
            last_patch_discovered_at: None,
        }
    }

    pub fn category_code(&self) -> Option<Category> {
        Category::parse(&self.category)
    }
}

/// Keep only the VMs that belong to `region`
pub fn filter_by_region(vms: &[Vm], region: &str) -> Vec<Vm> {
    vms.iter().filter(|vm| vm.region == region).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_exact() {
        assert_eq!(Category::parse("C1"), Some(Category::C1));
        assert_eq!(Category::parse("C5"), Some(Category::C5));
        assert_eq!(Category::parse("c1"), None);
        assert_eq!(Category::parse("C6"), None);
        assert_eq!(Category::parse(""), None);
    }

    #[test]
    fn test_vm_deserializes_with_defaults() {
        let json = r#"{
            "id": "1",
            "name": "GB00001",
            "serviceName": "Payment Service",
            "region": "US-East",
            "category": "C1",
            "cpu": 4,
            "memory": 8,
            "storage": 250
        }"#;

        let vm: Vm = serde_json::from_str(json).unwrap();
        assert_eq!(vm.service_name, "Payment Service");
        assert_eq!(vm.phase, "-");
        assert_eq!(vm.status, "Active");
        assert!(vm.change_request_id.is_none());
        assert_eq!(vm.category_code(), Some(Category::C1));
    }

    #[test]
    fn test_vm_accepts_negative_sizes() {
        let json = r#"{"id":"x","name":"n","serviceName":"s","region":"R",
            "category":"C9","cpu":-1,"memory":-8,"storage":-10}"#;
        let vm: Vm = serde_json::from_str(json).unwrap();
        assert_eq!(vm.memory, -8.0);
        assert_eq!(vm.category_code(), None);
    }

    #[test]
    fn test_vm_accepts_fractional_sizes() {
        let json = r#"{"id":"x","name":"n","serviceName":"s","region":"R",
            "category":"C2","cpu":0.5,"memory":0.5,"storage":120.5}"#;
        let vm: Vm = serde_json::from_str(json).unwrap();
        assert_eq!(vm.cpu, 0.5);
        assert_eq!(vm.memory, 0.5);
        assert_eq!(vm.storage, 120.5);
    }

    #[test]
    fn test_filter_by_region() {
        let vms = vec![
            Vm::new("1", "a", "s", "US-East", "C1", 1, 1, 1),
            Vm::new("2", "b", "s", "APAC", "C1", 1, 1, 1),
            Vm::new("3", "c", "s", "US-East", "C2", 1, 1, 1),
        ];
        let east = filter_by_region(&vms, "US-East");
        assert_eq!(east.len(), 2);
        assert!(east.iter().all(|vm| vm.region == "US-East"));
    }
}
