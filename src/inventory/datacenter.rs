//! Target datacenter capacity model

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Operational,
    Maintenance,
    Warning,
}

/// Available and total amount of one resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceQuota {
    pub available: f64,
    pub total: f64,
    pub unit: String,
}

impl ResourceQuota {
    pub fn new(available: f64, total: f64, unit: impl Into<String>) -> Self {
        Self {
            available,
            total,
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteResources {
    pub compute: ResourceQuota,
    pub memory: ResourceQuota,
    pub storage: ResourceQuota,
    pub network: ResourceQuota,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenShiftCluster {
    pub name: String,
    pub status: SiteStatus,
    pub compute: ResourceQuota,
    pub memory: ResourceQuota,
    pub storage: ResourceQuota,
    pub network: ResourceQuota,
    #[serde(rename = "currentVMs")]
    pub current_vms: u32,
    pub max_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datacenter {
    pub country: String,
    pub country_code: String,
    pub location_name: String,
    pub status: SiteStatus,
    pub resources: SiteResources,
    #[serde(default)]
    pub open_shift_clusters: Vec<OpenShiftCluster>,
}

/// Load datacenter definitions from a JSON or YAML file
pub fn load_datacenters(path: &Path) -> Result<Vec<Datacenter>> {
    super::provider::read_records(path)
}
