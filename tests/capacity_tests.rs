//! Integration tests for the phase capacity check

use std::fs;
use tempfile::TempDir;

use mioa::core::capacity::{check_phase_capacity, CapacityStatus, FALLBACK_CAPACITY};
use mioa::inventory::datacenter::load_datacenters;
use mioa::inventory::sample_datacenters;

const DATACENTERS_JSON: &str = r#"[
  {
    "country": "India",
    "countryCode": "IN",
    "locationName": "NAVI MUMBAI",
    "status": "operational",
    "resources": {
      "compute": { "available": 100, "total": 200, "unit": "cores" },
      "memory": { "available": 400, "total": 800, "unit": "GB" },
      "storage": { "available": 20, "total": 40, "unit": "TB" },
      "network": { "available": 10, "total": 20, "unit": "Gbps" }
    }
  },
  {
    "country": "India",
    "countryCode": "IN",
    "locationName": "CHENNAI",
    "status": "operational",
    "resources": {
      "compute": { "available": 60, "total": 100, "unit": "cores" },
      "memory": { "available": 100, "total": 200, "unit": "GB" },
      "storage": { "available": 5, "total": 10, "unit": "TB" },
      "network": { "available": 2, "total": 5, "unit": "Gbps" }
    }
  }
]"#;

fn datacenters_file() -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("datacenters.json");
    fs::write(&path, DATACENTERS_JSON).unwrap();
    (temp_dir, path)
}

#[test]
fn test_matching_datacenters_are_aggregated() {
    let (_dir, path) = datacenters_file();
    let datacenters = load_datacenters(&path).unwrap();

    let report = check_phase_capacity("IN", 10, &datacenters).unwrap();
    assert!(!report.used_fallback);

    let compute = &report.resources[0];
    assert_eq!(compute.name, "Compute");
    assert_eq!(compute.available, 160.0);
    assert_eq!(compute.total, 300.0);
    assert_eq!(compute.needed, 40.0);
    assert_eq!(compute.status, CapacityStatus::Ready);
    assert_eq!(report.overall, CapacityStatus::Ready);
    assert_eq!(report.advisory(), None);
}

#[test]
fn test_tight_region_warns() {
    let (_dir, path) = datacenters_file();
    let datacenters = load_datacenters(&path).unwrap();

    // 36 VMs need 144 cores of 160 available
    let report = check_phase_capacity("IN", 36, &datacenters).unwrap();
    assert_eq!(report.resources[0].status, CapacityStatus::Warning);
    assert_eq!(report.overall, CapacityStatus::Warning);
    assert!(report.advisory().unwrap().starts_with("Limited capacity"));
}

#[test]
fn test_unknown_region_uses_fallback() {
    let (_dir, path) = datacenters_file();
    let datacenters = load_datacenters(&path).unwrap();

    let report = check_phase_capacity("AR", 10, &datacenters).unwrap();
    assert!(report.used_fallback);
    assert_eq!(report.resources[0].available, FALLBACK_CAPACITY.compute.available);
}

#[test]
fn test_oversized_phase_is_critical() {
    let report = check_phase_capacity("AR", 1000, &[]).unwrap();
    assert_eq!(report.overall, CapacityStatus::Critical);
    assert!(report.advisory().unwrap().starts_with("Insufficient capacity"));
}

#[test]
fn test_nothing_to_check() {
    assert!(check_phase_capacity("IN", 0, &[]).is_none());
    assert!(check_phase_capacity("", 5, &[]).is_none());
}

#[test]
fn test_built_in_argentina_sites_are_aggregated() {
    let datacenters = sample_datacenters();
    let report = check_phase_capacity("AR", 50, &datacenters).unwrap();

    assert!(!report.used_fallback);
    let totals: Vec<(f64, f64)> = report
        .resources
        .iter()
        .map(|r| (r.available, r.total))
        .collect();
    assert_eq!(
        totals,
        vec![(600.0, 880.0), (1200.0, 1760.0), (45.0, 75.0), (22.0, 33.0)]
    );
    // 200 cores needed of 600 available
    assert_eq!(report.resources[0].status, CapacityStatus::Ready);
}

#[test]
fn test_json_report_uses_camel_case() {
    let report = check_phase_capacity("AR", 50, &sample_datacenters()).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"utilizationPercent\""));
    assert!(json.contains("\"usedFallback\":false"));
    assert!(!json.contains("utilization_percent"));
}
