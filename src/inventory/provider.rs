//! Inventory providers
//!
//! Provides trait-based access to the VM inventory so that callers can run the
//! recommendation engine against the built-in sample data or a file on disk
//! without caring where the records come from.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use super::{sample_inventory, Vm};
use crate::error::{Error, Result};

/// Default latency of the mock inventory endpoint
pub const DEFAULT_MOCK_DELAY: Duration = Duration::from_millis(1000);

/// Source of VM records
#[async_trait]
pub trait InventoryProvider: Send + Sync {
    /// Fetch the full inventory
    async fn fetch(&self) -> Result<Vec<Vm>>;

    /// Short human-readable description of where records come from
    fn describe(&self) -> String;
}

/// Serves the built-in sample inventory after a simulated delay
#[derive(Debug, Clone)]
pub struct MockInventoryProvider {
    delay: Duration,
    vms: Vec<Vm>,
}

impl MockInventoryProvider {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            vms: sample_inventory(),
        }
    }

    /// Serve a caller-supplied inventory instead of the sample one
    pub fn with_vms(mut self, vms: Vec<Vm>) -> Self {
        self.vms = vms;
        self
    }
}

impl Default for MockInventoryProvider {
    fn default() -> Self {
        Self::new(DEFAULT_MOCK_DELAY)
    }
}

#[async_trait]
impl InventoryProvider for MockInventoryProvider {
    async fn fetch(&self) -> Result<Vec<Vm>> {
        if !self.delay.is_zero() {
            debug!("Simulating inventory latency of {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.vms.clone())
    }

    fn describe(&self) -> String {
        format!("sample inventory ({} VMs)", self.vms.len())
    }
}

/// Reads VM records from a JSON or YAML file
#[derive(Debug, Clone)]
pub struct FileInventoryProvider {
    path: PathBuf,
}

impl FileInventoryProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl InventoryProvider for FileInventoryProvider {
    async fn fetch(&self) -> Result<Vec<Vm>> {
        if !self.path.exists() {
            return Err(Error::NotFound(format!(
                "Inventory file {}",
                self.path.display()
            )));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let vms: Vec<Vm> = parse_records(&content, &self.path)?;
        info!("Loaded {} VMs from {}", vms.len(), self.path.display());
        Ok(vms)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordFormat {
    Json,
    Yaml,
    Unknown,
}

fn detect_format(path: &Path) -> RecordFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => RecordFormat::Json,
        Some("yaml") | Some("yml") => RecordFormat::Yaml,
        _ => RecordFormat::Unknown,
    }
}

/// Parse a list of records, choosing the format from the file extension
///
/// Files without a recognised extension are tried as JSON first, then YAML.
pub fn parse_records<T: DeserializeOwned>(content: &str, path: &Path) -> Result<Vec<T>> {
    let inventory_error = |message: String| Error::Inventory {
        path: path.to_path_buf(),
        message,
    };

    match detect_format(path) {
        RecordFormat::Json => {
            serde_json::from_str(content).map_err(|e| inventory_error(e.to_string()))
        }
        RecordFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| inventory_error(e.to_string()))
        }
        RecordFormat::Unknown => serde_json::from_str(content).or_else(|json_err| {
            serde_yaml::from_str(content).map_err(|yaml_err| {
                inventory_error(format!("not valid JSON ({json_err}) or YAML ({yaml_err})"))
            })
        }),
    }
}

/// Read and parse a list of records from disk
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::NotFound(format!("File {}", path.display())));
    }
    let content = std::fs::read_to_string(path)?;
    parse_records(&content, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const INVENTORY_JSON: &str = r#"[
        {"id":"1","name":"GB00001","serviceName":"Payment Service","region":"US-East",
         "category":"C1","cpu":4,"memory":8,"storage":250},
        {"id":"2","name":"GB00002","serviceName":"Email Service","region":"US-East",
         "category":"C2","cpu":2,"memory":32,"storage":1800}
    ]"#;

    const INVENTORY_YAML: &str = r#"
- id: "1"
  name: GB00001
  serviceName: Payment Service
  region: APAC
  category: C5
  cpu: 4
  memory: 16
  storage: 600
  os: RHEL
  changeRequestId: CHG0001234
"#;

    #[tokio::test]
    async fn test_mock_provider_returns_sample_inventory() {
        let provider = MockInventoryProvider::new(Duration::ZERO);
        let vms = provider.fetch().await.unwrap();
        assert_eq!(vms.len(), 40);
        assert_eq!(provider.describe(), "sample inventory (40 VMs)");
    }

    #[tokio::test]
    async fn test_mock_provider_with_custom_vms() {
        let vm = Vm::new("1", "a", "s", "APAC", "C5", 1, 1, 1);
        let provider = MockInventoryProvider::new(Duration::ZERO).with_vms(vec![vm.clone()]);
        assert_eq!(provider.fetch().await.unwrap(), vec![vm]);
    }

    #[tokio::test]
    async fn test_mock_provider_waits_for_delay() {
        let delay = Duration::from_millis(20);
        let provider = MockInventoryProvider::new(delay);
        let start = std::time::Instant::now();
        provider.fetch().await.unwrap();
        assert!(start.elapsed() >= delay);
    }

    #[tokio::test]
    async fn test_file_provider_reads_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.json");
        fs::write(&path, INVENTORY_JSON).unwrap();

        let vms = FileInventoryProvider::new(&path).fetch().await.unwrap();
        assert_eq!(vms.len(), 2);
        assert_eq!(vms[1].category, "C2");
    }

    #[tokio::test]
    async fn test_file_provider_reads_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.yml");
        fs::write(&path, INVENTORY_YAML).unwrap();

        let vms = FileInventoryProvider::new(&path).fetch().await.unwrap();
        assert_eq!(vms.len(), 1);
        assert_eq!(vms[0].os, "RHEL");
        assert_eq!(vms[0].change_request_id.as_deref(), Some("CHG0001234"));
    }

    #[tokio::test]
    async fn test_file_provider_unknown_extension_falls_back_to_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.txt");
        fs::write(&path, INVENTORY_YAML).unwrap();

        let vms = FileInventoryProvider::new(&path).fetch().await.unwrap();
        assert_eq!(vms[0].region, "APAC");
    }

    #[tokio::test]
    async fn test_file_provider_missing_file() {
        let err = FileInventoryProvider::new("/nonexistent/inventory.json")
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_file_provider_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FileInventoryProvider::new(&path).fetch().await.unwrap_err();
        match err {
            Error::Inventory { path: err_path, .. } => assert_eq!(err_path, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
