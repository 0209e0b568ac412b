//! Migration phase records created from recommendations
//!
//! An operator accepts a recommended phase as the starting point of a real
//! phase: its name, region, category and VM list are copied into a draft that
//! must be completed with a change request and an assignee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::recommendation::RecommendedPhase;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseStatus {
    Planned,
    Migrating,
    Completed,
}

/// Phase form before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseDraft {
    pub name: String,
    pub region: String,
    pub category: String,
    pub change_request: String,
    pub assigned_to: String,
    /// VM names
    pub vms: Vec<String>,
}

impl PhaseDraft {
    /// Prefill a draft from a recommendation
    pub fn from_recommendation(phase: &RecommendedPhase) -> Self {
        Self {
            name: phase.name.clone(),
            region: phase.region.clone(),
            category: phase.category.clone(),
            vms: phase.vms.iter().map(|vm| vm.name.clone()).collect(),
            ..Default::default()
        }
    }

    pub fn with_change_request(mut self, change_request: impl Into<String>) -> Self {
        self.change_request = change_request.into();
        self
    }

    pub fn with_assignee(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = assigned_to.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Names of required fields that are still blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.change_request.trim().is_empty() {
            missing.push("change request");
        }
        if self.assigned_to.trim().is_empty() {
            missing.push("assignee");
        }
        if self.vms.is_empty() {
            missing.push("VMs");
        }
        missing
    }

    /// Validate and turn the draft into a planned phase
    ///
    /// `existing_phases` is the number of phases already recorded; the new
    /// phase id is the next in the `P001` sequence.
    pub fn into_phase(self, existing_phases: usize, created: NaiveDate) -> Result<MigrationPhase> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::Validation(format!(
                "Phase is missing required fields: {}",
                missing.join(", ")
            )));
        }

        Ok(MigrationPhase {
            id: format!("P{:03}", existing_phases + 1),
            name: self.name,
            region: self.region,
            category: self.category,
            change_request: self.change_request,
            vm_count: self.vms.len(),
            vms: self.vms,
            created_date: created,
            assigned_to: self.assigned_to,
            status: PhaseStatus::Planned,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationPhase {
    pub id: String,
    pub name: String,
    pub region: String,
    pub category: String,
    pub change_request: String,
    pub vm_count: usize,
    pub vms: Vec<String>,
    pub created_date: NaiveDate,
    pub assigned_to: String,
    pub status: PhaseStatus,
}
