//! # MiOA Planner
//!
//! Migration phase recommendation engine for moving virtual machines onto the
//! MiOA container platform.
//!
//! Given a VM inventory, the planner scores each VM, buckets VMs by region and
//! workload category, turns each bucket into a proposed migration phase with
//! priority, complexity and effort estimates, and ranks the phases.
//!
//! ## Usage
//!
//! ```bash
//! mioa recommend [--inventory vms.json] [--region APAC] [--format json]
//! mioa summary
//! mioa accept rec-phase-1 --change-request CR-2024-100 --assigned-to "J. Smith"
//! ```
//!
//! ## Modules
//!
//! - `app` - Process setup: verbosity, logging, exit codes
//! - `cli` - Argument parsing, command handlers and output rendering
//! - `config` - Planner configuration (`mioa.toml` and `MIOA_*` overrides)
//! - `core` - Scoring, grouping, phase synthesis, ranking, capacity checks
//! - `error` - Error types shared across the crate
//! - `inventory` - VM and datacenter records and inventory providers

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod inventory;

pub use crate::core::recommendation::{
    generate_recommended_phases, phase_recommendation_summary, summarize_phases,
    PhaseRecommendationSummary, RecommendedPhase,
};
pub use crate::error::{Error, Result};
pub use crate::inventory::{Category, Vm};
