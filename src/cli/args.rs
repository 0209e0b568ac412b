//! CLI argument structures
//!
//! This module defines all command-line interface structures used by mioa.
//! It includes the main CLI structure and all subcommand definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;

/// Plan VM migrations to the MiOA container platform
#[derive(Parser)]
#[command(name = "mioa")]
#[command(about = "mioa - Plan and prioritise VM migration phases", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Planner configuration file (defaults to ./mioa.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the VM inventory comes from
#[derive(Args, Debug, Clone, Default)]
pub struct InventoryArgs {
    /// Inventory file (JSON or YAML); the sample inventory is used when omitted
    #[arg(short, long, value_name = "PATH")]
    pub inventory: Option<PathBuf>,

    /// Only consider VMs of this region
    #[arg(short, long)]
    pub region: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate ranked migration phase recommendations
    #[command(name = "recommend")]
    Recommend {
        #[command(flatten)]
        inventory: InventoryArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Summarize the recommended phases
    #[command(name = "summary")]
    Summary {
        #[command(flatten)]
        inventory: InventoryArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the VM inventory with individual priority scores
    #[command(name = "inventory")]
    Inventory {
        #[command(flatten)]
        inventory: InventoryArgs,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check whether a region can absorb a phase of a given size
    #[command(name = "capacity")]
    Capacity {
        /// Region or country code to check
        #[arg(long)]
        region: String,

        /// Number of VMs in the phase
        #[arg(long)]
        vms: usize,

        /// Datacenter capacity file (JSON or YAML)
        #[arg(long, value_name = "PATH")]
        datacenters: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Accept a recommended phase as a planned migration phase
    #[command(name = "accept")]
    Accept {
        /// Recommendation id, e.g. rec-phase-1
        id: String,

        /// Change request covering the phase
        #[arg(long)]
        change_request: String,

        /// Engineer or lead owning the phase
        #[arg(long)]
        assigned_to: String,

        /// Phase name (defaults to the recommendation name)
        #[arg(long)]
        name: Option<String>,

        /// Number of phases already recorded, used to number the new one
        #[arg(long, default_value = "0")]
        existing: usize,

        #[command(flatten)]
        inventory: InventoryArgs,

        /// Output format (defaults to json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
}
