//! Per-VM priority score
//!
//! The score only orders VMs inside a category bucket. It never decides which
//! phase a VM joins or how that phase is ranked.

use super::policy::policy_for_code;
use crate::inventory::Vm;

const BASE_SCORE: i64 = 100;

/// Score a VM; higher means it should move earlier within its group
pub fn score_vm(vm: &Vm) -> i64 {
    let category_bonus = policy_for_code(&vm.category).map_or(0, |policy| policy.weight);
    BASE_SCORE + category_bonus + memory_bonus(vm.memory) + storage_bonus(vm.storage)
}

/// Smaller VMs first
fn memory_bonus(memory_gb: f64) -> i64 {
    if memory_gb <= 8.0 {
        30
    } else if memory_gb <= 16.0 {
        20
    } else if memory_gb <= 32.0 {
        10
    } else {
        0
    }
}

/// Less storage to copy means an easier migration
fn storage_bonus(storage_gb: f64) -> i64 {
    if storage_gb <= 500.0 {
        20
    } else if storage_gb <= 1000.0 {
        10
    } else {
        0
    }
}
