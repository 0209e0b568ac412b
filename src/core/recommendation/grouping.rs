//! Region then category partitioning of the inventory

use std::cmp::Reverse;

use super::scoring::score_vm;
use crate::inventory::{Category, Vm};

/// VMs of one region sharing a category code
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket<'a> {
    pub category: &'a str,
    /// Ordered by descending score, input order on ties
    pub vms: Vec<&'a Vm>,
}

/// All buckets of one region, in first-seen category order
#[derive(Debug, Clone, PartialEq)]
pub struct RegionGroup<'a> {
    pub region: &'a str,
    pub buckets: Vec<CategoryBucket<'a>>,
}

impl<'a> RegionGroup<'a> {
    /// Bucket for a known category, if any VM of this region carries it
    pub fn bucket(&self, category: Category) -> Option<&CategoryBucket<'a>> {
        self.buckets.iter().find(|b| b.category == category.code())
    }

    pub fn vm_count(&self) -> usize {
        self.buckets.iter().map(|b| b.vms.len()).sum()
    }
}

/// Partition VMs by region (first-seen order), then by category code
///
/// Every input VM lands in exactly one bucket, including VMs whose category
/// code is unknown.
pub fn group_by_region_then_category(vms: &[Vm]) -> Vec<RegionGroup<'_>> {
    let mut groups: Vec<RegionGroup<'_>> = Vec::new();

    for vm in vms {
        let group_idx = match groups.iter().position(|g| g.region == vm.region) {
            Some(idx) => idx,
            None => {
                groups.push(RegionGroup {
                    region: &vm.region,
                    buckets: Vec::new(),
                });
                groups.len() - 1
            }
        };

        let buckets = &mut groups[group_idx].buckets;
        match buckets.iter_mut().find(|b| b.category == vm.category) {
            Some(bucket) => bucket.vms.push(vm),
            None => buckets.push(CategoryBucket {
                category: &vm.category,
                vms: vec![vm],
            }),
        }
    }

    for bucket in groups.iter_mut().flat_map(|g| g.buckets.iter_mut()) {
        // sort_by_key is stable, so equal scores keep input order
        bucket.vms.sort_by_key(|vm| Reverse(score_vm(vm)));
    }

    groups
}
