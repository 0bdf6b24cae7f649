// Final ordering of a cycle's records

use serde::Deserialize;
use std::cmp::Ordering;

use crate::models::Container;

/// Sort key applied once all units of a cycle have finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending case-insensitive canonical name; stable across cycles.
    #[default]
    Name,
    /// Descending CPU percentage.
    Cpu,
}

fn by_name(a: &Container, b: &Container) -> Ordering {
    a.canonical_name()
        .to_lowercase()
        .cmp(&b.canonical_name().to_lowercase())
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_containers(containers: &mut [Container], order: SortOrder) {
    match order {
        SortOrder::Name => containers.sort_by(by_name),
        SortOrder::Cpu => containers.sort_by(|a, b| {
            b.cpu_percent
                .total_cmp(&a.cpu_percent)
                .then_with(|| by_name(a, b))
        }),
    }
}
