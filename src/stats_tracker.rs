// Per-container CPU counter snapshots and delta-based CPU percentage.
//
// One std Mutex guards the whole table. It is held only for a single read-then-write per
// container, never across a runtime call; at tens of containers contention is negligible,
// at thousands it becomes the serialization point of a cycle.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use crate::gateway::StatsSample;

/// Cumulative counters captured for one container at one poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsSnapshot {
    pub cpu_total: u64,
    pub system_cpu: u64,
    pub online_cpus: u64,
    pub captured_at: Instant,
}

impl StatsSnapshot {
    pub fn from_sample(sample: &StatsSample) -> Self {
        Self {
            cpu_total: sample.cpu_total,
            system_cpu: sample.system_cpu,
            online_cpus: sample.online_cpus,
            captured_at: Instant::now(),
        }
    }
}

/// Keeps the latest snapshot per container id for the lifetime of the process.
///
/// Entries for vanished containers are kept unless [`StatsTracker::retain`] is called,
/// so the table grows with every container ever observed.
#[derive(Debug, Default)]
pub struct StatsTracker {
    previous: Mutex<HashMap<String, StatsSnapshot>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `snapshot` as the latest for `container_id` and returns the CPU percentage
    /// against the snapshot it replaced (0.0 on first observation).
    ///
    /// `percpu_count` stands in for `online_cpus` when the runtime reported zero.
    pub fn update(&self, container_id: &str, mut snapshot: StatsSnapshot, percpu_count: usize) -> f64 {
        if snapshot.online_cpus == 0 {
            snapshot.online_cpus = percpu_count as u64;
        }
        let prior = self.table().insert(container_id.to_string(), snapshot);
        match prior {
            Some(prior) => cpu_percent(&prior, &snapshot),
            None => 0.0,
        }
    }

    /// Drops snapshots of containers not in `live_ids`.
    pub fn retain(&self, live_ids: &HashSet<&str>) {
        self.table().retain(|id, _| live_ids.contains(id.as_str()));
    }

    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // The table only holds plain counters, so a poisoned lock still guards valid data.
    fn table(&self) -> MutexGuard<'_, HashMap<String, StatsSnapshot>> {
        self.previous.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// CPU usage between two snapshots, scaled to `current.online_cpus` (100% per CPU).
/// Zero unless both the container and the system counters moved forward.
pub fn cpu_percent(prior: &StatsSnapshot, current: &StatsSnapshot) -> f64 {
    let cpu_delta = current.cpu_total.saturating_sub(prior.cpu_total);
    let sys_delta = current.system_cpu.saturating_sub(prior.system_cpu);
    if cpu_delta == 0 || sys_delta == 0 {
        return 0.0;
    }
    (cpu_delta as f64 / sys_delta as f64) * current.online_cpus as f64 * 100.0
}
