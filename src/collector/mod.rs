// One collection cycle: list containers, fan out bounded per-container units, fan the records
// back in and impose the configured order.

mod order;

pub use crate::models::ContainerRef;
pub use order::{SortOrder, sort_containers};

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::classifier::Classifier;
use crate::gateway::{GatewayError, RuntimeGateway};
use crate::models::Container;
use crate::stats_tracker::{StatsSnapshot, StatsTracker};

/// Units admitted at once when nothing else is configured.
pub const DEFAULT_CONCURRENCY: usize = 8;

const BYTES_PER_MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Admission gate size; values below 1 are treated as 1.
    pub concurrency: usize,
    pub sort: SortOrder,
    /// Drop tracker snapshots of containers missing from the current listing.
    pub evict_stale: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            sort: SortOrder::default(),
            evict_stale: false,
        }
    }
}

/// Why a cycle produced no records.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("listing containers failed: {0}")]
    List(#[source] GatewayError),
    #[error("collection cycle cancelled")]
    Cancelled,
}

/// Drives collection cycles against one runtime.
///
/// Cycles are expected to be serialized by the caller; the only state shared between them
/// is the [`StatsTracker`].
pub struct Collector {
    gateway: Arc<dyn RuntimeGateway>,
    tracker: Arc<StatsTracker>,
    classifier: Arc<Classifier>,
    config: CollectorConfig,
}

impl Collector {
    pub fn new(
        gateway: Arc<dyn RuntimeGateway>,
        tracker: Arc<StatsTracker>,
        classifier: Arc<Classifier>,
        config: CollectorConfig,
    ) -> Self {
        Self {
            gateway,
            tracker,
            classifier,
            config,
        }
    }

    pub fn tracker(&self) -> &StatsTracker {
        &self.tracker
    }

    /// Runs one cycle and returns exactly one record per listed container, ordered by the
    /// configured sort key.
    ///
    /// Only the listing can fail the cycle. When `cancel` completes first, in-flight units
    /// are aborted and [`CollectError::Cancelled`] is returned.
    pub async fn collect<F>(&self, cancel: F) -> Result<Vec<Container>, CollectError>
    where
        F: Future<Output = ()>,
    {
        let started = Instant::now();
        tokio::pin!(cancel);

        let listed = tokio::select! {
            biased;
            _ = &mut cancel => return Err(CollectError::Cancelled),
            listed = self.gateway.list_containers() => listed.map_err(CollectError::List)?,
        };
        let refs: Vec<ContainerRef> = listed.into_iter().map(ContainerRef::from_raw).collect();

        if self.config.evict_stale {
            let live: HashSet<&str> = refs.iter().map(|r| r.id.as_str()).collect();
            self.tracker.retain(&live);
        }

        let gate = Arc::new(Semaphore::new(self.config.concurrency.max(1)));
        let mut units = JoinSet::new();
        for (index, container) in refs.iter().cloned().enumerate() {
            let gate = gate.clone();
            let unit = Unit {
                gateway: self.gateway.clone(),
                tracker: self.tracker.clone(),
                classifier: self.classifier.clone(),
            };
            units.spawn(async move {
                // The gate is never closed, so acquiring only waits for a free slot.
                let _permit = gate.acquire_owned().await.ok();
                (index, unit.run(container).await)
            });
        }

        let mut slots: Vec<Option<Container>> = vec![None; refs.len()];
        loop {
            tokio::select! {
                biased;
                _ = &mut cancel => {
                    units.abort_all();
                    tracing::debug!(
                        pending = units.len(),
                        operation = "collect",
                        "cycle cancelled; aborted in-flight units"
                    );
                    return Err(CollectError::Cancelled);
                }
                joined = units.join_next() => match joined {
                    Some(Ok((index, record))) => slots[index] = Some(record),
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, operation = "collect", "collection unit failed");
                    }
                    None => break,
                },
            }
        }

        // A unit that panicked still owes its container a record.
        let mut containers: Vec<Container> = slots
            .into_iter()
            .zip(&refs)
            .map(|(slot, container)| slot.unwrap_or_else(|| container.degraded()))
            .collect();
        sort_containers(&mut containers, self.config.sort);

        tracing::debug!(
            containers = containers.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            operation = "collect",
            "cycle complete"
        );
        Ok(containers)
    }
}

/// Per-container work: stats, CPU delta, classification and best-effort detail.
struct Unit {
    gateway: Arc<dyn RuntimeGateway>,
    tracker: Arc<StatsTracker>,
    classifier: Arc<Classifier>,
}

impl Unit {
    async fn run(self, container: ContainerRef) -> Container {
        let sample = match self.gateway.stats(&container.id).await {
            Ok(sample) => sample,
            Err(e) => {
                tracing::debug!(
                    container_id = %container.id,
                    error = %e,
                    operation = "stats",
                    "stats failed; reporting degraded record"
                );
                return container.degraded();
            }
        };

        let cpu_percent = self.tracker.update(
            &container.id,
            StatsSnapshot::from_sample(&sample),
            sample.percpu_count,
        );
        let mut record = container.to_record(cpu_percent, sample.memory_usage / BYTES_PER_MB);

        let kind = self.classifier.classify(&record.image);
        if !kind.is_generic() {
            record.kind = kind;
            record.details = self
                .classifier
                .extract(
                    kind,
                    &container.id,
                    &container,
                    &record,
                    self.gateway.as_ref(),
                )
                .await;
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = CollectorConfig::default();
        assert_eq!(c.concurrency, 8);
        assert_eq!(c.sort, SortOrder::Name);
        assert!(!c.evict_stale);
    }

    #[test]
    fn list_error_keeps_source() {
        let e = CollectError::List(GatewayError::Unavailable("socket closed".into()));
        assert_eq!(
            e.to_string(),
            "listing containers failed: runtime unavailable: socket closed"
        );
        assert!(std::error::Error::source(&e).is_some());
    }
}
