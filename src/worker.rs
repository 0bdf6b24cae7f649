// Polling worker: runs one collection cycle per tick and publishes each inventory snapshot.
// Cycles are serialized; a cycle is cancelled when it outlives its timeout or on shutdown.

use crate::collector::{CollectError, Collector};
use crate::models::InventorySnapshot;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::{RwLock, broadcast, watch};
use tokio::time::{Duration, Instant, interval};
use tracing::Instrument;

/// Latest successfully collected inventory; `None` until the first cycle succeeds.
pub type SharedInventory = Arc<RwLock<Option<InventorySnapshot>>>;

/// Rate limit for "no receivers" log (avoid logging every tick when no one is on /ws/containers)
const NO_RECEIVERS_WARN_INTERVAL: Duration = Duration::from_secs(60);

/// Collector, publishing handles, and shutdown for the worker.
pub struct WorkerDeps {
    pub collector: Arc<Collector>,
    pub tx: broadcast::Sender<InventorySnapshot>,
    pub latest: SharedInventory,
    pub ws_connections: Arc<AtomicUsize>,
    /// Flips to `true` on shutdown; a dropped sender counts as shutdown too.
    pub shutdown_rx: watch::Receiver<bool>,
}

/// Worker timing and logging config.
pub struct WorkerConfig {
    pub interval_ms: u64,
    pub cycle_timeout_ms: u64,
    /// How often to log inventory stats (real seconds).
    pub stats_log_interval_secs: u64,
}

/// Unix millis, or 0 if the clock is before the epoch.
pub fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                operation = "get_timestamp",
                "system time error"
            );
            0
        })
}

/// Completes once shutdown is requested or the sender is gone.
/// The borrowed value is released here so callers never hold a watch guard across an await.
async fn shutdown_signalled(shutdown_rx: &mut watch::Receiver<bool>) {
    let _ = shutdown_rx.wait_for(|stop| *stop).await;
}

/// Completes when the cycle must stop: its timeout elapsed or shutdown was requested.
async fn cycle_deadline(timeout: Duration, mut shutdown_rx: watch::Receiver<bool>) {
    tokio::select! {
        _ = tokio::time::sleep(timeout) => {}
        _ = shutdown_signalled(&mut shutdown_rx) => {}
    }
}

/// Runs a single cycle bounded by `timeout` and by `shutdown_rx`.
pub async fn run_cycle(
    collector: &Collector,
    timeout: Duration,
    shutdown_rx: watch::Receiver<bool>,
) -> Result<InventorySnapshot, CollectError> {
    let containers = collector
        .collect(cycle_deadline(timeout, shutdown_rx))
        .await?;
    Ok(InventorySnapshot {
        timestamp: now_millis(),
        containers,
    })
}

fn shutdown_requested(shutdown_rx: &watch::Receiver<bool>) -> bool {
    *shutdown_rx.borrow() || shutdown_rx.has_changed().is_err()
}

pub fn spawn(deps: WorkerDeps, config: WorkerConfig) -> tokio::task::JoinHandle<()> {
    let WorkerDeps {
        collector,
        tx,
        latest,
        ws_connections,
        shutdown_rx,
    } = deps;
    let WorkerConfig {
        interval_ms,
        cycle_timeout_ms,
        stats_log_interval_secs,
    } = config;

    let cycle_timeout = Duration::from_millis(cycle_timeout_ms);
    let stats_log_interval = Duration::from_secs(stats_log_interval_secs);

    let worker_span = tracing::span!(tracing::Level::DEBUG, "worker", interval_ms);
    let task = async move {
        let mut tick = interval(Duration::from_millis(interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(stats_log_interval);
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut shutdown_signal = shutdown_rx.clone();

        let mut cycles_ok: u64 = 0;
        let mut cycles_failed: u64 = 0;
        let mut last_no_receivers_warn: Option<Instant> = None;

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    match run_cycle(&collector, cycle_timeout, shutdown_rx.clone()).await {
                        Ok(snapshot) => {
                            cycles_ok += 1;
                            *latest.write().await = Some(snapshot.clone());
                            if tx.send(snapshot).is_err() {
                                let should_warn = last_no_receivers_warn
                                    .is_none_or(|t| t.elapsed() >= NO_RECEIVERS_WARN_INTERVAL);
                                if should_warn {
                                    tracing::debug!(
                                        operation = "broadcast_snapshot",
                                        "No active WebSocket clients; broadcast channel has no receivers"
                                    );
                                    last_no_receivers_warn = Some(Instant::now());
                                }
                            }
                        }
                        Err(CollectError::Cancelled) if shutdown_requested(&shutdown_rx) => {
                            tracing::debug!("Worker shutting down mid-cycle");
                            break;
                        }
                        Err(e) => {
                            cycles_failed += 1;
                            tracing::warn!(
                                error = %e,
                                operation = "collect",
                                "collection cycle failed; keeping previous inventory"
                            );
                        }
                    }
                }
                _ = shutdown_signalled(&mut shutdown_signal) => {
                    tracing::debug!("Worker shutting down");
                    break;
                }
                _ = stats_log_tick.tick() => {
                    let (containers, running, classified) = match latest.read().await.as_ref() {
                        Some(s) => (s.containers.len(), s.running_count(), s.classified_count()),
                        None => (0, 0, 0),
                    };
                    tracing::info!(
                        ws_container_clients =
                            ws_connections.load(std::sync::atomic::Ordering::Relaxed),
                        cycles_ok,
                        cycles_failed,
                        containers,
                        running,
                        classified,
                        tracked_snapshots = collector.tracker().len(),
                        "inventory stats"
                    );
                }
            }
        }
    };
    tokio::spawn(task.instrument(worker_span))
}
