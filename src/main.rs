use anyhow::Result;
use dockdeck::*;
use std::sync::Arc;
use std::sync::atomic::AtomicUsize;
use tokio::sync::{RwLock, broadcast, watch};
use tokio::time::Duration;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

use dockdeck::gateway::RuntimeGateway;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Where to look when the runtime cannot be reached, per platform.
fn runtime_hint() -> &'static str {
    if cfg!(windows) {
        "is Docker Desktop running? expected named pipe //./pipe/docker_engine"
    } else if cfg!(target_os = "macos") {
        "is Docker Desktop (or colima) running? check DOCKER_HOST or runtime.socket"
    } else {
        "is the docker daemon running and /var/run/docker.sock readable by this user?"
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let app_config = config::AppConfig::load()?;
    let (tx, _) = broadcast::channel::<models::InventorySnapshot>(
        app_config.publishing.broadcast_capacity,
    );

    let gateway: Arc<dyn RuntimeGateway> = Arc::new(gateway::DockerGateway::connect(
        app_config.runtime.socket.as_deref(),
        Duration::from_secs(app_config.runtime.timeout_secs),
    )?);
    if let Err(e) = gateway.ping().await {
        tracing::error!(error = %e, operation = "ping", "container runtime unreachable");
        anyhow::bail!("container runtime unreachable: {e} ({})", runtime_hint());
    }

    let classifier = classifier::Classifier::default()
        .with_secret_masking(app_config.collection.mask_secrets);
    tracing::info!(
        kinds = classifier.entries().len(),
        concurrency = app_config.collection.concurrency,
        sort = ?app_config.collection.sort,
        "Classifier ready"
    );
    let collector = Arc::new(collector::Collector::new(
        gateway.clone(),
        Arc::new(stats_tracker::StatsTracker::new()),
        Arc::new(classifier),
        app_config.collection.collector_config(),
    ));

    let latest: worker::SharedInventory = Arc::new(RwLock::new(None));
    let ws_connections = Arc::new(AtomicUsize::new(0));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let worker_handle = worker::spawn(
        worker::WorkerDeps {
            collector,
            tx: tx.clone(),
            latest: latest.clone(),
            ws_connections: ws_connections.clone(),
            shutdown_rx,
        },
        worker::WorkerConfig {
            interval_ms: app_config.polling.interval_ms,
            cycle_timeout_ms: app_config.polling.cycle_timeout_ms,
            stats_log_interval_secs: app_config.polling.stats_log_interval_secs,
        },
    );

    let app = routes::app(tx, latest, gateway, ws_connections);
    let addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = async {
            #[cfg(unix)]
            {
                let mut sigterm = match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                    Ok(s) => s,
                    Err(_) => {
                        let _ = tokio::signal::ctrl_c().await;
                        return;
                    }
                };
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {}
                    _ = sigterm.recv() => {}
                }
            }
            #[cfg(not(unix))]
            {
                let _ = tokio::signal::ctrl_c().await;
            }
        } => {
            tracing::info!("Received shutdown signal");
            let _ = shutdown_tx.send(true);
            let _ = worker_handle.await;
        }
    }

    Ok(())
}
