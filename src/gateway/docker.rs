// Docker Engine gateway via bollard

use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{ContainerInspectResponse, ContainerStatsResponse, ContainerSummary};
use bollard::query_parameters::{InspectContainerOptions, ListContainersOptions, StatsOptions};
use futures_util::StreamExt;
use std::time::Duration;
use tracing::instrument;

use super::{GatewayError, HostBinding, InspectDetails, RawContainer, RuntimeGateway, StatsSample};

pub struct DockerGateway {
    docker: Docker,
}

impl DockerGateway {
    /// Connects to `socket` when given, otherwise to the platform default
    /// (Unix socket, or the named pipe on Windows). Connecting does not dial yet.
    pub fn connect(socket: Option<&str>, timeout: Duration) -> anyhow::Result<Self> {
        let docker = match socket {
            Some(path) => {
                Docker::connect_with_socket(path, timeout.as_secs(), bollard::API_DEFAULT_VERSION)?
            }
            None => Docker::connect_with_local_defaults()?.with_timeout(timeout),
        };
        Ok(Self { docker })
    }
}

#[async_trait]
impl RuntimeGateway for DockerGateway {
    #[instrument(skip(self), fields(gateway = "docker", operation = "ping"))]
    async fn ping(&self) -> Result<(), GatewayError> {
        self.docker.ping().await?;
        Ok(())
    }

    #[instrument(skip(self), fields(gateway = "docker", operation = "list_containers"))]
    async fn list_containers(&self) -> Result<Vec<RawContainer>, GatewayError> {
        let options = ListContainersOptions {
            all: true,
            ..Default::default()
        };
        let containers = self.docker.list_containers(Some(options)).await?;
        Ok(containers.iter().map(raw_container).collect())
    }

    #[instrument(skip(self), fields(gateway = "docker", operation = "stats"))]
    async fn stats(&self, container_id: &str) -> Result<StatsSample, GatewayError> {
        let options = StatsOptions {
            stream: false,
            one_shot: true,
            ..Default::default()
        };
        let mut stream = self.docker.stats(container_id, Some(options));
        match stream.next().await {
            Some(result) => Ok(stats_sample(&result?)),
            None => Err(GatewayError::EmptyStats(container_id.to_string())),
        }
    }

    #[instrument(skip(self), fields(gateway = "docker", operation = "inspect"))]
    async fn inspect(&self, container_id: &str) -> Result<InspectDetails, GatewayError> {
        let inspect = self
            .docker
            .inspect_container(container_id, None::<InspectContainerOptions>)
            .await?;
        Ok(inspect_details(&inspect))
    }
}

/// Listing entry -> contract record. Exposed for unit tests.
pub(crate) fn raw_container(c: &ContainerSummary) -> RawContainer {
    RawContainer {
        id: c.id.clone(),
        names: c.names.clone(),
        image: c.image.clone(),
        state: c.state.as_ref().map(|s| s.to_string()),
        status: c.status.clone(),
    }
}

/// Stats response -> counters; anything missing reads as zero.
pub(crate) fn stats_sample(s: &ContainerStatsResponse) -> StatsSample {
    let cpu_stats = s.cpu_stats.as_ref();
    let cpu_usage = cpu_stats.and_then(|c| c.cpu_usage.as_ref());

    StatsSample {
        cpu_total: cpu_usage.and_then(|u| u.total_usage).unwrap_or(0),
        percpu_count: cpu_usage
            .and_then(|u| u.percpu_usage.as_ref())
            .map_or(0, |p| p.len()),
        system_cpu: cpu_stats.and_then(|c| c.system_cpu_usage).unwrap_or(0),
        online_cpus: cpu_stats.and_then(|c| c.online_cpus).unwrap_or(0) as u64,
        memory_usage: s.memory_stats.as_ref().and_then(|m| m.usage).unwrap_or(0),
    }
}

/// Inspect response -> declared env and port bindings.
pub(crate) fn inspect_details(inspect: &ContainerInspectResponse) -> InspectDetails {
    let env = inspect
        .config
        .as_ref()
        .and_then(|c| c.env.clone())
        .unwrap_or_default();

    let ports = inspect
        .network_settings
        .as_ref()
        .and_then(|n| n.ports.as_ref())
        .map(|ports| {
            ports
                .iter()
                .map(|(key, bindings)| {
                    let bindings = bindings
                        .iter()
                        .flatten()
                        .map(|b| HostBinding {
                            host_ip: b.host_ip.clone(),
                            host_port: b.host_port.clone(),
                        })
                        .collect();
                    (key.clone(), bindings)
                })
                .collect()
        })
        .unwrap_or_default();

    InspectDetails { env, ports }
}
