// Container runtime gateway: the four operations the collection pipeline consumes.

mod docker;

pub use docker::DockerGateway;

use async_trait::async_trait;
use std::collections::BTreeMap;

/// Failure of a single gateway operation.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Docker(#[from] bollard::errors::Error),
    #[error("runtime returned no stats for container {0}")]
    EmptyStats(String),
    #[error("runtime unavailable: {0}")]
    Unavailable(String),
}

/// One entry of the container listing. Every field may be missing or malformed;
/// the collector decides what absent means.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawContainer {
    pub id: Option<String>,
    pub names: Option<Vec<String>>,
    pub image: Option<String>,
    /// Machine state ("running", "exited", ...).
    pub state: Option<String>,
    /// Human status ("Up 2 hours").
    pub status: Option<String>,
}

/// Point-in-time resource counters for one container. Absent counters are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSample {
    /// Cumulative CPU time consumed by the container (ns).
    pub cpu_total: u64,
    /// Number of per-CPU usage counters present in the payload.
    pub percpu_count: usize,
    /// Cumulative host CPU time (ns).
    pub system_cpu: u64,
    /// Online CPUs; zero when the runtime omitted it.
    pub online_cpus: u64,
    /// Resident memory usage in bytes.
    pub memory_usage: u64,
}

/// A single host-side binding of a container port.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostBinding {
    pub host_ip: Option<String>,
    pub host_port: Option<String>,
}

/// Declared configuration of a container, as far as classification needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectDetails {
    /// Environment in `KEY=VALUE` form, in declaration order.
    pub env: Vec<String>,
    /// Port bindings keyed by `"<containerPort>/<proto>"`.
    pub ports: BTreeMap<String, Vec<HostBinding>>,
}

/// Capability set of the container runtime's management API.
#[async_trait]
pub trait RuntimeGateway: Send + Sync {
    /// Liveness/reachability check.
    async fn ping(&self) -> Result<(), GatewayError>;

    /// All containers, including stopped ones.
    async fn list_containers(&self) -> Result<Vec<RawContainer>, GatewayError>;

    /// One-shot resource counters for a container.
    async fn stats(&self, container_id: &str) -> Result<StatsSample, GatewayError>;

    /// Declared environment and port bindings for a container.
    async fn inspect(&self, container_id: &str) -> Result<InspectDetails, GatewayError>;
}
