// Shared test helpers: a scripted RuntimeGateway

#![allow(dead_code)]

use async_trait::async_trait;
use dockdeck::gateway::{
    GatewayError, HostBinding, InspectDetails, RawContainer, RuntimeGateway, StatsSample,
};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// In-memory runtime. Stats are served from a per-container script; once a script runs
/// dry its last sample is repeated.
#[derive(Default)]
pub struct MockGateway {
    containers: Vec<RawContainer>,
    fail_list: bool,
    fail_ping: bool,
    list_delay: Duration,
    stats_delay: Duration,
    stats: Mutex<HashMap<String, VecDeque<StatsSample>>>,
    last_stats: Mutex<HashMap<String, StatsSample>>,
    fail_stats: HashSet<String>,
    panic_stats: HashSet<String>,
    inspect: HashMap<String, InspectDetails>,
    fail_inspect: HashSet<String>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    list_calls: AtomicUsize,
    stats_calls: AtomicUsize,
    inspect_calls: Mutex<Vec<String>>,
}

pub fn sample(cpu_total: u64, system_cpu: u64, online_cpus: u64, memory_usage: u64) -> StatsSample {
    StatsSample {
        cpu_total,
        percpu_count: online_cpus as usize,
        system_cpu,
        online_cpus,
        memory_usage,
    }
}

pub fn raw(id: &str, name: &str, image: &str) -> RawContainer {
    RawContainer {
        id: Some(id.to_string()),
        names: Some(vec![format!("/{name}")]),
        image: Some(image.to_string()),
        state: Some("running".to_string()),
        status: Some("Up 5 minutes".to_string()),
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: &str, name: &str, image: &str) -> Self {
        self.containers.push(raw(id, name, image));
        self
    }

    pub fn with_raw(mut self, container: RawContainer) -> Self {
        self.containers.push(container);
        self
    }

    pub fn with_stats(self, id: &str, samples: &[StatsSample]) -> Self {
        self.stats
            .lock()
            .unwrap()
            .insert(id.to_string(), samples.iter().copied().collect());
        self
    }

    pub fn with_inspect(mut self, id: &str, env: &[&str], ports: &[(&str, &str)]) -> Self {
        let mut port_map: BTreeMap<String, Vec<HostBinding>> = BTreeMap::new();
        for (key, host_port) in ports {
            port_map
                .entry(key.to_string())
                .or_default()
                .push(HostBinding {
                    host_ip: Some("0.0.0.0".to_string()),
                    host_port: Some(host_port.to_string()),
                });
        }
        self.inspect.insert(
            id.to_string(),
            InspectDetails {
                env: env.iter().map(|e| e.to_string()).collect(),
                ports: port_map,
            },
        );
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_ping(mut self) -> Self {
        self.fail_ping = true;
        self
    }

    pub fn failing_stats(mut self, id: &str) -> Self {
        self.fail_stats.insert(id.to_string());
        self
    }

    pub fn panicking_stats(mut self, id: &str) -> Self {
        self.panic_stats.insert(id.to_string());
        self
    }

    pub fn failing_inspect(mut self, id: &str) -> Self {
        self.fail_inspect.insert(id.to_string());
        self
    }

    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = delay;
        self
    }

    pub fn with_stats_delay(mut self, delay: Duration) -> Self {
        self.stats_delay = delay;
        self
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }

    pub fn inspect_calls(&self) -> Vec<String> {
        self.inspect_calls.lock().unwrap().clone()
    }

    fn next_sample(&self, id: &str) -> StatsSample {
        let next = self
            .stats
            .lock()
            .unwrap()
            .get_mut(id)
            .and_then(|script| script.pop_front());
        let mut last = self.last_stats.lock().unwrap();
        match next {
            Some(s) => {
                last.insert(id.to_string(), s);
                s
            }
            None => last.get(id).copied().unwrap_or_default(),
        }
    }
}

#[async_trait]
impl RuntimeGateway for MockGateway {
    async fn ping(&self) -> Result<(), GatewayError> {
        if self.fail_ping {
            return Err(GatewayError::Unavailable("mock daemon down".into()));
        }
        Ok(())
    }

    async fn list_containers(&self) -> Result<Vec<RawContainer>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if !self.list_delay.is_zero() {
            tokio::time::sleep(self.list_delay).await;
        }
        if self.fail_list {
            return Err(GatewayError::Unavailable("mock list failure".into()));
        }
        Ok(self.containers.clone())
    }

    async fn stats(&self, container_id: &str) -> Result<StatsSample, GatewayError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        if self.panic_stats.contains(container_id) {
            panic!("scripted stats panic for {container_id}");
        }
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.stats_delay.is_zero() {
            tokio::time::sleep(self.stats_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.fail_stats.contains(container_id) {
            return Err(GatewayError::EmptyStats(container_id.to_string()));
        }
        Ok(self.next_sample(container_id))
    }

    async fn inspect(&self, container_id: &str) -> Result<InspectDetails, GatewayError> {
        self.inspect_calls
            .lock()
            .unwrap()
            .push(container_id.to_string());
        if self.fail_inspect.contains(container_id) {
            return Err(GatewayError::Unavailable("mock inspect failure".into()));
        }
        Ok(self.inspect.get(container_id).cloned().unwrap_or_default())
    }
}
