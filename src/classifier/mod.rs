// Image-name classification and kind-specific detail extraction.
//
// The registry is an ordered list of plain data entries; adding a workload means adding one
// rule module and one line in `registry.rs`.

mod env;
mod registry;
mod rules;

pub use env::{EnvMap, first_host_port, parse_env, parse_port};
pub use registry::default_registry;

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::gateway::{HostBinding, InspectDetails, RuntimeGateway};
use crate::models::{Container, ContainerKind, ContainerRef, DetailFields};

/// Replacement shown for secret values when masking is enabled.
pub const MASKED: &str = "********";

/// Builds detail fields from the facts known about one container.
pub type Extractor = fn(&Facts<'_>) -> DetailFields;

/// One recognized workload: which images it claims and how to describe them.
#[derive(Clone, Copy)]
pub struct ClassifierEntry {
    pub kind: ContainerKind,
    /// Lowercase substrings; the entry matches an image containing any of them.
    pub needles: &'static [&'static str],
    pub extract: Extractor,
    /// Detail labels whose values are credentials.
    pub secrets: &'static [&'static str],
}

impl ClassifierEntry {
    /// `image_lower` must already be lowercased.
    pub fn matches(&self, image_lower: &str) -> bool {
        self.needles.iter().any(|n| image_lower.contains(n))
    }
}

impl std::fmt::Debug for ClassifierEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierEntry")
            .field("kind", &self.kind)
            .field("needles", &self.needles)
            .finish_non_exhaustive()
    }
}

/// Everything an extractor may look at. Env and ports are empty when inspect failed.
pub struct Facts<'a> {
    pub raw: &'a ContainerRef,
    pub base: &'a Container,
    env: EnvMap,
    ports: BTreeMap<String, Vec<HostBinding>>,
}

impl<'a> Facts<'a> {
    pub fn new(raw: &'a ContainerRef, base: &'a Container, inspect: InspectDetails) -> Self {
        Self {
            raw,
            base,
            env: parse_env(inspect.env.as_slice()),
            ports: inspect.ports,
        }
    }

    /// Non-empty value of an environment variable.
    pub fn env(&self, key: &str) -> Option<&str> {
        self.env
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// First of `keys` with a non-empty value.
    pub fn env_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.env(k))
    }

    /// Positive integer value of an environment variable.
    pub fn env_number(&self, key: &str) -> Option<u64> {
        self.env(key)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|n| *n > 0)
    }

    /// First bound host port for `"<containerPort>/<proto>"`.
    pub fn host_port(&self, key: &str) -> Option<u16> {
        self.ports.get(key).and_then(|b| first_host_port(b))
    }

    /// First of `keys` with a bound host port.
    pub fn host_port_any(&self, keys: &[&str]) -> Option<u16> {
        keys.iter().find_map(|k| self.host_port(k))
    }

    /// Every bound host port, ascending and deduplicated.
    pub fn host_ports(&self) -> Vec<u16> {
        let mut ports: Vec<u16> = self
            .ports
            .values()
            .filter_map(|b| first_host_port(b))
            .collect();
        ports.sort_unstable();
        ports.dedup();
        ports
    }

    pub fn image_lower(&self) -> String {
        self.base.image.to_lowercase()
    }
}

/// Collects labelled values, skipping the ones that are absent.
#[derive(Debug, Default)]
pub struct DetailsBuilder {
    fields: DetailFields,
}

impl DetailsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, label: &str, value: Option<&str>) -> Self {
        if let Some(v) = value.filter(|v| !v.is_empty()) {
            self.fields.insert(label.to_string(), v.to_string());
        }
        self
    }

    pub fn number<T: Display>(mut self, label: &str, value: Option<T>) -> Self {
        if let Some(v) = value {
            self.fields.insert(label.to_string(), v.to_string());
        }
        self
    }

    /// Comma-separated list; omitted when empty.
    pub fn list<T: Display>(mut self, label: &str, values: &[T]) -> Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            self.fields.insert(label.to_string(), joined);
        }
        self
    }

    pub fn build(self) -> DetailFields {
        self.fields
    }
}

/// Ordered registry of workload entries; read-only after construction.
#[derive(Debug)]
pub struct Classifier {
    entries: Vec<ClassifierEntry>,
    mask_secrets: bool,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

impl Classifier {
    pub fn new(entries: Vec<ClassifierEntry>) -> Self {
        Self {
            entries,
            mask_secrets: false,
        }
    }

    pub fn with_secret_masking(mut self, mask_secrets: bool) -> Self {
        self.mask_secrets = mask_secrets;
        self
    }

    pub fn entries(&self) -> &[ClassifierEntry] {
        &self.entries
    }

    /// Kind of the first entry matching `image` (case-insensitive), else `Generic`.
    pub fn classify(&self, image: &str) -> ContainerKind {
        let image = image.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.matches(&image))
            .map_or(ContainerKind::Generic, |e| e.kind)
    }

    pub fn entry(&self, kind: ContainerKind) -> Option<&ClassifierEntry> {
        self.entries.iter().find(|e| e.kind == kind)
    }

    /// Inspects the container once and runs the kind's extractor.
    ///
    /// Never fails: when inspect errors, the extractor sees only the listing and base
    /// record, so fields derivable from those still come through.
    pub async fn extract(
        &self,
        kind: ContainerKind,
        container_id: &str,
        raw: &ContainerRef,
        base: &Container,
        gateway: &dyn RuntimeGateway,
    ) -> DetailFields {
        let Some(entry) = self.entry(kind) else {
            return DetailFields::new();
        };

        let inspect = match gateway.inspect(container_id).await {
            Ok(details) => details,
            Err(e) => {
                tracing::debug!(
                    container_id = %container_id,
                    kind = %kind,
                    error = %e,
                    operation = "inspect",
                    "inspect failed; extracting from listing only"
                );
                InspectDetails::default()
            }
        };

        let facts = Facts::new(raw, base, inspect);
        let mut fields = (entry.extract)(&facts);
        if self.mask_secrets {
            for label in entry.secrets {
                if let Some(value) = fields.get_mut(*label) {
                    *value = MASKED.to_string();
                }
            }
        }
        fields
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Runs `entry`'s extractor against a synthetic inspect result.
    pub(crate) fn extract_with(
        entry: &ClassifierEntry,
        image: &str,
        env: &[&str],
        ports: &[(&str, &str)],
    ) -> DetailFields {
        let raw = ContainerRef {
            id: "c0ffee".into(),
            names: vec!["/svc".into()],
            image: image.into(),
            status: "running".into(),
        };
        let base = raw.to_record(0.0, 0);
        let mut port_map: BTreeMap<String, Vec<HostBinding>> = BTreeMap::new();
        for (key, host_port) in ports {
            port_map.entry(key.to_string()).or_default().push(HostBinding {
                host_ip: Some("0.0.0.0".into()),
                host_port: Some(host_port.to_string()),
            });
        }
        let inspect = InspectDetails {
            env: env.iter().map(|e| e.to_string()).collect(),
            ports: port_map,
        };
        (entry.extract)(&Facts::new(&raw, &base, inspect))
    }

    pub(crate) fn fields(pairs: &[(&str, &str)]) -> DetailFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
