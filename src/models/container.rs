// Container inventory records

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ContainerKind;
use crate::gateway::RawContainer;

/// Kind-specific facts keyed by display label (e.g. "Port" -> "5432").
pub type DetailFields = BTreeMap<String, String>;

/// Container lifecycle state; serializes to lowercase JSON (e.g. "running").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerState {
    Created,
    Running,
    Paused,
    Restarting,
    Exited,
    Dead,
    #[serde(other)]
    Unknown,
}

impl ContainerState {
    /// Parse from the runtime's state string (e.g. "running", "exited").
    pub fn from_runtime(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "created" => ContainerState::Created,
            "running" => ContainerState::Running,
            "paused" => ContainerState::Paused,
            "restarting" => ContainerState::Restarting,
            "exited" => ContainerState::Exited,
            "dead" => ContainerState::Dead,
            _ => ContainerState::Unknown,
        }
    }
}

/// One classified container as produced by a collection cycle.
///
/// Records are built fresh every cycle and never mutated once handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: String,
    /// Display names as reported by the runtime; the first is canonical.
    pub names: Vec<String>,
    pub image: String,
    /// Lower-cased lifecycle status ("running", "exited", ...).
    pub status: String,
    pub cpu_percent: f64,
    pub memory_mb: u64,
    pub kind: ContainerKind,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: DetailFields,
}

impl Container {
    /// First display name without the runtime's leading '/', or the id when unnamed.
    pub fn canonical_name(&self) -> &str {
        self.names
            .first()
            .map(|n| n.trim_start_matches('/'))
            .filter(|n| !n.is_empty())
            .unwrap_or(self.id.as_str())
    }

    pub fn state(&self) -> ContainerState {
        ContainerState::from_runtime(&self.status)
    }
}

/// The listing fields a collection unit starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRef {
    pub id: String,
    pub names: Vec<String>,
    pub image: String,
    pub status: String,
}

impl ContainerRef {
    /// Normalizes a listing entry; missing fields become empty.
    /// The lifecycle state wins over the human status text.
    pub fn from_raw(raw: RawContainer) -> Self {
        let status = raw
            .state
            .filter(|s| !s.trim().is_empty())
            .or(raw.status)
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        Self {
            id: raw.id.unwrap_or_default(),
            names: raw.names.unwrap_or_default(),
            image: raw.image.unwrap_or_default(),
            status,
        }
    }

    /// Full record before classification.
    pub fn to_record(&self, cpu_percent: f64, memory_mb: u64) -> Container {
        Container {
            id: self.id.clone(),
            names: self.names.clone(),
            image: self.image.clone(),
            status: self.status.clone(),
            cpu_percent,
            memory_mb,
            kind: ContainerKind::Generic,
            details: DetailFields::new(),
        }
    }

    /// Record for a container whose stats could not be fetched.
    pub fn degraded(&self) -> Container {
        self.to_record(0.0, 0)
    }
}
