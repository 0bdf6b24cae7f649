// Published inventory snapshot

use serde::{Deserialize, Serialize};

use super::{Container, ContainerState};

/// Result of one successful collection cycle, as published to consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    /// Unix millis at the end of the cycle.
    pub timestamp: u64,
    pub containers: Vec<Container>,
}

impl InventorySnapshot {
    pub fn running_count(&self) -> usize {
        self.containers
            .iter()
            .filter(|c| c.state() == ContainerState::Running)
            .count()
    }

    pub fn classified_count(&self) -> usize {
        self.containers
            .iter()
            .filter(|c| !c.kind.is_generic())
            .count()
    }
}
