// Domain models

mod container;
mod inventory;
mod kind;

pub use container::{Container, ContainerRef, ContainerState, DetailFields};
pub use inventory::InventorySnapshot;
pub use kind::ContainerKind;
