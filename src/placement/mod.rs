mod config;
mod frontier;
mod layout;
mod staging;
mod store;
mod validate;
mod walk;

pub use config::{AreaExtents, GeneratorConfig};
pub use frontier::{ConnectorRef, Frontier, FrontierEntry};
pub use layout::{Join, Layout, Termination, WalkStats};
pub use staging::StagedStructure;
pub use store::{StructureId, StructureInstance, StructureStore};
pub use validate::{RejectReason, RoomValidator};
pub use walk::{BranchOutcome, DungeonWalk};
