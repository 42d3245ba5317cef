use serde::Serialize;

use crate::connector::StructureKind;
use crate::error::{OperationError, Result};
use crate::math::Isometry3;

use super::{ConnectorRef, StructureId, StructureInstance, StructureStore};

/// A committed join between an existing connector and a new structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Join {
    /// The frontier connector that was consumed.
    pub base: ConnectorRef,
    /// The connector on the newly placed structure.
    pub attached: ConnectorRef,
}

/// Why the walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Termination {
    /// The room target was met.
    TargetReached,
    /// No unused connector was left to build from.
    FrontierExhausted,
    /// The iteration cap was hit first.
    IterationCap,
}

/// Counters describing one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    /// Connectors consumed as join bases.
    pub iterations: usize,
    /// Branch attempts across all iterations.
    pub branches: usize,
    pub rooms_placed: usize,
    pub corridors_placed: usize,
    /// Branches skipped because the candidate had no connector of the
    /// opposite polarity.
    pub skipped_polarity: usize,
    pub rejected_too_close: usize,
    pub rejected_out_of_bounds: usize,
}

/// The output of a dungeon walk.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub(crate) structures: StructureStore,
    pub(crate) start: StructureId,
    pub(crate) joins: Vec<Join>,
    pub(crate) open_connectors: Vec<ConnectorRef>,
    pub(crate) termination: Termination,
    pub(crate) stats: WalkStats,
}

impl Layout {
    /// Every placed structure.
    #[must_use]
    pub fn structures(&self) -> &StructureStore {
        &self.structures
    }

    /// The start room, placed at the origin.
    #[must_use]
    pub fn start(&self) -> StructureId {
        self.start
    }

    /// Rooms in placement order, starting with the start room.
    pub fn rooms(&self) -> impl Iterator<Item = (StructureId, &StructureInstance)> {
        self.structures.of_kind(StructureKind::Room)
    }

    /// Corridors in placement order.
    pub fn corridors(&self) -> impl Iterator<Item = (StructureId, &StructureInstance)> {
        self.structures.of_kind(StructureKind::Corridor)
    }

    /// Number of rooms, including the start room.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms().count()
    }

    #[must_use]
    pub fn corridor_count(&self) -> usize {
        self.corridors().count()
    }

    /// Connector pairs joined during the walk, in commit order.
    #[must_use]
    pub fn joins(&self) -> &[Join] {
        &self.joins
    }

    /// Connectors left unjoined, e.g. for capping with walls.
    #[must_use]
    pub fn open_connectors(&self) -> &[ConnectorRef] {
        &self.open_connectors
    }

    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    #[must_use]
    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// World frame of a connector on a placed structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the structure or connector does not exist.
    pub fn connector_world_frame(&self, at: ConnectorRef) -> Result<Isometry3> {
        let frame = self
            .structures
            .get(at.structure)?
            .connector_world_frame(at.connector)
            .ok_or_else(|| OperationError::EntityNotFound("connector".into()))?;
        Ok(frame)
    }
}
