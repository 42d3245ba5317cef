use serde::Serialize;

use crate::connector::StructureKind;
use crate::math::Point3;

use super::{AreaExtents, GeneratorConfig, StructureStore};

/// Why a room placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum RejectReason {
    /// Closer than the minimum distance to an existing room.
    TooClose { distance: f64 },
    /// Outside the configured area on the X or Z axis.
    OutOfBounds,
}

/// Checks a candidate room position against the rooms already placed and
/// the area bounds. Corridors are ignored.
pub struct RoomValidator<'a> {
    store: &'a StructureStore,
    min_distance: f64,
    area: AreaExtents,
}

impl<'a> RoomValidator<'a> {
    #[must_use]
    pub fn new(store: &'a StructureStore, config: &GeneratorConfig) -> Self {
        Self {
            store,
            min_distance: config.min_room_distance,
            area: config.area,
        }
    }

    /// Accepts or rejects a room origin.
    ///
    /// # Errors
    ///
    /// Returns the first failed rule: distance is checked before bounds.
    pub fn check(&self, position: &Point3) -> Result<(), RejectReason> {
        for (_, room) in self.store.of_kind(StructureKind::Room) {
            let distance = nalgebra::distance(&room.position(), position);
            if distance < self.min_distance {
                return Err(RejectReason::TooClose { distance });
            }
        }

        if position.x.abs() > self.area.width / 2.0 || position.z.abs() > self.area.depth / 2.0 {
            return Err(RejectReason::OutOfBounds);
        }
        Ok(())
    }
}
