use serde::Serialize;
use slotmap::SlotMap;

use crate::connector::{Connector, StructureKind, StructureTemplate};
use crate::error::OperationError;
use crate::math::{Isometry3, Point3};

slotmap::new_key_type! {
    /// Unique identifier for a placed structure.
    pub struct StructureId;
}

/// A structure placed in the world, with its own copy of its template's
/// connectors.
#[derive(Debug, Clone, Serialize)]
pub struct StructureInstance {
    template: String,
    kind: StructureKind,
    transform: Isometry3,
    connectors: Vec<Connector>,
}

impl StructureInstance {
    /// Instantiates `template` at `transform`.
    #[must_use]
    pub fn from_template(template: &StructureTemplate, transform: Isometry3) -> Self {
        Self {
            template: template.name().to_owned(),
            kind: template.kind(),
            transform,
            connectors: template.connectors().to_vec(),
        }
    }

    /// Name of the template this was built from.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    #[must_use]
    pub fn transform(&self) -> &Isometry3 {
        &self.transform
    }

    /// World position of the structure origin.
    #[must_use]
    pub fn position(&self) -> Point3 {
        Point3::from(self.transform.translation.vector)
    }

    #[must_use]
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// World frame of connector `index`, if it exists.
    #[must_use]
    pub fn connector_world_frame(&self, index: usize) -> Option<Isometry3> {
        self.connectors
            .get(index)
            .map(|c| c.world_frame(&self.transform))
    }
}

/// Arena that owns every committed structure.
///
/// Structures are never removed, so handles stay valid for the lifetime of
/// the store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StructureStore {
    structures: SlotMap<StructureId, StructureInstance>,
}

impl StructureStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a structure and returns its ID.
    pub(crate) fn insert(&mut self, instance: StructureInstance) -> StructureId {
        self.structures.insert(instance)
    }

    /// Returns the structure, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn get(&self, id: StructureId) -> Result<&StructureInstance, OperationError> {
        self.structures
            .get(id)
            .ok_or_else(|| OperationError::EntityNotFound("structure".into()))
    }

    /// Number of structures of every kind.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }

    /// All structures in placement order.
    pub fn iter(&self) -> impl Iterator<Item = (StructureId, &StructureInstance)> {
        self.structures.iter()
    }

    /// Structures of one kind in placement order.
    pub fn of_kind(
        &self,
        kind: StructureKind,
    ) -> impl Iterator<Item = (StructureId, &StructureInstance)> {
        self.iter().filter(move |(_, s)| s.kind() == kind)
    }
}
