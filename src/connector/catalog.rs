use serde::Deserialize;

use crate::error::CatalogError;

use super::template::TemplateDef;
use super::{StructureKind, StructureTemplate};

/// The set of structures a dungeon is built from: one room template and
/// one or more corridor templates.
#[derive(Debug, Clone)]
pub struct Catalog {
    room: StructureTemplate,
    corridors: Vec<StructureTemplate>,
}

#[derive(Debug, Deserialize)]
struct CatalogDef {
    room: TemplateDef,
    #[serde(default)]
    corridors: Vec<TemplateDef>,
}

impl Catalog {
    /// Creates a catalog.
    ///
    /// The room template is re-tagged as [`StructureKind::Room`] and every
    /// corridor as [`StructureKind::Corridor`], whatever they were built as.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoCorridors` if `corridors` is empty.
    pub fn new(
        room: StructureTemplate,
        corridors: Vec<StructureTemplate>,
    ) -> Result<Self, CatalogError> {
        if corridors.is_empty() {
            return Err(CatalogError::NoCorridors);
        }
        let retag = |t: StructureTemplate, kind| {
            StructureTemplate::new(t.name().to_owned(), kind, t.connectors().to_vec())
        };
        Ok(Self {
            room: retag(room, StructureKind::Room)?,
            corridors: corridors
                .into_iter()
                .map(|t| retag(t, StructureKind::Corridor))
                .collect::<Result<_, _>>()?,
        })
    }

    /// Parses a catalog from TOML.
    ///
    /// ```toml
    /// [room]
    /// name = "room"
    /// connectors = [
    ///     { name = "north", polarity = "male", position = [0.0, 0.0, 3.0] },
    ///     { name = "south", polarity = "female", position = [0.0, 0.0, -3.0] },
    /// ]
    ///
    /// [[corridors]]
    /// name = "straight"
    /// connectors = [
    ///     { name = "in", polarity = "female", position = [0.0, 0.0, -2.0] },
    ///     { name = "out", polarity = "male", position = [0.0, 0.0, 2.0] },
    /// ]
    /// ```
    ///
    /// `forward` defaults to `[0, 0, 1]` and `up` to `[0, 1, 0]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this layout, a
    /// template has no connectors, a connector frame is degenerate, or there
    /// are no corridors.
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let def: CatalogDef = toml::from_str(text)?;
        let room = def.room.build(StructureKind::Room)?;
        let corridors = def
            .corridors
            .iter()
            .map(|c| c.build(StructureKind::Corridor))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(room, corridors)
    }

    /// The room template.
    #[must_use]
    pub fn room(&self) -> &StructureTemplate {
        &self.room
    }

    /// The corridor templates, never empty.
    #[must_use]
    pub fn corridors(&self) -> &[StructureTemplate] {
        &self.corridors
    }
}
