use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

use super::{Connector, ConnectorDef, Polarity};

/// What a structure counts as during placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructureKind {
    /// Counts toward the room target and is distance/bounds checked.
    Room,
    /// Placed without validation and never counted.
    Corridor,
}

/// A placeable structure definition with a fixed set of connectors.
#[derive(Debug, Clone, Serialize)]
pub struct StructureTemplate {
    name: String,
    kind: StructureKind,
    connectors: Vec<Connector>,
}

impl StructureTemplate {
    /// Creates a template.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NoConnectors` if `connectors` is empty.
    pub fn new(
        name: impl Into<String>,
        kind: StructureKind,
        connectors: Vec<Connector>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        if connectors.is_empty() {
            return Err(CatalogError::NoConnectors(name));
        }
        Ok(Self {
            name,
            kind,
            connectors,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> StructureKind {
        self.kind
    }

    #[must_use]
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Indices of the connectors that can join a connector of `polarity`.
    #[must_use]
    pub fn compatible_with(&self, polarity: Polarity) -> Vec<usize> {
        self.connectors
            .iter()
            .enumerate()
            .filter(|(_, c)| c.polarity().can_join(polarity))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Authoring form of a template, as read from a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TemplateDef {
    name: String,
    connectors: Vec<ConnectorDef>,
}

impl TemplateDef {
    pub(crate) fn build(&self, kind: StructureKind) -> Result<StructureTemplate, CatalogError> {
        let connectors = self
            .connectors
            .iter()
            .map(|c| c.build(&self.name))
            .collect::<Result<Vec<_>, _>>()?;
        StructureTemplate::new(self.name.clone(), kind, connectors)
    }
}
