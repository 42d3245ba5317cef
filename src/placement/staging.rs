use crate::connector::{AlignConnector, StructureKind, StructureTemplate};
use crate::math::{Isometry3, Point3};

use super::{ConnectorRef, Frontier, StructureId, StructureInstance, StructureStore};

/// A candidate structure aligned onto a join target but not yet part of the
/// layout.
///
/// Nothing outside the candidate observes it until [`commit`] moves it into
/// the store; dropping it discards the attempt without a trace.
///
/// [`commit`]: StagedStructure::commit
#[derive(Debug)]
pub struct StagedStructure {
    instance: StructureInstance,
    joined: usize,
}

impl StagedStructure {
    /// Instantiates `template` and aligns its connector `joined` onto the
    /// world frame `target`.
    ///
    /// Returns `None` if `joined` is not a connector index of the template.
    #[must_use]
    pub fn attach(template: &StructureTemplate, joined: usize, target: &Isometry3) -> Option<Self> {
        let connector = template.connectors().get(joined)?;
        let transform = AlignConnector::new(Isometry3::identity(), connector, *target).execute();
        Some(Self {
            instance: StructureInstance::from_template(template, transform),
            joined,
        })
    }

    #[must_use]
    pub fn kind(&self) -> StructureKind {
        self.instance.kind()
    }

    /// World position of the candidate's origin.
    #[must_use]
    pub fn position(&self) -> Point3 {
        self.instance.position()
    }

    /// Index of the connector consumed by the join.
    #[must_use]
    pub fn joined(&self) -> usize {
        self.joined
    }

    #[must_use]
    pub fn instance(&self) -> &StructureInstance {
        &self.instance
    }

    /// Moves the candidate into `store` and opens every connector except
    /// the joined one.
    ///
    /// Returns a reference to the joined connector on the new structure.
    pub fn commit(self, store: &mut StructureStore, frontier: &mut Frontier) -> ConnectorRef {
        let polarities: Vec<_> = self
            .instance
            .connectors()
            .iter()
            .map(crate::connector::Connector::polarity)
            .collect();
        let structure: StructureId = store.insert(self.instance);

        for (connector, polarity) in polarities.into_iter().enumerate() {
            if connector != self.joined {
                frontier.push_open(ConnectorRef { structure, connector }, polarity);
            }
        }

        ConnectorRef {
            structure,
            connector: self.joined,
        }
    }
}
