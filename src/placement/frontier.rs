use serde::Serialize;

use crate::connector::Polarity;

use super::StructureId;

/// Identifies one connector on one placed structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ConnectorRef {
    pub structure: StructureId,
    pub connector: usize,
}

/// A connector that has been offered for joining.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrontierEntry {
    pub at: ConnectorRef,
    pub polarity: Polarity,
    used: bool,
}

impl FrontierEntry {
    /// Whether the entry has been consumed as a join base.
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.used
    }
}

/// Connectors available for future joins.
///
/// Entries are never removed; consuming one flips its `used` flag, which
/// never flips back. Slot indices are therefore stable.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an open connector.
    pub fn push_open(&mut self, at: ConnectorRef, polarity: Polarity) {
        self.entries.push(FrontierEntry {
            at,
            polarity,
            used: false,
        });
    }

    /// Slot indices of every unused entry, in insertion order.
    #[must_use]
    pub fn open_slots(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.used)
            .map(|(i, _)| i)
            .collect()
    }

    /// Marks the entry at `slot` as used and returns it.
    ///
    /// Returns `None` if the slot does not exist or was already used.
    pub fn consume(&mut self, slot: usize) -> Option<FrontierEntry> {
        let entry = self.entries.get_mut(slot).filter(|e| !e.used)?;
        entry.used = true;
        Some(*entry)
    }

    /// Every entry, used or not.
    #[must_use]
    pub fn entries(&self) -> &[FrontierEntry] {
        &self.entries
    }

    /// Connectors still open.
    #[must_use]
    pub fn open(&self) -> Vec<ConnectorRef> {
        self.entries
            .iter()
            .filter(|e| !e.used)
            .map(|e| e.at)
            .collect()
    }
}
