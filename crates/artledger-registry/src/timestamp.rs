// crates/artledger-registry/src/timestamp.rs
//
// Record timestamps that never go backwards across restarts.
//
// A fresh process builds a fresh clock, so an in-memory clamp is not
// enough. The highest height stamped so far is kept in the store and
// committed in the same batch as the record it stamps; a clock reading
// below it is raised to it.

use std::sync::Arc;

use artledger_core::clock::Clock;
use artledger_core::error::RegistryError;
use artledger_core::traits::{RegistryStore, StateWrite};
use artledger_core::types::BlockHeight;

/// A height to stamp on a record, with the write that records it as the
/// new high-water mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub height: BlockHeight,
}

impl Stamp {
    /// The high-water mark write to commit alongside the stamped record.
    pub fn into_write(self) -> StateWrite {
        StateWrite::SetLastHeight(self.height)
    }
}

/// Reads the injected clock, clamped to the store's high-water mark.
pub struct Timestamper<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S: RegistryStore> Timestamper<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Height for the next record: the clock reading, or the last stamped
    /// height if the clock reads lower.
    pub fn stamp(&self) -> Result<Stamp, RegistryError> {
        let reading = self.clock.height();
        let last = self.store.last_height()?;
        if reading < last {
            tracing::warn!(reading, last, "Clock behind last stamped height; clamping");
        }
        Ok(Stamp {
            height: reading.max(last),
        })
    }

    /// Highest height stamped on any record so far.
    pub fn last_height(&self) -> Result<BlockHeight, RegistryError> {
        self.store.last_height()
    }
}
