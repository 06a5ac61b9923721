// crates/artledger-registry/src/sequence.rs
//
// Ascending artwork ID allocation.
//
// IDs start at 1 and the counter doubles as the number of registered
// artworks. `reserve` hands out a reservation instead of writing the
// counter itself: the counter advance is committed in the same batch as the record
// it numbers, so a failed commit consumes nothing and leaves no gap.

use std::sync::Arc;

use artledger_core::error::RegistryError;
use artledger_core::traits::{RegistryStore, StateWrite};
use artledger_core::types::ArtworkId;

/// An allocated artwork ID together with the counter write that claims it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ArtworkId,
}

impl Reservation {
    /// The counter write to commit alongside the new record.
    pub fn into_write(self) -> StateWrite {
        StateWrite::SetArtworkCounter(self.id)
    }
}

/// Issues unique ascending artwork IDs from the store's counter.
pub struct SequenceAllocator<S> {
    store: Arc<S>,
}

impl<S: RegistryStore> SequenceAllocator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Reserve the next unused ID (1, 2, 3, ...).
    ///
    /// The counter only advances once the reservation's write is committed;
    /// until then the same ID is reserved again.
    pub fn reserve(&self) -> Result<Reservation, RegistryError> {
        let current = self.store.artwork_counter()?;
        let id = current
            .checked_add(1)
            .ok_or_else(|| RegistryError::Storage("Artwork ID sequence exhausted".to_string()))?;
        Ok(Reservation { id })
    }

    /// Number of IDs issued so far.
    pub fn count(&self) -> Result<u64, RegistryError> {
        self.store.artwork_counter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artledger_store::MemoryStore;

    #[test]
    fn test_first_reservation_is_one() {
        let sequence = SequenceAllocator::new(Arc::new(MemoryStore::new()));
        assert_eq!(sequence.count().unwrap(), 0);
        assert_eq!(sequence.reserve().unwrap().id, 1);
    }

    #[test]
    fn test_reserve_without_commit_does_not_advance() {
        let sequence = SequenceAllocator::new(Arc::new(MemoryStore::new()));
        let first = sequence.reserve().unwrap();
        let again = sequence.reserve().unwrap();
        assert_eq!(first, again);
        assert_eq!(sequence.count().unwrap(), 0);
    }

    #[test]
    fn test_committed_reservation_advances() {
        let store = Arc::new(MemoryStore::new());
        let sequence = SequenceAllocator::new(store.clone());
        for expected in 1..=3 {
            let reservation = sequence.reserve().unwrap();
            assert_eq!(reservation.id, expected);
            store.commit(vec![reservation.into_write()]).unwrap();
        }
        assert_eq!(sequence.count().unwrap(), 3);
    }
}
