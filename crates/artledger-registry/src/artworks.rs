// crates/artledger-registry/src/artworks.rs
//
// Artwork records attributed to verified artists.
//
// An artwork is stored under the next sequence ID, stamped with the clock
// reading at registration (never below an earlier stamp), and never
// changes afterwards. The artist is
// always the registering caller.

use std::sync::Arc;

use artledger_core::clock::Clock;
use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::{RegistryStore, StateWrite};
use artledger_core::types::{Artwork, ArtworkId, NewArtwork};

use crate::access::AccessControl;
use crate::artists::ArtistRegistry;
use crate::sequence::SequenceAllocator;
use crate::timestamp::Timestamper;

/// Artwork registry. Owns the artist registry it depends on.
pub struct ArtworkRegistry<S> {
    store: Arc<S>,
    artists: ArtistRegistry<S>,
    sequence: SequenceAllocator<S>,
    timestamper: Timestamper<S>,
}

impl<S: RegistryStore> ArtworkRegistry<S> {
    pub fn new(store: Arc<S>, access: AccessControl, clock: Arc<dyn Clock>) -> Self {
        Self {
            artists: ArtistRegistry::new(store.clone(), access),
            sequence: SequenceAllocator::new(store.clone()),
            timestamper: Timestamper::new(store.clone(), clock),
            store,
        }
    }

    pub fn artists(&self) -> &ArtistRegistry<S> {
        &self.artists
    }

    pub fn artists_mut(&mut self) -> &mut ArtistRegistry<S> {
        &mut self.artists
    }

    /// Register an artwork attributed to the caller.
    ///
    /// The ID is allocated only after the caller's verified status has been
    /// checked, so a rejected call never consumes one.
    ///
    /// # Errors
    /// Returns `RegistryError::Unauthorized` if the caller has no artist record
    /// or has one that is not yet verified.
    pub fn register_artwork(
        &mut self,
        caller: &Principal,
        artwork: NewArtwork,
    ) -> Result<ArtworkId, RegistryError> {
        self.artists.ensure_verified(caller)?;

        let reservation = self.sequence.reserve()?;
        let stamp = self.timestamper.stamp()?;
        let id = reservation.id;
        let record = artwork.into_artwork(*caller, stamp.height);
        let registered_at = record.registered_at;

        self.store.commit(vec![
            reservation.into_write(),
            stamp.into_write(),
            StateWrite::PutArtwork(id, record),
        ])?;

        tracing::info!(artwork_id = id, artist = %caller, registered_at, "Artwork registered");
        Ok(id)
    }

    /// Look up an artwork. `None` for IDs never issued.
    pub fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RegistryError> {
        self.store.get_artwork(id)
    }

    /// Number of artworks registered so far.
    pub fn get_artwork_count(&self) -> Result<u64, RegistryError> {
        self.sequence.count()
    }
}
