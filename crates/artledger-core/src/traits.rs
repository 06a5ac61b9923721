// crates/artledger-core/src/traits.rs

use crate::error::RegistryError;
use crate::identity::Principal;
use crate::types::{Artist, Artwork, ArtworkId, Authentication, Authenticator, BlockHeight};

/// A single pending mutation of registry state.
///
/// Operations collect their writes and hand them to
/// [`RegistryStore::commit`] in one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateWrite {
    PutArtist(Principal, Artist),
    PutArtwork(ArtworkId, Artwork),
    PutAuthenticator(Principal, Authenticator),
    PutAuthentication(ArtworkId, Authentication),
    /// New value of the artwork sequence counter.
    SetArtworkCounter(u64),
    /// Highest clock reading stamped on a record so far.
    SetLastHeight(BlockHeight),
}

/// Durable key-value state behind the registry: four maps, the artwork counter,
/// and the clock high-water mark.
///
/// Implemented by artledger-store (in-memory and RocksDB backends).
pub trait RegistryStore: Send + Sync {
    /// Retrieve the artist record for a principal.
    fn get_artist(&self, id: &Principal) -> Result<Option<Artist>, RegistryError>;

    /// Retrieve an artwork by ID.
    fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RegistryError>;

    /// Retrieve the authenticator record for a principal.
    fn get_authenticator(&self, id: &Principal) -> Result<Option<Authenticator>, RegistryError>;

    /// Retrieve the authentication recorded for an artwork ID.
    fn get_authentication(&self, id: ArtworkId) -> Result<Option<Authentication>, RegistryError>;

    /// Current artwork sequence counter. Zero on a fresh store.
    fn artwork_counter(&self) -> Result<u64, RegistryError>;

    /// Highest clock reading stamped on any record. Zero on a fresh store.
    fn last_height(&self) -> Result<BlockHeight, RegistryError>;

    /// Apply every write in `writes` atomically: all of them or none.
    fn commit(&self, writes: Vec<StateWrite>) -> Result<(), RegistryError>;
}
