// crates/artledger-store/src/memory.rs
//
// In-memory registry state. Data is lost on restart.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard};

use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::{RegistryStore, StateWrite};
use artledger_core::types::{
    Artist, Artwork, ArtworkId, Authentication, Authenticator, BlockHeight,
};

#[derive(Debug, Default)]
struct State {
    artists: HashMap<Principal, Artist>,
    artworks: HashMap<ArtworkId, Artwork>,
    authenticators: HashMap<Principal, Authenticator>,
    authentications: HashMap<ArtworkId, Authentication>,
    artwork_counter: u64,
    last_height: BlockHeight,
}

/// In-memory `RegistryStore`.
///
/// All state sits behind one lock, so a commit is applied under a single
/// write guard and readers never observe half a batch.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, State>, RegistryError> {
        self.state
            .read()
            .map_err(|_| RegistryError::Storage("Memory store lock poisoned".to_string()))
    }
}

impl RegistryStore for MemoryStore {
    fn get_artist(&self, id: &Principal) -> Result<Option<Artist>, RegistryError> {
        Ok(self.read()?.artists.get(id).cloned())
    }

    fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RegistryError> {
        Ok(self.read()?.artworks.get(&id).cloned())
    }

    fn get_authenticator(&self, id: &Principal) -> Result<Option<Authenticator>, RegistryError> {
        Ok(self.read()?.authenticators.get(id).cloned())
    }

    fn get_authentication(&self, id: ArtworkId) -> Result<Option<Authentication>, RegistryError> {
        Ok(self.read()?.authentications.get(&id).cloned())
    }

    fn artwork_counter(&self) -> Result<u64, RegistryError> {
        Ok(self.read()?.artwork_counter)
    }

    fn last_height(&self) -> Result<BlockHeight, RegistryError> {
        Ok(self.read()?.last_height)
    }

    fn commit(&self, writes: Vec<StateWrite>) -> Result<(), RegistryError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| RegistryError::Storage("Memory store lock poisoned".to_string()))?;

        for write in writes {
            match write {
                StateWrite::PutArtist(id, artist) => {
                    state.artists.insert(id, artist);
                }
                StateWrite::PutArtwork(id, artwork) => {
                    state.artworks.insert(id, artwork);
                }
                StateWrite::PutAuthenticator(id, authenticator) => {
                    state.authenticators.insert(id, authenticator);
                }
                StateWrite::PutAuthentication(id, authentication) => {
                    state.authentications.insert(id, authentication);
                }
                StateWrite::SetArtworkCounter(value) => {
                    state.artwork_counter = value;
                }
                StateWrite::SetLastHeight(height) => {
                    state.last_height = height;
                }
            }
        }
        Ok(())
    }
}
