// crates/artledger-registry/src/testing.rs
//
// Test doubles shared by the registry unit tests.

use std::sync::atomic::{AtomicBool, Ordering};

use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::{RegistryStore, StateWrite};
use artledger_core::types::{
    Artist, Artwork, ArtworkId, Authentication, Authenticator, BlockHeight,
};
use artledger_store::MemoryStore;

/// `MemoryStore` whose commits can be switched to fail.
///
/// A failing commit applies nothing, like a rejected RocksDB batch.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_commits: AtomicBool,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.fail_commits.store(failing, Ordering::SeqCst);
    }
}

impl RegistryStore for FailingStore {
    fn get_artist(&self, id: &Principal) -> Result<Option<Artist>, RegistryError> {
        self.inner.get_artist(id)
    }

    fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RegistryError> {
        self.inner.get_artwork(id)
    }

    fn get_authenticator(&self, id: &Principal) -> Result<Option<Authenticator>, RegistryError> {
        self.inner.get_authenticator(id)
    }

    fn get_authentication(&self, id: ArtworkId) -> Result<Option<Authentication>, RegistryError> {
        self.inner.get_authentication(id)
    }

    fn artwork_counter(&self) -> Result<u64, RegistryError> {
        self.inner.artwork_counter()
    }

    fn last_height(&self) -> Result<BlockHeight, RegistryError> {
        self.inner.last_height()
    }

    fn commit(&self, writes: Vec<StateWrite>) -> Result<(), RegistryError> {
        if self.fail_commits.load(Ordering::SeqCst) {
            return Err(RegistryError::Storage("Injected commit failure".to_string()));
        }
        self.inner.commit(writes)
    }
}
