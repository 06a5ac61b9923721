// crates/artledger-registry/src/shared.rs
//
// SharedRegistry: one registry behind one global async lock.
//
// Cross-entity checks (verified artist before artwork, verified
// authenticator before assessment) read two maps within one operation, so
// concurrent callers are serialized over the whole registry, not per map.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::RegistryStore;
use artledger_core::types::{
    Artist, Artwork, ArtworkId, Assessment, Authentication, Authenticator, NewArtwork,
};

use crate::registry::Registry;

/// Cloneable handle serializing every operation through one mutex.
pub struct SharedRegistry<S> {
    inner: Arc<Mutex<Registry<S>>>,
}

impl<S> Clone for SharedRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: RegistryStore> SharedRegistry<S> {
    pub fn new(registry: Registry<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Hold the lock across several operations.
    pub async fn lock(&self) -> MutexGuard<'_, Registry<S>> {
        self.inner.lock().await
    }

    pub async fn register_artist(
        &self,
        caller: &Principal,
        name: impl Into<String>,
        biography: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.inner.lock().await.register_artist(caller, name, biography)
    }

    pub async fn verify_artist(
        &self,
        caller: &Principal,
        target: &Principal,
    ) -> Result<(), RegistryError> {
        self.inner.lock().await.verify_artist(caller, target)
    }

    pub async fn get_artist(&self, id: &Principal) -> Result<Option<Artist>, RegistryError> {
        self.inner.lock().await.get_artist(id)
    }

    pub async fn register_artwork(
        &self,
        caller: &Principal,
        artwork: NewArtwork,
    ) -> Result<ArtworkId, RegistryError> {
        self.inner.lock().await.register_artwork(caller, artwork)
    }

    pub async fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RegistryError> {
        self.inner.lock().await.get_artwork(id)
    }

    pub async fn get_artwork_count(&self) -> Result<u64, RegistryError> {
        self.inner.lock().await.get_artwork_count()
    }

    pub async fn register_authenticator(
        &self,
        caller: &Principal,
        name: impl Into<String>,
        credentials: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.inner
            .lock()
            .await
            .register_authenticator(caller, name, credentials)
    }

    pub async fn verify_authenticator(
        &self,
        caller: &Principal,
        target: &Principal,
    ) -> Result<(), RegistryError> {
        self.inner.lock().await.verify_authenticator(caller, target)
    }

    pub async fn get_authenticator(
        &self,
        id: &Principal,
    ) -> Result<Option<Authenticator>, RegistryError> {
        self.inner.lock().await.get_authenticator(id)
    }

    pub async fn authenticate_artwork(
        &self,
        caller: &Principal,
        assessment: Assessment,
    ) -> Result<(), RegistryError> {
        self.inner.lock().await.authenticate_artwork(caller, assessment)
    }

    pub async fn get_authentication(
        &self,
        artwork_id: ArtworkId,
    ) -> Result<Option<Authentication>, RegistryError> {
        self.inner.lock().await.get_authentication(artwork_id)
    }
}
