// crates/artledger-registry/src/registry.rs
//
// Registry: both subsystems composed over one store, one owner gate, and
// one clock.
//
// Every operation takes the caller as its first argument. Mutators take
// `&mut self`, so a `Registry` is single-writer by construction; wrap it
// in `SharedRegistry` to serve concurrent callers.

use std::sync::Arc;

use artledger_core::clock::Clock;
use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::RegistryStore;
use artledger_core::types::{
    Artist, Artwork, ArtworkId, Assessment, Authentication, Authenticator, BlockHeight,
    NewArtwork,
};

use crate::access::AccessControl;
use crate::artworks::ArtworkRegistry;
use crate::authentications::AuthenticationRegistry;

/// The provenance registry.
pub struct Registry<S> {
    store: Arc<S>,
    access: AccessControl,
    artworks: ArtworkRegistry<S>,
    authentications: AuthenticationRegistry<S>,
}

impl<S: RegistryStore> Registry<S> {
    /// Build a registry over `store`, gated by `owner`, timestamped by `clock`.
    pub fn new(store: Arc<S>, owner: Principal, clock: Arc<dyn Clock>) -> Self {
        let access = AccessControl::new(owner);
        Self {
            artworks: ArtworkRegistry::new(store.clone(), access.clone(), clock.clone()),
            authentications: AuthenticationRegistry::new(store.clone(), access.clone(), clock),
            access,
            store,
        }
    }

    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    /// Highest height stamped on any record. New stamps never go below it.
    pub fn last_height(&self) -> Result<BlockHeight, RegistryError> {
        self.store.last_height()
    }

    // --- Artists ---------------------------------------------------------

    pub fn register_artist(
        &mut self,
        caller: &Principal,
        name: impl Into<String>,
        biography: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.artworks
            .artists_mut()
            .register_artist(caller, name, biography)
    }

    pub fn verify_artist(
        &mut self,
        caller: &Principal,
        target: &Principal,
    ) -> Result<(), RegistryError> {
        self.artworks.artists_mut().verify_artist(caller, target)
    }

    pub fn get_artist(&self, id: &Principal) -> Result<Option<Artist>, RegistryError> {
        self.artworks.artists().get_artist(id)
    }

    // --- Artworks --------------------------------------------------------

    pub fn register_artwork(
        &mut self,
        caller: &Principal,
        artwork: NewArtwork,
    ) -> Result<ArtworkId, RegistryError> {
        self.artworks.register_artwork(caller, artwork)
    }

    pub fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RegistryError> {
        self.artworks.get_artwork(id)
    }

    pub fn get_artwork_count(&self) -> Result<u64, RegistryError> {
        self.artworks.get_artwork_count()
    }

    // --- Authenticators --------------------------------------------------

    pub fn register_authenticator(
        &mut self,
        caller: &Principal,
        name: impl Into<String>,
        credentials: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.authentications
            .authenticators_mut()
            .register_authenticator(caller, name, credentials)
    }

    pub fn verify_authenticator(
        &mut self,
        caller: &Principal,
        target: &Principal,
    ) -> Result<(), RegistryError> {
        self.authentications
            .authenticators_mut()
            .verify_authenticator(caller, target)
    }

    pub fn get_authenticator(
        &self,
        id: &Principal,
    ) -> Result<Option<Authenticator>, RegistryError> {
        self.authentications.authenticators().get_authenticator(id)
    }

    // --- Authentications -------------------------------------------------

    pub fn authenticate_artwork(
        &mut self,
        caller: &Principal,
        assessment: Assessment,
    ) -> Result<(), RegistryError> {
        self.authentications.authenticate_artwork(caller, assessment)
    }

    pub fn get_authentication(
        &self,
        artwork_id: ArtworkId,
    ) -> Result<Option<Authentication>, RegistryError> {
        self.authentications.get_authentication(artwork_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artledger_core::clock::ManualClock;
    use artledger_store::MemoryStore;

    fn registry() -> Registry<MemoryStore> {
        Registry::new(
            Arc::new(MemoryStore::new()),
            Principal::derive("contract-owner"),
            Arc::new(ManualClock::new(100)),
        )
    }

    #[test]
    fn test_subsystems_share_one_owner() {
        let registry = registry();
        assert!(registry
            .access()
            .verify_action(&Principal::derive("contract-owner")));
    }

    #[test]
    fn test_artist_and_authenticator_records_are_independent() {
        let mut registry = registry();
        let person = Principal::derive("artist-and-expert");
        let owner = Principal::derive("contract-owner");

        registry.register_artist(&person, "Dora Maar", "Photographer").unwrap();
        registry
            .register_authenticator(&person, "Dora Maar", "Surrealism scholar")
            .unwrap();
        registry.verify_artist(&owner, &person).unwrap();

        assert!(registry.get_artist(&person).unwrap().unwrap().verified);
        assert!(!registry.get_authenticator(&person).unwrap().unwrap().verified);

        // A verified artist is not thereby an authenticator.
        let err = registry
            .authenticate_artwork(
                &person,
                Assessment {
                    artwork_id: 1,
                    is_authentic: true,
                    notes: String::new(),
                    evidence_hash: [0u8; 32],
                },
            )
            .unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized);
    }

    #[test]
    fn test_last_height_tracks_stamped_records() {
        let mut registry = registry();
        let owner = Principal::derive("contract-owner");
        let expert = Principal::derive("auth1");
        assert_eq!(registry.last_height().unwrap(), 0);

        registry
            .register_authenticator(&expert, "Art Expert Inc.", "Certified")
            .unwrap();
        registry.verify_authenticator(&owner, &expert).unwrap();
        assert_eq!(registry.last_height().unwrap(), 0);

        registry
            .authenticate_artwork(
                &expert,
                Assessment {
                    artwork_id: 7,
                    is_authentic: true,
                    notes: String::new(),
                    evidence_hash: [0u8; 32],
                },
            )
            .unwrap();
        assert_eq!(registry.last_height().unwrap(), 100);
    }
}
