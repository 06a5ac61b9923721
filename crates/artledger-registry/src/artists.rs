// crates/artledger-registry/src/artists.rs
//
// Artist identity and verification.

use std::sync::Arc;

use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::RegistryStore;
use artledger_core::types::Artist;

use crate::access::AccessControl;
use crate::roster;

/// Artist records keyed by the registering principal.
pub struct ArtistRegistry<S> {
    store: Arc<S>,
    access: AccessControl,
}

impl<S: RegistryStore> ArtistRegistry<S> {
    pub fn new(store: Arc<S>, access: AccessControl) -> Self {
        Self { store, access }
    }

    /// Register the caller as an unverified artist.
    ///
    /// # Errors
    /// Returns `RegistryError::AlreadyRegistered` if the caller already has an
    /// artist record. The existing record is left untouched.
    pub fn register_artist(
        &mut self,
        caller: &Principal,
        name: impl Into<String>,
        biography: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let artist = Artist {
            name: name.into(),
            biography: biography.into(),
            verified: false,
        };
        roster::register(self.store.as_ref(), caller, artist)
    }

    /// Owner-only: mark `target` as a verified artist.
    ///
    /// Verifying an already-verified artist succeeds again.
    ///
    /// # Errors
    /// Returns `RegistryError::Unauthorized` if the caller is not the owner, and
    /// `RegistryError::NotFound` if `target` has no artist record.
    pub fn verify_artist(
        &mut self,
        caller: &Principal,
        target: &Principal,
    ) -> Result<(), RegistryError> {
        roster::verify::<S, Artist>(self.store.as_ref(), &self.access, caller, target)
    }

    /// Look up an artist. `None` if the principal never registered.
    pub fn get_artist(&self, id: &Principal) -> Result<Option<Artist>, RegistryError> {
        self.store.get_artist(id)
    }

    /// `Ok` iff `caller` is a verified artist, otherwise `Unauthorized`.
    pub fn ensure_verified(&self, caller: &Principal) -> Result<(), RegistryError> {
        roster::ensure_verified::<S, Artist>(self.store.as_ref(), caller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FailingStore;
    use artledger_store::MemoryStore;

    fn setup() -> (ArtistRegistry<MemoryStore>, Principal) {
        let owner = Principal::derive("contract-owner");
        let registry = ArtistRegistry::new(Arc::new(MemoryStore::new()), AccessControl::new(owner));
        (registry, owner)
    }

    #[test]
    fn test_register_artist() {
        let (mut artists, _) = setup();
        let artist1 = Principal::derive("artist1");
        artists
            .register_artist(&artist1, "Pablo Picasso", "Spanish painter and sculptor")
            .unwrap();

        let artist = artists.get_artist(&artist1).unwrap().unwrap();
        assert_eq!(artist.name, "Pablo Picasso");
        assert_eq!(artist.biography, "Spanish painter and sculptor");
        assert!(!artist.verified);
    }

    #[test]
    fn test_register_twice_keeps_original() {
        let (mut artists, _) = setup();
        let artist1 = Principal::derive("artist1");
        artists
            .register_artist(&artist1, "Pablo Picasso", "Spanish painter and sculptor")
            .unwrap();

        let err = artists
            .register_artist(&artist1, "Pablo Picasso", "Updated bio")
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadyRegistered);
        assert_eq!(
            artists.get_artist(&artist1).unwrap().unwrap().biography,
            "Spanish painter and sculptor"
        );
    }

    #[test]
    fn test_verify_by_owner() {
        let (mut artists, owner) = setup();
        let artist1 = Principal::derive("artist1");
        artists.register_artist(&artist1, "Pablo Picasso", "").unwrap();
        artists.verify_artist(&owner, &artist1).unwrap();
        assert!(artists.get_artist(&artist1).unwrap().unwrap().verified);
    }

    #[test]
    fn test_verify_by_non_owner() {
        let (mut artists, _) = setup();
        let artist1 = Principal::derive("artist1");
        artists.register_artist(&artist1, "Pablo Picasso", "").unwrap();

        let err = artists
            .verify_artist(&Principal::derive("not-owner"), &artist1)
            .unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized);
        assert!(!artists.get_artist(&artist1).unwrap().unwrap().verified);
    }

    #[test]
    fn test_verify_unknown_artist() {
        let (mut artists, owner) = setup();
        let err = artists
            .verify_artist(&owner, &Principal::derive("non-existent"))
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_non_owner_check_precedes_existence_check() {
        let (mut artists, _) = setup();
        let err = artists
            .verify_artist(&Principal::derive("not-owner"), &Principal::derive("nobody"))
            .unwrap_err();
        assert_eq!(err, RegistryError::Unauthorized);
    }

    #[test]
    fn test_reverify_is_idempotent() {
        let (mut artists, owner) = setup();
        let artist1 = Principal::derive("artist1");
        artists.register_artist(&artist1, "Pablo Picasso", "").unwrap();
        artists.verify_artist(&owner, &artist1).unwrap();
        artists.verify_artist(&owner, &artist1).unwrap();
        assert!(artists.get_artist(&artist1).unwrap().unwrap().verified);
    }

    #[test]
    fn test_ensure_verified_conflates_absent_and_unverified() {
        let (mut artists, _) = setup();
        let registered = Principal::derive("artist1");
        artists.register_artist(&registered, "Pablo Picasso", "").unwrap();

        let unverified = artists.ensure_verified(&registered).unwrap_err();
        let absent = artists
            .ensure_verified(&Principal::derive("stranger"))
            .unwrap_err();
        assert_eq!(unverified, absent);
    }

    #[test]
    fn test_failed_commit_leaves_state_untouched() {
        let owner = Principal::derive("contract-owner");
        let store = Arc::new(FailingStore::new());
        let mut artists = ArtistRegistry::new(store.clone(), AccessControl::new(owner));
        let artist1 = Principal::derive("artist1");

        store.set_failing(true);
        assert!(matches!(
            artists.register_artist(&artist1, "Pablo Picasso", "Spanish painter and sculptor"),
            Err(RegistryError::Storage(_))
        ));
        assert!(artists.get_artist(&artist1).unwrap().is_none());

        store.set_failing(false);
        artists
            .register_artist(&artist1, "Pablo Picasso", "Spanish painter and sculptor")
            .unwrap();

        store.set_failing(true);
        assert!(matches!(
            artists.verify_artist(&owner, &artist1),
            Err(RegistryError::Storage(_))
        ));
        assert!(!artists.get_artist(&artist1).unwrap().unwrap().verified);
        assert_eq!(artists.ensure_verified(&artist1).unwrap_err(), RegistryError::Unauthorized);
    }
}
