// crates/artledger-registry/src/authentications.rs
//
// One-time authenticity assessments, keyed by artwork ID.
//
// Artwork existence is not checked: an assessment may be recorded against
// an ID the artwork registry has not issued.

use std::sync::Arc;

use artledger_core::clock::Clock;
use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::{RegistryStore, StateWrite};
use artledger_core::types::{ArtworkId, Assessment, Authentication};

use crate::access::AccessControl;
use crate::authenticators::AuthenticatorRegistry;
use crate::timestamp::Timestamper;

/// Authentication registry. Owns the authenticator registry it depends on.
pub struct AuthenticationRegistry<S> {
    store: Arc<S>,
    authenticators: AuthenticatorRegistry<S>,
    timestamper: Timestamper<S>,
}

impl<S: RegistryStore> AuthenticationRegistry<S> {
    pub fn new(store: Arc<S>, access: AccessControl, clock: Arc<dyn Clock>) -> Self {
        Self {
            authenticators: AuthenticatorRegistry::new(store.clone(), access),
            timestamper: Timestamper::new(store.clone(), clock),
            store,
        }
    }

    pub fn authenticators(&self) -> &AuthenticatorRegistry<S> {
        &self.authenticators
    }

    pub fn authenticators_mut(&mut self) -> &mut AuthenticatorRegistry<S> {
        &mut self.authenticators
    }

    /// Record the caller's assessment of `assessment.artwork_id`.
    ///
    /// # Errors
    /// Returns `RegistryError::Unauthorized` if the caller is not a verified
    /// authenticator, and `RegistryError::AlreadyAuthenticated` if the artwork
    /// already has an assessment. The stored assessment is never replaced.
    pub fn authenticate_artwork(
        &mut self,
        caller: &Principal,
        assessment: Assessment,
    ) -> Result<(), RegistryError> {
        self.authenticators.ensure_verified(caller)?;

        let artwork_id = assessment.artwork_id;
        if self.store.get_authentication(artwork_id)?.is_some() {
            tracing::debug!(artwork_id, authenticator = %caller, "Artwork already authenticated");
            return Err(RegistryError::AlreadyAuthenticated(artwork_id));
        }

        let stamp = self.timestamper.stamp()?;
        let record = assessment.into_authentication(*caller, stamp.height);
        let is_authentic = record.is_authentic;
        self.store.commit(vec![
            stamp.into_write(),
            StateWrite::PutAuthentication(artwork_id, record),
        ])?;

        tracing::info!(
            artwork_id,
            authenticator = %caller,
            is_authentic,
            "Artwork authenticated"
        );
        Ok(())
    }

    /// Look up the assessment for an artwork. `None` if it has none.
    pub fn get_authentication(
        &self,
        artwork_id: ArtworkId,
    ) -> Result<Option<Authentication>, RegistryError> {
        self.store.get_authentication(artwork_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FailingStore;
    use artledger_core::clock::ManualClock;
    use artledger_core::crypto::hash_bytes;
    use artledger_store::MemoryStore;

    fn setup() -> (AuthenticationRegistry<MemoryStore>, Principal) {
        let owner = Principal::derive("contract-owner");
        let registry = AuthenticationRegistry::new(
            Arc::new(MemoryStore::new()),
            AccessControl::new(owner),
            Arc::new(ManualClock::new(100)),
        );
        (registry, owner)
    }

    fn assessment(artwork_id: ArtworkId, is_authentic: bool, notes: &str) -> Assessment {
        Assessment {
            artwork_id,
            is_authentic,
            notes: notes.to_string(),
            evidence_hash: hash_bytes(notes.as_bytes()),
        }
    }

    fn verified_authenticator(
        registry: &mut AuthenticationRegistry<MemoryStore>,
        owner: &Principal,
    ) -> Principal {
        let auth1 = Principal::derive("auth1");
        registry
            .authenticators_mut()
            .register_authenticator(&auth1, "Art Expert Inc.", "Certified")
            .unwrap();
        registry
            .authenticators_mut()
            .verify_authenticator(owner, &auth1)
            .unwrap();
        auth1
    }

    #[test]
    fn test_authenticate_artwork() {
        let (mut registry, owner) = setup();
        let auth1 = verified_authenticator(&mut registry, &owner);

        registry
            .authenticate_artwork(&auth1, assessment(1, true, "Authentic Picasso"))
            .unwrap();

        let record = registry.get_authentication(1).unwrap().unwrap();
        assert_eq!(record.authenticator, auth1);
        assert!(record.is_authentic);
        assert_eq!(record.assessment_date, 100);
        assert_eq!(record.assessment_notes, "Authentic Picasso");
        assert_eq!(record.evidence_hash, hash_bytes(b"Authentic Picasso"));
    }

    #[test]
    fn test_second_assessment_rejected() {
        let (mut registry, owner) = setup();
        let auth1 = verified_authenticator(&mut registry, &owner);

        registry
            .authenticate_artwork(&auth1, assessment(1, true, "first"))
            .unwrap();
        let err = registry
            .authenticate_artwork(&auth1, assessment(1, false, "second"))
            .unwrap_err();
        assert_eq!(err, RegistryError::AlreadyAuthenticated(1));

        let record = registry.get_authentication(1).unwrap().unwrap();
        assert!(record.is_authentic);
        assert_eq!(record.assessment_notes, "first");
    }

    #[test]
    fn test_unverified_authenticator_rejected() {
        let (mut registry, _) = setup();
        let auth1 = Principal::derive("auth1");
        registry
            .authenticators_mut()
            .register_authenticator(&auth1, "Art Expert Inc.", "Certified")
            .unwrap();

        assert_eq!(
            registry
                .authenticate_artwork(&auth1, assessment(1, true, "notes"))
                .unwrap_err(),
            RegistryError::Unauthorized
        );
        assert!(registry.get_authentication(1).unwrap().is_none());
    }

    #[test]
    fn test_unknown_authenticator_rejected() {
        let (mut registry, _) = setup();
        assert_eq!(
            registry
                .authenticate_artwork(&Principal::derive("non-existent"), assessment(1, true, "x"))
                .unwrap_err(),
            RegistryError::Unauthorized
        );
    }

    #[test]
    fn test_unauthorized_checked_before_duplicate() {
        let (mut registry, owner) = setup();
        let auth1 = verified_authenticator(&mut registry, &owner);
        registry
            .authenticate_artwork(&auth1, assessment(5, true, "x"))
            .unwrap();

        assert_eq!(
            registry
                .authenticate_artwork(&Principal::derive("stranger"), assessment(5, true, "y"))
                .unwrap_err(),
            RegistryError::Unauthorized
        );
    }

    #[test]
    fn test_unregistered_artwork_id_accepted() {
        let (mut registry, owner) = setup();
        let auth1 = verified_authenticator(&mut registry, &owner);
        registry
            .authenticate_artwork(&auth1, assessment(4242, false, "No such artwork yet"))
            .unwrap();
        assert!(registry.get_authentication(4242).unwrap().is_some());
    }

    #[test]
    fn test_missing_authentication_is_none() {
        let (registry, _) = setup();
        assert!(registry.get_authentication(999).unwrap().is_none());
    }

    #[test]
    fn test_failed_commit_records_nothing() {
        let owner = Principal::derive("contract-owner");
        let store = Arc::new(FailingStore::new());
        let mut registry = AuthenticationRegistry::new(
            store.clone(),
            AccessControl::new(owner),
            Arc::new(ManualClock::new(100)),
        );
        let auth1 = Principal::derive("auth1");
        registry
            .authenticators_mut()
            .register_authenticator(&auth1, "Art Expert Inc.", "Certified")
            .unwrap();
        registry
            .authenticators_mut()
            .verify_authenticator(&owner, &auth1)
            .unwrap();

        store.set_failing(true);
        assert!(matches!(
            registry.authenticate_artwork(&auth1, assessment(1, false, "Forgery")),
            Err(RegistryError::Storage(_))
        ));
        assert!(registry.get_authentication(1).unwrap().is_none());
        assert_eq!(store.last_height().unwrap(), 0);

        // The artwork is still open for its one assessment.
        store.set_failing(false);
        registry
            .authenticate_artwork(&auth1, assessment(1, true, "Authentic Picasso"))
            .unwrap();
        let record = registry.get_authentication(1).unwrap().unwrap();
        assert!(record.is_authentic);
        assert_eq!(store.last_height().unwrap(), 100);
    }
}
