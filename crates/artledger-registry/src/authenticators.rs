// crates/artledger-registry/src/authenticators.rs
//
// Authenticator identity and verification.

use std::sync::Arc;

use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::RegistryStore;
use artledger_core::types::Authenticator;

use crate::access::AccessControl;
use crate::roster;

/// Authenticator records keyed by the registering principal.
pub struct AuthenticatorRegistry<S> {
    store: Arc<S>,
    access: AccessControl,
}

impl<S: RegistryStore> AuthenticatorRegistry<S> {
    pub fn new(store: Arc<S>, access: AccessControl) -> Self {
        Self { store, access }
    }

    /// Register the caller as an unverified authenticator.
    ///
    /// # Errors
    /// Returns `RegistryError::AlreadyRegistered` if the caller already has an
    /// authenticator record. The existing record is left untouched.
    pub fn register_authenticator(
        &mut self,
        caller: &Principal,
        name: impl Into<String>,
        credentials: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let authenticator = Authenticator {
            name: name.into(),
            credentials: credentials.into(),
            verified: false,
        };
        roster::register(self.store.as_ref(), caller, authenticator)
    }

    /// Owner-only: mark `target` as a verified authenticator.
    ///
    /// Verifying an already-verified authenticator succeeds again.
    ///
    /// # Errors
    /// Returns `RegistryError::Unauthorized` if the caller is not the owner, and
    /// `RegistryError::NotFound` if `target` has no authenticator record.
    pub fn verify_authenticator(
        &mut self,
        caller: &Principal,
        target: &Principal,
    ) -> Result<(), RegistryError> {
        roster::verify::<S, Authenticator>(self.store.as_ref(), &self.access, caller, target)
    }

    /// Look up an authenticator. `None` if the principal never registered.
    pub fn get_authenticator(&self, id: &Principal) -> Result<Option<Authenticator>, RegistryError> {
        self.store.get_authenticator(id)
    }

    /// `Ok` iff `caller` is a verified authenticator, otherwise `Unauthorized`.
    pub fn ensure_verified(&self, caller: &Principal) -> Result<(), RegistryError> {
        roster::ensure_verified::<S, Authenticator>(self.store.as_ref(), caller)
    }
}
