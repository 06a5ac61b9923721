// crates/artledger-registry/src/roster.rs
//
// Principal-keyed records with an owner-granted `verified` flag.
//
// Artists and authenticators follow identical rules: one record per
// principal, created unverified, verified only by the owner, never
// unverified again. The rules live here once; each registry supplies the
// record type.

use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::{RegistryStore, StateWrite};
use artledger_core::types::{Artist, Authenticator};

use crate::access::AccessControl;

pub(crate) trait RosterRecord: Clone {
    /// Record kind, for log fields and error messages.
    const KIND: &'static str;

    fn is_verified(&self) -> bool;
    fn mark_verified(&mut self);
    fn load<S: RegistryStore>(store: &S, id: &Principal) -> Result<Option<Self>, RegistryError>;
    fn into_write(self, id: Principal) -> StateWrite;
}

impl RosterRecord for Artist {
    const KIND: &'static str = "artist";

    fn is_verified(&self) -> bool {
        self.verified
    }

    fn mark_verified(&mut self) {
        self.verified = true;
    }

    fn load<S: RegistryStore>(store: &S, id: &Principal) -> Result<Option<Self>, RegistryError> {
        store.get_artist(id)
    }

    fn into_write(self, id: Principal) -> StateWrite {
        StateWrite::PutArtist(id, self)
    }
}

impl RosterRecord for Authenticator {
    const KIND: &'static str = "authenticator";

    fn is_verified(&self) -> bool {
        self.verified
    }

    fn mark_verified(&mut self) {
        self.verified = true;
    }

    fn load<S: RegistryStore>(store: &S, id: &Principal) -> Result<Option<Self>, RegistryError> {
        store.get_authenticator(id)
    }

    fn into_write(self, id: Principal) -> StateWrite {
        StateWrite::PutAuthenticator(id, self)
    }
}

/// Store `record` under `caller` unless the caller already has one.
pub(crate) fn register<S: RegistryStore, R: RosterRecord>(
    store: &S,
    caller: &Principal,
    record: R,
) -> Result<(), RegistryError> {
    if R::load(store, caller)?.is_some() {
        tracing::debug!(kind = R::KIND, principal = %caller, "Duplicate registration rejected");
        return Err(RegistryError::AlreadyRegistered);
    }

    store.commit(vec![record.into_write(*caller)])?;
    tracing::info!(kind = R::KIND, principal = %caller, "Registered");
    Ok(())
}

/// Owner-gated: mark `target`'s record verified. Idempotent.
pub(crate) fn verify<S: RegistryStore, R: RosterRecord>(
    store: &S,
    access: &AccessControl,
    caller: &Principal,
    target: &Principal,
) -> Result<(), RegistryError> {
    if !access.verify_action(caller) {
        tracing::debug!(kind = R::KIND, caller = %caller, "Verification by non-owner rejected");
        return Err(RegistryError::Unauthorized);
    }

    let mut record: R = R::load(store, target)?.ok_or_else(|| {
        tracing::debug!(kind = R::KIND, target = %target, "Verification of unknown principal");
        RegistryError::NotFound(format!("No {} registered for {}", R::KIND, target))
    })?;

    record.mark_verified();
    store.commit(vec![record.into_write(*target)])?;
    tracing::info!(kind = R::KIND, principal = %target, "Verified");
    Ok(())
}

/// Succeeds iff `caller` has a verified record.
///
/// Absent and unverified both yield `Unauthorized`.
pub(crate) fn ensure_verified<S: RegistryStore, R: RosterRecord>(
    store: &S,
    caller: &Principal,
) -> Result<(), RegistryError> {
    match R::load(store, caller)? {
        Some(record) if record.is_verified() => Ok(()),
        _ => {
            tracing::debug!(kind = R::KIND, caller = %caller, "Caller lacks a verified record");
            Err(RegistryError::Unauthorized)
        }
    }
}
