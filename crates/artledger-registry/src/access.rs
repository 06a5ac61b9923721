// crates/artledger-registry/src/access.rs
//
// Owner gate for privileged actions (artist and authenticator verification).

use artledger_core::identity::Principal;

/// Gates privileged actions to a single configured owner identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessControl {
    owner: Principal,
}

impl AccessControl {
    pub fn new(owner: Principal) -> Self {
        Self { owner }
    }

    /// Returns `true` iff `caller` is the configured owner.
    pub fn verify_action(&self, caller: &Principal) -> bool {
        *caller == self.owner
    }

    pub fn owner(&self) -> &Principal {
        &self.owner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_owner_is_allowed() {
        let owner = Principal::derive("contract-owner");
        let access = AccessControl::new(owner);
        assert!(access.verify_action(&owner));
        assert!(!access.verify_action(&Principal::derive("not-owner")));
    }

    #[test]
    fn test_owner_is_configurable() {
        let access = AccessControl::new(Principal::derive("museum-board"));
        assert!(!access.verify_action(&Principal::derive("contract-owner")));
        assert_eq!(access.owner(), &Principal::derive("museum-board"));
    }
}
