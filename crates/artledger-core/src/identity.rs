// crates/artledger-core/src/identity.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::crypto::hash_bytes;
use crate::error::RegistryError;

/// Opaque caller identity bound to every registry invocation.
///
/// A principal is 32 bytes. Callers authenticated by an ed25519 key use
/// the verifying key bytes directly; how the caller was authenticated is
/// outside the registry's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal([u8; 32]);

impl Principal {
    /// Wrap raw identity bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Principal of an ed25519 verifying key.
    pub fn from_public_key(public_key: &[u8; 32]) -> Self {
        Self(*public_key)
    }

    /// Deterministic principal derived from a label: `SHA-256(label)`.
    ///
    /// Used for fixture identities ("artist1", "contract-owner") in tests
    /// and demo setups.
    pub fn derive(label: &str) -> Self {
        Self(hash_bytes(label.as_bytes()))
    }

    /// Raw identity bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding (64 chars).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Principal {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim())?;
        let array: [u8; 32] = bytes.try_into().map_err(|b: Vec<u8>| {
            RegistryError::InvalidInput(format!(
                "Principal must be exactly 32 bytes, got {}",
                b.len()
            ))
        })?;
        Ok(Self(array))
    }
}
