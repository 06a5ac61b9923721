// crates/artledger-core/src/crypto.rs

use ed25519_dalek::{SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::error::RegistryError;
use crate::identity::Principal;

/// An ed25519 keypair whose verifying key is a registry principal.
pub struct Keypair {
    pub signing_key: SigningKey,
    pub verifying_key: VerifyingKey,
}

impl Keypair {
    /// Generate a new random ed25519 keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut OsRng);
        let verifying_key = signing_key.verifying_key();
        Keypair {
            signing_key,
            verifying_key,
        }
    }

    /// Rebuild a keypair from 32 secret key bytes.
    pub fn from_secret_bytes(secret: &[u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(secret);
        let verifying_key = signing_key.verifying_key();
        Keypair {
            signing_key,
            verifying_key,
        }
    }

    /// Get the public key bytes (32 bytes).
    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.verifying_key.to_bytes()
    }

    /// The registry principal this keypair acts as.
    pub fn principal(&self) -> Principal {
        Principal::from_public_key(&self.public_key_bytes())
    }
}

/// Compute SHA-256 hash of the given bytes.
///
/// Returns a 32-byte hash. Used for evidence hashes and derived principals.
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Parse a 64-char hex string into a 32-byte digest.
pub fn parse_hash_hex(s: &str) -> Result<[u8; 32], RegistryError> {
    let bytes = hex::decode(s.trim())?;
    bytes.try_into().map_err(|b: Vec<u8>| {
        RegistryError::InvalidInput(format!("Hash must be exactly 32 bytes, got {}", b.len()))
    })
}
