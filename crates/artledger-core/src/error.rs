// crates/artledger-core/src/error.rs

use thiserror::Error;

/// Registry-wide error types for ArtLedger.
///
/// The first four variants are the domain failures returned by registry
/// operations. Each has a stable numeric code (see [`RegistryError::code`]).
/// The remaining variants come from the host environment and the
/// persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Caller is not the owner, or lacks a verified Artist/Authenticator record.
    ///
    /// Carries no payload: "never registered" and "registered but unverified"
    /// must be indistinguishable to the caller.
    #[error("Unauthorized")]
    Unauthorized,

    /// The caller identity already holds a record of this kind.
    #[error("Already registered")]
    AlreadyRegistered,

    /// An owner-gated verify action targeted an identity with no record.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An authentication already exists for the artwork ID.
    #[error("Artwork {0} already authenticated")]
    AlreadyAuthenticated(u64),

    /// Storage layer error (RocksDB, in-memory lock poisoning).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization of a persisted record failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Malformed host input (principal hex, hash hex).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl RegistryError {
    /// Stable numeric code for this error kind.
    ///
    /// Codes 1 to 4 match the registry's published error constants.
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::Unauthorized => 1,
            RegistryError::AlreadyRegistered => 2,
            RegistryError::NotFound(_) => 3,
            RegistryError::AlreadyAuthenticated(_) => 4,
            RegistryError::Storage(_) => 100,
            RegistryError::Serialization(_) => 101,
            RegistryError::InvalidInput(_) => 102,
        }
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(e: serde_json::Error) -> Self {
        RegistryError::Serialization(e.to_string())
    }
}

impl From<hex::FromHexError> for RegistryError {
    fn from(e: hex::FromHexError) -> Self {
        RegistryError::InvalidInput(e.to_string())
    }
}
