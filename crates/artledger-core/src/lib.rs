// crates/artledger-core/src/lib.rs
//
// artledger-core: Core types, traits, and crypto primitives for the
// ArtLedger provenance registry.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the registry records, the error taxonomy, the clock and
// persistence seams, and the identity helpers used throughout.

pub mod clock;
pub mod crypto;
pub mod error;
pub mod identity;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use artledger_core::Artwork;`

// Record types
pub use types::{
    Artist, Artwork, ArtworkId, Assessment, Authentication, Authenticator, BlockHeight,
    EvidenceHash, NewArtwork,
};

// Identity
pub use identity::Principal;

// Clocks
pub use clock::{Clock, ManualClock, UnixClock};

// Error type
pub use error::RegistryError;

// Traits
pub use traits::{RegistryStore, StateWrite};
