// crates/artledger-registry/src/lib.rs
//
// artledger-registry: State-transition logic of the ArtLedger provenance
// registry.
//
// Two structurally identical subsystems share one access-control gate and
// one store:
//   - Artists and the artworks attributed to verified artists.
//   - Authenticators and the single assessment each artwork may receive.
//
// Every operation is atomic: preconditions are checked against the store,
// then all writes are committed in one batch. A rejected call leaves state
// untouched and never consumes an artwork ID.

pub mod access;
pub mod artists;
pub mod artworks;
pub mod authentications;
pub mod authenticators;
pub mod registry;
mod roster;
pub mod sequence;
pub mod shared;
#[cfg(test)]
mod testing;
pub mod timestamp;

// Re-export key types for ergonomic access from downstream crates.
pub use access::AccessControl;
pub use artists::ArtistRegistry;
pub use artworks::ArtworkRegistry;
pub use authentications::AuthenticationRegistry;
pub use authenticators::AuthenticatorRegistry;
pub use registry::Registry;
pub use sequence::{Reservation, SequenceAllocator};
pub use shared::SharedRegistry;
pub use timestamp::{Stamp, Timestamper};
