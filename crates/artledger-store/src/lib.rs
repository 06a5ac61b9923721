// crates/artledger-store/src/lib.rs
//
// artledger-store: State backends for the ArtLedger registry.
//
// Provides an in-memory store for tests and ephemeral hosts, and a
// RocksDB-backed store that survives process restarts. Both implement
// `artledger_core::RegistryStore` with atomic batch commits.

pub mod memory;
pub mod rocks;

// Re-export key types for ergonomic access from downstream crates.
pub use memory::MemoryStore;
pub use rocks::RocksStore;
