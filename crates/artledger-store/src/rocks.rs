// crates/artledger-store/src/rocks.rs
//
// RocksDB-backed persistent registry state.
//
// Key format:
//   - `artist:{principal_hex}`          -> JSON-serialized Artist
//   - `artwork:{id:020}`                -> JSON-serialized Artwork
//   - `authenticator:{principal_hex}`   -> JSON-serialized Authenticator
//   - `authentication:{id:020}`         -> JSON-serialized Authentication
//   - `meta:artwork_counter`            -> u64, 8 bytes big-endian
//   - `meta:last_height`                -> u64, 8 bytes big-endian
//
// Artwork IDs are zero-padded so keys sort in ID order.

use rocksdb::{DBWithThreadMode, MultiThreaded, Options, WriteBatch};
use serde::de::DeserializeOwned;
use serde::Serialize;

use artledger_core::error::RegistryError;
use artledger_core::identity::Principal;
use artledger_core::traits::{RegistryStore, StateWrite};
use artledger_core::types::{
    Artist, Artwork, ArtworkId, Authentication, Authenticator, BlockHeight,
};

const ARTWORK_COUNTER_KEY: &[u8] = b"meta:artwork_counter";
const LAST_HEIGHT_KEY: &[u8] = b"meta:last_height";

/// RocksDB wrapper implementing the `RegistryStore` trait.
#[derive(Debug)]
pub struct RocksStore {
    db: DBWithThreadMode<MultiThreaded>,
}

impl RocksStore {
    /// Open a RocksDB database at the given filesystem path.
    ///
    /// Creates the database directory if it does not exist.
    pub fn open(path: &str) -> Result<Self, RegistryError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);

        let db = DBWithThreadMode::<MultiThreaded>::open(&opts, path).map_err(|e| {
            RegistryError::Storage(format!("Failed to open RocksDB at {}: {}", path, e))
        })?;

        tracing::debug!(path, "Opened registry database");
        Ok(Self { db })
    }

    fn artist_key(id: &Principal) -> Vec<u8> {
        format!("artist:{}", id).into_bytes()
    }

    fn artwork_key(id: ArtworkId) -> Vec<u8> {
        format!("artwork:{:020}", id).into_bytes()
    }

    fn authenticator_key(id: &Principal) -> Vec<u8> {
        format!("authenticator:{}", id).into_bytes()
    }

    fn authentication_key(id: ArtworkId) -> Vec<u8> {
        format!("authentication:{:020}", id).into_bytes()
    }

    /// Get raw bytes from RocksDB, mapping errors to RegistryError::Storage.
    fn get_raw(&self, key: &[u8]) -> Result<Option<Vec<u8>>, RegistryError> {
        self.db
            .get(key)
            .map_err(|e| RegistryError::Storage(format!("RocksDB get failed: {}", e)))
    }

    /// Get and decode a JSON value.
    fn get_json<T: DeserializeOwned>(&self, key: &[u8]) -> Result<Option<T>, RegistryError> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Get a big-endian u64 meta value. Zero if unset.
    fn get_u64(&self, key: &[u8]) -> Result<u64, RegistryError> {
        match self.get_raw(key)? {
            Some(bytes) => {
                let array: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    RegistryError::Serialization(format!(
                        "{} must be 8 bytes, got {}",
                        String::from_utf8_lossy(key),
                        bytes.len()
                    ))
                })?;
                Ok(u64::from_be_bytes(array))
            }
            None => Ok(0),
        }
    }

    fn put_json<T: Serialize>(
        batch: &mut WriteBatch,
        key: Vec<u8>,
        value: &T,
    ) -> Result<(), RegistryError> {
        let json = serde_json::to_vec(value)?;
        batch.put(key, json);
        Ok(())
    }
}

impl RegistryStore for RocksStore {
    fn get_artist(&self, id: &Principal) -> Result<Option<Artist>, RegistryError> {
        self.get_json(&Self::artist_key(id))
    }

    fn get_artwork(&self, id: ArtworkId) -> Result<Option<Artwork>, RegistryError> {
        self.get_json(&Self::artwork_key(id))
    }

    fn get_authenticator(&self, id: &Principal) -> Result<Option<Authenticator>, RegistryError> {
        self.get_json(&Self::authenticator_key(id))
    }

    fn get_authentication(&self, id: ArtworkId) -> Result<Option<Authentication>, RegistryError> {
        self.get_json(&Self::authentication_key(id))
    }

    fn artwork_counter(&self) -> Result<u64, RegistryError> {
        self.get_u64(ARTWORK_COUNTER_KEY)
    }

    fn last_height(&self) -> Result<BlockHeight, RegistryError> {
        self.get_u64(LAST_HEIGHT_KEY)
    }

    fn commit(&self, writes: Vec<StateWrite>) -> Result<(), RegistryError> {
        // Encode everything first so a serialization failure writes nothing.
        let mut batch = WriteBatch::default();
        for write in &writes {
            match write {
                StateWrite::PutArtist(id, artist) => {
                    Self::put_json(&mut batch, Self::artist_key(id), artist)?
                }
                StateWrite::PutArtwork(id, artwork) => {
                    Self::put_json(&mut batch, Self::artwork_key(*id), artwork)?
                }
                StateWrite::PutAuthenticator(id, authenticator) => {
                    Self::put_json(&mut batch, Self::authenticator_key(id), authenticator)?
                }
                StateWrite::PutAuthentication(id, authentication) => {
                    Self::put_json(&mut batch, Self::authentication_key(*id), authentication)?
                }
                StateWrite::SetArtworkCounter(value) => {
                    batch.put(ARTWORK_COUNTER_KEY, value.to_be_bytes())
                }
                StateWrite::SetLastHeight(height) => {
                    batch.put(LAST_HEIGHT_KEY, height.to_be_bytes())
                }
            }
        }

        self.db.write(batch).map_err(|e| {
            tracing::warn!(error = %e, "RocksDB batch write failed");
            RegistryError::Storage(format!("RocksDB batch write failed: {}", e))
        })
    }
}
