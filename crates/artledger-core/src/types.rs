// crates/artledger-core/src/types.rs
//
// Registry records. Artists and authenticators are keyed by principal;
// artworks and authentications by artwork ID.

use serde::{Deserialize, Serialize};

use crate::identity::Principal;

/// Sequence number of a registered artwork. The first artwork is 1.
pub type ArtworkId = u64;

/// Reading of the external clock (e.g. a block height).
pub type BlockHeight = u64;

/// 32-byte digest of the evidence behind an assessment.
pub type EvidenceHash = [u8; 32];

/// A registered artist.
///
/// `verified` starts false and is only ever set true by the owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
    pub biography: String,
    pub verified: bool,
}

/// A registered artwork. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub title: String,
    /// The verified artist who registered this artwork.
    pub artist_id: Principal,
    /// Year of creation. Negative for years before the common era.
    pub creation_date: i64,
    pub medium: String,
    pub dimensions: String,
    pub description: String,
    /// Clock reading when the artwork was registered.
    pub registered_at: BlockHeight,
}

/// A registered authenticator (appraiser, lab, expert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authenticator {
    pub name: String,
    pub credentials: String,
    pub verified: bool,
}

/// The single authenticity assessment recorded for an artwork ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authentication {
    pub authenticator: Principal,
    pub is_authentic: bool,
    pub assessment_date: BlockHeight,
    pub assessment_notes: String,
    pub evidence_hash: EvidenceHash,
}

/// Arguments of an artwork registration. The artist is the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArtwork {
    pub title: String,
    pub creation_date: i64,
    pub medium: String,
    pub dimensions: String,
    pub description: String,
}

impl NewArtwork {
    /// Bind the registration to its artist and clock reading.
    pub fn into_artwork(self, artist_id: Principal, registered_at: BlockHeight) -> Artwork {
        Artwork {
            title: self.title,
            artist_id,
            creation_date: self.creation_date,
            medium: self.medium,
            dimensions: self.dimensions,
            description: self.description,
            registered_at,
        }
    }
}

/// Arguments of an authenticity assessment. The authenticator is the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub artwork_id: ArtworkId,
    pub is_authentic: bool,
    pub notes: String,
    pub evidence_hash: EvidenceHash,
}

impl Assessment {
    /// Bind the assessment to its authenticator and clock reading.
    pub fn into_authentication(
        self,
        authenticator: Principal,
        assessment_date: BlockHeight,
    ) -> Authentication {
        Authentication {
            authenticator,
            is_authentic: self.is_authentic,
            assessment_date,
            assessment_notes: self.notes,
            evidence_hash: self.evidence_hash,
        }
    }
}
