//! Token metadata and its size-capped on-ledger encoding.
//!
//! The ledger gives each token one opaque reference field with a hard byte
//! limit. Metadata is serialized as minimal JSON with one-letter field
//! names, then hex-encoded into that field. Oversized metadata is rejected
//! before submission — never silently truncated. The only truncation is the
//! event name, applied visibly at construction time.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_METADATA_BYTES, NAME_MAX_CHARS};
use crate::{Result, StagepassError};

/// Compact metadata carried by a minted token.
///
/// Two shapes exist: one for the event's collection token, one for each
/// individual ticket. The tag field (`t`) distinguishes them on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum TokenMetadata {
    /// Metadata for the collection token minted once per event.
    #[serde(rename = "c")]
    Collection {
        #[serde(rename = "n")]
        name: String,
        #[serde(rename = "i")]
        image: String,
        #[serde(rename = "e")]
        event_id: u64,
    },
    /// Metadata for one ticket token.
    #[serde(rename = "k")]
    Ticket {
        #[serde(rename = "n")]
        name: String,
        #[serde(rename = "i")]
        image: String,
        #[serde(rename = "e")]
        event_id: u64,
        #[serde(rename = "x")]
        index: u32,
    },
}

/// Truncate a name to [`NAME_MAX_CHARS`] characters.
fn short_name(name: &str) -> String {
    name.chars().take(NAME_MAX_CHARS).collect()
}

impl TokenMetadata {
    /// Collection metadata. The name is truncated to [`NAME_MAX_CHARS`].
    #[must_use]
    pub fn collection(name: &str, image: impl Into<String>, event_id: u64) -> Self {
        Self::Collection {
            name: short_name(name),
            image: image.into(),
            event_id,
        }
    }

    /// Per-ticket metadata. The name is truncated to [`NAME_MAX_CHARS`].
    #[must_use]
    pub fn ticket(name: &str, image: impl Into<String>, event_id: u64, index: u32) -> Self {
        Self::Ticket {
            name: short_name(name),
            image: image.into(),
            event_id,
            index,
        }
    }

    /// Serialize to minimal JSON and hex-encode for the ledger's opaque
    /// reference field.
    ///
    /// # Errors
    /// `MetadataTooLarge` if the JSON byte length exceeds
    /// [`MAX_METADATA_BYTES`]. The caller must shorten its inputs; nothing
    /// is submitted.
    pub fn encode(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        if bytes.len() > MAX_METADATA_BYTES {
            return Err(StagepassError::MetadataTooLarge {
                encoded: bytes.len(),
                limit: MAX_METADATA_BYTES,
            });
        }
        Ok(hex::encode_upper(bytes))
    }

    /// Decode a hex-encoded reference field back into metadata.
    ///
    /// # Errors
    /// `Serialization` if the field is not valid hex or valid metadata JSON.
    pub fn decode(reference: &str) -> Result<Self> {
        let bytes = hex::decode(reference)
            .map_err(|e| StagepassError::Serialization(e.to_string()))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The event this metadata belongs to.
    #[must_use]
    pub fn event_id(&self) -> u64 {
        match self {
            Self::Collection { event_id, .. } | Self::Ticket { event_id, .. } => *event_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_name_truncated_at_construction() {
        let meta = TokenMetadata::collection(
            "An Extremely Long Event Name That Never Ends",
            "ipfs://img",
            7,
        );
        let TokenMetadata::Collection { name, .. } = &meta else {
            panic!("expected collection variant");
        };
        assert_eq!(name.chars().count(), NAME_MAX_CHARS);
    }

    #[test]
    fn encode_produces_hex() {
        let meta = TokenMetadata::ticket("Gala", "ipfs://img", 7, 3);
        let encoded = meta.encode().unwrap();
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit()));
        // Hex doubles the byte length, so the field stays within 2x the cap.
        assert!(encoded.len() <= MAX_METADATA_BYTES * 2);
    }

    #[test]
    fn oversized_metadata_rejected_not_truncated() {
        // Name is capped, so blow the limit through the image URI.
        let meta = TokenMetadata::collection("Gala", "ipfs://".to_string() + &"Q".repeat(300), 7);
        let err = meta.encode().unwrap_err();
        assert!(matches!(err, StagepassError::MetadataTooLarge { .. }));
    }

    #[test]
    fn decode_inverts_encode() {
        let meta = TokenMetadata::ticket("Gala", "ipfs://img", 7, 12);
        let back = TokenMetadata::decode(&meta.encode().unwrap()).unwrap();
        assert_eq!(meta, back);
    }

    #[test]
    fn wire_field_names_are_short() {
        let meta = TokenMetadata::ticket("Gala", "i", 7, 0);
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains("\"t\":\"k\""), "Got: {json}");
        assert!(json.contains("\"x\":0"), "Got: {json}");
        assert!(!json.contains("event_id"), "Got: {json}");
    }

    #[test]
    fn event_id_accessor_covers_both_variants() {
        assert_eq!(TokenMetadata::collection("a", "b", 9).event_id(), 9);
        assert_eq!(TokenMetadata::ticket("a", "b", 9, 0).event_id(), 9);
    }
}
