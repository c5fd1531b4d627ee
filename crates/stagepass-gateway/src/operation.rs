//! Operations submitted through the ledger gateway.

use serde::{Deserialize, Serialize};
use stagepass_types::{Address, TokenId};

/// One ledger operation, described at the boundary. Wire encoding and
/// signing are the gateway implementation's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerOperation {
    /// Create `count` authorization slots on the signer's account in one
    /// batch. The receipt does not enumerate the assigned sequence
    /// numbers; callers re-read the account afterwards.
    CreateSlots { count: u32 },

    /// Mint one token carrying a hex-encoded reference and a namespace
    /// tag. With `slot_sequence` set, the operation consumes that slot
    /// instead of the account's sequential counter.
    MintToken {
        uri: String,
        taxon: u64,
        slot_sequence: Option<u32>,
    },

    /// Create a sell-listing for an owned token at a fixed subunit price.
    /// `destination: None` leaves the listing open to any buyer.
    CreateSellOffer {
        token: TokenId,
        amount_drops: u64,
        slot_sequence: Option<u32>,
        destination: Option<Address>,
    },
}

impl LedgerOperation {
    /// The slot this operation consumes, if any.
    #[must_use]
    pub fn slot_sequence(&self) -> Option<u32> {
        match self {
            Self::CreateSlots { .. } => None,
            Self::MintToken { slot_sequence, .. }
            | Self::CreateSellOffer { slot_sequence, .. } => *slot_sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_sequence_accessor() {
        let op = LedgerOperation::MintToken {
            uri: "7B7D".to_string(),
            taxon: 42_000,
            slot_sequence: Some(9),
        };
        assert_eq!(op.slot_sequence(), Some(9));

        let op = LedgerOperation::CreateSlots { count: 4 };
        assert_eq!(op.slot_sequence(), None);
    }
}
