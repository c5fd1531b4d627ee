//! Records returned across the ledger boundary.

use serde::{Deserialize, Serialize};
use stagepass_types::{Address, TokenId, TxHash};

/// Result code of a finalized, successful operation.
pub const RESULT_OK: &str = "tesSUCCESS";

/// Transaction type of a simple value transfer.
pub const PAYMENT_TX_TYPE: &str = "Payment";

/// Receipt for a submitted operation, returned once the ledger has
/// irreversibly recorded its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Whether the operation reached finality at all.
    pub finalized: bool,
    /// The ledger's result code for the operation.
    pub result_code: String,
    /// The transaction identifier assigned at submission.
    pub tx_hash: TxHash,
}

impl SubmitReceipt {
    /// Finalized with the success code.
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.finalized && self.result_code == RESULT_OK
    }
}

/// A transaction looked up by reference.
///
/// The delivered amount may appear in any of three fields depending on how
/// the transfer was constructed: the direct `amount_drops`, the
/// `deliver_max_drops` bound, or the post-execution `delivered_drops`
/// metadata. The wire format guarantees no single canonical location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub tx_type: String,
    pub source: Address,
    pub destination: Option<Address>,
    pub amount_drops: Option<u64>,
    pub deliver_max_drops: Option<u64>,
    pub delivered_drops: Option<u64>,
    pub result_code: String,
}

impl TransactionRecord {
    /// A finalized simple payment carrying its amount in the direct field.
    #[must_use]
    pub fn payment(source: Address, destination: Address, drops: u64) -> Self {
        Self {
            tx_type: PAYMENT_TX_TYPE.to_string(),
            source,
            destination: Some(destination),
            amount_drops: Some(drops),
            deliver_max_drops: None,
            delivered_drops: None,
            result_code: RESULT_OK.to_string(),
        }
    }
}

/// One authorization slot currently live on an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub sequence: u32,
}

/// One token currently owned by an account. The ledger returns these in
/// creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub token_id: TokenId,
    pub taxon: u64,
    pub uri: String,
}

/// One active sell-listing for a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub listing_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_succeeded_requires_both() {
        let ok = SubmitReceipt {
            finalized: true,
            result_code: RESULT_OK.to_string(),
            tx_hash: TxHash::new("AA"),
        };
        assert!(ok.succeeded());

        let wrong_code = SubmitReceipt {
            result_code: "tecPATH_DRY".to_string(),
            ..ok.clone()
        };
        assert!(!wrong_code.succeeded());

        let not_final = SubmitReceipt {
            finalized: false,
            ..ok
        };
        assert!(!not_final.succeeded());
    }

    #[test]
    fn payment_constructor_uses_direct_amount_field() {
        let record = TransactionRecord::payment(
            Address::new("rPayer"),
            Address::new("rOperator"),
            2_050_000,
        );
        assert_eq!(record.tx_type, PAYMENT_TX_TYPE);
        assert_eq!(record.amount_drops, Some(2_050_000));
        assert_eq!(record.deliver_max_drops, None);
        assert_eq!(record.delivered_drops, None);
        assert_eq!(record.result_code, RESULT_OK);
    }
}
