//! Per-unit outcomes, the final deployment result, and the orchestrator's
//! phase machine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{TokenId, TxHash};

/// Outcome of one token mint within a batch, positionally aligned with
/// the submitted units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintOutcome {
    /// Index of the unit within the batch (0-based).
    pub index: u32,
    /// Whether this unit's mint finalized successfully.
    pub success: bool,
    /// The mint transaction's identifier. Present iff `success`.
    pub tx_hash: Option<TxHash>,
}

impl MintOutcome {
    #[must_use]
    pub fn succeeded(index: u32, tx_hash: TxHash) -> Self {
        Self {
            index,
            success: true,
            tx_hash: Some(tx_hash),
        }
    }

    #[must_use]
    pub fn failed(index: u32) -> Self {
        Self {
            index,
            success: false,
            tx_hash: None,
        }
    }
}

/// Outcome of one sell-listing within a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferOutcome {
    /// The token this listing offers for sale.
    pub token: TokenId,
    /// Whether the listing finalized successfully.
    pub success: bool,
    /// The listing transaction's identifier. Present iff `success`.
    pub tx_hash: Option<TxHash>,
}

impl OfferOutcome {
    #[must_use]
    pub fn succeeded(token: TokenId, tx_hash: TxHash) -> Self {
        Self {
            token,
            success: true,
            tx_hash: Some(tx_hash),
        }
    }

    #[must_use]
    pub fn failed(token: TokenId) -> Self {
        Self {
            token,
            success: false,
            tx_hash: None,
        }
    }
}

/// The final, immutable result of a successful deployment.
///
/// Lists only what succeeded: partially failed batches surface as shorter
/// lists, not as errors. The cost is the originally computed figure, not
/// a recomputed "actual spent" amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentResult {
    /// The collection token's mint transaction.
    pub collection_tx: TxHash,
    /// Ledger identifiers of the successfully minted ticket tokens.
    pub tokens: Vec<TokenId>,
    /// Transactions of the successfully created sell-listings.
    pub offer_txs: Vec<TxHash>,
    /// The deployment cost computed up front and verified against the
    /// payment.
    pub total_cost: Decimal,
    /// When the deployment completed.
    pub deployed_at: DateTime<Utc>,
}

/// The orchestrator's phase machine.
///
/// Phases advance strictly in order; `Failed` is terminal and reachable
/// from any phase. No phase starts before the previous one fully
/// completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeploymentPhase {
    Idle,
    CostComputed,
    PaymentVerified,
    CollectionMinted,
    SlotsAcquired,
    TokensMinted,
    TokensResolved,
    OffersCreated,
    Done,
    Failed,
}

impl std::fmt::Display for DeploymentPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::CostComputed => write!(f, "COST_COMPUTED"),
            Self::PaymentVerified => write!(f, "PAYMENT_VERIFIED"),
            Self::CollectionMinted => write!(f, "COLLECTION_MINTED"),
            Self::SlotsAcquired => write!(f, "SLOTS_ACQUIRED"),
            Self::TokensMinted => write!(f, "TOKENS_MINTED"),
            Self::TokensResolved => write!(f, "TOKENS_RESOLVED"),
            Self::OffersCreated => write!(f, "OFFERS_CREATED"),
            Self::Done => write!(f, "DONE"),
            Self::Failed => write!(f, "FAILED"),
        }
    }
}
