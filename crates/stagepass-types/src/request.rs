//! The deployment request — immutable once accepted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Address, Result, StagepassError, TxHash};

/// Everything the orchestrator needs to turn one up-front payment into a
/// deployed event: a minted collection token, `max_supply` ticket tokens,
/// and one open-market sell-listing per ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentRequest {
    /// Human-readable event name. Truncated inside token metadata,
    /// never in the request itself.
    pub name: String,
    /// Free-form event description. Not carried on-ledger.
    pub description: String,
    /// External event identifier, also used as the collection's
    /// namespace tag.
    pub event_id: u64,
    /// Number of ticket tokens to mint. Must be positive.
    pub max_supply: u32,
    /// URI of the event image, carried inside token metadata.
    pub image_uri: String,
    /// Ask price per ticket for the sell-listings, in currency units.
    pub unit_price: Decimal,
    /// The organizer's account, expected source of the payment.
    pub payer: Address,
    /// Reference to the organizer's already-submitted payment.
    pub payment_hash: TxHash,
}

impl DeploymentRequest {
    /// Validate the request before any ledger interaction.
    ///
    /// # Errors
    /// Returns `InvalidRequest` naming the first failed check.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StagepassError::InvalidRequest {
                reason: "Event name must not be empty".to_string(),
            });
        }
        if self.max_supply == 0 {
            return Err(StagepassError::InvalidRequest {
                reason: "Max supply must be positive".to_string(),
            });
        }
        if self.unit_price.is_sign_negative() {
            return Err(StagepassError::InvalidRequest {
                reason: "Unit price must not be negative".to_string(),
            });
        }
        if self.image_uri.trim().is_empty() {
            return Err(StagepassError::InvalidRequest {
                reason: "Image URI must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
