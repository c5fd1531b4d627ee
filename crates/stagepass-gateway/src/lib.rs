//! # stagepass-gateway
//!
//! **Ledger boundary**: the async [`LedgerGateway`] trait, the operation
//! and record types that cross it, and subunit↔unit conversion.
//!
//! The remote ledger node is an opaque collaborator. This crate pins down
//! only its observable contract:
//!
//! 1. **Submit-and-await**: one operation in, one finality receipt out
//! 2. **Point lookups**: a transaction by reference, an account's live
//!    authorization slots, an account's owned tokens (in creation order),
//!    a token's active sell-listings
//! 3. **Currency**: amounts travel as integer subunits ("drops"); one
//!    unit is 1,000,000 drops
//!
//! Production implementations wrap the node's RPC protocol; tests use the
//! in-memory [`mock::MockLedger`] (behind the `test-helpers` feature).

pub mod operation;
pub mod records;

#[cfg(any(test, feature = "test-helpers"))]
pub mod mock;

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use stagepass_types::constants::{COST_PRECISION, DROPS_PER_UNIT};
use stagepass_types::{Address, Result, StagepassError, TokenId, TxHash};

pub use operation::LedgerOperation;
pub use records::{
    ListingRecord, SlotRecord, SubmitReceipt, TokenRecord, TransactionRecord, PAYMENT_TX_TYPE,
    RESULT_OK,
};

/// Call boundary to the remote ledger node.
///
/// Every method suspends the caller until the node answers; for
/// `submit_and_await` that means the operation has reached finality.
/// All methods are read-only against in-process state, so one gateway
/// instance is shared freely across concurrent batch units.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Submit one operation signed by `signer` and await its finality.
    ///
    /// A receipt with a non-success result code is an `Ok` return: the
    /// ledger answered, the operation failed. `Err` means the answer
    /// itself could not be obtained.
    async fn submit_and_await(
        &self,
        op: LedgerOperation,
        signer: &Address,
    ) -> Result<SubmitReceipt>;

    /// Look up a transaction by its identifier.
    async fn lookup_transaction(&self, hash: &TxHash) -> Result<TransactionRecord>;

    /// The account's currently live authorization slots.
    async fn account_slots(&self, address: &Address) -> Result<Vec<SlotRecord>>;

    /// The account's owned tokens, in creation order.
    async fn owned_tokens(&self, address: &Address) -> Result<Vec<TokenRecord>>;

    /// Active sell-listings for a token.
    async fn active_sell_listings(&self, token: &TokenId) -> Result<Vec<ListingRecord>>;
}

/// Convert an integer subunit amount to currency units.
#[must_use]
pub fn drops_to_units(drops: u64) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(drops), COST_PRECISION)
}

/// Convert a unit amount to integer subunits, rounding to
/// [`COST_PRECISION`] decimal places first so the result is always a
/// whole number of drops.
///
/// # Errors
/// `AmountNotRepresentable` for negative amounts or amounts too large for
/// the subunit range.
pub fn units_to_drops(amount: Decimal) -> Result<u64> {
    if amount.is_sign_negative() {
        return Err(StagepassError::AmountNotRepresentable { amount });
    }
    let rounded = amount.round_dp(COST_PRECISION);
    (rounded * Decimal::from(DROPS_PER_UNIT))
        .to_u64()
        .ok_or(StagepassError::AmountNotRepresentable { amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_to_units_scales_by_a_million() {
        assert_eq!(drops_to_units(1_000_000), Decimal::ONE);
        assert_eq!(drops_to_units(2_050_000), Decimal::new(205, 2));
        assert_eq!(drops_to_units(1), Decimal::new(1, 6));
    }

    #[test]
    fn units_to_drops_inverts() {
        assert_eq!(units_to_drops(Decimal::ONE).unwrap(), 1_000_000);
        assert_eq!(units_to_drops(Decimal::new(205, 2)).unwrap(), 2_050_000);
    }

    #[test]
    fn units_to_drops_rounds_sub_drop_precision() {
        // 0.12345678 units rounds to 0.123457 before conversion.
        let amount = Decimal::new(12_345_678, 8);
        assert_eq!(units_to_drops(amount).unwrap(), 123_457);
    }

    #[test]
    fn negative_amount_rejected() {
        let err = units_to_drops(Decimal::new(-1, 0)).unwrap_err();
        assert!(matches!(err, StagepassError::AmountNotRepresentable { .. }));
    }

    #[test]
    fn zero_is_zero_drops() {
        assert_eq!(units_to_drops(Decimal::ZERO).unwrap(), 0);
    }
}
