//! Payment verification — the read-only gate in front of every deployment.
//!
//! The organizer submits the payment out of band and hands over its
//! transaction reference. Verification inspects the ledger record: the
//! transaction must be a finalized simple transfer from the declared payer
//! to the operating account, delivering at least the expected amount.
//!
//! The delivered amount may sit in any of three fields depending on how
//! the client constructed the transfer. The fields are checked in a fixed
//! priority order and the first present value wins.

use rust_decimal::Decimal;
use stagepass_gateway::{drops_to_units, LedgerGateway, PAYMENT_TX_TYPE, RESULT_OK};
use stagepass_types::{Address, Result, StagepassError, TxHash};

/// Verifies an externally-submitted payment against the ledger.
pub struct PaymentVerifier<'a, G> {
    gateway: &'a G,
    /// The operating account every payment must be addressed to.
    operating_address: &'a Address,
}

impl<'a, G: LedgerGateway> PaymentVerifier<'a, G> {
    #[must_use]
    pub fn new(gateway: &'a G, operating_address: &'a Address) -> Self {
        Self {
            gateway,
            operating_address,
        }
    }

    /// Verify that `payment` is a finalized transfer of at least
    /// `expected` units from `payer` to the operating account.
    ///
    /// Read-only: no ledger state changes, no retries. Over-payment is
    /// accepted; under-payment by any margin is rejected.
    ///
    /// # Errors
    /// One of the 1xx verification errors; all are terminal for the
    /// deployment attempt.
    pub async fn verify(
        &self,
        payment: &TxHash,
        expected: Decimal,
        payer: &Address,
    ) -> Result<()> {
        let record = self.gateway.lookup_transaction(payment).await?;

        if record.tx_type != PAYMENT_TX_TYPE {
            return Err(StagepassError::WrongPaymentType {
                actual: record.tx_type,
            });
        }
        if record.source != *payer {
            return Err(StagepassError::WrongPayer {
                expected: payer.clone(),
                actual: record.source,
            });
        }
        if record.destination.as_ref() != Some(self.operating_address) {
            return Err(StagepassError::WrongDestination {
                expected: self.operating_address.clone(),
            });
        }
        if record.result_code != RESULT_OK {
            return Err(StagepassError::PaymentNotFinalized {
                code: record.result_code,
            });
        }

        // Fixed priority: direct amount, then the deliverable bound, then
        // the post-execution delivered metadata.
        let drops = record
            .amount_drops
            .or(record.deliver_max_drops)
            .or(record.delivered_drops)
            .ok_or(StagepassError::AmountMissing)?;

        let delivered = drops_to_units(drops);
        if delivered < expected {
            return Err(StagepassError::InsufficientPayment {
                required: expected,
                delivered,
            });
        }
        Ok(())
    }
}
