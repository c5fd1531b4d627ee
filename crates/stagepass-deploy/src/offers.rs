//! Concurrent batch creation of open-market sell-listings.
//!
//! Same shape as the mint batch: one operation per token, each bound to
//! its own authorization slot, all issued before any await, joined, and
//! collected into positionally aligned outcomes. One listing's rejection
//! never touches its siblings.

use futures::future::join_all;
use rust_decimal::Decimal;
use stagepass_gateway::{units_to_drops, LedgerGateway, LedgerOperation};
use stagepass_types::constants::COST_PRECISION;
use stagepass_types::{
    Address, AuthorizationSlot, OfferOutcome, Result, StagepassError, TokenId,
};

/// One sell-listing to create: the token, its ask price, and the slot
/// that authorizes the submission.
#[derive(Debug, Clone)]
pub struct OfferUnit {
    pub token: TokenId,
    pub ask_price: Decimal,
    pub slot: AuthorizationSlot,
}

/// Creates batches of sell-listings concurrently.
pub struct BatchOfferCreator<'a, G> {
    gateway: &'a G,
    operating_address: &'a Address,
}

impl<'a, G: LedgerGateway> BatchOfferCreator<'a, G> {
    #[must_use]
    pub fn new(gateway: &'a G, operating_address: &'a Address) -> Self {
        Self {
            gateway,
            operating_address,
        }
    }

    /// Create one open-market sell-listing per token at `ask_price`,
    /// consuming one slot each.
    ///
    /// The price is rounded to the ledger's subunit precision before
    /// encoding, so the listing never carries an amount the integer
    /// subunit representation cannot express. The batch path leaves the
    /// buyer unrestricted; direct sales to a specific address go through
    /// the API layer's own flow.
    ///
    /// # Errors
    /// `SlotShortfall` if fewer slots than tokens were supplied — checked
    /// before anything is submitted.
    pub async fn create_offers(
        &self,
        tokens: Vec<TokenId>,
        ask_price: Decimal,
        slots: &[AuthorizationSlot],
    ) -> Result<Vec<OfferOutcome>> {
        if slots.len() < tokens.len() {
            return Err(StagepassError::SlotShortfall {
                requested: u32::try_from(tokens.len()).unwrap_or(u32::MAX),
                available: u32::try_from(slots.len()).unwrap_or(u32::MAX),
            });
        }

        let ask = ask_price.round_dp(COST_PRECISION);
        let units: Vec<OfferUnit> = tokens
            .into_iter()
            .zip(slots.iter().copied())
            .map(|(token, slot)| OfferUnit {
                token,
                ask_price: ask,
                slot,
            })
            .collect();

        let submissions = units.into_iter().map(|mut unit| {
            let gateway = self.gateway;
            let signer = self.operating_address;
            async move {
                let amount_drops = match units_to_drops(unit.ask_price) {
                    Ok(drops) => drops,
                    Err(err) => {
                        tracing::warn!(token = %unit.token, %err, "offer rejected before submission");
                        return OfferOutcome::failed(unit.token);
                    }
                };
                let slot_sequence = unit.slot.consume();
                let receipt = gateway
                    .submit_and_await(
                        LedgerOperation::CreateSellOffer {
                            token: unit.token.clone(),
                            amount_drops,
                            slot_sequence: Some(slot_sequence),
                            destination: None,
                        },
                        signer,
                    )
                    .await;
                match receipt {
                    Ok(receipt) if receipt.succeeded() => {
                        OfferOutcome::succeeded(unit.token, receipt.tx_hash)
                    }
                    Ok(receipt) => {
                        tracing::warn!(
                            token = %unit.token,
                            code = %receipt.result_code,
                            "offer rejected by ledger"
                        );
                        OfferOutcome::failed(unit.token)
                    }
                    Err(err) => {
                        tracing::warn!(token = %unit.token, %err, "offer submission failed");
                        OfferOutcome::failed(unit.token)
                    }
                }
            }
        });

        Ok(join_all(submissions).await)
    }
}

#[cfg(test)]
mod tests {
    use stagepass_gateway::mock::MockLedger;

    use super::*;

    fn operator() -> Address {
        Address::new("rOperator")
    }

    fn setup(ledger: &MockLedger, token_count: u32) -> (Vec<TokenId>, Vec<AuthorizationSlot>) {
        let tokens = (0..token_count)
            .map(|i| ledger.seed_token(1_000 + u64::from(i), "AA"))
            .collect();
        ledger.seed_slots(token_count);
        let slots = (1..=token_count).map(AuthorizationSlot::new).collect();
        (tokens, slots)
    }

    #[tokio::test]
    async fn listings_created_for_every_token() {
        let ledger = MockLedger::new();
        let (tokens, slots) = setup(&ledger, 3);
        let operating = operator();
        let creator = BatchOfferCreator::new(&ledger, &operating);

        let outcomes = creator
            .create_offers(tokens.clone(), Decimal::new(5, 0), &slots)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.success));
        for token in &tokens {
            let listings = ledger.active_sell_listings(token).await.unwrap();
            assert_eq!(listings.len(), 1);
        }
    }

    #[tokio::test]
    async fn one_rejected_listing_leaves_siblings_alone() {
        let ledger = MockLedger::new();
        let (tokens, slots) = setup(&ledger, 3);
        ledger.fail_offers_for(&tokens[1]);
        let operating = operator();
        let creator = BatchOfferCreator::new(&ledger, &operating);

        let outcomes = creator
            .create_offers(tokens.clone(), Decimal::new(5, 0), &slots)
            .await
            .unwrap();

        assert!(outcomes[0].success);
        assert!(!outcomes[1].success);
        assert!(outcomes[2].success);
        assert_eq!(ledger.offer_calls(), 3);
    }

    #[tokio::test]
    async fn price_rounded_to_subunit_precision() {
        let ledger = MockLedger::new();
        let (tokens, slots) = setup(&ledger, 1);
        let operating = operator();
        let creator = BatchOfferCreator::new(&ledger, &operating);

        // 4.99999949 rounds to 4.999999, an exact drop count.
        let outcomes = creator
            .create_offers(tokens, Decimal::new(499_999_949, 8), &slots)
            .await
            .unwrap();
        assert!(outcomes[0].success);
    }

    #[tokio::test]
    async fn short_slot_list_fails_before_any_submission() {
        let ledger = MockLedger::new();
        let (tokens, _) = setup(&ledger, 2);
        let operating = operator();
        let creator = BatchOfferCreator::new(&ledger, &operating);

        let err = creator
            .create_offers(tokens, Decimal::new(5, 0), &[])
            .await
            .unwrap_err();
        assert!(matches!(err, StagepassError::SlotShortfall { .. }));
        assert_eq!(ledger.offer_calls(), 0);
    }
}
