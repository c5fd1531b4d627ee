//! The deployment orchestrator — thin sequencing layer that owns the
//! invariants.
//!
//! Phases run strictly in order; no phase starts before the previous one
//! fully completes, and nothing calls back upward. Partial success inside
//! a batch is carried forward as a shorter list; a batch with zero
//! successes fails the deployment. There is no automatic retry and no
//! compensation for earlier phases — a failed deployment is re-invoked
//! from scratch by the caller, allocating fresh slots and a fresh
//! collection token.
//!
//! Concurrent deployments over the same operating account are not guarded
//! against in-process; admission control is the embedding service's
//! responsibility (see DESIGN.md).

use chrono::Utc;
use rust_decimal::Decimal;
use stagepass_gateway::{LedgerGateway, ListingRecord};
use stagepass_types::{
    config::required_slots, DeployConfig, DeploymentId, DeploymentPhase, DeploymentRequest,
    DeploymentResult, Result, StagepassError, TokenId, TokenMetadata, TxHash,
};

use crate::{
    slots, BatchOfferCreator, BatchTokenMinter, CollectionMinter, PaymentVerifier, SlotPool,
    TokenIdentityResolver,
};

/// Sequences a full event deployment against the ledger.
pub struct DeploymentOrchestrator<G> {
    gateway: G,
    config: DeployConfig,
}

impl<G: LedgerGateway> DeploymentOrchestrator<G> {
    #[must_use]
    pub fn new(gateway: G, config: DeployConfig) -> Self {
        Self { gateway, config }
    }

    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    #[must_use]
    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// Total up-front cost of deploying `max_supply` tickets.
    ///
    /// Deterministic and monotone in `max_supply`; the organizer pays this
    /// before calling [`deploy`](Self::deploy).
    #[must_use]
    pub fn deployment_cost(&self, max_supply: u32) -> Decimal {
        self.config.cost.deployment_cost(max_supply)
    }

    /// Active sell-listings for one token. Passthrough for the API layer's
    /// ticket views.
    pub async fn sell_listings(&self, token: &TokenId) -> Result<Vec<ListingRecord>> {
        self.gateway.active_sell_listings(token).await
    }

    /// Run a full deployment: verify the payment, mint the collection,
    /// acquire slots, mint the ticket batch, resolve token identities,
    /// create the sell-listings, and assemble the result.
    ///
    /// # Errors
    /// Any phase error is terminal for this attempt. Operations already
    /// finalized stay on the ledger; re-invoking deploys a fresh batch
    /// (not idempotent).
    pub async fn deploy(&self, request: &DeploymentRequest) -> Result<DeploymentResult> {
        let deployment_id = DeploymentId::new();
        match self.run(deployment_id, request).await {
            Ok(result) => {
                tracing::info!(
                    %deployment_id,
                    phase = %DeploymentPhase::Done,
                    tokens = result.tokens.len(),
                    offers = result.offer_txs.len(),
                    cost = %result.total_cost,
                    "deployment complete"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(
                    %deployment_id,
                    phase = %DeploymentPhase::Failed,
                    %err,
                    "deployment failed"
                );
                Err(err)
            }
        }
    }

    async fn run(
        &self,
        deployment_id: DeploymentId,
        request: &DeploymentRequest,
    ) -> Result<DeploymentResult> {
        request.validate()?;
        let operating = &self.config.operating_address;

        let total_cost = self.deployment_cost(request.max_supply);
        tracing::info!(
            %deployment_id,
            phase = %DeploymentPhase::CostComputed,
            event_id = request.event_id,
            max_supply = request.max_supply,
            cost = %total_cost,
            "deployment cost computed"
        );

        PaymentVerifier::new(&self.gateway, operating)
            .verify(&request.payment_hash, total_cost, &request.payer)
            .await?;
        tracing::info!(%deployment_id, phase = %DeploymentPhase::PaymentVerified, "payment verified");

        let collection_tx = CollectionMinter::new(&self.gateway, operating)
            .mint(request)
            .await?;
        tracing::info!(
            %deployment_id,
            phase = %DeploymentPhase::CollectionMinted,
            tx = %collection_tx,
            "collection minted"
        );

        let slot_count = required_slots(request.max_supply);
        let acquired = SlotPool::new(&self.gateway, operating)
            .acquire(slot_count)
            .await?;
        let (mint_slots, offer_slots) = slots::partition(acquired, request.max_supply)?;
        tracing::info!(
            %deployment_id,
            phase = %DeploymentPhase::SlotsAcquired,
            count = slot_count,
            "authorization slots acquired"
        );

        let metadata: Vec<TokenMetadata> = (0..request.max_supply)
            .map(|i| TokenMetadata::ticket(&request.name, request.image_uri.clone(), request.event_id, i))
            .collect();
        let mint_outcomes = BatchTokenMinter::new(&self.gateway, operating)
            .mint_batch(metadata, &mint_slots, request.event_id)
            .await?;
        let minted = mint_outcomes.iter().filter(|o| o.success).count();
        if minted == 0 {
            return Err(StagepassError::NoTokensMinted {
                attempted: request.max_supply,
            });
        }
        tracing::info!(
            %deployment_id,
            phase = %DeploymentPhase::TokensMinted,
            minted,
            failed = mint_outcomes.len() - minted,
            "ticket batch minted"
        );

        let tokens = TokenIdentityResolver::new(&self.gateway)
            .resolve_recent(operating, minted)
            .await?;
        tracing::info!(
            %deployment_id,
            phase = %DeploymentPhase::TokensResolved,
            resolved = tokens.len(),
            "token identities resolved"
        );

        let offer_outcomes = BatchOfferCreator::new(&self.gateway, operating)
            .create_offers(tokens.clone(), request.unit_price, &offer_slots)
            .await?;
        let offer_txs: Vec<TxHash> = offer_outcomes
            .iter()
            .filter_map(|o| o.tx_hash.clone())
            .collect();
        if offer_txs.is_empty() {
            return Err(StagepassError::NoOffersCreated {
                attempted: u32::try_from(offer_outcomes.len()).unwrap_or(u32::MAX),
            });
        }
        tracing::info!(
            %deployment_id,
            phase = %DeploymentPhase::OffersCreated,
            created = offer_txs.len(),
            failed = offer_outcomes.len() - offer_txs.len(),
            "sell-listings created"
        );

        Ok(DeploymentResult {
            collection_tx,
            tokens,
            offer_txs,
            total_cost,
            deployed_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use stagepass_gateway::mock::MockLedger;
    use stagepass_gateway::TransactionRecord;
    use stagepass_types::Address;

    use super::*;

    fn request() -> DeploymentRequest {
        DeploymentRequest {
            name: "Summer Gala".to_string(),
            description: "Annual fundraiser".to_string(),
            event_id: 42,
            max_supply: 3,
            image_uri: "ipfs://QmImage".to_string(),
            unit_price: Decimal::new(5, 0),
            payer: Address::new("rOrganizer"),
            payment_hash: TxHash::new("PAY1"),
        }
    }

    fn orchestrator_with_payment(drops: u64) -> DeploymentOrchestrator<MockLedger> {
        let ledger = MockLedger::new();
        ledger.insert_transaction(
            TxHash::new("PAY1"),
            TransactionRecord::payment(Address::new("rOrganizer"), Address::new("rOperator"), drops),
        );
        DeploymentOrchestrator::new(ledger, DeployConfig::new(Address::new("rOperator")))
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_the_ledger() {
        let orch = orchestrator_with_payment(10_000_000);
        let mut req = request();
        req.max_supply = 0;

        let err = orch.deploy(&req).await.unwrap_err();
        assert!(matches!(err, StagepassError::InvalidRequest { .. }));
        assert_eq!(orch.gateway().mint_calls(), 0);
        assert_eq!(orch.gateway().slot_create_calls(), 0);
    }

    #[tokio::test]
    async fn cost_delegates_to_schedule() {
        let orch = orchestrator_with_payment(0);
        // base 1 + 3 * (0.25 + 0.1)
        assert_eq!(orch.deployment_cost(3), Decimal::new(205, 2));
    }

    #[tokio::test]
    async fn slot_failure_aborts_after_collection_mint() {
        let orch = orchestrator_with_payment(10_000_000);
        orch.gateway().fail_slot_creation();

        let err = orch.deploy(&request()).await.unwrap_err();
        assert!(matches!(err, StagepassError::SlotAcquisitionFailed { .. }));
        // Collection minted, but no ticket mint was ever attempted.
        assert_eq!(orch.gateway().mint_calls(), 1);
        assert_eq!(orch.gateway().offer_calls(), 0);
    }

    #[tokio::test]
    async fn sell_listings_passthrough() {
        let orch = orchestrator_with_payment(10_000_000);
        let result = orch.deploy(&request()).await.unwrap();

        for token in &result.tokens {
            let listings = orch.sell_listings(token).await.unwrap();
            assert_eq!(listings.len(), 1);
        }
    }
}
