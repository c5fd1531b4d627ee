//! Concurrent batch minting of ticket tokens.
//!
//! Every unit carries its own authorization slot, so the units have no
//! ledger-level ordering dependency on each other: all submissions are
//! issued before any await, then joined, making a batch of N cost roughly
//! one finality round-trip instead of N.
//!
//! Per-unit failures are local. A unit the ledger rejects is recorded as a
//! failed outcome and never cancels or blocks its siblings; the caller
//! decides what a partially successful batch means.

use futures::future::join_all;
use stagepass_gateway::{LedgerGateway, LedgerOperation};
use stagepass_types::constants::TAXON_STRIDE;
use stagepass_types::{
    Address, AuthorizationSlot, MintOutcome, Result, StagepassError, TokenMetadata,
};

/// One ticket to mint: metadata, batch position, and the slot that
/// authorizes its submission.
#[derive(Debug, Clone)]
pub struct MintUnit {
    pub index: u32,
    pub metadata: TokenMetadata,
    pub slot: AuthorizationSlot,
}

/// Mints batches of uniquely tagged tokens concurrently.
pub struct BatchTokenMinter<'a, G> {
    gateway: &'a G,
    operating_address: &'a Address,
}

impl<'a, G: LedgerGateway> BatchTokenMinter<'a, G> {
    #[must_use]
    pub fn new(gateway: &'a G, operating_address: &'a Address) -> Self {
        Self {
            gateway,
            operating_address,
        }
    }

    /// Mint one token per metadata entry, each bound to one slot and
    /// tagged `namespace_base * TAXON_STRIDE + index`.
    ///
    /// Outcomes are positionally aligned with `metadata`. The returned
    /// list always has one entry per unit; inspect the success flags for
    /// partial failure.
    ///
    /// # Errors
    /// `SlotShortfall` if fewer slots than metadata entries were supplied —
    /// checked before anything is submitted.
    pub async fn mint_batch(
        &self,
        metadata: Vec<TokenMetadata>,
        slots: &[AuthorizationSlot],
        namespace_base: u64,
    ) -> Result<Vec<MintOutcome>> {
        if slots.len() < metadata.len() {
            return Err(StagepassError::SlotShortfall {
                requested: u32::try_from(metadata.len()).unwrap_or(u32::MAX),
                available: u32::try_from(slots.len()).unwrap_or(u32::MAX),
            });
        }

        let units: Vec<MintUnit> = metadata
            .into_iter()
            .zip(slots.iter().copied())
            .enumerate()
            .map(|(i, (metadata, slot))| MintUnit {
                index: u32::try_from(i).unwrap_or(u32::MAX),
                metadata,
                slot,
            })
            .collect();

        let submissions = units.into_iter().map(|mut unit| {
            let gateway = self.gateway;
            let signer = self.operating_address;
            async move {
                let taxon = namespace_base * TAXON_STRIDE + u64::from(unit.index);
                let uri = match unit.metadata.encode() {
                    Ok(uri) => uri,
                    Err(err) => {
                        tracing::warn!(index = unit.index, %err, "mint unit rejected before submission");
                        return MintOutcome::failed(unit.index);
                    }
                };
                let slot_sequence = unit.slot.consume();
                let receipt = gateway
                    .submit_and_await(
                        LedgerOperation::MintToken {
                            uri,
                            taxon,
                            slot_sequence: Some(slot_sequence),
                        },
                        signer,
                    )
                    .await;
                match receipt {
                    Ok(receipt) if receipt.succeeded() => {
                        MintOutcome::succeeded(unit.index, receipt.tx_hash)
                    }
                    Ok(receipt) => {
                        tracing::warn!(
                            index = unit.index,
                            code = %receipt.result_code,
                            "mint unit rejected by ledger"
                        );
                        MintOutcome::failed(unit.index)
                    }
                    Err(err) => {
                        tracing::warn!(index = unit.index, %err, "mint unit submission failed");
                        MintOutcome::failed(unit.index)
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

    fn ticket_metadata(count: u32) -> Vec<TokenMetadata> {
        (0..count)
            .map(|i| TokenMetadata::ticket("Gala", "ipfs://img", 42, i))
            .collect()
    }

    fn fresh_slots(ledger: &MockLedger, count: u32) -> Vec<AuthorizationSlot> {
        ledger.seed_slots(count);
        (1..=count).map(AuthorizationSlot::new).collect()
    }

    #[tokio::test]
    async fn full_batch_succeeds() {
        let ledger = MockLedger::new();
        let slots = fresh_slots(&ledger, 4);
        let operating = operator();
        let minter = BatchTokenMinter::new(&ledger, &operating);

        let outcomes = minter
            .mint_batch(ticket_metadata(4), &slots, 42)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 4);
        assert!(outcomes.iter().all(|o| o.success && o.tx_hash.is_some()));
        assert_eq!(ledger.token_count(), 4);
        // Every unit consumed exactly its own slot.
        let mut consumed = ledger.consumed_slot_sequences();
        consumed.sort_unstable();
        assert_eq!(consumed, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn one_rejected_unit_leaves_siblings_alone() {
        let ledger = MockLedger::new();
        let slots = fresh_slots(&ledger, 3);
        // Unit 1 carries taxon 42 * 1000 + 1.
        ledger.fail_mints_with_taxon(42_001);
        let operating = operator();
        let minter = BatchTokenMinter::new(&ledger, &operating);

        let outcomes = minter
            .mint_batch(ticket_metadata(3), &slots, 42)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].success);
        assert!(!outcomes[1].success && outcomes[1].tx_hash.is_none());
        assert!(outcomes[2].success);
        assert_eq!(ledger.mint_calls(), 3, "failed unit must not block retries of siblings");
        assert_eq!(ledger.token_count(), 2);
    }

    #[tokio::test]
    async fn taxons_are_distinct_per_unit() {
        let ledger = MockLedger::new();
        let slots = fresh_slots(&ledger, 3);
        let operating = operator();
        let minter = BatchTokenMinter::new(&ledger, &operating);

        minter
            .mint_batch(ticket_metadata(3), &slots, 7)
            .await
            .unwrap();

        let tokens = ledger.owned_tokens(&operating).await.unwrap();
        let mut taxons: Vec<u64> = tokens.iter().map(|t| t.taxon).collect();
        taxons.sort_unstable();
        assert_eq!(taxons, vec![7_000, 7_001, 7_002]);
    }

    #[tokio::test]
    async fn short_slot_list_fails_before_any_submission() {
        let ledger = MockLedger::new();
        let slots = fresh_slots(&ledger, 2);
        let operating = operator();
        let minter = BatchTokenMinter::new(&ledger, &operating);

        let err = minter
            .mint_batch(ticket_metadata(3), &slots, 42)
            .await
            .unwrap_err();
        assert!(matches!(err, StagepassError::SlotShortfall { .. }));
        assert_eq!(ledger.mint_calls(), 0);
    }

    #[tokio::test]
    async fn oversized_unit_fails_locally_without_submission() {
        let ledger = MockLedger::new();
        let slots = fresh_slots(&ledger, 2);
        let operating = operator();
        let minter = BatchTokenMinter::new(&ledger, &operating);

        let metadata = vec![
            TokenMetadata::ticket("Gala", "ipfs://img", 42, 0),
            TokenMetadata::ticket("Gala", "ipfs://".to_string() + &"Q".repeat(300), 42, 1),
        ];
        let outcomes = minter.mint_batch(metadata, &slots, 42).await.unwrap();

        assert!(outcomes[0].success);
        assert!(!outcomes[1].success);
        assert_eq!(ledger.mint_calls(), 1, "oversized unit must never be submitted");
    }
}
