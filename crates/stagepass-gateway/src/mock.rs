//! In-memory ledger for tests.
//!
//! `MockLedger` implements [`LedgerGateway`] over a mutex-protected state
//! table. It models the ledger behaviors the orchestrator depends on:
//!
//! - slot batches are issued with monotonically increasing sequences, and
//!   each slot is single-use — a reuse attempt comes back as a failed
//!   receipt, exactly like the real ledger
//! - consumed slots disappear from the account's slot list
//! - minted tokens append to the owner's token list in creation order
//! - failures are injectable per mint taxon, per offered token, and for
//!   slot creation as a whole
//! - every submission path is counted, so tests can assert an operation
//!   was never attempted

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use stagepass_types::{Address, Result, TokenId, TxHash};

use crate::{
    LedgerGateway, LedgerOperation, ListingRecord, SlotRecord, SubmitReceipt, TokenRecord,
    TransactionRecord, RESULT_OK,
};

/// Result code returned when an injected failure fires.
const RESULT_REJECTED: &str = "temMALFORMED";
/// Result code returned when an operation references a missing or
/// already-consumed slot.
const RESULT_NO_SLOT: &str = "tefNO_TICKET";
/// Result code returned when slot creation is set to fail.
const RESULT_SLOT_CREATE_FAILED: &str = "tecDIR_FULL";

#[derive(Default)]
struct MockState {
    transactions: HashMap<TxHash, TransactionRecord>,
    live_slots: Vec<SlotRecord>,
    consumed_slots: Vec<u32>,
    next_slot_sequence: u32,
    tokens: Vec<TokenRecord>,
    listings: HashMap<TokenId, Vec<ListingRecord>>,
    next_tx: u64,
    next_token: u64,
    fail_taxons: HashSet<u64>,
    fail_offer_tokens: HashSet<TokenId>,
    fail_all_offers: bool,
    fail_slot_creation: bool,
    mint_calls: u64,
    offer_calls: u64,
    slot_create_calls: u64,
}

impl MockState {
    fn next_tx_hash(&mut self) -> TxHash {
        self.next_tx += 1;
        TxHash::new(format!("{:064X}", 0xA000_0000_u64 + self.next_tx))
    }

    fn next_token_id(&mut self) -> TokenId {
        self.next_token += 1;
        TokenId::new(format!("{:064X}", 0xB000_0000_u64 + self.next_token))
    }

    /// Consume a slot if it is live. `None` means the operation carried
    /// no slot (ordinary sequential submission).
    fn try_consume_slot(&mut self, sequence: Option<u32>) -> bool {
        let Some(seq) = sequence else {
            return true;
        };
        let Some(pos) = self.live_slots.iter().position(|s| s.sequence == seq) else {
            return false;
        };
        self.live_slots.remove(pos);
        self.consumed_slots.push(seq);
        true
    }

    fn receipt(&mut self, result_code: &str) -> SubmitReceipt {
        SubmitReceipt {
            finalized: true,
            result_code: result_code.to_string(),
            tx_hash: self.next_tx_hash(),
        }
    }
}

/// In-memory [`LedgerGateway`] implementation.
#[derive(Default)]
pub struct MockLedger {
    state: Mutex<MockState>,
}

impl MockLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().expect("mock ledger state poisoned")
    }

    /// Script a transaction record for `lookup_transaction`.
    pub fn insert_transaction(&self, hash: TxHash, record: TransactionRecord) {
        self.state().transactions.insert(hash, record);
    }

    /// Pre-populate live slots, as if an earlier run left some behind.
    pub fn seed_slots(&self, count: u32) {
        let mut state = self.state();
        for _ in 0..count {
            state.next_slot_sequence += 1;
            let sequence = state.next_slot_sequence;
            state.live_slots.push(SlotRecord { sequence });
        }
    }

    /// Pre-populate an owned token, as if minted by an earlier run.
    pub fn seed_token(&self, taxon: u64, uri: &str) -> TokenId {
        let mut state = self.state();
        let token_id = state.next_token_id();
        state.tokens.push(TokenRecord {
            token_id: token_id.clone(),
            taxon,
            uri: uri.to_string(),
        });
        token_id
    }

    /// Make every mint with this taxon fail at the ledger.
    pub fn fail_mints_with_taxon(&self, taxon: u64) {
        self.state().fail_taxons.insert(taxon);
    }

    /// Make every sell-listing for this token fail at the ledger.
    pub fn fail_offers_for(&self, token: &TokenId) {
        self.state().fail_offer_tokens.insert(token.clone());
    }

    /// Make every sell-listing fail, regardless of token.
    pub fn fail_all_offers(&self) {
        self.state().fail_all_offers = true;
    }

    /// Make the next slot batch-creation fail.
    pub fn fail_slot_creation(&self) {
        self.state().fail_slot_creation = true;
    }

    #[must_use]
    pub fn mint_calls(&self) -> u64 {
        self.state().mint_calls
    }

    #[must_use]
    pub fn offer_calls(&self) -> u64 {
        self.state().offer_calls
    }

    #[must_use]
    pub fn slot_create_calls(&self) -> u64 {
        self.state().slot_create_calls
    }

    /// Sequences of every slot consumed so far, in consumption order.
    #[must_use]
    pub fn consumed_slot_sequences(&self) -> Vec<u32> {
        self.state().consumed_slots.clone()
    }

    #[must_use]
    pub fn token_count(&self) -> usize {
        self.state().tokens.len()
    }
}

#[async_trait]
impl LedgerGateway for MockLedger {
    async fn submit_and_await(
        &self,
        op: LedgerOperation,
        _signer: &Address,
    ) -> Result<SubmitReceipt> {
        let mut state = self.state();
        match op {
            LedgerOperation::CreateSlots { count } => {
                state.slot_create_calls += 1;
                if state.fail_slot_creation {
                    return Ok(state.receipt(RESULT_SLOT_CREATE_FAILED));
                }
                for _ in 0..count {
                    state.next_slot_sequence += 1;
                    let sequence = state.next_slot_sequence;
                    state.live_slots.push(SlotRecord { sequence });
                }
                Ok(state.receipt(RESULT_OK))
            }
            LedgerOperation::MintToken {
                uri,
                taxon,
                slot_sequence,
            } => {
                state.mint_calls += 1;
                if !state.try_consume_slot(slot_sequence) {
                    return Ok(state.receipt(RESULT_NO_SLOT));
                }
                if state.fail_taxons.contains(&taxon) {
                    return Ok(state.receipt(RESULT_REJECTED));
                }
                let token_id = state.next_token_id();
                state.tokens.push(TokenRecord {
                    token_id,
                    taxon,
                    uri,
                });
                Ok(state.receipt(RESULT_OK))
            }
            LedgerOperation::CreateSellOffer {
                token,
                amount_drops: _,
                slot_sequence,
                destination: _,
            } => {
                state.offer_calls += 1;
                if !state.try_consume_slot(slot_sequence) {
                    return Ok(state.receipt(RESULT_NO_SLOT));
                }
                if state.fail_all_offers || state.fail_offer_tokens.contains(&token) {
                    return Ok(state.receipt(RESULT_REJECTED));
                }
                let listing_id = format!("{:064X}", 0xC000_0000_u64 + state.next_tx);
                state
                    .listings
                    .entry(token)
                    .or_default()
                    .push(ListingRecord { listing_id });
                Ok(state.receipt(RESULT_OK))
            }
        }
    }

    async fn lookup_transaction(&self, hash: &TxHash) -> Result<TransactionRecord> {
        self.state()
            .transactions
            .get(hash)
            .cloned()
            .ok_or_else(|| stagepass_types::StagepassError::PaymentNotFound(hash.clone()))
    }

    async fn account_slots(&self, _address: &Address) -> Result<Vec<SlotRecord>> {
        Ok(self.state().live_slots.clone())
    }

    async fn owned_tokens(&self, _address: &Address) -> Result<Vec<TokenRecord>> {
        Ok(self.state().tokens.clone())
    }

    async fn active_sell_listings(&self, token: &TokenId) -> Result<Vec<ListingRecord>> {
        Ok(self
            .state()
            .listings
            .get(token)
            .cloned()
            .unwrap_or_default())
    }
}
