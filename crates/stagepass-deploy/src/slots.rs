//! Authorization slot acquisition and partitioning.
//!
//! One batch-creation operation requests every slot a deployment needs.
//! The creation receipt does not enumerate the assigned sequence numbers,
//! so the pool re-reads the account's live slots afterwards and takes the
//! `count` newest — that is how fresh slots are told apart from any left
//! behind by earlier runs.

use stagepass_gateway::{LedgerGateway, LedgerOperation};
use stagepass_types::{Address, AuthorizationSlot, Result, StagepassError};

/// Acquires batches of single-use authorization slots for the operating
/// account.
pub struct SlotPool<'a, G> {
    gateway: &'a G,
    operating_address: &'a Address,
}

impl<'a, G: LedgerGateway> SlotPool<'a, G> {
    #[must_use]
    pub fn new(gateway: &'a G, operating_address: &'a Address) -> Self {
        Self {
            gateway,
            operating_address,
        }
    }

    /// Create `count` slots in one batch and return them newest-first.
    ///
    /// All-or-nothing: a failed creation or a shortfall after re-reading
    /// fails the whole step. Unconsumed slots from a failed deployment are
    /// simply abandoned; they are cheap and a retry allocates fresh ones.
    ///
    /// # Errors
    /// `SlotAcquisitionFailed` if the batch creation does not finalize
    /// successfully; `SlotShortfall` if fewer than `count` slots are live
    /// afterwards.
    pub async fn acquire(&self, count: u32) -> Result<Vec<AuthorizationSlot>> {
        let receipt = self
            .gateway
            .submit_and_await(
                LedgerOperation::CreateSlots { count },
                self.operating_address,
            )
            .await?;
        if !receipt.succeeded() {
            return Err(StagepassError::SlotAcquisitionFailed {
                code: receipt.result_code,
            });
        }

        let mut records = self.gateway.account_slots(self.operating_address).await?;
        // Newest first: the freshly created slots carry the highest
        // sequence numbers.
        records.sort_by(|a, b| b.sequence.cmp(&a.sequence));

        let available = u32::try_from(records.len()).unwrap_or(u32::MAX);
        if available < count {
            return Err(StagepassError::SlotShortfall {
                requested: count,
                available,
            });
        }

        Ok(records
            .into_iter()
            .take(count as usize)
            .map(|r| AuthorizationSlot::new(r.sequence))
            .collect())
    }
}

/// Split an acquired slot list into the mint pool and the offer pool:
/// two contiguous halves of `mint_count` each, in acquisition order.
///
/// # Errors
/// `SlotShortfall` if the list is shorter than `2 * mint_count`.
pub fn partition(
    slots: Vec<AuthorizationSlot>,
    mint_count: u32,
) -> Result<(Vec<AuthorizationSlot>, Vec<AuthorizationSlot>)> {
    let needed = mint_count as usize * 2;
    if slots.len() < needed {
        return Err(StagepassError::SlotShortfall {
            requested: u32::try_from(needed).unwrap_or(u32::MAX),
            available: u32::try_from(slots.len()).unwrap_or(u32::MAX),
        });
    }
    let mut mint_pool = slots;
    let offer_pool = mint_pool.split_off(mint_count as usize);
    Ok((mint_pool, offer_pool))
}
