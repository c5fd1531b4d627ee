//! Authorization slots — the single-use submission rights that make
//! concurrent ledger operations possible.
//!
//! Ordinary operations consume the account's strictly sequential counter,
//! forcing serialization. A slot is a pre-created, order-independent
//! authorization: each backs exactly one operation, and reuse is rejected
//! by the ledger itself. StagePass acquires them in one batch and hands
//! each out to exactly one mint or offer by index, so no in-process lock
//! is needed.

use serde::{Deserialize, Serialize};

/// One pre-authorized, single-use submission right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorizationSlot {
    /// Ledger-assigned sequence number, unique per owning account.
    pub sequence: u32,
    /// Local bookkeeping only. The ledger enforces single use regardless.
    pub consumed: bool,
}

impl AuthorizationSlot {
    #[must_use]
    pub fn new(sequence: u32) -> Self {
        Self {
            sequence,
            consumed: false,
        }
    }

    /// Mark this slot as consumed. Returns the sequence number to bind
    /// into the operation.
    pub fn consume(&mut self) -> u32 {
        self.consumed = true;
        self.sequence
    }
}
