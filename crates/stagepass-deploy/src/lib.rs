//! # stagepass-deploy
//!
//! **Deployment core**: turns "an organizer paid X units" into "N
//! collectible, individually sellable ticket tokens exist on the ledger".
//!
//! ## Architecture
//!
//! The orchestrator sequences six single-purpose components, each talking
//! to the ledger through the gateway and never back upward:
//!
//! 1. **PaymentVerifier**: confirms the referenced payment is a finalized
//!    transfer of at least the computed cost to the operating account
//! 2. **CollectionMinter**: mints the event's collection token
//! 3. **SlotPool**: acquires `2 × max_supply` single-use authorization
//!    slots in one batch and partitions them
//! 4. **BatchTokenMinter**: mints one token per ticket concurrently, each
//!    consuming one slot
//! 5. **TokenIdentityResolver**: re-reads the account's token list to learn
//!    the ledger-assigned identifiers
//! 6. **BatchOfferCreator**: creates one open-market sell-listing per
//!    minted token, each consuming one slot from the second pool
//!
//! ## Deployment Flow
//!
//! ```text
//! deploy() → verify payment → mint collection → acquire 2k slots
//!          → mint k tokens (first half) → resolve token ids
//!          → create k offers (second half) → DeploymentResult
//! ```
//!
//! Per-unit failures inside a batch are local: the phase proceeds with
//! whatever subset succeeded. A batch with **zero** successes fails the
//! deployment.

pub mod collection;
pub mod mint;
pub mod offers;
pub mod orchestrator;
pub mod payment;
pub mod resolve;
pub mod slots;

pub use collection::CollectionMinter;
pub use mint::{BatchTokenMinter, MintUnit};
pub use offers::{BatchOfferCreator, OfferUnit};
pub use orchestrator::DeploymentOrchestrator;
pub use payment::PaymentVerifier;
pub use resolve::TokenIdentityResolver;
pub use slots::SlotPool;
