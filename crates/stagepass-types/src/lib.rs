//! # stagepass-types
//!
//! Shared types, errors, and configuration for the **StagePass** event
//! deployment orchestrator.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`Address`], [`TxHash`], [`TokenId`], [`DeploymentId`]
//! - **Request model**: [`DeploymentRequest`]
//! - **Token metadata**: [`TokenMetadata`] and its size-capped encoding
//! - **Authorization slots**: [`AuthorizationSlot`]
//! - **Outcomes**: [`MintOutcome`], [`OfferOutcome`], [`DeploymentResult`], [`DeploymentPhase`]
//! - **Configuration**: [`DeployConfig`], [`CostSchedule`]
//! - **Errors**: [`StagepassError`] with `SP_ERR_` prefix codes
//! - **Constants**: ledger limits and cost defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod metadata;
pub mod outcome;
pub mod request;
pub mod slot;

// Re-export all primary types at crate root for ergonomic imports:
//   use stagepass_types::{DeploymentRequest, TokenMetadata, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use metadata::*;
pub use outcome::*;
pub use request::*;
pub use slot::*;

// Constants are accessed via `stagepass_types::constants::FOO`
// (not re-exported to avoid name collisions).
