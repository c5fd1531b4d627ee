//! Error types for the StagePass deployment orchestrator.
//!
//! All errors use the `SP_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Payment verification errors
//! - 2xx: Metadata errors
//! - 3xx: Authorization slot errors
//! - 4xx: Mint errors
//! - 5xx: Offer errors
//! - 6xx: Amount encoding errors
//! - 7xx: Ledger gateway errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{Address, TxHash};

/// Central error enum for all StagePass operations.
#[derive(Debug, Error)]
pub enum StagepassError {
    // =================================================================
    // Payment Verification Errors (1xx)
    // =================================================================
    /// The referenced payment transaction was not found on the ledger.
    #[error("SP_ERR_100: Payment transaction not found: {0}")]
    PaymentNotFound(TxHash),

    /// The payment transaction did not finalize successfully.
    #[error("SP_ERR_101: Payment not finalized: result code {code}")]
    PaymentNotFinalized { code: String },

    /// The referenced transaction is not a simple value transfer.
    #[error("SP_ERR_102: Wrong payment type: expected value transfer, got {actual}")]
    WrongPaymentType { actual: String },

    /// The payment's source address does not match the declared payer.
    #[error("SP_ERR_103: Wrong payer: expected {expected}, got {actual}")]
    WrongPayer { expected: Address, actual: Address },

    /// The payment was not sent to the operating account.
    #[error("SP_ERR_104: Wrong payment destination: expected {expected}")]
    WrongDestination { expected: Address },

    /// The delivered amount is strictly below the expected amount.
    #[error("SP_ERR_105: Insufficient payment: required {required}, delivered {delivered}")]
    InsufficientPayment {
        required: Decimal,
        delivered: Decimal,
    },

    /// None of the transaction's amount fields carried a value.
    #[error("SP_ERR_106: Payment amount missing from transaction record")]
    AmountMissing,

    // =================================================================
    // Metadata Errors (2xx)
    // =================================================================
    /// The encoded metadata blob exceeds the ledger's field limit.
    #[error("SP_ERR_200: Encoded metadata is {encoded} bytes, limit is {limit}")]
    MetadataTooLarge { encoded: usize, limit: usize },

    /// Serialization / deserialization error.
    #[error("SP_ERR_201: Serialization error: {0}")]
    Serialization(String),

    // =================================================================
    // Authorization Slot Errors (3xx)
    // =================================================================
    /// The slot batch-creation operation did not finalize successfully.
    #[error("SP_ERR_300: Slot acquisition failed: result code {code}")]
    SlotAcquisitionFailed { code: String },

    /// Fewer slots were available than requested. No partial count
    /// is accepted.
    #[error("SP_ERR_301: Slot shortfall: requested {requested}, available {available}")]
    SlotShortfall { requested: u32, available: u32 },

    // =================================================================
    // Mint Errors (4xx)
    // =================================================================
    /// The collection mint operation did not finalize successfully.
    #[error("SP_ERR_400: Collection mint failed: result code {code}")]
    CollectionMintFailed { code: String },

    /// Every unit in the mint batch failed.
    #[error("SP_ERR_401: No tokens minted: all {attempted} units failed")]
    NoTokensMinted { attempted: u32 },

    // =================================================================
    // Offer Errors (5xx)
    // =================================================================
    /// Every sell-listing in the offer batch failed.
    #[error("SP_ERR_500: No offers created: all {attempted} listings failed")]
    NoOffersCreated { attempted: u32 },

    // =================================================================
    // Amount Encoding Errors (6xx)
    // =================================================================
    /// An amount cannot be expressed in whole ledger subunits.
    #[error("SP_ERR_600: Amount not representable in subunits: {amount}")]
    AmountNotRepresentable { amount: Decimal },

    // =================================================================
    // Ledger Gateway Errors (7xx)
    // =================================================================
    /// The ledger node could not be reached or returned a malformed
    /// response.
    #[error("SP_ERR_700: Ledger gateway error: {reason}")]
    Gateway { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SP_ERR_900: Internal error: {0}")]
    Internal(String),

    /// The deployment request failed validation.
    #[error("SP_ERR_901: Invalid deployment request: {reason}")]
    InvalidRequest { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, StagepassError>;

impl From<serde_json::Error> for StagepassError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
