//! Identifiers used throughout StagePass.
//!
//! Ledger-assigned identifiers (`Address`, `TxHash`, `TokenId`) are opaque
//! strings in the ledger's own encoding. `DeploymentId` is local: a UUIDv7
//! minted per deployment attempt, used as the tracing correlation key.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Address
// ---------------------------------------------------------------------------

/// A ledger account address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Address(pub String);

impl Address {
    #[must_use]
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TxHash
// ---------------------------------------------------------------------------

/// A ledger transaction identifier, assigned at submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl TxHash {
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// TokenId
// ---------------------------------------------------------------------------

/// A ledger-assigned token identifier.
///
/// The ledger assigns these at mint time; the only way to learn one is to
/// re-read the owning account's token list after finality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TokenId(pub String);

impl TokenId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// DeploymentId
// ---------------------------------------------------------------------------

/// Unique identifier for one deployment attempt. Uses UUIDv7 for
/// time-ordered sorting in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct DeploymentId(pub Uuid);

impl DeploymentId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for DeploymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeploymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deploy:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deployment_id_uniqueness() {
        let a = DeploymentId::new();
        let b = DeploymentId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn deployment_id_ordering() {
        let a = DeploymentId::new();
        let b = DeploymentId::new();
        assert!(a < b);
    }

    #[test]
    fn deployment_id_display_prefix() {
        let id = DeploymentId::new();
        assert!(format!("{id}").starts_with("deploy:"));
    }

    #[test]
    fn address_display_is_raw() {
        let addr = Address::new("rOperatingAccount123");
        assert_eq!(format!("{addr}"), "rOperatingAccount123");
    }

    #[test]
    fn serde_roundtrips() {
        let token = TokenId::new("000800001A2B3C4D");
        let json = serde_json::to_string(&token).unwrap();
        let back: TokenId = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);

        let tx = TxHash::new("ABCDEF");
        let json = serde_json::to_string(&tx).unwrap();
        let back: TxHash = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }
}
