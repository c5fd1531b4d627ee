//! Post-mint token identity resolution.
//!
//! The ledger assigns token identifiers at mint time and the mint receipt
//! does not carry them. The only way to learn them is to re-read the
//! owner's token list after finality and take the newest entries — the
//! ledger returns owned tokens in creation order.
//!
//! This correlation is positional and best-effort: it assumes no other
//! process minted into the same account between the batch and this read.
//! Accepted for a single-writer operating account; see DESIGN.md.

use stagepass_gateway::LedgerGateway;
use stagepass_types::{Address, Result, TokenId};

/// Resolves ledger-assigned identifiers of freshly minted tokens.
pub struct TokenIdentityResolver<'a, G> {
    gateway: &'a G,
}

impl<'a, G: LedgerGateway> TokenIdentityResolver<'a, G> {
    #[must_use]
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// The last `expected` tokens of `owner`, in creation order.
    ///
    /// Returns fewer than `expected` if the account holds fewer tokens;
    /// the shortfall is logged, not fatal — the caller already knows how
    /// many mints succeeded.
    pub async fn resolve_recent(&self, owner: &Address, expected: usize) -> Result<Vec<TokenId>> {
        let tokens = self.gateway.owned_tokens(owner).await?;
        if tokens.len() < expected {
            tracing::warn!(
                expected,
                found = tokens.len(),
                "account holds fewer tokens than expected after mint batch"
            );
        }
        let start = tokens.len().saturating_sub(expected);
        Ok(tokens[start..]
            .iter()
            .map(|t| t.token_id.clone())
            .collect())
    }
}
