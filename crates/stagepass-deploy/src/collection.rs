//! Collection minting — one token per event carrying the event's compact
//! metadata.

use stagepass_gateway::{LedgerGateway, LedgerOperation};
use stagepass_types::{
    Address, DeploymentRequest, Result, StagepassError, TokenMetadata, TxHash,
};

/// Mints the event's collection token.
pub struct CollectionMinter<'a, G> {
    gateway: &'a G,
    operating_address: &'a Address,
}

impl<'a, G: LedgerGateway> CollectionMinter<'a, G> {
    #[must_use]
    pub fn new(gateway: &'a G, operating_address: &'a Address) -> Self {
        Self {
            gateway,
            operating_address,
        }
    }

    /// Mint the collection token, tagged with the event id as its
    /// namespace value.
    ///
    /// The metadata encoding enforces the ledger's field limit before
    /// anything is submitted; an oversized blob never reaches the ledger.
    /// The collection mint is the deployment's first write and uses the
    /// account's ordinary sequential submission — slots only pay off once
    /// operations run concurrently.
    ///
    /// # Errors
    /// `MetadataTooLarge` before submission, `CollectionMintFailed` on a
    /// non-success receipt.
    pub async fn mint(&self, request: &DeploymentRequest) -> Result<TxHash> {
        let metadata =
            TokenMetadata::collection(&request.name, request.image_uri.clone(), request.event_id);
        let uri = metadata.encode()?;

        let receipt = self
            .gateway
            .submit_and_await(
                LedgerOperation::MintToken {
                    uri,
                    taxon: request.event_id,
                    slot_sequence: None,
                },
                self.operating_address,
            )
            .await?;

        if !receipt.succeeded() {
            return Err(StagepassError::CollectionMintFailed {
                code: receipt.result_code,
            });
        }
        Ok(receipt.tx_hash)
    }
}
