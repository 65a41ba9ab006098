use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::entities::{MetadataTemplate, TicketMetadata};
use crate::value_objects::WalletAddress;

/// Content-addressed metadata storage (IPFS behind a pinning service).
#[async_trait]
pub trait MetadataStore: Send + Sync {
    /// Pin a metadata document and return its content identifier.
    async fn publish_json(
        &self,
        document: &TicketMetadata,
        name_hint: &str,
    ) -> anyhow::Result<String>;

    async fn fetch_template(&self, cid: &str) -> anyhow::Result<MetadataTemplate>;
}

#[derive(Debug, Clone)]
pub struct MintRequest {
    pub metadata_url: String,
    pub name: String,
    pub recipient: WalletAddress,
}

/// The minted asset reduced to the fields the workflow needs.
#[derive(Debug, Clone)]
pub struct MintedAsset {
    pub mint_address: String,
    pub name: String,
}

/// On-chain asset minting. The collaborator does not guarantee
/// idempotency; the caller's pending/finalized ticket state is the guard
/// against replay.
#[async_trait]
pub trait MintService: Send + Sync {
    /// Create the immutable asset and wait for finalized confirmation.
    async fn mint(&self, request: &MintRequest) -> anyhow::Result<MintedAsset>;
}

/// Display-currency conversion. Never fails: `None` means no rate is
/// currently known and the display price is simply omitted.
#[async_trait]
pub trait ExchangeRateService: Send + Sync {
    async fn sol_to_idr(&self, amount: Decimal) -> Option<Decimal>;
}
