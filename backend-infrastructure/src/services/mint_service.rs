use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use backend_domain::ports::{MintRequest, MintService, MintedAsset};

#[derive(Debug, Clone)]
pub struct MintRelayConfig {
    pub relay_url: String,
    pub relay_token: Option<String>,
    pub symbol: String,
    pub timeout_seconds: u64,
}

/// Client for the mint relay, the sidecar holding the backend wallet key.
/// The relay creates the immutable asset, waits for finalized commitment
/// and returns the new mint address. It makes no idempotency promise, so
/// a retried request can mint twice; the purchase workflow's pending
/// ticket state guards against that on this side.
pub struct HttpMintService {
    client: Client,
    config: MintRelayConfig,
}

impl HttpMintService {
    pub fn new(config: MintRelayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(3)))
            .build()?;
        Ok(Self { client, config })
    }
}

#[derive(Deserialize)]
struct MintResponse {
    mint_address: String,
    name: String,
}

#[async_trait]
impl MintService for HttpMintService {
    async fn mint(&self, request: &MintRequest) -> Result<MintedAsset> {
        let url = format!("{}/v1/mints", self.config.relay_url.trim_end_matches('/'));
        let body = json!({
            "metadata_url": request.metadata_url,
            "name": request.name,
            "symbol": self.config.symbol,
            "seller_fee_basis_points": 0,
            "is_mutable": false,
            "recipient": request.recipient.as_str(),
            "commitment": "finalized",
        });

        let mut http = self.client.post(&url).json(&body);
        if let Some(token) = &self.config.relay_token {
            http = http.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = http.send().await?.error_for_status()?;
        let minted: MintResponse = response.json().await?;
        if minted.mint_address.trim().is_empty() {
            return Err(anyhow!("mint relay returned an empty mint address"));
        }
        debug!(mint_address = %minted.mint_address, "asset minted");
        Ok(MintedAsset {
            mint_address: minted.mint_address,
            name: minted.name,
        })
    }
}
