use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use backend_domain::ports::MetadataStore;
use backend_domain::{MetadataTemplate, TicketMetadata};

#[derive(Debug, Clone)]
pub struct IpfsConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub gateway_url: String,
    pub timeout_seconds: u64,
}

/// Pinata-style pinning API for publishing, public gateway for fetching.
pub struct PinataMetadataStore {
    client: Client,
    config: IpfsConfig,
}

impl PinataMetadataStore {
    pub fn new(config: IpfsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(3)))
            .build()?;
        Ok(Self { client, config })
    }
}

#[derive(Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

#[async_trait]
impl MetadataStore for PinataMetadataStore {
    async fn publish_json(&self, document: &TicketMetadata, name_hint: &str) -> Result<String> {
        let (Some(key), Some(secret)) = (&self.config.api_key, &self.config.api_secret) else {
            return Err(anyhow!("ipfs api credentials are not configured"));
        };

        let url = format!(
            "{}/pinning/pinJSONToIPFS",
            self.config.api_url.trim_end_matches('/')
        );
        let body = json!({
            "pinataContent": document,
            "pinataMetadata": { "name": name_hint },
            "pinataOptions": { "cidVersion": 0 },
        });

        let response = self
            .client
            .post(&url)
            .header("pinata_api_key", key)
            .header("pinata_secret_api_key", secret)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let pin: PinResponse = response.json().await?;
        if pin.ipfs_hash.trim().is_empty() {
            return Err(anyhow!("pinning service returned an empty CID"));
        }
        debug!(cid = %pin.ipfs_hash, name = name_hint, "pinned metadata document");
        Ok(pin.ipfs_hash)
    }

    async fn fetch_template(&self, cid: &str) -> Result<MetadataTemplate> {
        let url = format!("{}/{}", self.config.gateway_url.trim_end_matches('/'), cid);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let template = response.json().await?;
        Ok(template)
    }
}
