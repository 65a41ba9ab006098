use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::warn;

use backend_domain::ports::ExchangeRateService;

#[derive(Debug, Clone)]
pub struct RateConfig {
    pub api_url: String,
    pub cache_seconds: u64,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Copy)]
struct CachedRate {
    rate: Decimal,
    fetched_at: Instant,
}

/// SOL/IDR rate from CoinGecko with a TTL cache. Refresh failures fall
/// back to the stale value; with nothing cached the conversion yields
/// `None` and display prices are simply omitted. Concurrent refreshes
/// may race; last write wins, which only affects display values.
pub struct CoinGeckoRateService {
    client: Client,
    config: RateConfig,
    cache: RwLock<Option<CachedRate>>,
}

impl CoinGeckoRateService {
    pub fn new(config: RateConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(3)))
            .build()?;
        Ok(Self {
            client,
            config,
            cache: RwLock::new(None),
        })
    }

    async fn current_rate(&self) -> Option<Decimal> {
        if let Some(cached) = *self.cache.read().await {
            if cached.fetched_at.elapsed() < Duration::from_secs(self.config.cache_seconds) {
                return Some(cached.rate);
            }
        }

        match self.fetch_rate().await {
            Ok(rate) => {
                *self.cache.write().await = Some(CachedRate {
                    rate,
                    fetched_at: Instant::now(),
                });
                Some(rate)
            }
            Err(err) => {
                warn!("sol/idr rate refresh failed: {err:#}");
                self.cache.read().await.map(|cached| cached.rate)
            }
        }
    }

    async fn fetch_rate(&self) -> Result<Decimal> {
        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[("ids", "solana"), ("vs_currencies", "idr")])
            .send()
            .await?
            .error_for_status()?;

        let body: serde_json::Value = response.json().await?;
        let rate = body
            .get("solana")
            .and_then(|entry| entry.get("idr"))
            .and_then(serde_json::Value::as_f64)
            .ok_or_else(|| anyhow!("unexpected rate response shape"))?;
        Decimal::from_f64_retain(rate).ok_or_else(|| anyhow!("rate {rate} is not representable"))
    }
}

#[async_trait]
impl ExchangeRateService for CoinGeckoRateService {
    async fn sol_to_idr(&self, amount: Decimal) -> Option<Decimal> {
        let rate = self.current_rate().await?;
        Some((amount * rate).round_dp(2))
    }
}
