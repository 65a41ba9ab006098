use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;

use backend_application::{AppState, Metrics};
use backend_infrastructure::{
    AppConfig,
    CoinGeckoRateService,
    HttpMintService,
    PinataMetadataStore,
    PostgresInventory,
};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let pool = PgPoolOptions::new()
            .max_connections(db_config.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&db_config.database_url)
            .await?;

        let inventory = Arc::new(PostgresInventory::new(pool));
        inventory.ensure_schema().await?;

        let metadata_store = Arc::new(PinataMetadataStore::new(config.to_ipfs_config())?);
        let mint_service = Arc::new(HttpMintService::new(config.to_mint_config())?);
        let rate_service = Arc::new(CoinGeckoRateService::new(config.to_rate_config())?);

        let state = AppState {
            config: runtime_config,
            inventory: inventory.clone(),
            event_repo: inventory.clone(),
            show_repo: inventory.clone(),
            ticket_repo: inventory,
            metadata_store,
            mint_service,
            rate_service,
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
