use std::sync::Arc;

use backend_domain::ports::{
    EventRepository,
    ExchangeRateService,
    InventoryStore,
    MetadataStore,
    MintService,
    ShowRepository,
    TicketRepository,
};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub inventory: Arc<dyn InventoryStore>,
    pub event_repo: Arc<dyn EventRepository>,
    pub show_repo: Arc<dyn ShowRepository>,
    pub ticket_repo: Arc<dyn TicketRepository>,
    pub metadata_store: Arc<dyn MetadataStore>,
    pub mint_service: Arc<dyn MintService>,
    pub rate_service: Arc<dyn ExchangeRateService>,
    pub metrics: Arc<Metrics>,
}
