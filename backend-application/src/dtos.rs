// Request/response payloads for the HTTP surface

use backend_domain::{Event, MetadataAttribute, Show, Ticket};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PrepareTicketRequest {
    pub show_id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrepareTicketResponse {
    pub message: String,
    pub ticket_id: i64,
    pub metadata_ipfs_cid: String,
    pub nft_image_url: String,
    pub sol_price: Option<Decimal>,
    pub idr_price: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FinalizeTicketRequest {
    pub ticket_id: i64,
    pub user_wallet_address: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinalizeTicketResponse {
    pub message: String,
    pub ticket: Ticket,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListQuery {
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShowListQuery {
    pub event_id: Option<i64>,
    pub active: Option<bool>,
    /// When present, each entry carries `is_owned` for this wallet.
    pub wallet: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub idr_price: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventDetailView {
    #[serde(flatten)]
    pub event: Event,
    pub idr_price: Option<Decimal>,
    pub shows: Vec<ShowView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowView {
    #[serde(flatten)]
    pub show: Show,
    pub idr_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_owned: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetadataTemplateInput {
    pub name: String,
    pub description: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub attributes: Vec<MetadataAttribute>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetadataTemplateResponse {
    pub message: String,
    pub show_id: i64,
    pub metadata_template_cid: String,
    pub updated_show: Show,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
