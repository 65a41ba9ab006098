// Ticket entity
// A purchasable right to attend a show, minted as an NFT once finalized

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Sentinel owner for a ticket that has been prepared but not finalized.
pub const PENDING_OWNER: &str = "PENDING_OWNER";
/// Sentinel mint address for a ticket that has been prepared but not
/// finalized. Shared by every pending row; real mint addresses are
/// globally unique.
pub const PENDING_MINT: &str = "PENDING_MINT";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub ticket_id: i64,
    pub show_id: i64,
    pub owner_wallet_address: String,
    pub nft_mint_address: String,
    pub nft_metadata_url: String,
    pub nft_name: Option<String>,
    pub nft_image_url: Option<String>,
    pub purchase_price_sol: Option<Decimal>,
    pub purchase_price_idr: Option<Decimal>,
    pub seat_info: Option<String>,
    pub is_checked_in: bool,
    pub purchased_at: DateTime<Utc>,
}

impl Ticket {
    /// The two sentinel fields are the state discriminant: a ticket is
    /// pending only while both still hold their placeholder values.
    pub fn is_pending(&self) -> bool {
        self.owner_wallet_address == PENDING_OWNER && self.nft_mint_address == PENDING_MINT
    }
}

/// Insert payload for a pending ticket; the sentinels are applied by the
/// store.
#[derive(Debug, Clone)]
pub struct PendingTicket {
    pub show_id: i64,
    pub nft_metadata_url: String,
    pub nft_name: Option<String>,
    pub nft_image_url: Option<String>,
}

/// The fields written when a pending ticket is finalized.
#[derive(Debug, Clone)]
pub struct TicketSale {
    pub owner_wallet_address: String,
    pub nft_mint_address: String,
    pub purchase_price_sol: Option<Decimal>,
    pub purchase_price_idr: Option<Decimal>,
}

/// Read-side row for a wallet's ticket listing, flattened with the show
/// and event display fields.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OwnedTicketRow {
    pub ticket_id: i64,
    pub nft_mint_address: String,
    pub nft_name: Option<String>,
    pub nft_image_url: Option<String>,
    pub purchased_at: DateTime<Utc>,
    pub event_name: String,
    pub show_name: Option<String>,
    pub show_date: NaiveDate,
    pub show_start_time: NaiveTime,
}
