// Show entity
// A single scheduled performance with its own capacity and price

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Show {
    pub show_id: i64,
    pub event_id: i64,
    pub show_name: Option<String>,
    pub show_date: NaiveDate,
    pub show_start_time: NaiveTime,
    pub show_end_time: Option<NaiveTime>,
    pub sol_price: Option<Decimal>,
    pub metadata_template_cid: Option<String>,
    pub total_tickets: i32,
    pub tickets_sold: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Show {
    pub fn has_capacity(&self) -> bool {
        self.tickets_sold < self.total_tickets
    }
}

/// A show locked for the purchase workflow, joined with the owning
/// event's display name and active flag.
#[derive(Debug, Clone, FromRow)]
pub struct ShowForPurchase {
    #[sqlx(flatten)]
    pub show: Show,
    pub event_name: String,
    pub event_is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewShow {
    pub event_id: i64,
    pub show_name: Option<String>,
    pub show_date: NaiveDate,
    pub show_start_time: NaiveTime,
    pub show_end_time: Option<NaiveTime>,
    pub sol_price: Option<Decimal>,
    pub total_tickets: Option<i32>,
    pub is_active: Option<bool>,
}

/// Partial update; `None` fields are left untouched. The sold counter and
/// the metadata template CID are deliberately absent: the counter belongs
/// to the purchase workflow, the CID to the template setup operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowPatch {
    pub show_name: Option<String>,
    pub show_date: Option<NaiveDate>,
    pub show_start_time: Option<NaiveTime>,
    pub show_end_time: Option<NaiveTime>,
    pub sol_price: Option<Decimal>,
    pub total_tickets: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct ShowFilter {
    pub event_id: Option<i64>,
    pub active: Option<bool>,
}
