// Event entity
// An organizer-level event owning zero or more scheduled shows

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub event_id: i64,
    pub event_name: String,
    pub event_description: Option<String>,
    pub event_image_url: Option<String>,
    pub event_overall_start_date: Option<NaiveDate>,
    pub event_overall_end_date: Option<NaiveDate>,
    pub event_overall_start_time: Option<NaiveTime>,
    pub event_overall_end_time: Option<NaiveTime>,
    pub venue_address: Option<String>,
    pub default_sol_price: Decimal,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewEvent {
    pub event_name: String,
    pub event_description: Option<String>,
    pub event_image_url: Option<String>,
    pub event_overall_start_date: Option<NaiveDate>,
    pub event_overall_end_date: Option<NaiveDate>,
    pub event_overall_start_time: Option<NaiveTime>,
    pub event_overall_end_time: Option<NaiveTime>,
    pub venue_address: Option<String>,
    pub default_sol_price: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub event_name: Option<String>,
    pub event_description: Option<String>,
    pub event_image_url: Option<String>,
    pub event_overall_start_date: Option<NaiveDate>,
    pub event_overall_end_date: Option<NaiveDate>,
    pub event_overall_start_time: Option<NaiveTime>,
    pub event_overall_end_time: Option<NaiveTime>,
    pub venue_address: Option<String>,
    pub default_sol_price: Option<Decimal>,
    pub is_active: Option<bool>,
}
