use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Pharmacy;

#[derive(Debug, Serialize, ToSchema)]
pub struct PharmacyList {
    pub items: Vec<Pharmacy>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StockRequest {
    pub medicine: String,
    pub quantity: i64,
    pub notes: Option<String>,
}

/// Acknowledgement of a stock request. Requests are not persisted.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StockRequestReceipt {
    pub pharmacy_id: String,
    pub pharmacy_name: String,
    pub medicine: String,
    pub quantity: u32,
    pub notes: Option<String>,
    pub requested_at: DateTime<Utc>,
}
