use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Bill;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillItemRequest {
    pub medicine_name: String,
    pub quantity: i64,
    pub price_per_unit: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillRequest {
    pub customer_name: Option<String>,
    pub items: Vec<BillItemRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BillList {
    pub items: Vec<Bill>,
}
