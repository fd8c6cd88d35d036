use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{metrics::RankedVendor, models::Order};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VendorAllocation {
    pub vendor_id: String,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub medicine: String,
    pub allocations: Vec<VendorAllocation>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VendorList {
    pub items: Vec<RankedVendor>,
}
