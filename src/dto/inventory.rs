use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Medicine, MedicineForm};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMedicineRequest {
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub form: MedicineForm,
    pub quantity: u32,
    pub unit: String,
    pub expiry_date: NaiveDate,
    #[serde(default)]
    pub batch: String,
    pub last_sold_date: Option<NaiveDate>,
    pub avg_daily_sales: f64,
    #[serde(default)]
    pub category: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMedicineRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub form: Option<MedicineForm>,
    pub quantity: Option<u32>,
    pub unit: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub batch: Option<String>,
    pub last_sold_date: Option<NaiveDate>,
    pub avg_daily_sales: Option<f64>,
    pub category: Option<String>,
}

/// A medicine together with its depletion outlook.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StockStatus {
    #[serde(flatten)]
    pub medicine: Medicine,
    /// Absent when the medicine is not selling.
    pub days_remaining: Option<u32>,
    pub low_stock: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StockList {
    pub items: Vec<StockStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub total: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardSummary {
    pub pharmacy_name: String,
    pub total_medicines: usize,
    pub low_stock_count: usize,
    pub unread_alerts: usize,
    pub open_orders: usize,
    pub low_stock: Vec<StockStatus>,
}
