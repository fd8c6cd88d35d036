use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{ForecastPoint, SalesPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A factor shown next to the forecast to explain what moves demand.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ForecastDriver {
    pub name: String,
    pub impact: Impact,
    pub description: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ForecastReport {
    pub medicine_id: String,
    pub medicine_name: String,
    pub current_stock: u32,
    pub days_remaining: Option<u32>,
    pub history: Vec<SalesPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub predicted_demand_7d: f64,
    pub recommended_reorder: u32,
    pub depletion_date: Option<NaiveDate>,
    pub drivers: Vec<ForecastDriver>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ForecastSummaryItem {
    pub medicine_id: String,
    pub name: String,
    pub unit: String,
    pub predicted_demand_7d: f64,
    pub days_remaining: Option<u32>,
    pub needs_reorder: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ForecastSummary {
    pub items: Vec<ForecastSummaryItem>,
}
