use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum MedicineForm {
    Tablet,
    Liquid,
    Capsule,
    Syrup,
    Injection,
}

impl MedicineForm {
    /// Parses a form label case-insensitively, as typed into a spreadsheet.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "tablet" => Some(Self::Tablet),
            "liquid" => Some(Self::Liquid),
            "capsule" => Some(Self::Capsule),
            "syrup" => Some(Self::Syrup),
            "injection" => Some(Self::Injection),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tablet => "Tablet",
            Self::Liquid => "Liquid",
            Self::Capsule => "Capsule",
            Self::Syrup => "Syrup",
            Self::Injection => "Injection",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Medicine {
    pub medicine_id: String,
    pub name: String,
    pub brand: String,
    pub form: MedicineForm,
    pub quantity: u32,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub batch: String,
    pub last_sold_date: NaiveDate,
    pub avg_daily_sales: f64,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Pharmacy {
    pub id: String,
    pub name: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub rating: f64,
    pub inventory: Vec<Medicine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    LowStock,
    Outbreak,
    Request,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depletion_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_quantity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub location: String,
    pub lat: f64,
    pub lng: f64,
    pub distance: f64,
    pub cost_per_unit: f64,
    pub availability: u32,
    pub reliability: f64,
    pub delivery_time_hrs: f64,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderVendorLine {
    pub vendor_id: String,
    pub vendor_name: String,
    pub quantity: u32,
    pub cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub date: NaiveDate,
    pub medicine: String,
    pub total_quantity: u32,
    pub vendors: Vec<OrderVendorLine>,
    pub status: OrderStatus,
    pub total_cost: f64,
    pub estimated_delivery_hrs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BillItem {
    pub id: String,
    pub medicine_name: String,
    pub quantity: u32,
    pub price_per_unit: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub bill_number: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub items: Vec<BillItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub pharmacy_name: String,
    pub language: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence: Confidence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub sales: u32,
}
