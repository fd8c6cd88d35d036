//! Spreadsheet import/export of the inventory and the JSON backup document.

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Alert, Medicine, MedicineForm, Settings},
    storage::PharmacyStore,
};

pub const CSV_HEADERS: [&str; 11] = [
    "medicine_id",
    "name",
    "brand",
    "form",
    "quantity",
    "unit",
    "expiry_date",
    "batch",
    "last_sold_date",
    "avg_daily_sales",
    "category",
];

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvMedicineRow {
    medicine_id: Option<String>,
    name: Option<String>,
    brand: Option<String>,
    form: Option<String>,
    quantity: Option<String>,
    unit: Option<String>,
    expiry_date: Option<String>,
    batch: Option<String>,
    last_sold_date: Option<String>,
    avg_daily_sales: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportOutcome {
    pub medicines: Vec<Medicine>,
    /// Rows dropped for lacking `medicine_id` or `name`.
    pub skipped: usize,
}

fn text(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_quantity(field: Option<&str>) -> u32 {
    let Some(raw) = field else { return 0 };
    let value = raw
        .parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v.trunc() as i64))
        .unwrap_or(0);
    value.clamp(0, i64::from(u32::MAX)) as u32
}

fn parse_rate(field: Option<&str>) -> f64 {
    field
        .and_then(|raw| raw.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

fn parse_date(field: Option<&str>, fallback: NaiveDate) -> NaiveDate {
    field
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .unwrap_or(fallback)
}

/// Parses an inventory spreadsheet with a header row.
///
/// Rows without `medicine_id` or `name` are skipped. Unparseable numbers become 0,
/// unknown forms become Tablet and unparseable dates become `today`.
pub fn import_inventory_csv(data: &str, today: NaiveDate) -> AppResult<ImportOutcome> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data.as_bytes());

    let mut medicines = Vec::new();
    let mut skipped = 0;
    for (index, row) in reader.deserialize::<CsvMedicineRow>().enumerate() {
        let row = row.map_err(|err| {
            AppError::BadRequest(format!("CSV row {} is unreadable: {err}", index + 1))
        })?;
        let (Some(medicine_id), Some(name)) = (text(row.medicine_id), text(row.name)) else {
            skipped += 1;
            continue;
        };
        let quantity = text(row.quantity);
        let avg_daily_sales = text(row.avg_daily_sales);
        let expiry_date = text(row.expiry_date);
        let last_sold_date = text(row.last_sold_date);
        medicines.push(Medicine {
            medicine_id,
            name,
            brand: text(row.brand).unwrap_or_default(),
            form: text(row.form)
                .and_then(|form| MedicineForm::parse_label(&form))
                .unwrap_or(MedicineForm::Tablet),
            quantity: parse_quantity(quantity.as_deref()),
            unit: text(row.unit).unwrap_or_else(|| "units".to_string()),
            expiry_date: parse_date(expiry_date.as_deref(), today),
            batch: text(row.batch).unwrap_or_default(),
            last_sold_date: parse_date(last_sold_date.as_deref(), today),
            avg_daily_sales: parse_rate(avg_daily_sales.as_deref()),
            category: text(row.category).unwrap_or_default(),
        });
    }

    if skipped > 0 {
        tracing::debug!(skipped, "CSV rows without medicine_id or name dropped");
    }
    Ok(ImportOutcome { medicines, skipped })
}

/// Serializes the inventory with a header row, even when empty.
pub fn export_inventory_csv(items: &[Medicine]) -> AppResult<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(CSV_HEADERS)
        .map_err(anyhow::Error::from)?;
    for item in items {
        writer.serialize(item).map_err(anyhow::Error::from)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("flushing CSV export: {err}"))?;
    let csv = String::from_utf8(bytes).map_err(anyhow::Error::from)?;
    Ok(csv)
}

/// Full-data export: inventory, alerts and settings. There is no restore path.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Backup {
    pub inventory: Vec<Medicine>,
    pub alerts: Vec<Alert>,
    pub settings: Settings,
}

pub async fn backup(store: &PharmacyStore) -> AppResult<Backup> {
    Ok(Backup {
        inventory: store.inventory().await?,
        alerts: store.alerts().await?,
        settings: store.settings().await?,
    })
}
