use crate::{
    dto::inventory::{
        CreateMedicineRequest, DashboardSummary, ImportSummary, StockList, StockStatus,
        UpdateMedicineRequest,
    },
    error::{AppError, AppResult},
    metrics::{days_remaining, is_low_stock},
    models::{Medicine, OrderStatus},
    response::{ApiResponse, Empty, Meta},
    routes::params::InventoryQuery,
    state::AppState,
    transfer::{export_inventory_csv, import_inventory_csv},
};

pub fn stock_status(medicine: Medicine) -> StockStatus {
    StockStatus {
        days_remaining: days_remaining(&medicine),
        low_stock: is_low_stock(&medicine),
        medicine,
    }
}

fn matches_search(medicine: &Medicine, needle: &str) -> bool {
    [&medicine.name, &medicine.brand, &medicine.category]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

pub async fn list_inventory(
    state: &AppState,
    query: InventoryQuery,
) -> AppResult<ApiResponse<StockList>> {
    let mut items = state.store.inventory().await?;
    if let Some(search) = query.q.as_ref().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        items.retain(|m| matches_search(m, &needle));
    }

    let (page_items, meta) = query.pagination().apply(items);
    let data = StockList {
        items: page_items.into_iter().map(stock_status).collect(),
    };
    Ok(ApiResponse::success("Inventory", data, Some(meta)))
}

pub async fn get_medicine(state: &AppState, id: &str) -> AppResult<ApiResponse<StockStatus>> {
    let medicine = state
        .store
        .inventory()
        .await?
        .into_iter()
        .find(|m| m.medicine_id == id);
    let medicine = match medicine {
        Some(m) => m,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Medicine", stock_status(medicine), None))
}

fn validate_medicine(medicine: &Medicine) -> AppResult<()> {
    if medicine.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }
    if !medicine.avg_daily_sales.is_finite() || medicine.avg_daily_sales < 0.0 {
        return Err(AppError::BadRequest(
            "avg_daily_sales must be a non-negative number".into(),
        ));
    }
    Ok(())
}

/// `M` plus a zero-padded sequence, skipping ids already taken.
fn next_medicine_id(items: &[Medicine]) -> String {
    let mut seq = items.len() + 1;
    loop {
        let candidate = format!("M{seq:03}");
        if !items.iter().any(|m| m.medicine_id == candidate) {
            return candidate;
        }
        seq += 1;
    }
}

pub async fn create_medicine(
    state: &AppState,
    payload: CreateMedicineRequest,
) -> AppResult<ApiResponse<StockStatus>> {
    let today = state.today();
    let medicine = state
        .store
        .update_inventory(move |items| {
            let medicine = Medicine {
                medicine_id: next_medicine_id(items),
                name: payload.name.trim().to_string(),
                brand: payload.brand,
                form: payload.form,
                quantity: payload.quantity,
                unit: payload.unit,
                expiry_date: payload.expiry_date,
                batch: payload.batch,
                last_sold_date: payload.last_sold_date.unwrap_or(today),
                avg_daily_sales: payload.avg_daily_sales,
                category: payload.category,
            };
            validate_medicine(&medicine)?;
            items.push(medicine.clone());
            Ok(medicine)
        })
        .await?;

    tracing::info!(medicine_id = %medicine.medicine_id, name = %medicine.name, "medicine added");
    Ok(ApiResponse::success(
        "Medicine added",
        stock_status(medicine),
        Some(Meta::empty()),
    ))
}

pub async fn update_medicine(
    state: &AppState,
    id: &str,
    payload: UpdateMedicineRequest,
) -> AppResult<ApiResponse<StockStatus>> {
    let id = id.to_string();
    let medicine = state
        .store
        .update_inventory(move |items| {
            let existing = match items.iter_mut().find(|m| m.medicine_id == id) {
                Some(m) => m,
                None => return Err(AppError::NotFound),
            };

            let mut updated = existing.clone();
            if let Some(name) = payload.name {
                updated.name = name.trim().to_string();
            }
            if let Some(brand) = payload.brand {
                updated.brand = brand;
            }
            if let Some(form) = payload.form {
                updated.form = form;
            }
            if let Some(quantity) = payload.quantity {
                updated.quantity = quantity;
            }
            if let Some(unit) = payload.unit {
                updated.unit = unit;
            }
            if let Some(expiry_date) = payload.expiry_date {
                updated.expiry_date = expiry_date;
            }
            if let Some(batch) = payload.batch {
                updated.batch = batch;
            }
            if let Some(last_sold_date) = payload.last_sold_date {
                updated.last_sold_date = last_sold_date;
            }
            if let Some(avg_daily_sales) = payload.avg_daily_sales {
                updated.avg_daily_sales = avg_daily_sales;
            }
            if let Some(category) = payload.category {
                updated.category = category;
            }
            validate_medicine(&updated)?;

            *existing = updated.clone();
            Ok(updated)
        })
        .await?;

    tracing::info!(medicine_id = %medicine.medicine_id, "medicine updated");
    Ok(ApiResponse::success(
        "Updated",
        stock_status(medicine),
        Some(Meta::empty()),
    ))
}

pub async fn delete_medicine(
    state: &AppState,
    id: &str,
) -> AppResult<ApiResponse<Empty>> {
    let id = id.to_string();
    let removed = state
        .store
        .update_inventory(move |items| {
            let before = items.len();
            items.retain(|m| m.medicine_id != id);
            if items.len() == before {
                return Err(AppError::NotFound);
            }
            Ok(id)
        })
        .await?;

    tracing::info!(medicine_id = %removed, "medicine deleted");
    Ok(ApiResponse::success(
        "Deleted",
        Empty::default(),
        Some(Meta::empty()),
    ))
}

/// Low-stock medicines, soonest to run out first.
pub async fn list_low_stock(state: &AppState) -> AppResult<ApiResponse<StockList>> {
    let mut items: Vec<StockStatus> = state
        .store
        .inventory()
        .await?
        .into_iter()
        .map(stock_status)
        .filter(|s| s.low_stock)
        .collect();
    items.sort_by_key(|s| s.days_remaining);

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Low stock",
        StockList { items },
        Some(meta),
    ))
}

/// Merges spreadsheet rows into the inventory. A row whose id already exists
/// replaces that record; new ids are appended.
pub async fn import_csv(state: &AppState, body: &str) -> AppResult<ApiResponse<ImportSummary>> {
    let outcome = import_inventory_csv(body, state.today())?;
    let skipped = outcome.skipped;
    let imported = outcome.medicines.len();

    let total = state
        .store
        .update_inventory(move |items| {
            for medicine in outcome.medicines {
                match items.iter_mut().find(|m| m.medicine_id == medicine.medicine_id) {
                    Some(existing) => *existing = medicine,
                    None => items.push(medicine),
                }
            }
            Ok(items.len())
        })
        .await?;

    tracing::info!(imported, skipped, "inventory CSV imported");
    Ok(ApiResponse::success(
        format!("Added {imported} medicines to inventory"),
        ImportSummary {
            imported,
            skipped,
            total,
        },
        Some(Meta::empty()),
    ))
}

pub async fn export_csv(state: &AppState) -> AppResult<String> {
    let inventory = state.store.inventory().await?;
    export_inventory_csv(&inventory)
}

pub async fn dashboard(state: &AppState) -> AppResult<ApiResponse<DashboardSummary>> {
    let inventory = state.store.inventory().await?;
    let alerts = state.store.alerts().await?;
    let orders = state.store.orders().await?;

    let total_medicines = inventory.len();
    let mut low_stock: Vec<StockStatus> = inventory
        .into_iter()
        .map(stock_status)
        .filter(|s| s.low_stock)
        .collect();
    low_stock.sort_by_key(|s| s.days_remaining);

    let data = DashboardSummary {
        pharmacy_name: state.store.pharmacy_name().await?,
        total_medicines,
        low_stock_count: low_stock.len(),
        unread_alerts: alerts.iter().filter(|a| !a.read).count(),
        open_orders: orders
            .iter()
            .filter(|o| matches!(o.status, OrderStatus::Pending | OrderStatus::InTransit))
            .count(),
        low_stock,
    };
    Ok(ApiResponse::success("Dashboard", data, Some(Meta::empty())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn next_id_skips_taken_sequence_numbers() {
        let mut items = seed::medicines();
        assert_eq!(next_medicine_id(&items), "M009");

        // M002 deleted: len + 1 == 8 collides with M008
        items.remove(1);
        assert_eq!(next_medicine_id(&items), "M009");
    }

    #[test]
    fn search_covers_brand_and_category() {
        let items = seed::medicines();
        assert!(matches_search(&items[0], "crocin"));
        assert!(matches_search(&items[1], "antibio"));
        assert!(!matches_search(&items[0], "zyrtec"));
    }
}
