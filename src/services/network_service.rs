use chrono::Utc;

use crate::{
    dto::network::{PharmacyList, StockRequest, StockRequestReceipt},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    routes::params::NetworkQuery,
    seed,
    state::AppState,
};

/// Nearby pharmacies, nearest first. Pharmacies without a distance sort last.
pub async fn list_pharmacies(
    _state: &AppState,
    query: NetworkQuery,
) -> AppResult<ApiResponse<PharmacyList>> {
    let mut items = seed::pharmacies();
    if let Some(search) = query.q.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        items.retain(|p| {
            p.name.to_lowercase().contains(&needle) || p.location.to_lowercase().contains(&needle)
        });
    }
    items.sort_by(|a, b| {
        let a = a.distance.unwrap_or(f64::INFINITY);
        let b = b.distance.unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Pharmacies",
        PharmacyList { items },
        Some(meta),
    ))
}

pub async fn request_stock(
    _state: &AppState,
    pharmacy_id: &str,
    payload: StockRequest,
) -> AppResult<ApiResponse<StockRequestReceipt>> {
    let pharmacy = match seed::pharmacies().into_iter().find(|p| p.id == pharmacy_id) {
        Some(p) => p,
        None => return Err(AppError::NotFound),
    };
    let medicine = payload.medicine.trim();
    if medicine.is_empty() {
        return Err(AppError::BadRequest("medicine is required".into()));
    }
    let quantity = match u32::try_from(payload.quantity) {
        Ok(q) if q > 0 => q,
        _ => {
            return Err(AppError::BadRequest(
                "quantity must be a positive whole number".into(),
            ));
        }
    };

    let receipt = StockRequestReceipt {
        pharmacy_id: pharmacy.id,
        pharmacy_name: pharmacy.name,
        medicine: medicine.to_string(),
        quantity,
        notes: payload
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
        requested_at: Utc::now(),
    };
    tracing::info!(
        pharmacy_id = %receipt.pharmacy_id,
        medicine = %receipt.medicine,
        quantity,
        "stock requested from partner pharmacy"
    );
    Ok(ApiResponse::success(
        format!("Request sent to {}", receipt.pharmacy_name),
        receipt,
        Some(Meta::empty()),
    ))
}
