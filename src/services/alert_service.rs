use std::collections::HashSet;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    config::MAX_HORIZON_DAYS,
    dto::alerts::{AlertList, ScanResult},
    error::{AppError, AppResult},
    metrics::{depletion_date, forecast, is_low_stock, predicted_demand, recommend_reorder},
    models::{Alert, AlertType, Medicine},
    response::{ApiResponse, Meta},
    routes::params::AlertListQuery,
    services::forecast_service::DEMAND_WINDOW_DAYS,
    state::AppState,
};

/// Accepting and dismissing both mark the alert read; they differ only in wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertResolution {
    Accept,
    Dismiss,
}

impl AlertResolution {
    fn message(self) -> &'static str {
        match self {
            Self::Accept => "Alert accepted",
            Self::Dismiss => "Alert dismissed",
        }
    }
}

pub async fn list_alerts(
    state: &AppState,
    query: AlertListQuery,
) -> AppResult<ApiResponse<AlertList>> {
    let mut items = state.store.alerts().await?;
    let unread = items.iter().filter(|a| !a.read).count();
    if query.unread_only.unwrap_or(false) {
        items.retain(|a| !a.read);
    }

    let meta = Meta::total(items.len());
    Ok(ApiResponse::success(
        "Alerts",
        AlertList { unread, items },
        Some(meta),
    ))
}

/// Marks an alert read. Already-read alerts stay read.
pub async fn resolve_alert(
    state: &AppState,
    id: &str,
    resolution: AlertResolution,
) -> AppResult<ApiResponse<Alert>> {
    let id = id.to_string();
    let alert = state
        .store
        .update_alerts(move |alerts| {
            let alert = match alerts.iter_mut().find(|a| a.id == id) {
                Some(a) => a,
                None => return Err(AppError::NotFound),
            };
            alert.read = true;
            Ok(alert.clone())
        })
        .await?;

    tracing::info!(alert_id = %alert.id, ?resolution, "alert resolved");
    Ok(ApiResponse::success(
        resolution.message(),
        alert,
        Some(Meta::empty()),
    ))
}

fn build_alert_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("A-{}", &suffix[..8])
}

fn low_stock_alert(state: &AppState, medicine: &Medicine) -> Alert {
    let today = state.today();
    let mut noise = state.forecast.noise.source();
    let horizon = state.forecast.horizon_days.clamp(1, MAX_HORIZON_DAYS);
    let points = forecast(medicine, horizon, today, noise.as_mut());
    let demand = predicted_demand(&points, DEMAND_WINDOW_DAYS);
    let depletion = depletion_date(medicine, &points);

    let message = match depletion {
        Some(date) => format!(
            "{} predicted to run out by {}",
            medicine.name,
            date.format("%b %-d, %Y")
        ),
        None => format!(
            "{} running low - {} {} remaining",
            medicine.name, medicine.quantity, medicine.unit
        ),
    };

    Alert {
        id: build_alert_id(),
        alert_type: AlertType::LowStock,
        title: "Low Stock Alert".into(),
        message,
        timestamp: Utc::now(),
        read: false,
        medicine: Some(medicine.name.clone()),
        depletion_date: depletion,
        recommended_quantity: Some(recommend_reorder(medicine, demand)),
    }
}

/// Raises a low-stock alert for every low-stock medicine that has no unread one yet.
pub async fn scan_low_stock(state: &AppState) -> AppResult<ApiResponse<ScanResult>> {
    let candidates: Vec<Alert> = state
        .store
        .inventory()
        .await?
        .iter()
        .filter(|m| is_low_stock(m))
        .map(|m| low_stock_alert(state, m))
        .collect();

    let created = state
        .store
        .update_alerts(move |alerts| {
            let open: HashSet<String> = alerts
                .iter()
                .filter(|a| !a.read && a.alert_type == AlertType::LowStock)
                .filter_map(|a| a.medicine.clone())
                .collect();
            let fresh: Vec<Alert> = candidates
                .into_iter()
                .filter(|a| a.medicine.as_ref().is_some_and(|name| !open.contains(name)))
                .collect();
            let mut merged = fresh.clone();
            merged.append(alerts);
            *alerts = merged;
            Ok(fresh)
        })
        .await?;

    tracing::info!(created = created.len(), "low stock scan finished");
    let meta = Meta::total(created.len());
    Ok(ApiResponse::success(
        "Low stock scan",
        ScanResult { created },
        Some(meta),
    ))
}
