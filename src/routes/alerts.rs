use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::alerts::{AlertList, ScanResult},
    error::AppResult,
    models::Alert,
    response::ApiResponse,
    routes::params::AlertListQuery,
    services::alert_service::{self, AlertResolution},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_alerts))
        .route("/scan", post(scan_alerts))
        .route("/{id}/accept", post(accept_alert))
        .route("/{id}/dismiss", post(dismiss_alert))
}

#[utoipa::path(
    get,
    path = "/api/alerts",
    params(AlertListQuery),
    responses(
        (status = 200, description = "Alerts, newest first", body = ApiResponse<AlertList>)
    ),
    tag = "Alerts"
)]
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertListQuery>,
) -> AppResult<Json<ApiResponse<AlertList>>> {
    let resp = alert_service::list_alerts(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/alerts/{id}/accept",
    params(
        ("id" = String, Path, description = "Alert ID")
    ),
    responses(
        (status = 200, description = "Alert marked read", body = ApiResponse<Alert>),
        (status = 404, description = "Alert not found"),
    ),
    tag = "Alerts"
)]
pub async fn accept_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Alert>>> {
    let resp = alert_service::resolve_alert(&state, &id, AlertResolution::Accept).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/alerts/{id}/dismiss",
    params(
        ("id" = String, Path, description = "Alert ID")
    ),
    responses(
        (status = 200, description = "Alert marked read", body = ApiResponse<Alert>),
        (status = 404, description = "Alert not found"),
    ),
    tag = "Alerts"
)]
pub async fn dismiss_alert(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Alert>>> {
    let resp = alert_service::resolve_alert(&state, &id, AlertResolution::Dismiss).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/alerts/scan",
    responses(
        (status = 200, description = "Low stock alerts raised by this scan", body = ApiResponse<ScanResult>)
    ),
    tag = "Alerts"
)]
pub async fn scan_alerts(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<ScanResult>>> {
    let resp = alert_service::scan_low_stock(&state).await?;
    Ok(Json(resp))
}
