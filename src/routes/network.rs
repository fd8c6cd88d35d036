use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::network::{PharmacyList, StockRequest, StockRequestReceipt},
    error::AppResult,
    response::ApiResponse,
    routes::params::NetworkQuery,
    services::network_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pharmacies", get(list_pharmacies))
        .route("/pharmacies/{id}/requests", post(request_stock))
}

#[utoipa::path(
    get,
    path = "/api/network/pharmacies",
    params(NetworkQuery),
    responses(
        (status = 200, description = "Partner pharmacies, nearest first", body = ApiResponse<PharmacyList>)
    ),
    tag = "Network"
)]
pub async fn list_pharmacies(
    State(state): State<AppState>,
    Query(query): Query<NetworkQuery>,
) -> AppResult<Json<ApiResponse<PharmacyList>>> {
    let resp = network_service::list_pharmacies(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/network/pharmacies/{id}/requests",
    params(
        ("id" = String, Path, description = "Pharmacy ID")
    ),
    request_body = StockRequest,
    responses(
        (status = 200, description = "Request acknowledged", body = ApiResponse<StockRequestReceipt>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Pharmacy not found"),
    ),
    tag = "Network"
)]
pub async fn request_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StockRequest>,
) -> AppResult<Json<ApiResponse<StockRequestReceipt>>> {
    let resp = network_service::request_stock(&state, &id, payload).await?;
    Ok(Json(resp))
}
