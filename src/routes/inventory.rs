use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use crate::{
    dto::inventory::{
        CreateMedicineRequest, DashboardSummary, ImportSummary, StockList, StockStatus,
        UpdateMedicineRequest,
    },
    error::AppResult,
    response::{ApiResponse, Empty},
    routes::params::InventoryQuery,
    services::inventory_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_inventory).post(create_medicine))
        .route("/low-stock", get(list_low_stock))
        .route("/import", post(import_inventory))
        .route("/export", get(export_inventory))
        .route(
            "/{id}",
            get(get_medicine).put(update_medicine).delete(delete_medicine),
        )
}

#[utoipa::path(
    get,
    path = "/api/inventory",
    params(InventoryQuery),
    responses(
        (status = 200, description = "List inventory with stock outlook", body = ApiResponse<StockList>)
    ),
    tag = "Inventory"
)]
pub async fn list_inventory(
    State(state): State<AppState>,
    Query(query): Query<InventoryQuery>,
) -> AppResult<Json<ApiResponse<StockList>>> {
    let resp = inventory_service::list_inventory(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/inventory/{id}",
    params(
        ("id" = String, Path, description = "Medicine ID")
    ),
    responses(
        (status = 200, description = "Get medicine", body = ApiResponse<StockStatus>),
        (status = 404, description = "Medicine not found"),
    ),
    tag = "Inventory"
)]
pub async fn get_medicine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<StockStatus>>> {
    let resp = inventory_service::get_medicine(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/inventory",
    request_body = CreateMedicineRequest,
    responses(
        (status = 201, description = "Medicine added", body = ApiResponse<StockStatus>),
        (status = 400, description = "Invalid medicine"),
    ),
    tag = "Inventory"
)]
pub async fn create_medicine(
    State(state): State<AppState>,
    Json(payload): Json<CreateMedicineRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<StockStatus>>)> {
    let resp = inventory_service::create_medicine(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    put,
    path = "/api/inventory/{id}",
    params(
        ("id" = String, Path, description = "Medicine ID")
    ),
    request_body = UpdateMedicineRequest,
    responses(
        (status = 200, description = "Medicine updated", body = ApiResponse<StockStatus>),
        (status = 400, description = "Invalid medicine"),
        (status = 404, description = "Medicine not found"),
    ),
    tag = "Inventory"
)]
pub async fn update_medicine(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateMedicineRequest>,
) -> AppResult<Json<ApiResponse<StockStatus>>> {
    let resp = inventory_service::update_medicine(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/inventory/{id}",
    params(
        ("id" = String, Path, description = "Medicine ID")
    ),
    responses(
        (status = 200, description = "Medicine deleted", body = ApiResponse<Empty>),
        (status = 404, description = "Medicine not found"),
    ),
    tag = "Inventory"
)]
pub async fn delete_medicine(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let resp = inventory_service::delete_medicine(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/inventory/low-stock",
    responses(
        (status = 200, description = "Low stock medicines, soonest to run out first", body = ApiResponse<StockList>)
    ),
    tag = "Inventory"
)]
pub async fn list_low_stock(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<StockList>>> {
    let resp = inventory_service::list_low_stock(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/inventory/import",
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Rows merged into inventory", body = ApiResponse<ImportSummary>),
        (status = 400, description = "Unreadable CSV"),
    ),
    tag = "Inventory"
)]
pub async fn import_inventory(
    State(state): State<AppState>,
    body: String,
) -> AppResult<Json<ApiResponse<ImportSummary>>> {
    let resp = inventory_service::import_csv(&state, &body).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/inventory/export",
    responses(
        (status = 200, description = "Inventory as CSV", body = String, content_type = "text/csv")
    ),
    tag = "Inventory"
)]
pub async fn export_inventory(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let csv = inventory_service::export_csv(&state).await?;
    let disposition = format!(
        "attachment; filename=\"medilink-inventory-{}.csv\"",
        state.today().format("%Y-%m-%d")
    );
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses(
        (status = 200, description = "Stock, alert and order summary", body = ApiResponse<DashboardSummary>)
    ),
    tag = "Dashboard"
)]
pub async fn dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardSummary>>> {
    let resp = inventory_service::dashboard(&state).await?;
    Ok(Json(resp))
}
