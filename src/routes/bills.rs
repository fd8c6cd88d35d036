use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::bills::{BillList, CreateBillRequest},
    error::AppResult,
    models::Bill,
    response::ApiResponse,
    routes::params::Pagination,
    services::bill_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bills).post(create_bill))
        .route("/{id}", get(get_bill))
}

#[utoipa::path(
    get,
    path = "/api/bills",
    params(Pagination),
    responses(
        (status = 200, description = "Bills, newest first", body = ApiResponse<BillList>)
    ),
    tag = "Billing"
)]
pub async fn list_bills(
    State(state): State<AppState>,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<BillList>>> {
    let resp = bill_service::list_bills(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/bills/{id}",
    params(
        ("id" = String, Path, description = "Bill ID")
    ),
    responses(
        (status = 200, description = "Get bill", body = ApiResponse<Bill>),
        (status = 404, description = "Bill not found"),
    ),
    tag = "Billing"
)]
pub async fn get_bill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Bill>>> {
    let resp = bill_service::get_bill(&state, &id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/bills",
    request_body = CreateBillRequest,
    responses(
        (status = 201, description = "Bill generated", body = ApiResponse<Bill>),
        (status = 400, description = "Invalid bill line"),
    ),
    tag = "Billing"
)]
pub async fn create_bill(
    State(state): State<AppState>,
    Json(payload): Json<CreateBillRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Bill>>)> {
    let resp = bill_service::create_bill(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}
