use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};

use crate::{
    dto::forecast::{ForecastReport, ForecastSummary},
    error::AppResult,
    response::ApiResponse,
    routes::params::{ForecastQuery, Pagination},
    services::forecast_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_forecasts))
        .route("/{medicine_id}", get(get_forecast))
}

#[utoipa::path(
    get,
    path = "/api/forecast",
    params(Pagination),
    responses(
        (status = 200, description = "Seven-day demand and reorder flag per medicine", body = ApiResponse<ForecastSummary>)
    ),
    tag = "Forecast"
)]
pub async fn list_forecasts(
    State(state): State<AppState>,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<ForecastSummary>>> {
    let resp = forecast_service::forecast_summary(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/forecast/{medicine_id}",
    params(
        ("medicine_id" = String, Path, description = "Medicine ID"),
        ForecastQuery
    ),
    responses(
        (status = 200, description = "Sales history, demand forecast and reorder advice", body = ApiResponse<ForecastReport>),
        (status = 404, description = "Medicine not found"),
    ),
    tag = "Forecast"
)]
pub async fn get_forecast(
    State(state): State<AppState>,
    Path(medicine_id): Path<String>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<ApiResponse<ForecastReport>>> {
    let resp = forecast_service::forecast_report(&state, &medicine_id, query).await?;
    Ok(Json(resp))
}
