use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::settings::UpdateSettingsRequest,
    error::AppResult,
    models::Settings,
    response::{ApiResponse, Empty},
    services::settings_service,
    state::AppState,
    transfer::Backup,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings).put(update_settings))
        .route("/backup", get(export_backup))
        .route("/reset", post(reset_demo_data))
}

#[utoipa::path(
    get,
    path = "/api/settings",
    responses(
        (status = 200, description = "Pharmacy settings", body = ApiResponse<Settings>)
    ),
    tag = "Settings"
)]
pub async fn get_settings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Settings>>> {
    let resp = settings_service::get_settings(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/settings",
    request_body = UpdateSettingsRequest,
    responses(
        (status = 200, description = "Settings saved", body = ApiResponse<Settings>),
        (status = 400, description = "Blank pharmacy name or language"),
    ),
    tag = "Settings"
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> AppResult<Json<ApiResponse<Settings>>> {
    let resp = settings_service::update_settings(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/settings/backup",
    responses(
        (status = 200, description = "Inventory, alerts and settings", body = ApiResponse<Backup>)
    ),
    tag = "Settings"
)]
pub async fn export_backup(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Backup>>> {
    let resp = settings_service::export_backup(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/settings/reset",
    responses(
        (status = 200, description = "Inventory and alerts restored to demo data", body = ApiResponse<Empty>)
    ),
    tag = "Settings"
)]
pub async fn reset_demo_data(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Empty>>> {
    let resp = settings_service::reset_demo_data(&state).await?;
    Ok(Json(resp))
}
