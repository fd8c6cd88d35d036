use crate::{
    dto::settings::UpdateSettingsRequest,
    error::{AppError, AppResult},
    models::Settings,
    response::{ApiResponse, Empty, Meta},
    state::AppState,
    transfer::{Backup, backup},
};

pub async fn get_settings(state: &AppState) -> AppResult<ApiResponse<Settings>> {
    let settings = state.store.settings().await?;
    Ok(ApiResponse::success("Settings", settings, Some(Meta::empty())))
}

pub async fn update_settings(
    state: &AppState,
    payload: UpdateSettingsRequest,
) -> AppResult<ApiResponse<Settings>> {
    let pharmacy_name = payload.pharmacy_name.trim();
    let language = payload.language.trim();
    if pharmacy_name.is_empty() {
        return Err(AppError::BadRequest("pharmacy name is required".into()));
    }
    if language.is_empty() {
        return Err(AppError::BadRequest("language is required".into()));
    }

    state.store.set_pharmacy_name(pharmacy_name).await?;
    state.store.set_language(language).await?;
    tracing::info!(pharmacy_name, language, "settings updated");

    let settings = state.store.settings().await?;
    Ok(ApiResponse::success(
        "Settings saved",
        settings,
        Some(Meta::empty()),
    ))
}

pub async fn export_backup(state: &AppState) -> AppResult<ApiResponse<Backup>> {
    let data = backup(&state.store).await?;
    Ok(ApiResponse::success("Backup", data, Some(Meta::empty())))
}

pub async fn reset_demo_data(state: &AppState) -> AppResult<ApiResponse<Empty>> {
    state.store.reset_demo_data().await?;
    Ok(ApiResponse::success(
        "Demo data restored",
        Empty::default(),
        Some(Meta::empty()),
    ))
}
