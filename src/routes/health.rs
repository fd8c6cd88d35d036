use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessData {
    pub status: String,
    pub storage: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
    ),
        tag = "Health"
)]
pub async fn health_check() -> Json<ApiResponse<HealthData>> {
    let data = HealthData {
        status: "ok".to_string(),
    };

    Json(ApiResponse::success(
        "Health check",
        data,
        Some(Meta::empty()),
    ))
}

/// Probes the database when running against Postgres.
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Storage reachable", body = ApiResponse<ReadinessData>),
        (status = 503, description = "Database unreachable", body = ApiResponse<ReadinessData>),
    ),
    tag = "Health"
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<ReadinessData>>) {
    let Some(pool) = state.pool.as_ref() else {
        let data = ReadinessData {
            status: "ok".to_string(),
            storage: "memory".to_string(),
        };
        return (
            StatusCode::OK,
            Json(ApiResponse::success("Ready", data, Some(Meta::empty()))),
        );
    };

    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => {
            let data = ReadinessData {
                status: "ok".to_string(),
                storage: "postgres".to_string(),
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success("Ready", data, Some(Meta::empty()))),
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "readiness probe failed");
            let data = ReadinessData {
                status: "unavailable".to_string(),
                storage: "postgres".to_string(),
            };
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::success("Not ready", data, Some(Meta::empty()))),
            )
        }
    }
}
