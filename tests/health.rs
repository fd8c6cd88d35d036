use axum::extract::State;
use axum::http::StatusCode;
use rural_pharmacy_api::{
    routes::health::{health_check, readiness},
    state::AppState,
};

#[tokio::test]
async fn health_check_returns_ok() {
    let response = health_check().await;
    assert_eq!(response.0.message, "Health check");

    let data = response.0.data.expect("health data");
    assert_eq!(data.status, "ok");
}

#[tokio::test]
async fn readiness_without_database_reports_memory_storage() {
    let (status, response) = readiness(State(AppState::in_memory())).await;
    assert_eq!(status, StatusCode::OK);

    let data = response.0.data.expect("readiness data");
    assert_eq!(data.status, "ok");
    assert_eq!(data.storage, "memory");
}
