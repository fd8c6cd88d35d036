use axum::{Router, routing::get};

use crate::{middleware, state::AppState};

pub mod alerts;
pub mod bills;
pub mod doc;
pub mod forecast;
pub mod health;
pub mod inventory;
pub mod network;
pub mod orders;
pub mod params;
pub mod settings;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(inventory::dashboard))
        .nest("/inventory", inventory::router())
        .nest("/forecast", forecast::router())
        .nest("/alerts", alerts::router())
        .nest("/vendors", orders::vendor_router())
        .nest("/orders", orders::router())
        .nest("/bills", bills::router())
        .nest("/network", network::router())
        .nest("/settings", settings::router())
}

/// Full application: health probes, the API, the docs UI and the middleware stack.
pub fn create_app(state: AppState) -> Router {
    let app = Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness))
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback(middleware::not_found)
        .with_state(state);
    middleware::with_request_layers(app)
}
