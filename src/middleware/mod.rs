use std::time::Duration;

use axum::{
    Json, Router,
    http::{HeaderMap, HeaderName, Request, Response, StatusCode, Uri},
};
use serde::Serialize;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::response::{ApiResponse, Meta};

pub const REQUEST_ID_HEADER: &str = "x-request-id";
/// CSV imports are the largest bodies the API accepts.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;
pub const MAX_IN_FLIGHT: usize = 100;

fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

/// Wraps the router in the HTTP middleware stack. The concurrency cap is outermost
/// and tracing sees the assigned request id.
pub fn with_request_layers(router: Router) -> Router {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id(request.headers())
            )
        })
        .on_request(|request: &Request<_>, _span: &tracing::Span| {
            tracing::debug!(method = %request.method(), uri = %request.uri(), "request started");
        })
        .on_response(|response: &Response<_>, latency: Duration, _span: &tracing::Span| {
            tracing::info!(
                status = %response.status(),
                ms = %latency.as_millis(),
                "request finished"
            );
        });

    router
        .layer(trace_layer)
        .layer(PropagateRequestIdLayer::new(header.clone()))
        .layer(SetRequestIdLayer::new(header, MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(ConcurrencyLimitLayer::new(MAX_IN_FLIGHT))
}

#[derive(Debug, Serialize)]
pub struct UnknownRoute {
    pub path: String,
}

/// Fallback for paths no router claims.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<UnknownRoute>>) {
    let body = ApiResponse::success(
        "Not Found",
        UnknownRoute {
            path: uri.path().to_string(),
        },
        Some(Meta::empty()),
    );
    (StatusCode::NOT_FOUND, Json(body))
}
