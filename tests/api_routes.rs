use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use rural_pharmacy_api::{routes::create_app, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    create_app(AppState::in_memory())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("infallible router");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, method: Method, uri: &str, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, body) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn inventory_listing_includes_stock_outlook() {
    let app = app();
    let (status, body) = get_json(&app, "/api/inventory?per_page=2").await;
    assert_eq!(status, StatusCode::OK);

    let items = body["data"]["items"].as_array().expect("items");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["medicine_id"], "M001");
    assert_eq!(items[0]["days_remaining"], 24);
    assert_eq!(items[0]["low_stock"], false);
    assert_eq!(body["meta"]["total"], 8);
}

#[tokio::test]
async fn unknown_medicine_is_404() {
    let app = app();
    let (status, _) = get_json(&app, "/api/inventory/M404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn medicine_create_then_fetch() {
    let app = app();
    let (status, body) = post_json(
        &app,
        Method::POST,
        "/api/inventory",
        json!({
            "name": "Vitamin C",
            "form": "Tablet",
            "quantity": 60,
            "unit": "tablets",
            "expiry_date": "2027-03-31",
            "avg_daily_sales": 3.0
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["medicine_id"], "M009");

    let (status, body) = get_json(&app, "/api/inventory/M009").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Vitamin C");
    assert_eq!(body["data"]["days_remaining"], 20);
}

#[tokio::test]
async fn export_is_served_as_csv_attachment() {
    let app = app();
    let request = Request::get("/api/inventory/export")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposition.contains("medilink-inventory-"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("medicine_id,name,brand"));
    assert_eq!(text.lines().count(), 9);
}

#[tokio::test]
async fn csv_import_accepts_plain_text_body() {
    let app = app();
    let request = Request::post("/api/inventory/import")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from("medicine_id,name,quantity\nM050,Bandage,30\n"))
        .unwrap();
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Added 1 medicines to inventory");
    assert_eq!(body["data"]["total"], 9);
}

#[tokio::test]
async fn order_validation_errors_are_400() {
    let app = app();
    let (status, body) = post_json(
        &app,
        Method::POST,
        "/api/orders",
        json!({ "medicine": "Ibuprofen", "allocations": [{ "vendorId": "V001", "quantity": 0 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = post_json(
        &app,
        Method::POST,
        "/api/orders",
        json!({ "medicine": "Ibuprofen", "allocations": [{ "vendorId": "V002", "quantity": 10 }] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "Pending");
    assert_eq!(body["data"]["totalCost"], 200.0);

    let (_, body) = get_json(&app, "/api/orders?status=Pending").await;
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn alert_accept_and_dashboard() {
    let app = app();
    let (status, body) = post_json(&app, Method::POST, "/api/alerts/A002/accept", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["read"], true);

    let (_, body) = get_json(&app, "/api/dashboard").await;
    assert_eq!(body["data"]["unread_alerts"], 2);
    assert_eq!(body["data"]["low_stock_count"], 2);
}

#[tokio::test]
async fn settings_round_trip() {
    let app = app();
    let (status, _) = post_json(
        &app,
        Method::PUT,
        "/api/settings",
        json!({ "pharmacyName": "Sahyadri Medicals", "language": "mr" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = get_json(&app, "/api/settings").await;
    assert_eq!(body["data"]["pharmacyName"], "Sahyadri Medicals");
    assert_eq!(body["data"]["language"], "mr");
}

#[tokio::test]
async fn forecast_endpoint_honours_horizon() {
    let app = app();
    let (status, body) = get_json(&app, "/api/forecast/M001?horizon=5&history=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["forecast"].as_array().map(Vec::len), Some(5));
    assert_eq!(body["data"]["history"].as_array().map(Vec::len), Some(10));
}

#[tokio::test]
async fn forecast_summary_lists_every_medicine() {
    let app = app();
    let (status, body) = get_json(&app, "/api/forecast").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"].as_array().map(Vec::len), Some(8));
    assert_eq!(body["data"]["items"][3]["needs_reorder"], true);

    let (_, body) = get_json(&app, "/api/forecast/M001").await;
    assert_eq!(body["data"]["drivers"][2]["impact"], "High");
}

#[tokio::test]
async fn far_out_page_is_empty_not_a_crash() {
    let app = app();
    let (status, body) =
        get_json(&app, "/api/bills?page=9223372036854775807&per_page=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"], json!([]));

    let (status, body) =
        get_json(&app, "/api/inventory?page=9223372036854775807&per_page=100").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["items"], json!([]));
    assert_eq!(body["meta"]["total"], 8);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let assigned = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(!assigned.is_empty());

    let response = app
        .clone()
        .oneshot(
            Request::get("/health")
                .header("x-request-id", "till-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-request-id"], "till-42");
}

#[tokio::test]
async fn unknown_path_gets_json_404() {
    let app = app();
    let (status, body) = get_json(&app, "/api/prescriptions").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Not Found");
    assert_eq!(body["data"]["path"], "/api/prescriptions");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = app();
    let csv = format!("medicine_id,name,quantity\n{}", "M900,Bulk,1\n".repeat(120_000));
    let request = Request::post("/api/inventory/import")
        .header(header::CONTENT_TYPE, "text/csv")
        .body(Body::from(csv))
        .unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
