use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use finsim_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Router with no forecast service, so every symbol resolves to the simulated fallback.
async fn build_test_router() -> Router {
    let config = Config {
        forecast_url: None,
        spot_prices: false,
        ..Config::default()
    };
    let state = build_state(&config).await.unwrap();
    app_router(state, &config).unwrap()
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn snapshot() -> Value {
    json!({
        "stocks": [
            {"_id": "s1", "name": "Apple", "symbol": "AAPL", "quantity": 10, "purchasePrice": 100, "currentPrice": 110}
        ],
        "marriage": [
            {"name": "Wedding", "cost": 20000, "startYear": 2028}
        ],
        "bills": [
            {"name": "Utilities", "cost": "2400"}
        ]
    })
}

#[tokio::test]
async fn healthz_reports_ok() {
    let app = build_test_router().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn projection_today_values_holdings_at_current_price() {
    let app = build_test_router().await;
    let (status, body) = post_json(
        &app,
        "/api/v1/projection",
        json!({"snapshot": snapshot(), "horizon": 0, "asOf": "2025-01-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["horizon"], 0);
    assert_eq!(body["investments"], 1100.0);
    assert_eq!(body["expenses"], 2400.0);
    assert_eq!(body["netWorth"], -1300.0);
    assert!(body.get("trajectory").is_none());
    assert_eq!(body["isSimulated"], false);
}

#[tokio::test]
async fn projection_without_forecast_service_is_simulated() {
    let app = build_test_router().await;
    let (status, body) = post_json(
        &app,
        "/api/v1/projection",
        json!({"snapshot": snapshot(), "horizon": 3, "asOf": "2025-01-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isSimulated"], true);
    assert_eq!(body["simulatedSymbols"], json!(["AAPL"]));
    // Current value 1100 at 8% for three years.
    let investments = body["investments"].as_f64().unwrap();
    assert!((investments - 1385.6832).abs() < 1e-6);
    assert_eq!(body["trajectory"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn projection_rejects_oversized_horizon() {
    let app = build_test_router().await;
    let (status, body) = post_json(
        &app,
        "/api/v1/projection",
        json!({"snapshot": snapshot(), "horizon": 250}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("250"));
}

#[tokio::test]
async fn canonical_projection_returns_four_horizons() {
    let app = build_test_router().await;
    let (status, body) = post_json(
        &app,
        "/api/v1/projection/canonical",
        json!({"snapshot": snapshot(), "asOf": "2025-01-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let horizons: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["horizon"].as_u64().unwrap())
        .collect();
    assert_eq!(horizons, vec![0, 3, 5, 10]);
}

#[tokio::test]
async fn summary_lists_every_category() {
    let app = build_test_router().await;
    let (status, body) = post_json(
        &app,
        "/api/v1/summary",
        json!({"snapshot": snapshot(), "asOf": "2025-01-01"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let summaries = body.as_array().unwrap();
    assert_eq!(summaries.len(), 13);
    let stocks = summaries.iter().find(|s| s["category"] == "stocks").unwrap();
    assert_eq!(stocks["label"], "Total Stock P/L");
    assert_eq!(stocks["amount"], 100.0);
    assert_eq!(stocks["kind"], "investment");
}

#[tokio::test]
async fn forecast_request_validation() {
    let app = build_test_router().await;

    let (status, _) = post_json(
        &app,
        "/api/v1/forecasts/validate",
        json!({"assetClass": "stock", "symbol": "AAPL", "investedAmount": 1000}),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = post_json(
        &app,
        "/api/v1/forecasts/validate",
        json!({"assetClass": "bond", "symbol": "AAPL", "investedAmount": 1000}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid assetClass: bond");

    let (status, _) = post_json(
        &app,
        "/api/v1/forecasts/validate",
        json!({"assetClass": "stock", "symbol": "  ", "investedAmount": 1000}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_json(
        &app,
        "/api/v1/forecasts/validate",
        json!({"assetClass": "gold", "symbol": "GOLD", "investedAmount": -5}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
