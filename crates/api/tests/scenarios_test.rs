//! End-to-end scenarios through the full router.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use nirmaan_api::{AppState, create_router};
use serde_json::{Value, json};
use tower::ServiceExt;

const BODY_LIMIT: usize = 64 * 1024;

async fn test_app() -> Router {
    let db = nirmaan_db::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    create_router(AppState::new(db), BODY_LIMIT)
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_budget_and_expense_scenario() {
    let app = test_app().await;

    let (status, _) = call(
        &app,
        Method::PUT,
        "/api/budget",
        Some(json!({"totalBudget": 100_000})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        &app,
        Method::POST,
        "/api/expenses",
        Some(json!({"category": "Cement", "amount": 20_000, "date": "2024-01-01"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, budget) = call(&app, Method::GET, "/api/budget", None).await;
    assert_eq!(budget["totalBudget"], json!(100_000.0));
    assert_eq!(budget["totalExpenses"], json!(20_000.0));
    assert_eq!(budget["remainingBudget"], json!(80_000.0));

    let (_, expenses) = call(&app, Method::GET, "/api/expenses", None).await;
    assert_eq!(expenses[0]["category"], "Cement");
    assert_eq!(expenses[0]["expense_date"], "2024-01-01");
}

#[tokio::test]
async fn test_worker_scenario() {
    let app = test_app().await;

    let (_, created) = call(
        &app,
        Method::POST,
        "/api/labour",
        Some(json!({"name": "Ram", "dailyWage": 500})),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (_, roster) = call(&app, Method::GET, "/api/labour", None).await;
    assert_eq!(roster[0]["is_present"], true);
    assert_eq!(roster[0]["total_pay"], json!(0.0));

    call(
        &app,
        Method::PUT,
        &format!("/api/labour/{id}/attendance"),
        Some(json!({"isPresent": false})),
    )
    .await;
    call(
        &app,
        Method::PUT,
        &format!("/api/labour/{id}/total-pay"),
        Some(json!({"totalPay": 4500})),
    )
    .await;

    let (_, roster) = call(&app, Method::GET, "/api/labour", None).await;
    let ram = &roster[0];
    assert_eq!(ram["name"], "Ram");
    assert_eq!(ram["daily_wage"], json!(500.0));
    assert_eq!(ram["is_present"], false);
    assert_eq!(ram["total_pay"], json!(4500.0));
}

#[tokio::test]
async fn test_remaining_budget_without_expenses() {
    let app = test_app().await;

    call(&app, Method::PUT, "/api/budget", Some(json!({"totalBudget": 1234.5}))).await;

    let (_, budget) = call(&app, Method::GET, "/api/budget", None).await;
    assert_eq!(budget["remainingBudget"], budget["totalBudget"]);
    assert_eq!(budget["totalExpenses"], json!(0.0));
    assert_eq!(budget["utilizationPercent"], json!(0.0));
}

#[tokio::test]
async fn test_budget_summary_with_large_expense_total() {
    let app = test_app().await;

    let expense = json!({
        "category": "Steel",
        "amount": 90_000_000_000_000_000_u64,
        "date": "2024-01-01"
    });
    for _ in 0..2 {
        let (status, _) = call(&app, Method::POST, "/api/expenses", Some(expense.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, budget) = call(&app, Method::GET, "/api/budget", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(budget["totalExpenses"], json!(180_000_000_000_000_000.0));
    assert_eq!(budget["remainingBudget"], json!(-180_000_000_000_000_000.0));
}

#[tokio::test]
async fn test_missing_ids_change_nothing() {
    let app = test_app().await;

    call(
        &app,
        Method::POST,
        "/api/labour",
        Some(json!({"name": "Shyam", "dailyWage": 600})),
    )
    .await;
    let (_, before) = call(&app, Method::GET, "/api/labour", None).await;

    let (status, _) = call(&app, Method::DELETE, "/api/labour/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, Method::DELETE, "/api/expenses/4242", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, after) = call(&app, Method::GET, "/api/labour", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_health_is_mounted_under_api() {
    let app = test_app().await;

    let (status, body) = call(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/labour")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let app = test_app().await;
    let name = "x".repeat(BODY_LIMIT + 1);

    let (status, body) = call(
        &app,
        Method::POST,
        "/api/labour",
        Some(json!({"name": name, "dailyWage": 500})),
    )
    .await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "payload_too_large");
}

#[tokio::test]
async fn test_oversized_body_with_content_length_rejected() {
    let app = test_app().await;
    let payload = json!({"name": "x".repeat(BODY_LIMIT + 1), "dailyWage": 500}).to_string();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/labour")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "payload_too_large");

    let (_, workers) = call(&app, Method::GET, "/api/labour", None).await;
    assert_eq!(workers, json!([]));
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/health")
        .header(header::ORIGIN, "http://site.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
