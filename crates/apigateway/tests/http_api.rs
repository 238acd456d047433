use apigateway::{di::Repositories, handler::AppRouter, state::AppState};
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use rust_decimal_macros::dec;
use serde_json::{Value, json};
use shared::{domain::requests::TransactionStatus, repository::memory::InMemoryStore};
use std::sync::Arc;
use tower::ServiceExt;

async fn app(store: &InMemoryStore) -> Router {
    let repos = Repositories {
        seller_query: Arc::new(store.clone()),
        seller_command: Arc::new(store.clone()),
        transaction_query: Arc::new(store.clone()),
        transaction_command: Arc::new(store.clone()),
        analytics: Arc::new(store.clone()),
    };

    AppRouter::build(AppState::with_repositories(repos).await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
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
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, value)
}

fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn seller_lifecycle() {
    let store = InMemoryStore::new();
    let app = app(&store).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/sellers",
        Some(json!({ "name": "Alice", "contact_info": "alice@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    let id = body["data"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::GET, &format!("/api/sellers/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Alice");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/sellers/{id}"),
        Some(json!({ "contact_info": "+1 555 0100" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Alice");
    assert_eq!(body["data"]["contact_info"], "+1 555 0100");

    let (status, body) = send(&app, Method::GET, "/api/sellers?page=1&page_size=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total_items"], 1);
    assert_eq!(body["pagination"]["page_size"], 5);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/sellers/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, &format!("/api/sellers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "error");

    let (status, _) = send(&app, Method::DELETE, &format!("/api/sellers/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seller_body_errors() {
    let store = InMemoryStore::new();
    let app = app(&store).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/sellers",
        Some(json!({ "name": "Al", "contact_info": "alice@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/sellers",
        Some(json!({ "name": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/sellers")
        .body(Body::from(r#"{"name":"Alice","contact_info":"alice@example.com"}"#))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn transaction_lifecycle() {
    let store = InMemoryStore::new();
    let alice = store.seed_seller("Alice", at(2024, 1, 1));
    let gone = store.seed_seller("Gone", at(2024, 1, 1));
    store.mark_deleted(gone.id);
    let app = app(&store).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "seller_id": gone.id, "amount": "10.00", "payment_type": "CARD" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "seller_id": alice.id, "amount": "0.00", "payment_type": "CARD" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "seller_id": alice.id, "amount": "150.00", "payment_type": "TRANSFER" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["status"], "PENDING");
    assert_eq!(body["data"]["amount"], "150.00");
    assert!(body["data"]["transaction_date"].is_null());
    let id = body["data"]["id"].as_i64().unwrap();

    let complete = format!("/api/transactions/{id}/complete");
    let (status, body) = send(&app, Method::POST, &complete, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "COMPLETED");
    let stamped = body["data"]["transaction_date"].clone();
    assert!(stamped.is_string());

    let (status, body) = send(&app, Method::POST, &complete, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["transaction_date"], stamped);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/transactions/{id}/cancel"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, Method::POST, "/api/transactions/999/complete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/transactions?seller_id={}", alice.id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["pagination"]["total_items"], 1);
    assert_eq!(body["data"][0]["payment_type"], "TRANSFER");
}

#[tokio::test]
async fn analytics_endpoints() {
    let store = InMemoryStore::new();
    let alice = store.seed_seller("Alice", at(2023, 1, 1));
    let bob = store.seed_seller("Bob", at(2023, 1, 1));
    let completed = TransactionStatus::Completed;
    store.seed_transaction(alice.id, dec!(100.00), completed, Some(at(2024, 1, 5)));
    store.seed_transaction(alice.id, dec!(200.00), completed, Some(at(2024, 1, 20)));
    store.seed_transaction(alice.id, dec!(50.00), completed, Some(at(2024, 2, 3)));
    store.seed_transaction(bob.id, dec!(50.00), completed, Some(at(2024, 1, 9)));
    store.seed_transaction(bob.id, dec!(999.00), TransactionStatus::Pending, None);
    let app = app(&store).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/analytics/top-seller?period_type=MONTH&date=2024-01-10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["seller_id"], alice.id);
    assert_eq!(body["data"]["seller_name"], "Alice");
    assert_eq!(body["data"]["total_amount"], "300.00");

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/analytics/top-seller?period_type=MONTH&date=2023-06-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/analytics/top-seller?period_type=DECADE&date=2024-01-10",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/analytics/sellers-below?from=2024-01-01T00:00:00&to=2024-02-01T00:00:00&max_total=300",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["seller_id"], bob.id);

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/analytics/sellers-below?from=2024-02-01T00:00:00&to=2024-01-01T00:00:00&max_total=300",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::GET,
        &format!(
            "/api/analytics/sellers/{}/best-period?period_type=MONTH",
            alice.id
        ),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["period_type"], "MONTH");
    assert_eq!(body["data"]["period_start"], "2024-01-01T00:00:00");
    assert_eq!(body["data"]["period_end"], "2024-02-01T00:00:00");
    assert_eq!(body["data"]["transaction_count"], 2);
    assert_eq!(body["data"]["total_amount"], "300.00");

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/analytics/sellers/404/best-period?period_type=DAY",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_and_openapi_are_exposed() {
    let store = InMemoryStore::new();
    let app = app(&store).await;

    let (status, _) = send(&app, Method::GET, "/api/sellers", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::GET, "/metrics", None).await;
    assert_eq!(status, StatusCode::OK);
    let text = body.as_str().unwrap();
    assert!(text.contains("http_requests_total"));
    assert!(text.contains("path=\"/api/sellers\""));

    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/analytics/top-seller"].is_object());
    assert!(body["paths"]["/api/sellers/{id}"].is_object());
}
