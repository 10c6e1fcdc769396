//! Route tests for requests rejected before any storage access.
//!
//! The router runs against a disconnected database handle, so every case here must fail (or
//! succeed) without a query.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use fintrack_api::{AppState, create_router};
use fintrack_shared::config::ServerConfig;
use fintrack_shared::{JwtConfig, JwtService};
use http_body_util::BodyExt;
use rstest::rstest;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

fn jwt_service() -> JwtService {
    JwtService::new(JwtConfig {
        secret: "route-test-secret".to_string(),
        access_token_expires_minutes: 15,
    })
}

fn app() -> Router {
    let state = AppState::new(DatabaseConnection::Disconnected, jwt_service());
    create_router(state, &ServerConfig::default())
}

fn bearer() -> String {
    let token = jwt_service()
        .generate_access_token(Uuid::new_v4())
        .expect("token");
    format!("Bearer {token}")
}

fn authed(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, bearer());
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_is_public() {
    let request = Request::builder()
        .uri("/api/v1/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[rstest]
#[case("/api/v1/budgets")]
#[case("/api/v1/debts")]
#[case("/api/v1/recurring-payments")]
#[case("/api/v1/savings")]
#[case("/api/v1/dashboard")]
#[tokio::test]
async fn test_missing_token_is_unauthorized(#[case] uri: &str) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_token_from_another_secret_is_unauthorized() {
    let foreign = JwtService::new(JwtConfig {
        secret: "someone-else".to_string(),
        access_token_expires_minutes: 15,
    })
    .generate_access_token(Uuid::new_v4())
    .unwrap();

    let request = Request::builder()
        .uri("/api/v1/budgets")
        .header(header::AUTHORIZATION, format!("Bearer {foreign}"))
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Authentication failed: Invalid or malformed token");
}

#[rstest]
#[case("GET", "/api/v1/budgets/not-a-uuid")]
#[case("DELETE", "/api/v1/debts/12345")]
#[case("GET", "/api/v1/recurring-payments/xyz")]
#[case("DELETE", "/api/v1/savings/xyz")]
#[tokio::test]
async fn test_malformed_id_is_validation_error(#[case] method: &str, #[case] uri: &str) {
    let (status, json) = send(authed(method, uri, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[rstest]
#[case("/api/v1/budgets")]
#[case("/api/v1/debts")]
#[case("/api/v1/recurring-payments")]
#[case("/api/v1/savings")]
#[tokio::test]
async fn test_empty_patch_is_rejected(#[case] collection: &str) {
    let uri = format!("{collection}/{}", Uuid::new_v4());
    let (status, json) = send(authed("PATCH", &uri, Some("{}"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Validation error: At least one field is required to update");
}

#[tokio::test]
async fn test_debt_paid_before_taken_is_rejected() {
    let body = r#"{
        "debtAmount": "1000",
        "interestRate": "5",
        "debtTakenDate": "2024-06-01",
        "debtPayingDate": "2024-05-01",
        "debtTakenFromName": "Bank"
    }"#;
    let (status, json) = send(authed("POST", "/api/v1/debts", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["message"],
        "Validation error: Debt paying date cannot be earlier than the debt taken date"
    );
}

#[rstest]
#[case("79228162514264337593543950335", "10")]
#[case("1000", "100000")]
#[tokio::test]
async fn test_debt_beyond_column_bounds_is_rejected(#[case] amount: &str, #[case] rate: &str) {
    let body = format!(
        r#"{{
        "debtAmount": "{amount}",
        "interestRate": "{rate}",
        "debtTakenDate": "2024-01-01",
        "debtPayingDate": "2024-06-01",
        "debtTakenFromName": "Bank"
    }}"#
    );
    let (status, json) = send(authed("POST", "/api/v1/debts", Some(&body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[rstest]
#[case(r#"{"type": "income", "amount": "10""#)]
#[case(r#"{"type": "transfer", "amount": "10", "category": "misc"}"#)]
#[case(r#"{"type": "income", "amount": "-5", "category": "salary"}"#)]
#[case(r#"{"type": "income", "amount": "10", "category": "ab"}"#)]
#[case(r#"{"amount": "10", "category": "salary"}"#)]
#[case(r#"{"type": "income", "amount": "0.00001", "category": "salary"}"#)]
#[case(r#"{"type": "income", "amount": "1000000000000000", "category": "salary"}"#)]
#[tokio::test]
async fn test_invalid_budget_entry_is_rejected(#[case] body: &str) {
    let (status, json) = send(authed("POST", "/api/v1/budgets", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_recurring_payment_with_unknown_frequency_is_rejected() {
    let body = r#"{"title": "Gym", "amount": "30", "frequency": "fortnightly", "startDate": "2024-01-01"}"#;
    let (status, _) = send(authed("POST", "/api/v1/recurring-payments", Some(body))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[rstest]
#[case("/api/v1/budgets?limit=500")]
#[case("/api/v1/budgets?page=0")]
#[case("/api/v1/debts?page=abc")]
#[case("/api/v1/debts?sortBy=password&sortType=asc")]
#[tokio::test]
async fn test_invalid_list_query_is_rejected(#[case] uri: &str) {
    let (status, json) = send(authed("GET", uri, None)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_storage_failure_is_internal_error() {
    let (status, json) = send(authed("GET", "/api/v1/dashboard", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "DATABASE_ERROR");
    assert_eq!(json["message"], "An error occurred");
}
