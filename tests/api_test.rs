//! Integration tests for API endpoints.
//!
//! The router runs over in-memory stores with no database or Redis, so
//! rate limits are counted in process and health reports both components
//! as disabled.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use safehouse_registry::api::{create_router, AppState};
use safehouse_registry::errors::AppError;
use safehouse_registry::infra::{LinearSeverityModel, MockRateLimitStore, Persistence};
use safehouse_registry::services::Services;

fn state() -> AppState {
    let model = Arc::new(LinearSeverityModel::new([1.0, 2.0, 3.0], 0.5));
    let services = Services::new(&Persistence::in_memory(), model);
    AppState::from_container(&services)
}

fn app() -> Router {
    create_router(state())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn test_health_without_backends() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "disabled");
    assert_eq!(body["services"]["redis"]["status"], "disabled");
}

#[tokio::test]
async fn test_administrator_lifecycle() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/administrators",
        Some(json!({"name": "Admin A", "email": "A@Ex.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "a@ex.com");
    assert!(created.get("passwordHash").is_none());
    assert!(created.get("password_hash").is_none());

    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/api/administrators/{}", id);

    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Admin A");

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"id": id, "name": "Admin B", "email": "b@ex.com", "password": "secret2"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, list) = send(&app, Method::GET, "/api/administrators", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["email"], "b@ex.com");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_duplicate_user_email_is_conflict() {
    let app = app();
    let payload = json!({"name": "User", "email": "dup@ex.com", "password": "secret1"});

    let (status, _) = send(&app, Method::POST, "/api/users", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/api/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["message"], "A user with this email already exists.");
}

#[tokio::test]
async fn test_roles_do_not_share_records() {
    let app = app();
    let payload = json!({"name": "Same", "email": "same@ex.com", "password": "secret1"});

    let (status, _) = send(&app, Method::POST, "/api/administrators", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(&app, Method::POST, "/api/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_short_password_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"name": "User", "email": "u@ex.com", "password": "12345"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["error"]["message"],
        "Password must be at least 6 characters."
    );
}

#[tokio::test]
async fn test_authenticate_outcomes() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({"name": "X", "email": "x@ex.com", "password": "secret1"})),
    )
    .await;

    let (status, user) = send(
        &app,
        Method::POST,
        "/api/users/authenticate",
        Some(json!({"email": "X@EX.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["email"], "x@ex.com");

    let (wrong_status, wrong) = send(
        &app,
        Method::POST,
        "/api/users/authenticate",
        Some(json!({"email": "x@ex.com", "password": "wrong"})),
    )
    .await;
    let (missing_status, missing) = send(
        &app,
        Method::POST,
        "/api/users/authenticate",
        Some(json!({"email": "missing@ex.com", "password": "anything"})),
    )
    .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong, missing);
}

#[tokio::test]
async fn test_route_and_body_id_must_match() {
    let app = app();
    let (_, created) = send(
        &app,
        Method::POST,
        "/api/safe-houses",
        Some(json!({"postalCode": "01310-100", "number": "42"})),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/api/safe-houses/{}", id),
        Some(json!({
            "id": uuid::Uuid::new_v4(),
            "postalCode": "01310-100",
            "number": "43"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Route id does not match body id.");
}

#[tokio::test]
async fn test_safe_house_lifecycle() {
    let app = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/safe-houses",
        Some(json!({"postalCode": " 01310-100 ", "number": "42", "complement": "Block B"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["postalCode"], "01310-100");
    assert_eq!(created["complement"], "Block B");

    let uri = format!("/api/safe-houses/{}", created["id"].as_str().unwrap());

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({"postalCode": "01310-100", "number": "43"})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(fetched["number"], "43");
    assert_eq!(fetched["complement"], "");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "Safe house not found.");
}

#[tokio::test]
async fn test_blank_safe_house_number_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/safe-houses",
        Some(json!({"postalCode": "01310-100", "number": "  "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Number is required.");
}

#[tokio::test]
async fn test_predict_severity() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/alerts/predict",
        Some(json!({"feature1": 1.0, "feature2": 1.0, "feature3": 1.0})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["severity"].as_f64(), Some(6.5));
}

#[tokio::test]
async fn test_predict_rejects_missing_feature() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/alerts/predict",
        Some(json!({"feature1": 1.0, "feature2": 1.0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = app();
    let uri = format!("/api/users/{}", uuid::Uuid::new_v4());

    let (status, body) = send(&app, Method::GET, &uri, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "User not found.");
}

#[tokio::test]
async fn test_malformed_route_id_uses_error_envelope() {
    let app = app();

    for uri in ["/api/administrators/42", "/api/users/nope", "/api/safe-houses/1-2-3"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["error"]["code"], "BAD_REQUEST");
        assert_eq!(body["error"]["message"], "Route id must be a valid UUID.");
    }
}

#[tokio::test]
async fn test_authenticate_is_limited_without_redis() {
    let app = app();
    let credentials = json!({"email": "x@ex.com", "password": "secret1"});

    for _ in 0..10 {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/users/authenticate",
            Some(credentials.clone()),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/users/authenticate",
        Some(credentials),
    )
    .await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);

    // Other routes keep their own, larger window
    let (status, _) = send(&app, Method::GET, "/api/users", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_rate_limit_headers_are_reported() {
    let response = app()
        .oneshot(Request::get("/api/safe-houses").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["X-RateLimit-Limit"], "100");
    assert_eq!(response.headers()["X-RateLimit-Remaining"], "99");
}

#[tokio::test]
async fn test_counter_failure_fails_closed() {
    let mut counters = MockRateLimitStore::new();
    counters
        .expect_hit()
        .returning(|_, _, _| Err(AppError::internal("Cache error: connection refused")));

    let app = create_router(state().with_rate_limiter(Arc::new(counters)));
    let response = app
        .oneshot(Request::get("/api/users").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.headers()["Retry-After"], "60");
}

#[tokio::test]
async fn test_limiter_keys_by_forwarded_client() {
    let mut counters = MockRateLimitStore::new();
    counters
        .expect_hit()
        .withf(|identifier, max, window| {
            identifier == "general:203.0.113.7" && *max == 100 && *window == 60
        })
        .times(1)
        .returning(|_, _, _| Ok((1, true)));

    let app = create_router(state().with_rate_limiter(Arc::new(counters)));
    let response = app
        .oneshot(
            Request::get("/api/safe-houses")
                .header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_long_safe_house_fields_are_accepted() {
    let app = app();
    let postal_code = "0".repeat(21);
    let complement = "c".repeat(500);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/safe-houses",
        Some(json!({"postalCode": postal_code, "number": "42", "complement": complement})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["postalCode"], postal_code);
    assert_eq!(body["complement"].as_str().map(str::len), Some(500));
}
