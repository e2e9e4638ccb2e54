use super::*;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use serde_json::{Value, json};

const TOKEN: &str = "tok-1";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn record(id: &str, features: Value) -> Value {
    json!({
        "_id": id,
        "name": format!("Hospital {id}"),
        "createdAt": "2024-02-01T00:00:00.000Z",
        "features": features
    })
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["email"] == "root@mediqlo.test" && body["password"] == "secret" {
        (StatusCode::OK, Json(json!({ "token": TOKEN })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" })))
    }
}

async fn list(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "jwt expired" })));
    }
    (
        StatusCode::OK,
        Json(json!({ "data": { "hospitals": [
            record("a", json!({ "appointments": true })),
            record("b", json!({}))
        ] } })),
    )
}

async fn update(
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({})));
    }
    if id == "broken" {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": "db down" })));
    }
    (
        StatusCode::OK,
        Json(json!({ "data": { "hospital": record(&id, body["features"].clone()) } })),
    )
}

async fn spawn_backend() -> Backend {
    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/hospitals", get(list))
        .route("/api/hospitals/{id}/features", patch(update));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Backend::new(&format!("http://{addr}/")).expect("backend")
}

#[tokio::test]
async fn base_url_is_normalized() {
    let backend = Backend::new("http://localhost:5000///").expect("backend");
    assert_eq!(backend.base_url(), "http://localhost:5000");
}

#[tokio::test]
async fn login_returns_token_for_valid_credentials() {
    let backend = spawn_backend().await;
    let resp = backend.login("root@mediqlo.test", "secret").await.expect("login");
    assert_eq!(resp.token.as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn login_rejection_carries_backend_message() {
    let backend = spawn_backend().await;
    let err = backend.login("root@mediqlo.test", "wrong").await.unwrap_err();
    assert_eq!(err.backend_message(), Some("Invalid credentials"));
}

#[tokio::test]
async fn hospitals_decode_envelope() {
    let backend = spawn_backend().await;
    let hospitals = backend.hospitals(TOKEN).await.expect("list");
    assert_eq!(hospitals.len(), 2);
    assert!(hospitals[0].feature(FeatureKey::Appointments));
}

#[tokio::test]
async fn hospitals_with_bad_token_is_unauthorized() {
    let backend = spawn_backend().await;
    let err = backend.hospitals("stale").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn update_feature_sends_single_flag_and_returns_record() {
    let backend = spawn_backend().await;
    let hospital = backend
        .update_feature(TOKEN, "b", FeatureKey::Reporting, true)
        .await
        .expect("update");
    assert_eq!(hospital.id, "b");
    assert!(hospital.feature(FeatureKey::Reporting));
    let expected: tenants::FeatureFlags = [(FeatureKey::Reporting, true)].into_iter().collect();
    assert_eq!(hospital.features, expected);
}

#[tokio::test]
async fn update_feature_server_error_is_rejected() {
    let backend = spawn_backend().await;
    let err = backend
        .update_feature(TOKEN, "broken", FeatureKey::Billing, true)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Rejected { status: 500, message: Some("db down".to_owned()) }
    );
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let backend = Backend::new("http://127.0.0.1:1").expect("backend");
    let err = backend.hospitals(TOKEN).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
