//! End-to-end tests against the full router, including middleware.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use axum_test::TestServer;
use cipher_svc::server::{router, state::AppState};
use cipher_svc::{docs, Cipher, KeyPair};
use common::protocol::{DecryptResponse, EncryptResponse, ErrorResponse, HealthResponse};
use common::ErrorCode;
use serde_json::{json, Value};
use tokio::task::JoinSet;
use tower::ServiceExt;

const PUBLIC_PEM: &str = include_str!("fixtures/public.pem");
const PRIVATE_PEM: &str = include_str!("fixtures/private.pem");

fn app() -> Router {
    let keys = KeyPair::from_pem(PUBLIC_PEM, PRIVATE_PEM).unwrap();
    let state = AppState::new(Cipher::new(keys), docs::load().unwrap());
    router::build(state, Duration::from_secs(30))
}

fn server() -> TestServer {
    TestServer::new(app()).unwrap()
}

async fn encrypt(server: &TestServer, payload: &str) -> EncryptResponse {
    let resp = server
        .post("/get-encrypt-data")
        .json(&json!({ "payload": payload }))
        .await;
    resp.assert_status_ok();
    resp.json()
}

async fn decrypt(server: &TestServer, data1: &str, data2: &str) -> DecryptResponse {
    let resp = server
        .post("/get-decrypt-data")
        .json(&json!({ "data1": data1, "data2": data2 }))
        .await;
    resp.assert_status_ok();
    resp.json()
}

#[tokio::test]
async fn root_greets() {
    let resp = server().get("/").await;
    resp.assert_status_ok();
    assert!(resp.text().contains("RSA encryption service"));
}

#[tokio::test]
async fn health_is_ok() {
    let resp = server().get("/health").await;
    resp.assert_status_ok();
    let body: HealthResponse = resp.json();
    assert_eq!(body.status, "ok");
    assert_eq!(body.key_bits, 2048);
}

#[tokio::test]
async fn encrypt_then_decrypt() {
    let server = server();
    for payload in ["Test", "Hello World", "RSA Encryption Service", "日本語のテキスト"] {
        let enc = encrypt(&server, payload).await;
        assert!(enc.successful);
        assert!(enc.error_code.is_none());
        let data = enc.data.unwrap();

        let dec = decrypt(&server, &data.data1, &data.data2).await;
        assert!(dec.successful);
        assert!(dec.error_code.is_none());
        assert_eq!(dec.data.unwrap().payload, payload);
    }
}

#[tokio::test]
async fn payload_boundary() {
    let server = server();

    let ok = encrypt(&server, &"a".repeat(190)).await;
    assert!(ok.successful);

    let too_long = encrypt(&server, &"a".repeat(191)).await;
    assert!(!too_long.successful);
    assert_eq!(too_long.error_code, Some(ErrorCode::PayloadTooLong));
    assert!(too_long.data.is_none());
}

#[tokio::test]
async fn empty_payload() {
    let enc = encrypt(&server(), "").await;
    assert!(!enc.successful);
    assert_eq!(enc.error_code, Some(ErrorCode::InvalidPayload));
    assert!(enc.data.is_none());
}

#[tokio::test]
async fn empty_parts() {
    let server = server();
    for (a, b) in [("", "some data"), ("some data", "")] {
        let dec = decrypt(&server, a, b).await;
        assert!(!dec.successful);
        assert_eq!(dec.error_code, Some(ErrorCode::InvalidData));
        assert!(dec.data.is_none());
    }
}

#[tokio::test]
async fn corrupted_parts() {
    let dec = decrypt(&server(), "corrupted", "data").await;
    assert!(!dec.successful);
    assert_eq!(dec.error_code, Some(ErrorCode::DecryptionFailed));
    assert!(dec.data.is_none());
}

#[tokio::test]
async fn distinct_payloads_encrypt_differently() {
    let server = server();
    let a = encrypt(&server, "Test 1").await.data.unwrap();
    let b = encrypt(&server, "Test 2").await.data.unwrap();
    assert_ne!(a.data1, b.data1);
    assert_ne!(a.data2, b.data2);
}

#[tokio::test]
async fn wire_format_is_exact() {
    let resp = server()
        .post("/get-encrypt-data")
        .json(&json!({ "payload": "" }))
        .await;
    let body: Value = resp.json();
    assert_eq!(
        body,
        json!({ "successful": false, "error_code": "INVALID_PAYLOAD", "data": null })
    );
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    let server = server();

    let resp = server
        .post("/get-encrypt-data")
        .json(&json!({ "payload": 12 }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(resp.json::<ErrorResponse>().code, "bad_request");

    let resp = server
        .post("/get-decrypt-data")
        .json(&json!({ "data1": "only one part" }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let resp = server
        .post("/get-encrypt-data")
        .json(&json!({ "payload": "x", "admin": true }))
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_route_is_404() {
    let resp = server().get("/nope").await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(resp.json::<ErrorResponse>().code, "not_found");
}

#[tokio::test]
async fn serves_openapi_document() {
    let resp = server().get("/api-docs/openapi.json").await;
    resp.assert_status_ok();
    let doc: Value = resp.json();
    assert_eq!(doc["openapi"], "3.0.3");
    assert!(doc["paths"]["/get-encrypt-data"]["post"].is_object());
    assert!(doc["paths"]["/get-decrypt-data"]["post"].is_object());
}

#[tokio::test]
async fn concurrent_round_trips() {
    let app = app();
    let mut tasks = JoinSet::new();

    for i in 0..16 {
        let app = app.clone();
        tasks.spawn(async move {
            let payload = format!("concurrent payload {i}");
            let enc: EncryptResponse =
                call(app.clone(), "/get-encrypt-data", json!({ "payload": payload })).await;
            let data = enc.data.unwrap();
            let dec: DecryptResponse = call(
                app,
                "/get-decrypt-data",
                json!({ "data1": data.data1, "data2": data.data2 }),
            )
            .await;
            (payload, dec.data.unwrap().payload)
        });
    }

    while let Some(res) = tasks.join_next().await {
        let (sent, got) = res.unwrap();
        assert_eq!(sent, got);
    }
}

async fn call<T: serde::de::DeserializeOwned>(app: Router, uri: &str, body: Value) -> T {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), 200);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
