//! Axum request handlers for all service endpoints.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{
    DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, ErrorResponse,
    HealthResponse,
};
use common::{ErrorCode, ServiceError};
use tracing::warn;

use super::state::AppState;

/// `GET /`: plain-text greeting.
pub async fn root() -> &'static str {
    "Hello from the RSA encryption service"
}

/// `POST /get-encrypt-data`: encrypt a payload into two ciphertext parts.
///
/// Always answers `200 OK` once the body parses; cipher failures are reported
/// in the outcome's `error_code`.
pub async fn encrypt(
    State(state): State<AppState>,
    body: Result<Json<EncryptRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection),
    };

    let outcome = EncryptResponse::from(state.cipher.encode_data(&req.payload));
    if outcome.error_code == Some(ErrorCode::EncryptionFailed) {
        warn!(payload_bytes = req.payload.len(), "encryption failed");
    }
    (StatusCode::OK, Json(outcome)).into_response()
}

/// `POST /get-decrypt-data`: recover a payload from its two ciphertext parts.
pub async fn decrypt(
    State(state): State<AppState>,
    body: Result<Json<DecryptRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match body {
        Ok(b) => b,
        Err(rejection) => return rejected(rejection),
    };

    let outcome = DecryptResponse::from(state.cipher.decode_data(&req.data1, &req.data2));
    (StatusCode::OK, Json(outcome)).into_response()
}

/// `GET /health`: liveness check.
///
/// Keys are loaded before the listener binds, so a responding server is healthy.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        key_bits: state.cipher.key_bits(),
    })
}

/// `GET /api-docs/openapi.json`: the service's OpenAPI document.
pub async fn openapi(State(state): State<AppState>) -> Response {
    Json(&*state.api_doc).into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> Response {
    error_response(&ServiceError::NotFound(
        "the requested resource does not exist".into(),
    ))
}

/// Render a body that failed to parse, keeping the rejection's status class:
/// 413 over the body limit, 415 without a JSON content type, 400 otherwise.
fn rejected(rejection: JsonRejection) -> Response {
    let message = rejection.body_text();
    let err = match rejection.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ServiceError::PayloadTooLarge(message),
        StatusCode::UNSUPPORTED_MEDIA_TYPE => ServiceError::UnsupportedMediaType(message),
        _ => ServiceError::BadRequest(message),
    };
    error_response(&err)
}

fn error_response(err: &ServiceError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(err))).into_response()
}
