//! Common error types shared across crates.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable failure codes carried in the `error_code` field of an
/// encode/decode outcome.
///
/// The serialised form is the SCREAMING_SNAKE_CASE name, e.g.
/// `"PAYLOAD_TOO_LONG"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Encode: payload missing or empty.
    InvalidPayload,
    /// Encode: payload exceeds the plaintext ceiling.
    PayloadTooLong,
    /// Encode: any other failure during the cryptographic transform.
    EncryptionFailed,
    /// Decode: either ciphertext part missing or empty.
    InvalidData,
    /// Decode: malformed input or cryptographic/decoding failure.
    DecryptionFailed,
}

impl ErrorCode {
    /// Returns the wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidPayload => "INVALID_PAYLOAD",
            ErrorCode::PayloadTooLong => "PAYLOAD_TOO_LONG",
            ErrorCode::EncryptionFailed => "ENCRYPTION_FAILED",
            ErrorCode::InvalidData => "INVALID_DATA",
            ErrorCode::DecryptionFailed => "DECRYPTION_FAILED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP-level service error.
///
/// These never describe a cipher outcome; they cover requests that could not be
/// handed to the cipher at all. Variants map to HTTP status codes:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::PayloadTooLarge`] → 413
/// - [`ServiceError::UnsupportedMediaType`] → 415
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request body was not valid JSON or did not match the expected shape.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// No route matches the request.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request body exceeded the size limit.
    #[error("payload too large: {0}")]
    PayloadTooLarge(String),

    /// The request did not declare a JSON content type.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::PayloadTooLarge(_) => 413,
            ServiceError::UnsupportedMediaType(_) => 415,
        }
    }

    /// Short machine-readable code used in [`crate::protocol::ErrorResponse`].
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::PayloadTooLarge(_) => "payload_too_large",
            ServiceError::UnsupportedMediaType(_) => "unsupported_media_type",
        }
    }
}
