//! Request and response types exchanged over the public HTTP API.
//!
//! Every cipher response has the same envelope, [`Outcome`]:
//!
//! ```text
//! { "successful": bool, "error_code": string | null, "data": T | null }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

// ---------------------------------------------------------------------------
// Encrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /get-encrypt-data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptRequest {
    /// Text to encrypt (1–190 bytes of UTF-8).
    pub payload: String,
}

/// The two halves of one base64-encoded ciphertext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedData {
    /// Leading half; holds the extra character when the length is odd.
    pub data1: String,
    /// Trailing half.
    pub data2: String,
}

/// Response body for `POST /get-encrypt-data`.
pub type EncryptResponse = Outcome<EncryptedData>;

// ---------------------------------------------------------------------------
// Decrypt endpoint
// ---------------------------------------------------------------------------

/// Request body for `POST /get-decrypt-data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecryptRequest {
    /// First half of the ciphertext as returned by the encrypt endpoint.
    pub data1: String,
    /// Second half of the ciphertext as returned by the encrypt endpoint.
    pub data2: String,
}

/// Recovered plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptedData {
    pub payload: String,
}

/// Response body for `POST /get-decrypt-data`.
pub type DecryptResponse = Outcome<DecryptedData>;

// ---------------------------------------------------------------------------
// Outcome envelope
// ---------------------------------------------------------------------------

/// Success/failure envelope for cipher operations.
///
/// Construct only through [`Outcome::success`], [`Outcome::failure`] or the
/// `From<Result<..>>` conversion so that `successful`, `error_code` and `data`
/// never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub successful: bool,
    pub error_code: Option<ErrorCode>,
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    pub fn success(data: T) -> Self {
        Self {
            successful: true,
            error_code: None,
            data: Some(data),
        }
    }

    pub fn failure(code: ErrorCode) -> Self {
        Self {
            successful: false,
            error_code: Some(code),
            data: None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<ErrorCode>,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::success(data),
            Err(e) => Outcome::failure(e.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Error body returned for requests that never reached the cipher (malformed
/// JSON, unknown route).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"bad_request"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&crate::ServiceError> for ErrorResponse {
    fn from(e: &crate::ServiceError) -> Self {
        ErrorResponse::new(e.code(), e.to_string())
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status; always `"ok"` once the server is accepting requests.
    pub status: String,
    /// Modulus size of the loaded key pair.
    pub key_bits: usize,
}
