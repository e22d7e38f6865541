//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use openapiv3::OpenAPI;

use crate::crypto::Cipher;

/// Application state shared across all request handlers.
///
/// Both fields are `Arc`-wrapped so that Axum can clone the state for each
/// request without copying key material or the API document.
#[derive(Clone)]
pub struct AppState {
    /// RSA cipher over the key pair loaded at startup.
    pub cipher: Arc<Cipher>,
    /// Parsed OpenAPI document served at `/api-docs/openapi.json`.
    pub api_doc: Arc<OpenAPI>,
}

impl AppState {
    pub fn new(cipher: Cipher, api_doc: OpenAPI) -> Self {
        Self {
            cipher: Arc::new(cipher),
            api_doc: Arc::new(api_doc),
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over the fixture key pair, suitable for tests.
    pub(crate) fn for_tests() -> Self {
        Self::new(
            Cipher::new(crate::keys::fixtures::key_pair()),
            crate::docs::load().unwrap(),
        )
    }
}
