//! The service's bundled OpenAPI document.
//!
//! The YAML source lives in `api/openapi.yaml` and is compiled into the binary.
//! It is parsed once at startup so a broken document fails fast instead of on
//! the first request for it.

use anyhow::{Context, Result};
use openapiv3::OpenAPI;

const OPENAPI_YAML: &str = include_str!("../api/openapi.yaml");

/// Parse the bundled OpenAPI document.
///
/// # Errors
///
/// Returns an error if the bundled document is not a valid OpenAPI 3.0 file.
pub fn load() -> Result<OpenAPI> {
    parse(OPENAPI_YAML).context("bundled OpenAPI document is invalid")
}

/// Parse an OpenAPI document as YAML, falling back to JSON.
fn parse(text: &str) -> Result<OpenAPI> {
    match serde_yaml::from_str(text) {
        Ok(api) => Ok(api),
        Err(yaml_err) => serde_json::from_str(text)
            .with_context(|| format!("not valid YAML ({yaml_err}) or JSON")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_document_parses() {
        let api = load().unwrap();
        assert_eq!(api.info.title, "RSA Encryption API");
        assert_eq!(api.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn documents_every_route() {
        let api = load().unwrap();
        for path in ["/", "/health", "/get-encrypt-data", "/get-decrypt-data"] {
            assert!(api.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn documents_wire_schemas() {
        let api = load().unwrap();
        let schemas = &api.components.unwrap().schemas;
        for name in ["EncryptRequest", "EncryptResponse", "DecryptRequest", "DecryptResponse"] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }

    #[test]
    fn accepts_json_documents() {
        let json = r#"{"openapi":"3.0.3","info":{"title":"t","version":"1"},"paths":{}}"#;
        assert_eq!(parse(json).unwrap().info.title, "t");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse("::: not openapi :::").is_err());
    }
}
