//! RSA key material: loading PEM from configuration and holding the key pair.
//!
//! # Lifecycle
//!
//! 1. At startup, [`load`] reads the public and private key PEM, either inline
//!    from configuration or from the configured files.
//! 2. [`KeyPair::from_pem`] parses both keys and checks that they are a
//!    matching 2048-bit pair. Any failure aborts startup.
//! 3. The pair is moved into the cipher and never changes afterwards.
//!
//! # Security invariants
//!
//! - Key material is never logged or included in traces; only the modulus size is.

pub mod pair;

pub use pair::{KeyError, KeyPair, KEY_BITS};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;

/// Load the key pair named by `cfg`.
///
/// Inline PEM values win over paths. Literal `\n` sequences in inline values
/// are expanded so keys can be passed through single-line environment variables.
///
/// # Errors
///
/// Returns an error if a key file cannot be read or if the key pair is invalid.
pub async fn load(cfg: &Config) -> Result<KeyPair> {
    let public_pem = read_pem(
        cfg.rsa_public_key.as_deref(),
        cfg.rsa_public_key_path.as_deref(),
        "public",
    )
    .await?;
    let private_pem = read_pem(
        cfg.rsa_private_key.as_deref(),
        cfg.rsa_private_key_path.as_deref(),
        "private",
    )
    .await?;

    let keys = KeyPair::from_pem(&public_pem, &private_pem).context("failed to load RSA key pair")?;
    info!(bits = keys.bits(), "RSA key pair loaded");
    Ok(keys)
}

async fn read_pem(inline: Option<&str>, path: Option<&str>, which: &str) -> Result<String> {
    if let Some(pem) = inline.filter(|s| !s.trim().is_empty()) {
        return Ok(pem.replace("\\n", "\n"));
    }
    let path = path
        .filter(|s| !s.trim().is_empty())
        .with_context(|| format!("no {which} key configured"))?;
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {which} key from {path}"))
}
