//! Configuration loading and validation for the cipher service.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any required variable is missing or invalid.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Filesystem path to the PEM-encoded RSA public key.
    #[serde(default)]
    pub rsa_public_key_path: Option<String>,

    /// Filesystem path to the PEM-encoded RSA private key.
    #[serde(default)]
    pub rsa_private_key_path: Option<String>,

    /// Inline PEM-encoded RSA public key. Takes precedence over the path.
    #[serde(default)]
    pub rsa_public_key: Option<String>,

    /// Inline PEM-encoded RSA private key. Takes precedence over the path.
    #[serde(default)]
    pub rsa_private_key: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// OTLP endpoint for span export. Export is disabled when unset.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,
}

fn default_port() -> u16 {
    3000
}
fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_key_source(
            &self.rsa_public_key,
            &self.rsa_public_key_path,
            "RSA_PUBLIC_KEY",
        )?;
        ensure_key_source(
            &self.rsa_private_key,
            &self.rsa_private_key_path,
            "RSA_PRIVATE_KEY",
        )?;

        self.host
            .parse::<IpAddr>()
            .with_context(|| format!("HOST must be an IP address, got {:?}", self.host))?;

        if self.request_timeout_secs == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECS must be > 0");
        }
        if let Some(endpoint) = &self.otel_exporter_otlp_endpoint {
            if endpoint.trim().is_empty() {
                anyhow::bail!("OTEL_EXPORTER_OTLP_ENDPOINT must not be blank when set");
            }
        }
        Ok(())
    }

    /// Socket address the server should bind to.
    ///
    /// # Errors
    ///
    /// Returns an error if `host` is not an IP address (already rejected by
    /// [`Config::from_env`]).
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().context("invalid HOST")?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Either the inline value or the path for one key must be set and non-blank.
fn ensure_key_source(inline: &Option<String>, path: &Option<String>, name: &str) -> Result<()> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    if !present(inline) && !present(path) {
        anyhow::bail!("{name} or {name}_PATH is required and must not be empty");
    }
    Ok(())
}
