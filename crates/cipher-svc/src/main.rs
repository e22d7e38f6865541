//! `rsa-cipher-svc`: binary entry point.
//!
//! Startup sequence:
//! 1. Load and validate [`Config`] from environment variables.
//! 2. Initialise telemetry (JSON logs, optional OTLP export).
//! 3. Load the RSA key pair and build the [`Cipher`].
//! 4. Parse the bundled OpenAPI document.
//! 5. Build the Axum router and serve until Ctrl-C.

use anyhow::Result;
use tracing::info;

use cipher_svc::config::Config;
use cipher_svc::crypto::Cipher;
use cipher_svc::server::{router, state::AppState};
use cipher_svc::{docs, keys, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Configuration
    // -----------------------------------------------------------------------
    let cfg = Config::from_env().map_err(|e| {
        // Telemetry is not yet up; write to stderr directly.
        eprintln!("ERROR: configuration invalid: {e:#}");
        e
    })?;

    // -----------------------------------------------------------------------
    // 2. Telemetry
    // -----------------------------------------------------------------------
    telemetry::init_telemetry(cfg.otel_exporter_otlp_endpoint.as_deref(), &cfg.log_level)?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = cfg.port,
        "rsa-cipher-svc starting"
    );

    // -----------------------------------------------------------------------
    // 3. Key pair
    // -----------------------------------------------------------------------
    let cipher = Cipher::new(keys::load(&cfg).await?);

    // -----------------------------------------------------------------------
    // 4. API document
    // -----------------------------------------------------------------------
    let api_doc = docs::load()?;

    // -----------------------------------------------------------------------
    // 5. HTTP server
    // -----------------------------------------------------------------------
    let state = AppState::new(cipher, api_doc);
    let app = router::build(state, cfg.request_timeout());

    let addr = cfg.listen_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutting down");
    telemetry::shutdown();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C; running until killed");
        std::future::pending::<()>().await;
    }
}
