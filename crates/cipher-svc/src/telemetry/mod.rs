//! Structured logging and optional OpenTelemetry span export.
//!
//! # Telemetry invariants
//!
//! - **No payload text, ciphertext, or key material** may appear in any span
//!   attribute or log field. Cipher failures log only the error code and sizes.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`).

pub mod init;

pub use init::{init_telemetry, shutdown};
