//! Axum middleware settings applied to the router.
//!
//! Includes request tracing, timeout enforcement, body size limits, and
//! response compression.

/// Largest accepted request body. Valid bodies are well under 1 KiB.
pub const MAX_BODY_BYTES: usize = 16 * 1024;
