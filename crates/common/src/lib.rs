//! Wire types, error codes, and errors shared across `rsa-cipher-svc` crates.

pub mod error;
pub mod protocol;

pub use error::{ErrorCode, ServiceError};
