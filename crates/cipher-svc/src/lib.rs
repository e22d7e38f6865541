//! RSA cipher service: encrypts short text payloads into two base64 halves
//! and decrypts them back, over a small JSON HTTP API.

pub mod config;
pub mod crypto;
pub mod docs;
pub mod keys;
pub mod server;
pub mod telemetry;

pub use crypto::{Cipher, CipherError, CiphertextPair, MAX_PAYLOAD_BYTES};
pub use keys::{KeyError, KeyPair};
