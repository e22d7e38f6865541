//! RSA-OAEP text cipher.
//!
//! This module is intentionally free of HTTP dependencies. It provides the
//! encode/decode operations the handlers call.
//!
//! # Ciphertext format
//!
//! ```text
//! base64(RSA-OAEP-SHA256(payload)) = data1 ++ data2,  len(data1) = ceil(n / 2)
//! ```

pub mod cipher;

pub use cipher::{Cipher, CipherError, CiphertextPair, MAX_PAYLOAD_BYTES};
