//! RSA-OAEP encode/decode of short text payloads into split base64 ciphertext.
//!
//! **Padding:** OAEP with SHA-256 (digest and MGF1) on both sides. With a
//! 2048-bit modulus this caps the plaintext at 256 − 2·32 − 2 = 190 bytes.
//! Encryption draws fresh randomness per call, so the same payload never
//! encrypts to the same ciphertext twice.
//!
//! Failures are classified into [`CipherError`] and never escape as panics.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::protocol::{DecryptedData, EncryptedData};
use common::ErrorCode;
use rsa::rand_core::OsRng;
use rsa::Oaep;
use sha2::Sha256;
use thiserror::Error;
use tracing::debug;

use crate::keys::KeyPair;

/// Largest payload, in UTF-8 bytes, that fits one OAEP-SHA-256 block of a
/// 2048-bit key.
pub const MAX_PAYLOAD_BYTES: usize = 190;

/// The two contiguous halves of one base64 ciphertext string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CiphertextPair {
    /// First `ceil(n / 2)` characters.
    pub part1: String,
    /// Remaining `floor(n / 2)` characters.
    pub part2: String,
}

impl CiphertextPair {
    /// Split `encoded` at `ceil(len / 2)`.
    ///
    /// `encoded` must be ASCII (base64 always is), so every index is a char boundary.
    pub fn split(encoded: &str) -> Self {
        let mid = encoded.len().div_ceil(2);
        let (part1, part2) = encoded.split_at(mid);
        Self {
            part1: part1.to_owned(),
            part2: part2.to_owned(),
        }
    }

    /// Reassemble the original base64 string.
    pub fn joined(&self) -> String {
        let mut s = String::with_capacity(self.part1.len() + self.part2.len());
        s.push_str(&self.part1);
        s.push_str(&self.part2);
        s
    }
}

impl From<CiphertextPair> for EncryptedData {
    fn from(pair: CiphertextPair) -> Self {
        EncryptedData {
            data1: pair.part1,
            data2: pair.part2,
        }
    }
}

/// Classified cipher failures. Each variant maps to exactly one [`ErrorCode`].
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("payload is empty")]
    InvalidPayload,

    #[error("payload is {0} bytes (max {MAX_PAYLOAD_BYTES})")]
    PayloadTooLong(usize),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("ciphertext part is empty")]
    InvalidData,

    #[error("decryption failed: {0}")]
    DecryptionFailed(&'static str),
}

impl CipherError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CipherError::InvalidPayload => ErrorCode::InvalidPayload,
            CipherError::PayloadTooLong(_) => ErrorCode::PayloadTooLong,
            CipherError::EncryptionFailed(_) => ErrorCode::EncryptionFailed,
            CipherError::InvalidData => ErrorCode::InvalidData,
            CipherError::DecryptionFailed(_) => ErrorCode::DecryptionFailed,
        }
    }
}

impl From<CipherError> for ErrorCode {
    fn from(e: CipherError) -> Self {
        e.code()
    }
}

/// Stateless RSA cipher over an immutable [`KeyPair`].
///
/// `Send + Sync`; share it behind an `Arc` and call it from any number of
/// threads without locking.
#[derive(Debug, Clone)]
pub struct Cipher {
    keys: KeyPair,
}

impl Cipher {
    pub fn new(keys: KeyPair) -> Self {
        Self { keys }
    }

    /// Modulus size of the underlying key pair.
    pub fn key_bits(&self) -> usize {
        self.keys.bits()
    }

    /// Encrypt `payload` with the public key and split the base64 ciphertext.
    ///
    /// # Errors
    ///
    /// - [`CipherError::InvalidPayload`] if `payload` is empty.
    /// - [`CipherError::PayloadTooLong`] if it exceeds [`MAX_PAYLOAD_BYTES`].
    /// - [`CipherError::EncryptionFailed`] for any RSA-layer error.
    pub fn encode(&self, payload: &str) -> Result<CiphertextPair, CipherError> {
        if payload.is_empty() {
            return Err(CipherError::InvalidPayload);
        }
        if payload.len() > MAX_PAYLOAD_BYTES {
            return Err(CipherError::PayloadTooLong(payload.len()));
        }

        let ciphertext = self
            .keys
            .public_key()
            .encrypt(&mut OsRng, Oaep::new::<Sha256>(), payload.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        Ok(CiphertextPair::split(&STANDARD.encode(ciphertext)))
    }

    /// Join `part1 + part2`, base64-decode, decrypt with the private key and
    /// decode the plaintext as UTF-8.
    ///
    /// # Errors
    ///
    /// - [`CipherError::InvalidData`] if either part is empty.
    /// - [`CipherError::DecryptionFailed`] for malformed base64, a block of the
    ///   wrong size, an OAEP check failure, or non-UTF-8 plaintext.
    pub fn decode(&self, part1: &str, part2: &str) -> Result<String, CipherError> {
        if part1.is_empty() || part2.is_empty() {
            return Err(CipherError::InvalidData);
        }

        let mut joined = String::with_capacity(part1.len() + part2.len());
        joined.push_str(part1);
        joined.push_str(part2);

        let ciphertext = STANDARD
            .decode(joined.as_bytes())
            .map_err(|_| CipherError::DecryptionFailed("invalid base64"))?;

        let plaintext = self
            .keys
            .private_key()
            .decrypt_blinded(&mut OsRng, Oaep::new::<Sha256>(), &ciphertext)
            .map_err(|_| CipherError::DecryptionFailed("rsa decryption error"))?;

        String::from_utf8(plaintext).map_err(|_| CipherError::DecryptionFailed("invalid utf-8"))
    }

    /// [`Cipher::encode`] shaped for the wire, logging the failure class.
    pub fn encode_data(&self, payload: &str) -> Result<EncryptedData, CipherError> {
        self.encode(payload).map(EncryptedData::from).inspect_err(|e| {
            debug!(error_code = %e.code(), payload_bytes = payload.len(), "encode rejected");
        })
    }

    /// [`Cipher::decode`] shaped for the wire, logging the failure class.
    pub fn decode_data(&self, part1: &str, part2: &str) -> Result<DecryptedData, CipherError> {
        self.decode(part1, part2)
            .map(|payload| DecryptedData { payload })
            .inspect_err(|e| {
                debug!(
                    error_code = %e.code(),
                    reason = %e,
                    input_chars = part1.len() + part2.len(),
                    "decode rejected"
                );
            })
    }
}
