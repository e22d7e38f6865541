//! [`KeyPair`]: the RSA public/private key pair held for the process lifetime.

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use thiserror::Error;

/// Required modulus size. The 190-byte plaintext ceiling is derived from it.
pub const KEY_BITS: usize = 2048;

/// Errors produced while parsing or checking key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Neither SPKI nor PKCS#1 PEM could be parsed.
    #[error("invalid RSA public key PEM")]
    InvalidPublicKey,

    /// Neither PKCS#8 nor PKCS#1 PEM could be parsed, or the key failed validation.
    #[error("invalid RSA private key PEM")]
    InvalidPrivateKey,

    /// The modulus is not [`KEY_BITS`] bits.
    #[error("unsupported RSA key size: expected {KEY_BITS} bits, got {0}")]
    UnsupportedKeySize(usize),

    /// The public key was not derived from the private key.
    #[error("public key does not match private key")]
    Mismatch,
}

/// A matching RSA-2048 key pair.
///
/// Immutable after construction; share it by moving it into the cipher.
#[derive(Clone)]
pub struct KeyPair {
    public: RsaPublicKey,
    private: RsaPrivateKey,
}

impl KeyPair {
    /// Parse and check a key pair from PEM text.
    ///
    /// The public key may be SPKI (`BEGIN PUBLIC KEY`) or PKCS#1
    /// (`BEGIN RSA PUBLIC KEY`); the private key may be PKCS#8
    /// (`BEGIN PRIVATE KEY`) or PKCS#1 (`BEGIN RSA PRIVATE KEY`).
    ///
    /// # Errors
    ///
    /// Returns a [`KeyError`] if either key fails to parse, if the modulus is
    /// not [`KEY_BITS`] bits, or if the keys do not belong together.
    pub fn from_pem(public_pem: &str, private_pem: &str) -> Result<Self, KeyError> {
        let public = parse_public(public_pem.trim())?;
        let private = parse_private(private_pem.trim())?;
        Self::from_keys(public, private)
    }

    /// Build a key pair from already-parsed keys, applying the same checks as
    /// [`KeyPair::from_pem`].
    pub fn from_keys(public: RsaPublicKey, private: RsaPrivateKey) -> Result<Self, KeyError> {
        private.validate().map_err(|_| KeyError::InvalidPrivateKey)?;

        let bits = public.n().bits();
        if bits != KEY_BITS {
            return Err(KeyError::UnsupportedKeySize(bits));
        }
        if RsaPublicKey::from(&private) != public {
            return Err(KeyError::Mismatch);
        }
        Ok(Self { public, private })
    }

    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.public.n().bits()
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material.
        f.debug_struct("KeyPair")
            .field("bits", &self.bits())
            .field("private", &"[REDACTED]")
            .finish()
    }
}

fn parse_public(pem: &str) -> Result<RsaPublicKey, KeyError> {
    RsaPublicKey::from_public_key_pem(pem)
        .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
        .map_err(|_| KeyError::InvalidPublicKey)
}

fn parse_private(pem: &str) -> Result<RsaPrivateKey, KeyError> {
    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|_| KeyError::InvalidPrivateKey)
}
