//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Invalid key length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Invalid signature length
    #[error("invalid signature length: expected {expected}, got {actual}")]
    InvalidSignatureLength {
        /// Expected signature length in bytes
        expected: usize,
        /// Actual signature length in bytes
        actual: usize,
    },

    /// Bytes of the right length that do not encode a curve point
    #[error("invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("invalid private key")]
    InvalidPrivateKey,

    /// Bytes of the right length that do not encode a signature
    #[error("invalid signature encoding")]
    InvalidSignature,

    /// Well-formed signature that does not match key and message
    #[error("signature verification failed")]
    SignatureVerificationFailed,
}
