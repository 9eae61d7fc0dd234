//! # Outbound Ports (Driven Ports / SPI)
//!
//! Capabilities the pipeline consumes without knowing how they work.

use crate::domain::errors::{DecodeError, SignatureError};
use shared_types::{InputData, Transaction};

/// Resolves an algorithm by name and verifies a signature with it.
pub trait SignatureVerifier: Send + Sync {
    /// Verify `signature` over `message` for `public_key`.
    ///
    /// # Errors
    /// * `SignatureError::UnknownAlgorithm` - `algorithm` is not enabled
    /// * `SignatureError::Malformed` - key or signature cannot be parsed
    /// * `SignatureError::Invalid` - the signature does not match
    fn verify(
        &self,
        algorithm: &str,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), SignatureError>;
}

/// Turns wire bytes into envelopes.
pub trait CommandDecoder: Send + Sync {
    /// Decode a whole transaction envelope.
    fn decode_transaction(&self, bytes: &[u8]) -> Result<Transaction, DecodeError>;

    /// Decode signed input data into nonce and command.
    fn decode_input_data(&self, bytes: &[u8]) -> Result<InputData, DecodeError>;
}
