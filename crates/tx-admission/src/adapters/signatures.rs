//! # Signature Algorithm Registry
//!
//! Maps the algorithm name a transaction declares to the scheme that checks
//! it. Built once from [`AdmissionConfig`] and read-only afterwards, so a
//! single registry is shared by every concurrent admission.

use crate::config::AdmissionConfig;
use crate::domain::errors::{ConfigError, SignatureError};
use crate::ports::outbound::SignatureVerifier;
use shared_crypto::{
    CryptoError, Ed25519PublicKey, Ed25519Signature, Secp256k1PublicKey, Secp256k1Signature,
};
use std::collections::HashMap;

/// Registry identifier of Ed25519.
pub const ED25519: &str = "vega/ed25519";

/// Registry identifier of ECDSA over secp256k1.
pub const SECP256K1: &str = "ecdsa/secp256k1";

/// One signature scheme.
pub trait SignatureAlgorithm: Send + Sync {
    /// Registry identifier.
    fn name(&self) -> &'static str;

    /// Verify raw signature bytes over `message`.
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), CryptoError>;
}

struct Ed25519Algorithm;

impl SignatureAlgorithm for Ed25519Algorithm {
    fn name(&self) -> &'static str {
        ED25519
    }

    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let key = Ed25519PublicKey::from_slice(public_key)?;
        let sig = Ed25519Signature::from_slice(signature)?;
        key.verify(message, &sig)
    }
}

struct Secp256k1Algorithm;

impl SignatureAlgorithm for Secp256k1Algorithm {
    fn name(&self) -> &'static str {
        SECP256K1
    }

    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), CryptoError> {
        let key = Secp256k1PublicKey::from_slice(public_key)?;
        let sig = Secp256k1Signature::from_slice(signature)?;
        key.verify(message, &sig)
    }
}

fn builtin(name: &str) -> Option<Box<dyn SignatureAlgorithm>> {
    match name {
        ED25519 => Some(Box::new(Ed25519Algorithm)),
        SECP256K1 => Some(Box::new(Secp256k1Algorithm)),
        _ => None,
    }
}

/// Enabled signature algorithms, keyed by registry identifier.
pub struct AlgorithmRegistry {
    algorithms: HashMap<&'static str, Box<dyn SignatureAlgorithm>>,
}

impl AlgorithmRegistry {
    /// Enable exactly the algorithms listed in `config`.
    ///
    /// # Errors
    /// * `ConfigError::UnsupportedAlgorithm` - a name this node cannot verify
    /// * `ConfigError::NoAlgorithms` - the list is empty
    pub fn from_config(config: &AdmissionConfig) -> Result<Self, ConfigError> {
        let mut algorithms = HashMap::new();
        for name in &config.signature_algorithms {
            let algorithm = builtin(name)
                .ok_or_else(|| ConfigError::UnsupportedAlgorithm(name.clone()))?;
            algorithms.insert(algorithm.name(), algorithm);
        }

        if algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }
        Ok(Self { algorithms })
    }

    /// Enabled identifiers, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.algorithms.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        let algorithms: [Box<dyn SignatureAlgorithm>; 2] =
            [Box::new(Ed25519Algorithm), Box::new(Secp256k1Algorithm)];
        Self {
            algorithms: algorithms.into_iter().map(|a| (a.name(), a)).collect(),
        }
    }
}

impl SignatureVerifier for AlgorithmRegistry {
    fn verify(
        &self,
        algorithm: &str,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), SignatureError> {
        let scheme = self
            .algorithms
            .get(algorithm)
            .ok_or_else(|| SignatureError::UnknownAlgorithm(algorithm.to_string()))?;

        scheme
            .verify(public_key, message, signature)
            .map_err(|err| match err {
                CryptoError::SignatureVerificationFailed => SignatureError::Invalid,
                other => SignatureError::Malformed(other.to_string()),
            })
    }
}
