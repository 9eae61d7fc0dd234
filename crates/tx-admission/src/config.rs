//! # Admission Configuration

use crate::adapters::signatures::{ED25519, SECP256K1};
use serde::{Deserialize, Serialize};

/// Settings fixed for the lifetime of a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionConfig {
    /// Network identifier bound into every signed payload.
    pub chain_id: String,

    /// Registry identifiers of the accepted signature algorithms.
    pub signature_algorithms: Vec<String>,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            chain_id: String::new(),
            signature_algorithms: vec![ED25519.to_string(), SECP256K1.to_string()],
        }
    }
}

impl AdmissionConfig {
    /// Default algorithms for the given network.
    pub fn for_chain(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            ..Self::default()
        }
    }
}
