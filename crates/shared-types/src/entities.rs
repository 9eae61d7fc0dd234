//! # Transaction Envelope
//!
//! The outer, signed shell of every transaction and the input data it
//! carries once decoded.

use crate::commands::Command;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

/// A 32-byte transaction hash.
pub type Hash = [u8; 32];

/// Signature over the signing payload of a transaction.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Registry identifier of the algorithm, e.g. `vega/ed25519`.
    pub algo: String,
    /// Raw signature bytes.
    #[serde_as(as = "Bytes")]
    pub value: Vec<u8>,
    /// Algorithm version as declared by the signer.
    pub version: u32,
}

/// Identity of the transaction sender.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signer {
    /// Raw public key bytes; encoding depends on the signature algorithm.
    #[serde_as(as = "Bytes")]
    pub public_key: Vec<u8>,
}

impl Signer {
    /// Hex form of the key, i.e. the party id for Ed25519 keys.
    pub fn hex(&self) -> String {
        hex::encode(&self.public_key)
    }
}

/// A raw transaction as received from the network.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Encoded [`InputData`]; opaque until the signature is verified.
    #[serde_as(as = "Bytes")]
    pub input_data: Vec<u8>,
    /// Signature over [`signing_payload`].
    pub signature: Option<Signature>,
    /// Sender identity.
    pub from: Option<Signer>,
}

impl Transaction {
    /// Compute the transaction hash.
    ///
    /// Covers the input data and the signature bytes, so two submissions of
    /// the same command under different signatures hash differently.
    pub fn hash(&self) -> Hash {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(&self.input_data);
        if let Some(signature) = &self.signature {
            hasher.update(signature.algo.as_bytes());
            hasher.update(&signature.value);
        }
        hasher.finalize().into()
    }
}

/// Decoded content of [`Transaction::input_data`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputData {
    /// Sender-chosen nonce; must be nonzero.
    pub nonce: u64,
    /// The single command carried by the transaction.
    pub command: Option<Command>,
}

/// Separator between the chain id and the input data in the signed bytes.
pub const CHAIN_ID_DELIMITER: u8 = 0;

/// Bytes a sender signs: `chain_id || 0x00 || input_data`.
///
/// Binding the chain id stops a transaction signed for one network from
/// being replayed on another.
pub fn signing_payload(chain_id: &str, input_data: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(chain_id.len() + 1 + input_data.len());
    payload.extend_from_slice(chain_id.as_bytes());
    payload.push(CHAIN_ID_DELIMITER);
    payload.extend_from_slice(input_data);
    payload
}
