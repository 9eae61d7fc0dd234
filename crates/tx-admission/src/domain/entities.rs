//! # Admission Entities

use shared_types::{Command, Hash};
use std::fmt;

/// A transaction that passed every stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmittedCommand {
    /// Transaction hash, used to correlate log lines.
    pub tx_hash: Hash,
    /// Public key the signature was verified against.
    pub signer: Vec<u8>,
    /// Sender-chosen nonce.
    pub nonce: u64,
    /// The validated command.
    pub command: Command,
}

impl AdmittedCommand {
    /// Hex form of the transaction hash.
    pub fn tx_hash_hex(&self) -> String {
        hex::encode(self.tx_hash)
    }

    /// Hex form of the signer key, i.e. the party id for Ed25519 keys.
    pub fn party(&self) -> String {
        hex::encode(&self.signer)
    }
}

/// Pipeline stage, as reported in rejection logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Structural,
    Signature,
    Decode,
    Semantic,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Structural => "structural",
            Stage::Signature => "signature",
            Stage::Decode => "decode",
            Stage::Semantic => "semantic",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
