//! # Admission Errors
//!
//! Terminal failures of the first three stages, and the umbrella
//! [`TransactionError`] every entry point returns.

use command_checks::ErrorSet;
use std::fmt;
use thiserror::Error;

// =============================================================================
// STAGE 1: STRUCTURE
// =============================================================================

/// Top-level transaction field whose absence stops admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionField {
    InputData,
    Signature,
    From,
    PublicKey,
}

impl TransactionField {
    /// Path as reported to the submitter.
    pub const fn path(self) -> &'static str {
        match self {
            TransactionField::InputData => "tx.input_data",
            TransactionField::Signature => "tx.signature",
            TransactionField::From => "tx.from",
            TransactionField::PublicKey => "tx.from.public_key",
        }
    }
}

impl fmt::Display for TransactionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Every missing top-level field, in envelope order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", render_missing(.missing))]
pub struct StructuralError {
    pub missing: Vec<TransactionField>,
}

fn render_missing(missing: &[TransactionField]) -> String {
    missing
        .iter()
        .map(|field| format!("{field} is required"))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// STAGE 2: SIGNATURE
// =============================================================================

/// Signature verification failures. Never merged with semantic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The declared algorithm is not enabled on this node
    #[error("unknown signature algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Key or signature bytes the algorithm cannot even parse
    #[error("could not verify signature: {0}")]
    Malformed(String),

    /// Well-formed signature that does not match key and payload
    #[error("invalid signature")]
    Invalid,
}

// =============================================================================
// STAGE 3: DECODE
// =============================================================================

/// Bytes that are not a well-formed transaction or input data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("could not decode transaction: {0}")]
    Transaction(String),

    #[error("could not decode input data: {0}")]
    InputData(String),

    #[error("could not decode command {tag}: {reason}")]
    CommandBody { tag: u32, reason: String },
}

// =============================================================================
// UMBRELLA
// =============================================================================

/// Why a transaction was not admitted. Exactly one stage reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Semantic rule violations, all of them
    #[error(transparent)]
    Rejected(#[from] ErrorSet),
}

/// Invalid [`crate::AdmissionConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported signature algorithm in config: {0}")]
    UnsupportedAlgorithm(String),

    #[error("no signature algorithm enabled")]
    NoAlgorithms,
}
