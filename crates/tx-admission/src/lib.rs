//! # Transaction Admission
//!
//! Decides whether a raw transaction is accepted, and if not, why.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): terminal error taxonomy and the admitted command
//! - **Ports Layer** (`ports/`): the admission API and the verifier/decoder it drives
//! - **Adapters Layer** (`adapters/`): algorithm registry and bincode codec
//! - **Service Layer** (`service.rs`): [`TransactionPipeline`]
//!
//! ## Stages
//!
//! | # | Stage | Failure |
//! |---|-------|---------|
//! | 1 | Structural presence | [`StructuralError`], every missing field at once |
//! | 2 | Signature verification | [`SignatureError`] |
//! | 3 | Input data decode | [`DecodeError`] |
//! | 4 | Semantic checks | [`command_checks::ErrorSet`], every violated rule at once |
//!
//! A failing stage stops the pipeline: nothing is verified against an
//! incomplete transaction and nothing is decoded from unverified bytes.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::codec::BincodeCodec;
pub use adapters::signatures::{AlgorithmRegistry, SignatureAlgorithm, ED25519, SECP256K1};
pub use config::AdmissionConfig;
pub use domain::entities::{AdmittedCommand, Stage};
pub use domain::errors::{
    ConfigError, DecodeError, SignatureError, StructuralError, TransactionError, TransactionField,
};
pub use ports::inbound::TransactionAdmissionApi;
pub use ports::outbound::{CommandDecoder, SignatureVerifier};
pub use service::TransactionPipeline;
