//! # Shared Crypto - Transaction Signature Primitives
//!
//! The signature schemes a transaction sender may declare.
//!
//! ## Components
//!
//! | Module | Algorithm | Wire identifier |
//! |--------|-----------|-----------------|
//! | `signatures` | Ed25519 | `vega/ed25519` |
//! | `ecdsa` | secp256k1 | `ecdsa/secp256k1` |
//!
//! Keys and signatures arrive as untrusted byte slices inside a transaction
//! envelope, so every constructor validates length and encoding before any
//! curve arithmetic runs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod signatures;

// Re-exports
pub use ecdsa::{Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
pub use errors::CryptoError;
pub use signatures::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
