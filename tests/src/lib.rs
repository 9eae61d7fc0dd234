//! # Admission Test Suite
//!
//! End-to-end tests over the public API of `tx-admission`.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Wallet and pipeline helpers
//! ├── integration/      # Accepted and rejected flows
//! └── exploits/         # Tampering and malformed input
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p admission-tests
//! cargo test -p admission-tests exploits::
//! cargo bench -p admission-tests
//! ```

pub mod exploits;
pub mod fixtures;
pub mod integration;
