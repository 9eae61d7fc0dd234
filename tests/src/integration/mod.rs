//! # Integration Tests
//!
//! Signed transactions through every admission stage with real keys and
//! the production codec.

pub mod flows;
