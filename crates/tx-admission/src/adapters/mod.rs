//! # Adapters Module
//!
//! Concrete implementations of the outbound ports.

pub mod codec;
pub mod signatures;
