//! # Ports Layer
//!
//! - **Inbound (Driving)**: the admission API callers use
//! - **Outbound (Driven)**: signature verification and decoding it relies on

pub mod inbound;
pub mod outbound;
