//! # Adversarial Submissions
//!
//! Transactions crafted to slip past admission: replays, tampering,
//! mislabelled algorithms and malformed bytes.

pub mod tampering;
