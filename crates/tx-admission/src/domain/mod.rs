//! # Domain Layer
//!
//! What an admission produces: an admitted command or a terminal error.

pub mod entities;
pub mod errors;
