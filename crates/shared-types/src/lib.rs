//! # Shared Types Crate
//!
//! Wire types shared by the command checks and the admission pipeline.
//!
//! ## Design Principles
//!
//! - **Closed command set**: [`Command`] is an exhaustive sum type; a tag the
//!   node does not know survives decoding as [`Command::Unknown`] so it can be
//!   rejected with a proper error instead of a decode failure.
//! - **Raw enumerations**: protocol enums travel as `i32` and are interpreted
//!   with `TryFrom<i32>`, so out-of-range values reach the checks intact.
//! - **Optional sub-messages**: nested messages are `Option<T>`; absence is a
//!   validation outcome, never a panic.
//! - **Tagged unions on the wire**: commands and proposal changes travel as
//!   `{ tag, body }`, so an unrecognised tag decodes to an `Unknown` variant.

pub mod commands;
pub mod entities;
pub mod enums;
pub mod wire;

pub use commands::*;
pub use entities::*;
pub use enums::*;
