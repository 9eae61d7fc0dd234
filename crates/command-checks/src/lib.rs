//! # Command Checks
//!
//! Stateless validation of every command a transaction may carry.
//!
//! ## Model
//!
//! Each check is a pure function `Option<&T> -> ErrorSet`. Errors are keyed
//! by a dotted [`PropertyPath`] rooted at the command's name
//! (`submit_amm.concentrated_liquidity_parameters.base`) and accumulate, so a
//! submitter sees every defect at once. Only conditions that make further
//! checks meaningless (an absent command or sub-message) stop early, via
//! [`ErrorSet::add_final`].
//!
//! Nested messages reuse their standalone check and fold the result in with
//! [`ErrorSet::merge_prefixed`].
//!
//! ## Entry points
//!
//! - [`check_input_data`]: nonce plus command, used by the admission pipeline.
//! - [`check_command`]: exhaustive dispatch over [`shared_types::Command`].
//! - `checks::*::check_*`: one function per command.

pub mod checks;
pub mod dispatch;
pub mod durations;
pub mod errors;
pub mod ids;
pub mod numbers;

pub use dispatch::{check_command, check_input_data};
pub use errors::{Cause, ErrorSet, PropertyPath};
