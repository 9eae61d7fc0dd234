//! # Per-Command Checks
//!
//! One `check_*` function per command, grouped like the message types in
//! `shared_types::commands`. Every function accepts `Option<&T>` and answers
//! `None` with a single final `"<root> (is required)"`.

pub mod amm;
pub mod governance;
pub mod liquidity;
pub mod markets;
pub mod orders;
pub mod referral;
pub mod staking;
pub mod transfers;
pub mod validators;
pub mod vaults;

use crate::errors::{Cause, ErrorSet, PropertyPath};
use crate::ids::{is_ethereum_address, is_vega_id, is_vega_public_key};

/// Longest accepted free-text reference.
pub const REFERENCE_MAX_LEN: usize = 100;

// ===== SHARED FIELD RULES =====

/// Required 64-hex identifier.
pub(crate) fn require_vega_id(errs: &mut ErrorSet, path: impl Into<PropertyPath>, value: &str) {
    if value.is_empty() {
        errs.add(path, Cause::IsRequired);
    } else if !is_vega_id(value) {
        errs.add(path, Cause::ShouldBeAValidVegaId);
    }
}

/// Optional 64-hex identifier: only checked when present.
pub(crate) fn optional_vega_id(errs: &mut ErrorSet, path: impl Into<PropertyPath>, value: &str) {
    if !value.is_empty() && !is_vega_id(value) {
        errs.add(path, Cause::ShouldBeAValidVegaId);
    }
}

/// Required party key.
pub(crate) fn require_public_key(errs: &mut ErrorSet, path: impl Into<PropertyPath>, value: &str) {
    if value.is_empty() {
        errs.add(path, Cause::IsRequired);
    } else if !is_vega_public_key(value) {
        errs.add(path, Cause::ShouldBeAValidVegaPublicKey);
    }
}

/// Required `0x`-prefixed Ethereum address.
pub(crate) fn require_ethereum_address(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    value: &str,
) {
    if value.is_empty() {
        errs.add(path, Cause::IsRequired);
    } else if !is_ethereum_address(value) {
        errs.add(path, Cause::IsNotValidEthereumAddress);
    }
}

/// Free text bounded by `max` bytes.
pub(crate) fn check_max_len(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    value: &str,
    max: usize,
) {
    if value.len() > max {
        errs.add(path, Cause::MustNotExceedChars(max));
    }
}

/// Required enumeration: `0` is "is required", an unknown value is
/// "is not a valid value".
pub(crate) fn require_enum<E>(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    raw: i32,
) -> Option<E>
where
    E: TryFrom<i32>,
{
    if raw == 0 {
        errs.add(path, Cause::IsRequired);
        return None;
    }
    match E::try_from(raw) {
        Ok(value) => Some(value),
        Err(_) => {
            errs.add(path, Cause::IsNotValid);
            None
        }
    }
}

/// Optional enumeration: `0` means unset, an unknown value is invalid.
pub(crate) fn optional_enum<E>(
    errs: &mut ErrorSet,
    path: impl Into<PropertyPath>,
    raw: i32,
) -> Option<E>
where
    E: TryFrom<i32>,
{
    if raw == 0 {
        return None;
    }
    match E::try_from(raw) {
        Ok(value) => Some(value),
        Err(_) => {
            errs.add(path, Cause::IsNotValid);
            None
        }
    }
}
