//! # Property-Keyed Errors
//!
//! [`ErrorSet`] is the accumulator every check writes into. Entries are
//! `(PropertyPath, Cause)` pairs kept in the order the rules fired.
//!
//! Rendering is `"<path> (<cause>)"` joined with `", "`; clients match on
//! this text, so it must stay byte-stable.

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

// =============================================================================
// PROPERTY PATH
// =============================================================================

/// Dotted address of a field inside a command, e.g.
/// `create_vault.redemption_dates.2.max_fraction`.
///
/// Only used as an error key; it is never resolved back into the message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyPath(String);

impl PropertyPath {
    /// Wrap a path string.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `self.field`
    pub fn child(&self, field: &str) -> Self {
        Self(format!("{}.{}", self.0, field))
    }

    /// `self.index`, addressing one element of a repeated field.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}.{}", self.0, index))
    }

    /// `prefix.self`; an empty prefix leaves the path unchanged.
    pub fn prefixed(&self, prefix: &str) -> Self {
        if prefix.is_empty() {
            return self.clone();
        }
        Self(format!("{}.{}", prefix, self.0))
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for PropertyPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&PropertyPath> for PropertyPath {
    fn from(path: &PropertyPath) -> Self {
        path.clone()
    }
}

impl PartialEq<str> for PropertyPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PropertyPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// CAUSE
// =============================================================================

/// Why a property was rejected. The `Display` text is the user-visible cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Cause {
    // ----- presence -----
    #[error("is required")]
    IsRequired,

    // ----- format -----
    #[error("is not a valid value")]
    IsNotValid,
    #[error("is not a valid number")]
    IsNotValidNumber,
    #[error("not a valid integer")]
    NotAValidInteger,
    #[error("not a valid float")]
    NotAValidFloat,
    #[error("should be a valid Vega ID")]
    ShouldBeAValidVegaId,
    #[error("should be a valid Vega public key")]
    ShouldBeAValidVegaPublicKey,
    #[error("should be hex encoded")]
    ShouldBeHexEncoded,
    #[error("is not a valid ethereum address")]
    IsNotValidEthereumAddress,
    #[error("is not a valid vault identifier")]
    IsNotValidVaultId,
    #[error("is not supported")]
    IsNotSupported,
    #[error("is unauthorised")]
    IsUnauthorised,
    #[error("is mismatching")]
    IsMismatching,

    // ----- range -----
    #[error("must be positive")]
    MustBePositive,
    #[error("must be positive or zero")]
    MustBePositiveOrZero,
    #[error("must be negative or zero")]
    MustBeNegativeOrZero,
    #[error("must be between 0 (excluded) and 1 (included)")]
    MustBeBetween01,
    #[error("must be greater than or equal to 1")]
    MustBeGte1,
    #[error("must be less than or equal to 1")]
    MustBeLte1,
    #[error("must be between 0 and 1")]
    MustBeWithinRange01,
    #[error("must be between -1 and 1")]
    MustBeWithinRange11,
    #[error("must be at most {0}")]
    MustBeAtMost(u64),
    #[error("must not exceed {0} characters")]
    MustNotExceedChars(usize),
    #[error("must be empty")]
    MustBeEmpty,
    #[error("must be greater than proposal_submission.terms.enactment_timestamp")]
    MustBeGreaterThanEnactmentTimestamp,

    // ----- no-op -----
    #[error("no updates provided")]
    NoUpdatesProvided,
    #[error("does not amend anything")]
    DoesNotAmendAnything,

    /// Rule-specific wording, mostly cross-field constraints.
    #[error("{0}")]
    Other(Cow<'static, str>),
}

impl From<&'static str> for Cause {
    fn from(message: &'static str) -> Self {
        Cause::Other(Cow::Borrowed(message))
    }
}

impl From<String> for Cause {
    fn from(message: String) -> Self {
        Cause::Other(Cow::Owned(message))
    }
}

// =============================================================================
// ERROR SET
// =============================================================================

/// Ordered, append-only collection of property errors for one validation call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    entries: Vec<(PropertyPath, Cause)>,
}

impl ErrorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error and keep checking.
    pub fn add(&mut self, path: impl Into<PropertyPath>, cause: impl Into<Cause>) {
        self.entries.push((path.into(), cause.into()));
    }

    /// Record an error that ends the current check.
    ///
    /// Consumes and returns the set so the caller stops with a single
    /// `return errs.add_final(..)`.
    #[must_use = "a final error ends the check: return the set"]
    pub fn add_final(mut self, path: impl Into<PropertyPath>, cause: impl Into<Cause>) -> Self {
        self.add(path, cause);
        self
    }

    /// Append every entry of `other`, in order.
    pub fn merge(&mut self, other: ErrorSet) {
        self.entries.extend(other.entries);
    }

    /// Append every entry of `other` with its path rewritten to `prefix.path`.
    pub fn merge_prefixed(&mut self, other: ErrorSet, prefix: &str) {
        self.entries.extend(
            other
                .entries
                .into_iter()
                .map(|(path, cause)| (path.prefixed(prefix), cause)),
        );
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when nothing was recorded for exactly `path`.
    pub fn is_empty_for(&self, path: &str) -> bool {
        !self.entries.iter().any(|(p, _)| p == path)
    }

    /// Causes recorded for exactly `path`, in order.
    pub fn get(&self, path: &str) -> Vec<&Cause> {
        self.entries
            .iter()
            .filter(|(p, _)| p == path)
            .map(|(_, cause)| cause)
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropertyPath, &Cause)> {
        self.entries.iter().map(|(path, cause)| (path, cause))
    }

    /// `Ok(())` when empty, otherwise the whole set as one error.
    pub fn into_result(self) -> Result<(), ErrorSet> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// `"<path> (<cause>)"` for every entry, joined with `", "`.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(path, cause)| format!("{} ({})", path, cause))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl std::error::Error for ErrorSet {}

impl IntoIterator for ErrorSet {
    type Item = (PropertyPath, Cause);
    type IntoIter = std::vec::IntoIter<(PropertyPath, Cause)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
