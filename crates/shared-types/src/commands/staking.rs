//! Stake delegation to validators.

use serde::{Deserialize, Serialize};

/// Delegate stake to a validator node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DelegateSubmission {
    pub node_id: String,
    pub amount: String,
}

/// Remove delegated stake from a validator node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UndelegateSubmission {
    pub node_id: String,
    /// Empty means all of it.
    pub amount: String,
    /// [`crate::UndelegateMethod`]
    pub method: i32,
}
