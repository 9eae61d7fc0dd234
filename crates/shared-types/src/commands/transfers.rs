//! Transfers between accounts and withdrawals off the network.

use serde::{Deserialize, Serialize};

/// Move funds from one of the party's accounts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transfer {
    /// [`crate::AccountType`]
    pub from_account_type: i32,
    /// Destination party key, or 64 zeros for global reward pools.
    pub to: String,
    /// [`crate::AccountType`]
    pub to_account_type: i32,
    pub asset: String,
    pub amount: String,
    pub reference: String,
    pub kind: Option<TransferKind>,
}

/// Whether a transfer happens once or every epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferKind {
    OneOff(OneOffTransfer),
    Recurring(RecurringTransfer),
}

/// A single transfer, optionally delayed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OneOffTransfer {
    /// Unix nanoseconds; `0` delivers immediately.
    pub deliver_on: i64,
}

/// A transfer repeated each epoch in `[start_epoch, end_epoch]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecurringTransfer {
    pub start_epoch: u64,
    pub end_epoch: Option<u64>,
    /// Decimal multiplier applied to the amount each epoch.
    pub factor: String,
    pub dispatch_strategy: Option<DispatchStrategy>,
}

/// How a reward pool funded by a recurring transfer is paid out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DispatchStrategy {
    pub asset_for_metric: String,
    /// [`crate::DispatchMetric`]
    pub metric: i32,
    pub markets: Vec<String>,
    /// [`crate::EntityScope`]
    pub entity_scope: i32,
    /// [`crate::IndividualScope`]
    pub individual_scope: i32,
    pub team_scope: Vec<String>,
    /// Decimal fraction of team members counted.
    pub n_top_performers: String,
    pub staking_requirement: String,
    pub notional_time_weighted_average_position_requirement: String,
    pub window_length: u64,
    pub lock_period: u64,
    /// [`crate::DistributionStrategy`]
    pub distribution_strategy: i32,
    pub rank_table: Vec<Rank>,
    pub cap_reward_fee_multiple: Option<String>,
}

/// One row of a rank distribution table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rank {
    pub start_rank: u32,
    pub share_ratio: u32,
}

/// Stop a recurring transfer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CancelTransfer {
    pub transfer_id: String,
}

/// Withdraw funds to an external chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WithdrawSubmission {
    pub amount: String,
    pub asset: String,
    pub ext: Option<Erc20WithdrawExt>,
}

/// ERC-20 specific withdrawal details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Erc20WithdrawExt {
    pub receiver_address: String,
}
