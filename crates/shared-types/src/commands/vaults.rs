//! Managed vaults.

use serde::{Deserialize, Serialize};

/// Display information for a vault.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VaultMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub image_url: String,
}

/// A window in which depositors may redeem.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RedemptionDate {
    /// Unix seconds.
    pub redemption_date: i64,
    /// [`crate::RedemptionType`]
    pub redemption_type: i32,
    /// Decimal in `(0, 1]`.
    pub max_fraction: String,
}

/// Create a vault owned by the submitting party.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateVault {
    pub asset: String,
    pub metadata: Option<VaultMetadata>,
    pub fee_period: String,
    pub management_fee_factor: String,
    pub performance_fee_factor: String,
    pub cut_off_period_length: i64,
    pub redemption_dates: Vec<RedemptionDate>,
}

/// Replace the configuration of an existing vault.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateVault {
    pub vault_id: String,
    pub metadata: Option<VaultMetadata>,
    pub fee_period: String,
    pub management_fee_factor: String,
    pub performance_fee_factor: String,
    pub cut_off_period_length: i64,
    pub redemption_dates: Vec<RedemptionDate>,
}

/// Move funds into a vault.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DepositToVault {
    pub vault_id: String,
    pub amount: String,
}

/// Request funds back from a vault.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WithdrawFromVault {
    pub vault_id: String,
    pub amount: String,
}

/// Hand a vault over to another party.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeVaultOwnership {
    pub vault_id: String,
    pub new_owner: String,
}
