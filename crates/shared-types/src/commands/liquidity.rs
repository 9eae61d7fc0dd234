//! Liquidity provision commitments.

use serde::{Deserialize, Serialize};

/// Commit liquidity to a market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidityProvisionSubmission {
    pub market_id: String,
    pub commitment_amount: String,
    pub fee: String,
    pub reference: String,
}

/// Change an existing commitment. Empty fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidityProvisionAmendment {
    pub market_id: String,
    pub commitment_amount: String,
    pub fee: String,
    pub reference: String,
}

/// Withdraw a commitment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidityProvisionCancellation {
    pub market_id: String,
}
