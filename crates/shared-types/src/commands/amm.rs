//! Automated market maker commands.

use serde::{Deserialize, Serialize};

/// Price range an AMM provides liquidity over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConcentratedLiquidityParameters {
    pub base: String,
    pub lower_bound: Option<String>,
    pub upper_bound: Option<String>,
    pub leverage_at_lower_bound: Option<String>,
    pub leverage_at_upper_bound: Option<String>,
}

/// Create an AMM for the party in a market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubmitAmm {
    pub market_id: String,
    pub commitment_amount: String,
    pub slippage_tolerance: String,
    pub concentrated_liquidity_parameters: Option<ConcentratedLiquidityParameters>,
    pub proposed_fee: String,
}

/// Change an existing AMM. Unset optional fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AmendAmm {
    pub market_id: String,
    pub commitment_amount: Option<String>,
    pub slippage_tolerance: String,
    pub concentrated_liquidity_parameters: Option<ConcentratedLiquidityParameters>,
    pub proposed_fee: Option<String>,
}

/// Remove the party's AMM from a market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CancelAmm {
    pub market_id: String,
    /// [`crate::AmmCancellationMethod`]
    pub method: i32,
}
