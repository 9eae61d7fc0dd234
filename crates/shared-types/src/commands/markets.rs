//! Market configuration carried by governance proposals.
//!
//! Risk model and monitoring factors are decimal strings rather than binary
//! floats; an empty factor is zero.

use serde::{Deserialize, Serialize};

// ===== PROPOSAL CHANGES =====

/// List a new derivative market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewMarket {
    pub changes: Option<NewMarketConfiguration>,
}

/// Change the configuration of a derivative market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateMarket {
    pub market_id: String,
    pub changes: Option<UpdateMarketConfiguration>,
}

/// List a new spot market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewSpotMarket {
    pub changes: Option<NewSpotMarketConfiguration>,
}

/// Change the configuration of a spot market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateSpotMarket {
    pub market_id: String,
    pub changes: Option<UpdateSpotMarketConfiguration>,
}

// ===== CONFIGURATIONS =====

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewMarketConfiguration {
    pub instrument: Option<InstrumentConfiguration>,
    /// Price decimal places; below 150.
    pub decimal_places: u64,
    /// Position decimal places; within `-6..=6`.
    pub position_decimal_places: i64,
    pub linear_slippage_factor: String,
    /// Market this one takes over from.
    pub successor: Option<SuccessorConfiguration>,
    pub liquidation_strategy: Option<LiquidationStrategy>,
    pub price_monitoring_parameters: Option<PriceMonitoringParameters>,
    pub liquidity_monitoring_parameters: Option<LiquidityMonitoringParameters>,
    pub risk_parameters: Option<RiskParameters>,
    pub liquidity_sla_parameters: Option<LiquiditySlaParameters>,
    pub liquidity_fee_settings: Option<LiquidityFeeSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateMarketConfiguration {
    pub instrument: Option<UpdateInstrumentConfiguration>,
    pub linear_slippage_factor: String,
    pub liquidation_strategy: Option<LiquidationStrategy>,
    pub price_monitoring_parameters: Option<PriceMonitoringParameters>,
    pub liquidity_monitoring_parameters: Option<LiquidityMonitoringParameters>,
    pub risk_parameters: Option<RiskParameters>,
    pub liquidity_sla_parameters: Option<LiquiditySlaParameters>,
    pub liquidity_fee_settings: Option<LiquidityFeeSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewSpotMarketConfiguration {
    /// Must hold a spot product.
    pub instrument: Option<InstrumentConfiguration>,
    pub decimal_places: u64,
    pub position_decimal_places: i64,
    pub price_monitoring_parameters: Option<PriceMonitoringParameters>,
    pub target_stake_parameters: Option<TargetStakeParameters>,
    pub risk_parameters: Option<RiskParameters>,
    pub sla_params: Option<LiquiditySlaParameters>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateSpotMarketConfiguration {
    pub price_monitoring_parameters: Option<PriceMonitoringParameters>,
    pub target_stake_parameters: Option<TargetStakeParameters>,
    pub risk_parameters: Option<RiskParameters>,
    pub sla_params: Option<LiquiditySlaParameters>,
}

/// Link from a successor market to its parent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuccessorConfiguration {
    pub parent_market_id: String,
    /// Share of the parent's insurance pool carried over, in `[0, 1]`.
    pub insurance_pool_fraction: String,
}

// ===== INSTRUMENTS =====

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InstrumentConfiguration {
    pub name: String,
    pub code: String,
    pub product: Option<InstrumentProduct>,
}

/// What a market trades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstrumentProduct {
    Future(FutureProduct),
    Perpetual(PerpetualProduct),
    Spot(SpotProduct),
}

/// Dated future settled in `settlement_asset`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FutureProduct {
    pub settlement_asset: String,
    pub quote_name: String,
}

/// Perpetual future with periodic funding payments.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerpetualProduct {
    pub settlement_asset: String,
    pub quote_name: String,
    pub margin_funding_factor: String,
    pub interest_rate: String,
    pub clamp_lower_bound: String,
    pub clamp_upper_bound: String,
    pub funding_rate_scaling_factor: Option<String>,
    pub funding_rate_lower_bound: Option<String>,
    pub funding_rate_upper_bound: Option<String>,
}

/// Spot pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpotProduct {
    pub base_asset: String,
    pub quote_asset: String,
    pub name: String,
}

/// Updatable instrument of a derivative market. The settlement asset is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateInstrumentConfiguration {
    pub code: String,
    pub name: String,
    pub product: Option<UpdateInstrumentProduct>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateInstrumentProduct {
    Future(UpdateFutureProduct),
    Perpetual(UpdatePerpetualProduct),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateFutureProduct {
    pub quote_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdatePerpetualProduct {
    pub quote_name: String,
    pub margin_funding_factor: String,
    pub interest_rate: String,
    pub clamp_lower_bound: String,
    pub clamp_upper_bound: String,
    pub funding_rate_scaling_factor: Option<String>,
    pub funding_rate_lower_bound: Option<String>,
    pub funding_rate_upper_bound: Option<String>,
}

// ===== RISK & MONITORING =====

/// Margin model of a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskParameters {
    Simple(SimpleModelParams),
    LogNormal(LogNormalRiskModel),
}

/// Fixed-move risk model, mostly used on test networks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SimpleModelParams {
    pub factor_long: String,
    pub factor_short: String,
    pub max_move_up: String,
    pub min_move_down: String,
    pub probability_of_trading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogNormalRiskModel {
    pub risk_aversion_parameter: String,
    pub tau: String,
    pub params: Option<LogNormalModelParams>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LogNormalModelParams {
    pub mu: String,
    pub r: String,
    pub sigma: String,
}

/// How distressed positions are unwound by the network.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidationStrategy {
    /// Seconds between disposals.
    pub disposal_time_step: i64,
    pub disposal_fraction: String,
    pub full_disposal_size: u64,
    pub max_fraction_consumed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceMonitoringParameters {
    pub triggers: Vec<PriceMonitoringTrigger>,
}

/// Price move that triggers an auction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceMonitoringTrigger {
    /// Seconds.
    pub horizon: i64,
    pub probability: String,
    /// Seconds.
    pub auction_extension: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidityMonitoringParameters {
    pub target_stake_parameters: Option<TargetStakeParameters>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TargetStakeParameters {
    /// Seconds.
    pub time_window: i64,
    pub scaling_factor: String,
}

/// Liquidity provider obligations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquiditySlaParameters {
    pub price_range: String,
    pub commitment_min_time_fraction: String,
    pub performance_hysteresis_epochs: u64,
    pub sla_competition_factor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LiquidityFeeSettings {
    /// [`crate::LiquidityFeeMethod`]
    pub method: i32,
    /// Fee for the constant method, in `[0, 1]`.
    pub fee_constant: Option<String>,
}
