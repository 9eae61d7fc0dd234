//! Trading commands: orders, stop orders, batches and margin mode.

use serde::{Deserialize, Serialize};

/// Place a new order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub market_id: String,
    /// Unsigned integer in market decimals; empty for market and pegged orders.
    pub price: String,
    pub size: u64,
    /// [`crate::Side`]
    pub side: i32,
    /// [`crate::TimeInForce`]
    pub time_in_force: i32,
    /// Unix nanoseconds; only meaningful for GTT orders.
    pub expires_at: i64,
    /// [`crate::OrderType`]
    pub order_type: i32,
    pub reference: String,
    pub pegged_order: Option<PeggedOrder>,
    pub post_only: bool,
    pub reduce_only: bool,
    pub iceberg_opts: Option<IcebergOpts>,
}

/// Peg an order to a reference price.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeggedOrder {
    /// [`crate::PeggedReference`]
    pub reference: i32,
    /// Unsigned offset from the reference price.
    pub offset: String,
}

/// Iceberg refresh parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IcebergOpts {
    pub peak_size: u64,
    pub minimum_visible_size: u64,
}

/// Cancel one order, all orders in a market, or all orders of the party.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderCancellation {
    pub order_id: String,
    pub market_id: String,
}

/// Amend a resting order. Unset optional fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderAmendment {
    pub order_id: String,
    pub market_id: String,
    pub price: Option<String>,
    pub size_delta: i64,
    pub size: Option<u64>,
    pub expires_at: Option<i64>,
    /// [`crate::TimeInForce`]; `0` leaves it unchanged.
    pub time_in_force: i32,
    pub pegged_offset: String,
    /// [`crate::PeggedReference`]; `0` leaves it unchanged.
    pub pegged_reference: i32,
}

/// Stop orders triggered when the price crosses a level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StopOrdersSubmission {
    pub rises_above: Option<StopOrderSetup>,
    pub falls_below: Option<StopOrderSetup>,
}

/// One direction of a stop order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StopOrderSetup {
    pub order_submission: Option<OrderSubmission>,
    pub expires_at: Option<i64>,
    /// [`crate::StopOrderExpiryStrategy`]
    pub expiry_strategy: Option<i32>,
    pub trigger: Option<StopOrderTrigger>,
}

/// Level at which a stop order fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopOrderTrigger {
    /// Absolute price.
    Price(String),
    /// Decimal fraction trailing the best price.
    TrailingPercentOffset(String),
}

/// Cancel one stop order, all in a market, or all of the party's.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StopOrdersCancellation {
    pub stop_order_id: Option<String>,
    pub market_id: Option<String>,
}

/// Switch a party between cross and isolated margin in one market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateMarginMode {
    pub market_id: String,
    /// [`crate::MarginMode`]
    pub mode: i32,
    /// Decimal; required for isolated margin only.
    pub margin_factor: Option<String>,
}

/// Several trading instructions executed atomically in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchMarketInstructions {
    pub cancellations: Vec<OrderCancellation>,
    pub amendments: Vec<OrderAmendment>,
    pub submissions: Vec<OrderSubmission>,
    pub stop_orders_cancellation: Vec<StopOrdersCancellation>,
    pub stop_orders_submission: Vec<StopOrdersSubmission>,
    pub update_margin_mode: Vec<UpdateMarginMode>,
}

impl BatchMarketInstructions {
    /// Total number of instructions across all lists.
    pub fn len(&self) -> usize {
        self.cancellations.len()
            + self.amendments.len()
            + self.submissions.len()
            + self.stop_orders_cancellation.len()
            + self.stop_orders_submission.len()
            + self.update_margin_mode.len()
    }

    /// True when the batch carries no instruction.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
