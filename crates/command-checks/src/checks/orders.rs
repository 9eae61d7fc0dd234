//! # Trading Checks
//!
//! Orders, amendments, cancellations, stop orders, margin mode and the
//! batch that bundles them.

use super::{check_max_len, optional_enum, optional_vega_id, require_enum, require_vega_id};
use super::REFERENCE_MAX_LEN;
use crate::errors::{Cause, ErrorSet};
use crate::numbers::{check_positive_decimal, check_positive_integer, parse_decimal, parse_integer};
use bigdecimal::BigDecimal;
use num::{BigInt, Signed, Zero};
use shared_types::{
    BatchMarketInstructions, MarginMode, OrderAmendment, OrderCancellation, OrderSubmission,
    OrderType, PeggedOrder, PeggedReference, Side, StopOrderExpiryStrategy, StopOrderSetup,
    StopOrderTrigger, StopOrdersCancellation, StopOrdersSubmission, TimeInForce,
    UpdateMarginMode,
};

// ===== ORDER SUBMISSION =====

pub fn check_order_submission(cmd: Option<&OrderSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("order_submission", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "order_submission.market_id", &cmd.market_id);

    let side = require_enum::<Side>(&mut errs, "order_submission.side", cmd.side);

    let order_type = require_enum::<OrderType>(&mut errs, "order_submission.type", cmd.order_type);
    if order_type == Some(OrderType::Network) {
        errs.add("order_submission.type", Cause::IsUnauthorised);
    }

    let tif = require_enum::<TimeInForce>(
        &mut errs,
        "order_submission.time_in_force",
        cmd.time_in_force,
    );

    if cmd.size == 0 {
        errs.add("order_submission.size", Cause::MustBePositive);
    }

    match tif {
        Some(TimeInForce::Gtt) if cmd.expires_at <= 0 => {
            errs.add("order_submission.expires_at", Cause::MustBePositive);
        }
        Some(TimeInForce::Gtt) => {}
        Some(_) if cmd.expires_at != 0 => {
            errs.add(
                "order_submission.expires_at",
                "is only available when the time in force is of type GTT",
            );
        }
        _ => {}
    }

    match order_type {
        Some(OrderType::Market) => {
            if !cmd.price.is_empty() {
                errs.add(
                    "order_submission.price",
                    "is unavailable when the order is of type MARKET",
                );
            }
            if tif.is_some_and(|t| t.is_persistent()) {
                errs.add(
                    "order_submission.time_in_force",
                    "is expected to be of type FOK or IOC when order is of type MARKET",
                );
            }
        }
        Some(OrderType::Limit) if cmd.pegged_order.is_none() => {
            if cmd.price.is_empty() {
                errs.add(
                    "order_submission.price",
                    "is required when the order is of type LIMIT",
                );
            } else {
                check_positive_integer(
                    &mut errs,
                    "order_submission.price",
                    &cmd.price,
                    Cause::NotAValidInteger,
                );
            }
        }
        _ => {}
    }

    if let Some(pegged) = &cmd.pegged_order {
        check_pegged_order(&mut errs, pegged, side, order_type, tif);
    }

    check_max_len(&mut errs, "order_submission.reference", &cmd.reference, REFERENCE_MAX_LEN);

    if cmd.post_only {
        if order_type == Some(OrderType::Market) {
            errs.add("order_submission.post_only", "only valid for limit orders");
        }
        if tif.is_some_and(|t| !t.is_persistent()) {
            errs.add("order_submission.post_only", "only valid for persistent orders");
        }
        if cmd.reduce_only {
            errs.add(
                "order_submission.post_only",
                "cannot be true at the same time as order_submission.reduce_only",
            );
        }
    }

    if cmd.reduce_only && tif.is_some_and(|t| t.is_persistent()) {
        errs.add(
            "order_submission.reduce_only",
            "should be true only for non-persistent orders",
        );
    }

    if let Some(iceberg) = &cmd.iceberg_opts {
        if order_type.is_some_and(|t| t != OrderType::Limit) {
            errs.add("order_submission.type", "iceberg order must be of type LIMIT");
        }
        if tif.is_some_and(|t| !t.is_persistent()) {
            errs.add(
                "order_submission.time_in_force",
                "iceberg order must be a persistent order",
            );
        }
        if cmd.reduce_only {
            errs.add("order_submission.reduce_only", "iceberg order must not be reduce-only");
        }
        if iceberg.peak_size == 0 {
            errs.add("order_submission.iceberg_opts.peak_size", Cause::MustBePositive);
        }
        if iceberg.minimum_visible_size == 0 {
            errs.add(
                "order_submission.iceberg_opts.minimum_visible_size",
                Cause::MustBePositive,
            );
        }
        if iceberg.minimum_visible_size > iceberg.peak_size {
            errs.add(
                "order_submission.iceberg_opts.minimum_visible_size",
                "must be <= iceberg_opts.peak_size",
            );
        }
        if iceberg.peak_size > cmd.size {
            errs.add("order_submission.iceberg_opts.peak_size", "must be <= size");
        }
    }

    errs
}

/// Offset sign depends on side and reference: a pegged buy never prices
/// above its reference, a pegged sell never below.
fn check_pegged_order(
    errs: &mut ErrorSet,
    pegged: &PeggedOrder,
    side: Option<Side>,
    order_type: Option<OrderType>,
    tif: Option<TimeInForce>,
) {
    if order_type.is_some_and(|t| t != OrderType::Limit) {
        errs.add(
            "order_submission.type",
            "is expected to be an order of type LIMIT when the order is pegged",
        );
    }

    if tif.is_some_and(|t| !matches!(t, TimeInForce::Gtt | TimeInForce::Gtc)) {
        errs.add(
            "order_submission.time_in_force",
            "is expected to have a time in force of type GTT or GTC when the order is pegged",
        );
    }

    let reference = require_enum::<PeggedReference>(
        errs,
        "order_submission.pegged_order.reference",
        pegged.reference,
    );

    let offset = if pegged.offset.is_empty() {
        BigInt::zero()
    } else {
        match parse_integer(&pegged.offset) {
            Some(offset) => offset,
            None => {
                errs.add("order_submission.pegged_order.offset", Cause::NotAValidInteger);
                return;
            }
        }
    };

    const OFFSET: &str = "order_submission.pegged_order.offset";
    match (side, reference) {
        (Some(Side::Buy), Some(PeggedReference::BestAsk)) => errs.add(
            "order_submission.pegged_order.reference",
            "cannot have a reference of type BEST_ASK when on BUY side",
        ),
        (Some(Side::Buy), Some(PeggedReference::BestBid)) if offset.is_positive() => {
            errs.add(OFFSET, "must be negative or zero")
        }
        (Some(Side::Buy), Some(PeggedReference::Mid)) if !offset.is_negative() => {
            errs.add(OFFSET, "must be negative")
        }
        (Some(Side::Sell), Some(PeggedReference::BestBid)) => errs.add(
            "order_submission.pegged_order.reference",
            "cannot have a reference of type BEST_BID when on SELL side",
        ),
        (Some(Side::Sell), Some(PeggedReference::BestAsk)) if offset.is_negative() => {
            errs.add(OFFSET, Cause::MustBePositiveOrZero)
        }
        (Some(Side::Sell), Some(PeggedReference::Mid)) if !offset.is_positive() => {
            errs.add(OFFSET, Cause::MustBePositive)
        }
        _ => {}
    }
}

// ===== CANCELLATION & AMENDMENT =====

pub fn check_order_cancellation(cmd: Option<&OrderCancellation>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("order_cancellation", Cause::IsRequired);
    };

    optional_vega_id(&mut errs, "order_cancellation.market_id", &cmd.market_id);
    optional_vega_id(&mut errs, "order_cancellation.order_id", &cmd.order_id);

    // an order id alone is ambiguous across markets
    if !cmd.order_id.is_empty() && cmd.market_id.is_empty() {
        errs.add("order_cancellation.market_id", Cause::IsRequired);
    }

    errs
}

pub fn check_order_amendment(cmd: Option<&OrderAmendment>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("order_amendment", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "order_amendment.order_id", &cmd.order_id);
    require_vega_id(&mut errs, "order_amendment.market_id", &cmd.market_id);

    let mut amends = false;

    if let Some(price) = &cmd.price {
        amends = true;
        check_positive_integer(&mut errs, "order_amendment.price", price, Cause::NotAValidInteger);
    }

    if cmd.size_delta != 0 {
        amends = true;
        if cmd.size.is_some() {
            errs.add("order_amendment.size", "cannot be set alongside size_delta");
        }
    }

    if let Some(size) = cmd.size {
        amends = true;
        if size == 0 {
            errs.add("order_amendment.size", Cause::MustBePositive);
        }
    }

    if let Some(expires_at) = cmd.expires_at {
        amends = true;
        if expires_at <= 0 {
            errs.add("order_amendment.expires_at", Cause::MustBePositive);
        }
    }

    if let Some(tif) = optional_enum::<TimeInForce>(
        &mut errs,
        "order_amendment.time_in_force",
        cmd.time_in_force,
    ) {
        amends = true;
        match tif {
            TimeInForce::Gfa | TimeInForce::Gfn => {
                errs.add("order_amendment.time_in_force", "cannot amend to GFA or GFN");
            }
            TimeInForce::Gtt if cmd.expires_at.is_none() => {
                errs.add("order_amendment.expires_at", "must be set when amending to GTT");
            }
            TimeInForce::Gtt => {}
            _ if cmd.expires_at.is_some() => {
                errs.add(
                    "order_amendment.expires_at",
                    "is only available when the time in force is of type GTT",
                );
            }
            _ => {}
        }
    } else if cmd.time_in_force != 0 {
        amends = true;
    }

    if !cmd.pegged_offset.is_empty() {
        amends = true;
        if parse_integer(&cmd.pegged_offset).is_none() {
            errs.add("order_amendment.pegged_offset", Cause::NotAValidInteger);
        }
    }

    if cmd.pegged_reference != 0 {
        amends = true;
        optional_enum::<PeggedReference>(
            &mut errs,
            "order_amendment.pegged_reference",
            cmd.pegged_reference,
        );
    }

    if !amends {
        errs.add("order_amendment", Cause::DoesNotAmendAnything);
    }

    errs
}

// ===== STOP ORDERS =====

pub fn check_stop_orders_submission(cmd: Option<&StopOrdersSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("stop_orders_submission", Cause::IsRequired);
    };

    if cmd.rises_above.is_none() && cmd.falls_below.is_none() {
        return errs.add_final(
            "stop_orders_submission",
            "must have at least one of rises above or falls below",
        );
    }

    if let Some(setup) = &cmd.rises_above {
        errs.merge(check_stop_order_setup(setup, "stop_orders_submission.rises_above"));
    }
    if let Some(setup) = &cmd.falls_below {
        errs.merge(check_stop_order_setup(setup, "stop_orders_submission.falls_below"));
    }

    // an OCO pair must not have the upper trigger below the lower one
    if let (Some(rises), Some(falls)) = (&cmd.rises_above, &cmd.falls_below) {
        if let (Some(StopOrderTrigger::Price(up)), Some(StopOrderTrigger::Price(down))) =
            (&rises.trigger, &falls.trigger)
        {
            if let (Some(up), Some(down)) = (parse_integer(up), parse_integer(down)) {
                if up < down {
                    errs.add(
                        "stop_orders_submission.rises_above.price",
                        "must be greater than falls_below.price",
                    );
                }
            }
        }
    }

    errs
}

fn check_stop_order_setup(setup: &StopOrderSetup, prefix: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();

    match &setup.trigger {
        None => errs.add(format!("{prefix}.trigger"), Cause::IsRequired),
        Some(StopOrderTrigger::Price(price)) => {
            check_positive_integer(
                &mut errs,
                format!("{prefix}.price"),
                price,
                Cause::NotAValidInteger,
            );
        }
        Some(StopOrderTrigger::TrailingPercentOffset(offset)) => {
            let path = format!("{prefix}.trailing_percent_offset");
            match parse_decimal(offset) {
                None if offset.is_empty() => errs.add(path, Cause::IsRequired),
                None => errs.add(path, Cause::IsNotValidNumber),
                Some(value) if !value.is_positive() || value >= BigDecimal::from(1) => {
                    errs.add(path, "must be between 0 (excluded) and 1 (excluded)")
                }
                Some(_) => {}
            }
        }
    }

    match (setup.expires_at, setup.expiry_strategy) {
        (Some(expires_at), strategy) => {
            if expires_at <= 0 {
                errs.add(format!("{prefix}.expires_at"), Cause::MustBePositive);
            }
            match strategy {
                None => errs.add(format!("{prefix}.expiry_strategy"), Cause::IsRequired),
                Some(raw) => {
                    require_enum::<StopOrderExpiryStrategy>(
                        &mut errs,
                        format!("{prefix}.expiry_strategy"),
                        raw,
                    );
                }
            }
        }
        (None, Some(_)) => {
            errs.add(
                format!("{prefix}.expiry_strategy"),
                "must not be set without expires_at",
            );
        }
        (None, None) => {}
    }

    let Some(order) = &setup.order_submission else {
        return errs.add_final(format!("{prefix}.order_submission"), Cause::IsRequired);
    };

    if !order.reduce_only {
        errs.add(format!("{prefix}.order_submission.reduce_only"), "must be reduce only");
    }
    errs.merge_prefixed(check_order_submission(Some(order)), prefix);

    errs
}

pub fn check_stop_orders_cancellation(cmd: Option<&StopOrdersCancellation>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("stop_orders_cancellation", Cause::IsRequired);
    };

    if let Some(market_id) = &cmd.market_id {
        optional_vega_id(&mut errs, "stop_orders_cancellation.market_id", market_id);
    }

    if let Some(stop_order_id) = &cmd.stop_order_id {
        optional_vega_id(&mut errs, "stop_orders_cancellation.stop_order_id", stop_order_id);
        if cmd.market_id.is_none() {
            errs.add("stop_orders_cancellation.market_id", Cause::IsRequired);
        }
    }

    errs
}

// ===== MARGIN MODE =====

pub fn check_update_margin_mode(cmd: Option<&UpdateMarginMode>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("update_margin_mode", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "update_margin_mode.market_id", &cmd.market_id);

    match require_enum::<MarginMode>(&mut errs, "update_margin_mode.mode", cmd.mode) {
        Some(MarginMode::IsolatedMargin) => match &cmd.margin_factor {
            None => errs.add("update_margin_mode.margin_factor", Cause::IsRequired),
            Some(factor) => {
                check_positive_decimal(&mut errs, "update_margin_mode.margin_factor", factor);
            }
        },
        Some(MarginMode::CrossMargin) if cmd.margin_factor.is_some() => {
            errs.add(
                "update_margin_mode.margin_factor",
                "must not be set when mode is CROSS_MARGIN",
            );
        }
        _ => {}
    }

    errs
}

// ===== BATCH =====

pub fn check_batch_market_instructions(cmd: Option<&BatchMarketInstructions>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("batch_market_instructions", Cause::IsRequired);
    };

    if cmd.is_empty() {
        return errs.add_final("batch_market_instructions", Cause::NoUpdatesProvided);
    }

    fn each<T>(
        errs: &mut ErrorSet,
        items: &[T],
        list: &str,
        check: impl Fn(Option<&T>) -> ErrorSet,
    ) {
        for (i, item) in items.iter().enumerate() {
            errs.merge_prefixed(
                check(Some(item)),
                &format!("batch_market_instructions.{list}.{i}"),
            );
        }
    }

    each(&mut errs, &cmd.update_margin_mode, "update_margin_mode", check_update_margin_mode);
    each(&mut errs, &cmd.cancellations, "cancellations", check_order_cancellation);
    each(&mut errs, &cmd.amendments, "amendments", check_order_amendment);
    each(&mut errs, &cmd.submissions, "submissions", check_order_submission);
    each(
        &mut errs,
        &cmd.stop_orders_cancellation,
        "stop_orders_cancellation",
        check_stop_orders_cancellation,
    );
    each(
        &mut errs,
        &cmd.stop_orders_submission,
        "stop_orders_submission",
        check_stop_orders_submission,
    );

    errs
}
