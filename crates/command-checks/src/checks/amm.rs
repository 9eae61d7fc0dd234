//! # AMM Checks
//!
//! Submission, amendment and cancellation of automated market makers.

use super::{require_enum, require_vega_id};
use crate::errors::{Cause, ErrorSet};
use crate::numbers::{check_fraction, check_positive_decimal, check_positive_integer};
use shared_types::{AmendAmm, AmmCancellationMethod, CancelAmm, ConcentratedLiquidityParameters, SubmitAmm};

/// Bound and leverage rules. Each bound is validated on its own first; the
/// ordering against `base` only runs for bounds that parsed.
fn check_concentrated_liquidity(params: &ConcentratedLiquidityParameters, prefix: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let path = |field: &str| format!("{prefix}.{field}");

    let base = check_positive_integer(&mut errs, path("base"), &params.base, Cause::IsNotValidNumber);

    if params.lower_bound.is_none() && params.upper_bound.is_none() {
        errs.add(prefix, "lower_bound and upper_bound cannot both be empty");
    }

    let lower = params.lower_bound.as_deref().and_then(|bound| {
        check_positive_integer(&mut errs, path("lower_bound"), bound, Cause::IsNotValidNumber)
    });
    let upper = params.upper_bound.as_deref().and_then(|bound| {
        check_positive_integer(&mut errs, path("upper_bound"), bound, Cause::IsNotValidNumber)
    });

    if let Some(base) = &base {
        if lower.as_ref().is_some_and(|lower| base <= lower) {
            errs.add(path("base"), "should be a bigger value than lower_bound");
        }
        if upper.as_ref().is_some_and(|upper| base >= upper) {
            errs.add(path("base"), "should be a smaller value than upper_bound");
        }
    }

    if let Some(leverage) = &params.leverage_at_lower_bound {
        check_positive_decimal(&mut errs, path("leverage_at_lower_bound"), leverage);
    }
    if let Some(leverage) = &params.leverage_at_upper_bound {
        check_positive_decimal(&mut errs, path("leverage_at_upper_bound"), leverage);
    }

    errs
}

pub fn check_submit_amm(cmd: Option<&SubmitAmm>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("submit_amm", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "submit_amm.market_id", &cmd.market_id);
    check_fraction(
        &mut errs,
        "submit_amm.slippage_tolerance",
        &cmd.slippage_tolerance,
        Cause::IsNotValidNumber,
    );
    check_positive_integer(
        &mut errs,
        "submit_amm.commitment_amount",
        &cmd.commitment_amount,
        Cause::IsNotValidNumber,
    );
    check_positive_decimal(&mut errs, "submit_amm.proposed_fee", &cmd.proposed_fee);

    let Some(params) = &cmd.concentrated_liquidity_parameters else {
        return errs.add_final("submit_amm.concentrated_liquidity_parameters", Cause::IsRequired);
    };
    errs.merge(check_concentrated_liquidity(params, "submit_amm.concentrated_liquidity_parameters"));

    errs
}

pub fn check_amend_amm(cmd: Option<&AmendAmm>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("amend_amm", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "amend_amm.market_id", &cmd.market_id);
    check_fraction(
        &mut errs,
        "amend_amm.slippage_tolerance",
        &cmd.slippage_tolerance,
        Cause::IsNotValidNumber,
    );

    let mut updates = false;

    if let Some(amount) = &cmd.commitment_amount {
        updates = true;
        check_positive_integer(&mut errs, "amend_amm.commitment_amount", amount, Cause::IsNotValidNumber);
    }

    if let Some(fee) = &cmd.proposed_fee {
        updates = true;
        check_positive_decimal(&mut errs, "amend_amm.proposed_fee", fee);
    }

    if let Some(params) = &cmd.concentrated_liquidity_parameters {
        updates = true;
        errs.merge(check_concentrated_liquidity(params, "amend_amm.concentrated_liquidity_parameters"));
    }

    if !updates {
        errs.add("amend_amm", Cause::NoUpdatesProvided);
    }

    errs
}

pub fn check_cancel_amm(cmd: Option<&CancelAmm>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("cancel_amm", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "cancel_amm.market_id", &cmd.market_id);
    require_enum::<AmmCancellationMethod>(&mut errs, "cancel_amm.method", cmd.method);

    errs
}
