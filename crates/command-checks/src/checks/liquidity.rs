//! # Liquidity Provision Checks

use super::{check_max_len, require_vega_id, REFERENCE_MAX_LEN};
use crate::errors::{Cause, ErrorSet};
use crate::numbers::{check_non_negative_decimal, check_non_negative_integer, check_positive_integer};
use shared_types::{
    LiquidityProvisionAmendment, LiquidityProvisionCancellation, LiquidityProvisionSubmission,
};

pub fn check_liquidity_provision_submission(
    cmd: Option<&LiquidityProvisionSubmission>,
) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("liquidity_provision_submission", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "liquidity_provision_submission.market_id", &cmd.market_id);
    check_positive_integer(
        &mut errs,
        "liquidity_provision_submission.commitment_amount",
        &cmd.commitment_amount,
        Cause::IsNotValidNumber,
    );
    check_non_negative_decimal(&mut errs, "liquidity_provision_submission.fee", &cmd.fee);
    check_max_len(
        &mut errs,
        "liquidity_provision_submission.reference",
        &cmd.reference,
        REFERENCE_MAX_LEN,
    );

    errs
}

/// Empty fields keep the current commitment values. A zero amount is
/// accepted here; whether it cancels is decided by the market.
pub fn check_liquidity_provision_amendment(cmd: Option<&LiquidityProvisionAmendment>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("liquidity_provision_amendment", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "liquidity_provision_amendment.market_id", &cmd.market_id);

    if cmd.commitment_amount.is_empty() && cmd.fee.is_empty() && cmd.reference.is_empty() {
        return errs.add_final("liquidity_provision_amendment", Cause::NoUpdatesProvided);
    }

    if !cmd.commitment_amount.is_empty() {
        check_non_negative_integer(
            &mut errs,
            "liquidity_provision_amendment.commitment_amount",
            &cmd.commitment_amount,
            Cause::IsNotValidNumber,
        );
    }
    if !cmd.fee.is_empty() {
        check_non_negative_decimal(&mut errs, "liquidity_provision_amendment.fee", &cmd.fee);
    }
    check_max_len(
        &mut errs,
        "liquidity_provision_amendment.reference",
        &cmd.reference,
        REFERENCE_MAX_LEN,
    );

    errs
}

pub fn check_liquidity_provision_cancellation(
    cmd: Option<&LiquidityProvisionCancellation>,
) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("liquidity_provision_cancellation", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "liquidity_provision_cancellation.market_id", &cmd.market_id);

    errs
}
