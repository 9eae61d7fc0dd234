//! # Delegation Checks

use super::{require_enum, require_vega_id};
use crate::errors::{Cause, ErrorSet};
use crate::numbers::check_positive_integer;
use shared_types::{DelegateSubmission, UndelegateMethod, UndelegateSubmission};

pub fn check_delegate_submission(cmd: Option<&DelegateSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("delegate_submission", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "delegate_submission.node_id", &cmd.node_id);
    check_positive_integer(
        &mut errs,
        "delegate_submission.amount",
        &cmd.amount,
        Cause::IsNotValidNumber,
    );

    errs
}

pub fn check_undelegate_submission(cmd: Option<&UndelegateSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("undelegate_submission", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "undelegate_submission.node_id", &cmd.node_id);
    require_enum::<UndelegateMethod>(&mut errs, "undelegate_submission.method", cmd.method);

    // empty means the whole delegation
    if !cmd.amount.is_empty() {
        check_positive_integer(
            &mut errs,
            "undelegate_submission.amount",
            &cmd.amount,
            Cause::IsNotValidNumber,
        );
    }

    errs
}
