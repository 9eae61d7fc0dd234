//! # Transfer Checks
//!
//! Account-to-account transfers (one-off and recurring), their cancellation
//! and withdrawals. The dispatch strategy rules are shared with governance
//! transfers.

use super::{check_max_len, require_ethereum_address, require_public_key, require_vega_id};
use super::REFERENCE_MAX_LEN;
use crate::errors::{Cause, ErrorSet};
use crate::ids::{is_vega_id, ZERO_PUBLIC_KEY};
use crate::numbers::{check_positive_integer, parse_decimal, parse_integer};
use num::{Signed, Zero};
use shared_types::{
    raw_name, AccountType, CancelTransfer, DispatchStrategy, DistributionStrategy, EntityScope,
    IndividualScope, Transfer, TransferKind, WithdrawSubmission, DispatchMetric,
};

/// Longest accepted rank table.
pub const MAX_RANK_TABLE_LEN: usize = 500;

/// Longest accepted reward window, in epochs.
pub const MAX_WINDOW_LENGTH: u64 = 100;

const METRIC_ONLY_RECURRING: &str =
    "transfers to metric-based reward accounts must be recurring transfers that specify a distribution metric";

// ===== TRANSFER =====

pub fn check_transfer(cmd: Option<&Transfer>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("transfer_instruction", Cause::IsRequired);
    };

    let from = AccountType::try_from(cmd.from_account_type).ok();
    let to = AccountType::try_from(cmd.to_account_type).ok();

    if cmd.amount.is_empty() {
        errs.add("transfer_instruction.amount", Cause::IsRequired);
    } else {
        match parse_integer(&cmd.amount) {
            None => errs.add("transfer_instruction.amount", Cause::NotAValidInteger),
            Some(amount) if amount.is_zero() => {
                errs.add("transfer_instruction.amount", Cause::IsRequired)
            }
            Some(amount) if amount.is_negative() => {
                errs.add("transfer_instruction.amount", Cause::MustBePositive)
            }
            Some(_) => {}
        }
    }

    require_vega_id(&mut errs, "transfer_instruction.asset", &cmd.asset);

    if !matches!(from, Some(AccountType::General | AccountType::VestedRewards)) {
        errs.add("transfer_instruction.from_account_type", Cause::IsNotValid);
    }

    match &cmd.kind {
        None => errs.add("transfer_instruction.kind", Cause::IsRequired),
        Some(TransferKind::OneOff(one_off)) => {
            if !matches!(
                to,
                Some(
                    AccountType::GlobalReward
                        | AccountType::General
                        | AccountType::Unspecified
                        | AccountType::NetworkTreasury
                )
            ) {
                errs.add(
                    "transfer_instruction.to_account_type",
                    "account type is not valid for one off transfer",
                );
            }
            if one_off.deliver_on < 0 {
                errs.add("transfer_instruction.kind.deliver_on", Cause::MustBePositiveOrZero);
            }
            if to.is_some_and(AccountType::is_metric_reward) {
                errs.add("transfer_instruction.account.to", METRIC_ONLY_RECURRING);
            }
        }
        Some(TransferKind::Recurring(recurring)) => {
            if from == Some(AccountType::VestedRewards) {
                errs.add(
                    "transfer_instruction.from_account_type",
                    "account type is not valid for one recurring transfer",
                );
            }
            if recurring.end_epoch == Some(0) {
                errs.add("transfer_instruction.kind.end_epoch", Cause::MustBePositive);
            }
            if recurring.start_epoch == 0 {
                errs.add("transfer_instruction.kind.start_epoch", Cause::MustBePositive);
            }
            if let Some(end) = recurring.end_epoch {
                if recurring.start_epoch > end {
                    errs.add("transfer_instruction.kind.end_epoch", "must be after start_epoch");
                }
            }
            match parse_decimal(&recurring.factor) {
                None => errs.add("transfer_instruction.kind.factor", Cause::NotAValidFloat),
                Some(factor) if !factor.is_positive() => {
                    errs.add("transfer_instruction.kind.factor", Cause::MustBePositive)
                }
                Some(_) => {}
            }
            if to.is_some_and(AccountType::is_metric_reward) && recurring.dispatch_strategy.is_none()
            {
                errs.add("transfer_instruction.kind.dispatch_strategy", Cause::IsRequired);
            }
            if let Some(strategy) = &recurring.dispatch_strategy {
                check_dispatch_strategy(
                    &mut errs,
                    cmd.to_account_type,
                    strategy,
                    "transfer_instruction.kind.dispatch_strategy",
                    "transfer_instruction.account.to",
                );
            }
        }
    }

    check_max_len(
        &mut errs,
        "transfer_instruction.reference",
        &cmd.reference,
        REFERENCE_MAX_LEN,
    );

    require_public_key(&mut errs, "transfer_instruction.to", &cmd.to);

    if to.is_none() || to == Some(AccountType::Unspecified) {
        errs.add("transfer_instruction.to_account_type", Cause::IsNotValid);
    }
    // the global reward pool is addressed by the zero key only
    if to == Some(AccountType::GlobalReward) && cmd.to != ZERO_PUBLIC_KEY {
        errs.add("transfer_instruction.to_account_type", Cause::IsNotValid);
    }

    errs
}

// ===== DISPATCH STRATEGY =====

fn mismatching_metric(to_account_type: i32, metric: i32) -> String {
    format!(
        "cannot set toAccountType to {} when dispatch metric is set to {}",
        raw_name::<AccountType>(to_account_type),
        raw_name::<DispatchMetric>(metric),
    )
}

/// Rules for a reward pool's dispatch strategy. `prefix` roots the strategy
/// fields, `destination` is the path blamed for a non-reward target account.
pub(crate) fn check_dispatch_strategy(
    errs: &mut ErrorSet,
    to_account_type: i32,
    strategy: &DispatchStrategy,
    prefix: &str,
    destination: &str,
) {
    let to = AccountType::try_from(to_account_type).ok();
    let to_name = raw_name::<AccountType>(to_account_type);
    let is_proposers = to == Some(AccountType::RewardMarketProposers);
    let is_ranking = to == Some(AccountType::RewardValidatorRanking);
    let entity_scope = EntityScope::try_from(strategy.entity_scope).ok();
    let distribution = DistributionStrategy::try_from(strategy.distribution_strategy).ok();
    let path = |field: &str| format!("{prefix}.{field}");

    if !to.is_some_and(AccountType::is_metric_reward) {
        errs.add(destination, Cause::IsNotValid);
    }

    if strategy.asset_for_metric.is_empty() {
        if !is_proposers && !is_ranking {
            errs.add(path("asset_for_metric"), Cause::IsRequired);
        }
    } else {
        if !is_vega_id(&strategy.asset_for_metric) {
            errs.add(path("asset_for_metric"), Cause::ShouldBeAValidVegaId);
        }
        if is_ranking {
            errs.add(
                path("asset_for_metric"),
                "not be specified when to_account type is VALIDATOR_RANKING",
            );
        }
    }

    if let Some(expected) = to.and_then(AccountType::reward_metric) {
        if strategy.metric != expected.value() {
            errs.add(
                path("dispatch_metric"),
                mismatching_metric(to_account_type, strategy.metric),
            );
        }
    }

    let teams = entity_scope == Some(EntityScope::Teams);
    let individuals = entity_scope == Some(EntityScope::Individuals);

    if strategy.entity_scope == 0 {
        errs.add(path("entity_scope"), Cause::IsRequired);
    }
    if teams && is_proposers {
        errs.add(
            path("entity_scope"),
            format!("{} is not allowed for {}", EntityScope::Teams, to_name),
        );
    }
    if teams && strategy.n_top_performers.is_empty() {
        errs.add(path("n_top_performers"), Cause::IsRequired);
    }
    if !teams && !strategy.n_top_performers.is_empty() {
        errs.add(
            path("n_top_performers"),
            format!("must not be set when entity scope is not {}", EntityScope::Teams),
        );
    }
    if teams && !strategy.n_top_performers.is_empty() {
        match parse_decimal(&strategy.n_top_performers) {
            None => errs.add(path("n_top_performers"), Cause::IsNotValidNumber),
            Some(n) if !crate::numbers::is_fraction(&n) => {
                errs.add(path("n_top_performers"), Cause::MustBeBetween01)
            }
            Some(_) => {}
        }
    }

    let scope_name = raw_name::<EntityScope>(strategy.entity_scope);
    if individuals && strategy.individual_scope == IndividualScope::Unspecified.value() {
        errs.add(path("individual_scope"), Cause::IsRequired);
    }
    if individuals && !strategy.team_scope.is_empty() {
        errs.add(
            path("team_scope"),
            format!("should not be set when entity_scope is set to {scope_name}"),
        );
    }
    if !individuals && strategy.individual_scope != IndividualScope::Unspecified.value() {
        errs.add(
            path("individual_scope"),
            format!("should not be set when entity_scope is set to {scope_name}"),
        );
    }

    if strategy.distribution_strategy == 0 && !is_proposers {
        errs.add(path("distribution_strategy"), Cause::IsRequired);
    }
    if strategy.distribution_strategy != 0 && is_proposers {
        errs.add(
            path("distribution_strategy"),
            format!("should not be set when to_account is set to {to_name}"),
        );
    }

    for (field, value) in [
        ("staking_requirement", &strategy.staking_requirement),
        (
            "notional_time_weighted_average_position_requirement",
            &strategy.notional_time_weighted_average_position_requirement,
        ),
    ] {
        if value.is_empty() {
            continue;
        }
        if is_ranking || is_proposers {
            errs.add(
                path(field),
                format!("should not be set if to_account is set to {to_name}"),
            );
            continue;
        }
        match parse_integer(value) {
            None => errs.add(path(field), Cause::NotAValidInteger),
            Some(n) if n.is_negative() => errs.add(path(field), Cause::MustBePositiveOrZero),
            Some(_) => {}
        }
    }

    if strategy.window_length > 0 && is_proposers {
        errs.add(
            path("window_length"),
            format!("should not be set for {}", AccountType::RewardMarketProposers),
        );
    }
    if strategy.window_length == 0 && !is_proposers {
        errs.add(path("window_length"), "must be between 1 and 100");
    }
    if strategy.window_length > MAX_WINDOW_LENGTH {
        errs.add(path("window_length"), Cause::MustBeAtMost(MAX_WINDOW_LENGTH));
    }

    let rank = distribution == Some(DistributionStrategy::Rank);
    if strategy.rank_table.is_empty() && rank {
        errs.add(path("rank_table"), Cause::MustBePositive);
    }
    if !strategy.rank_table.is_empty() && !rank {
        errs.add(
            path("rank_table"),
            format!(
                "should not be set for distribution strategy {}",
                raw_name::<DistributionStrategy>(strategy.distribution_strategy)
            ),
        );
    }
    if strategy.rank_table.len() > MAX_RANK_TABLE_LEN {
        errs.add(path("rank_table"), Cause::MustBeAtMost(MAX_RANK_TABLE_LEN as u64));
    }
    if let Some(i) = strategy
        .rank_table
        .windows(2)
        .position(|pair| pair[1].start_rank <= pair[0].start_rank)
    {
        errs.add(
            path(&format!("rank_table.{}.start_rank", i + 1)),
            format!("must be greater than start_rank of element #{i}"),
        );
    }

    if let Some(cap) = strategy.cap_reward_fee_multiple.as_deref().filter(|c| !c.is_empty()) {
        match parse_decimal(cap) {
            None => errs.add(path("cap_reward_fee_multiple"), Cause::IsNotValidNumber),
            Some(cap) if !cap.is_positive() => {
                errs.add(path("cap_reward_fee_multiple"), Cause::MustBePositive)
            }
            Some(_) => {}
        }
    }
}

// ===== CANCEL & WITHDRAW =====

pub fn check_cancel_transfer(cmd: Option<&CancelTransfer>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("cancel_transfer", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "cancel_transfer.transfer_id", &cmd.transfer_id);

    errs
}

pub fn check_withdraw_submission(cmd: Option<&WithdrawSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("withdraw_submission", Cause::IsRequired);
    };

    check_positive_integer(
        &mut errs,
        "withdraw_submission.amount",
        &cmd.amount,
        Cause::NotAValidInteger,
    );
    require_vega_id(&mut errs, "withdraw_submission.asset", &cmd.asset);

    if let Some(ext) = &cmd.ext {
        require_ethereum_address(
            &mut errs,
            "withdraw_submission.ext.erc20.receiver_address",
            &ext.receiver_address,
        );
    }

    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{OneOffTransfer, Rank, RecurringTransfer};

    const ASSET: &str = "b4f2726571fbe8e33b442dc92ed2d7f0d810e21835b7371a7915a365f07ccd9b";
    const PARTY: &str = "ae94a5a2d1a24b6f44a1e2e3a1f0a1c6a3a9de5a3e95b1c1a0c2d1b1e3f4a5b6";

    fn one_off() -> Transfer {
        Transfer {
            from_account_type: AccountType::General.value(),
            to: PARTY.into(),
            to_account_type: AccountType::General.value(),
            asset: ASSET.into(),
            amount: "1000".into(),
            reference: "rent".into(),
            kind: Some(TransferKind::OneOff(OneOffTransfer { deliver_on: 0 })),
        }
    }

    fn reward_strategy() -> DispatchStrategy {
        DispatchStrategy {
            asset_for_metric: ASSET.into(),
            metric: DispatchMetric::MakerFeesPaid.value(),
            entity_scope: EntityScope::Individuals.value(),
            individual_scope: IndividualScope::All.value(),
            window_length: 10,
            distribution_strategy: DistributionStrategy::ProRata.value(),
            ..Default::default()
        }
    }

    fn recurring_to_rewards(strategy: Option<DispatchStrategy>) -> Transfer {
        Transfer {
            to: ZERO_PUBLIC_KEY.into(),
            to_account_type: AccountType::RewardMakerPaidFees.value(),
            kind: Some(TransferKind::Recurring(RecurringTransfer {
                start_epoch: 1,
                end_epoch: Some(10),
                factor: "0.5".into(),
                dispatch_strategy: strategy,
            })),
            ..one_off()
        }
    }

    #[test]
    fn test_missing_commands_are_final() {
        assert_eq!(check_transfer(None).render(), "transfer_instruction (is required)");
        assert_eq!(check_cancel_transfer(None).render(), "cancel_transfer (is required)");
        assert_eq!(check_withdraw_submission(None).render(), "withdraw_submission (is required)");
    }

    #[test]
    fn test_empty_transfer_renders_in_rule_order() {
        let errs = check_transfer(Some(&Transfer::default()));

        assert_eq!(errs.len(), 6);
        assert_eq!(
            errs.render(),
            "transfer_instruction.amount (is required), \
             transfer_instruction.asset (is required), \
             transfer_instruction.from_account_type (is not a valid value), \
             transfer_instruction.kind (is required), \
             transfer_instruction.to (is required), \
             transfer_instruction.to_account_type (is not a valid value)"
        );
    }

    #[test]
    fn test_valid_one_off_transfer() {
        assert!(check_transfer(Some(&one_off())).is_empty());
    }

    #[test]
    fn test_amount_forms() {
        for (amount, cause) in [
            ("0", Cause::IsRequired),
            ("-5", Cause::MustBePositive),
            ("1.5", Cause::NotAValidInteger),
        ] {
            let cmd = Transfer { amount: amount.into(), ..one_off() };
            assert_eq!(check_transfer(Some(&cmd)).get("transfer_instruction.amount"), vec![&cause]);
        }
    }

    #[test]
    fn test_global_reward_requires_zero_key() {
        let cmd = Transfer { to_account_type: AccountType::GlobalReward.value(), ..one_off() };
        assert_eq!(
            check_transfer(Some(&cmd)).render(),
            "transfer_instruction.to_account_type (is not a valid value)"
        );

        let cmd = Transfer { to: ZERO_PUBLIC_KEY.into(), ..cmd };
        assert!(check_transfer(Some(&cmd)).is_empty());
    }

    #[test]
    fn test_one_off_to_metric_pool_rejected() {
        let cmd = Transfer {
            to_account_type: AccountType::RewardLpReceivedFees.value(),
            ..one_off()
        };
        let errs = check_transfer(Some(&cmd));

        assert_eq!(
            errs.get("transfer_instruction.account.to")[0].to_string(),
            METRIC_ONLY_RECURRING
        );
        assert!(!errs.is_empty_for("transfer_instruction.to_account_type"));
    }

    #[test]
    fn test_reference_length() {
        let cmd = Transfer { reference: "x".repeat(101), ..one_off() };
        assert_eq!(
            check_transfer(Some(&cmd)).render(),
            "transfer_instruction.reference (must not exceed 100 characters)"
        );
    }

    #[test]
    fn test_valid_recurring_reward_transfer() {
        let cmd = recurring_to_rewards(Some(reward_strategy()));
        assert!(check_transfer(Some(&cmd)).is_empty(), "{}", check_transfer(Some(&cmd)));
    }

    #[test]
    fn test_recurring_epochs_and_factor() {
        let cmd = Transfer {
            kind: Some(TransferKind::Recurring(RecurringTransfer {
                start_epoch: 5,
                end_epoch: Some(2),
                factor: "abc".into(),
                dispatch_strategy: None,
            })),
            ..one_off()
        };

        assert_eq!(
            check_transfer(Some(&cmd)).render(),
            "transfer_instruction.kind.end_epoch (must be after start_epoch), \
             transfer_instruction.kind.factor (not a valid float)"
        );
    }

    #[test]
    fn test_metric_pool_needs_strategy() {
        let errs = check_transfer(Some(&recurring_to_rewards(None)));
        assert_eq!(errs.render(), "transfer_instruction.kind.dispatch_strategy (is required)");
    }

    #[test]
    fn test_strategy_metric_must_match_pool() {
        let strategy = DispatchStrategy {
            metric: DispatchMetric::LpFeesReceived.value(),
            ..reward_strategy()
        };
        let errs = check_transfer(Some(&recurring_to_rewards(Some(strategy))));

        assert_eq!(
            errs.render(),
            "transfer_instruction.kind.dispatch_strategy.dispatch_metric \
             (cannot set toAccountType to ACCOUNT_TYPE_REWARD_MAKER_PAID_FEES \
             when dispatch metric is set to DISPATCH_METRIC_LP_FEES_RECEIVED)"
        );
    }

    #[test]
    fn test_strategy_rank_table_order() {
        let strategy = DispatchStrategy {
            distribution_strategy: DistributionStrategy::Rank.value(),
            rank_table: vec![
                Rank { start_rank: 1, share_ratio: 10 },
                Rank { start_rank: 3, share_ratio: 5 },
                Rank { start_rank: 3, share_ratio: 1 },
            ],
            ..reward_strategy()
        };
        let errs = check_transfer(Some(&recurring_to_rewards(Some(strategy))));

        assert_eq!(
            errs.render(),
            "transfer_instruction.kind.dispatch_strategy.rank_table.2.start_rank \
             (must be greater than start_rank of element #1)"
        );
    }

    #[test]
    fn test_strategy_team_scope_rules() {
        let strategy = DispatchStrategy {
            entity_scope: EntityScope::Teams.value(),
            individual_scope: 0,
            n_top_performers: "1.5".into(),
            ..reward_strategy()
        };
        let errs = check_transfer(Some(&recurring_to_rewards(Some(strategy))));

        assert_eq!(
            errs.render(),
            "transfer_instruction.kind.dispatch_strategy.n_top_performers \
             (must be between 0 (excluded) and 1 (included))"
        );
    }

    #[test]
    fn test_strategy_window_bounds() {
        let strategy = DispatchStrategy { window_length: 101, ..reward_strategy() };
        let errs = check_transfer(Some(&recurring_to_rewards(Some(strategy))));
        assert_eq!(
            errs.render(),
            "transfer_instruction.kind.dispatch_strategy.window_length (must be at most 100)"
        );
    }

    #[test]
    fn test_withdraw_rules() {
        let cmd = WithdrawSubmission {
            amount: "0".into(),
            asset: ASSET.into(),
            ext: Some(shared_types::Erc20WithdrawExt { receiver_address: "0x12".into() }),
        };

        assert_eq!(
            check_withdraw_submission(Some(&cmd)).render(),
            "withdraw_submission.amount (must be positive), \
             withdraw_submission.ext.erc20.receiver_address (is not a valid ethereum address)"
        );
    }

    #[test]
    fn test_cancel_transfer_id() {
        let cmd = CancelTransfer { transfer_id: "xyz".into() };
        assert_eq!(
            check_cancel_transfer(Some(&cmd)).render(),
            "cancel_transfer.transfer_id (should be a valid Vega ID)"
        );
    }
}
