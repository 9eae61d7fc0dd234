//! # Governance Checks
//!
//! Proposal submissions and votes.
//!
//! The proposal envelope (rationale, terms and their timestamps) is checked
//! here; each change type has its own checker whose paths start at the
//! change name (`new_transfer.changes.amount`) and are merged under
//! `proposal_submission.terms.change`. Market listings and updates live in
//! [`super::markets`].

use super::markets::{
    check_new_market, check_new_spot_market, check_update_market, check_update_spot_market,
};
use super::transfers::check_dispatch_strategy;
use super::{check_max_len, require_enum, require_ethereum_address, require_vega_id};
use super::REFERENCE_MAX_LEN;
use crate::errors::{Cause, ErrorSet};
use crate::ids::is_vega_public_key;
use crate::numbers::{
    check_non_negative_decimal, check_positive_decimal, check_positive_integer, parse_decimal,
    parse_integer,
};
use bigdecimal::BigDecimal;
use num::Signed;
use shared_types::{
    AccountType, AssetSource, CancelTransferProposal, GovernanceTransferKind, GovernanceTransferType,
    MarketStateUpdateType, NetworkParameter, NewAsset, NewTransfer, ProposalChange,
    ProposalSubmission, ProposalTerms, ReferralProgramChanges, UpdateAsset, UpdateMarketState,
    UpdateNetworkParameter, UpdateReferralProgram, UpdateVolumeDiscountProgram, VoteSubmission,
    VoteValue,
};
use std::collections::HashSet;

/// Longest accepted proposal rationale description.
pub const RATIONALE_DESCRIPTION_MAX_LEN: usize = 20_000;

/// Longest accepted proposal rationale title.
pub const RATIONALE_TITLE_MAX_LEN: usize = 100;

/// Longest accepted program window, in epochs.
pub const MAX_PROGRAM_WINDOW_LENGTH: u64 = 100;

const CHANGE_PREFIX: &str = "proposal_submission.terms.change";

fn is_blank(value: &str) -> bool {
    value.trim_matches([' ', '\n', '\r', '\t']).is_empty()
}

// ===== PROPOSAL SUBMISSION =====

pub fn check_proposal_submission(cmd: Option<&ProposalSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("proposal_submission", Cause::IsRequired);
    };

    check_max_len(
        &mut errs,
        "proposal_submission.reference",
        &cmd.reference,
        REFERENCE_MAX_LEN,
    );

    match &cmd.rationale {
        None => errs.add("proposal_submission.rationale", Cause::IsRequired),
        Some(rationale) => {
            if is_blank(&rationale.description) {
                errs.add("proposal_submission.rationale.description", Cause::IsRequired);
            } else {
                check_max_len(
                    &mut errs,
                    "proposal_submission.rationale.description",
                    &rationale.description,
                    RATIONALE_DESCRIPTION_MAX_LEN,
                );
            }
            if is_blank(&rationale.title) {
                errs.add("proposal_submission.rationale.title", Cause::IsRequired);
            } else {
                check_max_len(
                    &mut errs,
                    "proposal_submission.rationale.title",
                    &rationale.title,
                    RATIONALE_TITLE_MAX_LEN,
                );
            }
        }
    }

    let Some(terms) = &cmd.terms else {
        return errs.add_final("proposal_submission.terms", Cause::IsRequired);
    };

    check_terms_timestamps(&mut errs, terms);
    errs.merge(check_proposal_changes(terms));

    errs
}

fn check_terms_timestamps(errs: &mut ErrorSet, terms: &ProposalTerms) {
    const CLOSING: &str = "proposal_submission.terms.closing_timestamp";
    const ENACTMENT: &str = "proposal_submission.terms.enactment_timestamp";
    const VALIDATION: &str = "proposal_submission.terms.validation_timestamp";

    if terms.closing_timestamp <= 0 {
        errs.add(CLOSING, Cause::MustBePositive);
    }
    if terms.validation_timestamp < 0 {
        errs.add(VALIDATION, Cause::MustBePositiveOrZero);
    }
    if terms.validation_timestamp >= terms.closing_timestamp {
        errs.add(VALIDATION, "cannot be after or equal to closing time");
    }

    // freeform proposals are never enacted
    if matches!(terms.change, Some(ProposalChange::NewFreeform(_))) {
        if terms.enactment_timestamp != 0 {
            errs.add(ENACTMENT, Cause::IsNotSupported);
        }
    } else {
        if terms.enactment_timestamp <= 0 {
            errs.add(ENACTMENT, Cause::MustBePositive);
        }
        if terms.closing_timestamp > terms.enactment_timestamp {
            errs.add(CLOSING, "cannot be after enactment time");
        }
    }

    // only new assets go through a validation phase
    if matches!(terms.change, Some(ProposalChange::NewAsset(_))) {
        if terms.validation_timestamp == 0 {
            errs.add(VALIDATION, Cause::MustBePositive);
        }
        if terms.validation_timestamp > terms.closing_timestamp {
            errs.add(VALIDATION, "cannot be after closing time");
        }
    } else if terms.validation_timestamp != 0 {
        errs.add(VALIDATION, Cause::IsNotSupported);
    }
}

fn check_proposal_changes(terms: &ProposalTerms) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(change) = &terms.change else {
        return errs.add_final(CHANGE_PREFIX, Cause::IsRequired);
    };

    let change_errs = match change {
        ProposalChange::NewMarket(change) => check_new_market(change),
        ProposalChange::UpdateMarket(change) => check_update_market(change),
        ProposalChange::NewSpotMarket(change) => check_new_spot_market(change),
        ProposalChange::UpdateSpotMarket(change) => check_update_spot_market(change),
        ProposalChange::NewFreeform(_) => ErrorSet::new(),
        ProposalChange::UpdateNetworkParameter(change) => check_network_parameter_update(change),
        ProposalChange::NewAsset(change) => check_new_asset(change),
        ProposalChange::UpdateAsset(change) => check_update_asset(change),
        ProposalChange::NewTransfer(change) => check_new_transfer(change),
        ProposalChange::CancelTransfer(change) => check_cancel_transfer_proposal(change),
        ProposalChange::UpdateMarketState(change) => check_update_market_state(change),
        ProposalChange::UpdateReferralProgram(change) => {
            check_update_referral_program(change, terms.enactment_timestamp)
        }
        ProposalChange::UpdateVolumeDiscountProgram(change) => {
            check_update_volume_discount_program(change, terms.enactment_timestamp)
        }
        ProposalChange::Unknown { .. } => return errs.add_final(CHANGE_PREFIX, Cause::IsNotValid),
    };
    errs.merge_prefixed(change_errs, CHANGE_PREFIX);

    errs
}

// ===== NETWORK PARAMETERS & ASSETS =====

fn check_network_parameter_update(change: &UpdateNetworkParameter) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(NetworkParameter { key, value }) = &change.changes else {
        return errs.add_final("update_network_parameter.changes", Cause::IsRequired);
    };

    if key.is_empty() {
        errs.add("update_network_parameter.changes.key", Cause::IsRequired);
    }
    if value.is_empty() {
        errs.add("update_network_parameter.changes.value", Cause::IsRequired);
    }

    errs
}

fn check_new_asset(change: &NewAsset) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(details) = &change.changes else {
        return errs.add_final("new_asset.changes", Cause::IsRequired);
    };

    if details.name.is_empty() {
        errs.add("new_asset.changes.name", Cause::IsRequired);
    }
    if details.symbol.is_empty() {
        errs.add("new_asset.changes.symbol", Cause::IsRequired);
    }
    check_positive_decimal(&mut errs, "new_asset.changes.quantum", &details.quantum);

    match &details.source {
        None => return errs.add_final("new_asset.changes.source", Cause::IsRequired),
        Some(AssetSource::BuiltinAsset(builtin)) => {
            check_positive_integer(
                &mut errs,
                "new_asset.changes.source.builtin_asset.max_faucet_amount_mint",
                &builtin.max_faucet_amount_mint,
                Cause::IsNotValidNumber,
            );
        }
        Some(AssetSource::Erc20(erc20)) => {
            require_ethereum_address(
                &mut errs,
                "new_asset.changes.source.erc20.contract_address",
                &erc20.contract_address,
            );
            check_positive_integer(
                &mut errs,
                "new_asset.changes.source.erc20.lifetime_limit",
                &erc20.lifetime_limit,
                Cause::IsNotValidNumber,
            );
            check_positive_integer(
                &mut errs,
                "new_asset.changes.source.erc20.withdraw_threshold",
                &erc20.withdraw_threshold,
                Cause::IsNotValidNumber,
            );
        }
    }

    errs
}

fn check_update_asset(change: &UpdateAsset) -> ErrorSet {
    let mut errs = ErrorSet::new();

    require_vega_id(&mut errs, "update_asset.asset_id", &change.asset_id);

    let Some(details) = &change.changes else {
        return errs.add_final("update_asset.changes", Cause::IsRequired);
    };

    check_positive_decimal(&mut errs, "update_asset.changes.quantum", &details.quantum);

    let Some(erc20) = &details.erc20 else {
        return errs.add_final("update_asset.changes.source", Cause::IsRequired);
    };

    check_positive_integer(
        &mut errs,
        "update_asset.changes.source.erc20.lifetime_limit",
        &erc20.lifetime_limit,
        Cause::IsNotValidNumber,
    );
    check_positive_integer(
        &mut errs,
        "update_asset.changes.source.erc20.withdraw_threshold",
        &erc20.withdraw_threshold,
        Cause::IsNotValidNumber,
    );

    errs
}

// ===== GOVERNANCE TRANSFERS =====

/// Destination account types a governance transfer may pay into, per source.
fn valid_destinations(source: AccountType) -> Option<&'static [AccountType]> {
    use AccountType::*;

    const FROM_TREASURY: [AccountType; 12] = [
        General, GlobalInsurance, Insurance,
        GlobalReward, RewardMakerPaidFees, RewardLpReceivedFees, RewardMakerReceivedFees,
        RewardMarketProposers, RewardAveragePosition, RewardRelativeReturn,
        RewardReturnVolatility, RewardValidatorRanking,
    ];
    const FROM_INSURANCE: [AccountType; 13] = [
        General, GlobalInsurance, Insurance, NetworkTreasury,
        GlobalReward, RewardMakerPaidFees, RewardLpReceivedFees, RewardMakerReceivedFees,
        RewardMarketProposers, RewardAveragePosition, RewardRelativeReturn,
        RewardReturnVolatility, RewardValidatorRanking,
    ];
    const FROM_GLOBAL_INSURANCE: [AccountType; 12] = [
        General, Insurance, NetworkTreasury,
        GlobalReward, RewardMakerPaidFees, RewardLpReceivedFees, RewardMakerReceivedFees,
        RewardMarketProposers, RewardAveragePosition, RewardRelativeReturn,
        RewardReturnVolatility, RewardValidatorRanking,
    ];

    match source {
        NetworkTreasury => Some(&FROM_TREASURY),
        Insurance => Some(&FROM_INSURANCE),
        GlobalInsurance => Some(&FROM_GLOBAL_INSURANCE),
        _ => None,
    }
}

/// Governance transfers stop at the first structural problem: later rules
/// depend on the source and destination being coherent.
fn check_new_transfer(change: &NewTransfer) -> ErrorSet {
    const ROOT: &str = "new_transfer.changes";
    let mut errs = ErrorSet::new();
    let Some(changes) = &change.changes else {
        return errs.add_final(ROOT, Cause::IsRequired);
    };
    let path = |field: &str| format!("{ROOT}.{field}");

    if changes.source_type == 0 {
        return errs.add_final(path("source_type"), Cause::IsRequired);
    }
    let Some(source) = AccountType::try_from(changes.source_type).ok() else {
        return errs.add_final(path("source_type"), Cause::IsNotValid);
    };
    let Some(destinations) = valid_destinations(source) else {
        return errs.add_final(path("source_type"), Cause::IsNotValid);
    };

    if changes.destination_type == 0 {
        return errs.add_final(path("destination_type"), Cause::IsRequired);
    }
    let destination = match AccountType::try_from(changes.destination_type) {
        Ok(destination) if destinations.contains(&destination) => destination,
        _ => return errs.add_final(path("destination_type"), Cause::IsNotValid),
    };

    if destination == AccountType::General && !is_vega_public_key(&changes.destination) {
        errs.add(path("destination"), Cause::ShouldBeAValidVegaPublicKey);
    }

    // only a market insurance pool is addressed by a market id
    if source == AccountType::Insurance {
        if changes.source.is_empty() {
            return errs.add_final(path("source"), Cause::IsNotValid);
        }
        if destination == source && changes.source == changes.destination {
            return errs.add_final(path("destination"), Cause::IsNotValid);
        }
    } else if !changes.source.is_empty() {
        return errs.add_final(path("source"), Cause::IsNotValid);
    }

    if matches!(destination, AccountType::General | AccountType::Insurance)
        && changes.destination.is_empty()
    {
        return errs.add_final(path("destination"), Cause::IsNotValid);
    }

    if changes.transfer_type == 0 {
        return errs.add_final(path("transfer_type"), Cause::IsRequired);
    }
    if GovernanceTransferType::try_from(changes.transfer_type).is_err() {
        return errs.add_final(path("transfer_type"), Cause::IsNotValid);
    }

    if changes.amount.is_empty() {
        return errs.add_final(path("amount"), Cause::IsRequired);
    }
    if !parse_integer(&changes.amount).is_some_and(|amount| !amount.is_negative()) {
        return errs.add_final(path("amount"), Cause::IsNotValid);
    }

    if changes.asset.is_empty() {
        return errs.add_final(path("asset"), Cause::IsRequired);
    }

    if changes.fraction_of_balance.is_empty() {
        return errs.add_final(path("fraction_of_balance"), Cause::IsRequired);
    }
    let Some(fraction) = parse_decimal(&changes.fraction_of_balance) else {
        return errs.add_final(path("fraction_of_balance"), Cause::IsNotValid);
    };
    if !fraction.is_positive() {
        return errs.add_final(path("fraction_of_balance"), Cause::MustBePositive);
    }
    if fraction > BigDecimal::from(1) {
        return errs.add_final(path("fraction_of_balance"), Cause::MustBeLte1);
    }

    match &changes.kind {
        None => return errs.add_final(path("kind"), Cause::IsRequired),
        Some(GovernanceTransferKind::OneOff { deliver_on }) => {
            if destination.is_metric_reward() {
                errs.add(path("destination_type"), Cause::IsNotValid);
            }
            if *deliver_on < 0 {
                return errs.add_final(path("one_off.deliver_on"), Cause::MustBePositiveOrZero);
            }
        }
        Some(GovernanceTransferKind::Recurring(recurring)) => {
            if recurring.end_epoch.is_some_and(|end| end < recurring.start_epoch) {
                return errs.add_final(path("recurring.end_epoch"), Cause::IsNotValid);
            }
            if let Some(strategy) = &recurring.dispatch_strategy {
                if !changes.destination.is_empty() {
                    errs.add(path("destination"), Cause::IsNotValid);
                }
                check_dispatch_strategy(
                    &mut errs,
                    changes.destination_type,
                    strategy,
                    &path("recurring.dispatch_strategy"),
                    &path("destination_type"),
                );
            }
        }
    }

    errs
}

fn check_cancel_transfer_proposal(change: &CancelTransferProposal) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(changes) = &change.changes else {
        return errs.add_final("cancel_transfer.changes", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "cancel_transfer.changes.transfer_id", &changes.transfer_id);

    errs
}

// ===== MARKET STATE =====

fn check_update_market_state(change: &UpdateMarketState) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(changes) = &change.changes else {
        return errs.add_final("update_market_state.changes", Cause::IsRequired);
    };

    if changes.market_id.is_empty() {
        return errs.add_final("update_market_state.changes.market_id", Cause::IsRequired);
    }
    require_vega_id(&mut errs, "update_market_state.changes.market_id", &changes.market_id);

    if changes.update_type == 0 {
        return errs.add_final("update_market_state.changes.update_type", Cause::IsRequired);
    }
    let Ok(update_type) = MarketStateUpdateType::try_from(changes.update_type) else {
        return errs.add_final("update_market_state.changes.update_type", Cause::IsNotValid);
    };

    match (&changes.price, update_type) {
        (Some(_), MarketStateUpdateType::Suspend | MarketStateUpdateType::Resume) => {
            return errs.add_final("update_market_state.changes.price", Cause::MustBeEmpty);
        }
        (Some(price), MarketStateUpdateType::Terminate) if !price.is_empty() => {
            if !parse_integer(price).is_some_and(|p| !p.is_negative()) {
                return errs.add_final("update_market_state.changes.price", Cause::IsNotValid);
            }
        }
        _ => {}
    }

    errs
}

// ===== REFERRAL & VOLUME DISCOUNT PROGRAMS =====

fn check_program_window(
    errs: &mut ErrorSet,
    root: &str,
    end_of_program_timestamp: i64,
    window_length: u64,
    enactment_timestamp: i64,
) {
    let end = format!("{root}.end_of_program_timestamp");
    if end_of_program_timestamp == 0 {
        errs.add(end, Cause::IsRequired);
    } else if end_of_program_timestamp < 0 {
        errs.add(end, Cause::MustBePositive);
    } else if end_of_program_timestamp < enactment_timestamp {
        errs.add(end, Cause::MustBeGreaterThanEnactmentTimestamp);
    }

    let window = format!("{root}.window_length");
    if window_length == 0 {
        errs.add(window, Cause::IsRequired);
    } else if window_length > MAX_PROGRAM_WINDOW_LENGTH {
        errs.add(window, Cause::MustBeAtMost(MAX_PROGRAM_WINDOW_LENGTH));
    }
}

fn check_update_referral_program(change: &UpdateReferralProgram, enactment: i64) -> ErrorSet {
    const ROOT: &str = "update_referral_program.changes";
    let mut errs = ErrorSet::new();
    let Some(changes) = &change.changes else {
        return errs.add_final(ROOT, Cause::IsRequired);
    };

    check_referral_program_changes(&mut errs, changes, enactment, ROOT);
    errs
}

fn check_referral_program_changes(
    errs: &mut ErrorSet,
    changes: &ReferralProgramChanges,
    enactment: i64,
    root: &str,
) {
    check_program_window(
        errs,
        root,
        changes.end_of_program_timestamp,
        changes.window_length,
        enactment,
    );

    let mut seen = HashSet::new();
    for (i, tier) in changes.benefit_tiers.iter().enumerate() {
        let path = format!("{root}.benefit_tiers.{i}");
        check_positive_integer(
            errs,
            format!("{path}.minimum_running_notional_taker_volume"),
            &tier.minimum_running_notional_taker_volume,
            Cause::IsNotValidNumber,
        );
        check_positive_integer(
            errs,
            format!("{path}.minimum_epochs"),
            &tier.minimum_epochs,
            Cause::IsNotValidNumber,
        );
        check_non_negative_decimal(
            errs,
            format!("{path}.referral_reward_factor"),
            &tier.referral_reward_factor,
        );
        check_non_negative_decimal(
            errs,
            format!("{path}.referral_discount_factor"),
            &tier.referral_discount_factor,
        );

        let key = (&tier.minimum_epochs, &tier.minimum_running_notional_taker_volume);
        if !seen.insert(key) {
            errs.add(path, "duplicate benefit tier");
        }
    }

    let mut seen = HashSet::new();
    for (i, tier) in changes.staking_tiers.iter().enumerate() {
        let path = format!("{root}.staking_tiers.{i}");
        check_positive_integer(
            errs,
            format!("{path}.minimum_staked_tokens"),
            &tier.minimum_staked_tokens,
            Cause::IsNotValidNumber,
        );

        let multiplier = format!("{path}.referral_reward_multiplier");
        if tier.referral_reward_multiplier.is_empty() {
            errs.add(multiplier, Cause::IsRequired);
        } else {
            match parse_decimal(&tier.referral_reward_multiplier) {
                None => errs.add(multiplier, Cause::IsNotValidNumber),
                Some(m) if m < BigDecimal::from(1) => errs.add(multiplier, Cause::MustBeGte1),
                Some(_) => {}
            }
        }

        if !seen.insert(&tier.minimum_staked_tokens) {
            errs.add(path, "duplicate staking tier");
        }
    }
}

fn check_update_volume_discount_program(
    change: &UpdateVolumeDiscountProgram,
    enactment: i64,
) -> ErrorSet {
    const ROOT: &str = "update_volume_discount_program.changes";
    let mut errs = ErrorSet::new();
    let Some(changes) = &change.changes else {
        return errs.add_final(ROOT, Cause::IsRequired);
    };

    check_program_window(
        &mut errs,
        ROOT,
        changes.end_of_program_timestamp,
        changes.window_length,
        enactment,
    );

    for (i, tier) in changes.benefit_tiers.iter().enumerate() {
        let path = format!("{ROOT}.benefit_tiers.{i}");
        check_positive_integer(
            &mut errs,
            format!("{path}.minimum_running_notional_taker_volume"),
            &tier.minimum_running_notional_taker_volume,
            Cause::IsNotValidNumber,
        );
        check_non_negative_decimal(
            &mut errs,
            format!("{path}.volume_discount_factor"),
            &tier.volume_discount_factor,
        );
    }

    errs
}

// ===== VOTES =====

pub fn check_vote_submission(cmd: Option<&VoteSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("vote_submission", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "vote_submission.proposal_id", &cmd.proposal_id);
    require_enum::<VoteValue>(&mut errs, "vote_submission.value", cmd.value);

    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{
        AssetDetails, BenefitTier, BuiltinAsset, DispatchStrategy, DistributionStrategy,
        EntityScope, DispatchMetric, GovernanceRecurringTransfer, IndividualScope, NewFreeform,
        NewTransferConfiguration, ProposalRationale, StakingTier,
        UpdateMarketStateConfiguration, UpdateSpotMarket,
    };

    const ID: &str = "e9982447fb4128f9968f9981612c5ea85d19b62058ec2636efc812dcbbc745ca";

    fn rationale() -> Option<ProposalRationale> {
        Some(ProposalRationale {
            title: "Raise the fee cap".into(),
            description: "Because fees are too low".into(),
        })
    }

    fn proposal(change: ProposalChange) -> ProposalSubmission {
        ProposalSubmission {
            reference: "ref".into(),
            terms: Some(ProposalTerms {
                closing_timestamp: 100,
                enactment_timestamp: 200,
                validation_timestamp: 0,
                change: Some(change),
            }),
            rationale: rationale(),
        }
    }

    fn network_parameter(key: &str, value: &str) -> ProposalChange {
        ProposalChange::UpdateNetworkParameter(UpdateNetworkParameter {
            changes: Some(NetworkParameter { key: key.into(), value: value.into() }),
        })
    }

    fn treasury_transfer() -> NewTransferConfiguration {
        NewTransferConfiguration {
            source_type: AccountType::NetworkTreasury.value(),
            source: String::new(),
            transfer_type: GovernanceTransferType::AllOrNothing.value(),
            amount: "1000".into(),
            asset: ID.into(),
            fraction_of_balance: "0.5".into(),
            destination_type: AccountType::General.value(),
            destination: ID.into(),
            kind: Some(GovernanceTransferKind::OneOff { deliver_on: 0 }),
        }
    }

    fn new_transfer(changes: NewTransferConfiguration) -> ProposalSubmission {
        proposal(ProposalChange::NewTransfer(NewTransfer { changes: Some(changes) }))
    }

    #[test]
    fn test_missing_commands_are_final() {
        assert_eq!(check_proposal_submission(None).render(), "proposal_submission (is required)");
        assert_eq!(check_vote_submission(None).render(), "vote_submission (is required)");
    }

    #[test]
    fn test_empty_vote_accumulates() {
        let errs = check_vote_submission(Some(&VoteSubmission::default()));

        assert_eq!(
            errs.render(),
            "vote_submission.proposal_id (is required), vote_submission.value (is required)"
        );
    }

    #[test]
    fn test_vote_value_out_of_range() {
        let cmd = VoteSubmission { proposal_id: ID.into(), value: 9 };
        assert_eq!(
            check_vote_submission(Some(&cmd)).render(),
            "vote_submission.value (is not a valid value)"
        );
    }

    #[test]
    fn test_valid_network_parameter_proposal() {
        let cmd = proposal(network_parameter("market.fee.cap", "0.1"));
        assert!(check_proposal_submission(Some(&cmd)).is_empty());
    }

    #[test]
    fn test_missing_terms_is_final() {
        let cmd = ProposalSubmission { rationale: None, ..Default::default() };

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.rationale (is required), proposal_submission.terms (is required)"
        );
    }

    #[test]
    fn test_blank_rationale() {
        let mut cmd = proposal(network_parameter("k", "v"));
        cmd.rationale = Some(ProposalRationale { title: " \n".into(), description: "\t".into() });

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.rationale.description (is required), \
             proposal_submission.rationale.title (is required)"
        );
    }

    #[test]
    fn test_closing_after_enactment() {
        let mut cmd = proposal(network_parameter("k", "v"));
        if let Some(terms) = cmd.terms.as_mut() {
            terms.closing_timestamp = 300;
        }

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.closing_timestamp (cannot be after enactment time)"
        );
    }

    #[test]
    fn test_freeform_has_no_enactment() {
        let cmd = proposal(ProposalChange::NewFreeform(NewFreeform {}));
        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.enactment_timestamp (is not supported)"
        );
    }

    #[test]
    fn test_missing_change() {
        let mut cmd = proposal(network_parameter("k", "v"));
        if let Some(terms) = cmd.terms.as_mut() {
            terms.change = None;
        }

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change (is required)"
        );
    }

    #[test]
    fn test_unknown_change_is_not_valid() {
        let cmd = proposal(ProposalChange::Unknown { tag: 150 });

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change (is not a valid value)"
        );
    }

    #[test]
    fn test_market_paths_are_prefixed() {
        let cmd = proposal(ProposalChange::UpdateSpotMarket(UpdateSpotMarket {
            market_id: ID.into(),
            changes: None,
        }));

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change.update_spot_market.changes (is required)"
        );
    }

    #[test]
    fn test_network_parameter_paths_are_prefixed() {
        let cmd = proposal(network_parameter("", ""));

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change.update_network_parameter.changes.key (is required), \
             proposal_submission.terms.change.update_network_parameter.changes.value (is required)"
        );
    }

    #[test]
    fn test_new_asset_needs_validation_and_source() {
        let mut cmd = proposal(ProposalChange::NewAsset(NewAsset {
            changes: Some(AssetDetails {
                name: "Tether".into(),
                symbol: "USDT".into(),
                decimals: 6,
                quantum: "1".into(),
                source: None,
            }),
        }));
        if let Some(terms) = cmd.terms.as_mut() {
            terms.validation_timestamp = 50;
        }

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change.new_asset.changes.source (is required)"
        );
    }

    #[test]
    fn test_builtin_asset_faucet_amount() {
        let mut cmd = proposal(ProposalChange::NewAsset(NewAsset {
            changes: Some(AssetDetails {
                name: "Fake".into(),
                symbol: "FAKE".into(),
                decimals: 18,
                quantum: "0".into(),
                source: Some(AssetSource::BuiltinAsset(BuiltinAsset {
                    max_faucet_amount_mint: "lots".into(),
                })),
            }),
        }));
        if let Some(terms) = cmd.terms.as_mut() {
            terms.validation_timestamp = 0;
        }

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.validation_timestamp (must be positive), \
             proposal_submission.terms.change.new_asset.changes.quantum (must be positive), \
             proposal_submission.terms.change.new_asset.changes.source.builtin_asset.max_faucet_amount_mint (is not a valid number)"
        );
    }

    #[test]
    fn test_valid_treasury_transfer() {
        let cmd = new_transfer(treasury_transfer());
        assert!(check_proposal_submission(Some(&cmd)).is_empty());
    }

    #[test]
    fn test_transfer_source_must_be_a_pool() {
        let cmd = new_transfer(NewTransferConfiguration {
            source_type: AccountType::General.value(),
            ..treasury_transfer()
        });

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change.new_transfer.changes.source_type (is not a valid value)"
        );
    }

    #[test]
    fn test_transfer_fraction_above_one_is_final() {
        let cmd = new_transfer(NewTransferConfiguration {
            fraction_of_balance: "1.5".into(),
            kind: None,
            ..treasury_transfer()
        });

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change.new_transfer.changes.fraction_of_balance \
             (must be less than or equal to 1)"
        );
    }

    #[test]
    fn test_recurring_transfer_to_reward_pool() {
        let cmd = new_transfer(NewTransferConfiguration {
            destination_type: AccountType::RewardMakerPaidFees.value(),
            destination: String::new(),
            kind: Some(GovernanceTransferKind::Recurring(GovernanceRecurringTransfer {
                start_epoch: 1,
                end_epoch: None,
                dispatch_strategy: Some(DispatchStrategy {
                    asset_for_metric: ID.into(),
                    metric: DispatchMetric::MakerFeesPaid.value(),
                    entity_scope: EntityScope::Individuals.value(),
                    individual_scope: IndividualScope::All.value(),
                    window_length: 1,
                    distribution_strategy: DistributionStrategy::ProRata.value(),
                    ..Default::default()
                }),
            })),
            ..treasury_transfer()
        });
        assert!(check_proposal_submission(Some(&cmd)).is_empty());
    }

    #[test]
    fn test_one_off_transfer_to_reward_pool() {
        let cmd = new_transfer(NewTransferConfiguration {
            destination_type: AccountType::RewardLpReceivedFees.value(),
            destination: String::new(),
            ..treasury_transfer()
        });

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change.new_transfer.changes.destination_type (is not a valid value)"
        );
    }

    #[test]
    fn test_market_state_price_only_on_terminate() {
        let cmd = proposal(ProposalChange::UpdateMarketState(UpdateMarketState {
            changes: Some(UpdateMarketStateConfiguration {
                market_id: ID.into(),
                update_type: MarketStateUpdateType::Suspend.value(),
                price: Some("100".into()),
            }),
        }));

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change.update_market_state.changes.price (must be empty)"
        );
    }

    #[test]
    fn test_referral_program_rules() {
        let tier = BenefitTier {
            minimum_running_notional_taker_volume: "1000".into(),
            minimum_epochs: "2".into(),
            referral_reward_factor: "0.1".into(),
            referral_discount_factor: "0.05".into(),
        };
        let cmd = proposal(ProposalChange::UpdateReferralProgram(UpdateReferralProgram {
            changes: Some(ReferralProgramChanges {
                end_of_program_timestamp: 150,
                window_length: 101,
                benefit_tiers: vec![tier.clone(), tier],
                staking_tiers: vec![StakingTier {
                    minimum_staked_tokens: "10".into(),
                    referral_reward_multiplier: "0.5".into(),
                }],
            }),
        }));

        assert_eq!(
            check_proposal_submission(Some(&cmd)).render(),
            "proposal_submission.terms.change.update_referral_program.changes.end_of_program_timestamp \
             (must be greater than proposal_submission.terms.enactment_timestamp), \
             proposal_submission.terms.change.update_referral_program.changes.window_length (must be at most 100), \
             proposal_submission.terms.change.update_referral_program.changes.benefit_tiers.1 (duplicate benefit tier), \
             proposal_submission.terms.change.update_referral_program.changes.staking_tiers.0.referral_reward_multiplier \
             (must be greater than or equal to 1)"
        );
    }
}
