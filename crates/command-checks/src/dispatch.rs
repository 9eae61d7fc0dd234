//! # Command Dispatch
//!
//! Routes a decoded command to its check. The match over [`Command`] is
//! exhaustive: adding a variant to the command table without a check is a
//! compile error. [`Command::Unknown`] is a real, reachable rejection.

use crate::checks::{
    amm, governance, liquidity, orders, referral, staking, transfers, validators, vaults,
};
use crate::errors::{Cause, ErrorSet};
use shared_types::{Command, InputData};

/// Path of the nonce inside the transaction envelope.
pub const NONCE_PATH: &str = "tx.input_data.nonce";

/// Path of the command inside the transaction envelope.
pub const COMMAND_PATH: &str = "tx.input_data.command";

/// Validate one command. Paths are rooted at the command's own name.
pub fn check_command(command: &Command) -> ErrorSet {
    match command {
        Command::OrderSubmission(cmd) => orders::check_order_submission(Some(cmd)),
        Command::OrderCancellation(cmd) => orders::check_order_cancellation(Some(cmd)),
        Command::OrderAmendment(cmd) => orders::check_order_amendment(Some(cmd)),
        Command::WithdrawSubmission(cmd) => transfers::check_withdraw_submission(Some(cmd)),
        Command::ProposalSubmission(cmd) => governance::check_proposal_submission(Some(cmd)),
        Command::VoteSubmission(cmd) => governance::check_vote_submission(Some(cmd)),
        Command::LiquidityProvisionSubmission(cmd) => {
            liquidity::check_liquidity_provision_submission(Some(cmd))
        }
        Command::DelegateSubmission(cmd) => staking::check_delegate_submission(Some(cmd)),
        Command::UndelegateSubmission(cmd) => staking::check_undelegate_submission(Some(cmd)),
        Command::LiquidityProvisionCancellation(cmd) => {
            liquidity::check_liquidity_provision_cancellation(Some(cmd))
        }
        Command::LiquidityProvisionAmendment(cmd) => {
            liquidity::check_liquidity_provision_amendment(Some(cmd))
        }
        Command::Transfer(cmd) => transfers::check_transfer(Some(cmd)),
        Command::CancelTransfer(cmd) => transfers::check_cancel_transfer(Some(cmd)),
        Command::AnnounceNode(cmd) => validators::check_announce_node(Some(cmd)),
        Command::BatchMarketInstructions(cmd) => orders::check_batch_market_instructions(Some(cmd)),
        Command::StopOrdersSubmission(cmd) => orders::check_stop_orders_submission(Some(cmd)),
        Command::StopOrdersCancellation(cmd) => orders::check_stop_orders_cancellation(Some(cmd)),
        Command::CreateReferralSet(cmd) => referral::check_create_referral_set(Some(cmd)),
        Command::UpdateReferralSet(cmd) => referral::check_update_referral_set(Some(cmd)),
        Command::ApplyReferralCode(cmd) => referral::check_apply_referral_code(Some(cmd)),
        Command::UpdateMarginMode(cmd) => orders::check_update_margin_mode(Some(cmd)),
        Command::JoinTeam(cmd) => referral::check_join_team(Some(cmd)),
        Command::UpdatePartyProfile(cmd) => referral::check_update_party_profile(Some(cmd)),
        Command::SubmitAmm(cmd) => amm::check_submit_amm(Some(cmd)),
        Command::AmendAmm(cmd) => amm::check_amend_amm(Some(cmd)),
        Command::CancelAmm(cmd) => amm::check_cancel_amm(Some(cmd)),
        Command::CreateVault(cmd) => vaults::check_create_vault(Some(cmd)),
        Command::UpdateVault(cmd) => vaults::check_update_vault(Some(cmd)),
        Command::DepositToVault(cmd) => vaults::check_deposit_to_vault(Some(cmd)),
        Command::WithdrawFromVault(cmd) => vaults::check_withdraw_from_vault(Some(cmd)),
        Command::ChangeVaultOwnership(cmd) => vaults::check_change_vault_ownership(Some(cmd)),
        Command::NodeVote(cmd) => validators::check_node_vote(Some(cmd)),
        Command::NodeSignature(cmd) => validators::check_node_signature(Some(cmd)),
        Command::ChainEvent(cmd) => validators::check_chain_event(Some(cmd)),
        Command::KeyRotateSubmission(cmd) => validators::check_key_rotate_submission(Some(cmd)),
        Command::StateVariableProposal(cmd) => {
            validators::check_state_variable_proposal(Some(cmd))
        }
        Command::ValidatorHeartbeat(cmd) => validators::check_validator_heartbeat(Some(cmd)),
        Command::EthereumKeyRotateSubmission(cmd) => {
            validators::check_ethereum_key_rotate_submission(Some(cmd))
        }
        Command::ProtocolUpgradeProposal(cmd) => {
            validators::check_protocol_upgrade_proposal(Some(cmd))
        }
        Command::IssueSignatures(cmd) => validators::check_issue_signatures(Some(cmd)),
        Command::OracleDataSubmission(cmd) => validators::check_oracle_data_submission(Some(cmd)),
        Command::Unknown { .. } => ErrorSet::new().add_final(COMMAND_PATH, Cause::IsNotSupported),
    }
}

/// Validate a decoded envelope: the nonce, then the command it carries.
pub fn check_input_data(input: &InputData) -> ErrorSet {
    let mut errs = ErrorSet::new();

    if input.nonce == 0 {
        errs.add(NONCE_PATH, Cause::MustBePositive);
    }

    let Some(command) = &input.command else {
        return errs.add_final(COMMAND_PATH, Cause::IsRequired);
    };
    errs.merge(check_command(command));

    errs
}
