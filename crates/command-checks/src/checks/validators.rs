//! # Validator Command Checks
//!
//! Commands only validator nodes submit: announcements, votes and
//! signatures on bridge events, key rotations, heartbeats, upgrades, state
//! variables and oracle data.

use super::{require_enum, require_ethereum_address, require_public_key, require_vega_id};
use crate::errors::{Cause, ErrorSet, PropertyPath};
use crate::ids::{is_ethereum_address, is_hex};
use crate::numbers::{check_non_negative_decimal, check_positive_integer, parse_decimal};
use shared_types::{
    AnnounceNode, ChainEvent, ChainEventKind, EthereumKeyRotateSubmission, IssueSignatures,
    KeyRotateSubmission, NodeSignature, NodeSignatureKind, NodeVote, NodeVoteType,
    OracleDataSubmission, OracleSource, ProtocolUpgradeProposal, Signature,
    StateVariableProposal, ValidatorHeartbeat,
};

// ===== SHARED FIELD RULES =====

/// A signature embedded in a command: present, with bytes and an algorithm.
fn require_signature(errs: &mut ErrorSet, path: &str, signature: Option<&Signature>) {
    let path = PropertyPath::from(path);
    let Some(signature) = signature else {
        errs.add(path, Cause::IsRequired);
        return;
    };

    if signature.value.is_empty() {
        errs.add(path.child("value"), Cause::IsRequired);
    }
    if signature.algo.is_empty() {
        errs.add(path.child("algo"), Cause::IsRequired);
    }
}

fn optional_ethereum_address(errs: &mut ErrorSet, path: &str, value: &str) {
    if !value.is_empty() && !is_ethereum_address(value) {
        errs.add(path, Cause::IsNotValidEthereumAddress);
    }
}

// ===== NODE LIFECYCLE =====

pub fn check_announce_node(cmd: Option<&AnnounceNode>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("announce_node", Cause::IsRequired);
    };

    require_public_key(&mut errs, "announce_node.vega_pub_key", &cmd.vega_pub_key);
    require_vega_id(&mut errs, "announce_node.id", &cmd.id);
    require_ethereum_address(&mut errs, "announce_node.ethereum_address", &cmd.ethereum_address);
    if cmd.chain_pub_key.is_empty() {
        errs.add("announce_node.chain_pub_key", Cause::IsRequired);
    }
    require_signature(
        &mut errs,
        "announce_node.ethereum_signature",
        cmd.ethereum_signature.as_ref(),
    );
    require_signature(&mut errs, "announce_node.vega_signature", cmd.vega_signature.as_ref());
    if cmd.vega_pub_key_index == 0 {
        errs.add("announce_node.vega_pub_key_index", Cause::IsRequired);
    }
    optional_ethereum_address(
        &mut errs,
        "announce_node.submitter_address",
        &cmd.submitter_address,
    );

    errs
}

pub fn check_validator_heartbeat(cmd: Option<&ValidatorHeartbeat>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("validator_heartbeat", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "validator_heartbeat.node_id", &cmd.node_id);
    require_signature(
        &mut errs,
        "validator_heartbeat.ethereum_signature",
        cmd.ethereum_signature.as_ref(),
    );
    require_signature(
        &mut errs,
        "validator_heartbeat.vega_signature",
        cmd.vega_signature.as_ref(),
    );
    if cmd.message.is_empty() {
        errs.add("validator_heartbeat.message", Cause::IsRequired);
    }

    errs
}

pub fn check_protocol_upgrade_proposal(cmd: Option<&ProtocolUpgradeProposal>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("protocol_upgrade_proposal", Cause::IsRequired);
    };

    if cmd.upgrade_block_height == 0 {
        errs.add("protocol_upgrade_proposal.upgrade_block_height", Cause::MustBePositive);
    }
    if cmd.vega_release_tag.is_empty() {
        errs.add("protocol_upgrade_proposal.vega_release_tag", Cause::IsRequired);
    }

    errs
}

// ===== KEY ROTATION =====

pub fn check_key_rotate_submission(cmd: Option<&KeyRotateSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("key_rotate_submission", Cause::IsRequired);
    };

    if cmd.new_pub_key_index == 0 {
        errs.add("key_rotate_submission.new_pub_key_index", Cause::IsRequired);
    }
    if cmd.target_block == 0 {
        errs.add("key_rotate_submission.target_block", Cause::IsRequired);
    }
    require_public_key(&mut errs, "key_rotate_submission.new_pub_key", &cmd.new_pub_key);
    if cmd.current_pub_key_hash.is_empty() {
        errs.add("key_rotate_submission.current_pub_key_hash", Cause::IsRequired);
    } else if !is_hex(&cmd.current_pub_key_hash) {
        errs.add("key_rotate_submission.current_pub_key_hash", Cause::ShouldBeHexEncoded);
    }

    errs
}

pub fn check_ethereum_key_rotate_submission(
    cmd: Option<&EthereumKeyRotateSubmission>,
) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("ethereum_key_rotate_submission", Cause::IsRequired);
    };

    require_ethereum_address(
        &mut errs,
        "ethereum_key_rotate_submission.target_address",
        &cmd.target_address,
    );
    require_ethereum_address(
        &mut errs,
        "ethereum_key_rotate_submission.current_address",
        &cmd.current_address,
    );
    if cmd.pub_key.is_empty() {
        errs.add("ethereum_key_rotate_submission.pub_key", Cause::IsRequired);
    }
    if cmd.target_block == 0 {
        errs.add("ethereum_key_rotate_submission.target_block", Cause::IsRequired);
    }
    optional_ethereum_address(
        &mut errs,
        "ethereum_key_rotate_submission.submitter_address",
        &cmd.submitter_address,
    );
    require_signature(
        &mut errs,
        "ethereum_key_rotate_submission.ethereum_signature",
        cmd.ethereum_signature.as_ref(),
    );

    errs
}

// ===== BRIDGE EVENTS & SIGNATURES =====

pub fn check_node_vote(cmd: Option<&NodeVote>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("node_vote", Cause::IsRequired);
    };

    if cmd.reference.is_empty() {
        errs.add("node_vote.reference", Cause::IsRequired);
    }
    require_enum::<NodeVoteType>(&mut errs, "node_vote.type", cmd.vote_type);

    errs
}

pub fn check_node_signature(cmd: Option<&NodeSignature>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("node_signature", Cause::IsRequired);
    };

    if cmd.id.is_empty() {
        errs.add("node_signature.id", Cause::IsRequired);
    }
    if cmd.sig.is_empty() {
        errs.add("node_signature.sig", Cause::IsRequired);
    }
    require_enum::<NodeSignatureKind>(&mut errs, "node_signature.kind", cmd.kind);

    errs
}

pub fn check_chain_event(cmd: Option<&ChainEvent>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("chain_event", Cause::IsRequired);
    };

    if cmd.tx_id.is_empty() {
        errs.add("chain_event.tx_id", Cause::IsRequired);
    }
    if cmd.nonce == 0 {
        errs.add("chain_event.nonce", Cause::IsRequired);
    }

    match &cmd.event {
        None => return errs.add_final("chain_event.event", Cause::IsRequired),
        Some(ChainEventKind::BuiltinDeposit(deposit)) => {
            require_vega_id(
                &mut errs,
                "chain_event.builtin_deposit.vega_asset_id",
                &deposit.vega_asset_id,
            );
            require_public_key(&mut errs, "chain_event.builtin_deposit.party_id", &deposit.party_id);
            check_positive_integer(
                &mut errs,
                "chain_event.builtin_deposit.amount",
                &deposit.amount,
                Cause::IsNotValidNumber,
            );
        }
        Some(ChainEventKind::StakeDeposited(deposit)) => {
            require_ethereum_address(
                &mut errs,
                "chain_event.stake_deposited.ethereum_address",
                &deposit.ethereum_address,
            );
            require_public_key(
                &mut errs,
                "chain_event.stake_deposited.vega_public_key",
                &deposit.vega_public_key,
            );
            check_positive_integer(
                &mut errs,
                "chain_event.stake_deposited.amount",
                &deposit.amount,
                Cause::IsNotValidNumber,
            );
            if deposit.block_time <= 0 {
                errs.add("chain_event.stake_deposited.block_time", Cause::MustBePositive);
            }
        }
    }

    errs
}

/// Only multisig signer changes are issued on request.
pub fn check_issue_signatures(cmd: Option<&IssueSignatures>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("issue_signatures", Cause::IsRequired);
    };

    require_ethereum_address(&mut errs, "issue_signatures.submitter", &cmd.submitter);
    require_vega_id(
        &mut errs,
        "issue_signatures.validator_node_id",
        &cmd.validator_node_id,
    );
    if let Some(kind) = require_enum::<NodeSignatureKind>(&mut errs, "issue_signatures.kind", cmd.kind)
    {
        if !matches!(
            kind,
            NodeSignatureKind::Erc20MultisigSignerAdded | NodeSignatureKind::Erc20MultisigSignerRemoved
        ) {
            errs.add("issue_signatures.kind", Cause::IsNotValid);
        }
    }

    errs
}

// ===== STATE VARIABLES & ORACLES =====

pub fn check_state_variable_proposal(cmd: Option<&StateVariableProposal>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("state_variable_proposal", Cause::IsRequired);
    };
    let Some(proposal) = &cmd.proposal else {
        return errs.add_final("state_variable_proposal.proposal", Cause::IsRequired);
    };

    if proposal.state_var_id.is_empty() {
        errs.add("state_variable_proposal.proposal.state_var_id", Cause::IsRequired);
    }
    if proposal.event_id.is_empty() {
        errs.add("state_variable_proposal.proposal.event_id", Cause::IsRequired);
    }
    if proposal.kvb.is_empty() {
        errs.add("state_variable_proposal.proposal.kvb", Cause::IsRequired);
    }

    for (i, bundle) in proposal.kvb.iter().enumerate() {
        let path = PropertyPath::from("state_variable_proposal.proposal.kvb").index(i);
        if bundle.key.is_empty() {
            errs.add(path.child("key"), Cause::IsRequired);
        }
        check_non_negative_decimal(&mut errs, path.child("tolerance"), &bundle.tolerance);
        for (j, value) in bundle.values.iter().enumerate() {
            if parse_decimal(value).is_none() {
                errs.add(path.child("values").index(j), Cause::IsNotValidNumber);
            }
        }
    }

    errs
}

pub fn check_oracle_data_submission(cmd: Option<&OracleDataSubmission>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("oracle_data_submission", Cause::IsRequired);
    };

    let source = require_enum::<OracleSource>(&mut errs, "oracle_data_submission.source", cmd.source);

    if cmd.payload.is_empty() {
        errs.add("oracle_data_submission.payload", Cause::IsRequired);
    } else if source == Some(OracleSource::Json)
        && serde_json::from_slice::<serde_json::Value>(&cmd.payload).is_err()
    {
        errs.add("oracle_data_submission.payload", Cause::IsNotValid);
    }

    errs
}
