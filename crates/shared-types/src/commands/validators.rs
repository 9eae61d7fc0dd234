//! Commands only validator nodes submit.

use crate::entities::Signature;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

/// Register a node as a validator candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnnounceNode {
    pub vega_pub_key: String,
    pub ethereum_address: String,
    pub chain_pub_key: String,
    pub info_url: String,
    pub country: String,
    pub id: String,
    pub name: String,
    pub avatar_url: String,
    pub vega_pub_key_index: u32,
    pub from_epoch: u64,
    pub ethereum_signature: Option<Signature>,
    pub vega_signature: Option<Signature>,
    pub submitter_address: String,
}

/// Vote that an external event happened.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeVote {
    pub reference: String,
    /// [`crate::NodeVoteType`]
    pub vote_type: i32,
}

/// A validator's signature on a bridge action.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeSignature {
    pub id: String,
    #[serde_as(as = "Bytes")]
    pub sig: Vec<u8>,
    /// [`crate::NodeSignatureKind`]
    pub kind: i32,
}

/// An event observed on an external chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChainEvent {
    pub tx_id: String,
    pub nonce: u64,
    pub event: Option<ChainEventKind>,
}

/// Supported external events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainEventKind {
    BuiltinDeposit(BuiltinDeposit),
    StakeDeposited(StakeDeposited),
}

/// Faucet deposit of a builtin asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuiltinDeposit {
    pub vega_asset_id: String,
    pub party_id: String,
    pub amount: String,
}

/// Tokens staked on the staking bridge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StakeDeposited {
    pub ethereum_address: String,
    pub vega_public_key: String,
    pub amount: String,
    pub block_time: i64,
}

/// Rotate a validator's Vega key at a future block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyRotateSubmission {
    pub new_pub_key_index: u32,
    pub target_block: u64,
    pub new_pub_key: String,
    pub current_pub_key_hash: String,
}

/// Rotate a validator's Ethereum key at a future block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EthereumKeyRotateSubmission {
    pub target_address: String,
    pub pub_key: String,
    pub target_block: u64,
    pub current_address: String,
    pub submitter_address: String,
    pub ethereum_signature: Option<Signature>,
}

/// Liveness proof signed with both validator keys.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidatorHeartbeat {
    pub node_id: String,
    pub ethereum_signature: Option<Signature>,
    pub vega_signature: Option<Signature>,
    pub message: String,
}

/// Propose a binary upgrade at a block height.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProtocolUpgradeProposal {
    pub upgrade_block_height: u64,
    pub vega_release_tag: String,
}

/// Ask validators to sign a multisig signer change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IssueSignatures {
    pub submitter: String,
    /// [`crate::NodeSignatureKind`]
    pub kind: i32,
    pub validator_node_id: String,
}

/// A validator's computed value for a shared state variable.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateVariableProposal {
    pub proposal: Option<StateValueProposal>,
}

/// Values proposed for one state variable and event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateValueProposal {
    pub state_var_id: String,
    pub event_id: String,
    pub kvb: Vec<KeyValueBundle>,
}

/// One named value with its tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyValueBundle {
    pub key: String,
    /// Decimal tolerance for consensus on the value.
    pub tolerance: String,
    /// Decimal values; empty means not computed.
    pub values: Vec<String>,
}

/// Data pushed by an external oracle.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OracleDataSubmission {
    /// [`crate::OracleSource`]
    pub source: i32,
    #[serde_as(as = "Bytes")]
    pub payload: Vec<u8>,
}
