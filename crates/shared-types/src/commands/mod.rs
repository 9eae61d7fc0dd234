//! # Commands
//!
//! The closed set of commands a transaction may carry.
//!
//! [`command_table!`] is the single registry: it generates the [`Command`]
//! sum type, the [`CommandKind`] discriminant with its wire tag and error
//! path root, and the serde hooks a [`BodyCodec`] uses to move a command
//! body to and from bytes. Adding a command is one line in the table.

pub mod amm;
pub mod governance;
pub mod liquidity;
pub mod markets;
pub mod orders;
pub mod referral;
pub mod staking;
pub mod transfers;
pub mod validators;
pub mod vaults;

pub use amm::*;
pub use governance::*;
pub use liquidity::*;
pub use markets::*;
pub use orders::*;
pub use referral::*;
pub use staking::*;
pub use transfers::*;
pub use validators::*;
pub use vaults::*;

use serde::{de::DeserializeOwned, Serialize};

/// Serialization of a single command body.
///
/// Implemented by the decoding adapter; the generated code only picks the
/// concrete message type for a tag.
pub trait BodyCodec {
    /// Failure type of the codec.
    type Error;

    /// Decode a command body. An empty body is the zero-valued message.
    fn decode<T: DeserializeOwned + Default>(&self, body: &[u8]) -> Result<T, Self::Error>;

    /// Encode a command body.
    fn encode<T: Serialize>(&self, value: &T) -> Result<Vec<u8>, Self::Error>;
}

macro_rules! command_table {
    ($( $tag:literal => $variant:ident($ty:ty), $root:literal; )+) => {
        /// The single command carried by a transaction.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum Command {
            $( $variant($ty), )+
            /// A tag this node does not recognise; rejected by the checks.
            Unknown {
                /// Wire tag as received.
                tag: u32,
            },
        }

        /// Discriminant of a known [`Command`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum CommandKind {
            $( $variant, )+
        }

        impl CommandKind {
            /// Every known kind, in tag order.
            pub const ALL: &'static [CommandKind] = &[$(CommandKind::$variant),+];

            /// Wire tag.
            pub const fn tag(self) -> u32 {
                match self {
                    $(CommandKind::$variant => $tag,)+
                }
            }

            /// Root of every error path reported for this command.
            pub const fn root(self) -> &'static str {
                match self {
                    $(CommandKind::$variant => $root,)+
                }
            }

            /// Kind for a wire tag, if known.
            pub const fn from_tag(tag: u32) -> Option<Self> {
                match tag {
                    $($tag => Some(CommandKind::$variant),)+
                    _ => None,
                }
            }
        }

        impl Command {
            /// Kind of a known command; `None` for [`Command::Unknown`].
            pub const fn kind(&self) -> Option<CommandKind> {
                match self {
                    $(Command::$variant(_) => Some(CommandKind::$variant),)+
                    Command::Unknown { .. } => None,
                }
            }

            /// Wire tag, including unknown ones.
            pub const fn tag(&self) -> u32 {
                match self {
                    $(Command::$variant(_) => $tag,)+
                    Command::Unknown { tag } => *tag,
                }
            }

            /// Decode the body of a command whose tag is known.
            pub fn decode_body<C: BodyCodec>(
                kind: CommandKind,
                body: &[u8],
                codec: &C,
            ) -> Result<Command, C::Error> {
                match kind {
                    $(CommandKind::$variant => codec.decode::<$ty>(body).map(Command::$variant),)+
                }
            }

            /// Encode the body; unknown commands have none.
            pub fn encode_body<C: BodyCodec>(&self, codec: &C) -> Result<Vec<u8>, C::Error> {
                match self {
                    $(Command::$variant(inner) => codec.encode(inner),)+
                    Command::Unknown { .. } => Ok(Vec::new()),
                }
            }
        }
    };
}

command_table! {
    1001 => OrderSubmission(OrderSubmission), "order_submission";
    1002 => OrderCancellation(OrderCancellation), "order_cancellation";
    1003 => OrderAmendment(OrderAmendment), "order_amendment";
    1004 => WithdrawSubmission(WithdrawSubmission), "withdraw_submission";
    1005 => ProposalSubmission(ProposalSubmission), "proposal_submission";
    1006 => VoteSubmission(VoteSubmission), "vote_submission";
    1007 => LiquidityProvisionSubmission(LiquidityProvisionSubmission), "liquidity_provision_submission";
    1008 => DelegateSubmission(DelegateSubmission), "delegate_submission";
    1009 => UndelegateSubmission(UndelegateSubmission), "undelegate_submission";
    1010 => LiquidityProvisionCancellation(LiquidityProvisionCancellation), "liquidity_provision_cancellation";
    1011 => LiquidityProvisionAmendment(LiquidityProvisionAmendment), "liquidity_provision_amendment";
    1012 => Transfer(Transfer), "transfer_instruction";
    1013 => CancelTransfer(CancelTransfer), "cancel_transfer";
    1014 => AnnounceNode(AnnounceNode), "announce_node";
    1015 => BatchMarketInstructions(BatchMarketInstructions), "batch_market_instructions";
    1016 => StopOrdersSubmission(StopOrdersSubmission), "stop_orders_submission";
    1017 => StopOrdersCancellation(StopOrdersCancellation), "stop_orders_cancellation";
    1018 => CreateReferralSet(CreateReferralSet), "create_referral_set";
    1019 => UpdateReferralSet(UpdateReferralSet), "update_referral_set";
    1020 => ApplyReferralCode(ApplyReferralCode), "apply_referral_code";
    1021 => UpdateMarginMode(UpdateMarginMode), "update_margin_mode";
    1022 => JoinTeam(JoinTeam), "join_team";
    1024 => UpdatePartyProfile(UpdatePartyProfile), "update_party_profile";
    1025 => SubmitAmm(SubmitAmm), "submit_amm";
    1026 => AmendAmm(AmendAmm), "amend_amm";
    1027 => CancelAmm(CancelAmm), "cancel_amm";
    1028 => CreateVault(CreateVault), "create_vault";
    1029 => UpdateVault(UpdateVault), "update_vault";
    1030 => DepositToVault(DepositToVault), "deposit_to_vault";
    1031 => WithdrawFromVault(WithdrawFromVault), "withdraw_from_vault";
    1032 => ChangeVaultOwnership(ChangeVaultOwnership), "change_vault_ownership";
    2002 => NodeVote(NodeVote), "node_vote";
    2003 => NodeSignature(NodeSignature), "node_signature";
    2004 => ChainEvent(ChainEvent), "chain_event";
    2005 => KeyRotateSubmission(KeyRotateSubmission), "key_rotate_submission";
    2006 => StateVariableProposal(StateVariableProposal), "state_variable_proposal";
    2007 => ValidatorHeartbeat(ValidatorHeartbeat), "validator_heartbeat";
    2008 => EthereumKeyRotateSubmission(EthereumKeyRotateSubmission), "ethereum_key_rotate_submission";
    2009 => ProtocolUpgradeProposal(ProtocolUpgradeProposal), "protocol_upgrade_proposal";
    2010 => IssueSignatures(IssueSignatures), "issue_signatures";
    3001 => OracleDataSubmission(OracleDataSubmission), "oracle_data_submission";
}
