//! Governance proposals and votes.

use crate::commands::markets::{NewMarket, NewSpotMarket, UpdateMarket, UpdateSpotMarket};
use crate::commands::transfers::DispatchStrategy;
use crate::wire;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::{serde_as, Bytes};

/// Submit a governance proposal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProposalSubmission {
    pub reference: String,
    pub terms: Option<ProposalTerms>,
    pub rationale: Option<ProposalRationale>,
}

/// Human readable justification shown to voters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProposalRationale {
    pub title: String,
    pub description: String,
}

/// Timeline and content of a proposal. Timestamps are Unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProposalTerms {
    pub closing_timestamp: i64,
    pub enactment_timestamp: i64,
    pub validation_timestamp: i64,
    pub change: Option<ProposalChange>,
}

macro_rules! proposal_change_table {
    ($( $tag:literal => $variant:ident($ty:ty), $name:literal; )+) => {
        /// What the proposal changes once enacted.
        ///
        /// Travels as `{ tag: u32, body: bytes }` like a command inside input
        /// data, so a change type this node does not know decodes to
        /// [`ProposalChange::Unknown`] instead of failing the whole command.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum ProposalChange {
            $( $variant($ty), )+
            /// A tag this node does not recognise; rejected by the checks.
            Unknown {
                /// Wire tag as received.
                tag: u32,
            },
        }

        impl ProposalChange {
            /// Property name of the change, as used in error paths.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(ProposalChange::$variant(_) => $name,)+
                    ProposalChange::Unknown { .. } => "unknown",
                }
            }

            /// Wire tag, including unknown ones.
            pub const fn tag(&self) -> u32 {
                match self {
                    $(ProposalChange::$variant(_) => $tag,)+
                    ProposalChange::Unknown { tag } => *tag,
                }
            }

            fn encode_body(&self) -> bincode::Result<Vec<u8>> {
                match self {
                    $(ProposalChange::$variant(inner) => wire::encode(inner),)+
                    ProposalChange::Unknown { .. } => Ok(Vec::new()),
                }
            }

            fn decode_body(tag: u32, body: &[u8]) -> bincode::Result<Self> {
                match tag {
                    $($tag => wire::decode_body::<$ty>(body).map(ProposalChange::$variant),)+
                    tag => Ok(ProposalChange::Unknown { tag }),
                }
            }
        }
    };
}

proposal_change_table! {
    101 => UpdateMarket(UpdateMarket), "update_market";
    102 => NewMarket(NewMarket), "new_market";
    103 => UpdateNetworkParameter(UpdateNetworkParameter), "update_network_parameter";
    104 => NewAsset(NewAsset), "new_asset";
    105 => NewFreeform(NewFreeform), "new_freeform";
    106 => UpdateAsset(UpdateAsset), "update_asset";
    107 => NewSpotMarket(NewSpotMarket), "new_spot_market";
    108 => UpdateSpotMarket(UpdateSpotMarket), "update_spot_market";
    109 => NewTransfer(NewTransfer), "new_transfer";
    110 => CancelTransfer(CancelTransferProposal), "cancel_transfer";
    111 => UpdateMarketState(UpdateMarketState), "update_market_state";
    112 => UpdateReferralProgram(UpdateReferralProgram), "update_referral_program";
    113 => UpdateVolumeDiscountProgram(UpdateVolumeDiscountProgram), "update_volume_discount_program";
}

#[serde_as]
#[derive(Serialize, Deserialize)]
struct WireProposalChange {
    tag: u32,
    #[serde_as(as = "Bytes")]
    body: Vec<u8>,
}

impl Serialize for ProposalChange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let body = self
            .encode_body()
            .map_err(<S::Error as serde::ser::Error>::custom)?;
        WireProposalChange { tag: self.tag(), body }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProposalChange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let WireProposalChange { tag, body } = WireProposalChange::deserialize(deserializer)?;
        ProposalChange::decode_body(tag, &body).map_err(<D::Error as serde::de::Error>::custom)
    }
}

/// A proposal with no on-chain effect.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewFreeform {}

/// Change one network parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateNetworkParameter {
    pub changes: Option<NetworkParameter>,
}

/// Key and new value of a network parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkParameter {
    pub key: String,
    pub value: String,
}

/// List a new asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewAsset {
    pub changes: Option<AssetDetails>,
}

/// Description of an asset to list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetDetails {
    pub name: String,
    pub symbol: String,
    pub decimals: u64,
    pub quantum: String,
    pub source: Option<AssetSource>,
}

/// Where an asset lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetSource {
    BuiltinAsset(BuiltinAsset),
    Erc20(Erc20Asset),
}

/// Asset that exists only on the network (test faucets).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuiltinAsset {
    pub max_faucet_amount_mint: String,
}

/// Asset bridged from an ERC-20 contract.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Erc20Asset {
    pub contract_address: String,
    pub lifetime_limit: String,
    pub withdraw_threshold: String,
}

/// Change an existing asset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateAsset {
    pub asset_id: String,
    pub changes: Option<AssetDetailsUpdate>,
}

/// Updatable asset fields. Only ERC-20 assets have an updatable source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AssetDetailsUpdate {
    pub quantum: String,
    pub erc20: Option<Erc20Update>,
}

/// Updatable ERC-20 bridge limits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Erc20Update {
    pub lifetime_limit: String,
    pub withdraw_threshold: String,
}

/// Transfer funds out of a network-owned account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTransfer {
    pub changes: Option<NewTransferConfiguration>,
}

/// Parameters of a governance transfer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTransferConfiguration {
    /// [`crate::AccountType`]
    pub source_type: i32,
    pub source: String,
    /// [`crate::GovernanceTransferType`]
    pub transfer_type: i32,
    pub amount: String,
    pub asset: String,
    /// Decimal in `(0, 1]`.
    pub fraction_of_balance: String,
    /// [`crate::AccountType`]
    pub destination_type: i32,
    pub destination: String,
    pub kind: Option<GovernanceTransferKind>,
}

/// Whether a governance transfer happens once or every epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GovernanceTransferKind {
    OneOff { deliver_on: i64 },
    Recurring(GovernanceRecurringTransfer),
}

/// Recurring governance transfer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GovernanceRecurringTransfer {
    pub start_epoch: u64,
    pub end_epoch: Option<u64>,
    pub dispatch_strategy: Option<DispatchStrategy>,
}

/// Cancel a recurring governance transfer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CancelTransferProposal {
    pub changes: Option<CancelTransferConfiguration>,
}

/// Transfer to cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CancelTransferConfiguration {
    pub transfer_id: String,
}

/// Terminate, suspend or resume a market.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateMarketState {
    pub changes: Option<UpdateMarketStateConfiguration>,
}

/// Target market and action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateMarketStateConfiguration {
    pub market_id: String,
    /// [`crate::MarketStateUpdateType`]
    pub update_type: i32,
    /// Final settlement price; termination only.
    pub price: Option<String>,
}

/// Replace the referral program.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateReferralProgram {
    pub changes: Option<ReferralProgramChanges>,
}

/// Referral program configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReferralProgramChanges {
    pub end_of_program_timestamp: i64,
    pub window_length: u64,
    pub benefit_tiers: Vec<BenefitTier>,
    pub staking_tiers: Vec<StakingTier>,
}

/// Referral reward and discount granted above a volume and age threshold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BenefitTier {
    pub minimum_running_notional_taker_volume: String,
    pub minimum_epochs: String,
    pub referral_reward_factor: String,
    pub referral_discount_factor: String,
}

/// Reward multiplier granted above a staked balance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StakingTier {
    pub minimum_staked_tokens: String,
    pub referral_reward_multiplier: String,
}

/// Replace the volume discount program.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateVolumeDiscountProgram {
    pub changes: Option<VolumeDiscountProgramChanges>,
}

/// Volume discount program configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeDiscountProgramChanges {
    pub end_of_program_timestamp: i64,
    pub window_length: u64,
    pub benefit_tiers: Vec<VolumeBenefitTier>,
}

/// Discount granted above a running taker volume.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VolumeBenefitTier {
    pub minimum_running_notional_taker_volume: String,
    pub volume_discount_factor: String,
}

/// Vote on an open proposal.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteSubmission {
    pub proposal_id: String,
    /// [`crate::VoteValue`]
    pub value: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(change: ProposalChange) -> ProposalTerms {
        ProposalTerms {
            closing_timestamp: 100,
            enactment_timestamp: 200,
            validation_timestamp: 0,
            change: Some(change),
        }
    }

    #[test]
    fn test_change_roundtrip() {
        let change = ProposalChange::UpdateNetworkParameter(UpdateNetworkParameter {
            changes: Some(NetworkParameter { key: "k".into(), value: "v".into() }),
        });
        let bytes = wire::encode(&terms(change.clone())).unwrap();

        assert_eq!(wire::decode::<ProposalTerms>(&bytes).unwrap(), terms(change));
    }

    #[test]
    fn test_unknown_change_tag_survives_decoding() {
        let wire_change = WireProposalChange { tag: 150, body: vec![9, 9, 9] };
        let bytes = wire::encode(&(100i64, 200i64, 0i64, Some(wire_change))).unwrap();

        let decoded: ProposalTerms = wire::decode(&bytes).unwrap();
        assert_eq!(decoded.change, Some(ProposalChange::Unknown { tag: 150 }));
        assert_eq!(ProposalChange::Unknown { tag: 150 }.name(), "unknown");
    }

    #[test]
    fn test_empty_change_body_is_zero_message() {
        let wire_change = WireProposalChange { tag: 102, body: Vec::new() };
        let bytes = wire::encode(&Some(wire_change)).unwrap();

        let decoded: Option<ProposalChange> = wire::decode(&bytes).unwrap();
        assert_eq!(decoded, Some(ProposalChange::NewMarket(NewMarket::default())));
    }

    #[test]
    fn test_corrupt_change_body_fails() {
        let wire_change = WireProposalChange { tag: 103, body: vec![0xFF] };
        let bytes = wire::encode(&wire_change).unwrap();

        assert!(wire::decode::<ProposalChange>(&bytes).is_err());
    }

    #[test]
    fn test_change_tags_are_unique() {
        let changes = [
            ProposalChange::UpdateMarket(UpdateMarket::default()),
            ProposalChange::NewMarket(NewMarket::default()),
            ProposalChange::NewSpotMarket(NewSpotMarket::default()),
            ProposalChange::UpdateSpotMarket(UpdateSpotMarket::default()),
            ProposalChange::NewFreeform(NewFreeform {}),
        ];
        let tags: std::collections::HashSet<u32> = changes.iter().map(|c| c.tag()).collect();
        assert_eq!(tags.len(), changes.len());
    }
}
