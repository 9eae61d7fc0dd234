//! # Protocol Enumerations
//!
//! Commands carry enumerations as raw `i32` wire values. Each enum here
//! converts with `TryFrom<i32>`; the error is the unrecognised raw value.
//! Value `0` is always `Unspecified`, which the checks read as "not set".

macro_rules! proto_enum {
    (
        $(#[$meta:meta])*
        $name:ident: $prefix:literal {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = $value),+
        }

        impl $name {
            /// Raw wire value.
            pub const fn value(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = i32;

            fn try_from(value: i32) -> Result<Self, i32> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err(other),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> i32 {
                value as i32
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let variant = match self {
                    $($name::$variant => stringify!($variant),)+
                };
                f.write_str(&proto_name($prefix, variant))
            }
        }
    };
}

/// `ACCOUNT_TYPE` + `RewardLpReceivedFees` -> `ACCOUNT_TYPE_REWARD_LP_RECEIVED_FEES`
fn proto_name(prefix: &str, variant: &str) -> String {
    let mut name = String::with_capacity(prefix.len() + variant.len() * 2);
    name.push_str(prefix);
    for c in variant.chars() {
        if c.is_ascii_uppercase() {
            name.push('_');
        }
        name.push(c.to_ascii_uppercase());
    }
    name
}

/// Proto name of a raw value, or the number itself when it is out of range.
pub fn raw_name<E>(raw: i32) -> String
where
    E: TryFrom<i32> + std::fmt::Display,
{
    E::try_from(raw).map_or_else(|_| raw.to_string(), |value| value.to_string())
}

proto_enum! {
    /// Side of an order.
    Side: "SIDE" {
        Unspecified = 0,
        Buy = 1,
        Sell = 2,
    }
}

proto_enum! {
    /// Order type.
    OrderType: "TYPE" {
        Unspecified = 0,
        Limit = 1,
        Market = 2,
        /// Only the network may place these (liquidations).
        Network = 3,
    }
}

proto_enum! {
    /// How long an order rests on the book.
    TimeInForce: "TIME_IN_FORCE" {
        Unspecified = 0,
        Gtc = 1,
        Gtt = 2,
        Ioc = 3,
        Fok = 4,
        Gfa = 5,
        Gfn = 6,
    }
}

impl TimeInForce {
    /// Immediate-or-cancel and fill-or-kill never rest on the book.
    pub const fn is_persistent(self) -> bool {
        !matches!(self, TimeInForce::Ioc | TimeInForce::Fok)
    }
}

proto_enum! {
    /// Price a pegged order tracks.
    PeggedReference: "PEGGED_REFERENCE" {
        Unspecified = 0,
        Mid = 1,
        BestBid = 2,
        BestAsk = 3,
    }
}

proto_enum! {
    /// A vote on a governance proposal.
    VoteValue: "VALUE" {
        Unspecified = 0,
        No = 1,
        Yes = 2,
    }
}

proto_enum! {
    /// When an undelegation takes effect.
    UndelegateMethod: "METHOD" {
        Unspecified = 0,
        Now = 1,
        AtEndOfEpoch = 2,
    }
}

proto_enum! {
    /// Ledger account types.
    AccountType: "ACCOUNT_TYPE" {
        Unspecified = 0,
        Insurance = 1,
        Settlement = 2,
        Margin = 3,
        General = 4,
        FeesInfrastructure = 5,
        FeesLiquidity = 6,
        FeesMaker = 7,
        Bond = 9,
        External = 10,
        GlobalInsurance = 11,
        GlobalReward = 12,
        PendingTransfers = 13,
        RewardMakerPaidFees = 14,
        RewardMakerReceivedFees = 15,
        RewardLpReceivedFees = 16,
        RewardMarketProposers = 17,
        Holding = 18,
        LpLiquidityFees = 19,
        LiquidityFeesBonusDistribution = 20,
        NetworkTreasury = 21,
        VestingRewards = 22,
        VestedRewards = 23,
        RewardAveragePosition = 24,
        RewardRelativeReturn = 25,
        RewardReturnVolatility = 26,
        RewardValidatorRanking = 27,
        PendingFeeReferralReward = 28,
        OrderMargin = 29,
    }
}

impl AccountType {
    /// The reward pool a metric-based recurring transfer pays into, with the
    /// only metric that pool accepts.
    pub const fn reward_metric(self) -> Option<DispatchMetric> {
        match self {
            AccountType::RewardMakerPaidFees => Some(DispatchMetric::MakerFeesPaid),
            AccountType::RewardMakerReceivedFees => Some(DispatchMetric::MakerFeesReceived),
            AccountType::RewardLpReceivedFees => Some(DispatchMetric::LpFeesReceived),
            AccountType::RewardMarketProposers => Some(DispatchMetric::MarketValue),
            AccountType::RewardAveragePosition => Some(DispatchMetric::AveragePosition),
            AccountType::RewardRelativeReturn => Some(DispatchMetric::RelativeReturn),
            AccountType::RewardReturnVolatility => Some(DispatchMetric::ReturnVolatility),
            AccountType::RewardValidatorRanking => Some(DispatchMetric::ValidatorRanking),
            _ => None,
        }
    }

    /// Whether the account is a metric-based reward pool.
    pub const fn is_metric_reward(self) -> bool {
        self.reward_metric().is_some()
    }
}

proto_enum! {
    /// Metric a reward pool is distributed by.
    DispatchMetric: "DISPATCH_METRIC" {
        Unspecified = 0,
        MakerFeesPaid = 1,
        MakerFeesReceived = 2,
        LpFeesReceived = 3,
        MarketValue = 4,
        AveragePosition = 5,
        RelativeReturn = 6,
        ReturnVolatility = 7,
        ValidatorRanking = 8,
    }
}

proto_enum! {
    /// Who competes for a reward.
    EntityScope: "ENTITY_SCOPE" {
        Unspecified = 0,
        Individuals = 1,
        Teams = 2,
    }
}

proto_enum! {
    /// Which individuals compete when the entity scope is individuals.
    IndividualScope: "INDIVIDUAL_SCOPE" {
        Unspecified = 0,
        All = 1,
        InTeam = 2,
        NotInTeam = 3,
    }
}

proto_enum! {
    /// How a reward pool is split among winners.
    DistributionStrategy: "DISTRIBUTION_STRATEGY" {
        Unspecified = 0,
        ProRata = 1,
        Rank = 2,
    }
}

proto_enum! {
    /// Governance transfer behaviour when the source cannot cover the amount.
    GovernanceTransferType: "GOVERNANCE_TRANSFER_TYPE" {
        Unspecified = 0,
        AllOrNothing = 1,
        BestEffort = 2,
    }
}

proto_enum! {
    /// What happens to a stop order when it expires.
    StopOrderExpiryStrategy: "EXPIRY_STRATEGY" {
        Unspecified = 0,
        Cancels = 1,
        Submit = 2,
    }
}

proto_enum! {
    /// Margin mode of a party in a market.
    MarginMode: "MARGIN_MODE" {
        Unspecified = 0,
        CrossMargin = 1,
        IsolatedMargin = 2,
    }
}

proto_enum! {
    /// How an AMM is wound down.
    AmmCancellationMethod: "METHOD" {
        Unspecified = 0,
        Immediate = 1,
        ReduceOnly = 2,
    }
}

proto_enum! {
    /// Kind of vault redemption window.
    RedemptionType: "REDEMPTION_TYPE" {
        Unspecified = 0,
        FreeCashOnly = 1,
        Normal = 2,
    }
}

proto_enum! {
    /// Governance action on a market's trading state.
    MarketStateUpdateType: "MARKET_STATE_UPDATE_TYPE" {
        Unspecified = 0,
        Terminate = 1,
        Suspend = 2,
        Resume = 3,
    }
}

proto_enum! {
    /// How a market's liquidity fee is derived.
    LiquidityFeeMethod: "METHOD" {
        Unspecified = 0,
        MarginCost = 1,
        WeightedAverage = 2,
        /// A fixed fee set by the proposal.
        Constant = 3,
    }
}

proto_enum! {
    /// Event a validator votes on.
    NodeVoteType: "TYPE" {
        Unspecified = 0,
        StakeDeposited = 1,
        StakeRemoved = 2,
        FundsDeposited = 3,
        SignerAdded = 4,
        SignerRemoved = 5,
        BridgeStopped = 6,
        BridgeResumed = 7,
        AssetListed = 8,
        LimitsUpdated = 9,
        StakeTotalSupply = 10,
        SignerThresholdSet = 11,
        GovernanceValidateAsset = 12,
    }
}

proto_enum! {
    /// What a validator signature authorises on the bridge.
    NodeSignatureKind: "NODE_SIGNATURE_KIND" {
        Unspecified = 0,
        AssetNew = 1,
        AssetWithdrawal = 2,
        Erc20MultisigSignerAdded = 3,
        Erc20MultisigSignerRemoved = 4,
        AssetUpdate = 5,
    }
}

proto_enum! {
    /// Encoding of externally sourced oracle data.
    OracleSource: "TYPE" {
        Unspecified = 0,
        OpenOracle = 1,
        Json = 2,
    }
}
