//! Referral sets, teams and party profiles.

use serde::{Deserialize, Serialize};

/// Team attributes; on updates, unset fields keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamDetails {
    pub name: Option<String>,
    pub team_url: Option<String>,
    pub avatar_url: Option<String>,
    pub closed: Option<bool>,
    pub allow_list: Vec<String>,
}

/// Create a referral set, optionally as a team.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateReferralSet {
    pub is_team: bool,
    pub team: Option<TeamDetails>,
    pub do_not_create_referral_set: bool,
}

/// Change a referral set or its team.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateReferralSet {
    pub id: String,
    pub is_team: bool,
    pub team: Option<TeamDetails>,
}

/// Join a referral set as a referee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApplyReferralCode {
    pub id: String,
    pub do_not_join_team: bool,
}

/// Join a team without a referral.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JoinTeam {
    pub id: String,
}

/// Free-form key/value attached to a party profile.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub key: String,
    pub value: String,
}

/// Set the alias and metadata shown for a party.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdatePartyProfile {
    pub alias: String,
    pub metadata: Vec<Metadata>,
}
