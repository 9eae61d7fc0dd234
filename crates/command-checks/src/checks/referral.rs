//! # Referral, Team & Profile Checks

use super::{check_max_len, require_vega_id};
use crate::errors::{Cause, ErrorSet};
use crate::ids::is_vega_public_key;
use shared_types::{
    ApplyReferralCode, CreateReferralSet, JoinTeam, TeamDetails, UpdatePartyProfile,
    UpdateReferralSet,
};
use std::collections::HashSet;

/// Longest accepted team name.
pub const TEAM_NAME_MAX_LEN: usize = 100;

/// Longest accepted team or avatar URL.
pub const TEAM_URL_MAX_LEN: usize = 200;

/// Longest accepted party alias.
pub const ALIAS_MAX_LEN: usize = 32;

/// Most metadata entries a party profile may carry.
pub const MAX_METADATA_ENTRIES: usize = 10;

/// Longest accepted metadata key.
pub const METADATA_KEY_MAX_LEN: usize = 32;

/// Longest accepted metadata value.
pub const METADATA_VALUE_MAX_LEN: usize = 255;

// ===== REFERRAL SETS =====

/// On creation the name is mandatory; on update an unset field keeps its
/// current value but a set one must still be valid.
fn check_team_details(team: &TeamDetails, prefix: &str, creating: bool) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let path = |field: &str| format!("{prefix}.{field}");

    match team.name.as_deref() {
        None if creating => errs.add(path("name"), Cause::IsRequired),
        None => {}
        Some("") => errs.add(path("name"), Cause::IsRequired),
        Some(name) => check_max_len(&mut errs, path("name"), name, TEAM_NAME_MAX_LEN),
    }
    if let Some(url) = &team.team_url {
        check_max_len(&mut errs, path("team_url"), url, TEAM_URL_MAX_LEN);
    }
    if let Some(url) = &team.avatar_url {
        check_max_len(&mut errs, path("avatar_url"), url, TEAM_URL_MAX_LEN);
    }

    if !team.allow_list.is_empty() && team.closed != Some(true) {
        errs.add(
            path("allow_list"),
            "setting an allow list requires setting the closed state",
        );
    }
    for (i, key) in team.allow_list.iter().enumerate() {
        if !is_vega_public_key(key) {
            errs.add(path(&format!("allow_list.{i}")), Cause::ShouldBeAValidVegaPublicKey);
        }
    }

    errs
}

pub fn check_create_referral_set(cmd: Option<&CreateReferralSet>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("create_referral_set", Cause::IsRequired);
    };

    if cmd.is_team {
        let Some(team) = &cmd.team else {
            return errs.add_final("create_referral_set.team", Cause::IsRequired);
        };
        errs.merge(check_team_details(team, "create_referral_set.team", true));
    }

    errs
}

pub fn check_update_referral_set(cmd: Option<&UpdateReferralSet>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("update_referral_set", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "update_referral_set.id", &cmd.id);

    if cmd.is_team {
        let Some(team) = &cmd.team else {
            return errs.add_final("update_referral_set.team", Cause::IsRequired);
        };
        errs.merge(check_team_details(team, "update_referral_set.team", false));
    }

    errs
}

pub fn check_apply_referral_code(cmd: Option<&ApplyReferralCode>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("apply_referral_code", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "apply_referral_code.id", &cmd.id);

    errs
}

pub fn check_join_team(cmd: Option<&JoinTeam>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("join_team", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "join_team.id", &cmd.id);

    errs
}

// ===== PARTY PROFILE =====

pub fn check_update_party_profile(cmd: Option<&UpdatePartyProfile>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("update_party_profile", Cause::IsRequired);
    };

    check_max_len(&mut errs, "update_party_profile.alias", &cmd.alias, ALIAS_MAX_LEN);

    if cmd.metadata.len() > MAX_METADATA_ENTRIES {
        errs.add(
            "update_party_profile.metadata",
            Cause::MustBeAtMost(MAX_METADATA_ENTRIES as u64),
        );
    }

    let mut keys = HashSet::new();
    for (i, entry) in cmd.metadata.iter().enumerate() {
        let path = format!("update_party_profile.metadata.{i}");

        if entry.key.is_empty() {
            errs.add(format!("{path}.key"), Cause::IsRequired);
        } else {
            check_max_len(&mut errs, format!("{path}.key"), &entry.key, METADATA_KEY_MAX_LEN);
            if !keys.insert(entry.key.as_str()) {
                errs.add(format!("{path}.key"), format!("key {:?} is duplicated", entry.key));
            }
        }
        check_max_len(
            &mut errs,
            format!("{path}.value"),
            &entry.value,
            METADATA_VALUE_MAX_LEN,
        );
    }

    errs
}
