//! # Vault Checks
//!
//! Creation and update share one set of rules for the vault terms.

use super::require_vega_id;
use crate::durations::parse_duration;
use crate::errors::{Cause, ErrorSet};
use crate::ids::is_vega_id;
use crate::numbers::{check_fraction, check_non_negative_decimal, check_positive_integer};
use shared_types::{
    ChangeVaultOwnership, CreateVault, DepositToVault, RedemptionDate, RedemptionType,
    UpdateVault, VaultMetadata, WithdrawFromVault,
};

/// Fields common to [`CreateVault`] and [`UpdateVault`].
struct VaultTerms<'a> {
    metadata: Option<&'a VaultMetadata>,
    fee_period: &'a str,
    management_fee_factor: &'a str,
    performance_fee_factor: &'a str,
    cut_off_period_length: i64,
    redemption_dates: &'a [RedemptionDate],
}

impl<'a> From<&'a CreateVault> for VaultTerms<'a> {
    fn from(cmd: &'a CreateVault) -> Self {
        Self {
            metadata: cmd.metadata.as_ref(),
            fee_period: &cmd.fee_period,
            management_fee_factor: &cmd.management_fee_factor,
            performance_fee_factor: &cmd.performance_fee_factor,
            cut_off_period_length: cmd.cut_off_period_length,
            redemption_dates: &cmd.redemption_dates,
        }
    }
}

impl<'a> From<&'a UpdateVault> for VaultTerms<'a> {
    fn from(cmd: &'a UpdateVault) -> Self {
        Self {
            metadata: cmd.metadata.as_ref(),
            fee_period: &cmd.fee_period,
            management_fee_factor: &cmd.management_fee_factor,
            performance_fee_factor: &cmd.performance_fee_factor,
            cut_off_period_length: cmd.cut_off_period_length,
            redemption_dates: &cmd.redemption_dates,
        }
    }
}

fn check_vault_terms(errs: &mut ErrorSet, root: &str, terms: VaultTerms<'_>) {
    match terms.metadata {
        None => errs.add(format!("{root}.metadata"), Cause::IsRequired),
        Some(metadata) if metadata.name.is_empty() => {
            errs.add(format!("{root}.metadata.name"), Cause::IsRequired)
        }
        Some(_) => {}
    }

    check_non_negative_decimal(
        errs,
        format!("{root}.management_fee_factor"),
        terms.management_fee_factor,
    );
    check_non_negative_decimal(
        errs,
        format!("{root}.performance_fee_factor"),
        terms.performance_fee_factor,
    );

    if terms.fee_period.is_empty() {
        errs.add(format!("{root}.fee_period"), Cause::IsRequired);
    } else if parse_duration(terms.fee_period).is_none() {
        errs.add(format!("{root}.fee_period"), Cause::IsNotValid);
    }

    if terms.cut_off_period_length <= 0 {
        errs.add(format!("{root}.cut_off_period_length"), Cause::MustBePositive);
    }

    if terms.redemption_dates.is_empty() {
        errs.add(format!("{root}.redemption_dates"), Cause::IsRequired);
        return;
    }

    let mut previous: Option<i64> = None;
    for (i, date) in terms.redemption_dates.iter().enumerate() {
        let path = format!("{root}.redemption_dates.{i}");

        if date.redemption_date <= 0 {
            errs.add(format!("{path}.redemption_date"), Cause::IsNotValid);
        } else {
            if previous.is_some_and(|p| date.redemption_date <= p) {
                errs.add(
                    format!("{path}.redemption_date"),
                    "must be after the previous redemption date",
                );
            }
            previous = Some(date.redemption_date);
        }

        if !matches!(
            RedemptionType::try_from(date.redemption_type),
            Ok(RedemptionType::FreeCashOnly | RedemptionType::Normal)
        ) {
            errs.add(format!("{path}.redemption_type"), Cause::IsNotValid);
        }

        check_fraction(errs, format!("{path}.max_fraction"), &date.max_fraction, Cause::IsNotValid);
    }
}

fn check_vault_id(errs: &mut ErrorSet, path: String, vault_id: &str) {
    if vault_id.is_empty() {
        errs.add(path, Cause::IsRequired);
    } else if !is_vega_id(vault_id) {
        errs.add(path, Cause::IsNotValidVaultId);
    }
}

// ===== CREATE & UPDATE =====

pub fn check_create_vault(cmd: Option<&CreateVault>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("create_vault", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "create_vault.asset", &cmd.asset);
    check_vault_terms(&mut errs, "create_vault", cmd.into());

    errs
}

pub fn check_update_vault(cmd: Option<&UpdateVault>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("update_vault", Cause::IsRequired);
    };

    check_vault_id(&mut errs, "update_vault.vault_id".into(), &cmd.vault_id);
    check_vault_terms(&mut errs, "update_vault", cmd.into());

    errs
}

// ===== FUNDS & OWNERSHIP =====

fn check_vault_movement(root: &str, vault_id: &str, amount: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();
    check_vault_id(&mut errs, format!("{root}.vault_id"), vault_id);
    check_positive_integer(&mut errs, format!("{root}.amount"), amount, Cause::IsNotValidNumber);
    errs
}

pub fn check_deposit_to_vault(cmd: Option<&DepositToVault>) -> ErrorSet {
    let Some(cmd) = cmd else {
        return ErrorSet::new().add_final("deposit_to_vault", Cause::IsRequired);
    };
    check_vault_movement("deposit_to_vault", &cmd.vault_id, &cmd.amount)
}

pub fn check_withdraw_from_vault(cmd: Option<&WithdrawFromVault>) -> ErrorSet {
    let Some(cmd) = cmd else {
        return ErrorSet::new().add_final("withdraw_from_vault", Cause::IsRequired);
    };
    check_vault_movement("withdraw_from_vault", &cmd.vault_id, &cmd.amount)
}

pub fn check_change_vault_ownership(cmd: Option<&ChangeVaultOwnership>) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(cmd) = cmd else {
        return errs.add_final("change_vault_ownership", Cause::IsRequired);
    };

    require_vega_id(&mut errs, "change_vault_ownership.vault_id", &cmd.vault_id);
    require_vega_id(&mut errs, "change_vault_ownership.new_owner", &cmd.new_owner);

    errs
}
