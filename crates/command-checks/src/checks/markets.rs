//! # Market Proposal Checks
//!
//! New and updated derivative and spot markets, as proposal changes. Paths
//! start at the change name (`new_market.changes.decimal_places`) and are
//! merged under `proposal_submission.terms.change` by the governance checks.
//!
//! Listing a market bounds the risk model tightly; updates only require the
//! model to be well formed, since the running market already vetted it.

use super::{require_enum, require_vega_id};
use crate::errors::{Cause, ErrorSet};
use crate::numbers::{is_fraction, parse_decimal};
use bigdecimal::BigDecimal;
use num::{BigInt, Signed, Zero};
use shared_types::{
    InstrumentConfiguration, InstrumentProduct, LiquidationStrategy, LiquidityFeeMethod,
    LiquidityFeeSettings, LiquidityMonitoringParameters, LiquiditySlaParameters,
    LogNormalRiskModel, NewMarket, NewSpotMarket, PerpetualProduct, PriceMonitoringParameters,
    RiskParameters, SimpleModelParams, TargetStakeParameters, UpdateInstrumentConfiguration,
    UpdateInstrumentProduct, UpdateMarket, UpdatePerpetualProduct, UpdateSpotMarket,
};

/// Price decimal places must stay below this.
pub const DECIMAL_PLACES_LIMIT: u64 = 150;

/// Largest accepted position decimal places, either sign.
pub const MAX_POSITION_DECIMAL_PLACES: i64 = 6;

/// Largest accepted linear slippage factor.
pub const MAX_LINEAR_SLIPPAGE_FACTOR: u64 = 1_000_000;

/// Longest accepted liquidation disposal step, in seconds.
pub const MAX_DISPOSAL_TIME_STEP: i64 = 3_600;

/// Most price monitoring triggers a market may carry.
pub const MAX_PRICE_MONITORING_TRIGGERS: usize = 5;

/// Longest accepted SLA hysteresis, in epochs.
pub const MAX_PERFORMANCE_HYSTERESIS_EPOCHS: u64 = 366;

/// `mantissa * 10^-scale`
fn decimal(mantissa: i64, scale: i64) -> BigDecimal {
    BigDecimal::new(BigInt::from(mantissa), scale)
}

/// Factor that stands in for a protocol double: empty is zero.
fn parse_factor(value: &str) -> Option<BigDecimal> {
    if value.is_empty() {
        return Some(BigDecimal::zero());
    }
    parse_decimal(value)
}

fn within(value: &BigDecimal, low: &BigDecimal, high: &BigDecimal) -> bool {
    value >= low && value <= high
}

/// Required decimal in `[low, high]`.
fn check_bounded(
    errs: &mut ErrorSet,
    path: String,
    value: &str,
    low: &BigDecimal,
    high: &BigDecimal,
    out_of_range: Cause,
) -> Option<BigDecimal> {
    if value.is_empty() {
        errs.add(path, Cause::IsRequired);
        return None;
    }
    match parse_decimal(value) {
        None => {
            errs.add(path, Cause::IsNotValidNumber);
            None
        }
        Some(d) if !within(&d, low, high) => {
            errs.add(path, out_of_range);
            None
        }
        Some(d) => Some(d),
    }
}

/// How strictly a risk model is bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RiskBounds {
    Listing,
    Update,
}

// ===== MARKET CHANGES =====

pub(crate) fn check_new_market(change: &NewMarket) -> ErrorSet {
    const ROOT: &str = "new_market.changes";
    let mut errs = ErrorSet::new();
    let Some(changes) = &change.changes else {
        return errs.add_final(ROOT, Cause::IsRequired);
    };

    check_decimal_places(
        &mut errs,
        ROOT,
        changes.decimal_places,
        changes.position_decimal_places,
    );
    check_linear_slippage_factor(&mut errs, ROOT, &changes.linear_slippage_factor);

    if let Some(successor) = &changes.successor {
        let path = format!("{ROOT}.successor.insurance_pool_fraction");
        if successor.insurance_pool_fraction.is_empty() {
            errs.add(path, Cause::IsRequired);
        } else {
            match parse_decimal(&successor.insurance_pool_fraction) {
                None => errs.add(path, Cause::IsNotValidNumber),
                Some(f) if !within(&f, &BigDecimal::zero(), &BigDecimal::from(1)) => {
                    errs.add(path, Cause::MustBeWithinRange01)
                }
                Some(_) => {}
            }
        }
    }

    errs.merge(check_liquidation_strategy(changes.liquidation_strategy.as_ref(), ROOT));
    errs.merge(check_price_monitoring(changes.price_monitoring_parameters.as_ref(), ROOT));
    errs.merge(check_liquidity_monitoring(
        changes.liquidity_monitoring_parameters.as_ref(),
        ROOT,
    ));
    errs.merge(check_new_instrument(
        changes.instrument.as_ref(),
        &format!("{ROOT}.instrument"),
    ));
    errs.merge(check_risk_parameters(
        changes.risk_parameters.as_ref(),
        ROOT,
        RiskBounds::Listing,
    ));
    errs.merge(check_sla_params(
        changes.liquidity_sla_parameters.as_ref(),
        &format!("{ROOT}.sla_params"),
    ));
    errs.merge(check_liquidity_fee_settings(changes.liquidity_fee_settings.as_ref(), ROOT));

    errs
}

pub(crate) fn check_update_market(change: &UpdateMarket) -> ErrorSet {
    const ROOT: &str = "update_market.changes";
    let mut errs = ErrorSet::new();

    require_vega_id(&mut errs, "update_market.market_id", &change.market_id);

    let Some(changes) = &change.changes else {
        return errs.add_final(ROOT, Cause::IsRequired);
    };

    check_linear_slippage_factor(&mut errs, ROOT, &changes.linear_slippage_factor);
    errs.merge(check_liquidation_strategy(changes.liquidation_strategy.as_ref(), ROOT));
    errs.merge(check_price_monitoring(changes.price_monitoring_parameters.as_ref(), ROOT));
    errs.merge(check_liquidity_monitoring(
        changes.liquidity_monitoring_parameters.as_ref(),
        ROOT,
    ));
    errs.merge(check_update_instrument(
        changes.instrument.as_ref(),
        &format!("{ROOT}.instrument"),
    ));
    errs.merge(check_risk_parameters(
        changes.risk_parameters.as_ref(),
        ROOT,
        RiskBounds::Update,
    ));
    errs.merge(check_sla_params(
        changes.liquidity_sla_parameters.as_ref(),
        &format!("{ROOT}.sla_params"),
    ));
    errs.merge(check_liquidity_fee_settings(changes.liquidity_fee_settings.as_ref(), ROOT));

    errs
}

pub(crate) fn check_new_spot_market(change: &NewSpotMarket) -> ErrorSet {
    const ROOT: &str = "new_spot_market.changes";
    let mut errs = ErrorSet::new();
    let Some(changes) = &change.changes else {
        return errs.add_final(ROOT, Cause::IsRequired);
    };

    let Some(instrument) = &changes.instrument else {
        return errs.add_final(format!("{ROOT}.instrument"), Cause::IsRequired);
    };
    match &instrument.product {
        None => return errs.add_final(format!("{ROOT}.instrument.product"), Cause::IsRequired),
        Some(InstrumentProduct::Spot(_)) => {}
        Some(_) => {
            return errs.add_final(format!("{ROOT}.instrument.product"), Cause::IsMismatching)
        }
    }

    check_decimal_places(
        &mut errs,
        ROOT,
        changes.decimal_places,
        changes.position_decimal_places,
    );
    errs.merge(check_price_monitoring(changes.price_monitoring_parameters.as_ref(), ROOT));
    errs.merge(check_target_stake(changes.target_stake_parameters.as_ref(), ROOT));
    errs.merge(check_new_instrument(Some(instrument), &format!("{ROOT}.instrument")));
    errs.merge(check_risk_parameters(
        changes.risk_parameters.as_ref(),
        ROOT,
        RiskBounds::Listing,
    ));
    errs.merge(check_sla_params(changes.sla_params.as_ref(), &format!("{ROOT}.sla_params")));

    errs
}

pub(crate) fn check_update_spot_market(change: &UpdateSpotMarket) -> ErrorSet {
    const ROOT: &str = "update_spot_market.changes";
    let mut errs = ErrorSet::new();

    require_vega_id(&mut errs, "update_spot_market.market_id", &change.market_id);

    let Some(changes) = &change.changes else {
        return errs.add_final(ROOT, Cause::IsRequired);
    };

    errs.merge(check_price_monitoring(changes.price_monitoring_parameters.as_ref(), ROOT));
    errs.merge(check_target_stake(changes.target_stake_parameters.as_ref(), ROOT));
    errs.merge(check_risk_parameters(
        changes.risk_parameters.as_ref(),
        ROOT,
        RiskBounds::Update,
    ));
    errs.merge(check_sla_params(changes.sla_params.as_ref(), &format!("{ROOT}.sla_params")));

    errs
}

// ===== TRADING PARAMETERS =====

fn check_decimal_places(
    errs: &mut ErrorSet,
    root: &str,
    decimal_places: u64,
    position_decimal_places: i64,
) {
    if decimal_places >= DECIMAL_PLACES_LIMIT {
        errs.add(format!("{root}.decimal_places"), "must be less than 150");
    }
    let position_range = -MAX_POSITION_DECIMAL_PLACES..=MAX_POSITION_DECIMAL_PLACES;
    if !position_range.contains(&position_decimal_places) {
        errs.add(
            format!("{root}.position_decimal_places"),
            "must be between -6 and 6",
        );
    }
}

/// Optional; when set, a decimal in `[0, 1_000_000]`.
fn check_linear_slippage_factor(errs: &mut ErrorSet, root: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let path = format!("{root}.linear_slippage_factor");
    match parse_decimal(value) {
        None => errs.add(path, Cause::IsNotValidNumber),
        Some(f) if f.is_negative() => errs.add(path, Cause::MustBePositiveOrZero),
        Some(f) if f > BigDecimal::from(MAX_LINEAR_SLIPPAGE_FACTOR) => {
            errs.add(path, Cause::MustBeAtMost(MAX_LINEAR_SLIPPAGE_FACTOR))
        }
        Some(_) => {}
    }
}

fn check_liquidation_strategy(strategy: Option<&LiquidationStrategy>, root: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(strategy) = strategy else {
        return errs;
    };
    let path = |field: &str| format!("{root}.liquidation_strategy.{field}");

    if !parse_decimal(&strategy.disposal_fraction).is_some_and(|f| is_fraction(&f)) {
        errs.add(path("disposal_fraction"), Cause::MustBeBetween01);
    }
    if !parse_decimal(&strategy.max_fraction_consumed).is_some_and(|f| is_fraction(&f)) {
        errs.add(path("max_fraction_consumed"), Cause::MustBeBetween01);
    }
    if strategy.disposal_time_step < 1 {
        errs.add(path("disposal_time_step"), Cause::MustBePositive);
    } else if strategy.disposal_time_step > MAX_DISPOSAL_TIME_STEP {
        errs.add(
            path("disposal_time_step"),
            Cause::MustBeAtMost(MAX_DISPOSAL_TIME_STEP.unsigned_abs()),
        );
    }

    errs
}

fn check_price_monitoring(params: Option<&PriceMonitoringParameters>, root: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(params) = params.filter(|params| !params.triggers.is_empty()) else {
        return errs;
    };
    let triggers = format!("{root}.price_monitoring_parameters.triggers");

    if params.triggers.len() > MAX_PRICE_MONITORING_TRIGGERS {
        errs.add(triggers.as_str(), "maximum 5 triggers allowed");
    }

    for (i, trigger) in params.triggers.iter().enumerate() {
        let path = format!("{triggers}.{i}");
        if trigger.horizon <= 0 {
            errs.add(format!("{path}.horizon"), Cause::MustBePositive);
        }
        if trigger.auction_extension <= 0 {
            errs.add(format!("{path}.auction_extension"), Cause::MustBePositive);
        }

        let probability = format!("{path}.probability");
        match parse_decimal(&trigger.probability) {
            None => errs.add(
                probability,
                "must be numeric and be between 0 (exclusive) and 1 (exclusive)",
            ),
            Some(p) if p <= decimal(9, 1) || p >= BigDecimal::from(1) => errs.add(
                probability,
                "should be between 0.9 (exclusive) and 1 (exclusive)",
            ),
            Some(_) => {}
        }
    }

    errs
}

fn check_liquidity_monitoring(
    params: Option<&LiquidityMonitoringParameters>,
    root: &str,
) -> ErrorSet {
    let root = format!("{root}.liquidity_monitoring_parameters");
    let Some(params) = params else {
        return ErrorSet::new().add_final(root, Cause::IsRequired);
    };
    check_target_stake(params.target_stake_parameters.as_ref(), &root)
}

fn check_target_stake(params: Option<&TargetStakeParameters>, root: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let root = format!("{root}.target_stake_parameters");
    let Some(params) = params else {
        return errs.add_final(root, Cause::IsRequired);
    };

    if params.time_window <= 0 {
        errs.add(format!("{root}.time_window"), Cause::MustBePositive);
    }
    let scaling_factor = format!("{root}.scaling_factor");
    match parse_factor(&params.scaling_factor) {
        None => errs.add(scaling_factor, Cause::IsNotValidNumber),
        Some(f) if !f.is_positive() => errs.add(scaling_factor, Cause::MustBePositive),
        Some(_) => {}
    }

    errs
}

// ===== INSTRUMENTS =====

fn check_new_instrument(instrument: Option<&InstrumentConfiguration>, root: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(instrument) = instrument else {
        return errs.add_final(root, Cause::IsRequired);
    };

    if instrument.name.is_empty() {
        errs.add(format!("{root}.name"), Cause::IsRequired);
    }
    if instrument.code.is_empty() {
        errs.add(format!("{root}.code"), Cause::IsRequired);
    }

    let product = format!("{root}.product");
    match &instrument.product {
        None => return errs.add_final(product, Cause::IsRequired),
        Some(InstrumentProduct::Future(future)) => {
            let path = format!("{product}.future");
            if future.settlement_asset.is_empty() {
                errs.add(format!("{path}.settlement_asset"), Cause::IsRequired);
            }
            if future.quote_name.is_empty() {
                errs.add(format!("{path}.quote_name"), Cause::IsRequired);
            }
        }
        Some(InstrumentProduct::Perpetual(perps)) => {
            let path = format!("{product}.perps");
            if perps.settlement_asset.is_empty() {
                errs.add(format!("{path}.settlement_asset"), Cause::IsRequired);
            }
            if perps.quote_name.is_empty() {
                errs.add(format!("{path}.quote_name"), Cause::IsRequired);
            }
            check_funding_terms(&mut errs, &path, &FundingTerms::from(perps));
        }
        Some(InstrumentProduct::Spot(spot)) => {
            let path = format!("{product}.spot");
            if spot.base_asset.is_empty() {
                errs.add(format!("{path}.base_asset"), Cause::IsRequired);
            }
            if spot.quote_asset.is_empty() {
                errs.add(format!("{path}.quote_asset"), Cause::IsRequired);
            }
            if spot.base_asset == spot.quote_asset {
                errs.add(format!("{path}.quote_asset"), Cause::IsNotValid);
            }
            if spot.name.is_empty() {
                errs.add(format!("{path}.name"), Cause::IsRequired);
            }
        }
    }

    errs
}

fn check_update_instrument(
    instrument: Option<&UpdateInstrumentConfiguration>,
    root: &str,
) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(instrument) = instrument else {
        return errs.add_final(root, Cause::IsRequired);
    };

    if instrument.code.is_empty() {
        errs.add(format!("{root}.code"), Cause::IsRequired);
    }
    if instrument.name.is_empty() {
        errs.add(format!("{root}.name"), Cause::IsRequired);
    }

    let product = format!("{root}.product");
    match &instrument.product {
        None => return errs.add_final(product, Cause::IsRequired),
        Some(UpdateInstrumentProduct::Future(future)) => {
            if future.quote_name.is_empty() {
                errs.add(format!("{product}.future.quote_name"), Cause::IsRequired);
            }
        }
        Some(UpdateInstrumentProduct::Perpetual(perps)) => {
            let path = format!("{product}.perps");
            if perps.quote_name.is_empty() {
                errs.add(format!("{path}.quote_name"), Cause::IsRequired);
            }
            check_funding_terms(&mut errs, &path, &FundingTerms::from(perps));
        }
    }

    errs
}

/// Funding fields shared by new and updated perpetuals.
struct FundingTerms<'a> {
    margin_funding_factor: &'a str,
    interest_rate: &'a str,
    clamp_lower_bound: &'a str,
    clamp_upper_bound: &'a str,
    scaling_factor: Option<&'a str>,
    lower_bound: Option<&'a str>,
    upper_bound: Option<&'a str>,
}

impl<'a> From<&'a PerpetualProduct> for FundingTerms<'a> {
    fn from(perps: &'a PerpetualProduct) -> Self {
        Self {
            margin_funding_factor: &perps.margin_funding_factor,
            interest_rate: &perps.interest_rate,
            clamp_lower_bound: &perps.clamp_lower_bound,
            clamp_upper_bound: &perps.clamp_upper_bound,
            scaling_factor: perps.funding_rate_scaling_factor.as_deref(),
            lower_bound: perps.funding_rate_lower_bound.as_deref(),
            upper_bound: perps.funding_rate_upper_bound.as_deref(),
        }
    }
}

impl<'a> From<&'a UpdatePerpetualProduct> for FundingTerms<'a> {
    fn from(perps: &'a UpdatePerpetualProduct) -> Self {
        Self {
            margin_funding_factor: &perps.margin_funding_factor,
            interest_rate: &perps.interest_rate,
            clamp_lower_bound: &perps.clamp_lower_bound,
            clamp_upper_bound: &perps.clamp_upper_bound,
            scaling_factor: perps.funding_rate_scaling_factor.as_deref(),
            lower_bound: perps.funding_rate_lower_bound.as_deref(),
            upper_bound: perps.funding_rate_upper_bound.as_deref(),
        }
    }
}

fn check_funding_terms(errs: &mut ErrorSet, root: &str, terms: &FundingTerms<'_>) {
    let path = |field: &str| format!("{root}.{field}");
    let (zero, one, minus_one) = (BigDecimal::zero(), BigDecimal::from(1), BigDecimal::from(-1));

    check_bounded(
        errs,
        path("margin_funding_factor"),
        terms.margin_funding_factor,
        &zero,
        &one,
        Cause::MustBeWithinRange01,
    );
    check_bounded(
        errs,
        path("interest_rate"),
        terms.interest_rate,
        &minus_one,
        &one,
        Cause::MustBeWithinRange11,
    );
    let lower = check_bounded(
        errs,
        path("clamp_lower_bound"),
        terms.clamp_lower_bound,
        &minus_one,
        &one,
        Cause::MustBeWithinRange11,
    );
    let upper = check_bounded(
        errs,
        path("clamp_upper_bound"),
        terms.clamp_upper_bound,
        &minus_one,
        &one,
        Cause::MustBeWithinRange11,
    );
    if let (Some(lower), Some(upper)) = (lower, upper) {
        if upper < lower {
            errs.add(
                path("clamp_upper_bound"),
                "must be greater than or equal to clamp_lower_bound",
            );
        }
    }

    if let Some(scaling_factor) = terms.scaling_factor {
        match parse_decimal(scaling_factor) {
            None => errs.add(path("funding_rate_scaling_factor"), Cause::IsNotValidNumber),
            Some(f) if !f.is_positive() => {
                errs.add(path("funding_rate_scaling_factor"), Cause::MustBePositive)
            }
            Some(_) => {}
        }
    }

    let mut parse_bound = |field: &str, value: Option<&str>| {
        let value = value?;
        let parsed = parse_decimal(value);
        if parsed.is_none() {
            errs.add(path(field), Cause::IsNotValidNumber);
        }
        parsed
    };
    let lower = parse_bound("funding_rate_lower_bound", terms.lower_bound);
    let upper = parse_bound("funding_rate_upper_bound", terms.upper_bound);
    if let (Some(lower), Some(upper)) = (lower, upper) {
        if lower > upper {
            errs.add(path("funding_rate_lower_bound"), Cause::IsNotValid);
        }
    }
}

// ===== RISK MODELS =====

fn check_risk_parameters(
    params: Option<&RiskParameters>,
    root: &str,
    bounds: RiskBounds,
) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let root = format!("{root}.risk_parameters");
    let Some(params) = params else {
        return errs.add_final(root, Cause::IsRequired);
    };

    match params {
        RiskParameters::Simple(simple) => {
            check_simple_risk_model(&mut errs, &format!("{root}.simple"), simple)
        }
        RiskParameters::LogNormal(model) => {
            errs.merge(check_log_normal_risk_model(
                model,
                &format!("{root}.log_normal"),
                bounds,
            ));
        }
    }

    errs
}

fn check_simple_risk_model(errs: &mut ErrorSet, root: &str, params: &SimpleModelParams) {
    let path = |field: &str| format!("{root}.{field}");

    match parse_factor(&params.min_move_down) {
        None => errs.add(path("min_move_down"), Cause::IsNotValidNumber),
        Some(m) if m.is_positive() => errs.add(path("min_move_down"), Cause::MustBeNegativeOrZero),
        Some(_) => {}
    }
    match parse_factor(&params.max_move_up) {
        None => errs.add(path("max_move_up"), Cause::IsNotValidNumber),
        Some(m) if m.is_negative() => errs.add(path("max_move_up"), Cause::MustBePositiveOrZero),
        Some(_) => {}
    }
    match parse_factor(&params.probability_of_trading) {
        None => errs.add(path("probability_of_trading"), Cause::IsNotValidNumber),
        Some(p) if !within(&p, &BigDecimal::zero(), &BigDecimal::from(1)) => errs.add(
            path("probability_of_trading"),
            "should be between 0 (inclusive) and 1 (inclusive)",
        ),
        Some(_) => {}
    }
}

/// Stops at the first bad field: later bounds are meaningless without the
/// earlier ones.
fn check_log_normal_risk_model(
    model: &LogNormalRiskModel,
    root: &str,
    bounds: RiskBounds,
) -> ErrorSet {
    let errs = ErrorSet::new();
    let path = |field: &str| format!("{root}.{field}");
    let Some(params) = &model.params else {
        return errs.add_final(path("params"), Cause::IsRequired);
    };
    let listing = bounds == RiskBounds::Listing;

    let Some(risk_aversion) = parse_factor(&model.risk_aversion_parameter) else {
        return errs.add_final(path("risk_aversion_parameter"), Cause::IsNotValidNumber);
    };
    if listing && !within(&risk_aversion, &decimal(1, 8), &decimal(1, 1)) {
        return errs.add_final(path("risk_aversion_parameter"), "must be between [1e-8, 0.1]");
    }
    if !listing && !risk_aversion.is_positive() {
        return errs.add_final(path("risk_aversion_parameter"), Cause::MustBePositive);
    }

    let Some(tau) = parse_factor(&model.tau) else {
        return errs.add_final(path("tau"), Cause::IsNotValidNumber);
    };
    if listing && !within(&tau, &decimal(1, 8), &BigDecimal::from(1)) {
        return errs.add_final(path("tau"), "must be between [1e-8, 1]");
    }
    if !listing && !tau.is_positive() {
        return errs.add_final(path("tau"), Cause::MustBePositive);
    }

    let Some(mu) = parse_factor(&params.mu) else {
        return errs.add_final(path("params.mu"), Cause::IsNotValidNumber);
    };
    if listing && !within(&mu, &decimal(-1, 6), &decimal(1, 6)) {
        return errs.add_final(path("params.mu"), "must be between [-1e-6,1e-6]");
    }

    let Some(sigma) = parse_factor(&params.sigma) else {
        return errs.add_final(path("params.sigma"), Cause::IsNotValidNumber);
    };
    if listing && !within(&sigma, &decimal(1, 3), &BigDecimal::from(50)) {
        return errs.add_final(path("params.sigma"), "must be between [1e-3,50]");
    }
    if !listing && !sigma.is_positive() {
        return errs.add_final(path("params.sigma"), Cause::MustBePositive);
    }

    let Some(r) = parse_factor(&params.r) else {
        return errs.add_final(path("params.r"), Cause::IsNotValidNumber);
    };
    if listing && !within(&r, &BigDecimal::from(-1), &BigDecimal::from(1)) {
        return errs.add_final(path("params.r"), "must be between [-1,1]");
    }

    errs
}

// ===== LIQUIDITY =====

fn check_sla_params(params: Option<&LiquiditySlaParameters>, root: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(params) = params else {
        return errs.add_final(root, Cause::IsRequired);
    };
    let path = |field: &str| format!("{root}.{field}");
    let (zero, one) = (BigDecimal::zero(), BigDecimal::from(1));

    match parse_decimal(&params.price_range) {
        None => errs.add(path("price_range"), Cause::IsNotValidNumber),
        Some(range) if !range.is_positive() || range > BigDecimal::from(20) => errs.add(
            path("price_range"),
            "price range must be strictly greater than 0 and less than or equal to 20",
        ),
        Some(_) => {}
    }

    for (field, value) in [
        ("commitment_min_time_fraction", &params.commitment_min_time_fraction),
        ("sla_competition_factor", &params.sla_competition_factor),
    ] {
        match parse_decimal(value) {
            None => errs.add(path(field), Cause::IsNotValidNumber),
            Some(f) if !within(&f, &zero, &one) => errs.add(path(field), Cause::MustBeWithinRange01),
            Some(_) => {}
        }
    }

    if params.performance_hysteresis_epochs > MAX_PERFORMANCE_HYSTERESIS_EPOCHS {
        errs.add(path("performance_hysteresis_epochs"), "must be less than 366");
    }

    errs
}

/// Optional: without settings the market prices liquidity by margin cost.
fn check_liquidity_fee_settings(settings: Option<&LiquidityFeeSettings>, root: &str) -> ErrorSet {
    let mut errs = ErrorSet::new();
    let Some(settings) = settings else {
        return errs;
    };
    let method_path = format!("{root}.liquidity_fee_settings.method");
    let fee_path = format!("{root}.liquidity_fee_settings.fee_constant");

    let method = require_enum::<LiquidityFeeMethod>(&mut errs, method_path.as_str(), settings.method);
    let is_constant = method == Some(LiquidityFeeMethod::Constant);

    match &settings.fee_constant {
        None if is_constant => errs.add(fee_path, Cause::IsRequired),
        None => {}
        Some(fee) => {
            if !is_constant {
                errs.add(method_path, Cause::IsNotValid);
            }
            match parse_decimal(fee) {
                None => errs.add(fee_path, Cause::IsNotValidNumber),
                Some(f) if f.is_negative() => errs.add(fee_path, Cause::MustBePositiveOrZero),
                Some(f) if f > BigDecimal::from(1) => errs.add(fee_path, Cause::MustBeWithinRange01),
                Some(_) => {}
            }
        }
    }

    errs
}
