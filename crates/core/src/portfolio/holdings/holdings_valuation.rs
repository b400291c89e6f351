//! Asset valuators.
//!
//! `value_at` maps a holding and a horizon to a currency value. It is pure, total and
//! never negative. Forecast overrides for lump-sum holdings are applied by the
//! aggregator, not here.

use log::debug;
use rust_decimal::Decimal;

use super::holdings_model::{
    DepositHolding, Holding, HoldingKind, MarketPosition, PropertyHolding, RecurringContribution,
    RetirementContribution,
};
use crate::constants::{DEFAULT_SIP_RATE_PERCENT, LUMP_SUM_FALLBACK_RATE, RETIREMENT_GROWTH_RATE};
use crate::portfolio::context::ValuationContext;
use crate::utils::compounding::{
    compound, compound_fractional, percent_to_rate, pow_periods, saturating_add, saturating_mul,
};
use crate::utils::time_utils::{months_between, years_between};

/// Value of a holding `years_from_now` years after the valuation date.
pub fn value_at(holding: &Holding, ctx: &ValuationContext, years_from_now: u32) -> Decimal {
    let value = match &holding.kind {
        HoldingKind::Equity(p) | HoldingKind::FundLive(p) => lump_sum_value(p, years_from_now),
        HoldingKind::Commodity(c) => lump_sum_value(&c.position(), years_from_now),
        HoldingKind::FundRecurring(r) => recurring_value(r, ctx, years_from_now),
        HoldingKind::Property(p) => property_value(p, ctx, years_from_now),
        HoldingKind::Deposit(d) => deposit_value(d, years_from_now),
        HoldingKind::RetirementContribution(r) => retirement_value(r, years_from_now),
    };
    value.max(Decimal::ZERO)
}

/// `(currentPrice or purchasePrice) × quantity × 1.08^years`.
pub fn lump_sum_value(position: &MarketPosition, years_from_now: u32) -> Decimal {
    let today = position.market_value().max(Decimal::ZERO);
    saturating_mul(
        today,
        compound(LUMP_SUM_FALLBACK_RATE, u64::from(years_from_now)),
    )
}

/// Dollar-cost-averaged value of periodic contributions at the target date.
///
/// Every contribution compounds monthly over its own remaining months.
pub fn recurring_value(
    contribution: &RecurringContribution,
    ctx: &ValuationContext,
    years_from_now: u32,
) -> Decimal {
    if contribution.amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let Some(elapsed_months) = elapsed_contribution_months(contribution, ctx, years_from_now) else {
        return Decimal::ZERO;
    };
    let interval = u64::from(contribution.interval_months);
    let contributions = elapsed_months / interval + 1;

    let annual_rate_percent = if contribution.is_compounded {
        contribution.compound_rate_percent.unwrap_or_else(|| {
            debug!("Compounded contribution without a rate; assuming 0%");
            Decimal::ZERO
        })
    } else {
        DEFAULT_SIP_RATE_PERCENT
    };
    let monthly_growth = Decimal::ONE + percent_to_rate(annual_rate_percent) / Decimal::from(12);

    // Walk from the newest contribution (fewest months left) to the oldest.
    let mut factor = pow_periods(monthly_growth, elapsed_months % interval);
    let step = pow_periods(monthly_growth, interval);
    let mut total = Decimal::ZERO;
    for _ in 0..contributions {
        total = saturating_add(total, saturating_mul(contribution.amount, factor));
        factor = saturating_mul(factor, step);
    }
    total
}

/// Months from the first contribution to the target date, or `None` when no
/// contribution has been made by then.
fn elapsed_contribution_months(
    contribution: &RecurringContribution,
    ctx: &ValuationContext,
    years_from_now: u32,
) -> Option<u64> {
    let start_date = contribution.start_date?;
    if contribution.interval_months == 0 {
        return None;
    }
    let elapsed = months_between(start_date, ctx.target_date(years_from_now));
    u64::try_from(elapsed).ok()
}

/// Number of contributions made by the target date, `floor(months / interval) + 1`.
pub fn contribution_count(
    contribution: &RecurringContribution,
    ctx: &ValuationContext,
    years_from_now: u32,
) -> u64 {
    elapsed_contribution_months(contribution, ctx, years_from_now)
        .map(|months| months / u64::from(contribution.interval_months) + 1)
        .unwrap_or(0)
}

/// `purchasePrice × (1 + growth)^(years since purchase + horizon)`.
///
/// Without a purchase date only the horizon offset compounds.
pub fn property_value(
    property: &PropertyHolding,
    ctx: &ValuationContext,
    years_from_now: u32,
) -> Decimal {
    let held_years = property
        .purchase_date
        .map(|date| years_between(date, ctx.as_of))
        .unwrap_or(Decimal::ZERO);
    let years = held_years + Decimal::from(years_from_now);

    saturating_mul(
        property.purchase_price.max(Decimal::ZERO),
        compound_fractional(percent_to_rate(property.annual_growth_rate_percent), years),
    )
}

/// `principal × (1 + rate)^(term + horizon)`; the deposit rolls over at maturity.
pub fn deposit_value(deposit: &DepositHolding, years_from_now: u32) -> Decimal {
    let years = saturating_add(
        deposit.term_years.max(Decimal::ZERO),
        Decimal::from(years_from_now),
    );
    saturating_mul(
        deposit.principal.max(Decimal::ZERO),
        compound_fractional(percent_to_rate(deposit.annual_interest_rate_percent), years),
    )
}

/// `amount × 1.06^years`.
pub fn retirement_value(contribution: &RetirementContribution, years_from_now: u32) -> Decimal {
    saturating_mul(
        contribution.amount.max(Decimal::ZERO),
        compound(RETIREMENT_GROWTH_RATE, u64::from(years_from_now)),
    )
}
