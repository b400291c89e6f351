//! Obligation valuators.
//!
//! `cost_at` maps an obligation and a horizon to a non-negative currency cost.

use rust_decimal::Decimal;

use super::obligations_model::{
    Insurance, Loan, Obligation, ObligationKind, PremiumModel, RecurringExpense, ScheduledEvent,
};
use crate::constants::{LOAN_DECAY_RATE, SCHEDULED_EVENT_INFLATION_RATE};
use crate::portfolio::context::ValuationContext;
use crate::utils::compounding::{compound, percent_to_rate, saturating_mul};

/// Cost of an obligation `years_from_now` years after the valuation date.
pub fn cost_at(obligation: &Obligation, ctx: &ValuationContext, years_from_now: u32) -> Decimal {
    let projected_year = ctx.target_year(years_from_now);
    let cost = match &obligation.kind {
        ObligationKind::Loan(loan) => loan_balance(loan, projected_year),
        ObligationKind::Insurance(policy) => insurance_cost(policy, projected_year, years_from_now),
        ObligationKind::RecurringExpense(expense) => recurring_cost(expense, years_from_now),
        ObligationKind::ScheduledEvent(event) => {
            scheduled_cost(event, projected_year, years_from_now)
        }
    };
    cost.max(Decimal::ZERO)
}

/// Outstanding balance: the full principal until the start year, then 5% less each year.
///
/// A loan without a start year carries no balance.
pub fn loan_balance(loan: &Loan, projected_year: i32) -> Decimal {
    let Some(start_year) = loan.start_year.filter(|y| *y != 0) else {
        return Decimal::ZERO;
    };
    let principal = loan.principal.max(Decimal::ZERO);
    let years_passed = i64::from(projected_year) - i64::from(start_year);
    if years_passed <= 0 {
        return principal;
    }
    saturating_mul(principal, compound(-LOAN_DECAY_RATE, years_passed as u64))
}

pub fn insurance_cost(policy: &Insurance, projected_year: i32, years_from_now: u32) -> Decimal {
    let premium = policy.annual_premium.max(Decimal::ZERO);
    match policy.effective_premium_model() {
        PremiumModel::Cumulative => {
            let Some(start_year) = policy.start_year.filter(|y| *y != 0) else {
                return Decimal::ZERO;
            };
            let years_passed = i64::from(projected_year) - i64::from(start_year);
            if years_passed < 0 {
                return Decimal::ZERO;
            }
            saturating_mul(premium, Decimal::from(years_passed + 1))
        }
        PremiumModel::TermIndexed => {
            let active = match policy.start_year.filter(|y| *y != 0) {
                Some(start_year) => {
                    let after_start = start_year <= projected_year;
                    let within_term = policy.term_years.map_or(true, |term| {
                        i64::from(projected_year) <= i64::from(start_year) + i64::from(term)
                    });
                    after_start && within_term
                }
                None => true,
            };
            if !active {
                return Decimal::ZERO;
            }
            let inflation = policy
                .annual_inflation_rate_percent
                .map(percent_to_rate)
                .unwrap_or(Decimal::ZERO);
            saturating_mul(premium, compound(inflation, u64::from(years_from_now)))
        }
    }
}

/// `annualCost × (1 + categoryInflation)^years`.
pub fn recurring_cost(expense: &RecurringExpense, years_from_now: u32) -> Decimal {
    saturating_mul(
        expense.annual_cost.max(Decimal::ZERO),
        compound(expense.category.inflation_rate(), u64::from(years_from_now)),
    )
}

/// Full inflated cost in the trigger year, nothing in any other year.
pub fn scheduled_cost(event: &ScheduledEvent, projected_year: i32, years_from_now: u32) -> Decimal {
    match event.trigger_year {
        Some(trigger_year) if trigger_year == projected_year => saturating_mul(
            event.cost.max(Decimal::ZERO),
            compound(SCHEDULED_EVENT_INFLATION_RATE, u64::from(years_from_now)),
        ),
        _ => Decimal::ZERO,
    }
}
