//! Unit tests for the obligation valuators.

use super::*;
use crate::portfolio::context::ValuationContext;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn ctx() -> ValuationContext {
    ValuationContext::new(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
}

fn loan(principal: Decimal, start_year: Option<i32>) -> Obligation {
    Obligation::new(
        "loans-0",
        "Car loan",
        ObligationKind::Loan(Loan {
            principal,
            annual_rate_percent: Some(dec!(9)),
            start_year,
        }),
    )
}

fn insurance(
    start_year: Option<i32>,
    term_years: Option<u32>,
    inflation: Option<Decimal>,
) -> Obligation {
    Obligation::new(
        "insurance-0",
        "Health cover",
        ObligationKind::Insurance(Insurance {
            annual_premium: dec!(1000),
            start_year,
            term_years,
            annual_inflation_rate_percent: inflation,
            premium_model: None,
        }),
    )
}

fn event(cost: Decimal, trigger_year: Option<i32>) -> Obligation {
    Obligation::new(
        "marriage-0",
        "Wedding",
        ObligationKind::ScheduledEvent(ScheduledEvent { cost, trigger_year }),
    )
}

// ============================================================================
// Loans
// ============================================================================

#[test]
fn test_loan_not_started_is_fully_outstanding() {
    let obligation = loan(dec!(10000), Some(2027));
    assert_eq!(cost_at(&obligation, &ctx(), 0), dec!(10000));
    assert_eq!(cost_at(&obligation, &ctx(), 2), dec!(10000));
    assert_eq!(cost_at(&obligation, &ctx(), 3), dec!(9500));
}

#[test]
fn test_loan_decays_five_percent_a_year() {
    let obligation = loan(dec!(10000), Some(2023));
    assert_eq!(cost_at(&obligation, &ctx(), 0), dec!(9025));
    let mut previous = cost_at(&obligation, &ctx(), 0);
    for year in 1..=10 {
        let balance = cost_at(&obligation, &ctx(), year);
        assert_eq!(balance, previous * dec!(0.95));
        previous = balance;
    }
}

#[test]
fn test_loan_without_start_year_is_zero() {
    assert_eq!(cost_at(&loan(dec!(10000), None), &ctx(), 0), Decimal::ZERO);
    assert_eq!(cost_at(&loan(dec!(10000), Some(0)), &ctx(), 3), Decimal::ZERO);
}

// ============================================================================
// Insurance
// ============================================================================

#[test]
fn test_cumulative_insurance_counts_premiums_paid() {
    let obligation = insurance(Some(2020), None, None);
    assert_eq!(cost_at(&obligation, &ctx(), 0), dec!(6000));
    assert_eq!(cost_at(&obligation, &ctx(), 5), dec!(11000));
}

#[test]
fn test_cumulative_insurance_before_start_is_zero() {
    let obligation = insurance(Some(2030), None, None);
    assert_eq!(cost_at(&obligation, &ctx(), 0), Decimal::ZERO);
    assert_eq!(cost_at(&obligation, &ctx(), 5), dec!(1000));
}

#[test]
fn test_cumulative_insurance_without_start_year_is_zero() {
    assert_eq!(cost_at(&insurance(None, None, None), &ctx(), 3), Decimal::ZERO);
}

#[test]
fn test_term_indexed_insurance_is_gated_by_term() {
    let obligation = insurance(Some(2020), Some(10), Some(dec!(7)));
    assert_eq!(cost_at(&obligation, &ctx(), 0), dec!(1000));
    assert_eq!(cost_at(&obligation, &ctx(), 5), dec!(1402.55173070));
    assert_eq!(cost_at(&obligation, &ctx(), 6), Decimal::ZERO);
}

#[test]
fn test_term_indexed_insurance_before_start_is_zero() {
    let obligation = insurance(Some(2027), Some(5), None);
    assert_eq!(cost_at(&obligation, &ctx(), 0), Decimal::ZERO);
    assert_eq!(cost_at(&obligation, &ctx(), 2), dec!(1000));
}

#[test]
fn test_term_indexed_insurance_missing_term_is_always_active() {
    let obligation = insurance(Some(2000), None, Some(dec!(10)));
    assert_eq!(cost_at(&obligation, &ctx(), 2), dec!(1210));
    let obligation = insurance(None, Some(5), Some(dec!(10)));
    assert!(cost_at(&obligation, &ctx(), 50) > Decimal::ZERO);
}

// ============================================================================
// Recurring expenses and scheduled events
// ============================================================================

#[test]
fn test_recurring_expense_inflates_by_category() {
    let education = Obligation::new(
        "education-0",
        "Tuition",
        ObligationKind::RecurringExpense(RecurringExpense {
            annual_cost: dec!(1000),
            category: ExpenseCategory::Education,
        }),
    );
    assert_eq!(cost_at(&education, &ctx(), 0), dec!(1000));
    assert_eq!(cost_at(&education, &ctx(), 2), dec!(1210));

    let bills = Obligation::new(
        "bills-0",
        "Utilities",
        ObligationKind::RecurringExpense(RecurringExpense {
            annual_cost: dec!(1000),
            category: ExpenseCategory::Bills,
        }),
    );
    assert_eq!(cost_at(&bills, &ctx(), 2), dec!(1144.9));

    let flat = Obligation::new(
        "personalExpense-0",
        "Misc",
        ObligationKind::RecurringExpense(RecurringExpense {
            annual_cost: dec!(1000),
            category: ExpenseCategory::Unclassified,
        }),
    );
    assert_eq!(cost_at(&flat, &ctx(), 10), dec!(1000));
}

#[test]
fn test_scheduled_event_lands_in_exactly_one_horizon() {
    let obligation = event(dec!(20000), Some(2028));
    assert_eq!(cost_at(&obligation, &ctx(), 0), Decimal::ZERO);
    assert_eq!(cost_at(&obligation, &ctx(), 3), dec!(25194.24));
    assert_eq!(cost_at(&obligation, &ctx(), 5), Decimal::ZERO);

    let hits = (0..=20)
        .filter(|y| cost_at(&obligation, &ctx(), *y) > Decimal::ZERO)
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn test_scheduled_event_this_year_is_uninflated() {
    assert_eq!(cost_at(&event(dec!(500), Some(2025)), &ctx(), 0), dec!(500));
}

#[test]
fn test_scheduled_event_without_year_is_zero() {
    assert_eq!(cost_at(&event(dec!(500), None), &ctx(), 0), Decimal::ZERO);
}

#[test]
fn test_negative_costs_are_clamped() {
    let obligation = event(dec!(-500), Some(2025));
    assert_eq!(cost_at(&obligation, &ctx(), 0), Decimal::ZERO);
}
