//! Category summary calculator.
//!
//! Gains are measured against what was paid: market positions report unrealized P/L,
//! property and deposits their growth, recurring funds their value over contributions.
//! Cost categories report today's outstanding or accumulated amount.

use rust_decimal::Decimal;

use super::summary_model::{CategorySummary, SummaryKind};
use crate::constants::DISPLAY_DECIMAL_PRECISION;
use crate::portfolio::category::Category;
use crate::portfolio::context::ValuationContext;
use crate::portfolio::holdings::{
    contribution_count, deposit_value, property_value, recurring_value, Holding, HoldingKind,
    MarketPosition,
};
use crate::portfolio::obligations::{cost_at, ObligationKind};
use crate::portfolio::Portfolio;
use crate::utils::compounding::{saturating_mul, saturating_sub};

/// Summary for every category, investments first.
pub fn summarize(portfolio: &Portfolio, ctx: &ValuationContext) -> Vec<CategorySummary> {
    Category::INVESTMENTS
        .iter()
        .chain(Category::LIFE_EVENTS.iter())
        .map(|category| summarize_category(portfolio, ctx, *category))
        .collect()
}

/// Summary for a single category.
pub fn summarize_category(
    portfolio: &Portfolio,
    ctx: &ValuationContext,
    category: Category,
) -> CategorySummary {
    if category.is_investment() {
        investment_summary(portfolio, ctx, category)
    } else {
        cost_summary(portfolio, ctx, category)
    }
}

fn summary_label(category: Category) -> String {
    match category {
        Category::Stocks => "Total Stock P/L".to_string(),
        Category::Properties => "Total Property Value Gain".to_string(),
        Category::MutualFunds => "Total Mutual Fund Gain".to_string(),
        Category::FixedDeposits => "Total Interest Earned".to_string(),
        Category::Gold => "Total Gold Gain".to_string(),
        Category::Silver => "Total Silver Gain".to_string(),
        Category::PostRetirement => "Total Retirement Savings".to_string(),
        Category::Loans => "Total Remaining Loans".to_string(),
        Category::Insurance => "Total Insurance Paid".to_string(),
        other => format!("Total {} Cost", other.label()),
    }
}

fn investment_summary(
    portfolio: &Portfolio,
    ctx: &ValuationContext,
    category: Category,
) -> CategorySummary {
    let holdings: Vec<&Holding> = portfolio
        .holdings
        .iter()
        .filter(|h| h.category() == category)
        .collect();

    let amount = holdings
        .iter()
        .map(|h| holding_gain(h, ctx))
        .fold(Decimal::ZERO, Decimal::saturating_add);

    let changes: Vec<Decimal> = holdings
        .iter()
        .filter_map(|h| h.market_position())
        .filter_map(|p| daily_change(&p))
        .collect();
    let today_change = (!changes.is_empty()).then(|| {
        changes
            .into_iter()
            .fold(Decimal::ZERO, Decimal::saturating_add)
            .round_dp(DISPLAY_DECIMAL_PRECISION)
    });

    CategorySummary {
        category,
        label: summary_label(category),
        amount: amount.round_dp(DISPLAY_DECIMAL_PRECISION),
        kind: SummaryKind::Investment,
        item_count: holdings.len(),
        today_change,
    }
}

/// Today's gain on a holding; the amount itself for retirement contributions.
fn holding_gain(holding: &Holding, ctx: &ValuationContext) -> Decimal {
    match &holding.kind {
        HoldingKind::Equity(p) | HoldingKind::FundLive(p) => unrealized(p),
        HoldingKind::Commodity(c) => unrealized(&c.position()),
        HoldingKind::FundRecurring(r) => {
            let contributed = saturating_mul(r.amount, Decimal::from(contribution_count(r, ctx, 0)));
            saturating_sub(recurring_value(r, ctx, 0), contributed)
        }
        HoldingKind::Property(p) => {
            saturating_sub(property_value(p, ctx, 0), p.purchase_price)
        }
        HoldingKind::Deposit(d) => saturating_sub(deposit_value(d, 0), d.principal),
        HoldingKind::RetirementContribution(r) => r.amount,
    }
}

fn unrealized(position: &MarketPosition) -> Decimal {
    saturating_sub(position.market_value(), position.invested_amount())
}

fn daily_change(position: &MarketPosition) -> Option<Decimal> {
    let previous_close = position.previous_close?;
    if position.current_price <= Decimal::ZERO {
        return None;
    }
    Some(saturating_mul(
        saturating_sub(position.current_price, previous_close),
        position.quantity,
    ))
}

fn cost_summary(
    portfolio: &Portfolio,
    ctx: &ValuationContext,
    category: Category,
) -> CategorySummary {
    let mut item_count = 0;
    let mut amount = Decimal::ZERO;

    for obligation in portfolio.obligations.iter().filter(|o| o.category() == category) {
        item_count += 1;
        let cost = match &obligation.kind {
            ObligationKind::Loan(_) | ObligationKind::Insurance(_) => cost_at(obligation, ctx, 0),
            // Life-cost categories report the planned amount, whenever it falls due.
            ObligationKind::RecurringExpense(e) => e.annual_cost,
            ObligationKind::ScheduledEvent(e) => e.cost,
        };
        amount = amount.saturating_add(cost);
    }

    CategorySummary {
        category,
        label: summary_label(category),
        amount: amount.round_dp(DISPLAY_DECIMAL_PRECISION),
        kind: SummaryKind::Cost,
        item_count,
        today_change: None,
    }
}
