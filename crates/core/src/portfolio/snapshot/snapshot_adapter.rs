//! Converts the category-keyed snapshot into typed holdings and obligations.

use log::debug;
use rust_decimal::Decimal;

use super::snapshot_model::{
    CostRecord, DepositRecord, FundRecord, InsuranceRecord, LoanRecord, MarketRecord, MetalRecord,
    PortfolioSnapshot, PropertyRecord, RetirementRecord,
};
use crate::constants::DEFAULT_PROPERTY_GROWTH_PERCENT;
use crate::errors::Result;
use crate::portfolio::category::Category;
use crate::portfolio::holdings::{
    CommodityPosition, DepositHolding, Holding, HoldingKind, MarketPosition, Metal,
    PropertyHolding, RecurringContribution, RetirementContribution,
};
use crate::portfolio::obligations::{
    ExpenseCategory, Insurance, Loan, Obligation, ObligationKind, PremiumModel, RecurringExpense,
    ScheduledEvent,
};
use crate::portfolio::portfolio_model::Portfolio;

const FUND_MODE_LIVE: &str = "live";
const FUND_MODE_SIP: &str = "sip";

impl PortfolioSnapshot {
    /// Parses a stored snapshot document.
    pub fn from_json(document: &str) -> Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Typed view of the snapshot. The snapshot itself is left untouched.
    pub fn to_portfolio(&self) -> Portfolio {
        let mut holdings = Vec::new();
        let mut obligations = Vec::new();

        holdings.extend(indexed(&self.stocks).map(|(i, r)| equity(r, i)));
        holdings.extend(indexed(&self.mutual_funds).map(|(i, r)| fund(r, i)));
        holdings.extend(indexed(&self.properties).map(|(i, r)| property(r, i)));
        holdings.extend(indexed(&self.fd).map(|(i, r)| deposit(r, i)));
        holdings.extend(indexed(&self.gold).map(|(i, r)| metal(r, Metal::Gold, i)));
        holdings.extend(indexed(&self.silver).map(|(i, r)| metal(r, Metal::Silver, i)));
        holdings.extend(indexed(&self.post_retirement).map(|(i, r)| retirement(r, i)));

        obligations.extend(indexed(&self.marriage).map(|(i, r)| scheduled_event(r, i)));
        obligations.extend(
            indexed(&self.education)
                .map(|(i, r)| recurring_expense(r, Category::Education, ExpenseCategory::Education, i)),
        );
        obligations.extend(
            indexed(&self.bills)
                .map(|(i, r)| recurring_expense(r, Category::Bills, ExpenseCategory::Bills, i)),
        );
        obligations.extend(indexed(&self.personal_expense).map(|(i, r)| {
            recurring_expense(r, Category::PersonalExpense, ExpenseCategory::Personal, i)
        }));
        obligations.extend(indexed(&self.loans).map(|(i, r)| loan(r, i)));
        obligations.extend(indexed(&self.insurance).map(|(i, r)| insurance(r, i)));

        debug!(
            "Snapshot adapted to {} holdings and {} obligations",
            holdings.len(),
            obligations.len()
        );

        Portfolio::new(holdings, obligations)
    }
}

fn indexed<T>(records: &[T]) -> impl Iterator<Item = (usize, &T)> {
    records.iter().enumerate()
}

fn record_id(id: &Option<String>, category: Category, index: usize) -> String {
    id.clone()
        .unwrap_or_else(|| format!("{}-{}", category.key(), index))
}

fn record_name(name: &Option<String>, category: Category) -> String {
    name.clone()
        .unwrap_or_else(|| category.label().to_string())
}

fn non_negative(value: Decimal, field: &str, id: &str) -> Decimal {
    if value < Decimal::ZERO {
        debug!("{}: negative {} {} treated as 0", id, field, value);
        Decimal::ZERO
    } else {
        value
    }
}

fn position(
    id: &str,
    quantity: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    previous_close: Option<Decimal>,
) -> MarketPosition {
    MarketPosition {
        quantity: non_negative(quantity, "quantity", id),
        purchase_price: non_negative(purchase_price, "purchasePrice", id),
        current_price: non_negative(current_price, "currentPrice", id),
        previous_close: previous_close.filter(|p| *p > Decimal::ZERO),
    }
}

fn equity(record: &MarketRecord, index: usize) -> Holding {
    let id = record_id(&record.id, Category::Stocks, index);
    let kind = HoldingKind::Equity(position(
        &id,
        record.quantity,
        record.purchase_price,
        record.current_price,
        record.previous_close,
    ));
    Holding {
        name: record_name(&record.name, Category::Stocks),
        symbol: record.symbol.clone(),
        kind,
        id,
    }
}

fn fund(record: &FundRecord, index: usize) -> Holding {
    let id = record_id(&record.id, Category::MutualFunds, index);
    let is_live = match record.mode.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some(FUND_MODE_LIVE) => true,
        Some(FUND_MODE_SIP) => false,
        _ => record.symbol.is_some(),
    };

    let kind = if is_live {
        HoldingKind::FundLive(position(
            &id,
            record.quantity,
            record.purchase_price,
            record.current_price,
            record.previous_close,
        ))
    } else {
        HoldingKind::FundRecurring(RecurringContribution {
            amount: non_negative(record.invested, "invested", &id),
            interval_months: record.recurring_months.unwrap_or(0),
            start_date: record.start_date,
            is_compounded: record.is_compounded,
            compound_rate_percent: record.compound_rate,
        })
    };

    Holding {
        name: record_name(&record.name, Category::MutualFunds),
        symbol: record.symbol.clone(),
        kind,
        id,
    }
}

fn property(record: &PropertyRecord, index: usize) -> Holding {
    let id = record_id(&record.id, Category::Properties, index);
    let kind = HoldingKind::Property(PropertyHolding {
        purchase_price: non_negative(record.purchase_price, "purchasePrice", &id),
        purchase_date: record.purchase_date,
        annual_growth_rate_percent: record.growth_rate.unwrap_or(DEFAULT_PROPERTY_GROWTH_PERCENT),
    });
    Holding::new(id, record_name(&record.name, Category::Properties), kind)
}

fn deposit(record: &DepositRecord, index: usize) -> Holding {
    let id = record_id(&record.id, Category::FixedDeposits, index);
    let kind = HoldingKind::Deposit(DepositHolding {
        principal: non_negative(record.principal, "principal", &id),
        annual_interest_rate_percent: record.interest_rate,
        term_years: non_negative(record.years, "years", &id),
    });
    Holding::new(id, record_name(&record.name, Category::FixedDeposits), kind)
}

fn metal(record: &MetalRecord, metal: Metal, index: usize) -> Holding {
    let category = match metal {
        Metal::Gold => Category::Gold,
        Metal::Silver => Category::Silver,
    };
    let id = record_id(&record.id, category, index);
    let live_price = if record.current_price > Decimal::ZERO {
        record.current_price
    } else {
        record.current_value
    };
    let p = position(
        &id,
        record.quantity,
        record.purchase_price,
        live_price,
        record.previous_close,
    );
    let kind = HoldingKind::Commodity(CommodityPosition {
        metal,
        quantity: p.quantity,
        purchase_price: p.purchase_price,
        current_price: p.current_price,
        previous_close: p.previous_close,
    });
    Holding {
        name: record_name(&record.name, category),
        symbol: record.symbol.clone(),
        kind,
        id,
    }
}

fn retirement(record: &RetirementRecord, index: usize) -> Holding {
    let id = record_id(&record.id, Category::PostRetirement, index);
    let kind = HoldingKind::RetirementContribution(RetirementContribution {
        amount: non_negative(record.amount, "amount", &id),
    });
    Holding::new(id, record_name(&record.name, Category::PostRetirement), kind)
}

fn scheduled_event(record: &CostRecord, index: usize) -> Obligation {
    let id = record_id(&record.id, Category::Marriage, index);
    let kind = ObligationKind::ScheduledEvent(ScheduledEvent {
        cost: non_negative(record.cost, "cost", &id),
        trigger_year: record.start_year,
    });
    Obligation::new(id, record_name(&record.name, Category::Marriage), kind)
}

fn recurring_expense(
    record: &CostRecord,
    category: Category,
    expense_category: ExpenseCategory,
    index: usize,
) -> Obligation {
    let id = record_id(&record.id, category, index);
    let kind = ObligationKind::RecurringExpense(RecurringExpense {
        annual_cost: non_negative(record.cost, "cost", &id),
        category: expense_category,
    });
    Obligation::new(id, record_name(&record.name, category), kind)
}

fn loan(record: &LoanRecord, index: usize) -> Obligation {
    let id = record_id(&record.id, Category::Loans, index);
    let kind = ObligationKind::Loan(Loan {
        principal: non_negative(record.cost, "cost", &id),
        annual_rate_percent: record.loan_rate,
        start_year: record.start_year,
    });
    Obligation::new(id, record_name(&record.name, Category::Loans), kind)
}

fn insurance(record: &InsuranceRecord, index: usize) -> Obligation {
    let id = record_id(&record.id, Category::Insurance, index);
    let premium_model = match record
        .premium_model
        .as_deref()
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("cumulative") => Some(PremiumModel::Cumulative),
        Some("term-indexed") | Some("term_indexed") | Some("termindexed") => {
            Some(PremiumModel::TermIndexed)
        }
        Some(other) => {
            debug!("{}: unknown premium model {:?}, inferring", id, other);
            None
        }
        None => None,
    };
    let kind = ObligationKind::Insurance(Insurance {
        annual_premium: non_negative(record.cost, "cost", &id),
        start_year: record.start_year,
        term_years: record.policy_term,
        annual_inflation_rate_percent: record.inflation_rate,
        premium_model,
    });
    Obligation::new(id, record_name(&record.name, Category::Insurance), kind)
}
