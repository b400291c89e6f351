use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{EDUCATION_INFLATION_RATE, HOUSEHOLD_INFLATION_RATE};
use crate::portfolio::category::Category;

/// A liability or a recurring/scheduled cost.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Obligation {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: ObligationKind,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ObligationKind {
    Loan(Loan),
    Insurance(Insurance),
    RecurringExpense(RecurringExpense),
    ScheduledEvent(ScheduledEvent),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    pub principal: Decimal,
    /// Stored with the loan but not used by the balance model, which decays at a fixed 5%.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_rate_percent: Option<Decimal>,
    pub start_year: Option<i32>,
}

/// How insurance premiums are accumulated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PremiumModel {
    /// Total premiums paid since the start year, `premium × (yearsPassed + 1)`.
    Cumulative,
    /// Running premium level within the policy term, indexed by inflation.
    TermIndexed,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insurance {
    pub annual_premium: Decimal,
    pub start_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_inflation_rate_percent: Option<Decimal>,
    /// Explicit model; inferred from the term/inflation fields when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_model: Option<PremiumModel>,
}

impl Insurance {
    /// Records without a term or an inflation rate predate the term-aware model.
    pub fn effective_premium_model(&self) -> PremiumModel {
        self.premium_model.unwrap_or(
            if self.term_years.is_none() && self.annual_inflation_rate_percent.is_none() {
                PremiumModel::Cumulative
            } else {
                PremiumModel::TermIndexed
            },
        )
    }
}

/// Inflation bucket for recurring expenses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ExpenseCategory {
    Education,
    Bills,
    Personal,
    Unclassified,
}

impl ExpenseCategory {
    pub fn inflation_rate(&self) -> Decimal {
        match self {
            ExpenseCategory::Education => EDUCATION_INFLATION_RATE,
            ExpenseCategory::Bills | ExpenseCategory::Personal => HOUSEHOLD_INFLATION_RATE,
            ExpenseCategory::Unclassified => Decimal::ZERO,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    pub annual_cost: Decimal,
    pub category: ExpenseCategory,
}

/// A one-off cost that lands in a single calendar year.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub cost: Decimal,
    pub trigger_year: Option<i32>,
}

impl Obligation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: ObligationKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }

    /// Dashboard category the obligation is listed under.
    pub fn category(&self) -> Category {
        match &self.kind {
            ObligationKind::Loan(_) => Category::Loans,
            ObligationKind::Insurance(_) => Category::Insurance,
            ObligationKind::RecurringExpense(e) => match e.category {
                ExpenseCategory::Education => Category::Education,
                ExpenseCategory::Bills => Category::Bills,
                ExpenseCategory::Personal | ExpenseCategory::Unclassified => {
                    Category::PersonalExpense
                }
            },
            ObligationKind::ScheduledEvent(_) => Category::Marriage,
        }
    }
}
