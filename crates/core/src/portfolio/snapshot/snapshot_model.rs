//! Stored portfolio snapshot, as the persistence layer hands it over.
//!
//! The document is keyed by dashboard category and every record keeps its stored
//! field names. Numbers are read leniently: anything unreadable becomes zero (or absent
//! for optional fields) so one bad record cannot blank out a report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::lenient;

/// Equity position (`stocks`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub purchase_price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub current_price: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub previous_close: Option<Decimal>,
}

/// Mutual fund (`mutualFunds`), either live-tracked or fed by contributions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub symbol: Option<String>,
    /// `live` or `sip`; inferred from the symbol when absent.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub purchase_price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub current_price: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub previous_close: Option<Decimal>,
    /// Contribution amount.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub invested: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub recurring_months: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::boolean")]
    pub is_compounded: bool,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub compound_rate: Option<Decimal>,
}

/// Property (`properties`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub purchase_price: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_date")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub growth_rate: Option<Decimal>,
}

/// Fixed deposit (`fd`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub principal: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub interest_rate: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub years: Decimal,
}

/// Gold or silver (`gold`, `silver`). The live per-unit price is stored as `currentValue`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub quantity: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub purchase_price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub current_price: Decimal,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub current_value: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub previous_close: Option<Decimal>,
}

/// Retirement contribution (`postRetirement`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub amount: Decimal,
}

/// Life-event cost (`marriage`, `education`, `bills`, `personalExpense`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_year")]
    pub start_year: Option<i32>,
}

/// Loan (`loans`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub loan_rate: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::opt_year")]
    pub start_year: Option<i32>,
}

/// Insurance policy (`insurance`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceRecord {
    #[serde(default, alias = "_id", deserialize_with = "lenient::opt_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name: Option<String>,
    /// Policy type (General, Health, Term, ULIP); informational.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub category: Option<String>,
    /// Yearly premium.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub cost: Decimal,
    #[serde(default, deserialize_with = "lenient::opt_year")]
    pub start_year: Option<i32>,
    #[serde(default, deserialize_with = "lenient::opt_count")]
    pub policy_term: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub inflation_rate: Option<Decimal>,
    /// `cumulative` or `term-indexed`; inferred from the other fields when absent.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub premium_model: Option<String>,
}

/// Category-keyed portfolio document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(default, deserialize_with = "lenient::list")]
    pub stocks: Vec<MarketRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub mutual_funds: Vec<FundRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub properties: Vec<PropertyRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub fd: Vec<DepositRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub gold: Vec<MetalRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub silver: Vec<MetalRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub post_retirement: Vec<RetirementRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub marriage: Vec<CostRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub education: Vec<CostRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub bills: Vec<CostRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub personal_expense: Vec<CostRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub loans: Vec<LoanRecord>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub insurance: Vec<InsuranceRecord>,
}
