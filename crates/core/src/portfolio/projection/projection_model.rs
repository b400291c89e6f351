//! Projection domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::category::Category;

/// Totals for one horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonTotals {
    pub investments: Decimal,
    pub expenses: Decimal,
    /// `investments - expenses`
    pub net_worth: Decimal,
}

/// One year of the risk band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskBandPoint {
    pub year: u32,
    pub most_probable: Decimal,
    pub best_case: Decimal,
    pub worst_case: Decimal,
}

/// Category line in a report breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    /// Category key (e.g., "stocks", "loans")
    pub category: Category,
    /// Display name
    pub name: String,
    /// Value (assets) or cost (life events), positive magnitude
    pub value: Decimal,
    pub is_expense: bool,
}

/// Valuation report for one horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationReport {
    /// The date the projection is measured from
    pub as_of: NaiveDate,
    pub horizon: u32,
    pub investments: Decimal,
    pub expenses: Decimal,
    pub net_worth: Decimal,
    /// Per-category totals, investments first
    pub breakdown: Vec<BreakdownItem>,
    /// Years `0..=horizon`; absent for horizon 0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<Vec<RiskBandPoint>>,
    /// True when any forecast used in this report was simulated
    pub is_simulated: bool,
    /// Symbols whose forecast was simulated
    pub simulated_symbols: Vec<String>,
}

impl ValuationReport {
    pub fn totals(&self) -> HorizonTotals {
        HorizonTotals {
            investments: self.investments,
            expenses: self.expenses,
            net_worth: self.net_worth,
        }
    }
}

/// Options for a projection request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionOptions {
    /// Refresh live prices before valuing.
    #[serde(default)]
    pub refresh_prices: bool,
}
