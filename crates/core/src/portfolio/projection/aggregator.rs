//! Horizon aggregator.
//!
//! Sums asset values and obligation costs for one horizon. Lump-sum holdings use the
//! forecast's expected value when their symbol has a provider record at that horizon,
//! split across the holdings sharing the symbol in proportion to what each invested.
//! Simulated records never replace the valuator's own formula; they only feed the risk
//! band and the simulation disclosure.
//!
//! Every per-item value is rounded to `DECIMAL_PRECISION` before it is summed, so totals
//! do not depend on the order holdings or symbols are visited in.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use super::projection_model::{BreakdownItem, HorizonTotals};
use crate::constants::DECIMAL_PRECISION;
use crate::market_data::group_by_forecast_symbol;
use crate::portfolio::category::Category;
use crate::portfolio::context::ValuationContext;
use crate::portfolio::holdings::value_at;
use crate::portfolio::obligations::cost_at;
use crate::portfolio::Portfolio;
use crate::utils::compounding::saturating_mul;
use finsim_market_data::{ForecastRecord, ForecastSet};

/// A holding's slice of its symbol's forecast.
#[derive(Debug, Clone, PartialEq)]
struct ForecastShare {
    symbol: String,
    weight: Decimal,
}

pub struct HorizonAggregator<'a> {
    portfolio: &'a Portfolio,
    forecasts: &'a ForecastSet,
    ctx: ValuationContext,
    /// Aligned with `portfolio.holdings`.
    shares: Vec<Option<ForecastShare>>,
}

impl<'a> HorizonAggregator<'a> {
    pub fn new(portfolio: &'a Portfolio, forecasts: &'a ForecastSet, ctx: ValuationContext) -> Self {
        let mut shares = vec![None; portfolio.holdings.len()];

        for (symbol, group) in group_by_forecast_symbol(portfolio) {
            if forecasts.get(&symbol).is_none() {
                continue;
            }
            let members = Decimal::from(group.holdings.len());
            for index in group.holdings {
                let weight = if group.invested_amount > Decimal::ZERO {
                    portfolio.holdings[index].invested_amount() / group.invested_amount
                } else {
                    Decimal::ONE / members
                };
                shares[index] = Some(ForecastShare {
                    symbol: symbol.clone(),
                    weight,
                });
            }
        }

        Self {
            portfolio,
            forecasts,
            ctx,
            shares,
        }
    }

    pub fn context(&self) -> &ValuationContext {
        &self.ctx
    }

    fn forecast_record(&self, index: usize, years_from_now: u32) -> Option<(&str, &ForecastRecord, Decimal)> {
        let share = self.shares.get(index)?.as_ref()?;
        let record = self.forecasts.record(&share.symbol, years_from_now)?;
        Some((share.symbol.as_str(), record, share.weight))
    }

    /// Value of one holding at a horizon, rounded to valuation precision.
    pub fn holding_value(&self, index: usize, years_from_now: u32) -> Decimal {
        let Some(holding) = self.portfolio.holdings.get(index) else {
            return Decimal::ZERO;
        };
        let value = match self.forecast_record(index, years_from_now) {
            Some((_, record, weight)) if !record.is_simulated => {
                saturating_mul(record.expected_value, weight)
            }
            _ => value_at(holding, &self.ctx, years_from_now),
        };
        value.max(Decimal::ZERO).round_dp(DECIMAL_PRECISION)
    }

    /// Cost of one obligation at a horizon, rounded to valuation precision.
    pub fn obligation_cost(&self, index: usize, years_from_now: u32) -> Decimal {
        self.portfolio
            .obligations
            .get(index)
            .map(|o| cost_at(o, &self.ctx, years_from_now).round_dp(DECIMAL_PRECISION))
            .unwrap_or(Decimal::ZERO)
    }

    /// `{investments, expenses, netWorth}` at a horizon.
    pub fn aggregate(&self, years_from_now: u32) -> HorizonTotals {
        let investments = (0..self.portfolio.holdings.len())
            .map(|i| self.holding_value(i, years_from_now))
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v));
        let expenses = (0..self.portfolio.obligations.len())
            .map(|i| self.obligation_cost(i, years_from_now))
            .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v));

        HorizonTotals {
            investments,
            expenses,
            net_worth: investments.saturating_sub(expenses),
        }
    }

    /// Per-category totals at a horizon, for every category that has records.
    pub fn breakdown(&self, years_from_now: u32) -> Vec<BreakdownItem> {
        let mut totals: BTreeMap<Category, Decimal> = BTreeMap::new();

        for (index, holding) in self.portfolio.holdings.iter().enumerate() {
            let entry = totals.entry(holding.category()).or_insert(Decimal::ZERO);
            *entry = entry.saturating_add(self.holding_value(index, years_from_now));
        }
        for (index, obligation) in self.portfolio.obligations.iter().enumerate() {
            let entry = totals.entry(obligation.category()).or_insert(Decimal::ZERO);
            *entry = entry.saturating_add(self.obligation_cost(index, years_from_now));
        }

        totals
            .into_iter()
            .map(|(category, value)| BreakdownItem {
                category,
                name: category.label().to_string(),
                value,
                is_expense: !category.is_investment(),
            })
            .collect()
    }

    /// Distinct held symbols that carry a forecast record at a horizon.
    pub fn covered_symbols(&self, years_from_now: u32) -> BTreeSet<&str> {
        (0..self.shares.len())
            .filter_map(|i| self.forecast_record(i, years_from_now))
            .map(|(symbol, _, _)| symbol)
            .collect()
    }

    /// Forecast records used at a horizon, one per distinct symbol.
    pub fn covered_records(&self, years_from_now: u32) -> Vec<(&str, &ForecastRecord)> {
        self.covered_symbols(years_from_now)
            .into_iter()
            .filter_map(|symbol| {
                self.forecasts
                    .record(symbol, years_from_now)
                    .map(|record| (symbol, record))
            })
            .collect()
    }
}
