//! Plans the outbound forecast batch for a portfolio.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::portfolio::Portfolio;
use crate::utils::compounding::saturating_add;
use finsim_market_data::{AssetClass, ForecastRequest};

/// Holdings that share one forecast symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolGroup {
    pub asset_class: AssetClass,
    /// Indexes into `Portfolio::holdings`.
    pub holdings: Vec<usize>,
    /// Sum of `quantity × purchasePrice` across the group.
    pub invested_amount: Decimal,
}

/// Groups forecastable holdings by forecast symbol.
///
/// When two holdings disagree on the asset class for a symbol, the first one wins.
pub fn group_by_forecast_symbol(portfolio: &Portfolio) -> BTreeMap<String, SymbolGroup> {
    let mut groups: BTreeMap<String, SymbolGroup> = BTreeMap::new();
    for (index, holding) in portfolio.holdings.iter().enumerate() {
        let Some((asset_class, symbol)) = holding.forecast_key() else {
            continue;
        };
        let group = groups.entry(symbol).or_insert_with(|| SymbolGroup {
            asset_class,
            holdings: Vec::new(),
            invested_amount: Decimal::ZERO,
        });
        group.holdings.push(index);
        group.invested_amount = saturating_add(group.invested_amount, holding.invested_amount());
    }
    groups
}

/// One request per distinct forecast symbol, ordered by symbol.
pub fn build_forecast_requests(portfolio: &Portfolio) -> Vec<ForecastRequest> {
    group_by_forecast_symbol(portfolio)
        .into_iter()
        .map(|(symbol, group)| ForecastRequest::new(group.asset_class, symbol, group.invested_amount))
        .collect()
}
