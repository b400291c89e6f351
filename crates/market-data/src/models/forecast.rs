//! Forecast contract types.
//!
//! A forecast provider maps `{assetClass, symbol, investedAmount}` to an
//! `{expectedValue, bestCase, worstCase}` projection per horizon year.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ForecastValidationError;

/// First horizon year a forecast may cover.
pub const MIN_FORECAST_HORIZON: u32 = 1;

/// Last horizon year a forecast may cover.
pub const MAX_FORECAST_HORIZON: u32 = 10;

/// Asset classes the forecast provider understands.
///
/// Serialized with the provider's wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "stock")]
    Equity,
    #[serde(rename = "mutual_fund")]
    Fund,
    #[serde(rename = "gold")]
    CommodityGold,
    #[serde(rename = "silver")]
    CommoditySilver,
}

impl AssetClass {
    /// Wire name sent to the provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::Equity => "stock",
            AssetClass::Fund => "mutual_fund",
            AssetClass::CommodityGold => "gold",
            AssetClass::CommoditySilver => "silver",
        }
    }

    /// Ticker the spot-price provider quotes for commodities (front-month futures).
    pub fn spot_ticker(&self) -> Option<&'static str> {
        match self {
            AssetClass::CommodityGold => Some("GC=F"),
            AssetClass::CommoditySilver => Some("SI=F"),
            AssetClass::Equity | AssetClass::Fund => None,
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = ForecastValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "stock" | "equity" => Ok(AssetClass::Equity),
            "mutual_fund" | "fund" => Ok(AssetClass::Fund),
            "gold" | "commodity-gold" => Ok(AssetClass::CommodityGold),
            "silver" | "commodity-silver" => Ok(AssetClass::CommoditySilver),
            other => Err(ForecastValidationError::UnsupportedAssetClass(
                other.to_string(),
            )),
        }
    }
}

/// Outbound per-symbol forecast request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    pub asset_class: AssetClass,
    pub symbol: String,
    pub invested_amount: Decimal,
}

impl ForecastRequest {
    pub fn new(asset_class: AssetClass, symbol: impl Into<String>, invested_amount: Decimal) -> Self {
        Self {
            asset_class,
            symbol: symbol.into(),
            invested_amount,
        }
    }

    /// Builds a request from untyped input, rejecting an unknown asset class.
    ///
    /// The remaining constraints are checked by the registry validator before dispatch.
    pub fn parse(
        asset_class: &str,
        symbol: &str,
        invested_amount: Decimal,
    ) -> Result<Self, ForecastValidationError> {
        Ok(Self::new(asset_class.parse()?, symbol, invested_amount))
    }

    /// Cache key for this request.
    pub fn cache_key(&self) -> String {
        format!(
            "{}:{}:{}",
            self.asset_class,
            self.symbol,
            self.invested_amount.normalize()
        )
    }
}

/// Drift and volatility the provider used for its projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastParams {
    pub mu: Decimal,
    pub sigma: Decimal,
}

/// One horizon point of a forecast as it arrives on the wire.
///
/// Fields are optional so a partial point can be detected and rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    #[serde(default)]
    pub expected_value: Option<Decimal>,
    #[serde(default)]
    pub best_case: Option<Decimal>,
    #[serde(default)]
    pub worst_case: Option<Decimal>,
}

/// Raw provider response for a single symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    /// Horizon points keyed by the year as a string ("1".."10").
    #[serde(default)]
    pub projection: HashMap<String, ForecastPoint>,
    #[serde(default)]
    pub params: Option<ForecastParams>,
    #[serde(default)]
    pub is_simulated: bool,
}

/// A complete forecast for one symbol at one horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub expected_value: Decimal,
    pub best_case: Decimal,
    pub worst_case: Decimal,
    pub is_simulated: bool,
}

impl ForecastRecord {
    /// Upside deviation from the expected value.
    pub fn best_delta(&self) -> Decimal {
        self.best_case.saturating_sub(self.expected_value)
    }

    /// Downside deviation from the expected value (zero or negative).
    pub fn worst_delta(&self) -> Decimal {
        self.worst_case.saturating_sub(self.expected_value)
    }
}

/// Normalized forecast for one symbol across the horizons it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolForecast {
    pub symbol: String,
    pub asset_class: AssetClass,
    pub invested_amount: Decimal,
    pub records: BTreeMap<u32, ForecastRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ForecastParams>,
    pub is_simulated: bool,
    /// Why the engine substituted a fallback, when it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SymbolForecast {
    pub fn record(&self, horizon: u32) -> Option<&ForecastRecord> {
        self.records.get(&horizon)
    }

    /// Total ordering used to pick a winner when two forecasts for the same symbol meet.
    ///
    /// Provider forecasts beat simulated ones; after that the larger invested amount,
    /// the wider coverage and the larger summed expected value win. Remaining ties are
    /// broken on the records themselves.
    fn merge_rank(&self) -> (bool, Decimal, usize, Decimal, Vec<(u32, Decimal, Decimal, Decimal)>) {
        let expected_sum = self
            .records
            .values()
            .fold(Decimal::ZERO, |acc, r| acc.saturating_add(r.expected_value));
        let points = self
            .records
            .iter()
            .map(|(h, r)| (*h, r.expected_value, r.best_case, r.worst_case))
            .collect();
        (
            !self.is_simulated,
            self.invested_amount,
            self.records.len(),
            expected_sum,
            points,
        )
    }
}

/// Forecasts keyed by symbol.
///
/// Merging is commutative and associative: the outcome never depends on the order in
/// which symbols were resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSet {
    forecasts: HashMap<String, SymbolForecast>,
}

impl ForecastSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: &str) -> Option<&SymbolForecast> {
        self.forecasts.get(symbol)
    }

    /// Record for a symbol at a horizon, if the symbol is covered there.
    pub fn record(&self, symbol: &str, horizon: u32) -> Option<&ForecastRecord> {
        self.forecasts.get(symbol).and_then(|f| f.record(horizon))
    }

    pub fn len(&self) -> usize {
        self.forecasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.forecasts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolForecast> {
        self.forecasts.values()
    }

    /// Inserts a forecast, keeping the higher-ranked one on a symbol collision.
    pub fn insert(&mut self, forecast: SymbolForecast) {
        match self.forecasts.get(&forecast.symbol) {
            Some(existing) if existing.merge_rank() >= forecast.merge_rank() => {}
            _ => {
                self.forecasts.insert(forecast.symbol.clone(), forecast);
            }
        }
    }

    /// Merges two sets.
    pub fn merge(mut self, other: ForecastSet) -> ForecastSet {
        for forecast in other.forecasts.into_values() {
            self.insert(forecast);
        }
        self
    }
}

impl FromIterator<SymbolForecast> for ForecastSet {
    fn from_iter<I: IntoIterator<Item = SymbolForecast>>(iter: I) -> Self {
        let mut set = ForecastSet::new();
        for forecast in iter {
            set.insert(forecast);
        }
        set
    }
}
