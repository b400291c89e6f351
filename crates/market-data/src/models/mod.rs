//! Market data models
//!
//! This module contains the core data types exchanged with providers:
//! - `forecast` - Forecast requests, wire responses, normalized records and the per-symbol set
//! - `spot` - Latest spot price quotes

mod forecast;
mod spot;

pub use forecast::{
    AssetClass, ForecastParams, ForecastPoint, ForecastRecord, ForecastRequest, ForecastResponse,
    ForecastSet, SymbolForecast, MAX_FORECAST_HORIZON, MIN_FORECAST_HORIZON,
};
pub use spot::SpotPrice;
