//! Finsim Market Data Crate
//!
//! This crate provides the forecast and spot-price provider contracts for the
//! finsim projection engine.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Per-symbol forecasts for equities, funds, gold and silver
//! - Spot-price quotes used to refresh stored holdings
//! - Concurrent resolution with per-symbol failure isolation
//! - Deterministic simulated fallbacks when the provider cannot answer
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! | ForecastRequest  |  (assetClass, symbol, investedAmount)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! | ForecastRegistry | --> | ForecastProvider |  (HTTP projection service)
//! +------------------+     +------------------+
//!          |                        |
//!          |   error / timeout      v
//!          |<------------- +------------------+
//!          v               |    Validator     |  (normalize to 1..=10)
//! +------------------+     +------------------+
//! |  fallback 8%/yr  |              |
//! +------------------+              v
//!          |               +------------------+
//!          +-------------> |   ForecastSet    |  (one forecast per symbol)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ForecastRequest`] - Outbound per-symbol request
//! - [`SymbolForecast`] - Normalized per-symbol forecast keyed by horizon year
//! - [`ForecastSet`] - Order-independent collection of per-symbol forecasts
//! - [`SpotPrice`] - Latest quote for a ticker

pub mod errors;
pub mod models;
pub mod provider;
pub mod registry;

pub use errors::{ForecastValidationError, MarketDataError};

pub use models::{
    AssetClass, ForecastParams, ForecastPoint, ForecastRecord, ForecastRequest, ForecastResponse,
    ForecastSet, SpotPrice, SymbolForecast, MAX_FORECAST_HORIZON, MIN_FORECAST_HORIZON,
};

pub use provider::forecast_service::ForecastServiceProvider;
pub use provider::{ForecastProvider, SpotPriceProvider};

pub use registry::{
    fallback_forecast, ForecastBatch, ForecastCache, ForecastRegistry, ForecastValidator,
};
