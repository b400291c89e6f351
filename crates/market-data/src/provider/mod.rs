//! Provider contracts and implementations.
//!
//! - [`ForecastProvider`] / [`SpotPriceProvider`] - the async traits the engine consumes
//! - [`forecast_service::ForecastServiceProvider`] - HTTP client for the projection service

pub mod forecast_service;
mod traits;

pub use traits::{ForecastProvider, SpotPriceProvider};
