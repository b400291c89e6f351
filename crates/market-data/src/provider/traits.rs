//! Provider trait definitions.
//!
//! This module defines the two contracts the engine consumes:
//! [`ForecastProvider`] for per-symbol projections and [`SpotPriceProvider`]
//! for the latest price of a ticker.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ForecastRequest, ForecastResponse, SpotPrice};

/// Trait for forecast providers.
///
/// Implementations only deal with transport: they return the provider's raw
/// [`ForecastResponse`]. Contract checks and fallback synthesis happen in the
/// [`ForecastRegistry`](crate::registry::ForecastRegistry).
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use finsim_market_data::provider::ForecastProvider;
///
/// struct StaticProvider;
///
/// #[async_trait]
/// impl ForecastProvider for StaticProvider {
///     fn id(&self) -> &'static str {
///         "STATIC"
///     }
///
///     async fn get_forecast(
///         &self,
///         request: &ForecastRequest,
///     ) -> Result<ForecastResponse, MarketDataError> {
///         // ... build a response
///     }
/// }
/// ```
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch the projection for a single validated request.
    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, MarketDataError>;
}

/// Trait for spot-price providers.
#[async_trait]
pub trait SpotPriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    fn id(&self) -> &'static str;

    /// Fetch the latest price for a ticker.
    async fn get_spot_price(&self, ticker: &str) -> Result<SpotPrice, MarketDataError>;
}
