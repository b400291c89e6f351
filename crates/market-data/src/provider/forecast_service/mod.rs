//! HTTP client for the projection service.
//!
//! The service exposes two endpoints:
//! - `POST /project` with `{assetClass, symbol, investedAmount}` returning
//!   `{projection, params, isSimulated}`
//! - `GET /price/{ticker}` returning `{symbol, c, pc}`
//!
//! Any non-2xx status or undecodable body is reported as an error; the registry
//! turns it into a fallback for that symbol only.

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{ForecastRequest, ForecastResponse, SpotPrice};
use crate::provider::{ForecastProvider, SpotPriceProvider};

/// Provider ID constant
const PROVIDER_ID: &str = "FORECAST_SERVICE";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Projection service provider.
///
/// # Example
///
/// ```ignore
/// use finsim_market_data::provider::forecast_service::ForecastServiceProvider;
///
/// let provider = ForecastServiceProvider::new("http://127.0.0.1:8000");
/// ```
pub struct ForecastServiceProvider {
    client: Client,
    base_url: String,
}

impl ForecastServiceProvider {
    /// Create a provider for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Create a provider with a custom transport timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn project_url(&self) -> String {
        format!("{}/project", self.base_url)
    }

    fn price_url(&self, ticker: &str) -> String {
        format!("{}/price/{}", self.base_url, urlencoding::encode(ticker))
    }

    fn map_send_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Request failed: {}", e),
            }
        }
    }

    /// Check the status and decode the JSON body.
    async fn decode<T: DeserializeOwned>(
        response: Response,
        symbol: &str,
    ) -> Result<T, MarketDataError> {
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {} - {}", status, body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to read response: {}", e),
            })?;

        serde_json::from_str(&body).map_err(|e| MarketDataError::ValidationFailed {
            message: format!("Malformed response for {}: {}", symbol, e),
        })
    }
}

#[async_trait]
impl ForecastProvider for ForecastServiceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, MarketDataError> {
        debug!(
            "Forecast request: {} ({}) invested {}",
            request.symbol, request.asset_class, request.invested_amount
        );

        let response = self
            .client
            .post(self.project_url())
            .json(request)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        Self::decode(response, &request.symbol).await
    }
}

#[async_trait]
impl SpotPriceProvider for ForecastServiceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_spot_price(&self, ticker: &str) -> Result<SpotPrice, MarketDataError> {
        debug!("Spot price request: {}", ticker);

        let response = self
            .client
            .get(self.price_url(ticker))
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let mut price: SpotPrice = Self::decode(response, ticker).await?;
        if price.symbol.is_empty() {
            price.symbol = ticker.to_string();
        }
        Ok(price)
    }
}
