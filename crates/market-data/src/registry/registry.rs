//! Forecast registry for resolving per-symbol forecasts.
//!
//! The registry handles:
//! - Request validation before dispatch
//! - Concurrent scatter/gather, one independent branch per symbol
//! - Response normalization against the forecast contract
//! - Fallback synthesis for any symbol whose branch failed
//! - A short-lived response cache

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use log::{debug, info, warn};

use super::cache::ForecastCache;
use super::fallback::fallback_forecast;
use super::validator::ForecastValidator;
use crate::errors::{ForecastValidationError, MarketDataError};
use crate::models::{ForecastRequest, ForecastSet, SymbolForecast};
use crate::provider::ForecastProvider;

/// Outcome of resolving a batch of requests.
#[derive(Debug, Clone, Default)]
pub struct ForecastBatch {
    /// One forecast per accepted symbol, either from the provider or simulated.
    pub forecasts: ForecastSet,
    /// Requests rejected before dispatch.
    pub rejected: Vec<(ForecastRequest, ForecastValidationError)>,
}

impl ForecastBatch {
    /// Symbols that resolved to a simulated forecast.
    pub fn simulated_symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self
            .forecasts
            .iter()
            .filter(|f| f.is_simulated)
            .map(|f| f.symbol.clone())
            .collect();
        symbols.sort();
        symbols
    }
}

/// Forecast registry.
pub struct ForecastRegistry {
    provider: Option<Arc<dyn ForecastProvider>>,
    validator: ForecastValidator,
    cache: Option<ForecastCache>,
    request_timeout: Option<Duration>,
}

impl ForecastRegistry {
    /// Create a registry backed by a provider.
    pub fn new(provider: Arc<dyn ForecastProvider>) -> Self {
        Self {
            provider: Some(provider),
            validator: ForecastValidator::new(),
            cache: None,
            request_timeout: None,
        }
    }

    /// Create a registry with no provider; every symbol resolves to the fallback.
    pub fn without_provider() -> Self {
        Self {
            provider: None,
            validator: ForecastValidator::new(),
            cache: None,
            request_timeout: None,
        }
    }

    /// Cache provider answers for `ttl`. A zero TTL disables caching.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = if ttl.is_zero() {
            None
        } else {
            Some(ForecastCache::new(ttl))
        };
        self
    }

    /// Bound every provider call by `timeout`.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Resolve a single request.
    ///
    /// Returns `Err` only when the request itself is invalid. Provider failures are
    /// downgraded to a simulated fallback.
    pub async fn resolve(
        &self,
        request: &ForecastRequest,
    ) -> Result<SymbolForecast, ForecastValidationError> {
        self.validator.validate_request(request)?;
        Ok(self.resolve_validated(request).await)
    }

    /// Resolve a batch of requests concurrently.
    ///
    /// Each symbol is fetched independently; one symbol's failure never affects another.
    /// The per-symbol results are merged once every branch has settled.
    pub async fn resolve_all(&self, requests: Vec<ForecastRequest>) -> ForecastBatch {
        let mut accepted = Vec::with_capacity(requests.len());
        let mut rejected = Vec::new();

        for request in requests {
            match self.validator.validate_request(&request) {
                Ok(()) => accepted.push(request),
                Err(e) => {
                    warn!("Forecast request for '{}' rejected: {}", request.symbol, e);
                    rejected.push((request, e));
                }
            }
        }

        let resolved = join_all(accepted.iter().map(|r| self.resolve_validated(r))).await;
        let forecasts: ForecastSet = resolved.into_iter().collect();

        info!(
            "Resolved {} forecasts ({} simulated, {} rejected)",
            forecasts.len(),
            forecasts.iter().filter(|f| f.is_simulated).count(),
            rejected.len()
        );

        ForecastBatch {
            forecasts,
            rejected,
        }
    }

    async fn resolve_validated(&self, request: &ForecastRequest) -> SymbolForecast {
        if let Some(cached) = self.cache.as_ref().and_then(|c| c.get(request)) {
            debug!("Forecast cache hit for {}", request.symbol);
            return cached;
        }

        match self.fetch(request).await {
            Ok(forecast) => {
                if let Some(cache) = &self.cache {
                    cache.insert(request, &forecast);
                }
                forecast
            }
            Err(e) => {
                warn!(
                    "Forecast unavailable for {}: {}. Using simulated fallback",
                    request.symbol, e
                );
                fallback_forecast(request, e.reason())
            }
        }
    }

    async fn fetch(&self, request: &ForecastRequest) -> Result<SymbolForecast, MarketDataError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(MarketDataError::NoProvidersAvailable)?;

        let call = provider.get_forecast(request);
        let response = match self.request_timeout {
            Some(timeout) => tokio::time::timeout(timeout, call).await.map_err(|_| {
                MarketDataError::Timeout {
                    provider: provider.id().to_string(),
                }
            })??,
            None => call.await?,
        };

        self.validator.normalize_response(request, response)
    }
}
