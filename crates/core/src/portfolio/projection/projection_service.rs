//! Projection service implementation.

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use super::projection_calculator::{calculate_canonical_reports, calculate_report, validate_horizon};
use super::projection_model::{ProjectionOptions, ValuationReport};
use super::projection_traits::ProjectionServiceTrait;
use crate::errors::Result;
use crate::market_data::{build_forecast_requests, SpotPriceServiceTrait};
use crate::portfolio::context::ValuationContext;
use crate::portfolio::Portfolio;
use finsim_market_data::{ForecastRegistry, ForecastSet};

/// Service wiring the forecast registry and the optional spot-price refresh
/// into the pure valuation engine.
pub struct ProjectionService {
    forecast_registry: Arc<ForecastRegistry>,
    spot_price_service: Option<Arc<dyn SpotPriceServiceTrait>>,
}

impl ProjectionService {
    pub fn new(forecast_registry: Arc<ForecastRegistry>) -> Self {
        Self {
            forecast_registry,
            spot_price_service: None,
        }
    }

    pub fn with_spot_prices(mut self, spot_price_service: Arc<dyn SpotPriceServiceTrait>) -> Self {
        self.spot_price_service = Some(spot_price_service);
        self
    }

    /// The portfolio to value: a refreshed copy when asked and possible, else a clone.
    async fn prepare(&self, portfolio: &Portfolio, options: ProjectionOptions) -> Portfolio {
        match (&self.spot_price_service, options.refresh_prices) {
            (Some(service), true) => service.refresh_prices(portfolio).await,
            (None, true) => {
                warn!("Price refresh requested but no spot-price source is configured");
                portfolio.clone()
            }
            _ => portfolio.clone(),
        }
    }
}

#[async_trait]
impl ProjectionServiceTrait for ProjectionService {
    async fn project(
        &self,
        portfolio: &Portfolio,
        ctx: ValuationContext,
        horizon: u32,
        options: ProjectionOptions,
    ) -> Result<ValuationReport> {
        validate_horizon(horizon)?;
        let portfolio = self.prepare(portfolio, options).await;

        // Forecasts only cover years 1..=10; today's value never needs them.
        let forecasts = if horizon == 0 {
            ForecastSet::new()
        } else {
            self.resolve_forecasts(&portfolio).await
        };

        calculate_report(&portfolio, &forecasts, ctx, horizon)
    }

    async fn project_canonical(
        &self,
        portfolio: &Portfolio,
        ctx: ValuationContext,
        options: ProjectionOptions,
    ) -> Result<Vec<ValuationReport>> {
        let portfolio = self.prepare(portfolio, options).await;
        let forecasts = self.resolve_forecasts(&portfolio).await;
        calculate_canonical_reports(&portfolio, &forecasts, ctx)
    }

    async fn resolve_forecasts(&self, portfolio: &Portfolio) -> ForecastSet {
        let requests = build_forecast_requests(portfolio);
        if requests.is_empty() {
            return ForecastSet::new();
        }

        let batch = self.forecast_registry.resolve_all(requests).await;
        for (request, error) in &batch.rejected {
            warn!("Forecast request for {} not sent: {}", request.symbol, error);
        }
        let simulated = batch.simulated_symbols();
        if !simulated.is_empty() {
            info!("Simulated forecasts in use for: {}", simulated.join(", "));
        }
        batch.forecasts
    }
}
