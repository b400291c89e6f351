//! Projection service traits.

use async_trait::async_trait;

use super::projection_model::{ProjectionOptions, ValuationReport};
use crate::errors::Result;
use crate::portfolio::context::ValuationContext;
use crate::portfolio::Portfolio;
use finsim_market_data::ForecastSet;

/// Trait defining the contract for projection operations.
#[async_trait]
pub trait ProjectionServiceTrait: Send + Sync {
    /// Project a portfolio `horizon` years ahead.
    ///
    /// Forecasts are resolved per symbol; a symbol the provider cannot answer for
    /// falls back to a simulated forecast and is listed in the report.
    ///
    /// # Returns
    /// A `ValuationReport` with totals, a category breakdown and, for `horizon > 0`,
    /// the risk-band trajectory.
    async fn project(
        &self,
        portfolio: &Portfolio,
        ctx: ValuationContext,
        horizon: u32,
        options: ProjectionOptions,
    ) -> Result<ValuationReport>;

    /// Reports for the canonical horizons `{0, 3, 5, 10}`, sharing one forecast resolution.
    async fn project_canonical(
        &self,
        portfolio: &Portfolio,
        ctx: ValuationContext,
        options: ProjectionOptions,
    ) -> Result<Vec<ValuationReport>>;

    /// Resolve forecasts for every forecastable symbol in the portfolio.
    async fn resolve_forecasts(&self, portfolio: &Portfolio) -> ForecastSet;
}
