//! Tests for the projection service against mock providers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::errors::Error;
use crate::market_data::SpotPriceServiceTrait;
use crate::portfolio::context::ValuationContext;
use crate::portfolio::holdings::{Holding, HoldingKind, MarketPosition};
use crate::portfolio::Portfolio;
use async_trait::async_trait;
use chrono::NaiveDate;
use finsim_market_data::{
    ForecastPoint, ForecastProvider, ForecastRegistry, ForecastRequest, ForecastResponse,
    MarketDataError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Doubles the invested amount at every horizon, with a 10% spread.
struct MockForecastProvider {
    failing: Vec<&'static str>,
    calls: AtomicUsize,
}

impl MockForecastProvider {
    fn new(failing: Vec<&'static str>) -> Self {
        Self {
            failing,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ForecastProvider for MockForecastProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    async fn get_forecast(
        &self,
        request: &ForecastRequest,
    ) -> Result<ForecastResponse, MarketDataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&request.symbol.as_str()) {
            return Err(MarketDataError::ProviderError {
                provider: "MOCK".to_string(),
                message: "HTTP 503".to_string(),
            });
        }
        let expected = request.invested_amount * dec!(2);
        let projection: HashMap<String, ForecastPoint> = (1..=10)
            .map(|year| {
                (
                    year.to_string(),
                    ForecastPoint {
                        expected_value: Some(expected),
                        best_case: Some(expected * dec!(1.1)),
                        worst_case: Some(expected * dec!(0.9)),
                    },
                )
            })
            .collect();
        Ok(ForecastResponse {
            projection,
            params: None,
            is_simulated: false,
        })
    }
}

/// Marks every market position at a fixed price.
struct FixedPriceService {
    price: Decimal,
}

#[async_trait]
impl SpotPriceServiceTrait for FixedPriceService {
    async fn refresh_prices(&self, portfolio: &Portfolio) -> Portfolio {
        let mut refreshed = portfolio.clone();
        for holding in &mut refreshed.holdings {
            holding.apply_spot_price(self.price, None);
        }
        refreshed
    }
}

fn ctx() -> ValuationContext {
    ValuationContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
}

fn equity(id: &str, symbol: &str) -> Holding {
    Holding::new(
        id,
        symbol,
        HoldingKind::Equity(MarketPosition {
            quantity: dec!(10),
            purchase_price: dec!(100),
            current_price: dec!(110),
            previous_close: None,
        }),
    )
    .with_symbol(symbol)
}

fn service(provider: Arc<MockForecastProvider>) -> ProjectionService {
    ProjectionService::new(Arc::new(ForecastRegistry::new(provider)))
}

#[tokio::test]
async fn test_horizon_zero_skips_forecast_fetch() {
    let provider = Arc::new(MockForecastProvider::new(vec![]));
    let portfolio = Portfolio::new(vec![equity("stocks-0", "AAPL")], vec![]);

    let report = service(provider.clone())
        .project(&portfolio, ctx(), 0, ProjectionOptions::default())
        .await
        .unwrap();

    assert_eq!(report.investments, dec!(1100));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_provider_forecast_drives_projection() {
    let provider = Arc::new(MockForecastProvider::new(vec![]));
    let portfolio = Portfolio::new(vec![equity("stocks-0", "AAPL")], vec![]);

    let report = service(provider.clone())
        .project(&portfolio, ctx(), 3, ProjectionOptions::default())
        .await
        .unwrap();

    // invested 10 x 100, doubled by the provider
    assert_eq!(report.investments, dec!(2000));
    assert!(!report.is_simulated);
    let last = report.trajectory.unwrap().pop().unwrap();
    assert_eq!(last.best_case, dec!(2200));
    assert_eq!(last.worst_case, dec!(1800));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failed_symbol_falls_back_without_affecting_others() {
    let provider = Arc::new(MockForecastProvider::new(vec!["MSFT"]));
    let portfolio = Portfolio::new(
        vec![equity("stocks-0", "AAPL"), equity("stocks-1", "MSFT")],
        vec![],
    );

    let report = service(provider)
        .project(&portfolio, ctx(), 3, ProjectionOptions::default())
        .await
        .unwrap();

    // AAPL from the provider, MSFT grows 8% a year from its current value.
    assert_eq!(report.investments, dec!(2000) + dec!(1385.6832));
    assert!(report.is_simulated);
    assert_eq!(report.simulated_symbols, vec!["MSFT".to_string()]);
}

#[tokio::test]
async fn test_canonical_projection_resolves_forecasts_once() {
    let provider = Arc::new(MockForecastProvider::new(vec![]));
    let portfolio = Portfolio::new(
        vec![equity("stocks-0", "AAPL"), equity("stocks-1", "MSFT")],
        vec![],
    );

    let reports = service(provider.clone())
        .project_canonical(&portfolio, ctx(), ProjectionOptions::default())
        .await
        .unwrap();

    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].investments, dec!(2200));
    assert_eq!(reports[3].investments, dec!(4000));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_refresh_prices_values_a_refreshed_copy() {
    let provider = Arc::new(MockForecastProvider::new(vec![]));
    let portfolio = Portfolio::new(vec![equity("stocks-0", "AAPL")], vec![]);
    let service = service(provider).with_spot_prices(Arc::new(FixedPriceService { price: dec!(200) }));

    let report = service
        .project(&portfolio, ctx(), 0, ProjectionOptions { refresh_prices: true })
        .await
        .unwrap();

    assert_eq!(report.investments, dec!(2000));
    assert_eq!(
        portfolio.holdings[0].market_position().unwrap().current_price,
        dec!(110)
    );
}

#[tokio::test]
async fn test_refresh_without_spot_source_values_stored_prices() {
    let provider = Arc::new(MockForecastProvider::new(vec![]));
    let portfolio = Portfolio::new(vec![equity("stocks-0", "AAPL")], vec![]);

    let report = service(provider)
        .project(&portfolio, ctx(), 0, ProjectionOptions { refresh_prices: true })
        .await
        .unwrap();

    assert_eq!(report.investments, dec!(1100));
}

#[tokio::test]
async fn test_oversized_horizon_fails_before_any_fetch() {
    let provider = Arc::new(MockForecastProvider::new(vec![]));
    let portfolio = Portfolio::new(vec![equity("stocks-0", "AAPL")], vec![]);

    let result = service(provider.clone())
        .project(&portfolio, ctx(), 500, ProjectionOptions::default())
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_without_provider_every_symbol_is_simulated() {
    let service = ProjectionService::new(Arc::new(ForecastRegistry::without_provider()));
    let portfolio = Portfolio::new(vec![equity("stocks-0", "AAPL")], vec![]);

    let forecasts = service.resolve_forecasts(&portfolio).await;
    assert_eq!(forecasts.len(), 1);
    assert!(forecasts.get("AAPL").unwrap().is_simulated);
}

#[tokio::test]
async fn test_provider_outage_keeps_trajectory_rising() {
    let service = ProjectionService::new(Arc::new(ForecastRegistry::without_provider()));
    let portfolio = Portfolio::new(vec![equity("stocks-0", "AAPL")], vec![]);

    let today = service
        .project(&portfolio, ctx(), 0, ProjectionOptions::default())
        .await
        .unwrap();
    assert_eq!(today.investments, dec!(1100));

    let report = service
        .project(&portfolio, ctx(), 3, ProjectionOptions::default())
        .await
        .unwrap();
    assert_eq!(report.investments, dec!(1385.6832));
    assert!(report.is_simulated);
    assert_eq!(report.simulated_symbols, vec!["AAPL".to_string()]);

    let trajectory = report.trajectory.unwrap();
    assert_eq!(trajectory[0].most_probable, dec!(1100));
    assert_eq!(trajectory[0].best_case, dec!(1100));
    // 1100 * 1.08, with the fallback's spread on the invested 1000 * 1.08
    assert_eq!(trajectory[1].most_probable, dec!(1188));
    assert_eq!(trajectory[1].best_case, dec!(1296));
    assert_eq!(trajectory[1].worst_case, dec!(1134));
    for pair in trajectory.windows(2) {
        assert!(pair[1].most_probable > pair[0].most_probable);
    }
}
