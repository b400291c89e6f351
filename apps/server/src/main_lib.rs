use std::sync::Arc;

use finsim_core::market_data::SpotPriceService;
use finsim_core::portfolio::projection::{ProjectionService, ProjectionServiceTrait};
use finsim_market_data::{ForecastRegistry, ForecastServiceProvider};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};

pub struct AppState {
    pub projection_service: Arc<dyn ProjectionServiceTrait>,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry.with(fmt::layer()).init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = config.forecast_url.as_deref().map(|url| {
        tracing::info!("Forecast service in use: {}", url);
        Arc::new(ForecastServiceProvider::with_timeout(url, config.forecast_timeout))
    });

    let registry = match &provider {
        Some(provider) => ForecastRegistry::new(provider.clone()),
        None => {
            tracing::warn!("No forecast service configured; projections use simulated forecasts");
            ForecastRegistry::without_provider()
        }
    }
    .with_cache_ttl(config.forecast_cache_ttl)
    .with_request_timeout(config.forecast_timeout);

    let mut projection_service = ProjectionService::new(Arc::new(registry));
    if let (true, Some(provider)) = (config.spot_prices, &provider) {
        projection_service =
            projection_service.with_spot_prices(Arc::new(SpotPriceService::new(provider.clone())));
    }

    Ok(Arc::new(AppState {
        projection_service: Arc::new(projection_service),
    }))
}
