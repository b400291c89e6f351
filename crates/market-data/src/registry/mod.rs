//! Forecast registry module.
//!
//! This module provides orchestration for the forecast provider, including:
//! - Request validation and response normalization
//! - Per-symbol concurrent resolution with timeouts
//! - Simulated fallback forecasts
//! - A TTL cache for provider answers

mod cache;
mod fallback;
mod registry;
mod validator;

pub use cache::ForecastCache;
pub use fallback::{
    fallback_forecast, FALLBACK_BEST_CASE_MULTIPLIER, FALLBACK_GROWTH_RATE, FALLBACK_PARAMS,
    FALLBACK_WORST_CASE_MULTIPLIER,
};
pub use registry::{ForecastBatch, ForecastRegistry};
pub use validator::ForecastValidator;
