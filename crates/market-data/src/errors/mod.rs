//! Error types for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: failures while talking to a forecast or spot-price provider
//! - [`ForecastValidationError`]: outbound forecast requests rejected before dispatch

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// None of these are surfaced to valuation callers: the forecast registry folds every
/// variant into a simulated fallback for the affected symbol, and the spot-price refresh
/// keeps the stored price.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (transport failure or non-2xx status).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider answered, but the payload broke the forecast contract.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// No provider is configured for the request.
    #[error("No providers available")]
    NoProvidersAvailable,

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Short machine-friendly label, used as the fallback reason on simulated forecasts.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::SymbolNotFound(_) => "symbol_not_found",
            Self::Timeout { .. } => "timeout",
            Self::ProviderError { .. } | Self::Network(_) => "provider_unavailable",
            Self::ValidationFailed { .. } => "malformed_response",
            Self::NoProvidersAvailable => "no_provider",
        }
    }
}

/// Outbound forecast request constraint violations.
///
/// A request that fails validation is never sent to the provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastValidationError {
    #[error("Invalid assetClass: {0}")]
    UnsupportedAssetClass(String),

    #[error("Invalid symbol: symbol must be a non-empty string")]
    EmptySymbol,

    #[error("Invalid investedAmount: {0} is negative")]
    NegativeInvestedAmount(String),
}
