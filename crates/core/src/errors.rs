//! Core error types for the finsim projection engine.
//!
//! Valuation itself never fails: malformed records degrade to zero values and
//! provider failures degrade to simulated forecasts. The errors below cover the
//! inputs the engine refuses outright.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use finsim_market_data::{ForecastValidationError, MarketDataError};

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the projection engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Forecast request rejected: {0}")]
    ForecastRequest(#[from] ForecastValidationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Horizon {horizon} exceeds the maximum of {max} years")]
    HorizonTooLarge { horizon: u32, max: u32 },

    #[error("Invalid portfolio snapshot: {0}")]
    InvalidSnapshot(#[from] serde_json::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidSnapshot(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}
