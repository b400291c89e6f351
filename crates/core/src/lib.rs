//! Finsim Core - portfolio model, valuation engine and projection services.
//!
//! This crate turns a stored portfolio snapshot into a typed [`Portfolio`] and values
//! it today or at any future horizon. Market-facing concerns (forecasts and live
//! prices) come from the `finsim-market-data` crate through its provider traits.

pub mod constants;
pub mod errors;
pub mod market_data;
pub mod portfolio;
pub mod utils;

// Re-export common types from the portfolio module
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
