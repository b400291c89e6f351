//! Portfolio module - holdings, obligations, valuation and projection.

pub mod category;
pub mod context;
pub mod holdings;
pub mod obligations;
mod portfolio_model;
pub mod projection;
pub mod snapshot;
pub mod summary;

pub use category::Category;
pub use context::ValuationContext;
pub use portfolio_model::Portfolio;
