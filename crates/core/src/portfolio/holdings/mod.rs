//! Holdings: the asset side of a portfolio and how each kind is valued.

mod holdings_model;
mod holdings_valuation;

pub use holdings_model::*;
pub use holdings_valuation::*;
