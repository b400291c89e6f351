//! Obligations: loans, insurance and life-cost events, and their cost at a horizon.

mod obligations_model;
mod obligations_valuation;

pub use obligations_model::*;
pub use obligations_valuation::*;

#[cfg(test)]
mod obligations_valuation_tests;
