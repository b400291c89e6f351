//! Projection module.
//!
//! Turns a portfolio and a forecast set into horizon totals, a category breakdown
//! and a best/worst risk band around the net-worth trajectory.

mod aggregator;
mod projection_calculator;
mod projection_model;
mod projection_service;
mod projection_traits;
mod risk_band;

pub use aggregator::HorizonAggregator;
pub use projection_calculator::*;
pub use projection_model::*;
pub use projection_service::ProjectionService;
pub use projection_traits::ProjectionServiceTrait;
pub use risk_band::RiskBandSynthesizer;


#[cfg(test)]
mod projection_service_tests;
