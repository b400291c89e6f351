use std::collections::BTreeSet;

use log::debug;

use super::aggregator::HorizonAggregator;
use super::projection_model::ValuationReport;
use super::risk_band::RiskBandSynthesizer;
use crate::constants::{CANONICAL_HORIZONS, MAX_PROJECTION_HORIZON};
use crate::errors::{Result, ValidationError};
use crate::portfolio::context::ValuationContext;
use crate::portfolio::Portfolio;
use finsim_market_data::ForecastSet;

/// Rejects horizons beyond `MAX_PROJECTION_HORIZON`.
pub fn validate_horizon(horizon: u32) -> Result<()> {
    if horizon > MAX_PROJECTION_HORIZON {
        return Err(ValidationError::HorizonTooLarge {
            horizon,
            max: MAX_PROJECTION_HORIZON,
        }
        .into());
    }
    Ok(())
}

/// Builds the valuation report for one horizon.
///
/// Pure: the result depends only on the portfolio, the forecasts and the context.
/// An empty portfolio yields an all-zero report.
pub fn calculate_report(
    portfolio: &Portfolio,
    forecasts: &ForecastSet,
    ctx: ValuationContext,
    horizon: u32,
) -> Result<ValuationReport> {
    validate_horizon(horizon)?;

    let aggregator = HorizonAggregator::new(portfolio, forecasts, ctx);
    let totals = aggregator.aggregate(horizon);
    let breakdown = aggregator.breakdown(horizon);

    let trajectory = (horizon > 0).then(|| RiskBandSynthesizer::new(&aggregator).synthesize(horizon));

    let simulated_symbols: Vec<String> = (1..=horizon)
        .flat_map(|year| aggregator.covered_records(year))
        .filter(|(_, record)| record.is_simulated)
        .map(|(symbol, _)| symbol.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    debug!(
        "Horizon {}: investments {}, expenses {}, {} simulated symbols",
        horizon,
        totals.investments,
        totals.expenses,
        simulated_symbols.len()
    );

    Ok(ValuationReport {
        as_of: ctx.as_of,
        horizon,
        investments: totals.investments,
        expenses: totals.expenses,
        net_worth: totals.net_worth,
        breakdown,
        trajectory,
        is_simulated: !simulated_symbols.is_empty(),
        simulated_symbols,
    })
}

/// Reports for the canonical horizons `{0, 3, 5, 10}` from one forecast set.
pub fn calculate_canonical_reports(
    portfolio: &Portfolio,
    forecasts: &ForecastSet,
    ctx: ValuationContext,
) -> Result<Vec<ValuationReport>> {
    CANONICAL_HORIZONS
        .iter()
        .map(|horizon| calculate_report(portfolio, forecasts, ctx, *horizon))
        .collect()
}
