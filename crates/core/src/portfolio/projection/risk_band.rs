//! Risk band synthesizer.
//!
//! The band is the deterministic net worth plus the summed forecast deviations of the
//! covered symbols. Deviations are added independently; cross-asset correlation is not
//! modelled.

use rust_decimal::Decimal;

use super::aggregator::HorizonAggregator;
use super::projection_model::RiskBandPoint;
use crate::constants::DECIMAL_PRECISION;

pub struct RiskBandSynthesizer<'a, 'p> {
    aggregator: &'a HorizonAggregator<'p>,
}

impl<'a, 'p> RiskBandSynthesizer<'a, 'p> {
    pub fn new(aggregator: &'a HorizonAggregator<'p>) -> Self {
        Self { aggregator }
    }

    /// `(bestDelta, worstDelta)` at a horizon, summed over covered symbols.
    pub fn deltas(&self, years_from_now: u32) -> (Decimal, Decimal) {
        if years_from_now == 0 {
            return (Decimal::ZERO, Decimal::ZERO);
        }
        self.aggregator
            .covered_records(years_from_now)
            .into_iter()
            .fold((Decimal::ZERO, Decimal::ZERO), |(best, worst), (_, record)| {
                (
                    best.saturating_add(record.best_delta().round_dp(DECIMAL_PRECISION)),
                    worst.saturating_add(record.worst_delta().round_dp(DECIMAL_PRECISION)),
                )
            })
    }

    /// Band point for a single year.
    pub fn point(&self, year: u32) -> RiskBandPoint {
        let baseline = self.aggregator.aggregate(year).net_worth;
        let (best_delta, worst_delta) = self.deltas(year);
        RiskBandPoint {
            year,
            most_probable: baseline,
            best_case: baseline.saturating_add(best_delta),
            worst_case: baseline.saturating_add(worst_delta),
        }
    }

    /// Band for every year `0..=horizon`.
    pub fn synthesize(&self, horizon: u32) -> Vec<RiskBandPoint> {
        (0..=horizon).map(|year| self.point(year)).collect()
    }
}
