//! Deterministic forecast used when the provider cannot answer for a symbol.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{
    ForecastParams, ForecastRecord, ForecastRequest, SymbolForecast, MAX_FORECAST_HORIZON,
    MIN_FORECAST_HORIZON,
};

/// Annual growth assumed by the fallback.
pub const FALLBACK_GROWTH_RATE: Decimal = dec!(0.08);

/// Best case as a multiple of the expected value.
pub const FALLBACK_BEST_CASE_MULTIPLIER: Decimal = dec!(1.10);

/// Worst case as a multiple of the expected value.
pub const FALLBACK_WORST_CASE_MULTIPLIER: Decimal = dec!(0.95);

/// Params reported alongside a fallback forecast.
pub const FALLBACK_PARAMS: ForecastParams = ForecastParams {
    mu: dec!(0.05),
    sigma: dec!(0.10),
};

/// Synthesize a simulated forecast covering every horizon in `1..=10`.
///
/// `expectedValue = investedAmount * 1.08^h`, `bestCase = expectedValue * 1.10`,
/// `worstCase = expectedValue * 0.95`. Products saturate at `Decimal::MAX`.
pub fn fallback_forecast(request: &ForecastRequest, reason: impl Into<String>) -> SymbolForecast {
    let invested = request.invested_amount.max(Decimal::ZERO);
    let growth = Decimal::ONE + FALLBACK_GROWTH_RATE;

    let mut records = BTreeMap::new();
    let mut expected_value = invested;
    for horizon in MIN_FORECAST_HORIZON..=MAX_FORECAST_HORIZON {
        expected_value = expected_value.saturating_mul(growth);
        records.insert(
            horizon,
            ForecastRecord {
                expected_value,
                best_case: expected_value.saturating_mul(FALLBACK_BEST_CASE_MULTIPLIER),
                worst_case: expected_value.saturating_mul(FALLBACK_WORST_CASE_MULTIPLIER),
                is_simulated: true,
            },
        );
    }

    SymbolForecast {
        symbol: request.symbol.clone(),
        asset_class: request.asset_class,
        invested_amount: request.invested_amount,
        records,
        params: Some(FALLBACK_PARAMS),
        is_simulated: true,
        error: Some(reason.into()),
    }
}
