//! Forecast contract validation.
//!
//! Two directions are checked:
//! - outbound requests, before dispatch (typed [`ForecastValidationError`])
//! - provider responses, normalized into a [`SymbolForecast`] or rejected as malformed

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use crate::errors::{ForecastValidationError, MarketDataError};
use crate::models::{
    ForecastPoint, ForecastRecord, ForecastRequest, ForecastResponse, SymbolForecast,
    MAX_FORECAST_HORIZON, MIN_FORECAST_HORIZON,
};

/// Forecast contract validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForecastValidator;

impl ForecastValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate an outbound request.
    ///
    /// The asset class is already typed; the symbol must be non-blank and the invested
    /// amount non-negative.
    pub fn validate_request(&self, request: &ForecastRequest) -> Result<(), ForecastValidationError> {
        if request.symbol.trim().is_empty() {
            return Err(ForecastValidationError::EmptySymbol);
        }
        if request.invested_amount < Decimal::ZERO {
            return Err(ForecastValidationError::NegativeInvestedAmount(
                request.invested_amount.to_string(),
            ));
        }
        Ok(())
    }

    /// Normalize a provider response into a per-symbol forecast.
    ///
    /// Keys outside `1..=10` are ignored. Anything else that breaks the record shape
    /// rejects the whole payload so the caller can fall back.
    pub fn normalize_response(
        &self,
        request: &ForecastRequest,
        response: ForecastResponse,
    ) -> Result<SymbolForecast, MarketDataError> {
        let mut records = BTreeMap::new();

        for (key, point) in response.projection {
            let horizon: u32 = key.trim().parse().map_err(|_| MarketDataError::ValidationFailed {
                message: format!("{}: horizon key '{}' is not a year", request.symbol, key),
            })?;

            if !(MIN_FORECAST_HORIZON..=MAX_FORECAST_HORIZON).contains(&horizon) {
                debug!(
                    "Ignoring out-of-range horizon {} in forecast for {}",
                    horizon, request.symbol
                );
                continue;
            }

            let record = Self::complete_record(&request.symbol, horizon, point, response.is_simulated)?;
            records.insert(horizon, record);
        }

        if records.is_empty() {
            return Err(MarketDataError::ValidationFailed {
                message: format!("{}: forecast has no horizons in 1..=10", request.symbol),
            });
        }

        Ok(SymbolForecast {
            symbol: request.symbol.clone(),
            asset_class: request.asset_class,
            invested_amount: request.invested_amount,
            records,
            params: response.params,
            is_simulated: response.is_simulated,
            error: None,
        })
    }

    /// Check that a wire point carries all three values and respects
    /// `bestCase >= expectedValue >= 0` and `worstCase <= expectedValue`.
    fn complete_record(
        symbol: &str,
        horizon: u32,
        point: ForecastPoint,
        is_simulated: bool,
    ) -> Result<ForecastRecord, MarketDataError> {
        let missing = |field: &str| MarketDataError::ValidationFailed {
            message: format!("{}: horizon {} is missing {}", symbol, horizon, field),
        };

        let expected_value = point.expected_value.ok_or_else(|| missing("expectedValue"))?;
        let best_case = point.best_case.ok_or_else(|| missing("bestCase"))?;
        let worst_case = point.worst_case.ok_or_else(|| missing("worstCase"))?;

        if expected_value < Decimal::ZERO {
            return Err(MarketDataError::ValidationFailed {
                message: format!(
                    "{}: horizon {} has negative expectedValue {}",
                    symbol, horizon, expected_value
                ),
            });
        }
        if best_case < expected_value || worst_case > expected_value {
            return Err(MarketDataError::ValidationFailed {
                message: format!(
                    "{}: horizon {} is not ordered (best {}, expected {}, worst {})",
                    symbol, horizon, best_case, expected_value, worst_case
                ),
            });
        }

        Ok(ForecastRecord {
            expected_value,
            best_case,
            worst_case,
            is_simulated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetClass, ForecastParams};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn request() -> ForecastRequest {
        ForecastRequest::new(AssetClass::Equity, "AAPL", dec!(1000))
    }

    fn point(expected: Decimal, best: Decimal, worst: Decimal) -> ForecastPoint {
        ForecastPoint {
            expected_value: Some(expected),
            best_case: Some(best),
            worst_case: Some(worst),
        }
    }

    fn response(points: Vec<(&str, ForecastPoint)>) -> ForecastResponse {
        ForecastResponse {
            projection: points
                .into_iter()
                .map(|(k, p)| (k.to_string(), p))
                .collect::<HashMap<_, _>>(),
            params: Some(ForecastParams {
                mu: dec!(0.07),
                sigma: dec!(0.2),
            }),
            is_simulated: false,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(ForecastValidator::new().validate_request(&request()).is_ok());
    }

    #[test]
    fn test_blank_symbol_is_rejected() {
        let mut req = request();
        req.symbol = "   ".to_string();
        assert_eq!(
            ForecastValidator::new().validate_request(&req),
            Err(ForecastValidationError::EmptySymbol)
        );
    }

    #[test]
    fn test_negative_invested_amount_is_rejected() {
        let mut req = request();
        req.invested_amount = dec!(-1);
        assert!(matches!(
            ForecastValidator::new().validate_request(&req),
            Err(ForecastValidationError::NegativeInvestedAmount(_))
        ));
    }

    #[test]
    fn test_zero_invested_amount_is_allowed() {
        let mut req = request();
        req.invested_amount = Decimal::ZERO;
        assert!(ForecastValidator::new().validate_request(&req).is_ok());
    }

    #[test]
    fn test_normalize_keeps_present_horizons() {
        let resp = response(vec![
            ("3", point(dec!(1200), dec!(1500), dec!(900))),
            ("5", point(dec!(1400), dec!(1900), dec!(1000))),
            ("10", point(dec!(1800), dec!(2600), dec!(1100))),
        ]);
        let forecast = ForecastValidator::new()
            .normalize_response(&request(), resp)
            .unwrap();

        assert_eq!(forecast.records.len(), 3);
        assert_eq!(forecast.record(5).unwrap().best_case, dec!(1900));
        assert!(forecast.record(4).is_none());
        assert!(!forecast.is_simulated);
        assert_eq!(forecast.params.unwrap().sigma, dec!(0.2));
    }

    #[test]
    fn test_out_of_range_horizons_are_ignored() {
        let resp = response(vec![
            ("3", point(dec!(1200), dec!(1500), dec!(900))),
            ("15", point(dec!(3000), dec!(4000), dec!(2000))),
            ("0", point(dec!(1000), dec!(1000), dec!(1000))),
        ]);
        let forecast = ForecastValidator::new()
            .normalize_response(&request(), resp)
            .unwrap();
        assert_eq!(forecast.records.keys().copied().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_partial_point_is_malformed() {
        let mut partial = point(dec!(1200), dec!(1500), dec!(900));
        partial.worst_case = None;
        let resp = response(vec![("3", partial)]);
        let err = ForecastValidator::new()
            .normalize_response(&request(), resp)
            .unwrap_err();
        assert!(err.to_string().contains("missing worstCase"));
    }

    #[test]
    fn test_unordered_point_is_malformed() {
        let resp = response(vec![("3", point(dec!(1200), dec!(1100), dec!(900)))]);
        assert!(ForecastValidator::new()
            .normalize_response(&request(), resp)
            .is_err());
    }

    #[test]
    fn test_non_numeric_key_is_malformed() {
        let resp = response(vec![("three", point(dec!(1200), dec!(1500), dec!(900)))]);
        assert!(ForecastValidator::new()
            .normalize_response(&request(), resp)
            .is_err());
    }

    #[test]
    fn test_empty_projection_is_malformed() {
        let resp = response(vec![]);
        assert!(matches!(
            ForecastValidator::new().normalize_response(&request(), resp),
            Err(MarketDataError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_provider_simulation_flag_is_carried() {
        let mut resp = response(vec![("3", point(dec!(1200), dec!(1500), dec!(900)))]);
        resp.is_simulated = true;
        let forecast = ForecastValidator::new()
            .normalize_response(&request(), resp)
            .unwrap();
        assert!(forecast.is_simulated);
        assert!(forecast.record(3).unwrap().is_simulated);
    }
}
