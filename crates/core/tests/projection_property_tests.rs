//! Property-based integration tests for the valuation engine.
//!
//! These tests verify that universal properties hold across generated portfolios,
//! using the `proptest` crate for random test case generation.

use chrono::NaiveDate;
use finsim_core::portfolio::holdings::{
    value_at, Holding, HoldingKind, MarketPosition, RecurringContribution,
};
use finsim_core::portfolio::obligations::{
    cost_at, Loan, Obligation, ObligationKind, ScheduledEvent,
};
use finsim_core::portfolio::projection::calculate_report;
use finsim_core::{Portfolio, ValuationContext};
use finsim_market_data::{
    fallback_forecast, AssetClass, ForecastRecord, ForecastRequest, ForecastSet, SymbolForecast,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

// =============================================================================
// Generators
// =============================================================================

fn ctx() -> ValuationContext {
    ValuationContext::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
}

/// Generates a non-negative amount with up to two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000, 0u32..=2).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Generates an amount anywhere up to `Decimal::MAX`.
fn arb_huge_amount() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::MAX),
        (0i64..=i64::MAX, 0u32..=9).prop_map(|(mantissa, exponent)| {
            Decimal::from_i128_with_scale(i128::from(mantissa) * 10i128.pow(exponent), 0)
        }),
    ]
}

/// Generates an equity holding with extreme quantity and prices.
fn arb_huge_equity() -> impl Strategy<Value = Holding> {
    (arb_symbol(), arb_huge_amount(), arb_huge_amount(), arb_huge_amount()).prop_map(
        |(symbol, quantity, purchase_price, current_price)| {
            Holding::new(
                format!("stocks-{}", symbol),
                symbol.clone(),
                HoldingKind::Equity(MarketPosition {
                    quantity,
                    purchase_price,
                    current_price,
                    previous_close: None,
                }),
            )
            .with_symbol(symbol)
        },
    )
}

/// Generates a symbol from a small pool so that holdings share symbols.
fn arb_symbol() -> impl Strategy<Value = String> {
    prop_oneof![Just("AAPL"), Just("MSFT"), Just("VTI"), Just("NVDA")].prop_map(str::to_string)
}

/// Generates an equity holding.
fn arb_equity() -> impl Strategy<Value = Holding> {
    (arb_symbol(), arb_amount(), arb_amount(), arb_amount()).prop_map(
        |(symbol, quantity, purchase_price, current_price)| {
            Holding::new(
                format!("stocks-{}", symbol),
                symbol.clone(),
                HoldingKind::Equity(MarketPosition {
                    quantity,
                    purchase_price,
                    current_price,
                    previous_close: None,
                }),
            )
            .with_symbol(symbol)
        },
    )
}

/// Generates a provider forecast for a symbol covering a few horizons.
fn arb_forecast() -> impl Strategy<Value = SymbolForecast> {
    (
        arb_symbol(),
        arb_amount(),
        proptest::collection::btree_set(1u32..=10, 1..=5),
        any::<bool>(),
    )
        .prop_map(|(symbol, invested_amount, horizons, is_simulated)| {
            let records: BTreeMap<u32, ForecastRecord> = horizons
                .into_iter()
                .map(|h| {
                    let expected_value = invested_amount + Decimal::from(h);
                    (
                        h,
                        ForecastRecord {
                            expected_value,
                            best_case: expected_value + Decimal::ONE,
                            worst_case: expected_value - Decimal::ONE,
                            is_simulated,
                        },
                    )
                })
                .collect();
            SymbolForecast {
                symbol,
                asset_class: AssetClass::Equity,
                invested_amount,
                records,
                params: None,
                is_simulated,
                error: None,
            }
        })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Lump-sum holdings never lose value as the horizon grows.
    #[test]
    fn prop_lump_sum_value_is_monotonic(holding in arb_equity(), years in 0u32..30) {
        let now = value_at(&holding, &ctx(), years);
        let later = value_at(&holding, &ctx(), years + 1);
        prop_assert!(now >= Decimal::ZERO);
        prop_assert!(later >= now);
    }

    /// A recurring contribution of zero is worth nothing at any horizon.
    #[test]
    fn prop_zero_contribution_is_worthless(interval in 1u32..24, years in 0u32..20) {
        let holding = Holding::new(
            "mutualFunds-0",
            "SIP",
            HoldingKind::FundRecurring(RecurringContribution {
                amount: Decimal::ZERO,
                interval_months: interval,
                start_date: NaiveDate::from_ymd_opt(2020, 1, 1),
                is_compounded: false,
                compound_rate_percent: None,
            }),
        );
        prop_assert_eq!(value_at(&holding, &ctx(), years), Decimal::ZERO);
    }

    /// Once a loan has started its balance shrinks by 5% a year and never grows.
    #[test]
    fn prop_loan_balance_decays(principal in arb_amount(), start in 2000i32..2040, years in 0u32..30) {
        let loan = Obligation::new(
            "loans-0",
            "Loan",
            ObligationKind::Loan(Loan {
                principal,
                annual_rate_percent: None,
                start_year: Some(start),
            }),
        );
        let now = cost_at(&loan, &ctx(), years);
        let later = cost_at(&loan, &ctx(), years + 1);
        prop_assert!(later <= now);
        prop_assert!(now <= principal);
    }

    /// A scheduled event costs something in exactly one horizon.
    #[test]
    fn prop_scheduled_event_hits_once(cost in 1i64..1_000_000, offset in 0i32..30) {
        let event = Obligation::new(
            "marriage-0",
            "Wedding",
            ObligationKind::ScheduledEvent(ScheduledEvent {
                cost: Decimal::from(cost),
                trigger_year: Some(2025 + offset),
            }),
        );
        let hits = (0..=40u32)
            .filter(|y| cost_at(&event, &ctx(), *y) > Decimal::ZERO)
            .count();
        prop_assert_eq!(hits, 1);
    }

    /// Merging forecasts gives the same set whatever the insertion order.
    #[test]
    fn prop_forecast_merge_is_order_independent(
        (forecasts, shuffled) in proptest::collection::vec(arb_forecast(), 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a: ForecastSet = forecasts.into_iter().collect();
        let b: ForecastSet = shuffled.into_iter().collect();
        prop_assert_eq!(a, b);
    }

    /// The fallback covers every horizon with an ordered band.
    #[test]
    fn prop_fallback_shape(invested in arb_amount(), symbol in arb_symbol()) {
        let request = ForecastRequest::new(AssetClass::Equity, symbol, invested);
        let forecast = fallback_forecast(&request, "offline");
        prop_assert!(forecast.is_simulated);
        prop_assert_eq!(forecast.records.len(), 10);
        for (horizon, record) in &forecast.records {
            prop_assert!((1..=10).contains(horizon));
            prop_assert!(record.worst_case <= record.expected_value);
            prop_assert!(record.expected_value <= record.best_case);
        }
    }

    /// Extreme invested amounts still give a complete, ordered, non-negative fallback.
    #[test]
    fn prop_fallback_saturates(invested in arb_huge_amount(), symbol in arb_symbol()) {
        let request = ForecastRequest::new(AssetClass::Equity, symbol, invested);
        let forecast = fallback_forecast(&request, "offline");
        prop_assert_eq!(forecast.records.len(), 10);
        for record in forecast.records.values() {
            prop_assert!(record.worst_case >= Decimal::ZERO);
            prop_assert!(record.worst_case <= record.expected_value);
            prop_assert!(record.expected_value <= record.best_case);
        }
    }

    /// Extreme holdings saturate instead of failing, with or without simulated forecasts.
    #[test]
    fn prop_huge_portfolio_is_valued(
        holdings in proptest::collection::vec(arb_huge_equity(), 1..6),
        horizon in 0u32..12,
        simulated in any::<bool>(),
    ) {
        let portfolio = Portfolio::new(holdings, vec![]);
        let forecasts: ForecastSet = if simulated {
            finsim_core::market_data::build_forecast_requests(&portfolio)
                .iter()
                .map(|request| fallback_forecast(request, "offline"))
                .collect()
        } else {
            ForecastSet::new()
        };
        let report = calculate_report(&portfolio, &forecasts, ctx(), horizon).unwrap();
        prop_assert!(report.investments >= Decimal::ZERO);
        prop_assert_eq!(report.net_worth, report.investments);
        for point in report.trajectory.unwrap_or_default() {
            prop_assert!(point.worst_case <= point.most_probable);
            prop_assert!(point.most_probable <= point.best_case);
        }
    }

    /// Totals and trajectory do not depend on the order of holdings.
    #[test]
    fn prop_report_is_order_independent(
        (holdings, shuffled) in proptest::collection::vec(arb_equity(), 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        forecasts in proptest::collection::vec(arb_forecast(), 0..4),
        horizon in 0u32..12,
    ) {
        let forecasts: ForecastSet = forecasts.into_iter().collect();
        let a = calculate_report(&Portfolio::new(holdings, vec![]), &forecasts, ctx(), horizon).unwrap();
        let b = calculate_report(&Portfolio::new(shuffled, vec![]), &forecasts, ctx(), horizon).unwrap();
        prop_assert_eq!(a.totals(), b.totals());
        prop_assert_eq!(a.trajectory, b.trajectory);
        prop_assert_eq!(a.simulated_symbols, b.simulated_symbols);
    }

    /// Today's value of an equity portfolio is the sum of its market values.
    #[test]
    fn prop_today_is_market_value(holdings in proptest::collection::vec(arb_equity(), 0..8)) {
        let expected: Decimal = holdings
            .iter()
            .filter_map(|h| h.market_position())
            .map(|p| p.market_value().round_dp(6))
            .sum();
        let report = calculate_report(&Portfolio::new(holdings, vec![]), &ForecastSet::new(), ctx(), 0).unwrap();
        prop_assert_eq!(report.investments, expected);
        prop_assert_eq!(report.net_worth, expected);
    }
}
