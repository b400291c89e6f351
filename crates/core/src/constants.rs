use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Horizons shown by the projection view
pub const CANONICAL_HORIZONS: [u32; 4] = [0, 3, 5, 10];

/// Largest horizon, in years, the engine will project
pub const MAX_PROJECTION_HORIZON: u32 = 100;

/// Average days per year, used for fractional holding periods
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Average days per month, used to count elapsed contribution months
pub const DAYS_PER_MONTH: Decimal = dec!(30.44);

/// Annual growth for lump-sum positions without a forecast
pub const LUMP_SUM_FALLBACK_RATE: Decimal = dec!(0.08);

/// Annual growth for retirement contributions
pub const RETIREMENT_GROWTH_RATE: Decimal = dec!(0.06);

/// Annual return (percent) for non-compounded recurring contributions
pub const DEFAULT_SIP_RATE_PERCENT: Decimal = dec!(12.5);

/// Annual property appreciation (percent) when none is recorded
pub const DEFAULT_PROPERTY_GROWTH_PERCENT: Decimal = dec!(5);

/// Annual decay of an outstanding loan balance
pub const LOAN_DECAY_RATE: Decimal = dec!(0.05);

/// Annual inflation applied to one-off scheduled events
pub const SCHEDULED_EVENT_INFLATION_RATE: Decimal = dec!(0.08);

/// Annual inflation for education costs
pub const EDUCATION_INFLATION_RATE: Decimal = dec!(0.10);

/// Annual inflation for household bills and personal expenses
pub const HOUSEHOLD_INFLATION_RATE: Decimal = dec!(0.07);

/// Placeholder forecast symbol for gold holdings
pub const GOLD_FORECAST_SYMBOL: &str = "GOLD";

/// Placeholder forecast symbol for silver holdings
pub const SILVER_FORECAST_SYMBOL: &str = "SILVER";
