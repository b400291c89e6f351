use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use chrono_tz::Tz;
use rust_decimal::prelude::*;

use crate::constants::{DAYS_PER_MONTH, DAYS_PER_YEAR};

/// Default timezone for valuation dates.
/// This is the canonical timezone used to convert UTC instants to domain dates.
pub const DEFAULT_VALUATION_TZ: Tz = chrono_tz::America::New_York;

/// Converts a UTC instant to a valuation date in the given timezone.
///
/// This is the single source of truth for converting instants to domain dates.
pub fn valuation_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Convenience function that uses the default valuation timezone.
/// Equivalent to `valuation_date_from_utc(instant, DEFAULT_VALUATION_TZ)`.
pub fn valuation_date_today() -> NaiveDate {
    valuation_date_from_utc(Utc::now(), DEFAULT_VALUATION_TZ)
}

/// Parses a stored date, accepting `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
        .or_else(|| {
            // Stored timestamps sometimes drop the offset.
            value
                .get(..10)
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        })
}

/// Adds whole years to a date, clamping Feb 29 to Feb 28 when needed.
pub fn add_years(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_add_months(Months::new(years.saturating_mul(12)))
        .unwrap_or(NaiveDate::MAX)
}

/// Whole contribution months between two dates, `floor(days / 30.44)`.
///
/// Negative when `to` precedes `from`.
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let days = Decimal::from((to - from).num_days());
    (days / DAYS_PER_MONTH).floor().to_i64().unwrap_or(0)
}

/// Fractional years between two dates, `days / 365.25`.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> Decimal {
    Decimal::from((to - from).num_days()) / DAYS_PER_YEAR
}

/// Calendar year of a date.
pub fn year_of(date: NaiveDate) -> i32 {
    date.year()
}
