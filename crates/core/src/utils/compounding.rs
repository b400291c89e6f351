//! Compound growth helpers.
//!
//! Integer periods compound by repeated multiplication so results stay exact.
//! Fractional periods go through `checked_powd`. Overflow saturates at `Decimal::MAX`.

use rust_decimal::prelude::*;

/// Multiplies two values, saturating at `Decimal::MAX` or `Decimal::MIN` on overflow.
pub fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        if a.is_sign_negative() == b.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Adds two values, saturating on overflow.
pub fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.saturating_add(b)
}

/// Subtracts `b` from `a`, saturating on overflow.
pub fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    a.saturating_sub(b)
}

/// `base^periods` for a whole number of periods.
///
/// A non-positive base yields zero.
pub fn pow_periods(base: Decimal, periods: u64) -> Decimal {
    if base <= Decimal::ZERO {
        return if periods == 0 { Decimal::ONE } else { Decimal::ZERO };
    }

    let mut result = Decimal::ONE;
    let mut factor = base;
    let mut remaining = periods;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = saturating_mul(result, factor);
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = saturating_mul(factor, factor);
        }
    }
    result
}

/// `(1 + rate)^periods` for a whole number of periods.
pub fn compound(rate: Decimal, periods: u64) -> Decimal {
    pow_periods(Decimal::ONE + rate, periods)
}

/// `(1 + rate)^years` for a possibly fractional number of years.
///
/// Negative elapsed time discounts. A non-positive base yields zero.
pub fn compound_fractional(rate: Decimal, years: Decimal) -> Decimal {
    let base = Decimal::ONE + rate;
    if base <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if years.is_zero() {
        return Decimal::ONE;
    }
    if years.fract().is_zero() && years.is_sign_positive() {
        if let Some(periods) = years.to_u64() {
            return pow_periods(base, periods);
        }
    }
    base.checked_powd(years).unwrap_or_else(|| {
        if (base > Decimal::ONE) == years.is_sign_positive() {
            Decimal::MAX
        } else {
            Decimal::ZERO
        }
    })
}

/// Annual percent (e.g. `7.5`) to a rate (`0.075`).
pub fn percent_to_rate(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}
