//! Valuation context.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::time_utils::{add_years, valuation_date_today};

/// The "now" every valuation is measured from.
///
/// Passed explicitly so a valuation is a pure function of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationContext {
    pub as_of: NaiveDate,
}

impl ValuationContext {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }

    /// Context for today's date in the default valuation timezone.
    pub fn today() -> Self {
        Self::new(valuation_date_today())
    }

    pub fn current_year(&self) -> i32 {
        self.as_of.year()
    }

    /// Calendar year a horizon lands on.
    pub fn target_year(&self, years_from_now: u32) -> i32 {
        self.current_year()
            .saturating_add(i32::try_from(years_from_now).unwrap_or(i32::MAX))
    }

    /// Date a horizon lands on.
    pub fn target_date(&self, years_from_now: u32) -> NaiveDate {
        add_years(self.as_of, years_from_now)
    }
}

impl Default for ValuationContext {
    fn default() -> Self {
        Self::today()
    }
}
