//! Today's per-category summary: gains for investment categories, totals for costs.

mod summary_calculator;
mod summary_model;

pub use summary_calculator::*;
pub use summary_model::*;
