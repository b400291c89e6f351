use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::category::Category;

/// Whether a summary amount is a gain on assets or a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    Investment,
    Cost,
}

/// Footer line for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    /// e.g. "Total Stock P/L", "Total Remaining Loans"
    pub label: String,
    pub amount: Decimal,
    pub kind: SummaryKind,
    pub item_count: usize,
    /// Change since the previous close, for positions that carry one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub today_change: Option<Decimal>,
}
