use serde::{Deserialize, Serialize};

use super::holdings::Holding;
use super::obligations::Obligation;

/// Everything a valuation reads: the holdings and the obligations.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub holdings: Vec<Holding>,
    #[serde(default)]
    pub obligations: Vec<Obligation>,
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>, obligations: Vec<Obligation>) -> Self {
        Self {
            holdings,
            obligations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty() && self.obligations.is_empty()
    }
}
