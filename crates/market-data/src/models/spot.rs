use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest price for a ticker, as returned by the spot-price provider.
///
/// The provider answers with the terse `{symbol, c, pc}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotPrice {
    #[serde(default)]
    pub symbol: String,
    /// Current (last) price
    #[serde(rename = "c")]
    pub current_price: Decimal,
    /// Previous session close
    #[serde(rename = "pc", default)]
    pub previous_close: Option<Decimal>,
}
