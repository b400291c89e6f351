use async_trait::async_trait;

use crate::portfolio::Portfolio;

/// Refreshes stored prices from a live source.
#[async_trait]
pub trait SpotPriceServiceTrait: Send + Sync {
    /// Returns a copy of `portfolio` with live prices applied where a quote was available.
    ///
    /// The input is never mutated. A failed or non-positive quote keeps the stored price.
    async fn refresh_prices(&self, portfolio: &Portfolio) -> Portfolio;
}
