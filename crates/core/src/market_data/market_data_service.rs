//! Spot-price refresh for lump-sum holdings.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::market_data_traits::SpotPriceServiceTrait;
use crate::portfolio::Portfolio;
use finsim_market_data::{SpotPrice, SpotPriceProvider};

/// Fetches one quote per distinct ticker, concurrently, and applies it to every holding
/// quoted under that ticker.
pub struct SpotPriceService {
    provider: Arc<dyn SpotPriceProvider>,
}

impl SpotPriceService {
    pub fn new(provider: Arc<dyn SpotPriceProvider>) -> Self {
        Self { provider }
    }

    async fn fetch(&self, ticker: String) -> (String, Option<SpotPrice>) {
        match self.provider.get_spot_price(&ticker).await {
            Ok(price) if price.current_price > Decimal::ZERO => (ticker, Some(price)),
            Ok(price) => {
                debug!(
                    "Ignoring non-positive spot price {} for {}",
                    price.current_price, ticker
                );
                (ticker, None)
            }
            Err(e) => {
                warn!("Spot price unavailable for {}: {}. Keeping stored price", ticker, e);
                (ticker, None)
            }
        }
    }
}

#[async_trait]
impl SpotPriceServiceTrait for SpotPriceService {
    async fn refresh_prices(&self, portfolio: &Portfolio) -> Portfolio {
        let tickers: BTreeSet<String> = portfolio
            .holdings
            .iter()
            .filter_map(|h| h.spot_ticker())
            .collect();

        let mut refreshed = portfolio.clone();
        if tickers.is_empty() {
            return refreshed;
        }

        let quotes: HashMap<String, SpotPrice> = join_all(tickers.into_iter().map(|t| self.fetch(t)))
            .await
            .into_iter()
            .filter_map(|(ticker, price)| price.map(|p| (ticker, p)))
            .collect();

        let mut applied = 0usize;
        for holding in refreshed.holdings.iter_mut() {
            let Some(quote) = holding.spot_ticker().and_then(|t| quotes.get(&t)) else {
                continue;
            };
            holding.apply_spot_price(quote.current_price, quote.previous_close);
            applied += 1;
        }

        info!(
            "Applied {} spot prices to {} holdings",
            quotes.len(),
            applied
        );
        refreshed
    }
}
