//! Short-lived cache for provider forecasts.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::models::{ForecastRequest, SymbolForecast};

struct CachedForecast {
    expires_at: Instant,
    forecast: SymbolForecast,
}

/// TTL cache keyed by `(assetClass, symbol, investedAmount)`.
///
/// Only provider answers are cached; simulated fallbacks are resolved again on the next
/// request so a recovered provider is picked up immediately.
pub struct ForecastCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedForecast>>,
}

impl ForecastCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a live entry, evicting it if it has expired.
    pub fn get(&self, request: &ForecastRequest) -> Option<SymbolForecast> {
        let key = request.cache_key();
        let now = Instant::now();

        {
            let entries = self.entries.read().ok()?;
            match entries.get(&key) {
                Some(entry) if entry.expires_at > now => return Some(entry.forecast.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        if let Ok(mut entries) = self.entries.write() {
            entries.remove(&key);
        }
        None
    }

    pub fn insert(&self, request: &ForecastRequest, forecast: &SymbolForecast) {
        if forecast.error.is_some() {
            return;
        }
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                request.cache_key(),
                CachedForecast {
                    expires_at: Instant::now() + self.ttl,
                    forecast: forecast.clone(),
                },
            );
        }
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
