use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("Invalid FINSIM_LOG_FORMAT: {}", other),
        }
    }
}

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Base URL of the forecast service; `None` disables it and every symbol falls back.
    pub forecast_url: Option<String>,
    pub forecast_timeout: Duration,
    pub forecast_cache_ttl: Duration,
    pub spot_prices: bool,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            forecast_url: Some("http://127.0.0.1:8000".to_string()),
            forecast_timeout: Duration::from_millis(10_000),
            forecast_cache_ttl: Duration::from_secs(60),
            spot_prices: true,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            log_format: LogFormat::Text,
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_millis(key: &str, default: Duration) -> Duration {
    env_var(key)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match env_var("FINSIM_LISTEN_ADDR") {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid FINSIM_LISTEN_ADDR: {}", addr))?,
            None => defaults.listen_addr,
        };
        let forecast_url = match env_var("FINSIM_FORECAST_URL") {
            Some(url) if url.trim().is_empty() => None,
            Some(url) => Some(url.trim().trim_end_matches('/').to_string()),
            None => defaults.forecast_url,
        };
        let forecast_cache_ttl = env_var("FINSIM_FORECAST_CACHE_TTL_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.forecast_cache_ttl);
        let spot_prices = env_var("FINSIM_SPOT_PRICES")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(defaults.spot_prices);
        let cors_allow = env_var("FINSIM_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let log_format = match env_var("FINSIM_LOG_FORMAT") {
            Some(format) => format.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            listen_addr,
            forecast_url,
            forecast_timeout: env_millis("FINSIM_FORECAST_TIMEOUT_MS", defaults.forecast_timeout),
            forecast_cache_ttl,
            spot_prices,
            cors_allow,
            request_timeout: env_millis("FINSIM_REQUEST_TIMEOUT_MS", defaults.request_timeout),
            log_format,
        })
    }
}
