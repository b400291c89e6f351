use chrono::NaiveDate;
use finsim_core::portfolio::snapshot::PortfolioSnapshot;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRequest {
    pub snapshot: PortfolioSnapshot,
    pub horizon: u32,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub refresh_prices: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProjectionRequest {
    pub snapshot: PortfolioSnapshot,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    #[serde(default)]
    pub refresh_prices: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    pub snapshot: PortfolioSnapshot,
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Untyped forecast request, checked before it could be sent to the provider.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastValidationRequest {
    pub asset_class: String,
    #[serde(default)]
    pub symbol: String,
    pub invested_amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
