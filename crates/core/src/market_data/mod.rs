//! Market data module - forecast request planning and spot-price refresh.

mod forecast_requests;
mod market_data_service;
mod market_data_traits;

pub use forecast_requests::{build_forecast_requests, group_by_forecast_symbol, SymbolGroup};
pub use market_data_service::SpotPriceService;
pub use market_data_traits::SpotPriceServiceTrait;
