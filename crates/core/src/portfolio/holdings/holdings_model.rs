use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_PROPERTY_GROWTH_PERCENT, GOLD_FORECAST_SYMBOL, SILVER_FORECAST_SYMBOL,
};
use crate::portfolio::category::Category;
use crate::utils::compounding::saturating_mul;
use finsim_market_data::AssetClass;

/// A single owned asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(flatten)]
    pub kind: HoldingKind,
}

/// Holding kinds, each with the fields its valuation needs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum HoldingKind {
    Equity(MarketPosition),
    /// Fund tracked by units and NAV.
    FundLive(MarketPosition),
    /// Fund fed by periodic contributions (SIP).
    FundRecurring(RecurringContribution),
    Property(PropertyHolding),
    Deposit(DepositHolding),
    Commodity(CommodityPosition),
    RetirementContribution(RetirementContribution),
}

/// Units held at a purchase price, with the latest known market price.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketPosition {
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    /// Zero when no live price is known.
    #[serde(default)]
    pub current_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<Decimal>,
}

impl MarketPosition {
    /// Current price, or the purchase price when no live price is set.
    pub fn effective_price(&self) -> Decimal {
        if self.current_price > Decimal::ZERO {
            self.current_price
        } else {
            self.purchase_price
        }
    }

    pub fn market_value(&self) -> Decimal {
        saturating_mul(self.effective_price(), self.quantity)
    }

    pub fn invested_amount(&self) -> Decimal {
        saturating_mul(self.purchase_price, self.quantity)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Metal {
    Gold,
    Silver,
}

impl Metal {
    pub fn asset_class(&self) -> AssetClass {
        match self {
            Metal::Gold => AssetClass::CommodityGold,
            Metal::Silver => AssetClass::CommoditySilver,
        }
    }

    pub fn placeholder_symbol(&self) -> &'static str {
        match self {
            Metal::Gold => GOLD_FORECAST_SYMBOL,
            Metal::Silver => SILVER_FORECAST_SYMBOL,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommodityPosition {
    pub metal: Metal,
    pub quantity: Decimal,
    pub purchase_price: Decimal,
    #[serde(default)]
    pub current_price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<Decimal>,
}

impl CommodityPosition {
    pub fn position(&self) -> MarketPosition {
        MarketPosition {
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            current_price: self.current_price,
            previous_close: self.previous_close,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringContribution {
    pub amount: Decimal,
    pub interval_months: u32,
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_compounded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compound_rate_percent: Option<Decimal>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyHolding {
    pub purchase_price: Decimal,
    pub purchase_date: Option<NaiveDate>,
    #[serde(default = "default_property_growth")]
    pub annual_growth_rate_percent: Decimal,
}

fn default_property_growth() -> Decimal {
    DEFAULT_PROPERTY_GROWTH_PERCENT
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepositHolding {
    pub principal: Decimal,
    pub annual_interest_rate_percent: Decimal,
    pub term_years: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RetirementContribution {
    pub amount: Decimal,
}

impl Holding {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: HoldingKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: None,
            kind,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Dashboard category the holding is listed under.
    pub fn category(&self) -> Category {
        match &self.kind {
            HoldingKind::Equity(_) => Category::Stocks,
            HoldingKind::FundLive(_) | HoldingKind::FundRecurring(_) => Category::MutualFunds,
            HoldingKind::Property(_) => Category::Properties,
            HoldingKind::Deposit(_) => Category::FixedDeposits,
            HoldingKind::Commodity(c) => match c.metal {
                Metal::Gold => Category::Gold,
                Metal::Silver => Category::Silver,
            },
            HoldingKind::RetirementContribution(_) => Category::PostRetirement,
        }
    }

    /// Market position for lump-sum holdings (equity, live fund, commodity).
    pub fn market_position(&self) -> Option<MarketPosition> {
        match &self.kind {
            HoldingKind::Equity(p) | HoldingKind::FundLive(p) => Some(*p),
            HoldingKind::Commodity(c) => Some(c.position()),
            _ => None,
        }
    }

    /// Asset class and symbol the forecast provider knows this holding by.
    ///
    /// Only lump-sum holdings are forecast. Equities and live funds fall back to their
    /// display name when no ticker is stored; metals use a placeholder symbol.
    pub fn forecast_key(&self) -> Option<(AssetClass, String)> {
        let explicit = self
            .symbol
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase);

        match &self.kind {
            HoldingKind::Equity(_) | HoldingKind::FundLive(_) => {
                let class = if matches!(self.kind, HoldingKind::Equity(_)) {
                    AssetClass::Equity
                } else {
                    AssetClass::Fund
                };
                let symbol = explicit.or_else(|| {
                    let name = self.name.trim();
                    (!name.is_empty()).then(|| name.to_uppercase())
                })?;
                Some((class, symbol))
            }
            HoldingKind::Commodity(c) => Some((
                c.metal.asset_class(),
                explicit.unwrap_or_else(|| c.metal.placeholder_symbol().to_string()),
            )),
            _ => None,
        }
    }

    /// Ticker quoted by the spot-price provider for this holding.
    pub fn spot_ticker(&self) -> Option<String> {
        match &self.kind {
            HoldingKind::Equity(_) | HoldingKind::FundLive(_) => self
                .symbol
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_uppercase),
            HoldingKind::Commodity(c) => c.metal.asset_class().spot_ticker().map(str::to_string),
            _ => None,
        }
    }

    /// Amount put into a lump-sum holding, `quantity × purchasePrice`.
    pub fn invested_amount(&self) -> Decimal {
        self.market_position()
            .map(|p| p.invested_amount().max(Decimal::ZERO))
            .unwrap_or(Decimal::ZERO)
    }

    /// Replaces the live price (and previous close, when known) of a lump-sum holding.
    pub fn apply_spot_price(&mut self, current_price: Decimal, previous_close: Option<Decimal>) {
        match &mut self.kind {
            HoldingKind::Equity(p) | HoldingKind::FundLive(p) => {
                p.current_price = current_price;
                if previous_close.is_some() {
                    p.previous_close = previous_close;
                }
            }
            HoldingKind::Commodity(c) => {
                c.current_price = current_price;
                if previous_close.is_some() {
                    c.previous_close = previous_close;
                }
            }
            _ => {}
        }
    }
}
