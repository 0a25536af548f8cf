// src/model/parameters.rs

use serde::{Deserialize, Serialize};

/// The inventory-control model used to size each order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// Classic Economic Order Quantity.
    #[default]
    Basic,
    /// Economic Production Quantity (finite replenishment rate).
    Production,
    /// EOQ with all-units quantity discounts.
    Discount,
    /// EOQ re-evaluated under monthly inflation and devaluation.
    Inflation,
    /// Any model name this build does not recognize. Sized as `Basic`.
    #[serde(other)]
    Unknown,
}

impl ModelType {
    /// The lowercase name used in scenario files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Basic => "basic",
            ModelType::Production => "production",
            ModelType::Discount => "discount",
            ModelType::Inflation => "inflation",
            ModelType::Unknown => "unknown",
        }
    }
}

/// Finite production rate for the EPQ model.
///
/// On the wire this is a plain optional number (`productionRate`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum ProductionConfig {
    /// No production rate supplied: replenishment is instantaneous.
    #[default]
    None,
    /// Units per year the facility can produce.
    Rate(f64),
}

impl ProductionConfig {
    pub fn rate(&self) -> Option<f64> {
        match self {
            ProductionConfig::None => None,
            ProductionConfig::Rate(rate) => Some(*rate),
        }
    }

    /// True when the rate can feed the EPQ formula for this demand, i.e. it
    /// is present, non-zero, and strictly above the annual demand.
    pub fn supports_demand(&self, annual_demand: f64) -> bool {
        match self {
            ProductionConfig::Rate(rate) => *rate != 0.0 && *rate > annual_demand,
            ProductionConfig::None => false,
        }
    }
}

impl From<Option<f64>> for ProductionConfig {
    fn from(value: Option<f64>) -> Self {
        value.map_or(ProductionConfig::None, ProductionConfig::Rate)
    }
}

impl From<ProductionConfig> for Option<f64> {
    fn from(value: ProductionConfig) -> Self {
        value.rate()
    }
}

/// An all-units price break: ordering at least `quantity` units buys every
/// unit at `price`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountLevel {
    pub quantity: f64,
    pub price: f64,
}

impl DiscountLevel {
    pub fn new(quantity: f64, price: f64) -> Self {
        Self { quantity, price }
    }
}

/// Monthly inflation and currency devaluation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationConfig {
    /// Monthly rate as a percentage (3.65 means 3.65%).
    pub monthly_inflation_rate: f64,
    /// Inflation applies to the ordering cost (S).
    pub affects_ordering_cost: bool,
    /// Inflation applies to the holding cost (H).
    pub affects_holding_cost: bool,
    /// Inflation applies to the purchase price (C).
    pub affects_purchase_price: bool,
    #[serde(default)]
    pub include_exchange_rate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate_initial: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate_current: Option<f64>,
}

impl InflationConfig {
    /// Inflation applied uniformly to S, H and C with no devaluation.
    pub fn uniform(monthly_inflation_rate: f64) -> Self {
        Self {
            monthly_inflation_rate,
            affects_ordering_cost: true,
            affects_holding_cost: true,
            affects_purchase_price: true,
            ..Self::default()
        }
    }

    pub fn with_exchange_rate(mut self, initial: f64, current: f64) -> Self {
        self.include_exchange_rate = true;
        self.exchange_rate_initial = Some(initial);
        self.exchange_rate_current = Some(current);
        self
    }

    /// Monthly growth factor: 1 + rate / 100
    pub fn growth_factor(&self) -> f64 {
        1.0 + self.monthly_inflation_rate / 100.0
    }

    /// `current / initial` when devaluation is enabled and both rates are
    /// usable, `None` otherwise. A zero or missing rate disables the
    /// adjustment rather than dividing by it.
    pub fn devaluation_multiplier(&self) -> Option<f64> {
        if !self.include_exchange_rate {
            return None;
        }
        let usable = |rate: Option<f64>| rate.filter(|r| *r != 0.0 && !r.is_nan());
        match (
            usable(self.exchange_rate_initial),
            usable(self.exchange_rate_current),
        ) {
            (Some(initial), Some(current)) => Some(current / initial),
            _ => None,
        }
    }

    pub fn affects_any_component(&self) -> bool {
        self.affects_ordering_cost || self.affects_holding_cost || self.affects_purchase_price
    }
}

/// Everything the engine needs to size an order.
///
/// `holding_cost` is per unit per **year**; see
/// [`crate::strategy::optimization::annualize_monthly_holding_cost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterConfig {
    #[serde(default)]
    pub model: ModelType,
    pub order_cost: f64,
    pub annual_demand: f64,
    pub holding_cost: f64,
    pub unit_price: f64,
    /// Days between placing an order and receiving it.
    pub lead_time: f64,
    #[serde(default, rename = "productionRate")]
    pub production: ProductionConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_levels: Option<Vec<DiscountLevel>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_config: Option<InflationConfig>,
}

impl ParameterConfig {
    /// A basic-model configuration with no optional sections.
    pub fn basic(
        order_cost: f64,
        annual_demand: f64,
        holding_cost: f64,
        unit_price: f64,
        lead_time: f64,
    ) -> Self {
        Self {
            model: ModelType::Basic,
            order_cost,
            annual_demand,
            holding_cost,
            unit_price,
            lead_time,
            production: ProductionConfig::None,
            discount_levels: None,
            inflation_config: None,
        }
    }

    pub fn with_model(mut self, model: ModelType) -> Self {
        self.model = model;
        self
    }

    pub fn with_production_rate(mut self, rate: f64) -> Self {
        self.production = ProductionConfig::Rate(rate);
        self
    }

    pub fn with_discount_levels(mut self, levels: Vec<DiscountLevel>) -> Self {
        self.discount_levels = Some(levels);
        self
    }

    pub fn with_inflation(mut self, config: InflationConfig) -> Self {
        self.inflation_config = Some(config);
        self
    }

    /// Discount levels in the order supplied, empty when none were given.
    pub fn discount_levels(&self) -> &[DiscountLevel] {
        self.discount_levels.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_document() {
        let json = r#"{
            "model": "production",
            "orderCost": 200,
            "annualDemand": 10000,
            "holdingCost": 5,
            "unitPrice": 15,
            "leadTime": 5,
            "productionRate": 25000
        }"#;
        let params: ParameterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(params.model, ModelType::Production);
        assert_eq!(params.production, ProductionConfig::Rate(25000.0));
        assert!(params.discount_levels().is_empty());
        assert!(params.inflation_config.is_none());
    }

    #[test]
    fn unrecognized_model_name_becomes_unknown() {
        let json = r#"{"model":"stochastic","orderCost":1,"annualDemand":1,
            "holdingCost":1,"unitPrice":1,"leadTime":1}"#;
        let params: ParameterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(params.model, ModelType::Unknown);
    }

    #[test]
    fn model_names_match_wire_format() {
        for model in [
            ModelType::Basic,
            ModelType::Production,
            ModelType::Discount,
            ModelType::Inflation,
            ModelType::Unknown,
        ] {
            let wire = serde_json::to_value(model).unwrap();
            assert_eq!(wire.as_str(), Some(model.as_str()));
        }
    }

    #[test]
    fn missing_production_rate_is_none() {
        let json = r#"{"model":"basic","orderCost":1,"annualDemand":1,
            "holdingCost":1,"unitPrice":1,"leadTime":1}"#;
        let params: ParameterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(params.production, ProductionConfig::None);
        let back = serde_json::to_value(&params).unwrap();
        assert!(back["productionRate"].is_null());
    }

    #[test]
    fn production_rate_must_exceed_demand() {
        assert!(ProductionConfig::Rate(2000.0).supports_demand(1000.0));
        assert!(!ProductionConfig::Rate(1000.0).supports_demand(1000.0));
        assert!(!ProductionConfig::Rate(0.0).supports_demand(-5.0));
        assert!(!ProductionConfig::None.supports_demand(1000.0));
    }

    #[test]
    fn devaluation_requires_flag_and_both_rates() {
        let cfg = InflationConfig::uniform(3.65);
        assert_eq!(cfg.devaluation_multiplier(), None);

        let cfg = cfg.with_exchange_rate(6.96, 16.5);
        let m = cfg.devaluation_multiplier().unwrap();
        assert!((m - 16.5 / 6.96).abs() < 1e-12);

        let mut missing = cfg.clone();
        missing.exchange_rate_initial = None;
        assert_eq!(missing.devaluation_multiplier(), None);

        let mut zero = cfg;
        zero.exchange_rate_current = Some(0.0);
        assert_eq!(zero.devaluation_multiplier(), None);
    }

    #[test]
    fn growth_factor_converts_percentage() {
        let cfg = InflationConfig::uniform(3.65);
        assert!((cfg.growth_factor() - 1.0365).abs() < 1e-12);
    }
}
