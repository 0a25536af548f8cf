// src/model/validation.rs

//! Completeness checks a caller runs before handing parameters to the engine.
//!
//! The engine accepts anything and lets bad numbers surface as `NaN`. These
//! checks mirror what an input form requires before it enables "calculate".

use crate::model::parameters::{ModelType, ParameterConfig, ProductionConfig};
use thiserror::Error;

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be a positive number (got {value})")]
    NotPositive { field: &'static str, value: f64 },

    #[error("production model needs a production rate")]
    MissingProductionRate,

    #[error("production rate {rate} must exceed annual demand {demand}")]
    ProductionRateTooLow { rate: f64, demand: f64 },

    #[error("inflation model needs inflation settings")]
    MissingInflationConfig,

    #[error("inflation must affect at least one of ordering cost, holding cost or purchase price")]
    NoInflationComponent,

    #[error("exchange rate adjustment needs a positive {field}")]
    MissingExchangeRate { field: &'static str },

    #[error("discount level {index}: {field} must be a positive number (got {value})")]
    InvalidDiscountLevel {
        index: usize,
        field: &'static str,
        value: f64,
    },
}

/// Every problem found in one parameter set.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", join_messages(.errors))]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn require_positive(errors: &mut Vec<ValidationError>, field: &'static str, value: f64) {
    // NaN fails this check too.
    if !(value > 0.0) {
        errors.push(ValidationError::NotPositive { field, value });
    }
}

/// Collects every problem with `params` rather than stopping at the first.
pub fn validate(params: &ParameterConfig) -> Result<(), ValidationReport> {
    let mut errors = Vec::new();

    require_positive(&mut errors, "orderCost", params.order_cost);
    require_positive(&mut errors, "annualDemand", params.annual_demand);
    require_positive(&mut errors, "holdingCost", params.holding_cost);
    require_positive(&mut errors, "unitPrice", params.unit_price);
    require_positive(&mut errors, "leadTime", params.lead_time);

    match params.model {
        ModelType::Production => match params.production {
            ProductionConfig::None => errors.push(ValidationError::MissingProductionRate),
            ProductionConfig::Rate(rate) => {
                require_positive(&mut errors, "productionRate", rate);
                if rate > 0.0 && !(rate > params.annual_demand) {
                    errors.push(ValidationError::ProductionRateTooLow {
                        rate,
                        demand: params.annual_demand,
                    });
                }
            }
        },
        ModelType::Inflation => match &params.inflation_config {
            None => errors.push(ValidationError::MissingInflationConfig),
            Some(config) => {
                require_positive(
                    &mut errors,
                    "monthlyInflationRate",
                    config.monthly_inflation_rate,
                );
                if !config.affects_any_component() {
                    errors.push(ValidationError::NoInflationComponent);
                }
                if config.include_exchange_rate {
                    for (field, rate) in [
                        ("exchangeRateInitial", config.exchange_rate_initial),
                        ("exchangeRateCurrent", config.exchange_rate_current),
                    ] {
                        if !rate.is_some_and(|r| r > 0.0) {
                            errors.push(ValidationError::MissingExchangeRate { field });
                        }
                    }
                }
            }
        },
        ModelType::Discount => {
            for (index, level) in params.discount_levels().iter().enumerate() {
                for (field, value) in [("quantity", level.quantity), ("price", level.price)] {
                    if !(value > 0.0) {
                        errors.push(ValidationError::InvalidDiscountLevel {
                            index,
                            field,
                            value,
                        });
                    }
                }
            }
        }
        ModelType::Basic | ModelType::Unknown => {}
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationReport { errors })
    }
}

impl ParameterConfig {
    /// True when [`validate`] finds nothing wrong.
    pub fn is_complete(&self) -> bool {
        validate(self).is_ok()
    }
}
