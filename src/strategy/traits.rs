// src/strategy/traits.rs

use crate::model::parameters::ParameterConfig;
use std::fmt::Debug;

/// The order size a strategy settled on and the annual cost it implies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityDecision {
    pub optimal_quantity: f64,
    pub total_cost: f64,
}

impl QuantityDecision {
    pub fn new(optimal_quantity: f64, total_cost: f64) -> Self {
        Self {
            optimal_quantity,
            total_cost,
        }
    }
}

/// Sizing logic for one inventory-control model.
///
/// Implementations are stateless and must return the same decision for the
/// same parameters. We require `Send` + `Sync` so a strategy can be shared
/// across threads without wrapping.
pub trait OrderQuantityStrategy: Debug + Send + Sync {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    /// Picks the order quantity and its total annual cost.
    ///
    /// No input validation happens here: non-positive costs or demand flow
    /// through the formulas and come out as `NaN` or infinities.
    fn decide(&self, params: &ParameterConfig) -> QuantityDecision;
}
