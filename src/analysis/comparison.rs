// src/analysis/comparison.rs

//! What-if tables showing why Q* beats ordering more or less per order.
//!
//! Both tables price the alternatives with the base order and holding costs,
//! whatever model produced Q*.

use crate::model::parameters::ParameterConfig;
use crate::model::results::SimulationResults;
use crate::strategy::optimization::{annual_holding_cost, annual_ordering_cost};
use serde::Serialize;

/// Variable cost of ordering a multiple of Q*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantityScenario {
    pub multiplier: f64,
    pub quantity: f64,
    pub ordering_cost: f64,
    pub holding_cost: f64,
    /// Ordering plus holding; purchase cost is left out.
    pub variable_cost: f64,
    pub is_optimal: bool,
}

/// Ordering and holding cost at each `multiplier * Q*`.
pub fn quantity_comparison(
    params: &ParameterConfig,
    results: &SimulationResults,
    multipliers: &[f64],
) -> Vec<QuantityScenario> {
    multipliers
        .iter()
        .map(|&multiplier| {
            let quantity = results.optimal_quantity * multiplier;
            let ordering_cost =
                annual_ordering_cost(params.annual_demand, params.order_cost, quantity);
            let holding_cost = annual_holding_cost(params.holding_cost, quantity);
            QuantityScenario {
                multiplier,
                quantity,
                ordering_cost,
                holding_cost,
                variable_cost: ordering_cost + holding_cost,
                is_optimal: multiplier == 1.0,
            }
        })
        .collect()
}

/// Full annual cost of an alternative ordering habit and how much more it
/// costs than the optimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DecisionSavings {
    pub multiplier: f64,
    pub quantity: f64,
    pub total_cost: f64,
    /// `total_cost - results.total_cost`; positive means the optimum saves money.
    pub excess_cost: f64,
    pub excess_percent: f64,
    pub is_optimal: bool,
}

/// Total cost (purchase included) at each `multiplier * Q*` compared with
/// the engine's total cost.
pub fn decision_savings(
    params: &ParameterConfig,
    results: &SimulationResults,
    multipliers: &[f64],
) -> Vec<DecisionSavings> {
    multipliers
        .iter()
        .map(|&multiplier| {
            let quantity = results.optimal_quantity * multiplier;
            let total_cost = alternative_total_cost(params, quantity);
            let excess_cost = total_cost - results.total_cost;
            DecisionSavings {
                multiplier,
                quantity,
                total_cost,
                excess_cost,
                excess_percent: (excess_cost / results.total_cost) * 100.0,
                is_optimal: multiplier == 1.0,
            }
        })
        .collect()
}

/// S*D/Q + H*Q/2 + D*C at the base prices.
pub(crate) fn alternative_total_cost(params: &ParameterConfig, quantity: f64) -> f64 {
    annual_ordering_cost(params.annual_demand, params.order_cost, quantity)
        + annual_holding_cost(params.holding_cost, quantity)
        + params.annual_demand * params.unit_price
}
