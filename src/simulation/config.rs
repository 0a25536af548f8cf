// src/simulation/config.rs

use serde::{Deserialize, Serialize};

/// Settings for the what-if analyses layered on top of the engine results.
///
/// None of these affect the optimal quantity itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Months projected forward by the multi-month inflation outlook.
    pub projection_months: u32,
    /// Replenishment cycles drawn in the inventory sawtooth.
    pub cycles: u32,
    /// Samples taken across one cycle.
    pub samples_per_cycle: u32,
    /// Fractions of Q* compared against the optimum (ordering + holding).
    pub quantity_multipliers: Vec<f64>,
    /// Fractions of Q* for the "what if we ordered differently" savings table.
    pub decision_multipliers: Vec<f64>,
    /// Lead times (days) for the reorder-point sensitivity table.
    pub lead_time_scenarios: Vec<f64>,
    /// Multiplier of Q* representing a habit of small, frequent orders.
    pub small_order_multiplier: f64,
    /// Multiplier of Q* representing a habit of large, infrequent orders.
    pub large_order_multiplier: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            projection_months: 12,
            cycles: 3,
            samples_per_cycle: 10,
            quantity_multipliers: vec![0.3, 0.6, 1.0, 1.5, 2.5],
            decision_multipliers: vec![0.2, 0.5, 1.0, 2.0, 4.0],
            lead_time_scenarios: vec![1.0, 3.0, 7.0, 14.0, 21.0, 30.0],
            small_order_multiplier: 0.3,
            large_order_multiplier: 2.5,
        }
    }
}
