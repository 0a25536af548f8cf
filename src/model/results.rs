// src/model/results.rs

use serde::{Deserialize, Serialize};

/// Cost inputs and the resulting order size for a single month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSnapshot {
    pub order_cost: f64,
    pub holding_cost: f64,
    pub unit_price: f64,
    pub eoq: f64,
    pub total_cost: f64,
}

/// Annual cost components for the current month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub ordering_cost_annual: f64,
    pub holding_cost_annual: f64,
    pub purchase_cost_annual: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.ordering_cost_annual + self.holding_cost_annual + self.purchase_cost_annual
    }
}

/// One-month inflation outlook produced by the inflation model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InflationResults {
    pub current_month: MonthSnapshot,
    pub next_month: MonthSnapshot,
    pub cost_breakdown: CostBreakdown,
    /// True when the EOQ moves by more than 0.01 units between months.
    pub eoq_changed: bool,
    pub cost_increase: f64,
    pub cost_increase_percent: f64,
}

/// What the engine hands back for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResults {
    pub optimal_quantity: f64,
    pub total_cost: f64,
    pub reorder_point: f64,
    pub orders_per_year: f64,
    pub days_between_orders: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inflation_results: Option<InflationResults>,
}

impl SimulationResults {
    /// True when every headline figure is a finite number. Malformed inputs
    /// surface here as `NaN` or infinities rather than as errors.
    pub fn is_finite(&self) -> bool {
        [
            self.optimal_quantity,
            self.total_cost,
            self.reorder_point,
            self.orders_per_year,
            self.days_between_orders,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
