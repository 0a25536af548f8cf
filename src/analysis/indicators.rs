// src/analysis/indicators.rs

use crate::analysis::comparison::alternative_total_cost;
use crate::model::parameters::ParameterConfig;
use crate::model::results::SimulationResults;
use crate::strategy::optimization::{annual_holding_cost, annual_ordering_cost, daily_demand};
use serde::Serialize;

/// Which bucket a share of the annual cost falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CostCategory {
    Purchase,
    Ordering,
    Holding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostShare {
    pub category: CostCategory,
    pub cost: f64,
    /// Share of `results.total_cost`, in percent.
    pub percentage: f64,
}

/// Splits the annual cost at Q* into purchase, ordering and holding.
///
/// Components are priced at the base parameters; for discount and inflation
/// runs the percentages therefore need not sum to 100.
pub fn cost_composition(params: &ParameterConfig, results: &SimulationResults) -> [CostShare; 3] {
    let quantity = results.optimal_quantity;
    let share = |category, cost: f64| CostShare {
        category,
        cost,
        percentage: (cost / results.total_cost) * 100.0,
    };
    [
        share(
            CostCategory::Purchase,
            params.unit_price * params.annual_demand,
        ),
        share(
            CostCategory::Ordering,
            annual_ordering_cost(params.annual_demand, params.order_cost, quantity),
        ),
        share(
            CostCategory::Holding,
            annual_holding_cost(params.holding_cost, quantity),
        ),
    ]
}

/// Reorder point under an alternative lead time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeadTimeImpact {
    pub lead_time: f64,
    pub reorder_point: f64,
    /// Stock held beyond what the configured lead time needs, never negative.
    pub extra_stock: f64,
    /// True when this lead time is longer than the configured one, so the
    /// configured reorder point would not cover it.
    pub exceeds_configured: bool,
}

pub fn lead_time_impact(params: &ParameterConfig, lead_times: &[f64]) -> Vec<LeadTimeImpact> {
    let daily = daily_demand(params.annual_demand);
    lead_times
        .iter()
        .map(|&lead_time| {
            let reorder_point = daily * lead_time;
            LeadTimeImpact {
                lead_time,
                reorder_point,
                extra_stock: (reorder_point - daily * params.lead_time).max(0.0),
                exceeds_configured: lead_time > params.lead_time,
            }
        })
        .collect()
}

/// Headline operating figures for the recommended policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingIndicators {
    /// Annual demand over average stock (Q*/2).
    pub inventory_turnover: f64,
    /// Average stock valued at the base unit price.
    pub average_inventory_value: f64,
    /// Days one order lasts at average daily demand.
    pub days_of_supply: f64,
    /// Annual saving versus ordering `small_multiplier * Q*` each time.
    pub savings_vs_small_orders: f64,
    /// Annual saving versus ordering `large_multiplier * Q*` each time.
    pub savings_vs_large_orders: f64,
}

pub fn operating_indicators(
    params: &ParameterConfig,
    results: &SimulationResults,
    small_multiplier: f64,
    large_multiplier: f64,
) -> OperatingIndicators {
    let quantity = results.optimal_quantity;
    let average_stock = quantity / 2.0;

    OperatingIndicators {
        inventory_turnover: params.annual_demand / average_stock,
        average_inventory_value: average_stock * params.unit_price,
        days_of_supply: quantity / daily_demand(params.annual_demand),
        savings_vs_small_orders: alternative_total_cost(params, quantity * small_multiplier)
            - results.total_cost,
        savings_vs_large_orders: alternative_total_cost(params, quantity * large_multiplier)
            - results.total_cost,
    }
}
