// src/simulation/inflation.rs

//! Inflation projector for the inflation-adjusted EOQ model.
//!
//! The current month starts from the configured costs, scaled once by the
//! devaluation multiplier when exchange rates are in play. Inflation then
//! compounds month over month on whichever components it is flagged to
//! affect. Devaluation is never compounded.

use crate::model::parameters::{InflationConfig, ParameterConfig};
use crate::model::results::{CostBreakdown, InflationResults, MonthSnapshot};
use crate::strategy::optimization::{
    annual_holding_cost, annual_ordering_cost, classic_total_cost, economic_order_quantity,
};
use serde::Serialize;
use tracing::debug;

/// Absolute EOQ movement (in units) above which the order size is reported
/// as having changed between months.
pub const EOQ_CHANGE_TOLERANCE: f64 = 0.01;

/// Cost inputs for one month before the order size is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MonthCosts {
    order_cost: f64,
    holding_cost: f64,
    unit_price: f64,
}

impl MonthCosts {
    /// Current-month costs: base figures, devalued once if configured.
    fn current(params: &ParameterConfig, config: &InflationConfig) -> Self {
        let mut costs = Self {
            order_cost: params.order_cost,
            holding_cost: params.holding_cost,
            unit_price: params.unit_price,
        };
        if let Some(multiplier) = config.devaluation_multiplier() {
            costs.order_cost *= multiplier;
            costs.holding_cost *= multiplier;
            costs.unit_price *= multiplier;
        }
        costs
    }

    /// Applies `factor` to each component flagged in `config`.
    fn inflate(&self, config: &InflationConfig, factor: f64) -> Self {
        let scale = |value: f64, affected: bool| if affected { value * factor } else { value };
        Self {
            order_cost: scale(self.order_cost, config.affects_ordering_cost),
            holding_cost: scale(self.holding_cost, config.affects_holding_cost),
            unit_price: scale(self.unit_price, config.affects_purchase_price),
        }
    }

    fn snapshot(&self, annual_demand: f64) -> MonthSnapshot {
        let eoq = economic_order_quantity(annual_demand, self.order_cost, self.holding_cost);
        MonthSnapshot {
            order_cost: self.order_cost,
            holding_cost: self.holding_cost,
            unit_price: self.unit_price,
            eoq,
            total_cost: classic_total_cost(
                annual_demand,
                self.unit_price,
                self.order_cost,
                self.holding_cost,
                eoq,
            ),
        }
    }
}

/// Projects costs and EOQ one month ahead.
///
/// Returns `None` when the parameters carry no inflation configuration.
pub fn project_next_month(params: &ParameterConfig) -> Option<InflationResults> {
    let config = params.inflation_config.as_ref()?;
    let demand = params.annual_demand;

    let now = MonthCosts::current(params, config);
    let next = now.inflate(config, config.growth_factor());

    let current_month = now.snapshot(demand);
    let next_month = next.snapshot(demand);

    let cost_breakdown = CostBreakdown {
        ordering_cost_annual: annual_ordering_cost(demand, now.order_cost, current_month.eoq),
        holding_cost_annual: annual_holding_cost(now.holding_cost, current_month.eoq),
        purchase_cost_annual: now.unit_price * demand,
    };

    let cost_increase = next_month.total_cost - current_month.total_cost;
    let results = InflationResults {
        current_month,
        next_month,
        cost_breakdown,
        eoq_changed: (current_month.eoq - next_month.eoq).abs() > EOQ_CHANGE_TOLERANCE,
        cost_increase,
        cost_increase_percent: (cost_increase / current_month.total_cost) * 100.0,
    };

    debug!(
        eoq_now = current_month.eoq,
        eoq_next = next_month.eoq,
        eoq_changed = results.eoq_changed,
        cost_increase_percent = results.cost_increase_percent,
        "projected inflation one month ahead"
    );

    Some(results)
}

/// One month of a multi-month projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthProjection {
    /// Months from now; 0 is the current month.
    pub month: u32,
    pub order_cost: f64,
    pub holding_cost: f64,
    pub unit_price: f64,
    pub eoq: f64,
    pub total_cost: f64,
}

/// Projects costs and EOQ for months `0..=horizon`, compounding the monthly
/// rate on each affected component.
///
/// Returns an empty vector when no inflation configuration is present.
pub fn project_months(params: &ParameterConfig, horizon: u32) -> Vec<MonthProjection> {
    let Some(config) = params.inflation_config.as_ref() else {
        return Vec::new();
    };
    let now = MonthCosts::current(params, config);

    (0..=horizon)
        .map(|month| {
            let factor = config.growth_factor().powi(month as i32);
            let snapshot = now.inflate(config, factor).snapshot(params.annual_demand);
            MonthProjection {
                month,
                order_cost: snapshot.order_cost,
                holding_cost: snapshot.holding_cost,
                unit_price: snapshot.unit_price,
                eoq: snapshot.eoq,
                total_cost: snapshot.total_cost,
            }
        })
        .collect()
}
