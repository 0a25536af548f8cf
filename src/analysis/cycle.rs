// src/analysis/cycle.rs

use crate::model::parameters::ParameterConfig;
use crate::model::results::SimulationResults;
use crate::strategy::optimization::daily_demand;
use serde::Serialize;

/// Where a sample sits in the replenishment cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CyclePhase {
    /// An order has just arrived: stock is at Q*.
    Peak,
    /// Stock is above the reorder point.
    Consumption,
    /// Stock is at or below the reorder point, an order is outstanding.
    ReorderZone,
    /// The moment stock crosses the reorder point.
    ReorderPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CyclePoint {
    pub day: f64,
    pub inventory: f64,
    pub phase: CyclePhase,
}

/// Samples the sawtooth inventory level over `cycles` replenishment cycles.
///
/// Each cycle starts at Q* on its first day, then drains at the average
/// daily demand. Samples run from day 1 in steps of `cycle_length / samples`
/// and never go below zero. A reorder-point sample is appended whenever the
/// crossing falls before the cycle ends.
pub fn inventory_cycle(
    params: &ParameterConfig,
    results: &SimulationResults,
    cycles: u32,
    samples: u32,
) -> Vec<CyclePoint> {
    let cycle_length = results.days_between_orders;
    let daily = daily_demand(params.annual_demand);
    let quantity = results.optimal_quantity;
    let reorder_level = results.reorder_point;

    if !cycle_length.is_finite() || cycle_length <= 0.0 || samples == 0 {
        return Vec::new();
    }
    let step = cycle_length / samples as f64;

    let mut points = Vec::new();
    for cycle in 0..cycles {
        let start = cycle as f64 * cycle_length;
        points.push(CyclePoint {
            day: start,
            inventory: quantity,
            phase: CyclePhase::Peak,
        });

        for day in (0..=samples)
            .map(|i| 1.0 + i as f64 * step)
            .take_while(|day| *day <= cycle_length)
        {
            let inventory = (quantity - daily * day).max(0.0);
            let phase = if inventory > reorder_level {
                CyclePhase::Consumption
            } else {
                CyclePhase::ReorderZone
            };
            points.push(CyclePoint {
                day: start + day,
                inventory,
                phase,
            });
        }

        let reorder_day = start + (quantity - reorder_level) / daily;
        if reorder_day < start + cycle_length {
            points.push(CyclePoint {
                day: reorder_day,
                inventory: reorder_level,
                phase: CyclePhase::ReorderPoint,
            });
        }
    }
    points
}
