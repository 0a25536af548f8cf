// src/strategy/implementations.rs

use crate::model::parameters::{DiscountLevel, ParameterConfig};
use crate::model::results::InflationResults;
use crate::simulation::inflation;
use crate::strategy::optimization::{
    economic_order_quantity, economic_production_quantity, production_total_cost,
    purchase_first_total_cost, utilization_factor,
};
use crate::strategy::traits::{OrderQuantityStrategy, QuantityDecision};
use tracing::{debug, trace};

// =========================================================================
// 1. Basic EOQ
// =========================================================================

/// Classic Economic Order Quantity with constant demand and instantaneous
/// replenishment.
///
/// Q* = sqrt(2DS/H), TC = DC + (D/Q)S + (Q/2)H
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicEoq;

impl BasicEoq {
    pub fn new() -> Self {
        Self
    }
}

impl OrderQuantityStrategy for BasicEoq {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn decide(&self, params: &ParameterConfig) -> QuantityDecision {
        let quantity =
            economic_order_quantity(params.annual_demand, params.order_cost, params.holding_cost);
        let total_cost = purchase_first_total_cost(
            params.annual_demand,
            params.unit_price,
            params.order_cost,
            params.holding_cost,
            quantity,
        );
        QuantityDecision::new(quantity, total_cost)
    }
}

// =========================================================================
// 2. Production EPQ
// =========================================================================

/// Economic Production Quantity. The order cost is read as the setup cost of
/// a production run.
///
/// If the production rate is missing or does not exceed demand, the order
/// size falls back to the plain EOQ while the cost keeps the production
/// form, with the utilization factor computed from whatever rate was given.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductionEpq;

impl ProductionEpq {
    pub fn new() -> Self {
        Self
    }
}

impl OrderQuantityStrategy for ProductionEpq {
    fn name(&self) -> &'static str {
        "production"
    }

    fn decide(&self, params: &ParameterConfig) -> QuantityDecision {
        let demand = params.annual_demand;

        let quantity = match params.production.rate() {
            Some(rate) if params.production.supports_demand(demand) => {
                economic_production_quantity(demand, params.order_cost, params.holding_cost, rate)
            }
            _ => {
                debug!(
                    production_rate = ?params.production.rate(),
                    annual_demand = demand,
                    "production rate cannot sustain demand, sizing with plain EOQ"
                );
                economic_order_quantity(demand, params.order_cost, params.holding_cost)
            }
        };

        let utilization = utilization_factor(demand, params.production.rate());
        let total_cost = production_total_cost(
            demand,
            params.unit_price,
            params.order_cost,
            params.holding_cost,
            quantity,
            utilization,
        );
        QuantityDecision::new(quantity, total_cost)
    }
}

// =========================================================================
// 3. Quantity Discount
// =========================================================================

/// Cost of ordering at one price break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierEvaluation {
    pub level: DiscountLevel,
    /// The base EOQ raised to the tier minimum when it falls short of it.
    pub adjusted_quantity: f64,
    pub total_cost: f64,
}

/// Every candidate the discount strategy considered and which one won.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountEvaluation {
    /// Base EOQ at the list price.
    pub base: QuantityDecision,
    /// One entry per discount level, in input order.
    pub tiers: Vec<TierEvaluation>,
    /// Index into `tiers` of the winner, `None` when the list price wins.
    pub selected_tier: Option<usize>,
}

impl DiscountEvaluation {
    /// The winning candidate. An index that points past `tiers` falls back
    /// to the base.
    pub fn decision(&self) -> QuantityDecision {
        self.selected_tier
            .and_then(|index| self.tiers.get(index))
            .map_or(self.base, |tier| {
                QuantityDecision::new(tier.adjusted_quantity, tier.total_cost)
            })
    }
}

/// All-units quantity discount model.
///
/// Every tier re-uses the base EOQ (computed from the list-price holding
/// cost) and only lifts it to the tier minimum; no tier-specific EOQ is
/// derived. A tier replaces the running best only when strictly cheaper, so
/// the list price wins ties and earlier tiers win ties against later ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantityDiscount;

impl QuantityDiscount {
    pub fn new() -> Self {
        Self
    }

    /// Evaluates the base candidate and every tier.
    pub fn evaluate(&self, params: &ParameterConfig) -> DiscountEvaluation {
        let demand = params.annual_demand;
        let standard_eoq =
            economic_order_quantity(demand, params.order_cost, params.holding_cost);

        let base = QuantityDecision::new(
            standard_eoq,
            purchase_first_total_cost(
                demand,
                params.unit_price,
                params.order_cost,
                params.holding_cost,
                standard_eoq,
            ),
        );

        let mut best_cost = base.total_cost;
        let mut selected_tier = None;
        let mut tiers = Vec::with_capacity(params.discount_levels().len());

        for (index, level) in params.discount_levels().iter().enumerate() {
            let adjusted_quantity = standard_eoq.max(level.quantity);
            let total_cost = purchase_first_total_cost(
                demand,
                level.price,
                params.order_cost,
                params.holding_cost,
                adjusted_quantity,
            );
            trace!(
                index,
                min_quantity = level.quantity,
                price = level.price,
                adjusted_quantity,
                total_cost,
                "evaluated discount tier"
            );

            if total_cost < best_cost {
                best_cost = total_cost;
                selected_tier = Some(index);
            }

            tiers.push(TierEvaluation {
                level: *level,
                adjusted_quantity,
                total_cost,
            });
        }

        debug!(?selected_tier, tiers = tiers.len(), "discount tier selected");

        DiscountEvaluation {
            base,
            tiers,
            selected_tier,
        }
    }
}

impl OrderQuantityStrategy for QuantityDiscount {
    fn name(&self) -> &'static str {
        "discount"
    }

    fn decide(&self, params: &ParameterConfig) -> QuantityDecision {
        self.evaluate(params).decision()
    }
}

// =========================================================================
// 4. Inflation Adjusted
// =========================================================================

/// EOQ under monthly inflation and an optional one-off devaluation.
///
/// The order size and cost come from the current-month snapshot of the
/// projection. Without an inflation configuration it sizes like [`BasicEoq`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InflationAdjustedEoq;

impl InflationAdjustedEoq {
    pub fn new() -> Self {
        Self
    }

    /// One-month projection, or `None` if no inflation settings were given.
    pub fn project(&self, params: &ParameterConfig) -> Option<InflationResults> {
        inflation::project_next_month(params)
    }
}

impl OrderQuantityStrategy for InflationAdjustedEoq {
    fn name(&self) -> &'static str {
        "inflation"
    }

    fn decide(&self, params: &ParameterConfig) -> QuantityDecision {
        match self.project(params) {
            Some(projection) => QuantityDecision::new(
                projection.current_month.eoq,
                projection.current_month.total_cost,
            ),
            None => BasicEoq.decide(params),
        }
    }
}
