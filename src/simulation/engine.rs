// src/simulation/engine.rs

use crate::model::parameters::{ModelType, ParameterConfig};
use crate::model::results::{InflationResults, SimulationResults};
use crate::strategy::implementations::{
    BasicEoq, InflationAdjustedEoq, ProductionEpq, QuantityDiscount,
};
use crate::strategy::optimization::{reorder_point, DAYS_PER_YEAR};
use crate::strategy::traits::{OrderQuantityStrategy, QuantityDecision};
use tracing::debug;

/// Maps a model onto the strategy that sizes it.
///
/// Unrecognized models are sized with the basic EOQ.
pub fn strategy_for(model: ModelType) -> &'static dyn OrderQuantityStrategy {
    match model {
        ModelType::Production => &ProductionEpq,
        ModelType::Discount => &QuantityDiscount,
        ModelType::Inflation => &InflationAdjustedEoq,
        ModelType::Basic | ModelType::Unknown => &BasicEoq,
    }
}

/// Computes the optimal order quantity, its annual cost and the derived
/// cadence figures for one parameter set.
///
/// This is a pure function: no validation, no I/O, no state. Malformed
/// inputs produce `NaN` or infinite figures instead of errors. The inflation
/// model without an inflation configuration is sized like the basic model.
pub fn compute_results(params: &ParameterConfig) -> SimulationResults {
    if params.model == ModelType::Inflation {
        if let Some(projection) = InflationAdjustedEoq.project(params) {
            let decision = QuantityDecision::new(
                projection.current_month.eoq,
                projection.current_month.total_cost,
            );
            return finalize(params, decision, Some(projection));
        }
        debug!("inflation model without inflation settings, sizing with basic EOQ");
    }

    let strategy = match params.model {
        ModelType::Inflation => &BasicEoq as &dyn OrderQuantityStrategy,
        model => strategy_for(model),
    };
    if params.model == ModelType::Unknown {
        debug!("unrecognized model, sizing with basic EOQ");
    }

    let decision = strategy.decide(params);
    debug!(
        strategy = strategy.name(),
        optimal_quantity = decision.optimal_quantity,
        total_cost = decision.total_cost,
        "order quantity decided"
    );
    finalize(params, decision, None)
}

/// Derived cadence figures shared by every model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderCadence {
    pub orders_per_year: f64,
    pub days_between_orders: f64,
    pub reorder_point: f64,
}

impl OrderCadence {
    pub fn derive(annual_demand: f64, lead_time: f64, optimal_quantity: f64) -> Self {
        let orders_per_year = annual_demand / optimal_quantity;
        Self {
            orders_per_year,
            days_between_orders: DAYS_PER_YEAR / orders_per_year,
            reorder_point: reorder_point(annual_demand, lead_time),
        }
    }
}

fn finalize(
    params: &ParameterConfig,
    decision: QuantityDecision,
    inflation_results: Option<InflationResults>,
) -> SimulationResults {
    let cadence = OrderCadence::derive(
        params.annual_demand,
        params.lead_time,
        decision.optimal_quantity,
    );
    SimulationResults {
        optimal_quantity: decision.optimal_quantity,
        total_cost: decision.total_cost,
        reorder_point: cadence.reorder_point,
        orders_per_year: cadence.orders_per_year,
        days_between_orders: cadence.days_between_orders,
        inflation_results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parameters::{DiscountLevel, InflationConfig};
    use proptest::prelude::*;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn reference() -> ParameterConfig {
        ParameterConfig::basic(100.0, 1000.0, 10.0, 50.0, 7.0)
    }

    #[test]
    fn basic_reference_results() {
        let r = compute_results(&reference());
        assert!(close(r.optimal_quantity, 141.42, 0.005));
        assert!(close(r.total_cost, 51414.21, 0.005));
        assert!(close(r.reorder_point, 19.18, 0.005));
        assert!(close(r.orders_per_year, 7.07, 0.005));
        assert!(close(r.days_between_orders, 51.62, 0.005));
        assert!(r.inflation_results.is_none());
    }

    #[test]
    fn unknown_model_sizes_like_basic() {
        let basic = compute_results(&reference());
        let unknown = compute_results(&reference().with_model(ModelType::Unknown));
        assert_eq!(basic, unknown);
    }

    #[test]
    fn inflation_without_config_sizes_like_basic() {
        let basic = compute_results(&reference());
        let inflation = compute_results(&reference().with_model(ModelType::Inflation));
        assert_eq!(basic, inflation);
        assert!(inflation.inflation_results.is_none());
    }

    #[test]
    fn inflation_model_attaches_projection() {
        let params = ParameterConfig::basic(20.0, 2400.0, 24.0, 600.0, 7.0)
            .with_model(ModelType::Inflation)
            .with_inflation(InflationConfig::uniform(3.65));
        let r = compute_results(&params);
        let projection = r.inflation_results.expect("inflation results");
        assert_eq!(r.optimal_quantity, projection.current_month.eoq);
        assert_eq!(r.total_cost, projection.current_month.total_cost);
        assert!(!projection.eoq_changed);
        assert!(close(projection.cost_increase_percent, 3.65, 1e-9));
    }

    #[test]
    fn inflation_settings_are_ignored_by_other_models() {
        let params = reference().with_inflation(InflationConfig::uniform(3.65));
        let r = compute_results(&params);
        assert!(r.inflation_results.is_none());
        assert_eq!(r, compute_results(&reference()));
    }

    #[test]
    fn production_fallback_matches_basic_quantity() {
        let params = reference()
            .with_model(ModelType::Production)
            .with_production_rate(1000.0);
        let r = compute_results(&params);
        assert_eq!(r.optimal_quantity, compute_results(&reference()).optimal_quantity);
    }

    #[test]
    fn discount_model_routes_to_tier_selection() {
        let params = reference()
            .with_model(ModelType::Discount)
            .with_discount_levels(vec![
                DiscountLevel::new(100.0, 48.0),
                DiscountLevel::new(500.0, 45.0),
            ]);
        let r = compute_results(&params);
        assert_eq!(r.optimal_quantity, 500.0);
        assert!(close(r.total_cost, 47700.0, 1e-9));
        assert_eq!(r.orders_per_year, 2.0);
        assert_eq!(r.days_between_orders, 182.5);
    }

    #[test]
    fn cadence_is_independent_of_model() {
        let params = reference()
            .with_model(ModelType::Production)
            .with_production_rate(2000.0);
        let r = compute_results(&params);
        assert_eq!(r.optimal_quantity, 200.0);
        assert_eq!(r.orders_per_year, 5.0);
        assert_eq!(r.days_between_orders, 73.0);
        assert_eq!(r.reorder_point, compute_results(&reference()).reorder_point);
    }

    #[test]
    fn zero_demand_propagates_non_finite_values() {
        let mut params = reference();
        params.annual_demand = 0.0;
        let r = compute_results(&params);
        assert_eq!(r.optimal_quantity, 0.0);
        assert!(r.total_cost.is_nan());
        assert!(!r.is_finite());
    }

    #[test]
    fn negative_holding_cost_propagates_nan() {
        let mut params = reference();
        params.holding_cost = -10.0;
        let r = compute_results(&params);
        assert!(r.optimal_quantity.is_nan());
    }

    #[test]
    fn strategy_for_covers_every_model() {
        assert_eq!(strategy_for(ModelType::Basic).name(), "basic");
        assert_eq!(strategy_for(ModelType::Unknown).name(), "basic");
        assert_eq!(strategy_for(ModelType::Production).name(), "production");
        assert_eq!(strategy_for(ModelType::Discount).name(), "discount");
        assert_eq!(strategy_for(ModelType::Inflation).name(), "inflation");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn results_are_bit_identical_across_calls(
            s in 1.0f64..10_000.0,
            d in 1.0f64..1_000_000.0,
            h in 0.01f64..1_000.0,
            c in 0.01f64..10_000.0,
            l in 1.0f64..120.0,
        ) {
            let params = ParameterConfig::basic(s, d, h, c, l);
            let first = compute_results(&params);
            let second = compute_results(&params);
            prop_assert_eq!(first.optimal_quantity.to_bits(), second.optimal_quantity.to_bits());
            prop_assert_eq!(first.total_cost.to_bits(), second.total_cost.to_bits());
            prop_assert_eq!(first.reorder_point.to_bits(), second.reorder_point.to_bits());
            prop_assert_eq!(
                first.days_between_orders.to_bits(),
                second.days_between_orders.to_bits()
            );
        }

        #[test]
        fn higher_holding_cost_orders_less(
            s in 1.0f64..10_000.0,
            d in 1.0f64..1_000_000.0,
            h in 0.01f64..1_000.0,
            bump in 1.01f64..10.0,
        ) {
            let low = compute_results(&ParameterConfig::basic(s, d, h, 10.0, 7.0));
            let high = compute_results(&ParameterConfig::basic(s, d, h * bump, 10.0, 7.0));
            prop_assert!(high.optimal_quantity < low.optimal_quantity);
        }

        #[test]
        fn higher_order_cost_orders_more(
            s in 1.0f64..10_000.0,
            d in 1.0f64..1_000_000.0,
            h in 0.01f64..1_000.0,
            bump in 1.01f64..10.0,
        ) {
            let low = compute_results(&ParameterConfig::basic(s, d, h, 10.0, 7.0));
            let high = compute_results(&ParameterConfig::basic(s * bump, d, h, 10.0, 7.0));
            prop_assert!(high.optimal_quantity > low.optimal_quantity);
        }

        #[test]
        fn discount_never_costs_more_than_list_price(
            min_qty in 1.0f64..5_000.0,
            price in 1.0f64..100.0,
        ) {
            let base = compute_results(&reference());
            let params = reference()
                .with_model(ModelType::Discount)
                .with_discount_levels(vec![DiscountLevel::new(min_qty, price)]);
            let r = compute_results(&params);
            prop_assert!(r.total_cost <= base.total_cost);
        }

        #[test]
        fn uniform_inflation_never_moves_eoq(rate in 0.0f64..50.0) {
            let params = ParameterConfig::basic(20.0, 2400.0, 24.0, 600.0, 7.0)
                .with_model(ModelType::Inflation)
                .with_inflation(InflationConfig::uniform(rate));
            let projection = compute_results(&params).inflation_results.unwrap();
            prop_assert!(!projection.eoq_changed);
            prop_assert!((projection.cost_increase_percent - rate).abs() < 1e-6);
        }
    }
}
