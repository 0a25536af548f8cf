// src/analysis/mod.rs

//! What-if tables derived from a finished engine run.
//!
//! Everything here reads the engine's results and the base parameters; none
//! of it feeds back into the optimal quantity.

pub mod comparison;
pub mod cycle;
pub mod indicators;

use crate::model::parameters::{ModelType, ParameterConfig};
use crate::model::results::SimulationResults;
use crate::simulation::config::AnalysisConfig;
use crate::simulation::inflation::{project_months, MonthProjection};
use crate::strategy::implementations::{DiscountEvaluation, QuantityDiscount};

use comparison::{decision_savings, quantity_comparison, DecisionSavings, QuantityScenario};
use cycle::{inventory_cycle, CyclePoint};
use indicators::{
    cost_composition, lead_time_impact, operating_indicators, CostShare, LeadTimeImpact,
    OperatingIndicators,
};

/// Every analysis for one run, sized by an [`AnalysisConfig`].
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub quantity_scenarios: Vec<QuantityScenario>,
    pub decision_savings: Vec<DecisionSavings>,
    pub cycle: Vec<CyclePoint>,
    pub cost_shares: [CostShare; 3],
    pub lead_times: Vec<LeadTimeImpact>,
    pub indicators: OperatingIndicators,
    /// Present for discount runs only.
    pub discount: Option<DiscountEvaluation>,
    /// Empty unless the run carries inflation settings and uses the
    /// inflation model.
    pub projection: Vec<MonthProjection>,
}

impl AnalysisReport {
    pub fn build(
        params: &ParameterConfig,
        results: &SimulationResults,
        config: &AnalysisConfig,
    ) -> Self {
        let discount = match params.model {
            ModelType::Discount => Some(QuantityDiscount.evaluate(params)),
            _ => None,
        };
        let projection = match params.model {
            ModelType::Inflation => project_months(params, config.projection_months),
            _ => Vec::new(),
        };

        Self {
            quantity_scenarios: quantity_comparison(params, results, &config.quantity_multipliers),
            decision_savings: decision_savings(params, results, &config.decision_multipliers),
            cycle: inventory_cycle(params, results, config.cycles, config.samples_per_cycle),
            cost_shares: cost_composition(params, results),
            lead_times: lead_time_impact(params, &config.lead_time_scenarios),
            indicators: operating_indicators(
                params,
                results,
                config.small_order_multiplier,
                config.large_order_multiplier,
            ),
            discount,
            projection,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parameters::{DiscountLevel, InflationConfig};
    use crate::simulation::engine::compute_results;

    #[test]
    fn report_sections_follow_model() {
        let config = AnalysisConfig::default();

        let basic = ParameterConfig::basic(100.0, 1000.0, 10.0, 50.0, 7.0);
        let report = AnalysisReport::build(&basic, &compute_results(&basic), &config);
        assert!(report.discount.is_none());
        assert!(report.projection.is_empty());
        assert_eq!(report.quantity_scenarios.len(), 5);
        assert_eq!(report.lead_times.len(), 6);

        let discount = basic
            .clone()
            .with_model(ModelType::Discount)
            .with_discount_levels(vec![DiscountLevel::new(500.0, 45.0)]);
        let report = AnalysisReport::build(&discount, &compute_results(&discount), &config);
        assert_eq!(report.discount.unwrap().selected_tier, Some(0));

        let inflation = basic
            .with_model(ModelType::Inflation)
            .with_inflation(InflationConfig::uniform(2.0));
        let report = AnalysisReport::build(&inflation, &compute_results(&inflation), &config);
        assert_eq!(report.projection.len(), 13);
    }
}
