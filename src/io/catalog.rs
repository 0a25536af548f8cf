// src/io/catalog.rs

//! Built-in teaching scenarios.
//!
//! Holding costs are annual; cases stated per month go through
//! `annualize_monthly_holding_cost`.

use crate::error::{CalcResult, CalculatorError};
use crate::model::parameters::{DiscountLevel, InflationConfig, ModelType, ParameterConfig};
use crate::strategy::optimization::annualize_monthly_holding_cost;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Matches every example when filtering.
    All,
    Food,
    Electronics,
    Textiles,
    Inflation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub parameters: ParameterConfig,
    pub insights: String,
}

/// Starting point for a blank calculation.
pub fn default_parameters() -> ParameterConfig {
    ParameterConfig::basic(100.0, 1000.0, 10.0, 50.0, 7.0)
        .with_production_rate(2000.0)
        .with_discount_levels(vec![
            DiscountLevel::new(100.0, 48.0),
            DiscountLevel::new(500.0, 45.0),
        ])
}

fn example(
    name: &str,
    description: &str,
    category: Category,
    parameters: ParameterConfig,
    insights: &str,
) -> Example {
    Example {
        name: name.to_string(),
        description: description.to_string(),
        category,
        parameters,
        insights: insights.to_string(),
    }
}

/// Every built-in example, in presentation order.
pub fn examples() -> Vec<Example> {
    vec![
        example(
            "Premium Coffee",
            "Specialty coffee for a chain of coffee shops with steady demand all year.",
            Category::Food,
            ParameterConfig::basic(150.0, 5000.0, 15.0, 25.0, 14.0),
            "Demand is stable, but keeping beans fresh makes storage expensive.",
        ),
        example(
            "Smartphones",
            "High-end phones with volume discounts from the supplier.",
            Category::Electronics,
            ParameterConfig::basic(500.0, 2000.0, 100.0, 600.0, 21.0)
                .with_model(ModelType::Discount)
                .with_discount_levels(vec![
                    DiscountLevel::new(100.0, 580.0),
                    DiscountLevel::new(500.0, 550.0),
                    DiscountLevel::new(1000.0, 520.0),
                ]),
            "A high unit value makes stock costly to hold, but volume discounts can offset it.",
        ),
        example(
            "T-Shirts",
            "In-house t-shirt production for a fashion brand with limited capacity.",
            Category::Textiles,
            ParameterConfig::basic(200.0, 10000.0, 5.0, 15.0, 5.0)
                .with_model(ModelType::Production)
                .with_production_rate(25000.0),
            "Own production adds flexibility but has to balance capacity against demand.",
        ),
        example(
            "Bestseller Books",
            "Fast-moving titles for a bookstore chain with predictable demand.",
            Category::Textiles,
            ParameterConfig::basic(120.0, 8000.0, 8.0, 18.0, 10.0),
            "Predictable demand, but shelf space is valuable.",
        ),
        example(
            "Pizza Ingredients",
            "Ingredients for a pizzeria chain with volume discounts and little storage.",
            Category::Food,
            ParameterConfig::basic(80.0, 15000.0, 12.0, 8.0, 3.0)
                .with_model(ModelType::Discount)
                .with_discount_levels(vec![
                    DiscountLevel::new(500.0, 7.5),
                    DiscountLevel::new(2000.0, 7.0),
                ]),
            "Perishable stock is expensive to hold, yet the volume discounts are significant.",
        ),
        example(
            "Eco Bags",
            "Reusable bags produced for a supermarket chain with high seasonal demand.",
            Category::Textiles,
            ParameterConfig::basic(300.0, 50000.0, 2.0, 3.0, 7.0)
                .with_model(ModelType::Production)
                .with_production_rate(100000.0),
            "Cheap to produce and in growing demand, which favours large batches.",
        ),
        example(
            "Problem 1: Sacks Under Inflation",
            "EOQ with 3.65% monthly inflation affecting every cost.",
            Category::Inflation,
            // 200 sacks/month * 12 = 2400/year, Bs. 2 per sack per month.
            ParameterConfig::basic(20.0, 2400.0, annualize_monthly_holding_cost(2.0), 600.0, 7.0)
                .with_model(ModelType::Inflation)
                .with_inflation(InflationConfig::uniform(3.65)),
            "Costs rise, but the EOQ holds because ordering and holding costs grow together.",
        ),
        example(
            "Problem 2: Devaluation Plus Inflation",
            "EOQ with an exchange rate moving from 6.96 to 16.50 and 3.65% monthly inflation.",
            Category::Inflation,
            // USD 5 per unit per month.
            ParameterConfig::basic(50.0, 600.0, annualize_monthly_holding_cost(5.0), 50.0, 7.0)
                .with_model(ModelType::Inflation)
                .with_inflation(InflationConfig::uniform(3.65).with_exchange_rate(6.96, 16.5)),
            "Devaluation hits every cost at once; inflation then raises them month by month.",
        ),
    ]
}

/// Examples in `category`; [`Category::All`] returns the whole catalog.
pub fn examples_in(category: Category) -> Vec<Example> {
    examples()
        .into_iter()
        .filter(|e| category == Category::All || e.category == category)
        .collect()
}

/// Looks an example up by name, ignoring case.
pub fn find_example(name: &str) -> CalcResult<Example> {
    examples()
        .into_iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CalculatorError::UnknownExample(name.to_string()))
}
