//! Inventory optimization calculator.
//!
//! Sizes replenishment orders under four closed-form models (basic EOQ,
//! production EPQ, quantity discounts, inflation-adjusted EOQ) and derives
//! the reorder point and ordering cadence.
//!
//! ```
//! use inventory_optimizer::{compute_results, ParameterConfig};
//!
//! let params = ParameterConfig::basic(100.0, 1000.0, 10.0, 50.0, 7.0);
//! let results = compute_results(&params);
//! assert!((results.optimal_quantity - 141.42).abs() < 0.01);
//! ```

pub mod analysis;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{CalcResult, CalculatorError};
pub use model::parameters::{
    DiscountLevel, InflationConfig, ModelType, ParameterConfig, ProductionConfig,
};
pub use model::results::{CostBreakdown, InflationResults, MonthSnapshot, SimulationResults};
pub use model::validation::{validate, ValidationError, ValidationReport};
pub use simulation::config::AnalysisConfig;
pub use simulation::engine::compute_results;
