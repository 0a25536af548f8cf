// src/error.rs

//! Error types for everything outside the pure engine.
//!
//! The engine itself never fails; these cover validating inputs, loading
//! scenarios and writing reports.

use crate::model::validation::ValidationReport;
use thiserror::Error;

pub type CalcResult<T> = Result<T, CalculatorError>;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("invalid parameters: {0}")]
    Invalid(#[from] ValidationReport),

    #[error("no catalog example named '{0}'")]
    UnknownExample(String),

    #[error("scenario JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
