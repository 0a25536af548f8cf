// src/io/reporting.rs

use crate::analysis::AnalysisReport;
use crate::error::CalcResult;
use crate::model::parameters::ParameterConfig;
use crate::model::results::SimulationResults;
use crate::strategy::implementations::DiscountEvaluation;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// One row per run: the headline figures in a flat shape.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow<'a> {
    pub scenario: &'a str,
    pub model: &'static str,
    pub optimal_quantity: f64,
    pub total_cost: f64,
    pub reorder_point: f64,
    pub orders_per_year: f64,
    pub days_between_orders: f64,
    pub eoq_changed: Option<bool>,
    pub cost_increase_percent: Option<f64>,
}

impl<'a> SummaryRow<'a> {
    pub fn new(scenario: &'a str, params: &ParameterConfig, results: &SimulationResults) -> Self {
        Self {
            scenario,
            model: params.model.as_str(),
            optimal_quantity: results.optimal_quantity,
            total_cost: results.total_cost,
            reorder_point: results.reorder_point,
            orders_per_year: results.orders_per_year,
            days_between_orders: results.days_between_orders,
            eoq_changed: results.inflation_results.map(|r| r.eoq_changed),
            cost_increase_percent: results.inflation_results.map(|r| r.cost_increase_percent),
        }
    }
}

/// Flat view of a discount tier for CSV output. Row 0 is the list price.
#[derive(Debug, Clone, Serialize)]
struct TierRow {
    tier: String,
    min_quantity: f64,
    price: Option<f64>,
    adjusted_quantity: f64,
    total_cost: f64,
    selected: bool,
}

fn tier_rows(eval: &DiscountEvaluation) -> Vec<TierRow> {
    let mut rows = vec![TierRow {
        tier: "list price".to_string(),
        min_quantity: 0.0,
        price: None,
        adjusted_quantity: eval.base.optimal_quantity,
        total_cost: eval.base.total_cost,
        selected: eval.selected_tier.is_none(),
    }];
    rows.extend(eval.tiers.iter().enumerate().map(|(index, tier)| TierRow {
        tier: format!("level {}", index + 1),
        min_quantity: tier.level.quantity,
        price: Some(tier.level.price),
        adjusted_quantity: tier.adjusted_quantity,
        total_cost: tier.total_cost,
        selected: eval.selected_tier == Some(index),
    }));
    rows
}

/// Writes any serializable records to a CSV file with a header row.
///
/// # Arguments
/// * `path` - The path to save the file (e.g., "reports/summary.csv").
/// * `records` - The rows to write, in order.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> CalcResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;

    info!(rows = records.len(), path = %path.display(), "wrote CSV report");
    Ok(())
}

/// Writes the engine results as pretty-printed JSON.
pub fn write_results_json(path: &Path, results: &SimulationResults) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(results)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "wrote JSON results");
    Ok(())
}

/// Writes every report for one run into `dir`, named after `stem`.
///
/// Sections that do not apply to the model (discount tiers, inflation
/// projection) are skipped. Returns the paths written.
pub fn write_run_reports(
    dir: &Path,
    stem: &str,
    params: &ParameterConfig,
    results: &SimulationResults,
    report: &AnalysisReport,
) -> CalcResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let path = dir.join(format!("{stem}_summary.csv"));
    write_records(&path, &[SummaryRow::new(stem, params, results)])?;
    written.push(path);

    let path = dir.join(format!("{stem}_results.json"));
    write_results_json(&path, results)?;
    written.push(path);

    let path = dir.join(format!("{stem}_quantities.csv"));
    write_records(&path, &report.quantity_scenarios)?;
    written.push(path);

    let path = dir.join(format!("{stem}_decisions.csv"));
    write_records(&path, &report.decision_savings)?;
    written.push(path);

    let path = dir.join(format!("{stem}_cycle.csv"));
    write_records(&path, &report.cycle)?;
    written.push(path);

    let path = dir.join(format!("{stem}_lead_times.csv"));
    write_records(&path, &report.lead_times)?;
    written.push(path);

    let path = dir.join(format!("{stem}_cost_shares.csv"));
    write_records(&path, &report.cost_shares)?;
    written.push(path);

    let path = dir.join(format!("{stem}_indicators.csv"));
    write_records(&path, &[report.indicators])?;
    written.push(path);

    if let Some(discount) = &report.discount {
        let path = dir.join(format!("{stem}_tiers.csv"));
        write_records(&path, &tier_rows(discount))?;
        written.push(path);
    }

    if !report.projection.is_empty() {
        let path = dir.join(format!("{stem}_projection.csv"));
        write_records(&path, &report.projection)?;
        written.push(path);
    }

    Ok(written)
}
