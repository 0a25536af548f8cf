use anyhow::Context;
use inventory_optimizer::analysis::AnalysisReport;
use inventory_optimizer::io::catalog;
use inventory_optimizer::io::reporting::{self, SummaryRow};
use inventory_optimizer::io::scenario::load_valid_scenario;
use inventory_optimizer::{compute_results, logging, SimulationResults};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info};

fn print_results(name: &str, results: &SimulationResults) {
    println!("--- {} ---", name);
    println!("  Optimal quantity:    {:.2} units", results.optimal_quantity);
    println!("  Total annual cost:   ${:.2}", results.total_cost);
    println!("  Reorder point:       {:.2} units", results.reorder_point);
    println!("  Orders per year:     {:.2}", results.orders_per_year);
    println!("  Days between orders: {:.2}", results.days_between_orders);

    if let Some(inflation) = &results.inflation_results {
        println!(
            "  Next month EOQ:      {:.2} units ({})",
            inflation.next_month.eoq,
            if inflation.eoq_changed { "changed" } else { "unchanged" }
        );
        println!(
            "  Next month cost:     ${:.2} (+{:.2}%)",
            inflation.next_month.total_cost, inflation.cost_increase_percent
        );
    }
}

/// Runs every catalog example and writes a combined summary.
fn run_catalog(output: &Path) -> anyhow::Result<()> {
    let examples = catalog::examples();
    info!(count = examples.len(), "running catalog examples");

    let runs: Vec<_> = examples
        .iter()
        .map(|example| (example, compute_results(&example.parameters)))
        .collect();

    for (example, results) in &runs {
        print_results(&example.name, results);
    }

    let rows: Vec<_> = runs
        .iter()
        .map(|(example, results)| SummaryRow::new(&example.name, &example.parameters, results))
        .collect();
    reporting::write_records(output, &rows)
        .with_context(|| format!("writing summary to {}", output.display()))?;
    println!("\nSummary written to {}", output.display());
    Ok(())
}

/// Validates and runs one scenario file, then writes its reports.
fn run_scenario(path: &Path, report_dir: &Path) -> anyhow::Result<()> {
    let scenario = load_valid_scenario(path)
        .with_context(|| format!("loading scenario {}", path.display()))?;

    let results = compute_results(&scenario.parameters);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("scenario");
    print_results(stem, &results);

    let report = AnalysisReport::build(&scenario.parameters, &results, &scenario.analysis);
    println!(
        "  Inventory turnover:  {:.2} per year",
        report.indicators.inventory_turnover
    );
    println!(
        "  Saves ${:.2}/year vs small orders, ${:.2}/year vs large orders",
        report.indicators.savings_vs_small_orders, report.indicators.savings_vs_large_orders
    );

    let written =
        reporting::write_run_reports(report_dir, stem, &scenario.parameters, &results, &report)
            .with_context(|| format!("writing reports to {}", report_dir.display()))?;
    println!("\n{} report files written to {}", written.len(), report_dir.display());
    Ok(())
}

fn main() {
    logging::init();
    println!("=== Inventory Optimization Calculator ===");

    // Usage:
    //   inventory-optimizer                          run the built-in examples
    //   inventory-optimizer <scenario.json> [dir]    run one scenario
    let args: Vec<String> = env::args().skip(1).collect();

    let outcome = match args.as_slice() {
        [] => run_catalog(Path::new("catalog_summary.csv")),
        [scenario] => run_scenario(Path::new(scenario), Path::new("reports")),
        [scenario, dir, ..] => run_scenario(Path::new(scenario), &PathBuf::from(dir)),
    };

    if let Err(e) = outcome {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
