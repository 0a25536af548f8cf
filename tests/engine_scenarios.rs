use inventory_optimizer::analysis::AnalysisReport;
use inventory_optimizer::io::catalog::{self, Category};
use inventory_optimizer::io::reporting;
use inventory_optimizer::io::scenario::{load_scenario, ScenarioFile};
use inventory_optimizer::{
    compute_results, logging, validate, AnalysisConfig, ModelType, SimulationResults,
};

fn close(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

#[test]
fn every_catalog_example_produces_finite_results() {
    logging::init_test();
    for example in catalog::examples() {
        let results = compute_results(&example.parameters);
        assert!(results.is_finite(), "{} gave {:?}", example.name, results);
        assert_eq!(
            results.inflation_results.is_some(),
            example.parameters.model == ModelType::Inflation,
            "{}",
            example.name
        );
    }
}

#[test]
fn smartphone_discount_takes_the_deepest_tier() {
    let example = catalog::find_example("Smartphones").unwrap();
    let results = compute_results(&example.parameters);
    // EOQ = sqrt(2 * 2000 * 500 / 100) ~ 141.42, below every tier minimum
    // except the first. At 1000 units: 2000*520 + 2*500 + 500*100 = 1_091_000.
    assert_eq!(results.optimal_quantity, 1000.0);
    assert!(close(results.total_cost, 1_091_000.0, 1e-6));
}

#[test]
fn t_shirt_production_run_uses_epq() {
    let example = catalog::find_example("T-Shirts").unwrap();
    let results = compute_results(&example.parameters);
    // sqrt(2 * 10000 * 200 / (5 * 0.6)) = sqrt(1_333_333.3)
    assert!(close(results.optimal_quantity, 1154.700538, 1e-6));
    assert!(close(results.reorder_point, 10000.0 / 365.0 * 5.0, 1e-9));
}

#[test]
fn devaluation_problem_matches_hand_calculation() {
    let example = catalog::find_example("Problem 2: Devaluation Plus Inflation").unwrap();
    let results = compute_results(&example.parameters);
    let inflation = results.inflation_results.unwrap();

    let m = 16.5 / 6.96;
    assert!(close(results.optimal_quantity, 1000f64.sqrt(), 1e-9));
    let expected_now = 50.0 * m * 600.0 / 1000f64.sqrt()
        + 50.0 * m * 600.0
        + 60.0 * m * 1000f64.sqrt() / 2.0;
    assert!(close(results.total_cost, expected_now, 1e-6));
    assert!(!inflation.eoq_changed);
    assert!(close(inflation.cost_increase_percent, 3.65, 1e-9));
}

#[test]
fn inflation_examples_are_grouped_together() {
    let names: Vec<_> = catalog::examples_in(Category::Inflation)
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().all(|n| n.starts_with("Problem")));
}

#[test]
fn results_round_trip_through_json() {
    let example = catalog::find_example("Problem 1: Sacks Under Inflation").unwrap();
    let results = compute_results(&example.parameters);

    let json = serde_json::to_value(&results).unwrap();
    assert!(json["inflationResults"]["currentMonth"]["eoq"].is_number());
    assert!(json["inflationResults"]["eoqChanged"].is_boolean());

    let back: SimulationResults = serde_json::from_value(json).unwrap();
    assert!(close(back.optimal_quantity, results.optimal_quantity, 1e-9));
    assert!(close(back.total_cost, results.total_cost, 1e-6));
    let (now, then) = (results.inflation_results.unwrap(), back.inflation_results.unwrap());
    assert_eq!(now.eoq_changed, then.eoq_changed);
    assert!(close(now.next_month.total_cost, then.next_month.total_cost, 1e-6));
}

#[test]
fn scenario_file_runs_end_to_end() {
    logging::init_test();
    let dir = tempfile::tempdir().unwrap();

    let scenario = ScenarioFile {
        parameters: catalog::find_example("Pizza Ingredients").unwrap().parameters,
        analysis: AnalysisConfig {
            projection_months: 6,
            ..AnalysisConfig::default()
        },
    };
    let path = dir.path().join("pizza.json");
    std::fs::write(&path, serde_json::to_string_pretty(&scenario).unwrap()).unwrap();

    let loaded = load_scenario(&path).unwrap();
    assert_eq!(loaded, scenario);
    validate(&loaded.parameters).unwrap();

    let results = compute_results(&loaded.parameters);
    let report = AnalysisReport::build(&loaded.parameters, &results, &loaded.analysis);
    let out = dir.path().join("reports");
    let written =
        reporting::write_run_reports(&out, "pizza", &loaded.parameters, &results, &report).unwrap();

    // summary, json, quantities, decisions, cycle, lead times, cost shares,
    // indicators, tiers
    assert_eq!(written.len(), 9);
    assert!(written.iter().all(|p| p.exists()));

    let tiers = std::fs::read_to_string(out.join("pizza_tiers.csv")).unwrap();
    let mut lines = tiers.lines();
    assert_eq!(
        lines.next().unwrap(),
        "tier,min_quantity,price,adjusted_quantity,total_cost,selected"
    );
    assert_eq!(lines.count(), 3);
}

#[test]
fn inflation_run_writes_projection() {
    let dir = tempfile::tempdir().unwrap();
    let params = catalog::find_example("Problem 1: Sacks Under Inflation")
        .unwrap()
        .parameters;
    let results = compute_results(&params);
    let report = AnalysisReport::build(&params, &results, &AnalysisConfig::default());

    let written =
        reporting::write_run_reports(dir.path(), "sacks", &params, &results, &report).unwrap();
    let projection = written
        .iter()
        .find(|p| p.ends_with("sacks_projection.csv"))
        .expect("projection report");
    let text = std::fs::read_to_string(projection).unwrap();
    // header + months 0..=12
    assert_eq!(text.lines().count(), 14);
}
