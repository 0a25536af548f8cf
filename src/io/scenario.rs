// src/io/scenario.rs

use crate::error::CalcResult;
use crate::model::parameters::ParameterConfig;
use crate::model::validation::validate;
use crate::simulation::config::AnalysisConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// A scenario document: the parameters plus optional analysis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFile {
    pub parameters: ParameterConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Parses a scenario from JSON. Accepts either a `{"parameters": ..., "analysis": ...}`
/// document or a bare parameter object, which may carry its own `analysis` key.
pub fn parse_scenario(json: &str) -> CalcResult<ScenarioFile> {
    let mut doc: Value = serde_json::from_str(json)?;
    if doc.get("parameters").is_some() {
        return Ok(serde_json::from_value(doc)?);
    }

    let analysis = match doc.as_object_mut().and_then(|fields| fields.remove("analysis")) {
        Some(section) => serde_json::from_value(section)?,
        None => AnalysisConfig::default(),
    };
    let parameters = serde_json::from_value(doc)?;
    Ok(ScenarioFile {
        parameters,
        analysis,
    })
}

/// Reads and parses a scenario file. Parameters are not validated here.
pub fn load_scenario(path: &Path) -> CalcResult<ScenarioFile> {
    let text = fs::read_to_string(path)?;
    let scenario = parse_scenario(&text)?;
    info!(path = %path.display(), model = ?scenario.parameters.model, "loaded scenario");
    Ok(scenario)
}

/// Reads a scenario file and rejects it unless the parameters are complete.
pub fn load_valid_scenario(path: &Path) -> CalcResult<ScenarioFile> {
    let scenario = load_scenario(path)?;
    validate(&scenario.parameters)?;
    Ok(scenario)
}
