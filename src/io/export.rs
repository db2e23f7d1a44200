//! Export estimation results.
//!
//! - JSON: the full run (parameters, per-text estimates, per-trial tables)
//! - CSV: one row per observation, easy to load into a spreadsheet or plotting script

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::app::pipeline::{RunOutput, TextEstimate};
use crate::domain::{EstimateParams, RunConfig};
use crate::error::AppError;

/// JSON results file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsFile {
    pub tool: String,
    pub generated: String,
    pub seed: u64,
    pub params: EstimateParams,
    pub texts: Vec<TextEstimate>,
}

/// Write the whole run to a pretty-printed JSON file.
pub fn write_results_json(path: &Path, output: &RunOutput, config: &RunConfig) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create results JSON '{}': {e}", path.display())))?;

    let results = ResultsFile {
        tool: "vocd".to_string(),
        generated: Local::now().to_rfc3339(),
        seed: config.seed,
        params: config.params,
        texts: output.texts.clone(),
    };

    serde_json::to_writer_pretty(file, &results)
        .map_err(|e| AppError::new(2, format!("Failed to write results JSON: {e}")))?;

    Ok(())
}

/// Write every observation of every trial to a CSV file.
pub fn write_observations_csv(path: &Path, output: &RunOutput) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create observations CSV '{}': {e}", path.display())))?;

    writeln!(file, "source,trial,n,ttr,sd,d")
        .map_err(|e| AppError::new(2, format!("Failed to write observations CSV header: {e}")))?;

    for text in &output.texts {
        for trial in &text.estimate.trials {
            for obs in &trial.observations {
                writeln!(
                    file,
                    "{},{},{},{:.10},{:.10},{}",
                    csv_field(&text.source),
                    trial.index,
                    obs.n,
                    obs.ttr,
                    obs.sd,
                    obs.d.map(|d| format!("{d:.10}")).unwrap_or_default(),
                )
                .map_err(|e| AppError::new(2, format!("Failed to write observations CSV row: {e}")))?;
            }
        }
    }

    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
