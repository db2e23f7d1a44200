//! Shared estimation pipeline used by the `estimate` and `observe` commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! load texts -> derive per-text generators -> estimate -> collect outputs
//!
//! The commands can then focus on presentation (printing vs exporting).

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{Observation, RunConfig, SeedStats, VocdEstimate};
use crate::error::{AppError, EstimateError};
use crate::fit::{build_observations, estimate, seed_stats};
use crate::io::ingest::{LoadedText, TextStats, load_text};

/// Estimate for one input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEstimate {
    pub source: String,
    pub stats: TextStats,
    /// Seed of the generator used for this text.
    pub seed: u64,
    pub estimate: VocdEstimate,
}

/// All computed outputs of a single `vocd estimate` run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub texts: Vec<TextEstimate>,
}

/// One observation table for one text (the `observe` command).
#[derive(Debug, Clone)]
pub struct TextObservations {
    pub source: String,
    pub stats: TextStats,
    pub seed: u64,
    pub observations: Vec<Observation>,
    /// Fails when the table has fewer than two usable rows.
    pub seed_stats: Result<SeedStats, EstimateError>,
}

/// Load every configured source and estimate D for each.
pub fn run_estimate(config: &RunConfig) -> Result<RunOutput, AppError> {
    let texts = load_all(config)?;
    estimate_texts(&texts, config)
}

/// Estimate D for already loaded texts, in parallel.
///
/// Each text gets its own generator derived from the base seed and its label, so the
/// result for a text does not depend on which other texts are in the run or on
/// thread scheduling.
pub fn estimate_texts(texts: &[LoadedText], config: &RunConfig) -> Result<RunOutput, AppError> {
    let texts = texts
        .par_iter()
        .map(|text| -> Result<TextEstimate, AppError> {
            let label = text.source.label();
            let seed = text_seed(config.seed, &label);
            let mut rng = StdRng::seed_from_u64(seed);

            let estimate = estimate(&text.tokens, &config.params, &mut rng)
                .map_err(|e| AppError::new(e.exit_code(), format!("{label}: {e}")))?;
            tracing::info!(source = %label, d = estimate.d, "Estimated vocd-D");

            Ok(TextEstimate {
                source: label,
                stats: text.stats,
                seed,
                estimate,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(RunOutput { texts })
}

/// Build a single observation table per source without running the D search.
pub fn run_observe(config: &RunConfig) -> Result<Vec<TextObservations>, AppError> {
    let texts = load_all(config)?;
    config.params.range.validate()?;

    texts
        .par_iter()
        .map(|text| -> Result<TextObservations, AppError> {
            let label = text.source.label();
            let seed = text_seed(config.seed, &label);
            let mut rng = StdRng::seed_from_u64(seed);

            let observations = build_observations(&text.tokens, &config.params.range, &mut rng)
                .map_err(|e| AppError::new(e.exit_code(), format!("{label}: {e}")))?;
            let seed_stats = seed_stats(&observations);

            Ok(TextObservations {
                source: label,
                stats: text.stats,
                seed,
                observations,
                seed_stats,
            })
        })
        .collect()
}

fn load_all(config: &RunConfig) -> Result<Vec<LoadedText>, AppError> {
    if config.sources.is_empty() {
        return Err(AppError::new(2, "No input texts given (pass FILE paths, '-' for stdin, or --demo)."));
    }
    config.sources.iter().map(load_text).collect()
}

/// Generator seed for one text.
pub fn text_seed(base: u64, label: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    base.hash(&mut hasher);
    label.hash(&mut hasher);
    hasher.finish()
}
