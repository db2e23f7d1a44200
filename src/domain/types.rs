//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during estimation
//! - exported to JSON/CSV
//! - printed by the report layer without reaching back into the fitter

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::EstimateError;

/// Number of trials averaged into the final estimate.
pub const TRIALS: usize = 3;

/// Number of random segments drawn per sample size.
pub const SEGMENTS_PER_SIZE: usize = 100;

/// Inclusive range of sample sizes `from..=to` walked in increments of `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleRange {
    pub from: usize,
    pub to: usize,
    pub step: usize,
}

impl SampleRange {
    /// The conventional vocd window of 35..=50 tokens.
    pub const DEFAULT: SampleRange = SampleRange {
        from: 35,
        to: 50,
        step: 1,
    };

    pub fn new(from: usize, to: usize, step: usize) -> Self {
        Self { from, to, step }
    }

    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.from == 0 || self.step == 0 || self.to < self.from {
            return Err(EstimateError::InvalidRange {
                from: self.from,
                to: self.to,
                step: self.step,
            });
        }
        Ok(())
    }

    /// Sample sizes in increasing order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + use<> {
        (self.from..=self.to).step_by(self.step.max(1))
    }

    pub fn len(&self) -> usize {
        self.sizes().count()
    }

    /// Same walk as [`SampleRange::len`], so the two always agree.
    pub fn is_empty(&self) -> bool {
        self.sizes().next().is_none()
    }
}

impl Default for SampleRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Caller-facing estimation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateParams {
    pub range: SampleRange,
    /// Requested segments per sample size.
    ///
    /// Accepted for compatibility only: the sampler always draws
    /// [`SEGMENTS_PER_SIZE`] segments so results stay comparable with
    /// historical vocd values.
    pub no_samples: usize,
}

impl Default for EstimateParams {
    fn default() -> Self {
        Self {
            range: SampleRange::DEFAULT,
            no_samples: SEGMENTS_PER_SIZE,
        }
    }
}

/// Mean and population standard deviation of TTR over the random segments of one size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TtrSample {
    pub mean: f64,
    pub sd: f64,
}

/// One `(N, TTR, SD, D)` row of an observation table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub n: usize,
    pub ttr: f64,
    pub sd: f64,
    /// Closed-form D at this size; `None` when every sampled segment was all-distinct.
    pub d: Option<f64>,
}

impl Observation {
    pub fn is_degenerate(&self) -> bool {
        self.d.is_none()
    }
}

/// Statistics of the per-size D estimates used to seed the search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeedStats {
    pub total: usize,
    pub discarded: usize,
    /// Mean D over non-degenerate observations.
    pub d_av: f64,
    /// Spread of D over all observations, divisor `total - discarded - 1`.
    pub d_std: f64,
}

/// Local minimum found by the bounded D search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minimum {
    pub d: f64,
    pub residual: f64,
}

/// Output of a single trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// 1-based trial number.
    pub index: usize,
    pub observations: Vec<Observation>,
    pub seed: SeedStats,
    pub d_min: f64,
    /// Least-squares residual at `d_min`.
    pub min_residual: f64,
}

/// Final vocd-D estimate: the mean of the per-trial minima.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocdEstimate {
    pub d: f64,
    pub trials: Vec<TrialResult>,
}

/// Where a text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// A UTF-8 text file.
    File(PathBuf),
    /// Standard input.
    Stdin,
    /// The bundled demo passage.
    Demo,
}

impl TextSource {
    pub fn label(&self) -> String {
        match self {
            TextSource::File(path) => path.display().to_string(),
            TextSource::Stdin => "<stdin>".to_string(),
            TextSource::Demo => "<demo>".to_string(),
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus `.env`/environment defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sources: Vec<TextSource>,
    pub params: EstimateParams,
    /// Base seed; each text derives its own generator from it.
    pub seed: u64,
    /// Print each trial's observation table.
    pub show_observations: bool,

    pub export_json: Option<PathBuf>,
    pub export_csv: Option<PathBuf>,
}
