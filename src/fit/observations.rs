//! Observation tables and the seed statistics derived from them.
//!
//! For every sample size `N` in the configured range we:
//! - sample the mean/SD of TTR over random segments of `N` tokens
//! - invert the TTR curve in closed form to get a per-size D
//!
//! The per-size D values are then averaged into the seed for the minimizer.

use rand::Rng;

use crate::data::sample_ttr;
use crate::domain::{Observation, SampleRange, SeedStats};
use crate::error::EstimateError;
use crate::models::estimate_d;

/// Build one trial's observation table, one row per sample size in `range`.
pub fn build_observations<S, R>(
    tokens: &[S],
    range: &SampleRange,
    rng: &mut R,
) -> Result<Vec<Observation>, EstimateError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    range.validate()?;

    let mut table = Vec::with_capacity(range.len());
    for n in range.sizes() {
        let sample = sample_ttr(tokens, n, rng)?;
        table.push(Observation {
            n,
            ttr: sample.mean,
            sd: sample.sd,
            d: estimate_d(n as f64, sample.mean),
        });
    }
    Ok(table)
}

/// Seed statistics over a table.
///
/// `d_av` averages only defined D values. `d_std` sums squared deviations over every
/// row, counting degenerate rows as `D = 0`, and divides by `total - discarded - 1`.
/// A non-positive divisor means fewer than two usable rows and is an error.
pub fn seed_stats(table: &[Observation]) -> Result<SeedStats, EstimateError> {
    let total = table.len();
    let discarded = table.iter().filter(|o| o.is_degenerate()).count();

    let usable = total - discarded;
    if usable < 2 {
        return Err(EstimateError::NotEnoughObservations { total, discarded });
    }

    let d_av = table.iter().filter_map(|o| o.d).sum::<f64>() / usable as f64;
    let ss: f64 = table
        .iter()
        .map(|o| (o.d.unwrap_or(0.0) - d_av).powi(2))
        .sum();
    let d_std = (ss / (usable - 1) as f64).sqrt();

    Ok(SeedStats {
        total,
        discarded,
        d_av,
        d_std,
    })
}
