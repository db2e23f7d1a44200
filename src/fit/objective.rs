//! Least-squares objective for the D search.

use crate::domain::Observation;
use crate::models::predicted_ttr;

/// Sum of squared differences between observed TTR and the curve at `d`.
///
/// Degenerate observations stay in the sum; only the seed average skips them.
pub fn residual_sum(d: f64, table: &[Observation]) -> f64 {
    table
        .iter()
        .map(|obs| {
            let r = obs.ttr - predicted_ttr(d, obs.n as f64);
            r * r
        })
        .sum()
}
