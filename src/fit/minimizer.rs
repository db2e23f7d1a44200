//! Bounded fixed-step search for the D that minimizes the least-squares objective.
//!
//! Starting from the seed we probe one step below to pick a direction, then walk in
//! that direction until the objective stops decreasing. The walk is confined to the
//! open interval `(0, 2 * seed)`; leaving it is reported as non-convergence instead of
//! returning the boundary.

use crate::domain::{Minimum, Observation};
use crate::error::EstimateError;
use crate::fit::objective::residual_sum;

/// Step between successive D candidates.
pub const STEP_SIZE: f64 = 0.001;

/// Walk from `seed` to the first local minimum of [`residual_sum`].
pub fn minimize_d(seed: f64, table: &[Observation]) -> Result<Minimum, EstimateError> {
    if !(seed.is_finite() && seed > STEP_SIZE) {
        return Err(EstimateError::NonConvergence { seed, last: seed });
    }

    let at_seed = residual_sum(seed, table);
    let below = residual_sum(seed - STEP_SIZE, table);

    let k = if at_seed > below {
        -1.0
    } else if at_seed < below {
        1.0
    } else {
        return Ok(Minimum {
            d: seed,
            residual: at_seed,
        });
    };

    let upper = 2.0 * seed;
    let mut prev = Minimum {
        d: seed,
        residual: at_seed,
    };

    let mut i: u64 = 0;
    loop {
        i += 1;
        let d = seed + k * STEP_SIZE * i as f64;
        if d <= 0.0 || d >= upper {
            return Err(EstimateError::NonConvergence { seed, last: prev.d });
        }

        let residual = residual_sum(d, table);
        if residual >= prev.residual {
            tracing::trace!(seed, d = prev.d, residual = prev.residual, steps = i - 1, "D search converged");
            return Ok(prev);
        }
        prev = Minimum { d, residual };
    }
}
