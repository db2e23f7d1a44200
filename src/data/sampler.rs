//! Segment sampler: mean TTR over random segments of a fixed size.
//!
//! Each segment is drawn without replacement from the whole token sequence, so the
//! tokens of a segment are not contiguous in the text. The generator is supplied by
//! the caller; with a seeded `StdRng` the draws are fully reproducible.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{SEGMENTS_PER_SIZE, TtrSample};
use crate::error::EstimateError;

/// Draw [`SEGMENTS_PER_SIZE`] random segments of `segment_size` tokens and return the
/// mean and population standard deviation of their TTRs.
pub fn sample_ttr<S, R>(
    tokens: &[S],
    segment_size: usize,
    rng: &mut R,
) -> Result<TtrSample, EstimateError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if segment_size == 0 {
        return Err(EstimateError::InvalidRange {
            from: segment_size,
            to: segment_size,
            step: 1,
        });
    }
    if segment_size > tokens.len() {
        return Err(EstimateError::InsufficientTokens {
            segment_size,
            available: tokens.len(),
        });
    }

    let mut ttrs = Vec::with_capacity(SEGMENTS_PER_SIZE);
    let mut types: HashSet<&str> = HashSet::with_capacity(segment_size);
    for _ in 0..SEGMENTS_PER_SIZE {
        types.clear();
        types.extend(tokens.choose_multiple(rng, segment_size).map(|t| t.as_ref()));
        ttrs.push(types.len() as f64 / segment_size as f64);
    }

    let n = ttrs.len() as f64;
    let mean = ttrs.iter().sum::<f64>() / n;
    let var = ttrs.iter().map(|t| (t - mean).powi(2)).sum::<f64>() / n;

    Ok(TtrSample {
        mean,
        sd: var.sqrt(),
    })
}
