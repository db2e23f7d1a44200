//! Trial driver: repeat sampling + refinement and average the refined D values.
//!
//! Each trial builds a fresh observation table from the shared generator, seeds the
//! search with the mean of its per-size D estimates and refines it with
//! [`minimize_d`]. The final estimate is the mean over [`TRIALS`] trials.

use rand::Rng;

use crate::domain::{EstimateParams, SEGMENTS_PER_SIZE, TRIALS, TrialResult, VocdEstimate};
use crate::error::EstimateError;
use crate::fit::minimizer::minimize_d;
use crate::fit::observations::{build_observations, seed_stats};

/// Run all trials and return the averaged estimate with per-trial detail.
pub fn estimate<S, R>(
    tokens: &[S],
    params: &EstimateParams,
    rng: &mut R,
) -> Result<VocdEstimate, EstimateError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    params.range.validate()?;
    if params.no_samples != SEGMENTS_PER_SIZE {
        tracing::warn!(
            requested = params.no_samples,
            used = SEGMENTS_PER_SIZE,
            "Segment count per size is fixed; the requested value is ignored."
        );
    }

    let mut trials = Vec::with_capacity(TRIALS);
    for index in 1..=TRIALS {
        let trial = run_trial(index, tokens, params, rng)?;
        tracing::debug!(
            trial = index,
            d_av = trial.seed.d_av,
            d_std = trial.seed.d_std,
            discarded = trial.seed.discarded,
            d_min = trial.d_min,
            "Trial finished"
        );
        trials.push(trial);
    }

    let d = trials.iter().map(|t| t.d_min).sum::<f64>() / trials.len() as f64;
    Ok(VocdEstimate { d, trials })
}

/// Single-value entry point.
///
/// `token_count` must equal `tokens.len()`. `no_samples` is accepted for
/// compatibility and does not change the number of segments drawn.
pub fn estimate_vocd<S, R>(
    tokens: &[S],
    token_count: usize,
    from: usize,
    to: usize,
    step: usize,
    no_samples: usize,
    rng: &mut R,
) -> Result<f64, EstimateError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if token_count != tokens.len() {
        return Err(EstimateError::TokenCountMismatch {
            declared: token_count,
            actual: tokens.len(),
        });
    }

    let params = EstimateParams {
        range: crate::domain::SampleRange::new(from, to, step),
        no_samples,
    };
    estimate(tokens, &params, rng).map(|e| e.d)
}

fn run_trial<S, R>(
    index: usize,
    tokens: &[S],
    params: &EstimateParams,
    rng: &mut R,
) -> Result<TrialResult, EstimateError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let observations = build_observations(tokens, &params.range, rng)?;
    let seed = seed_stats(&observations)?;
    let min = minimize_d(seed.d_av, &observations)?;

    Ok(TrialResult {
        index,
        observations,
        seed,
        d_min: min.d,
        min_residual: min.residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SampleRange;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn patterned_text() -> Vec<String> {
        // 120 types with Zipf-like repetition: type i appears roughly 1 + 12 / (i + 1) times.
        let mut out = Vec::new();
        for round in 0..12 {
            for i in 0..120 {
                if round == 0 || round * (i + 1) < 12 {
                    out.push(format!("w{i}"));
                }
            }
        }
        out
    }

    #[test]
    fn runs_three_trials_and_averages() {
        let tokens = patterned_text();
        let mut rng = StdRng::seed_from_u64(42);
        let est = estimate(&tokens, &EstimateParams::default(), &mut rng).unwrap();

        assert_eq!(est.trials.len(), TRIALS);
        let mean = est.trials.iter().map(|t| t.d_min).sum::<f64>() / 3.0;
        assert_eq!(est.d, mean);
        assert!(est.d.is_finite() && est.d > 0.0);

        for (i, t) in est.trials.iter().enumerate() {
            assert_eq!(t.index, i + 1);
            assert_eq!(t.observations.len(), 16);
            assert!(t.min_residual >= 0.0);
            assert!(t.d_min > 0.0 && t.d_min < 2.0 * t.seed.d_av);
        }
    }

    #[test]
    fn trials_draw_fresh_samples() {
        let tokens = patterned_text();
        let mut rng = StdRng::seed_from_u64(42);
        let est = estimate(&tokens, &EstimateParams::default(), &mut rng).unwrap();
        assert_ne!(est.trials[0].observations, est.trials[1].observations);
    }

    #[test]
    fn entry_point_checks_token_count() {
        let tokens = patterned_text();
        let mut rng = StdRng::seed_from_u64(1);
        let err = estimate_vocd(&tokens, tokens.len() + 1, 35, 50, 1, 100, &mut rng).unwrap_err();
        assert_eq!(
            err,
            EstimateError::TokenCountMismatch {
                declared: tokens.len() + 1,
                actual: tokens.len()
            }
        );
    }

    #[test]
    fn ignored_sample_count_does_not_change_result() {
        let tokens = patterned_text();
        let a = estimate_vocd(&tokens, tokens.len(), 35, 50, 1, 100, &mut StdRng::seed_from_u64(8)).unwrap();
        let b = estimate_vocd(&tokens, tokens.len(), 35, 50, 1, 7, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn too_short_text_is_insufficient() {
        let tokens: Vec<String> = (0..20).map(|i| format!("w{}", i % 5)).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let err = estimate_vocd(&tokens, 20, 35, 50, 1, 100, &mut rng).unwrap_err();
        assert!(matches!(err, EstimateError::InsufficientTokens { segment_size: 35, available: 20 }));
    }

    #[test]
    fn single_size_range_cannot_seed() {
        let tokens = patterned_text();
        let params = EstimateParams {
            range: SampleRange::new(40, 40, 1),
            ..EstimateParams::default()
        };
        let err = estimate(&tokens, &params, &mut StdRng::seed_from_u64(2)).unwrap_err();
        assert_eq!(err, EstimateError::NotEnoughObservations { total: 1, discarded: 0 });
    }
}
