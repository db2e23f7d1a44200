//! Theoretical type-token ratio curve and its closed-form inverse.
//!
//! The curve relating TTR to sample size `N` through the diversity parameter `D` is:
//!
//! ```text
//! TTR(N) = (D / N) * (sqrt(1 + 2N / D) - 1)
//! ```
//!
//! which inverts exactly to the per-size estimator:
//!
//! ```text
//! D = 0.5 * N * TTR^2 / (1 - TTR)
//! ```
//!
//! Neither function validates its inputs; callers guarantee `D > 0` and `N > 0`.

/// Predicted TTR for diversity `d` at sample size `n`.
pub fn predicted_ttr(d: f64, n: f64) -> f64 {
    let x = (1.0 + (2.0 * n) / d).sqrt() - 1.0;
    (d / n) * x
}

/// Closed-form D estimate from an observed TTR at sample size `n`.
///
/// Returns `None` when `ttr == 1`: every token in the sample was distinct and the
/// inverse is singular.
pub fn estimate_d(n: f64, ttr: f64) -> Option<f64> {
    let denom = 1.0 - ttr;
    if denom == 0.0 {
        return None;
    }
    Some(0.5 * (n * ttr * ttr) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DS: [f64; 6] = [0.5, 5.0, 20.0, 60.0, 150.0, 1000.0];
    const NS: [f64; 6] = [1.0, 10.0, 35.0, 42.0, 50.0, 400.0];

    #[test]
    fn predicted_ttr_in_unit_interval() {
        for &d in &DS {
            for &n in &NS {
                let t = predicted_ttr(d, n);
                assert!(t > 0.0 && t <= 1.0, "TTR({d}, {n}) = {t}");
            }
        }
    }

    #[test]
    fn predicted_ttr_decreases_with_sample_size() {
        for &d in &DS {
            let mut prev = predicted_ttr(d, 1.0);
            for n in 2..=200 {
                let t = predicted_ttr(d, n as f64);
                assert!(t < prev, "D={d}: TTR({n})={t} not below {prev}");
                prev = t;
            }
        }
    }

    #[test]
    fn predicted_ttr_increases_with_diversity() {
        for &n in &NS {
            let mut prev = predicted_ttr(0.1, n);
            for i in 1..=200 {
                let d = 0.1 + i as f64 * 2.5;
                let t = predicted_ttr(d, n);
                assert!(t > prev, "N={n}: TTR at D={d} = {t} not above {prev}");
                prev = t;
            }
        }
    }

    #[test]
    fn estimate_d_recovers_true_value() {
        for &d in &DS {
            for &n in &NS {
                let t = predicted_ttr(d, n);
                let back = estimate_d(n, t).unwrap();
                let rel = ((back - d) / d).abs();
                assert!(rel < 1e-9, "D={d} N={n}: got {back}");
            }
        }
    }

    #[test]
    fn estimate_d_is_undefined_at_unit_ttr() {
        assert_eq!(estimate_d(40.0, 1.0), None);
        assert_eq!(estimate_d(40.0, 0.0), Some(0.0));
    }
}
