use itertools::izip;

/// Root-mean-square error between two equal-length series.
///
/// Returns NaN for empty input, which keeps it total without inventing a
/// score where there is nothing to score.
pub fn rmse(estimates: &[f64], truth: &[f64]) -> f64 {
    debug_assert_eq!(estimates.len(), truth.len());
    let n = estimates.len().min(truth.len());
    if n == 0 {
        return f64::NAN;
    }
    let sse: f64 = izip!(estimates, truth).map(|(a, b)| (a - b).powi(2)).sum();
    (sse / n as f64).sqrt()
}
