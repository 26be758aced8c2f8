pub mod kalman;

use self::kalman::TrendKalman;
use thiserror::Error;

/// Errors surfaced by filter construction and updates.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FilterError {
    #[error("invalid filter parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("non-finite observation: {0}")]
    NonFiniteObservation(f64),
}

/// Run one filter over a whole observation sequence.
///
/// The filter is seeded with the first sample and stepped once per sample,
/// so the returned estimates match the input in length and order. An empty
/// input yields an empty output.
pub fn filter_series(q: f64, r: f64, observations: &[f64]) -> Result<Vec<f64>, FilterError> {
    let first = match observations.first() {
        Some(&z) if z.is_finite() => z,
        Some(&z) => return Err(FilterError::NonFiniteObservation(z)),
        None => return Ok(Vec::new()),
    };
    let mut kf = TrendKalman::init(q, r, first)?;
    let mut estimates = Vec::with_capacity(observations.len());
    for &z in observations {
        estimates.push(kf.step(z)?);
    }
    Ok(estimates)
}
