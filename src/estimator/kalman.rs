use super::FilterError;

/// Scalar Kalman filter for a random-walk trend observed in additive noise.
///
/// State equation:       x_t = x_{t-1} + eta_t,     eta_t ~ N(0, Q)
/// Observation equation: z_t = x_t + epsilon_t,     epsilon_t ~ N(0, R)
///
/// Both the state and the observation are one-dimensional, so every quantity
/// in the recursion is a plain f64.
#[derive(Debug, Clone)]
pub struct TrendKalman {
    // Process noise variance
    Q: f64,
    // Observation noise variance
    R: f64,
    // State estimate
    x: f64,
    // Estimate error variance
    P: f64,
}

impl TrendKalman {
    /// Error variance assigned to the initial state.
    pub const INITIAL_VARIANCE: f64 = 1.0;

    /// Create a filter with the given noise variances, seeded at
    /// `initial_state`.
    ///
    /// `q` and `r` must be finite and non-negative and `initial_state` must
    /// be finite; anything else is rejected up front so that NaNs cannot
    /// enter the recursion.
    pub fn init(q: f64, r: f64, initial_state: f64) -> Result<Self, FilterError> {
        if !q.is_finite() || q < 0.0 {
            return Err(FilterError::InvalidParameter { name: "q", value: q });
        }
        if !r.is_finite() || r < 0.0 {
            return Err(FilterError::InvalidParameter { name: "r", value: r });
        }
        if !initial_state.is_finite() {
            return Err(FilterError::InvalidParameter {
                name: "initial_state",
                value: initial_state,
            });
        }
        Ok(TrendKalman {
            Q: q,
            R: r,
            x: initial_state,
            P: Self::INITIAL_VARIANCE,
        })
    }

    /// Time update. The random-walk transition leaves the estimate alone
    /// and grows its uncertainty: P <- P + Q.
    pub fn predict(&mut self) {
        self.P += self.Q;
    }

    /// Measurement update with gain k = P / (P + R).
    ///
    /// When P + R = 0 the gain is taken as 1: zero prior uncertainty
    /// combined with a noise-free observation means the observation is
    /// exact. A non-finite observation is rejected before any state is
    /// touched, so the filter can keep running on the next sample.
    pub fn update(&mut self, z: f64) -> Result<(), FilterError> {
        if !z.is_finite() {
            return Err(FilterError::NonFiniteObservation(z));
        }
        let S = self.P + self.R;
        let k = if S == 0.0 { 1.0 } else { self.P / S };
        self.x += k * (z - self.x);
        self.P *= 1.0 - k;
        Ok(())
    }

    /// Predict followed by update, yielding the new estimate. A rejected
    /// observation leaves both the estimate and the variance unchanged.
    pub fn step(&mut self, z: f64) -> Result<f64, FilterError> {
        if !z.is_finite() {
            return Err(FilterError::NonFiniteObservation(z));
        }
        self.predict();
        self.update(z)?;
        Ok(self.x)
    }

    /// Current estimate of the latent trend.
    pub fn estimate(&self) -> f64 {
        self.x
    }

    /// Current estimate error variance. Lower means more confident.
    pub fn variance(&self) -> f64 {
        self.P
    }
}
