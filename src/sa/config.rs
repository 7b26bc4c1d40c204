//! Annealing schedule.

/// Controls the temperature decay of an annealing run.
///
/// Temperatures are given as multiples of the initial state's energy.
/// At iteration `i` the temperature is
///
/// ```text
/// T(i) = E0 * initial_temperature_ratio * exp(-i / k)
/// k    = iterations / ln(initial_temperature_ratio / final_temperature_ratio)
/// ```
///
/// so `k` is the number of iterations for the temperature to drop by a
/// factor of `e`, and `T(iterations)` equals `E0 * final_temperature_ratio`.
///
/// # Examples
///
/// ```
/// use anneal::Schedule;
///
/// let schedule = Schedule::default()
///     .with_iterations(10_000)
///     .with_initial_temperature_ratio(2.0)
///     .with_final_temperature_ratio(1e-4);
/// assert_eq!(schedule.iterations, 10_000);
/// assert!(schedule.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    /// Total number of iterations. The run never stops early.
    pub iterations: usize,

    /// Temperature at iteration 0, as a multiple of the initial energy.
    pub initial_temperature_ratio: f64,

    /// Nominal temperature at the last iteration, same units.
    pub final_temperature_ratio: f64,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            initial_temperature_ratio: 1.0,
            final_temperature_ratio: 1e-5,
        }
    }
}

impl Schedule {
    /// Creates a schedule from explicit values.
    pub fn new(
        iterations: usize,
        initial_temperature_ratio: f64,
        final_temperature_ratio: f64,
    ) -> Self {
        Self {
            iterations,
            initial_temperature_ratio,
            final_temperature_ratio,
        }
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature_ratio(mut self, ratio: f64) -> Self {
        self.initial_temperature_ratio = ratio;
        self
    }

    pub fn with_final_temperature_ratio(mut self, ratio: f64) -> Self {
        self.final_temperature_ratio = ratio;
        self
    }

    /// Number of iterations for the temperature to fall by a factor of `e`.
    ///
    /// Non-positive or non-finite when the ratios are degenerate.
    pub fn decay_constant(&self) -> f64 {
        self.iterations as f64 / (self.initial_temperature_ratio / self.final_temperature_ratio).ln()
    }

    /// Absolute temperature at iteration `i` for a run starting at `initial_energy`.
    pub fn temperature(&self, initial_energy: f64, i: usize) -> f64 {
        let t0 = initial_energy * self.initial_temperature_ratio;
        decayed_temperature(t0, self.decay_constant(), i)
    }

    /// Validates the schedule.
    ///
    /// The annealer does not call this; a degenerate schedule is run as-is.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("iterations must be positive".into());
        }
        let (ti, tf) = (self.initial_temperature_ratio, self.final_temperature_ratio);
        if !ti.is_finite() || !tf.is_finite() {
            return Err(format!("temperature ratios must be finite, got {ti} and {tf}"));
        }
        if tf <= 0.0 {
            return Err(format!("final_temperature_ratio must be positive, got {tf}"));
        }
        if ti <= tf {
            return Err(format!(
                "initial_temperature_ratio ({ti}) must exceed final_temperature_ratio ({tf})"
            ));
        }
        Ok(())
    }
}

/// `t0 * exp(-i / k)`, shared by [`Schedule::temperature`] and the annealing loop.
pub(crate) fn decayed_temperature(t0: f64, k: f64, i: usize) -> f64 {
    t0 * (-(i as f64) / k).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let schedule = Schedule::default();
        assert_eq!(schedule.iterations, 1_000_000);
        assert!((schedule.initial_temperature_ratio - 1.0).abs() < 1e-12);
        assert!((schedule.final_temperature_ratio - 1e-5).abs() < 1e-15);
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn test_new_matches_builder() {
        let built = Schedule::default()
            .with_iterations(500)
            .with_initial_temperature_ratio(3.0)
            .with_final_temperature_ratio(0.1);
        assert_eq!(Schedule::new(500, 3.0, 0.1), built);
    }

    #[test]
    fn test_decay_constant() {
        // ln(1 / 1e-5) = 5 ln 10
        let schedule = Schedule::new(1000, 1.0, 1e-5);
        let expected = 1000.0 / (5.0 * 10f64.ln());
        assert!((schedule.decay_constant() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_endpoints() {
        let schedule = Schedule::new(1000, 2.0, 0.01);
        assert!((schedule.temperature(10.0, 0) - 20.0).abs() < 1e-9);
        assert!((schedule.temperature(10.0, 1000) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_temperature_matches_decayed_formula() {
        let schedule = Schedule::new(800, 4.0, 1e-3);
        let e0 = 7.5;
        let t0 = e0 * schedule.initial_temperature_ratio;
        let k = schedule.decay_constant();
        for i in [0, 1, 123, 400, 799, 800] {
            assert_eq!(schedule.temperature(e0, i), decayed_temperature(t0, k, i));
        }
    }

    #[test]
    fn test_temperature_decreasing() {
        let schedule = Schedule::new(100, 1.0, 1e-3);
        let temps: Vec<f64> = (0..100).map(|i| schedule.temperature(5.0, i)).collect();
        for w in temps.windows(2) {
            assert!(w[1] < w[0]);
        }
    }

    #[test]
    fn test_equal_ratios_degenerate() {
        let schedule = Schedule::new(100, 1.0, 1.0);
        assert!(schedule.decay_constant().is_infinite());
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_inverted_ratios_degenerate() {
        let schedule = Schedule::new(100, 1e-5, 1.0);
        assert!(schedule.decay_constant() < 0.0);
        assert!(schedule.validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(Schedule::default().with_iterations(0).validate().is_err());
    }

    #[test]
    fn test_validate_non_positive_final() {
        assert!(Schedule::new(10, 1.0, 0.0).validate().is_err());
        assert!(Schedule::new(10, 1.0, -1.0).validate().is_err());
    }

    #[test]
    fn test_validate_non_finite() {
        assert!(Schedule::new(10, f64::INFINITY, 1.0).validate().is_err());
        assert!(Schedule::new(10, 1.0, f64::NAN).validate().is_err());
    }
}
