//! Annealing execution loop.

use super::config::{decayed_temperature, Schedule};
use super::types::State;
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<S: Clone> {
    /// The lowest-energy state encountered.
    pub best: S,

    /// Energy of `best`.
    pub best_energy: f64,

    /// Energy of the state the run started from.
    pub initial_energy: f64,

    /// Energy of the working state when the run ended.
    pub final_energy: f64,

    /// Number of iterations executed (always `schedule.iterations`).
    pub iterations: usize,

    /// Candidates with strictly lower energy than the working state.
    pub improving_moves: usize,

    /// Candidates with equal or higher energy that passed the Metropolis test.
    pub accepted_non_improving_moves: usize,

    /// Candidates discarded by the Metropolis test.
    pub rejected_moves: usize,
}

/// Runs simulated annealing from `initial` and returns the best state seen.
///
/// Each iteration calls [`State::neighbor`] on the working state and
/// [`State::energy`] on the result, exactly once each. A candidate with
/// energy `E'` below the working energy `E` is always adopted; otherwise it
/// is adopted with probability `exp(-(E' - E) / T)`, where `T` follows
/// [`Schedule::temperature`].
///
/// The schedule is not validated. Equal or inverted temperature ratios
/// produce non-finite temperatures that flow straight into the acceptance
/// test; see [`Schedule::validate`] for an up-front check.
///
/// # Examples
///
/// ```
/// use anneal::{anneal, Schedule, State};
/// use rand::rngs::StdRng;
/// use rand::{Rng, SeedableRng};
///
/// #[derive(Clone)]
/// struct Ring(u32);
///
/// impl State for Ring {
///     fn energy(&self) -> f64 {
///         (self.0 as f64 - 5.0).abs()
///     }
///
///     fn neighbor<R: Rng>(&self, rng: &mut R) -> Self {
///         if rng.random_bool(0.5) {
///             Ring((self.0 + 1) % 10)
///         } else {
///             Ring((self.0 + 9) % 10)
///         }
///     }
/// }
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let best = anneal(Ring(0), &Schedule::new(10_000, 1.0, 1e-5), &mut rng);
/// assert_eq!(best.0, 5);
/// ```
pub fn anneal<S: State, R: Rng>(initial: S, schedule: &Schedule, rng: &mut R) -> S {
    Annealer::run(initial, schedule, rng).best
}

/// Executes simulated annealing and reports run statistics.
pub struct Annealer;

impl Annealer {
    /// Runs annealing with a caller-supplied random source.
    pub fn run<S: State, R: Rng>(initial: S, schedule: &Schedule, rng: &mut R) -> AnnealResult<S> {
        let initial_energy = initial.energy();

        let mut current = initial;
        let mut energy = initial_energy;
        let mut best = current.clone();
        let mut best_energy = initial_energy;

        let t0 = initial_energy * schedule.initial_temperature_ratio;
        let k = schedule.decay_constant();
        if !k.is_finite() || k <= 0.0 {
            warn!(
                "degenerate schedule: decay constant {k} (ratios {} / {})",
                schedule.initial_temperature_ratio, schedule.final_temperature_ratio
            );
        }
        debug!(
            "annealing: iterations={}, initial_energy={initial_energy}, t0={t0}, k={k}",
            schedule.iterations
        );

        let mut improving_moves = 0usize;
        let mut accepted_non_improving_moves = 0usize;
        let mut rejected_moves = 0usize;

        for i in 0..schedule.iterations {
            let candidate = current.neighbor(rng);
            let candidate_energy = candidate.energy();

            if candidate_energy < energy {
                improving_moves += 1;
                if candidate_energy < best_energy {
                    trace!("iteration {i}: new best energy {candidate_energy}");
                    best = candidate.clone();
                    best_energy = candidate_energy;
                }
            } else {
                // Metropolis criterion. NaN from a degenerate schedule compares
                // false and therefore accepts.
                let temperature = decayed_temperature(t0, k, i);
                let probability = (-(candidate_energy - energy) / temperature).exp();
                if rng.random_range(0.0..1.0) > probability {
                    rejected_moves += 1;
                    continue;
                }
                accepted_non_improving_moves += 1;
            }

            current = candidate;
            energy = candidate_energy;
        }

        debug!(
            "annealing done: best_energy={best_energy}, final_energy={energy}, \
             improving={improving_moves}, accepted={accepted_non_improving_moves}, \
             rejected={rejected_moves}"
        );

        AnnealResult {
            best,
            best_energy,
            initial_energy,
            final_energy: energy,
            iterations: schedule.iterations,
            improving_moves,
            accepted_non_improving_moves,
            rejected_moves,
        }
    }

    /// Runs annealing with a fresh [`StdRng`] seeded from `seed`.
    ///
    /// Two calls with the same seed, initial state and schedule return
    /// identical results, provided `neighbor` draws only from the given RNG.
    pub fn run_seeded<S: State>(initial: S, schedule: &Schedule, seed: u64) -> AnnealResult<S> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::run(initial, schedule, &mut rng)
    }
}
