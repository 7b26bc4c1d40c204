//! Core trait for annealable states.

use rand::Rng;

/// A point in a search space that can undergo simulated annealing.
///
/// The annealer knows nothing about the search space beyond these two
/// operations. All domain logic (how to score a candidate, how to perturb
/// it) lives in the implementation.
///
/// # Minimization
///
/// Lower energy is better. For maximization, negate the objective.
///
/// # Examples
///
/// ```
/// use anneal::State;
/// use rand::Rng;
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
/// ```
pub trait State: Clone {
    /// Returns the energy of this state. This is the quantity minimized.
    fn energy(&self) -> f64;

    /// Returns a state chosen at random from those adjacent to `self`.
    ///
    /// The neighbor must not share mutable storage with `self`: changing
    /// one after the call must never be visible through the other. Reusing
    /// a `Vec` by value is fine; handing out a shared `Rc<RefCell<_>>` is
    /// not.
    ///
    /// The neighborhood should be small (a minimal alteration), but any
    /// state must be reachable from any other in a few steps.
    fn neighbor<R: Rng>(&self, rng: &mut R) -> Self;
}
