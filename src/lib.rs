//! Generic simulated annealing.
//!
//! The caller describes a discrete search space through the [`State`]
//! trait (an energy to minimize and a random neighbor move) and picks a
//! [`Schedule`]; [`anneal`] walks the space with a temperature-decaying
//! Metropolis acceptance test and returns the best state it encountered.
//!
//! ```
//! use anneal::{Annealer, Schedule, State};
//! use rand::Rng;
//!
//! #[derive(Clone)]
//! struct Line(i64);
//!
//! impl State for Line {
//!     fn energy(&self) -> f64 {
//!         ((self.0 - 3) * (self.0 - 3)) as f64 + 1.0
//!     }
//!
//!     fn neighbor<R: Rng>(&self, rng: &mut R) -> Self {
//!         Line(self.0 + if rng.random_bool(0.5) { 1 } else { -1 })
//!     }
//! }
//!
//! let result = Annealer::run_seeded(Line(-20), &Schedule::new(20_000, 1.0, 1e-5), 42);
//! assert_eq!(result.best.0, 3);
//! ```
//!
//! No logger is installed; diagnostics go through the `log` facade.

pub mod sa;

pub use sa::{anneal, AnnealResult, Annealer, Schedule, State};
