//! Simulated Annealing over caller-defined states.
//!
//! A single-solution trajectory search that moves between adjacent states,
//! always taking improvements and taking worsening moves with a probability
//! that shrinks as the temperature decays. The lowest-energy state seen
//! over the whole run is returned, which may differ from the state the
//! walk ends on.
//!
//! Result quality depends on the caller's [`State`] implementation and
//! [`Schedule`]:
//!
//! - `energy` must be defined so that smaller values are better.
//! - `neighbor` must pick at random among states that differ from the
//!   current one by a minimal alteration, and the search space diameter
//!   must be small: any two states must be connected by a short chain of
//!   neighbors.
//! - The initial temperature must be large compared to the energy spread
//!   of typical states, the final temperature small compared to the
//!   difference between adjacent states, and the decay slow enough to keep
//!   the walk near equilibrium.
//!
//! None of this is checked. The run is single-threaded, always executes
//! the full iteration count, and draws all randomness from the generator
//! passed in.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod runner;
mod types;

pub use config::Schedule;
pub use runner::{anneal, AnnealResult, Annealer};
pub use types::State;
