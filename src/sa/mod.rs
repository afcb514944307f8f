//! Annealing-style local search.
//!
//! Repeatedly mutates a single grid and accepts worse candidates with a
//! probability that shrinks as the temperature cools geometrically.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::LocalSearchConfig;
pub use runner::{LocalSearchResult, LocalSearchRunner};

pub(crate) use runner::search;
