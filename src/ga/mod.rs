//! Genetic population search.
//!
//! A generation-based search over a population of grids:
//!
//! 1. The initial population is made of single-mutation neighbors of the seed
//! 2. Each generation is scored and sorted, best first
//! 3. The best half survives unchanged (truncation selection)
//! 4. The rest is refilled with `mutate(crossover(p1, p2))`, where both
//!    parents are drawn from the survivors with replacement
//!
//! The run ends as soon as a generation's best grid reaches fitness 0.
//!
//! # Key Types
//!
//! - [`PopulationConfig`]: population size, generation cap, seed, limits
//! - [`PopulationRunner`]: executes the evolutionary loop
//! - [`PopulationResult`]: final grid with run statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms" (truncation selection)

mod config;
mod runner;

pub use config::PopulationConfig;
pub use runner::{PopulationResult, PopulationRunner};

pub(crate) use runner::evolve;
