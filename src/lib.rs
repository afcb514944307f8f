//! Metaheuristic search over a categorical tile grid.
//!
//! Minimizes the number of tiles on a 3x3 face that differ from the top-left
//! tile, using two general-purpose strategies:
//!
//! - **Local search** ([`sa`]): annealing-style single-state search with
//!   Metropolis acceptance and geometric cooling.
//! - **Population search** ([`ga`]): generation-based evolution with
//!   truncation selection, uniform crossover, and single-cell mutation.
//!
//! Both engines thread an explicitly seeded RNG through every random choice,
//! so a fixed seed reproduces a run exactly. Progress is emitted through the
//! [`report::ProgressReporter`] capability; the crate itself never prints.
//!
//! # Example
//!
//! ```
//! use grid_metaheur::report::NoopReporter;
//! use grid_metaheur::sa::LocalSearchConfig;
//! use grid_metaheur::solver::run_local_search;
//!
//! let config = LocalSearchConfig::default().with_seed(42);
//! let result = run_local_search("WRR/RRR/RRR", &config, &mut NoopReporter).unwrap();
//! assert!(result.best_fitness < 8);
//! ```
//!
//! # Architecture
//!
//! - [`grid`]: state model, fitness, and variation operators
//! - [`sa`], [`ga`]: the two search engines
//! - [`report`]: structured progress records and sinks
//! - [`solver`]: seed handling and top-level entry points
//! - [`error`]: configuration and grid validation errors
//!
//! Rendering and user interaction belong to the caller.

mod control;
pub mod error;
pub mod ga;
pub mod grid;
pub mod random;
pub mod report;
pub mod sa;
pub mod solver;

pub use error::{ConfigError, InvalidStateError, SearchError};
pub use grid::{fitness, Color, Grid};
pub use report::{ProgressRecord, ProgressReporter};
pub use solver::{run_local_search, run_population_search, solve, Start, Strategy};
