//! Top-level entry points.
//!
//! These accept any [`Start`]: a ready grid, grid symbols to parse, or a
//! request for a random grid. The configuration is validated first, then the
//! run's RNG is built from `config.seed`, then the start grid is resolved, so
//! every failure surfaces before the first step.

use crate::control::StopSignal;
use crate::error::{InvalidStateError, SearchError};
use crate::ga::{self, PopulationConfig, PopulationResult};
use crate::grid::Grid;
use crate::random::rng_for;
use crate::report::ProgressReporter;
use crate::sa::{self, LocalSearchConfig, LocalSearchResult};
use rand::Rng;
use std::fmt;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Starting grid of a search.
///
/// Not to be confused with the RNG seed in the configs: `Start::Random`
/// draws its grid from the RNG that `config.seed` initializes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Start {
    /// Generate a random grid from the run's own RNG.
    #[default]
    Random,
    Grid(Grid),
    /// Grid symbols in the [`Grid`] text format, validated on use.
    Symbols(String),
}

impl Start {
    /// Turns the start into a grid, drawing from `rng` only for
    /// [`Start::Random`].
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Result<Grid, InvalidStateError> {
        match self {
            Start::Random => Ok(Grid::random(rng)),
            Start::Grid(grid) => Ok(grid),
            Start::Symbols(symbols) => symbols.parse(),
        }
    }
}

impl From<Grid> for Start {
    fn from(grid: Grid) -> Self {
        Start::Grid(grid)
    }
}

impl From<Option<Grid>> for Start {
    fn from(grid: Option<Grid>) -> Self {
        grid.map_or(Start::Random, Start::Grid)
    }
}

impl From<&str> for Start {
    fn from(symbols: &str) -> Self {
        Start::Symbols(symbols.to_owned())
    }
}

impl From<String> for Start {
    fn from(symbols: String) -> Self {
        Start::Symbols(symbols)
    }
}

/// Generates a new scrambled grid.
pub fn generate_random_grid(seed: Option<u64>) -> Grid {
    Grid::random(&mut rng_for(seed))
}

/// Runs the annealing-style local search.
pub fn run_local_search<S: Into<Start>, P: ProgressReporter + ?Sized>(
    start: S,
    config: &LocalSearchConfig,
    reporter: &mut P,
) -> Result<LocalSearchResult, SearchError> {
    run_local_search_with_cancel(start, config, reporter, None)
}

/// Runs the local search with an optional cancellation token.
pub fn run_local_search_with_cancel<S: Into<Start>, P: ProgressReporter + ?Sized>(
    start: S,
    config: &LocalSearchConfig,
    reporter: &mut P,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<LocalSearchResult, SearchError> {
    config.validate()?;
    let mut rng = rng_for(config.seed);
    let grid = start.into().resolve(&mut rng)?;
    let stop = StopSignal::new(cancel, config.time_limit_ms);
    Ok(sa::search(&grid, config, &mut rng, reporter, &stop))
}

/// Runs the genetic population search.
pub fn run_population_search<S: Into<Start>, P: ProgressReporter + ?Sized>(
    start: S,
    config: &PopulationConfig,
    reporter: &mut P,
) -> Result<PopulationResult, SearchError> {
    run_population_search_with_cancel(start, config, reporter, None)
}

/// Runs the population search with an optional cancellation token.
pub fn run_population_search_with_cancel<S: Into<Start>, P: ProgressReporter + ?Sized>(
    start: S,
    config: &PopulationConfig,
    reporter: &mut P,
    cancel: Option<Arc<AtomicBool>>,
) -> Result<PopulationResult, SearchError> {
    config.validate()?;
    let mut rng = rng_for(config.seed);
    let grid = start.into().resolve(&mut rng)?;
    let stop = StopSignal::new(cancel, config.time_limit_ms);
    Ok(ga::evolve(&grid, config, &mut rng, reporter, &stop))
}

/// Which engine to run, with its configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    LocalSearch(LocalSearchConfig),
    PopulationSearch(PopulationConfig),
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::LocalSearch(_) => "simulated annealing",
            Strategy::PopulationSearch(_) => "genetic algorithm",
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::LocalSearch(LocalSearchConfig::default())
    }
}

/// Engine-independent summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub strategy: &'static str,
    pub grid: Grid,
    pub fitness: usize,
    /// Iterations or generations completed.
    pub steps: usize,
    pub solved: bool,
    pub cancelled: bool,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.solved {
            "solution complete"
        } else if self.cancelled {
            "cancelled"
        } else {
            "budget exhausted"
        };
        write!(
            f,
            "{}: {status} after {} steps, fitness {} ({})",
            self.strategy, self.steps, self.fitness, self.grid
        )
    }
}

/// Runs `strategy` from `start` and summarizes the outcome.
pub fn solve<S: Into<Start>, P: ProgressReporter + ?Sized>(
    strategy: &Strategy,
    start: S,
    reporter: &mut P,
) -> Result<Solution, SearchError> {
    let solution = match strategy {
        Strategy::LocalSearch(config) => {
            let result = run_local_search(start, config, reporter)?;
            Solution {
                strategy: strategy.name(),
                grid: result.best,
                fitness: result.best_fitness,
                steps: result.iterations,
                solved: result.solved,
                cancelled: result.cancelled,
            }
        }
        Strategy::PopulationSearch(config) => {
            let result = run_population_search(start, config, reporter)?;
            Solution {
                strategy: strategy.name(),
                grid: result.best,
                fitness: result.best_fitness,
                steps: result.generations,
                solved: result.solved,
                cancelled: result.cancelled,
            }
        }
    };
    log::info!("{solution}");
    Ok(solution)
}
