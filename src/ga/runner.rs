//! GA evolutionary loop execution.
//!
//! [`PopulationRunner`] orchestrates the complete evolutionary process:
//! seeding → scoring → truncation → crossover → mutation → repeat.

use super::config::PopulationConfig;
use crate::control::StopSignal;
use crate::error::ConfigError;
use crate::grid::{crossover, mutate, Grid};
use crate::random::rng_for;
use crate::report::{ProgressRecord, ProgressReporter};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Result of a population search run.
#[derive(Debug, Clone)]
pub struct PopulationResult {
    /// Best grid of the last completed scoring pass.
    pub best: Grid,

    /// Fitness of `best`.
    pub best_fitness: usize,

    /// Number of completed scoring passes.
    pub generations: usize,

    /// Whether a grid with fitness 0 was found.
    pub solved: bool,

    /// Whether the run was cancelled externally or hit its time limit.
    pub cancelled: bool,

    /// Best fitness of each completed generation.
    pub fitness_history: Vec<usize>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use grid_metaheur::ga::{PopulationConfig, PopulationRunner};
/// use grid_metaheur::grid::Grid;
/// use grid_metaheur::report::NoopReporter;
///
/// let seed: Grid = "WRG/BOY/WRG".parse().unwrap();
/// let config = PopulationConfig::default().with_seed(42);
/// let result = PopulationRunner::run(&seed, &config, &mut NoopReporter).unwrap();
/// assert!(result.best_fitness <= 8);
/// ```
pub struct PopulationRunner;

impl PopulationRunner {
    /// Runs the population search from `seed`.
    pub fn run<P: ProgressReporter + ?Sized>(
        seed: &Grid,
        config: &PopulationConfig,
        reporter: &mut P,
    ) -> Result<PopulationResult, ConfigError> {
        Self::run_with_cancel(seed, config, reporter, None)
    }

    /// Runs the population search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the search stops
    /// before the next generation and returns the best grid scored so far.
    pub fn run_with_cancel<P: ProgressReporter + ?Sized>(
        seed: &Grid,
        config: &PopulationConfig,
        reporter: &mut P,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<PopulationResult, ConfigError> {
        config.validate()?;
        let mut rng = rng_for(config.seed);
        let stop = StopSignal::new(cancel, config.time_limit_ms);
        Ok(evolve(seed, config, &mut rng, reporter, &stop))
    }
}

/// The evolutionary loop. `config` must already be validated.
pub(crate) fn evolve<R: Rng, P: ProgressReporter + ?Sized>(
    seed: &Grid,
    config: &PopulationConfig,
    rng: &mut R,
    reporter: &mut P,
    stop: &StopSignal,
) -> PopulationResult {
    let size = config.population_size;
    let survivor_count = config.survivor_count();

    // 1. Initial population: single-mutation neighbors of the seed
    let mut population: Vec<Grid> = (0..size).map(|_| mutate(seed, rng)).collect();

    log::debug!(
        "population search start: seed {seed} (fitness {}), size {size}, generations {}",
        seed.fitness(),
        config.generations
    );

    let mut best: Option<(usize, Grid)> = None;
    let mut fitness_history = Vec::new();
    let mut generations = 0usize;
    let mut solved = false;
    let mut cancelled = false;

    // 2. Evolutionary loop
    for gen in 0..config.generations {
        if stop.should_stop() {
            cancelled = true;
            break;
        }

        let scored = score_population(&population, config.parallel);
        let (gen_fitness, gen_best) = scored[0];
        best = Some((gen_fitness, gen_best));
        generations = gen + 1;
        fitness_history.push(gen_fitness);

        reporter.report(&ProgressRecord::PopulationGeneration {
            generation: generations,
            best_fitness: gen_fitness,
        });

        if gen_fitness == 0 {
            solved = true;
            break;
        }

        // Truncation: keep the best half
        let mut next_gen: Vec<Grid> = scored[..survivor_count]
            .iter()
            .map(|&(_, grid)| grid)
            .collect();

        // Refill with offspring of survivor pairs (with replacement)
        while next_gen.len() < size {
            let p1 = next_gen[rng.random_range(0..survivor_count)];
            let p2 = next_gen[rng.random_range(0..survivor_count)];
            let child = mutate(&crossover(&p1, &p2, rng), rng);
            next_gen.push(child);
        }

        log::trace!(
            "generation {generations}: best {gen_fitness}, kept {survivor_count}, bred {}",
            size - survivor_count
        );

        population = next_gen;
    }

    // Cancelled before the first scoring pass: report the initial population.
    let (best_fitness, best) =
        best.unwrap_or_else(|| score_population(&population, config.parallel)[0]);

    log::debug!(
        "population search done: best {best_fitness} after {generations} generations \
         (solved {solved}, cancelled {cancelled})"
    );

    PopulationResult {
        best,
        best_fitness,
        generations,
        solved,
        cancelled,
        fitness_history,
    }
}

/// Scores every grid and sorts ascending by fitness.
///
/// The sort is stable, so ties keep population order and seeded runs stay
/// reproducible.
fn score_population(population: &[Grid], parallel: bool) -> Vec<(usize, Grid)> {
    let mut scored = evaluate_population(population, parallel);
    scored.sort_by_key(|&(fitness, _)| fitness);
    scored
}

#[cfg(feature = "parallel")]
fn evaluate_population(population: &[Grid], parallel: bool) -> Vec<(usize, Grid)> {
    if parallel {
        population.par_iter().map(|g| (g.fitness(), *g)).collect()
    } else {
        population.iter().map(|g| (g.fitness(), *g)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population(population: &[Grid], _parallel: bool) -> Vec<(usize, Grid)> {
    population.iter().map(|g| (g.fitness(), *g)).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Color;
    use crate::random::create_rng;
    use crate::report::NoopReporter;

    fn scrambled() -> Grid {
        "WRG/BOY/GRO".parse().unwrap()
    }

    /// Rebuilds the initial population a seeded run starts from.
    fn initial_population(seed: &Grid, size: usize, rng_seed: u64) -> Vec<Grid> {
        let mut rng = create_rng(rng_seed);
        (0..size).map(|_| mutate(seed, &mut rng)).collect()
    }

    #[test]
    fn test_result_no_worse_than_initial_population() {
        let seed = scrambled();
        let config = PopulationConfig::default().with_seed(42);
        let result = PopulationRunner::run(&seed, &config, &mut NoopReporter).unwrap();

        for member in initial_population(&seed, 10, 42) {
            assert!(
                result.best_fitness <= member.fitness(),
                "result {} worse than initial member {member} ({})",
                result.best_fitness,
                member.fitness()
            );
        }
    }

    #[test]
    fn test_generation_best_non_increasing() {
        let mut records: Vec<ProgressRecord> = Vec::new();
        let config = PopulationConfig::default().with_seed(17);
        PopulationRunner::run(&scrambled(), &config, &mut records).unwrap();

        assert!(!records.is_empty());
        for window in records.windows(2) {
            assert!(
                window[1].best_fitness() <= window[0].best_fitness(),
                "generation best increased: {} -> {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_returns_last_scored_best() {
        let mut records: Vec<ProgressRecord> = Vec::new();
        let config = PopulationConfig::default()
            .with_generations(5)
            .with_seed(3);
        let result = PopulationRunner::run(&scrambled(), &config, &mut records).unwrap();

        assert_eq!(records.len(), result.generations);
        assert_eq!(result.fitness_history.len(), result.generations);
        let last = records.last().unwrap();
        assert_eq!(last.best_fitness(), result.best_fitness);
        assert_eq!(result.best.fitness(), result.best_fitness);
    }

    #[test]
    fn test_solved_stops_early() {
        let mut records: Vec<ProgressRecord> = Vec::new();
        let seed = Grid::uniform(Color::Orange);
        let config = PopulationConfig::default().with_seed(42);
        let result = PopulationRunner::run(&seed, &config, &mut records).unwrap();

        assert!(result.solved);
        assert_eq!(result.best_fitness, 0);
        assert!(result.generations < 50);
        assert_eq!(records.len(), result.generations);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let config = PopulationConfig::default().with_seed(99);
        let mut a: Vec<ProgressRecord> = Vec::new();
        let mut b: Vec<ProgressRecord> = Vec::new();
        let ra = PopulationRunner::run(&scrambled(), &config, &mut a).unwrap();
        let rb = PopulationRunner::run(&scrambled(), &config, &mut b).unwrap();

        assert_eq!(ra.best, rb.best);
        assert_eq!(ra.generations, rb.generations);
        assert_eq!(a, b);
    }

    #[test]
    fn test_minimum_population() {
        let config = PopulationConfig::default()
            .with_population_size(2)
            .with_seed(1);
        let result = PopulationRunner::run(&scrambled(), &config, &mut NoopReporter).unwrap();
        assert!(result.generations > 0);
        assert_eq!(result.best.fitness(), result.best_fitness);
    }

    #[test]
    fn test_population_of_one_rejected() {
        let mut records: Vec<ProgressRecord> = Vec::new();
        let config = PopulationConfig::default().with_population_size(1);
        let err = PopulationRunner::run(&scrambled(), &config, &mut records).unwrap_err();

        assert_eq!(err, ConfigError::PopulationTooSmall(1));
        assert!(records.is_empty(), "no generation may run");
    }

    #[test]
    fn test_time_limit_with_unbounded_generations() {
        let config = PopulationConfig::default()
            .with_generations(usize::MAX)
            .with_time_limit_ms(10)
            .with_seed(42);
        assert!(config.validate().is_ok());

        let mut slow =
            |_: &ProgressRecord| std::thread::sleep(std::time::Duration::from_millis(4));
        let result = PopulationRunner::run(&scrambled(), &config, &mut slow).unwrap();

        assert!(result.cancelled, "deadline should stop the run");
        assert!(!result.solved);
        assert!(result.generations > 0);
        assert_eq!(result.fitness_history.len(), result.generations);
    }

    #[test]
    fn test_cancellation() {
        let mut records: Vec<ProgressRecord> = Vec::new();
        let config = PopulationConfig::default().with_seed(42);
        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            PopulationRunner::run_with_cancel(&scrambled(), &config, &mut records, Some(cancel))
                .unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert!(records.is_empty());

        let initial_best = initial_population(&scrambled(), 10, 42)
            .iter()
            .map(Grid::fitness)
            .min()
            .unwrap();
        assert_eq!(result.best_fitness, initial_best);
    }

    #[test]
    fn test_thorough_preset_solves() {
        let config = PopulationConfig::thorough().with_seed(42);
        let result = PopulationRunner::run(&scrambled(), &config, &mut NoopReporter).unwrap();
        assert!(
            result.best_fitness <= 1,
            "expected near-solved grid, got {}",
            result.best_fitness
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = PopulationConfig::default().with_seed(5);
        let parallel = sequential.clone().with_parallel(true);
        let a = PopulationRunner::run(&scrambled(), &sequential, &mut NoopReporter).unwrap();
        let b = PopulationRunner::run(&scrambled(), &parallel, &mut NoopReporter).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }
}
