//! Local search execution loop.

use super::config::LocalSearchConfig;
use crate::control::StopSignal;
use crate::error::ConfigError;
use crate::grid::{mutate, Grid};
use crate::random::rng_for;
use crate::report::{ProgressRecord, ProgressReporter};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult {
    /// The lowest-fitness grid accepted during the run.
    pub best: Grid,

    /// Fitness of `best`.
    pub best_fitness: usize,

    /// Number of steps performed (candidate evaluations).
    pub iterations: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Number of accepted candidates, improving or not.
    pub accepted_moves: usize,

    /// Number of strictly improving candidates.
    pub improving_moves: usize,

    /// Whether the goal fitness 0 was reached.
    pub solved: bool,

    /// Whether the run stopped on the cancel flag or time limit.
    pub cancelled: bool,

    /// Best fitness before the first step and after every step.
    pub fitness_history: Vec<usize>,
}

/// Executes the annealing-style local search.
///
/// Every candidate is a single mutation of the currently accepted grid.
/// There is no separate walk state: once a candidate is accepted it becomes
/// the state that later steps mutate, even if it is worse than an earlier
/// grid. The lowest grid ever accepted is tracked separately, reported as
/// `best_fitness`, and returned.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs local search from `seed`.
    pub fn run<P: ProgressReporter + ?Sized>(
        seed: &Grid,
        config: &LocalSearchConfig,
        reporter: &mut P,
    ) -> Result<LocalSearchResult, ConfigError> {
        Self::run_with_cancel(seed, config, reporter, None)
    }

    /// Runs local search with an optional cancellation token.
    ///
    /// The flag is checked at the top of each step.
    pub fn run_with_cancel<P: ProgressReporter + ?Sized>(
        seed: &Grid,
        config: &LocalSearchConfig,
        reporter: &mut P,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<LocalSearchResult, ConfigError> {
        config.validate()?;
        let mut rng = rng_for(config.seed);
        let stop = StopSignal::new(cancel, config.time_limit_ms);
        Ok(search(seed, config, &mut rng, reporter, &stop))
    }
}

/// The search loop. `config` must already be validated.
pub(crate) fn search<R: Rng, P: ProgressReporter + ?Sized>(
    seed: &Grid,
    config: &LocalSearchConfig,
    rng: &mut R,
    reporter: &mut P,
    stop: &StopSignal,
) -> LocalSearchResult {
    let mut current = *seed;
    let mut current_fitness = current.fitness();
    let mut best = current;
    let mut best_fitness = current_fitness;

    let mut temperature = config.initial_temperature;
    let mut iterations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut cancelled = false;

    let mut fitness_history = Vec::new();
    fitness_history.push(best_fitness);

    log::debug!(
        "local search start: seed {seed} (fitness {current_fitness}), T0 {}, rate {}, max {}",
        config.initial_temperature,
        config.cooling_rate,
        config.max_iterations
    );

    while iterations < config.max_iterations {
        if current_fitness == 0 {
            break;
        }
        if stop.should_stop() {
            cancelled = true;
            break;
        }

        let candidate = mutate(&current, rng);
        let candidate_fitness = candidate.fitness();

        let accept = if candidate_fitness < current_fitness {
            improving_moves += 1;
            true
        } else {
            metropolis(current_fitness, candidate_fitness, temperature, rng)
        };

        if accept {
            log::trace!(
                "step {}: accepted {current_fitness} -> {candidate_fitness} at T {temperature:.4}",
                iterations + 1
            );
            current = candidate;
            current_fitness = candidate_fitness;
            accepted_moves += 1;

            if current_fitness < best_fitness {
                best = current;
                best_fitness = current_fitness;
            }
        }

        temperature *= config.cooling_rate;
        iterations += 1;
        fitness_history.push(best_fitness);

        reporter.report(&ProgressRecord::LocalSearchStep {
            iteration: iterations,
            temperature,
            best_fitness,
            current_fitness,
        });
    }

    let solved = best_fitness == 0;
    log::debug!(
        "local search done: best {best_fitness} after {iterations} iterations \
         (accepted {accepted_moves}, improving {improving_moves}, solved {solved}, cancelled {cancelled})"
    );

    LocalSearchResult {
        best,
        best_fitness,
        iterations,
        final_temperature: temperature,
        accepted_moves,
        improving_moves,
        solved,
        cancelled,
        fitness_history,
    }
}

/// Metropolis criterion for a non-improving candidate.
///
/// Accepts with probability `exp((current - candidate) / temperature)`.
/// A temperature that is not positive and finite never accepts.
fn metropolis<R: Rng>(current: usize, candidate: usize, temperature: f64, rng: &mut R) -> bool {
    if !(temperature.is_finite() && temperature > 0.0) {
        return false;
    }
    let probability = ((current as f64 - candidate as f64) / temperature).exp();
    rng.random::<f64>() < probability
}
