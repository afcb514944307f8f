//! Progress reporting.
//!
//! Both engines emit one [`ProgressRecord`] per step or generation through a
//! [`ProgressReporter`]. The reporter is called synchronously and decides
//! whether and how to render the record; the engines never print.
//!
//! Implementations provided here:
//!
//! - [`NoopReporter`]: discards everything
//! - [`LogReporter`]: forwards the narration line to the `log` facade
//! - `Vec<ProgressRecord>`: collects records
//! - any `FnMut(&ProgressRecord)` closure

use std::fmt;

/// A structured progress event.
///
/// `Display` renders the human-readable narration line.
///
/// With the `serde` feature, records serialize with a `kind` tag of
/// `"local_search_step"` or `"population_generation"`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum ProgressRecord {
    /// One completed local search step.
    LocalSearchStep {
        /// 1-based step index.
        iteration: usize,
        /// Temperature after this step's cooling.
        temperature: f64,
        /// Lowest fitness seen so far. Never increases.
        best_fitness: usize,
        /// Fitness of the state the next step will mutate.
        current_fitness: usize,
    },

    /// One completed population scoring pass.
    PopulationGeneration {
        /// 1-based generation index.
        generation: usize,
        best_fitness: usize,
    },
}

impl ProgressRecord {
    pub fn best_fitness(&self) -> usize {
        match *self {
            ProgressRecord::LocalSearchStep { best_fitness, .. }
            | ProgressRecord::PopulationGeneration { best_fitness, .. } => best_fitness,
        }
    }
}

impl fmt::Display for ProgressRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressRecord::LocalSearchStep {
                iteration,
                temperature,
                best_fitness,
                ..
            } => write!(
                f,
                "SA Iteration {iteration} | Temperature: {temperature:.2} | Best Fitness: {best_fitness}"
            ),
            ProgressRecord::PopulationGeneration {
                generation,
                best_fitness,
            } => write!(f, "GA Generation {generation} | Best Fitness: {best_fitness}"),
        }
    }
}

/// Sink for progress records.
pub trait ProgressReporter {
    fn report(&mut self, record: &ProgressRecord);
}

/// Discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&mut self, _record: &ProgressRecord) {}
}

/// Writes each record's narration line through the `log` crate.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    level: log::Level,
}

impl LogReporter {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }

    pub fn level(&self) -> log::Level {
        self.level
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl ProgressReporter for LogReporter {
    fn report(&mut self, record: &ProgressRecord) {
        log::log!(self.level, "{record}");
    }
}

impl ProgressReporter for Vec<ProgressRecord> {
    fn report(&mut self, record: &ProgressRecord) {
        self.push(record.clone());
    }
}

impl<F: FnMut(&ProgressRecord)> ProgressReporter for F {
    fn report(&mut self, record: &ProgressRecord) {
        self(record)
    }
}
