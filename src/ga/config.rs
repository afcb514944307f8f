//! Population search configuration.
//!
//! [`PopulationConfig`] holds the parameters that control the evolutionary
//! loop.

use crate::error::ConfigError;

/// Configuration for the truncation-selection genetic search.
///
/// # Defaults
///
/// ```
/// use grid_metaheur::ga::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use grid_metaheur::ga::PopulationConfig;
///
/// let config = PopulationConfig::default()
///     .with_population_size(20)
///     .with_generations(100)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PopulationConfig {
    /// Number of grids in the population.
    ///
    /// The best `population_size / 2` survive each generation, so this must
    /// be at least 2.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the actual runtime may
    /// exceed it by one generation's worth of work.
    pub time_limit_ms: Option<u64>,

    /// Whether to score the population in parallel using rayon.
    ///
    /// Only has an effect with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 50,
            seed: None,
            time_limit_ms: None,
            parallel: false,
        }
    }
}

impl PopulationConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Preset for a quick look: 10 grids, 10 generations.
    pub fn quick() -> Self {
        Self {
            population_size: 10,
            generations: 10,
            ..Self::default()
        }
    }

    /// Preset for a thorough search: 40 grids, 200 generations.
    pub fn thorough() -> Self {
        Self {
            population_size: 40,
            generations: 200,
            ..Self::default()
        }
    }

    /// Number of grids carried into the next generation.
    pub fn survivor_count(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 || self.survivor_count() == 0 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}
