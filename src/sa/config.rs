//! Local search configuration.

use crate::error::ConfigError;

/// Configuration for the annealing-style local search.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied once per
/// step whether or not the candidate was accepted.
///
/// # Examples
///
/// ```
/// use grid_metaheur::sa::LocalSearchConfig;
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(500)
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.95)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LocalSearchConfig {
    /// Hard cap on the number of steps.
    pub max_iterations: usize,

    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Geometric cooling factor. Typical range: 0.95–0.99.
    pub cooling_rate: f64,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Optional wall-clock limit, checked at the top of every step.
    pub time_limit_ms: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.99,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl LocalSearchConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Short run for interactive use: 200 iterations, otherwise default.
    pub fn quick() -> Self {
        Self {
            max_iterations: 200,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::NonPositiveTemperature(
                self.initial_temperature,
            ));
        }
        if !(self.cooling_rate.is_finite() && self.cooling_rate > 0.0) {
            return Err(ConfigError::NonPositiveCoolingRate(self.cooling_rate));
        }
        if self.time_limit_ms == Some(0) {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}
