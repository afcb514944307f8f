//! Error types.
//!
//! Two failure kinds exist, and neither is retryable:
//!
//! - [`ConfigError`]: a tunable parameter is out of range. Detected by
//!   `validate()` before any search step runs.
//! - [`InvalidStateError`]: externally supplied grid data does not describe
//!   a well-formed 3x3 grid over the palette.
//!
//! [`SearchError`] unifies both for the top-level entry points.

use thiserror::Error;

/// Invalid tunable parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("initial temperature must be positive and finite, got {0}")]
    NonPositiveTemperature(f64),

    #[error("cooling rate must be positive and finite, got {0}")]
    NonPositiveCoolingRate(f64),

    #[error("max iterations must be at least 1")]
    ZeroIterations,

    #[error("population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error("time limit must be at least 1 ms when set")]
    ZeroTimeLimit,
}

/// Grid data that violates the shape or palette invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidStateError {
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row}: expected {expected} cells, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// `row`/`col` are `None` when the symbol was checked outside a grid.
    #[error("unknown palette symbol {symbol:?}{}", position(.row, .col))]
    UnknownSymbol {
        row: Option<usize>,
        col: Option<usize>,
        symbol: char,
    },
}

fn position(row: &Option<usize>, col: &Option<usize>) -> String {
    match (row, col) {
        (Some(r), Some(c)) => format!(" at ({r}, {c})"),
        _ => String::new(),
    }
}

/// Any error that aborts a search before it starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid seed grid: {0}")]
    InvalidState(#[from] InvalidStateError),
}
