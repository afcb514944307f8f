//! Grid state model.
//!
//! A [`Grid`] is a 3x3 face of [`Color`] tiles. Its [`fitness`] is the number
//! of tiles that differ from the top-left tile, so `0` is the goal state.
//!
//! # Submodules
//!
//! - [`operators`]: mutation and uniform crossover

mod color;
mod face;
pub mod operators;

pub use color::{Color, PALETTE};
pub use face::{fitness, Grid, CELL_COUNT, GRID_SIZE};
pub use operators::{crossover, mutate};
