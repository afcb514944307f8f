//! Variation operators on grids.
//!
//! - [`mutate`]: reassign one random cell to a random palette color
//! - [`crossover`]: uniform crossover, one independent coin flip per cell
//!
//! Both take their inputs by reference and return a new [`Grid`].

use super::face::{random_color, Grid, GRID_SIZE};
use rand::Rng;

/// Returns a copy of `grid` with one uniformly chosen cell set to a uniformly
/// chosen palette color.
///
/// The new color may equal the old one, in which case the result is equal
/// to the input.
pub fn mutate<R: Rng>(grid: &Grid, rng: &mut R) -> Grid {
    let row = rng.random_range(0..GRID_SIZE);
    let col = rng.random_range(0..GRID_SIZE);
    grid.with_cell(row, col, random_color(rng))
}

/// Uniform crossover: each cell comes from `b` with probability 0.5,
/// otherwise from `a`.
pub fn crossover<R: Rng>(a: &Grid, b: &Grid, rng: &mut R) -> Grid {
    let mut cells = *a.rows();
    for (r, row) in cells.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            if rng.random_bool(0.5) {
                *cell = b.get(r, c);
            }
        }
    }
    Grid::new(cells)
}
