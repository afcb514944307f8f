//! The grid state, its textual form, and the mismatch fitness.

use super::color::{Color, PALETTE};
use crate::error::InvalidStateError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Side length of the grid.
pub const GRID_SIZE: usize = 3;

/// Number of cells in a grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A 3x3 face of colored tiles.
///
/// `Grid` is `Copy`: every operator produces a fresh value, so a state under
/// evaluation can never alias a population member or the caller's seed.
///
/// # Examples
///
/// ```
/// use grid_metaheur::grid::{Color, Grid};
///
/// let grid: Grid = "WWW/WRW/WWW".parse().unwrap();
/// assert_eq!(grid.fitness(), 1);
/// assert_eq!(grid.get(1, 1), Color::Red);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct Grid {
    cells: [[Color; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new(cells: [[Color; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// A solved grid where every tile is `color`.
    pub fn uniform(color: Color) -> Self {
        Self {
            cells: [[color; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Fills every cell independently and uniformly from the palette.
    ///
    /// The result may already be solved.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut cells = [[Color::White; GRID_SIZE]; GRID_SIZE];
        for row in cells.iter_mut() {
            for cell in row.iter_mut() {
                *cell = random_color(rng);
            }
        }
        Self { cells }
    }

    /// Builds a grid from one symbol string per row.
    pub fn from_rows(rows: &[&str]) -> Result<Self, InvalidStateError> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Self::try_from(rows)
    }

    /// # Panics
    /// Panics if `row` or `col` is not below [`GRID_SIZE`].
    pub fn get(&self, row: usize, col: usize) -> Color {
        self.cells[row][col]
    }

    /// Returns a copy with one cell replaced.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below [`GRID_SIZE`].
    pub fn with_cell(&self, row: usize, col: usize, color: Color) -> Self {
        let mut next = *self;
        next.cells[row][col] = color;
        next
    }

    pub fn rows(&self) -> &[[Color; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Iterates all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// The reference color that every tile must match.
    pub fn target(&self) -> Color {
        self.cells[0][0]
    }

    /// See [`fitness`].
    pub fn fitness(&self) -> usize {
        fitness(self)
    }

    pub fn is_solved(&self) -> bool {
        self.fitness() == 0
    }
}

/// Number of tiles whose color differs from the tile at (0, 0).
///
/// Lower is better; `0` means every tile matches. The result is always in
/// `0..CELL_COUNT`.
pub fn fitness(grid: &Grid) -> usize {
    let target = grid.target();
    grid.cells().filter(|&c| c != target).count()
}

pub(crate) fn random_color<R: Rng>(rng: &mut R) -> Color {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

impl TryFrom<Vec<Vec<char>>> for Grid {
    type Error = InvalidStateError;

    fn try_from(rows: Vec<Vec<char>>) -> Result<Self, Self::Error> {
        if rows.len() != GRID_SIZE {
            return Err(InvalidStateError::RowCount {
                expected: GRID_SIZE,
                found: rows.len(),
            });
        }

        let mut cells = [[Color::White; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != GRID_SIZE {
                return Err(InvalidStateError::RowLength {
                    row: r,
                    expected: GRID_SIZE,
                    found: row.len(),
                });
            }
            for (c, &symbol) in row.iter().enumerate() {
                cells[r][c] =
                    Color::from_symbol(symbol).ok_or(InvalidStateError::UnknownSymbol {
                        row: Some(r),
                        col: Some(c),
                        symbol,
                    })?;
            }
        }
        Ok(Self { cells })
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = InvalidStateError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Self::try_from(rows)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.cells
            .iter()
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }
}

/// Parses rows separated by `/`, newlines, or other whitespace.
///
/// `"WRG/BOY/WWW"` and `"WRG BOY WWW"` describe the same grid.
impl FromStr for Grid {
    type Err = InvalidStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .split(|ch: char| ch == '/' || ch.is_whitespace())
            .filter(|row| !row.is_empty())
            .map(|row| row.chars().collect())
            .collect();
        Self::try_from(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                f.write_str("/")?;
            }
            for color in row {
                write!(f, "{color}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        (0..PALETTE.len()).prop_map(|i| PALETTE[i])
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        proptest::array::uniform3(proptest::array::uniform3(arb_color())).prop_map(Grid::new)
    }

    #[test]
    fn test_uniform_is_solved() {
        for color in PALETTE {
            let grid = Grid::uniform(color);
            assert_eq!(grid.fitness(), 0);
            assert!(grid.is_solved());
        }
    }

    #[test]
    fn test_worst_case_fitness() {
        let grid: Grid = "WRR/RRR/RRR".parse().unwrap();
        assert_eq!(grid.fitness(), CELL_COUNT - 1);
    }

    #[test]
    fn test_fitness_uses_top_left_as_reference() {
        // Majority is red, but the reference tile is white.
        let grid: Grid = "WRR/RRR/RRW".parse().unwrap();
        assert_eq!(grid.fitness(), 7);
    }

    #[test]
    fn test_parse_and_display() {
        let grid: Grid = "wrg\nboy\nWWW".parse().unwrap();
        assert_eq!(grid.to_string(), "WRG/BOY/WWW");
        assert_eq!(grid.get(1, 2), Color::Yellow);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "WRG/BXY/WWW".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            InvalidStateError::UnknownSymbol {
                row: Some(1),
                col: Some(1),
                symbol: 'X',
            }
        );
    }

    #[test]
    fn test_parse_rejects_bad_shape() {
        assert_eq!(
            "WRG/BOY".parse::<Grid>().unwrap_err(),
            InvalidStateError::RowCount {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            Grid::from_rows(&["WRG", "BO", "WWW"]).unwrap_err(),
            InvalidStateError::RowLength {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_with_cell_leaves_original_untouched() {
        let original = Grid::uniform(Color::Blue);
        let changed = original.with_cell(2, 2, Color::Red);
        assert_eq!(original, Grid::uniform(Color::Blue));
        assert_eq!(changed.get(2, 2), Color::Red);
        assert_eq!(changed.fitness(), 1);
    }

    #[test]
    fn test_random_is_deterministic_per_seed() {
        let a = Grid::random(&mut create_rng(3));
        let b = Grid::random(&mut create_rng(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_covers_palette() {
        let mut rng = create_rng(42);
        let mut seen = [false; PALETTE.len()];
        for _ in 0..50 {
            for color in Grid::random(&mut rng).cells() {
                seen[PALETTE.iter().position(|&p| p == color).unwrap()] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "palette not covered: {seen:?}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rows() {
        let grid: Grid = "WRG/BOY/WWW".parse().unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"["WRG","BOY","WWW"]"#);
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
        assert!(serde_json::from_str::<Grid>(r#"["WRG","BOZ","WWW"]"#).is_err());
    }

    proptest! {
        #[test]
        fn prop_fitness_in_range(grid in arb_grid()) {
            prop_assert!(grid.fitness() < CELL_COUNT);
        }

        #[test]
        fn prop_zero_fitness_iff_uniform(grid in arb_grid()) {
            let all_match = grid.cells().all(|c| c == grid.get(0, 0));
            prop_assert_eq!(grid.fitness() == 0, all_match);
        }

        #[test]
        fn prop_display_parses_back(grid in arb_grid()) {
            prop_assert_eq!(grid.to_string().parse::<Grid>().unwrap(), grid);
        }
    }
}
