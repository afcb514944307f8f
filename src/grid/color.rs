//! The categorical tile palette.

use crate::error::InvalidStateError;
use std::fmt;

/// One of the six tile colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
}

/// All palette values, in canonical order.
///
/// Uniform draws index into this array, so its order is part of the
/// reproducibility contract for seeded runs.
pub const PALETTE: [Color; 6] = [
    Color::White,
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Orange,
    Color::Yellow,
];

impl Color {
    /// Single-letter symbol: `W R G B O Y`.
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
        }
    }

    /// Lower-case color name, for display layers.
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Yellow => "yellow",
        }
    }

    /// Parses a symbol, ignoring ASCII case.
    pub fn from_symbol(symbol: char) -> Option<Color> {
        match symbol.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'O' => Some(Color::Orange),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl TryFrom<char> for Color {
    type Error = InvalidStateError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Color::from_symbol(symbol).ok_or(InvalidStateError::UnknownSymbol {
            row: None,
            col: None,
            symbol,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
