//! Sheet cells.

use serde::{Deserialize, Serialize};

/// State of one (column, box) cell.
///
/// Once a cell leaves `Empty` it never changes again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled(u32),
    Skipped,
}

/// Payload-free cell state for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CellState {
    Empty,
    Filled,
    Skipped,
}

impl Cell {
    /// Not yet resolved.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Filled or skipped.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !self.is_empty()
    }

    /// Score counted toward totals: `None` while empty, 0 when skipped.
    #[must_use]
    pub const fn score(self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Filled(score) => Some(score),
            Cell::Skipped => Some(0),
        }
    }

    /// State without the score.
    #[must_use]
    pub const fn state(self) -> CellState {
        match self {
            Cell::Empty => CellState::Empty,
            Cell::Filled(_) => CellState::Filled,
            Cell::Skipped => CellState::Skipped,
        }
    }
}
