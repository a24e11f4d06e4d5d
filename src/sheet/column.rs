//! Columns and their fill-order discipline.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::catalog::{BoxKind, BOX_COUNT};
use crate::core::{YambError, YambResult};

/// Number of columns on a sheet.
pub const COLUMN_COUNT: usize = 4;

/// A column and the order in which its boxes may be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnKind {
    /// Top to bottom, no gaps.
    Downward,
    /// Bottom to top, no gaps.
    Upward,
    /// Any order.
    Free,
    /// Any order, but only the box announced before the turn's first roll.
    Announced,
}

impl ColumnKind {
    /// Every column in sheet order.
    pub const ALL: [ColumnKind; COLUMN_COUNT] = [
        ColumnKind::Downward,
        ColumnKind::Upward,
        ColumnKind::Free,
        ColumnKind::Announced,
    ];

    /// Position on the sheet.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Is the fill order fixed?
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        matches!(self, ColumnKind::Downward | ColumnKind::Upward)
    }

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColumnKind::Downward => "DOWNWARD",
            ColumnKind::Upward => "UPWARD",
            ColumnKind::Free => "FREE",
            ColumnKind::Announced => "ANNOUNCED",
        }
    }

    /// Next box of an ordered column, `None` when complete or unordered.
    #[must_use]
    pub fn frontier(self, cells: &[Cell; BOX_COUNT]) -> Option<BoxKind> {
        let empty = |kind: &BoxKind| cells[kind.index()].is_empty();
        match self {
            ColumnKind::Downward => BoxKind::ALL.iter().copied().find(empty),
            ColumnKind::Upward => BoxKind::ALL.iter().rev().copied().find(empty),
            ColumnKind::Free | ColumnKind::Announced => None,
        }
    }

    /// Boxes this column's order allows resolving next.
    pub fn open_boxes(self, cells: &[Cell; BOX_COUNT]) -> Vec<BoxKind> {
        if self.is_ordered() {
            self.frontier(cells).into_iter().collect()
        } else {
            BoxKind::ALL
                .iter()
                .copied()
                .filter(|kind| cells[kind.index()].is_empty())
                .collect()
        }
    }

    /// Check that `box_kind` may be resolved next in this column.
    ///
    /// Only the order is checked here; the ANNOUNCED binding is a turn rule.
    pub fn check_order(self, cells: &[Cell; BOX_COUNT], box_kind: BoxKind) -> YambResult<()> {
        if !cells[box_kind.index()].is_empty() {
            return Err(YambError::CellAlreadyResolved {
                column: self,
                box_kind,
            });
        }
        match self.frontier(cells) {
            Some(next) if next != box_kind => Err(YambError::IllegalFillOrder {
                column: self,
                box_kind,
            }),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
