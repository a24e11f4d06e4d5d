//! The Column x Box grid and its derived totals.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::column::{ColumnKind, COLUMN_COUNT};
use crate::catalog::{BoxCatalog, BoxKind, SectionTotals, BOX_COUNT};
use crate::core::{YambError, YambResult};
use crate::dice::DICE_COUNT;

/// A scoresheet.
///
/// Totals are recomputed on every write, so reading them never requires a
/// catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    cells: [[Cell; BOX_COUNT]; COLUMN_COUNT],
    column_totals: [SectionTotals; COLUMN_COUNT],
    totals: SectionTotals,
}

impl Sheet {
    /// An empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at (column, box).
    #[must_use]
    pub fn cell(&self, column: ColumnKind, box_kind: BoxKind) -> Cell {
        self.cells[column.index()][box_kind.index()]
    }

    /// Cells of one column in box order.
    #[must_use]
    pub fn column(&self, column: ColumnKind) -> &[Cell; BOX_COUNT] {
        &self.cells[column.index()]
    }

    /// Is (column, box) resolvable next under the column's order?
    #[must_use]
    pub fn can_fill(&self, column: ColumnKind, box_kind: BoxKind) -> bool {
        column.check_order(self.column(column), box_kind).is_ok()
    }

    /// Boxes of `column` its order allows resolving next.
    #[must_use]
    pub fn open_boxes(&self, column: ColumnKind) -> Vec<BoxKind> {
        column.open_boxes(self.column(column))
    }

    /// Score the dice into (column, box).
    pub fn fill(
        &mut self,
        column: ColumnKind,
        box_kind: BoxKind,
        dice: &[u8; DICE_COUNT],
        catalog: &BoxCatalog,
    ) -> YambResult<u32> {
        column.check_order(self.column(column), box_kind)?;

        let score = catalog.score(box_kind, dice);
        self.cells[column.index()][box_kind.index()] = Cell::Filled(score);
        self.recompute(catalog);
        Ok(score)
    }

    /// Pass the frontier box of an ordered column.
    pub fn skip(
        &mut self,
        column: ColumnKind,
        box_kind: BoxKind,
        catalog: &BoxCatalog,
    ) -> YambResult<()> {
        self.check_skip(column, box_kind)?;

        self.cells[column.index()][box_kind.index()] = Cell::Skipped;
        self.recompute(catalog);
        Ok(())
    }

    /// Validate a skip without applying it.
    pub fn check_skip(&self, column: ColumnKind, box_kind: BoxKind) -> YambResult<()> {
        if !column.is_ordered() {
            return Err(YambError::InvalidCommandForState {
                reason: "only DOWNWARD and UPWARD cells can be skipped",
            });
        }
        column.check_order(self.column(column), box_kind)
    }

    /// Every cell of `column` resolved?
    #[must_use]
    pub fn is_column_complete(&self, column: ColumnKind) -> bool {
        self.column(column).iter().all(|c| c.is_resolved())
    }

    /// Every cell resolved?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        ColumnKind::ALL.iter().all(|&c| self.is_column_complete(c))
    }

    /// Number of resolved cells.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_resolved()).count()
    }

    /// Totals of one column.
    #[must_use]
    pub fn column_totals(&self, column: ColumnKind) -> SectionTotals {
        self.column_totals[column.index()]
    }

    /// Sheet totals, summed over columns.
    #[must_use]
    pub fn totals(&self) -> SectionTotals {
        self.totals
    }

    /// Compute per-column and sheet totals from the cells.
    #[must_use]
    pub fn compute_totals(
        &self,
        catalog: &BoxCatalog,
    ) -> ([SectionTotals; COLUMN_COUNT], SectionTotals) {
        let per_column = ColumnKind::ALL.map(|column| {
            let scores = (*self.column(column)).map(Cell::score);
            catalog.column_totals(&scores)
        });
        let totals = per_column.iter().copied().sum();
        (per_column, totals)
    }

    /// Refresh the stored totals.
    pub fn recompute(&mut self, catalog: &BoxCatalog) {
        let (per_column, totals) = self.compute_totals(catalog);
        self.column_totals = per_column;
        self.totals = totals;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sheet() {
        let sheet = Sheet::new();
        assert!(!sheet.is_complete());
        assert_eq!(sheet.resolved_count(), 0);
        assert_eq!(sheet.totals(), SectionTotals::default());
    }

    #[test]
    fn test_fill_scores_and_totals() {
        let catalog = BoxCatalog::default();
        let mut sheet = Sheet::new();

        let score = sheet
            .fill(ColumnKind::Free, BoxKind::Fives, &[5, 5, 5, 1, 2], &catalog)
            .unwrap();

        assert_eq!(score, 15);
        assert_eq!(sheet.cell(ColumnKind::Free, BoxKind::Fives), Cell::Filled(15));
        assert_eq!(sheet.column_totals(ColumnKind::Free).top, 15);
        assert_eq!(sheet.totals().top, 15);
        assert_eq!(sheet.totals().total(), 15);
    }

    #[test]
    fn test_fill_respects_order() {
        let catalog = BoxCatalog::default();
        let mut sheet = Sheet::new();

        let err = sheet
            .fill(ColumnKind::Downward, BoxKind::Twos, &[2, 2, 2, 2, 2], &catalog)
            .unwrap_err();
        assert_eq!(
            err,
            YambError::IllegalFillOrder {
                column: ColumnKind::Downward,
                box_kind: BoxKind::Twos
            }
        );
        assert_eq!(sheet.resolved_count(), 0);
    }

    #[test]
    fn test_filled_cell_is_immutable() {
        let catalog = BoxCatalog::default();
        let mut sheet = Sheet::new();
        sheet.fill(ColumnKind::Free, BoxKind::Yamb, &[3, 3, 3, 3, 3], &catalog).unwrap();

        let err = sheet
            .fill(ColumnKind::Free, BoxKind::Yamb, &[6, 6, 6, 6, 6], &catalog)
            .unwrap_err();
        assert!(matches!(err, YambError::CellAlreadyResolved { .. }));
        assert_eq!(sheet.cell(ColumnKind::Free, BoxKind::Yamb), Cell::Filled(65));
    }

    #[test]
    fn test_skip_only_ordered_frontier() {
        let catalog = BoxCatalog::default();
        let mut sheet = Sheet::new();

        sheet.skip(ColumnKind::Upward, BoxKind::Yamb, &catalog).unwrap();
        assert_eq!(sheet.cell(ColumnKind::Upward, BoxKind::Yamb), Cell::Skipped);

        assert!(matches!(
            sheet.skip(ColumnKind::Upward, BoxKind::Ones, &catalog),
            Err(YambError::IllegalFillOrder { .. })
        ));
        assert!(matches!(
            sheet.skip(ColumnKind::Free, BoxKind::Ones, &catalog),
            Err(YambError::InvalidCommandForState { .. })
        ));
        assert!(matches!(
            sheet.skip(ColumnKind::Announced, BoxKind::Ones, &catalog),
            Err(YambError::InvalidCommandForState { .. })
        ));
    }

    #[test]
    fn test_complete_sheet() {
        let catalog = BoxCatalog::default();
        let mut sheet = Sheet::new();

        for column in [ColumnKind::Downward, ColumnKind::Upward] {
            while let Some(next) = column.frontier(sheet.column(column)) {
                sheet.skip(column, next, &catalog).unwrap();
            }
        }
        for column in [ColumnKind::Free, ColumnKind::Announced] {
            for kind in BoxKind::ALL {
                sheet.fill(column, kind, &[1, 1, 1, 1, 1], &catalog).unwrap();
            }
        }

        assert!(sheet.is_complete());
        assert_eq!(sheet.resolved_count(), 52);
    }

    #[test]
    fn test_totals_are_stable() {
        let catalog = BoxCatalog::default();
        let mut sheet = Sheet::new();
        sheet.fill(ColumnKind::Free, BoxKind::Ones, &[1, 1, 2, 3, 4], &catalog).unwrap();
        sheet.fill(ColumnKind::Free, BoxKind::Max, &[6, 6, 6, 5, 5], &catalog).unwrap();
        sheet.fill(ColumnKind::Free, BoxKind::Min, &[1, 1, 2, 1, 1], &catalog).unwrap();

        let first = sheet.compute_totals(&catalog);
        let second = sheet.compute_totals(&catalog);
        assert_eq!(first, second);
        assert_eq!(first.1, sheet.totals());
        // (28 - 6) * 2
        assert_eq!(sheet.totals().middle, 44);
        assert_eq!(sheet.totals().total(), 2 + 44);
    }
}
