//! Scoresheet: columns, cells, fill-order rules, and totals.
//!
//! ## Fill order
//!
//! Every column shares one ordering check, `ColumnKind::check_order`,
//! parameterized by the column variant:
//!
//! - `Downward`: only the first empty box from the top
//! - `Upward`: only the first empty box from the bottom
//! - `Free` and `Announced`: any empty box
//!
//! Ordered columns may skip their frontier box instead of scoring it.

mod cell;
mod column;
mod grid;

pub use cell::{Cell, CellState};
pub use column::{ColumnKind, COLUMN_COUNT};
pub use grid::Sheet;
