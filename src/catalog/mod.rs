//! Box catalog: box identifiers, pure scoring functions, and the
//! configurable scoring table.
//!
//! ## Scoring
//!
//! Scores are computed from face counts, never from die order:
//!
//! ```
//! use yamb_engine::catalog::{BoxCatalog, BoxKind};
//!
//! let catalog = BoxCatalog::default();
//! assert_eq!(catalog.score(BoxKind::Straight, &[5, 3, 1, 2, 4]), 35);
//! assert_eq!(catalog.score(BoxKind::Straight, &[1, 2, 3, 4, 5]), 35);
//! assert_eq!(catalog.score(BoxKind::FullHouse, &[2, 5, 2, 5, 5]), 49);
//! ```

mod box_kind;
pub mod scoring;
mod table;

pub use box_kind::{BoxKind, Section, BOX_COUNT};
pub use scoring::FaceCounts;
pub use table::{BoxCatalog, BoxDefinition, ScoreFn, SectionTotals};
