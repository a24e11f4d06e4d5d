//! Box catalog: the scoring table the state machine consults.
//!
//! Each `BoxDefinition` pairs a box with its section, its column position,
//! and a pure scoring function. Variants of the rules swap scorers or
//! `ScoringConfig` values; the state machine never changes.

use serde::{Deserialize, Serialize};

use super::box_kind::{BoxKind, Section, BOX_COUNT};
use super::scoring::{self, FaceCounts};
use crate::core::{MiddleSectionRule, ScoringConfig};
use crate::dice::DICE_COUNT;

/// Scoring function for one box.
pub type ScoreFn = fn(&FaceCounts, &ScoringConfig) -> u32;

/// Catalog entry for one box.
#[derive(Clone, Copy, Debug)]
pub struct BoxDefinition {
    /// The box.
    pub kind: BoxKind,

    /// Section the box's score contributes to.
    pub section: Section,

    /// Position in column order (0 = top).
    pub position: usize,

    scorer: ScoreFn,
}

impl BoxDefinition {
    /// Score five dice for this box.
    #[must_use]
    pub fn score(&self, counts: &FaceCounts, config: &ScoringConfig) -> u32 {
        (self.scorer)(counts, config)
    }
}

/// Section subtotals of one column, or of the whole sheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionTotals {
    /// Top boxes plus the top bonus when earned.
    pub top: i32,

    /// MAX/MIN per `MiddleSectionRule`.
    pub middle: i32,

    /// Bottom boxes.
    pub bottom: i32,
}

impl SectionTotals {
    /// `top + middle + bottom`.
    #[must_use]
    pub fn total(&self) -> i32 {
        self.top + self.middle + self.bottom
    }
}

impl std::ops::Add for SectionTotals {
    type Output = SectionTotals;

    fn add(self, other: SectionTotals) -> SectionTotals {
        SectionTotals {
            top: self.top + other.top,
            middle: self.middle + other.middle,
            bottom: self.bottom + other.bottom,
        }
    }
}

impl std::iter::Sum for SectionTotals {
    fn sum<I: Iterator<Item = SectionTotals>>(iter: I) -> Self {
        iter.fold(SectionTotals::default(), |acc, t| acc + t)
    }
}

fn face_scorer<const FACE: u8>(counts: &FaceCounts, _config: &ScoringConfig) -> u32 {
    scoring::score_face(counts, FACE)
}

fn standard_scorer(kind: BoxKind) -> ScoreFn {
    match kind {
        BoxKind::Ones => face_scorer::<1>,
        BoxKind::Twos => face_scorer::<2>,
        BoxKind::Threes => face_scorer::<3>,
        BoxKind::Fours => face_scorer::<4>,
        BoxKind::Fives => face_scorer::<5>,
        BoxKind::Sixes => face_scorer::<6>,
        BoxKind::Max | BoxKind::Min => scoring::score_sum,
        BoxKind::Trips => scoring::score_trips,
        BoxKind::Straight => scoring::score_straight,
        BoxKind::FullHouse => scoring::score_full_house,
        BoxKind::Poker => scoring::score_poker,
        BoxKind::Yamb => scoring::score_yamb,
    }
}

/// Table of every box's scoring rule.
#[derive(Clone, Debug)]
pub struct BoxCatalog {
    boxes: [BoxDefinition; BOX_COUNT],
    config: ScoringConfig,
}

impl Default for BoxCatalog {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl BoxCatalog {
    /// Standard catalog with the given payouts.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        let boxes = BoxKind::ALL.map(|kind| BoxDefinition {
            kind,
            section: kind.section(),
            position: kind.index(),
            scorer: standard_scorer(kind),
        });
        Self { boxes, config }
    }

    /// Replace the scoring function of one box.
    #[must_use]
    pub fn with_scorer(mut self, kind: BoxKind, scorer: ScoreFn) -> Self {
        self.boxes[kind.index()].scorer = scorer;
        self
    }

    /// Scoring parameters.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Definition of a box.
    #[must_use]
    pub fn definition(&self, kind: BoxKind) -> &BoxDefinition {
        &self.boxes[kind.index()]
    }

    /// Iterate over definitions in column order.
    pub fn iter(&self) -> impl Iterator<Item = &BoxDefinition> {
        self.boxes.iter()
    }

    /// Score five dice for a box.
    #[must_use]
    pub fn score(&self, kind: BoxKind, values: &[u8; DICE_COUNT]) -> u32 {
        self.definition(kind).score(&FaceCounts::from_values(values), &self.config)
    }

    /// Totals of one column.
    ///
    /// `scores[i]` is the score of the box at position `i`: `None` while the
    /// cell is empty, `Some(0)` for a skipped cell.
    #[must_use]
    pub fn column_totals(&self, scores: &[Option<u32>; BOX_COUNT]) -> SectionTotals {
        let mut top = 0i32;
        let mut bottom = 0i32;
        for def in &self.boxes {
            let score = scores[def.position].unwrap_or(0) as i32;
            match def.section {
                Section::Top => top += score,
                Section::Bottom => bottom += score,
                Section::Middle => {}
            }
        }
        if top >= self.config.top_bonus_threshold as i32 {
            top += self.config.top_bonus as i32;
        }

        SectionTotals {
            top,
            middle: self.middle_total(scores),
            bottom,
        }
    }

    fn middle_total(&self, scores: &[Option<u32>; BOX_COUNT]) -> i32 {
        let max = scores[BoxKind::Max.index()];
        let min = scores[BoxKind::Min.index()];
        match self.config.middle_rule {
            MiddleSectionRule::Sum => (max.unwrap_or(0) + min.unwrap_or(0)) as i32,
            MiddleSectionRule::Difference => match (max, min, scores[BoxKind::Ones.index()]) {
                (Some(max), Some(min), Some(ones)) => (max as i32 - min as i32) * ones as i32,
                _ => 0,
            },
        }
    }
}
