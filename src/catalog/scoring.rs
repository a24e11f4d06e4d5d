//! Pure scoring functions.
//!
//! Every function scores a `FaceCounts` rather than an ordered dice array,
//! which makes scores independent of die order. A dice configuration that
//! does not match a box's pattern scores 0.

use crate::core::{ScoringConfig, DIE_FACES};
use crate::dice::DICE_COUNT;

/// Number of dice showing each face. Index 0 is unused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceCounts([u8; DIE_FACES as usize + 1]);

impl FaceCounts {
    /// Count faces of five die values. Values outside `1..=6` are ignored.
    #[must_use]
    pub fn from_values(values: &[u8; DICE_COUNT]) -> Self {
        let mut counts = [0u8; DIE_FACES as usize + 1];
        for &value in values.iter().filter(|v| (1..=DIE_FACES).contains(*v)) {
            counts[value as usize] += 1;
        }
        Self(counts)
    }

    /// Dice showing `face`.
    #[must_use]
    pub fn count(&self, face: u8) -> u8 {
        self.0[face as usize]
    }

    /// Sum of all dice.
    #[must_use]
    pub fn sum(&self) -> u32 {
        (1..=DIE_FACES).map(|face| u32::from(face) * u32::from(self.count(face))).sum()
    }

    /// Highest face shown by at least `n` dice.
    #[must_use]
    pub fn face_with_at_least(&self, n: u8) -> Option<u8> {
        (1..=DIE_FACES).rev().find(|&face| self.count(face) >= n)
    }

    /// Sorted multiset of counts of the faces that appear, e.g. `[2, 3]`.
    fn shape(&self) -> Vec<u8> {
        let mut shape: Vec<u8> = self.0[1..].iter().copied().filter(|&c| c > 0).collect();
        shape.sort_unstable();
        shape
    }
}

/// ONES..SIXES: face times the number of dice showing it.
pub fn score_face(counts: &FaceCounts, face: u8) -> u32 {
    u32::from(face) * u32::from(counts.count(face))
}

/// MAX and MIN: sum of all dice.
pub fn score_sum(counts: &FaceCounts, _config: &ScoringConfig) -> u32 {
    counts.sum()
}

/// TRIPS: three of a face plus the trips bonus.
pub fn score_trips(counts: &FaceCounts, config: &ScoringConfig) -> u32 {
    counts
        .face_with_at_least(3)
        .map_or(0, |face| 3 * u32::from(face) + config.trips_bonus)
}

/// STRAIGHT: five consecutive distinct faces.
pub fn score_straight(counts: &FaceCounts, config: &ScoringConfig) -> u32 {
    let run = |from: u8| (from..from + 5).all(|face| counts.count(face) == 1);
    if run(1) {
        config.small_straight
    } else if run(2) {
        config.large_straight
    } else {
        0
    }
}

/// FULL_HOUSE: exactly three of one face and two of another.
pub fn score_full_house(counts: &FaceCounts, config: &ScoringConfig) -> u32 {
    if counts.shape() == [2, 3] {
        counts.sum() + config.full_house_bonus
    } else {
        0
    }
}

/// POKER: four of a face plus the poker bonus.
pub fn score_poker(counts: &FaceCounts, config: &ScoringConfig) -> u32 {
    counts
        .face_with_at_least(4)
        .map_or(0, |face| 4 * u32::from(face) + config.poker_bonus)
}

/// YAMB: five of a kind plus the yamb bonus.
pub fn score_yamb(counts: &FaceCounts, config: &ScoringConfig) -> u32 {
    counts
        .face_with_at_least(5)
        .map_or(0, |face| 5 * u32::from(face) + config.yamb_bonus)
}
