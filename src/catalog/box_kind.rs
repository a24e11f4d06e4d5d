//! Box and section identifiers.

use serde::{Deserialize, Serialize};

/// Number of fillable boxes per column.
pub const BOX_COUNT: usize = 13;

/// Sheet section a box contributes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Section {
    Top,
    Middle,
    Bottom,
}

/// A fillable scoring box, in column order from top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoxKind {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Max,
    Min,
    Trips,
    Straight,
    FullHouse,
    Poker,
    Yamb,
}

impl BoxKind {
    /// Every box in column order.
    pub const ALL: [BoxKind; BOX_COUNT] = [
        BoxKind::Ones,
        BoxKind::Twos,
        BoxKind::Threes,
        BoxKind::Fours,
        BoxKind::Fives,
        BoxKind::Sixes,
        BoxKind::Max,
        BoxKind::Min,
        BoxKind::Trips,
        BoxKind::Straight,
        BoxKind::FullHouse,
        BoxKind::Poker,
        BoxKind::Yamb,
    ];

    /// Position in column order (0 = top).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Section this box belongs to.
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            BoxKind::Ones
            | BoxKind::Twos
            | BoxKind::Threes
            | BoxKind::Fours
            | BoxKind::Fives
            | BoxKind::Sixes => Section::Top,
            BoxKind::Max | BoxKind::Min => Section::Middle,
            BoxKind::Trips
            | BoxKind::Straight
            | BoxKind::FullHouse
            | BoxKind::Poker
            | BoxKind::Yamb => Section::Bottom,
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BoxKind::Ones => "ONES",
            BoxKind::Twos => "TWOS",
            BoxKind::Threes => "THREES",
            BoxKind::Fours => "FOURS",
            BoxKind::Fives => "FIVES",
            BoxKind::Sixes => "SIXES",
            BoxKind::Max => "MAX",
            BoxKind::Min => "MIN",
            BoxKind::Trips => "TRIPS",
            BoxKind::Straight => "STRAIGHT",
            BoxKind::FullHouse => "FULL_HOUSE",
            BoxKind::Poker => "POKER",
            BoxKind::Yamb => "YAMB",
        }
    }
}

impl std::fmt::Display for BoxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
