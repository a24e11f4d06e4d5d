//! Turn state: roll budget and the announcement binding.
//!
//! ## Turn Lifecycle
//!
//! ```text
//! AwaitingAnnouncementOrRoll (roll_count = 0)
//!     -> AwaitingRollOrFill  (roll_count = 1, 2)
//!     -> AwaitingFill        (roll_count = 3)
//!     -> fill/skip           -> next turn or GameFinished
//! ```
//!
//! An announcement is only accepted while `roll_count == 0`, at most once
//! per turn, and is cleared when the turn ends.

use serde::{Deserialize, Serialize};

use crate::catalog::BoxKind;
use crate::core::{YambError, YambResult};

/// Rolls allowed per turn.
pub const ROLL_BUDGET: u8 = 3;

/// Where a game is within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnPhase {
    AwaitingAnnouncementOrRoll,
    AwaitingRollOrFill,
    AwaitingFill,
    GameFinished,
}

/// Per-turn state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    roll_count: u8,
    announcement: Option<BoxKind>,
}

impl TurnState {
    /// State at the start of a turn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls taken this turn.
    #[must_use]
    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    /// Box bound to the ANNOUNCED column this turn.
    #[must_use]
    pub fn announcement(&self) -> Option<BoxKind> {
        self.announcement
    }

    /// Phase of an unfinished game.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        match self.roll_count {
            0 => TurnPhase::AwaitingAnnouncementOrRoll,
            n if n < ROLL_BUDGET => TurnPhase::AwaitingRollOrFill,
            _ => TurnPhase::AwaitingFill,
        }
    }

    /// Can an announcement still be made this turn?
    #[must_use]
    pub fn announcement_open(&self) -> bool {
        self.announcement.is_none() && self.roll_count == 0
    }

    // === Rolls ===

    /// Check that a roll is within budget.
    pub fn check_roll(&self) -> YambResult<()> {
        if self.roll_count >= ROLL_BUDGET {
            return Err(YambError::RollBudgetExhausted {
                budget: ROLL_BUDGET,
            });
        }
        Ok(())
    }

    /// Consume one roll. Closes the announcement window.
    pub fn record_roll(&mut self) {
        debug_assert!(self.roll_count < ROLL_BUDGET);
        self.roll_count += 1;
    }

    // === Announcements ===

    /// Check that an announcement is accepted now.
    pub fn check_announce(&self) -> YambResult<()> {
        if let Some(announced) = self.announcement {
            return Err(YambError::AnnouncementAlreadyMade { announced });
        }
        if self.roll_count > 0 {
            return Err(YambError::AnnouncementWindowClosed);
        }
        Ok(())
    }

    /// Bind the ANNOUNCED column to `box_kind` for this turn.
    pub fn announce(&mut self, box_kind: BoxKind) {
        debug_assert!(self.announcement_open());
        self.announcement = Some(box_kind);
    }

    /// Check that `box_kind` is the announced target.
    pub fn check_announced_fill(&self, box_kind: BoxKind) -> YambResult<()> {
        match self.announcement {
            None => Err(YambError::InvalidCommandForState {
                reason: "the ANNOUNCED column needs an announcement this turn",
            }),
            Some(announced) if announced != box_kind => Err(YambError::AnnouncementMismatch {
                announced,
                requested: box_kind,
            }),
            Some(_) => Ok(()),
        }
    }

    /// End the turn: budget restored, announcement discarded.
    pub fn end(&mut self) {
        *self = Self::new();
    }
}
