//! Engine error type.
//!
//! Every failure is recoverable: commands validate before they mutate, so a
//! rejected command leaves the game exactly as it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entity::GameId;
use super::player::PlayerId;
use crate::catalog::BoxKind;
use crate::sheet::ColumnKind;

/// Result alias used throughout the crate.
pub type YambResult<T> = Result<T, YambError>;

/// Errors returned by engine and service operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum YambError {
    #[error("command not valid in the current state: {reason}")]
    InvalidCommandForState { reason: &'static str },

    #[error("roll budget of {budget} exhausted for this turn")]
    RollBudgetExhausted { budget: u8 },

    #[error("announcements can only be made before the first roll of a turn")]
    AnnouncementWindowClosed,

    #[error("{announced} was already announced this turn")]
    AnnouncementAlreadyMade { announced: BoxKind },

    #[error("an announcement is required before rolling")]
    AnnouncementRequired,

    #[error("announced column is bound to {announced}, not {requested}")]
    AnnouncementMismatch { announced: BoxKind, requested: BoxKind },

    #[error("{box_kind} is not the next box of the {column} column")]
    IllegalFillOrder { column: ColumnKind, box_kind: BoxKind },

    #[error("{box_kind} in the {column} column is already resolved")]
    CellAlreadyResolved { column: ColumnKind, box_kind: BoxKind },

    #[error("{0} is finished")]
    GameFinished(GameId),

    #[error("{player} does not own {game}")]
    NotOwner { player: PlayerId, game: GameId },

    #[error("{0} not found")]
    GameNotFound(GameId),

    #[error("{0} already has a game in progress")]
    PlayerAlreadyHasActiveGame(PlayerId),

    #[error("{0} not found")]
    PlayerNotFound(PlayerId),

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("username must be between {min} and {max} characters")]
    InvalidUsername { min: usize, max: usize },

    #[error("game checkpoint could not be decoded: {0}")]
    Checkpoint(String),
}

/// Stable, payload-free error classification for transports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidCommandForState,
    RollBudgetExhausted,
    AnnouncementWindowClosed,
    AnnouncementAlreadyMade,
    AnnouncementRequired,
    AnnouncementMismatch,
    IllegalFillOrder,
    CellAlreadyResolved,
    GameFinished,
    NotOwner,
    GameNotFound,
    PlayerAlreadyHasActiveGame,
    PlayerNotFound,
    UsernameTaken,
    InvalidUsername,
    Checkpoint,
}

impl ErrorKind {
    /// Wire code of this kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidCommandForState => "INVALID_COMMAND_FOR_STATE",
            ErrorKind::RollBudgetExhausted => "ROLL_BUDGET_EXHAUSTED",
            ErrorKind::AnnouncementWindowClosed => "ANNOUNCEMENT_WINDOW_CLOSED",
            ErrorKind::AnnouncementAlreadyMade => "ANNOUNCEMENT_ALREADY_MADE",
            ErrorKind::AnnouncementRequired => "ANNOUNCEMENT_REQUIRED",
            ErrorKind::AnnouncementMismatch => "ANNOUNCEMENT_MISMATCH",
            ErrorKind::IllegalFillOrder => "ILLEGAL_FILL_ORDER",
            ErrorKind::CellAlreadyResolved => "CELL_ALREADY_RESOLVED",
            ErrorKind::GameFinished => "GAME_FINISHED",
            ErrorKind::NotOwner => "NOT_OWNER",
            ErrorKind::GameNotFound => "GAME_NOT_FOUND",
            ErrorKind::PlayerAlreadyHasActiveGame => "PLAYER_ALREADY_HAS_ACTIVE_GAME",
            ErrorKind::PlayerNotFound => "PLAYER_NOT_FOUND",
            ErrorKind::UsernameTaken => "USERNAME_TAKEN",
            ErrorKind::InvalidUsername => "INVALID_USERNAME",
            ErrorKind::Checkpoint => "CHECKPOINT",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl YambError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            YambError::InvalidCommandForState { .. } => ErrorKind::InvalidCommandForState,
            YambError::RollBudgetExhausted { .. } => ErrorKind::RollBudgetExhausted,
            YambError::AnnouncementWindowClosed => ErrorKind::AnnouncementWindowClosed,
            YambError::AnnouncementAlreadyMade { .. } => ErrorKind::AnnouncementAlreadyMade,
            YambError::AnnouncementRequired => ErrorKind::AnnouncementRequired,
            YambError::AnnouncementMismatch { .. } => ErrorKind::AnnouncementMismatch,
            YambError::IllegalFillOrder { .. } => ErrorKind::IllegalFillOrder,
            YambError::CellAlreadyResolved { .. } => ErrorKind::CellAlreadyResolved,
            YambError::GameFinished(_) => ErrorKind::GameFinished,
            YambError::NotOwner { .. } => ErrorKind::NotOwner,
            YambError::GameNotFound(_) => ErrorKind::GameNotFound,
            YambError::PlayerAlreadyHasActiveGame(_) => ErrorKind::PlayerAlreadyHasActiveGame,
            YambError::PlayerNotFound(_) => ErrorKind::PlayerNotFound,
            YambError::UsernameTaken(_) => ErrorKind::UsernameTaken,
            YambError::InvalidUsername { .. } => ErrorKind::InvalidUsername,
            YambError::Checkpoint(_) => ErrorKind::Checkpoint,
        }
    }

    /// Build the `{kind, message}` notice a presentation layer displays.
    #[must_use]
    pub fn notice(&self) -> ErrorNotice {
        ErrorNotice {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Serializable error body for transports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotice {
    pub kind: ErrorKind,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = YambError::IllegalFillOrder {
            column: ColumnKind::Downward,
            box_kind: BoxKind::Threes,
        };
        assert_eq!(err.to_string(), "THREES is not the next box of the DOWNWARD column");

        let err = YambError::RollBudgetExhausted { budget: 3 };
        assert_eq!(err.to_string(), "roll budget of 3 exhausted for this turn");
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(YambError::GameNotFound(GameId(4)).kind(), ErrorKind::GameNotFound);
        assert_eq!(ErrorKind::AnnouncementMismatch.code(), "ANNOUNCEMENT_MISMATCH");
        assert_eq!(
            format!("{}", YambError::AnnouncementWindowClosed.kind()),
            "ANNOUNCEMENT_WINDOW_CLOSED"
        );
    }

    #[test]
    fn test_notice_serialization() {
        let notice = YambError::NotOwner {
            player: PlayerId(2),
            game: GameId(9),
        }
        .notice();

        let json = serde_json::to_string(&notice).unwrap();
        assert!(json.contains("\"kind\":\"NOT_OWNER\""));
        assert!(json.contains("Player 2 does not own Game(9)"));
    }
}
