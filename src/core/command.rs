//! Game commands and the history record kept for replay.
//!
//! A command is one request from the player within a game. Starting and
//! restarting are service operations, not commands: they create games
//! rather than advance one.

use serde::{Deserialize, Serialize};

use crate::catalog::BoxKind;
use crate::dice::DiceSelection;
use crate::sheet::ColumnKind;

/// A single in-game command.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Roll the selected dice (all five on the first roll of a turn).
    Roll { dice: DiceSelection },

    /// Bind the ANNOUNCED column to a box for this turn.
    Announce { box_kind: BoxKind },

    /// Score the current dice into a cell.
    Fill { column: ColumnKind, box_kind: BoxKind },

    /// Pass the frontier box of an ordered column.
    Skip { column: ColumnKind, box_kind: BoxKind },
}

impl Command {
    /// Roll every die.
    #[must_use]
    pub fn roll_all() -> Self {
        Command::Roll {
            dice: DiceSelection::all(),
        }
    }

    /// Does this command end the turn?
    #[must_use]
    pub fn resolves_cell(&self) -> bool {
        matches!(self, Command::Fill { .. } | Command::Skip { .. })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Roll { dice } => write!(f, "roll {}", dice),
            Command::Announce { box_kind } => write!(f, "announce {}", box_kind),
            Command::Fill { column, box_kind } => write!(f, "fill {}/{}", column, box_kind),
            Command::Skip { column, box_kind } => write!(f, "skip {}/{}", column, box_kind),
        }
    }
}

/// An applied command with enough context to audit the game afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// The command applied.
    pub command: Command,

    /// Turn number when the command was applied (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,

    /// Die values after the command.
    pub dice: [u8; 5],
}
