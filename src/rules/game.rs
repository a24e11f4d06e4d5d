//! The game aggregate.
//!
//! A `Game` owns everything one play-through needs: dice, turn state,
//! scoresheet, its own RNG stream and the command history. Only the rules
//! engine mutates it; everything else reads through accessors or takes a
//! snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::turn::TurnState;
use crate::core::{CommandRecord, GameId, GameRng, PlayerId, YambError, YambResult};
use crate::dice::DiceSet;
use crate::sheet::Sheet;

/// Lifecycle of a game. `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    InProgress,
    Finished,
}

/// One single-player game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    player: PlayerId,
    pub(crate) status: GameStatus,
    pub(crate) dice: DiceSet,
    pub(crate) turn: TurnState,
    pub(crate) sheet: Sheet,

    /// Turn number (starts at 1).
    pub(crate) turn_number: u32,

    /// Command sequence within the turn.
    pub(crate) sequence: u32,

    /// Applied commands, oldest first.
    pub(crate) history: Vector<CommandRecord>,

    /// Dice stream for this game only.
    pub(crate) rng: GameRng,
}

impl Game {
    /// A fresh game: empty sheet, dice showing six, no rolls taken.
    #[must_use]
    pub fn new(id: GameId, player: PlayerId, rng: GameRng) -> Self {
        Self {
            id,
            player,
            status: GameStatus::InProgress,
            dice: DiceSet::new(),
            turn: TurnState::new(),
            sheet: Sheet::new(),
            turn_number: 1,
            sequence: 0,
            history: Vector::new(),
            rng,
        }
    }

    #[must_use]
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Owning player.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    #[must_use]
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    #[must_use]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    #[must_use]
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    /// Current turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Applied commands, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<CommandRecord> {
        &self.history
    }

    /// The game's RNG.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    // === History ===

    /// Append a record for an applied command.
    pub(crate) fn record(&mut self, record: CommandRecord) {
        self.history.push_back(record);
    }

    /// Next sequence number within the turn.
    pub(crate) fn next_sequence(&mut self) -> u32 {
        let seq = self.sequence;
        self.sequence += 1;
        seq
    }

    /// Move to the next turn.
    pub(crate) fn advance_turn(&mut self) {
        self.turn.end();
        self.dice.release();
        self.turn_number += 1;
        self.sequence = 0;
    }

    // === Checkpoints ===

    /// Encode the whole game, RNG position included.
    pub fn to_bytes(&self) -> YambResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| YambError::Checkpoint(e.to_string()))
    }

    /// Restore a game encoded by [`Game::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> YambResult<Self> {
        bincode::deserialize(bytes).map_err(|e| YambError::Checkpoint(e.to_string()))
    }
}
