//! Rules engine trait.
//!
//! A rules engine defines:
//! - Whether a command is legal for a game right now
//! - How a legal command changes the game
//! - When a game is over
//!
//! Callers go through `apply` so that a rejected command never touches the
//! game.

use crate::catalog::BoxCatalog;
use crate::core::{Command, DiceSource, YambResult};

use super::game::{Game, GameStatus};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `validate`: must not mutate anything, including the RNG
/// - `apply_with`: only called after `validate` succeeded
/// - `candidate_commands`: may over-approximate; `legal_commands` filters
pub trait RulesEngine {
    /// Box catalog used for scoring.
    fn catalog(&self) -> &BoxCatalog;

    /// Check a command against the current game state.
    fn validate(&self, game: &Game, command: &Command) -> YambResult<()>;

    /// Apply a validated command, drawing dice from `dice`.
    fn apply_with(
        &self,
        game: &mut Game,
        command: &Command,
        dice: &mut dyn DiceSource,
    ) -> YambResult<()>;

    /// Commands worth checking in the current state.
    fn candidate_commands(&self, game: &Game) -> Vec<Command>;

    // === Convenience Methods ===

    /// Apply a command using the game's own RNG.
    ///
    /// The RNG only advances when the command succeeds.
    fn apply(&self, game: &mut Game, command: &Command) -> YambResult<()> {
        let mut rng = game.rng.clone();
        self.apply_with(game, command, &mut rng)?;
        game.rng = rng;
        Ok(())
    }

    /// Every command `validate` accepts right now.
    fn legal_commands(&self, game: &Game) -> Vec<Command> {
        self.candidate_commands(game)
            .into_iter()
            .filter(|command| self.validate(game, command).is_ok())
            .collect()
    }

    /// Is the game over?
    fn is_terminal(&self, game: &Game) -> bool {
        game.status() == GameStatus::Finished
    }
}
