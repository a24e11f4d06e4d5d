//! The Yamb rules engine.
//!
//! ## Command Validation
//!
//! Every command is checked in full before anything changes:
//!
//! 1. A finished game accepts nothing.
//! 2. ROLL: mandatory announcement, then roll budget.
//! 3. ANNOUNCE: window and uniqueness, then the target cell must be empty.
//! 4. FILL: at least one roll, the ANNOUNCED binding, then column order.
//! 5. SKIP: ordered column, then column order.
//!
//! FILL and SKIP end the turn. The turn that resolves the last empty cell
//! finishes the game.

use std::sync::Arc;

use tracing::{debug, info};

use super::engine::RulesEngine;
use super::game::{Game, GameStatus};
use super::snapshot::GameSnapshot;
use super::turn::TurnPhase;
use crate::catalog::{BoxCatalog, BoxKind};
use crate::core::{
    Command, CommandRecord, DiceSource, GameId, GameRng, PlayerId, YambError, YambResult,
};
use crate::dice::DiceSelection;
use crate::sheet::ColumnKind;

/// Yamb rules over a shared box catalog.
#[derive(Clone, Debug, Default)]
pub struct YambEngine {
    catalog: Arc<BoxCatalog>,
}

impl YambEngine {
    #[must_use]
    pub fn new(catalog: BoxCatalog) -> Self {
        Self::with_catalog(Arc::new(catalog))
    }

    /// Share an existing catalog.
    #[must_use]
    pub fn with_catalog(catalog: Arc<BoxCatalog>) -> Self {
        Self { catalog }
    }

    /// Start a game for `player`.
    #[must_use]
    pub fn new_game(&self, id: GameId, player: PlayerId, rng: GameRng) -> Game {
        info!(game = %id, player = %player, seed = rng.seed(), "game created");
        Game::new(id, player, rng)
    }

    // === Queries ===

    /// Where the game is within its turn.
    #[must_use]
    pub fn phase(&self, game: &Game) -> TurnPhase {
        if game.is_finished() {
            TurnPhase::GameFinished
        } else {
            game.turn().phase()
        }
    }

    /// Can an announcement still be made this turn?
    #[must_use]
    pub fn announcement_possible(&self, game: &Game) -> bool {
        !game.is_finished()
            && game.turn().announcement_open()
            && !game.sheet().is_column_complete(ColumnKind::Announced)
    }

    /// Must the next roll be preceded by an announcement?
    ///
    /// True once only ANNOUNCED cells are left and none is announced yet.
    #[must_use]
    pub fn announcement_mandatory(&self, game: &Game) -> bool {
        let sheet = game.sheet();
        self.announcement_possible(game)
            && ColumnKind::ALL
                .iter()
                .filter(|&&c| c != ColumnKind::Announced)
                .all(|&c| sheet.is_column_complete(c))
    }

    /// Would FILL into (column, box) be accepted now?
    #[must_use]
    pub fn can_fill(&self, game: &Game, column: ColumnKind, box_kind: BoxKind) -> bool {
        self.validate(game, &Command::Fill { column, box_kind }).is_ok()
    }

    /// Immutable view of the game.
    #[must_use]
    pub fn snapshot(&self, game: &Game) -> GameSnapshot {
        GameSnapshot::capture(self, game)
    }

    // === Commands ===

    /// Roll the selected dice with the game's RNG.
    pub fn roll(&self, game: &mut Game, dice: DiceSelection) -> YambResult<()> {
        self.apply(game, &Command::Roll { dice })
    }

    /// Announce a box for the ANNOUNCED column.
    pub fn announce(&self, game: &mut Game, box_kind: BoxKind) -> YambResult<()> {
        self.apply(game, &Command::Announce { box_kind })
    }

    /// Score the current dice into a cell. Returns the score.
    pub fn fill(&self, game: &mut Game, column: ColumnKind, box_kind: BoxKind) -> YambResult<u32> {
        self.apply(game, &Command::Fill { column, box_kind })?;
        Ok(game.sheet().cell(column, box_kind).score().unwrap_or_default())
    }

    /// Pass the frontier box of an ordered column.
    pub fn skip(&self, game: &mut Game, column: ColumnKind, box_kind: BoxKind) -> YambResult<()> {
        self.apply(game, &Command::Skip { column, box_kind })
    }

    // === Validation ===

    fn check_roll(&self, game: &Game) -> YambResult<()> {
        if self.announcement_mandatory(game) {
            return Err(YambError::AnnouncementRequired);
        }
        game.turn().check_roll()
    }

    fn check_announce(&self, game: &Game, box_kind: BoxKind) -> YambResult<()> {
        game.turn().check_announce()?;
        if game.sheet().cell(ColumnKind::Announced, box_kind).is_resolved() {
            return Err(YambError::CellAlreadyResolved {
                column: ColumnKind::Announced,
                box_kind,
            });
        }
        Ok(())
    }

    fn check_fill(&self, game: &Game, column: ColumnKind, box_kind: BoxKind) -> YambResult<()> {
        if game.turn().roll_count() == 0 {
            return Err(YambError::InvalidCommandForState {
                reason: "roll at least once before filling",
            });
        }
        if column == ColumnKind::Announced {
            game.turn().check_announced_fill(box_kind)?;
        }
        column.check_order(game.sheet().column(column), box_kind)
    }

    // === Mutation ===

    fn end_turn(&self, game: &mut Game) {
        game.advance_turn();
        if game.sheet().is_complete() {
            game.status = GameStatus::Finished;
            info!(
                game = %game.id(),
                total = game.sheet().totals().total(),
                "game finished"
            );
        }
    }
}

impl RulesEngine for YambEngine {
    fn catalog(&self) -> &BoxCatalog {
        &self.catalog
    }

    fn validate(&self, game: &Game, command: &Command) -> YambResult<()> {
        if game.is_finished() {
            return Err(YambError::GameFinished(game.id()));
        }
        match *command {
            Command::Roll { .. } => self.check_roll(game),
            Command::Announce { box_kind } => self.check_announce(game, box_kind),
            Command::Fill { column, box_kind } => self.check_fill(game, column, box_kind),
            Command::Skip { column, box_kind } => game.sheet().check_skip(column, box_kind),
        }
    }

    fn apply_with(
        &self,
        game: &mut Game,
        command: &Command,
        dice: &mut dyn DiceSource,
    ) -> YambResult<()> {
        if let Err(err) = self.validate(game, command) {
            debug!(game = %game.id(), command = %command, kind = %err.kind(), "command rejected");
            return Err(err);
        }

        let turn = game.turn_number();
        match command {
            Command::Roll { dice: selection } => {
                let selection = if game.turn().roll_count() == 0 {
                    DiceSelection::all()
                } else {
                    selection.clone()
                };
                game.dice.roll(&selection, dice);
                game.turn.record_roll();
            }
            Command::Announce { box_kind } => game.turn.announce(*box_kind),
            Command::Fill { column, box_kind } => {
                let values = game.dice().values();
                game.sheet.fill(*column, *box_kind, &values, &self.catalog)?;
            }
            Command::Skip { column, box_kind } => {
                game.sheet.skip(*column, *box_kind, &self.catalog)?;
            }
        }

        let sequence = game.next_sequence();
        game.record(CommandRecord {
            command: command.clone(),
            turn,
            sequence,
            dice: game.dice().values(),
        });
        debug!(
            game = %game.id(),
            turn,
            command = %command,
            rolls = game.turn().roll_count(),
            "command applied"
        );

        if command.resolves_cell() {
            self.end_turn(game);
        }
        Ok(())
    }

    fn candidate_commands(&self, game: &Game) -> Vec<Command> {
        if game.is_finished() {
            return Vec::new();
        }

        let sheet = game.sheet();
        let mut commands = vec![Command::roll_all()];
        commands.extend(BoxKind::ALL.iter().map(|&box_kind| Command::Announce { box_kind }));
        for column in ColumnKind::ALL {
            for box_kind in sheet.open_boxes(column) {
                commands.push(Command::Fill { column, box_kind });
                if column.is_ordered() {
                    commands.push(Command::Skip { column, box_kind });
                }
            }
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;
    use crate::sheet::Cell;

    fn setup() -> (YambEngine, Game) {
        let engine = YambEngine::default();
        let game = engine.new_game(GameId::new(1), PlayerId::new(1), GameRng::new(42));
        (engine, game)
    }

    fn roll_scripted(engine: &YambEngine, game: &mut Game, values: [u8; 5]) {
        let mut dice = ScriptedDice::new(values);
        engine
            .apply_with(game, &Command::roll_all(), &mut dice)
            .unwrap();
    }

    #[test]
    fn test_first_roll_rolls_everything() {
        let (engine, mut game) = setup();
        let mut dice = ScriptedDice::new([1, 2, 3, 4, 5]);
        let roll = Command::Roll {
            dice: DiceSelection::none(),
        };

        engine.apply_with(&mut game, &roll, &mut dice).unwrap();

        assert_eq!(game.dice().values(), [1, 2, 3, 4, 5]);
        assert_eq!(dice.drawn(), 5);
        assert_eq!(engine.phase(&game), TurnPhase::AwaitingRollOrFill);
    }

    #[test]
    fn test_reroll_keeps_unselected() {
        let (engine, mut game) = setup();
        roll_scripted(&engine, &mut game, [1, 2, 3, 4, 5]);

        let mut dice = ScriptedDice::new([6]);
        let roll = Command::Roll {
            dice: DiceSelection::from_indices([0, 4]).unwrap(),
        };
        engine.apply_with(&mut game, &roll, &mut dice).unwrap();

        assert_eq!(game.dice().values(), [6, 2, 3, 4, 6]);
        assert!(!game.dice().dice()[0].held);
        assert!(game.dice().dice()[1].held);
    }

    #[test]
    fn test_roll_budget_enforced() {
        let (engine, mut game) = setup();
        for _ in 0..3 {
            engine.roll(&mut game, DiceSelection::all()).unwrap();
        }
        assert_eq!(engine.phase(&game), TurnPhase::AwaitingFill);

        let before = game.dice().values();
        let rng_before = game.rng().state();
        let err = engine.roll(&mut game, DiceSelection::all()).unwrap_err();

        assert_eq!(err, YambError::RollBudgetExhausted { budget: 3 });
        assert_eq!(game.dice().values(), before);
        assert_eq!(game.rng().state(), rng_before);
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn test_fill_before_roll_rejected() {
        let (engine, mut game) = setup();
        let err = engine
            .fill(&mut game, ColumnKind::Free, BoxKind::Ones)
            .unwrap_err();
        assert!(matches!(err, YambError::InvalidCommandForState { .. }));
    }

    #[test]
    fn test_fill_scores_and_ends_turn() {
        let (engine, mut game) = setup();
        roll_scripted(&engine, &mut game, [2, 2, 5, 5, 5]);

        let score = engine
            .fill(&mut game, ColumnKind::Free, BoxKind::FullHouse)
            .unwrap();

        assert_eq!(score, 49);
        assert_eq!(game.turn_number(), 2);
        assert_eq!(game.turn().roll_count(), 0);
        assert!(game.dice().dice().iter().all(|d| !d.held));
        assert_eq!(game.sheet().totals().bottom, 49);
    }

    #[test]
    fn test_skip_allowed_without_roll() {
        let (engine, mut game) = setup();
        engine
            .skip(&mut game, ColumnKind::Downward, BoxKind::Ones)
            .unwrap();
        assert_eq!(
            game.sheet().cell(ColumnKind::Downward, BoxKind::Ones),
            Cell::Skipped
        );
        assert_eq!(game.turn_number(), 2);
    }

    #[test]
    fn test_announce_then_fill() {
        let (engine, mut game) = setup();
        engine.announce(&mut game, BoxKind::Yamb).unwrap();
        roll_scripted(&engine, &mut game, [4, 4, 4, 4, 4]);

        let err = engine
            .fill(&mut game, ColumnKind::Announced, BoxKind::Poker)
            .unwrap_err();
        assert_eq!(
            err,
            YambError::AnnouncementMismatch {
                announced: BoxKind::Yamb,
                requested: BoxKind::Poker
            }
        );

        assert_eq!(
            engine.fill(&mut game, ColumnKind::Announced, BoxKind::Yamb),
            Ok(70)
        );
        assert_eq!(game.turn().announcement(), None);
    }

    #[test]
    fn test_announced_box_already_resolved() {
        let (engine, mut game) = setup();
        engine.announce(&mut game, BoxKind::Ones).unwrap();
        roll_scripted(&engine, &mut game, [1, 1, 1, 2, 3]);
        engine
            .fill(&mut game, ColumnKind::Announced, BoxKind::Ones)
            .unwrap();

        assert_eq!(
            engine.announce(&mut game, BoxKind::Ones),
            Err(YambError::CellAlreadyResolved {
                column: ColumnKind::Announced,
                box_kind: BoxKind::Ones
            })
        );
    }

    #[test]
    fn test_history_records_commands() {
        let (engine, mut game) = setup();
        roll_scripted(&engine, &mut game, [3, 3, 3, 3, 1]);
        engine
            .fill(&mut game, ColumnKind::Free, BoxKind::Threes)
            .unwrap();

        let history = game.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].turn, 1);
        assert_eq!(history[0].sequence, 0);
        assert_eq!(history[0].dice, [3, 3, 3, 3, 1]);
        assert_eq!(history[1].sequence, 1);
        assert!(history[1].command.resolves_cell());
    }

    #[test]
    fn test_legal_commands_at_turn_start() {
        let (engine, game) = setup();
        let legal = engine.legal_commands(&game);

        assert!(legal.contains(&Command::roll_all()));
        assert!(legal.contains(&Command::Announce {
            box_kind: BoxKind::Max
        }));
        assert!(legal.contains(&Command::Skip {
            column: ColumnKind::Upward,
            box_kind: BoxKind::Yamb
        }));
        assert!(!legal.iter().any(|c| matches!(c, Command::Fill { .. })));
        // 1 roll + 13 announcements + 2 skips
        assert_eq!(legal.len(), 16);
    }

    #[test]
    fn test_legal_commands_after_roll() {
        let (engine, mut game) = setup();
        engine.roll(&mut game, DiceSelection::all()).unwrap();
        let legal = engine.legal_commands(&game);

        assert!(!legal.iter().any(|c| matches!(c, Command::Announce { .. })));
        assert!(legal.contains(&Command::Fill {
            column: ColumnKind::Downward,
            box_kind: BoxKind::Ones
        }));
        assert!(!legal.contains(&Command::Fill {
            column: ColumnKind::Downward,
            box_kind: BoxKind::Twos
        }));
        assert!(!legal.iter().any(|c| matches!(
            c,
            Command::Fill {
                column: ColumnKind::Announced,
                ..
            }
        )));
        for command in &legal {
            assert!(engine.validate(&game, command).is_ok());
        }
    }
}
