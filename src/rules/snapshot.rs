//! Immutable game snapshots for the presentation layer.
//!
//! A snapshot is an owned copy: later commands never change one that was
//! already handed out. Keys serialize in camelCase.

use serde::{Deserialize, Serialize};

use super::game::{Game, GameStatus};
use super::turn::TurnPhase;
use super::yamb::YambEngine;
use crate::catalog::BoxKind;
use crate::core::{GameId, PlayerId};
use crate::dice::{Die, DICE_COUNT};
use crate::sheet::{CellState, ColumnKind};

/// One cell as shown to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub box_type: BoxKind,
    pub state: CellState,
    /// Score once resolved; skipped cells show 0.
    pub value: Option<u32>,
    /// Would FILL be accepted here right now?
    pub available: bool,
}

/// One column with its section totals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView {
    pub column_type: ColumnKind,
    pub boxes: Vec<CellView>,
    pub top_section_sum: i32,
    pub middle_section_sum: i32,
    pub bottom_section_sum: i32,
    pub total_sum: i32,
}

/// The full sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetView {
    pub columns: Vec<ColumnView>,
}

impl SheetView {
    /// View of one column.
    #[must_use]
    pub fn column(&self, column: ColumnKind) -> &ColumnView {
        &self.columns[column.index()]
    }

    /// View of one cell.
    #[must_use]
    pub fn cell(&self, column: ColumnKind, box_kind: BoxKind) -> &CellView {
        &self.column(column).boxes[box_kind.index()]
    }
}

/// Everything the presentation layer renders after a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub id: GameId,
    pub player: PlayerId,
    pub status: GameStatus,
    pub phase: TurnPhase,
    pub sheet: SheetView,
    pub dice: [Die; DICE_COUNT],
    pub roll_count: u8,
    pub announcement: Option<BoxKind>,
    /// An announcement can still be made this turn.
    pub announcement_required: bool,
    /// The next roll is rejected until an announcement is made.
    pub announcement_mandatory: bool,
    pub top_section_sum: i32,
    pub middle_section_sum: i32,
    pub bottom_section_sum: i32,
    pub total_sum: i32,
    pub turn_number: u32,
}

impl GameSnapshot {
    /// Copy out the current state of `game`.
    #[must_use]
    pub fn capture(engine: &YambEngine, game: &Game) -> Self {
        let sheet = game.sheet();
        let columns = ColumnKind::ALL
            .iter()
            .map(|&column| {
                let boxes = BoxKind::ALL
                    .iter()
                    .map(|&box_kind| {
                        let cell = sheet.cell(column, box_kind);
                        CellView {
                            box_type: box_kind,
                            state: cell.state(),
                            value: cell.score(),
                            available: engine.can_fill(game, column, box_kind),
                        }
                    })
                    .collect();
                let totals = sheet.column_totals(column);
                ColumnView {
                    column_type: column,
                    boxes,
                    top_section_sum: totals.top,
                    middle_section_sum: totals.middle,
                    bottom_section_sum: totals.bottom,
                    total_sum: totals.total(),
                }
            })
            .collect();

        let totals = sheet.totals();
        Self {
            id: game.id(),
            player: game.player(),
            status: game.status(),
            phase: engine.phase(game),
            sheet: SheetView { columns },
            dice: *game.dice().dice(),
            roll_count: game.turn().roll_count(),
            announcement: game.turn().announcement(),
            announcement_required: engine.announcement_possible(game),
            announcement_mandatory: engine.announcement_mandatory(game),
            top_section_sum: totals.top,
            middle_section_sum: totals.middle,
            bottom_section_sum: totals.bottom,
            total_sum: totals.total(),
            turn_number: game.turn_number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Command, GameRng, ScriptedDice};
    use crate::dice::DiceSelection;
    use crate::rules::RulesEngine;

    fn setup() -> (YambEngine, Game) {
        let engine = YambEngine::default();
        let game = engine.new_game(GameId::new(5), PlayerId::new(2), GameRng::new(9));
        (engine, game)
    }

    #[test]
    fn test_fresh_snapshot() {
        let (engine, game) = setup();
        let snapshot = engine.snapshot(&game);

        assert_eq!(snapshot.status, GameStatus::InProgress);
        assert_eq!(snapshot.phase, TurnPhase::AwaitingAnnouncementOrRoll);
        assert_eq!(snapshot.roll_count, 0);
        assert!(snapshot.announcement_required);
        assert!(!snapshot.announcement_mandatory);
        assert_eq!(snapshot.total_sum, 0);
        assert_eq!(snapshot.turn_number, 1);
        assert_eq!(snapshot.sheet.columns.len(), 4);
        assert!(snapshot.dice.iter().all(|d| d.value == 6 && !d.held));
        assert!(!snapshot.sheet.cell(ColumnKind::Free, BoxKind::Ones).available);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let (engine, mut game) = setup();
        let before = engine.snapshot(&game);

        let mut dice = ScriptedDice::new([1, 1, 1, 1, 1]);
        engine
            .apply_with(&mut game, &Command::roll_all(), &mut dice)
            .unwrap();
        engine
            .fill(&mut game, ColumnKind::Free, BoxKind::Ones)
            .unwrap();

        assert_eq!(before.roll_count, 0);
        assert_eq!(before.total_sum, 0);
        assert_eq!(
            before.sheet.cell(ColumnKind::Free, BoxKind::Ones).state,
            CellState::Empty
        );

        let after = engine.snapshot(&game);
        let cell = after.sheet.cell(ColumnKind::Free, BoxKind::Ones);
        assert_eq!(cell.state, CellState::Filled);
        assert_eq!(cell.value, Some(5));
        assert_eq!(after.top_section_sum, 5);
        assert_eq!(after.sheet.column(ColumnKind::Free).total_sum, 5);
    }

    #[test]
    fn test_available_cells_after_roll() {
        let (engine, mut game) = setup();
        engine.roll(&mut game, DiceSelection::all()).unwrap();
        let snapshot = engine.snapshot(&game);

        assert!(!snapshot.announcement_required);
        let down = snapshot.sheet.column(ColumnKind::Downward);
        assert!(down.boxes[0].available);
        assert_eq!(down.boxes.iter().filter(|c| c.available).count(), 1);
        let free = snapshot.sheet.column(ColumnKind::Free);
        assert!(free.boxes.iter().all(|c| c.available));
        let announced = snapshot.sheet.column(ColumnKind::Announced);
        assert!(announced.boxes.iter().all(|c| !c.available));
    }

    #[test]
    fn test_camel_case_keys() {
        let (engine, game) = setup();
        let json = serde_json::to_value(engine.snapshot(&game)).unwrap();

        for key in [
            "rollCount",
            "announcementRequired",
            "announcementMandatory",
            "topSectionSum",
            "middleSectionSum",
            "bottomSectionSum",
            "totalSum",
            "turnNumber",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["status"], "IN_PROGRESS");
        assert_eq!(json["sheet"]["columns"][0]["columnType"], "DOWNWARD");
        assert_eq!(json["sheet"]["columns"][0]["boxes"][0]["boxType"], "ONES");
        assert_eq!(json["sheet"]["columns"][0]["boxes"][0]["state"], "EMPTY");
    }
}
