//! Turn rules, the game aggregate and the engine that drives it.
//!
//! `YambEngine` implements `RulesEngine`. It validates one command at a
//! time against the turn and sheet state, then mutates the game and
//! records the command in its history.

pub mod engine;
mod game;
mod snapshot;
mod turn;
mod yamb;

pub use engine::RulesEngine;
pub use game::{Game, GameStatus};
pub use snapshot::{CellView, ColumnView, GameSnapshot, SheetView};
pub use turn::{TurnPhase, TurnState, ROLL_BUDGET};
pub use yamb::YambEngine;
