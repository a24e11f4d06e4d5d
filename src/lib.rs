//! # yamb-engine
//!
//! Rules engine for Yamb, the four-column dice game.
//!
//! ## Design Principles
//!
//! 1. **Validate, then mutate**: every command is checked in full before
//!    anything changes. A rejected command leaves the game untouched,
//!    RNG position included.
//!
//! 2. **One shared fill-order function**: columns are a closed enum and a
//!    single frontier rule serves DOWNWARD and UPWARD.
//!
//! 3. **Pluggable scoring**: the box catalog is a table of pure scoring
//!    functions driven by `ScoringConfig`. Swapping a scorer never touches
//!    the state machine.
//!
//! 4. **Deterministic dice**: each game owns a ChaCha8 stream forked from
//!    the service's master seed, so games replay exactly.
//!
//! ## Modules
//!
//! - `core`: IDs, players, RNG and dice sources, configuration, commands, errors
//! - `dice`: Dice set and reroll selection
//! - `catalog`: Boxes, scoring functions and section totals
//! - `sheet`: Columns, cells and the scoresheet
//! - `rules`: Turn state, the game aggregate, the engine and snapshots
//! - `service`: Player registry, game store and the action service
//!
//! ## Example
//!
//! ```
//! use yamb_engine::{
//!     BoxKind, ColumnKind, DiceSelection, EngineConfig, GameActionService, GameService,
//!     PlayerProvider,
//! };
//!
//! let service = GameService::in_memory(EngineConfig::default());
//! let player = service.players().create_temp_player("ana").unwrap();
//!
//! let game = service.start(player.id).unwrap();
//! service.announce(player.id, game.id, BoxKind::Yamb).unwrap();
//! service.roll(player.id, game.id, DiceSelection::all()).unwrap();
//! let snapshot = service
//!     .fill(player.id, game.id, ColumnKind::Announced, BoxKind::Yamb)
//!     .unwrap();
//!
//! assert_eq!(snapshot.turn_number, 2);
//! assert_eq!(snapshot.roll_count, 0);
//! ```

pub mod catalog;
pub mod core;
pub mod dice;
pub mod rules;
pub mod service;
pub mod sheet;

// Re-export commonly used types
pub use crate::core::{
    ActiveGamePolicy, Command, CommandRecord, DiceSource, EngineConfig, ErrorKind, ErrorNotice,
    GameId, GameRng, GameRngState, MiddleSectionRule, Player, PlayerId, ScoringConfig,
    ScriptedDice, YambError, YambResult,
};

pub use crate::dice::{DiceSelection, DiceSet, Die, DICE_COUNT};

pub use crate::catalog::{BoxCatalog, BoxDefinition, BoxKind, Section, SectionTotals};

pub use crate::sheet::{Cell, CellState, ColumnKind, Sheet};

pub use crate::rules::{
    Game, GameSnapshot, GameStatus, RulesEngine, TurnPhase, TurnState, YambEngine, ROLL_BUDGET,
};

pub use crate::service::{
    GameActionService, GameService, GameStore, InMemoryPlayers, PlayerProvider,
};
