//! Core engine types: identifiers, players, RNG, configuration, commands,
//! errors.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod command;
pub mod error;

pub use entity::{GameId, IdAllocator};
pub use player::{Player, PlayerId};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice, DIE_FACES};
pub use config::{ActiveGamePolicy, EngineConfig, MiddleSectionRule, ScoringConfig};
pub use command::{Command, CommandRecord};
pub use error::{ErrorKind, ErrorNotice, YambError, YambResult};
