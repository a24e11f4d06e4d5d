//! Player registry, game store and the action service on top of them.
//!
//! ## Concurrency
//!
//! `GameService` is `Sync` when its player provider is. Commands for one
//! game are serialized by that game's lock; different games proceed in
//! parallel.

mod game_service;
mod players;
mod store;

pub use game_service::{GameActionService, GameService};
pub use players::{InMemoryPlayers, PlayerProvider};
pub use store::{GameStore, SharedGame, StartOutcome};
