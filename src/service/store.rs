//! Keyed game storage.
//!
//! ## Locking
//!
//! Each player has at most one stored game, the latest one.
//!
//! The index maps sit behind one `RwLock`; each game has its own `Mutex`.
//! `with_game` drops the index lock before taking the game lock, so commands
//! for different games never wait on each other and commands for the same
//! game run one at a time.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use rustc_hash::FxHashMap;

use crate::core::{ActiveGamePolicy, GameId, PlayerId, YambError, YambResult};
use crate::rules::Game;

/// A game behind its exclusive section.
pub type SharedGame = Arc<Mutex<Game>>;

#[derive(Debug, Default)]
struct Index {
    games: FxHashMap<GameId, SharedGame>,
    /// Most recent game of each player.
    latest: FxHashMap<PlayerId, GameId>,
}

/// How `start` obtained its game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    Created(GameId),
    Resumed(GameId),
}

impl StartOutcome {
    #[must_use]
    pub fn game_id(self) -> GameId {
        match self {
            StartOutcome::Created(id) | StartOutcome::Resumed(id) => id,
        }
    }
}

/// All games, keyed by id, with a player index.
#[derive(Debug, Default)]
pub struct GameStore {
    index: RwLock<Index>,
}

impl GameStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handle to a stored game.
    pub fn get(&self, id: GameId) -> YambResult<SharedGame> {
        self.read()
            .games
            .get(&id)
            .cloned()
            .ok_or(YambError::GameNotFound(id))
    }

    /// Most recent game of `player`, finished or not.
    #[must_use]
    pub fn latest_for(&self, player: PlayerId) -> Option<GameId> {
        self.read().latest.get(&player).copied()
    }

    /// Run `f` inside the game's exclusive section.
    pub fn with_game<R>(
        &self,
        id: GameId,
        f: impl FnOnce(&mut Game) -> YambResult<R>,
    ) -> YambResult<R> {
        let shared = self.get(id)?;
        let mut game = shared.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut game)
    }

    /// Resume the player's in-progress game or insert one from `create`.
    ///
    /// Under `Reject`, an in-progress game is an error instead. A finished
    /// game is dropped when the new one takes its place.
    pub fn start(
        &self,
        player: PlayerId,
        policy: ActiveGamePolicy,
        create: impl FnOnce() -> Game,
    ) -> YambResult<StartOutcome> {
        let mut index = self.write();

        if let Some(id) = index.latest.get(&player).copied() {
            let in_progress = index.games.get(&id).is_some_and(|shared| {
                !shared
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .is_finished()
            });
            if in_progress {
                return match policy {
                    ActiveGamePolicy::Resume => Ok(StartOutcome::Resumed(id)),
                    ActiveGamePolicy::Reject => {
                        Err(YambError::PlayerAlreadyHasActiveGame(player))
                    }
                };
            }
            index.games.remove(&id);
        }

        let game = create();
        let id = game.id();
        debug_assert_eq!(game.player(), player);
        index.latest.insert(player, id);
        index.games.insert(id, Arc::new(Mutex::new(game)));
        Ok(StartOutcome::Created(id))
    }

    /// Drop `old` and store `game` in its place as the player's latest.
    ///
    /// `old` must be the player's current game.
    pub fn replace(&self, old: GameId, game: Game) -> YambResult<()> {
        let mut index = self.write();
        if index.latest.get(&game.player()) != Some(&old) || index.games.remove(&old).is_none() {
            return Err(YambError::GameNotFound(old));
        }
        index.latest.insert(game.player(), game.id());
        index.games.insert(game.id(), Arc::new(Mutex::new(game)));
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Index> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Index> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }
}
