//! The game action service.
//!
//! Every call names the acting player and, except `start`, a game id. The
//! service checks ownership, runs the command inside the game's exclusive
//! section and answers with a fresh snapshot.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use super::players::{InMemoryPlayers, PlayerProvider};
use super::store::{GameStore, StartOutcome};
use crate::catalog::{BoxCatalog, BoxKind};
use crate::core::{
    Command, EngineConfig, GameId, GameRng, IdAllocator, PlayerId, YambError, YambResult,
};
use crate::dice::DiceSelection;
use crate::rules::{Game, GameSnapshot, RulesEngine, YambEngine};
use crate::sheet::ColumnKind;

/// Request/response surface for a presentation layer.
pub trait GameActionService {
    /// Start a game for `player`, or resume the one in progress.
    fn start(&self, player: PlayerId) -> YambResult<GameSnapshot>;

    /// Current snapshot of a game.
    fn game(&self, player: PlayerId, game: GameId) -> YambResult<GameSnapshot>;

    /// Apply one command.
    fn apply(&self, player: PlayerId, game: GameId, command: Command) -> YambResult<GameSnapshot>;

    /// Replace a game with a fresh one for the same player.
    fn restart(&self, player: PlayerId, game: GameId) -> YambResult<GameSnapshot>;

    // === Convenience Methods ===

    fn roll(&self, player: PlayerId, game: GameId, dice: DiceSelection) -> YambResult<GameSnapshot> {
        self.apply(player, game, Command::Roll { dice })
    }

    fn announce(&self, player: PlayerId, game: GameId, box_kind: BoxKind) -> YambResult<GameSnapshot> {
        self.apply(player, game, Command::Announce { box_kind })
    }

    fn fill(
        &self,
        player: PlayerId,
        game: GameId,
        column: ColumnKind,
        box_kind: BoxKind,
    ) -> YambResult<GameSnapshot> {
        self.apply(player, game, Command::Fill { column, box_kind })
    }

    fn skip(
        &self,
        player: PlayerId,
        game: GameId,
        column: ColumnKind,
        box_kind: BoxKind,
    ) -> YambResult<GameSnapshot> {
        self.apply(player, game, Command::Skip { column, box_kind })
    }
}

/// In-process game service.
pub struct GameService<P> {
    engine: YambEngine,
    store: GameStore,
    players: P,
    ids: IdAllocator,
    /// Every new game forks its RNG from here.
    master_rng: Mutex<GameRng>,
    config: EngineConfig,
}

impl GameService<InMemoryPlayers> {
    /// Service with an in-memory player registry.
    #[must_use]
    pub fn in_memory(config: EngineConfig) -> Self {
        let players = InMemoryPlayers::from_config(&config);
        Self::new(config, players)
    }
}

impl<P: PlayerProvider> GameService<P> {
    #[must_use]
    pub fn new(config: EngineConfig, players: P) -> Self {
        let catalog = BoxCatalog::new(config.scoring.clone());
        Self::with_engine(config, players, YambEngine::new(catalog))
    }

    /// Use a custom engine, e.g. one with replaced scorers.
    #[must_use]
    pub fn with_engine(config: EngineConfig, players: P, engine: YambEngine) -> Self {
        Self {
            engine,
            store: GameStore::new(),
            players,
            ids: IdAllocator::new(),
            master_rng: Mutex::new(GameRng::new(config.seed)),
            config,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &YambEngine {
        &self.engine
    }

    #[must_use]
    pub fn players(&self) -> &P {
        &self.players
    }

    #[must_use]
    pub fn store(&self) -> &GameStore {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn create_game(&self, player: PlayerId) -> Game {
        let rng = self
            .master_rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fork();
        self.engine.new_game(self.ids.next_game(), player, rng)
    }

    /// Run `f` on an owned game inside its exclusive section.
    fn with_owned<R>(
        &self,
        player: PlayerId,
        id: GameId,
        f: impl FnOnce(&mut Game) -> YambResult<R>,
    ) -> YambResult<R> {
        self.store.with_game(id, |game| {
            if game.player() != player {
                return Err(YambError::NotOwner { player, game: id });
            }
            f(game)
        })
    }
}

impl<P: PlayerProvider> GameActionService for GameService<P> {
    fn start(&self, player: PlayerId) -> YambResult<GameSnapshot> {
        self.players.player(player)?;

        let outcome = self
            .store
            .start(player, self.config.active_game_policy, || self.create_game(player))?;
        if let StartOutcome::Resumed(id) = outcome {
            info!(game = %id, player = %player, "game resumed");
        }
        self.game(player, outcome.game_id())
    }

    fn game(&self, player: PlayerId, game: GameId) -> YambResult<GameSnapshot> {
        self.with_owned(player, game, |game| Ok(self.engine.snapshot(game)))
    }

    fn apply(&self, player: PlayerId, game: GameId, command: Command) -> YambResult<GameSnapshot> {
        self.with_owned(player, game, |game| {
            self.engine.apply(game, &command)?;
            Ok(self.engine.snapshot(game))
        })
    }

    fn restart(&self, player: PlayerId, game: GameId) -> YambResult<GameSnapshot> {
        self.with_owned(player, game, |_| Ok(()))?;

        let fresh = self.create_game(player);
        let fresh_id = fresh.id();
        self.store.replace(game, fresh)?;
        info!(old = %game, game = %fresh_id, player = %player, "game restarted");
        self.game(player, fresh_id)
    }
}
