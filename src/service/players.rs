//! Player registry.

use std::sync::{PoisonError, RwLock};

use rustc_hash::FxHashMap;
use tracing::info;

use crate::core::{EngineConfig, IdAllocator, Player, PlayerId, YambError, YambResult};

/// Source of player identities.
pub trait PlayerProvider: Send + Sync {
    /// Register a temporary player under `username`.
    fn create_temp_player(&self, username: &str) -> YambResult<Player>;

    /// Look up a registered player.
    fn player(&self, id: PlayerId) -> YambResult<Player>;
}

#[derive(Debug, Default)]
struct Registry {
    by_id: FxHashMap<PlayerId, Player>,
    by_name: FxHashMap<String, PlayerId>,
}

/// In-process player registry with unique usernames.
#[derive(Debug)]
pub struct InMemoryPlayers {
    registry: RwLock<Registry>,
    ids: IdAllocator,
    min_len: usize,
    max_len: usize,
}

impl InMemoryPlayers {
    /// Registry accepting usernames of `min_len..=max_len` characters.
    #[must_use]
    pub fn new(min_len: usize, max_len: usize) -> Self {
        assert!(min_len <= max_len, "Username minimum must not exceed maximum");
        Self {
            registry: RwLock::new(Registry::default()),
            ids: IdAllocator::new(),
            min_len,
            max_len,
        }
    }

    /// Registry using the configured username bounds.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.min_username_len, config.max_username_len)
    }

    /// Number of registered players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_id
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_username(&self, username: &str) -> YambResult<()> {
        let len = username.chars().count();
        if len < self.min_len || len > self.max_len {
            return Err(YambError::InvalidUsername {
                min: self.min_len,
                max: self.max_len,
            });
        }
        Ok(())
    }
}

impl Default for InMemoryPlayers {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl PlayerProvider for InMemoryPlayers {
    fn create_temp_player(&self, username: &str) -> YambResult<Player> {
        let username = username.trim();
        self.check_username(username)?;

        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        if registry.by_name.contains_key(username) {
            return Err(YambError::UsernameTaken(username.to_string()));
        }

        let player = Player::temporary(PlayerId::new(self.ids.next_raw()), username);
        registry.by_name.insert(player.username.clone(), player.id);
        registry.by_id.insert(player.id, player.clone());
        info!(player = %player.id, username = %player.username, "player created");
        Ok(player)
    }

    fn player(&self, id: PlayerId) -> YambResult<Player> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_id
            .get(&id)
            .cloned()
            .ok_or(YambError::PlayerNotFound(id))
    }
}
