//! Player identification and the player record handed out by the
//! session provider.
//!
//! The engine performs no authentication: whatever `PlayerId` the provider
//! issues is trusted as the owner for every later game command.

use serde::{Deserialize, Serialize};

/// Opaque player identifier issued by a `PlayerProvider`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player record.
///
/// Temporary players are created from a display name alone and carry no
/// credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identity used as game owner.
    pub id: PlayerId,

    /// Display name, unique within a provider.
    pub username: String,

    /// True for players created without registration.
    pub temporary: bool,
}

impl Player {
    /// Create a temporary player record.
    pub fn temporary(id: PlayerId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            temporary: true,
        }
    }
}
