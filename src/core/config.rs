//! Engine configuration.
//!
//! - `ScoringConfig`: game-content parameters (bonuses, thresholds, the
//!   middle section rule)
//! - `EngineConfig`: scoring plus service policy (seed, active game policy,
//!   username bounds)
//!
//! Scoring payouts vary between Yamb tables, so none of them are hardcoded in
//! the scoring functions; they are read from `ScoringConfig`.

use serde::{Deserialize, Serialize};

/// How the middle section (MAX, MIN) of a column is totalled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MiddleSectionRule {
    /// `(MAX - MIN) * ONES`, counted once all three cells are resolved.
    #[default]
    Difference,
    /// Plain sum of MAX and MIN.
    Sum,
}

/// Game-content scoring parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Top section sum needed for the top bonus.
    pub top_bonus_threshold: u32,

    /// Bonus added to a column's top section once the threshold is reached.
    pub top_bonus: u32,

    /// Added to `3 * face` for TRIPS.
    pub trips_bonus: u32,

    /// Payout for the 1-2-3-4-5 straight.
    pub small_straight: u32,

    /// Payout for the 2-3-4-5-6 straight.
    pub large_straight: u32,

    /// Added to the dice sum for FULL_HOUSE.
    pub full_house_bonus: u32,

    /// Added to `4 * face` for POKER.
    pub poker_bonus: u32,

    /// Added to `5 * face` for YAMB.
    pub yamb_bonus: u32,

    /// Middle section totalling rule.
    pub middle_rule: MiddleSectionRule,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_bonus_threshold: 60,
            top_bonus: 30,
            trips_bonus: 10,
            small_straight: 35,
            large_straight: 45,
            full_house_bonus: 30,
            poker_bonus: 40,
            yamb_bonus: 50,
            middle_rule: MiddleSectionRule::Difference,
        }
    }
}

impl ScoringConfig {
    /// Set the top bonus threshold and payout.
    #[must_use]
    pub fn with_top_bonus(mut self, threshold: u32, bonus: u32) -> Self {
        self.top_bonus_threshold = threshold;
        self.top_bonus = bonus;
        self
    }

    /// Set both straight payouts.
    #[must_use]
    pub fn with_straights(mut self, small: u32, large: u32) -> Self {
        self.small_straight = small;
        self.large_straight = large;
        self
    }

    /// Set the middle section rule.
    #[must_use]
    pub fn with_middle_rule(mut self, rule: MiddleSectionRule) -> Self {
        self.middle_rule = rule;
        self
    }
}

/// What `start` does when the player already has a game in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActiveGamePolicy {
    /// Return the game in progress.
    #[default]
    Resume,
    /// Fail with `PlayerAlreadyHasActiveGame`.
    Reject,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed of the master RNG every game forks from.
    pub seed: u64,

    /// Start behaviour for a player with a game in progress.
    pub active_game_policy: ActiveGamePolicy,

    /// Shortest accepted username (after trimming).
    pub min_username_len: usize,

    /// Longest accepted username (after trimming).
    pub max_username_len: usize,

    /// Scoring parameters.
    pub scoring: ScoringConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            active_game_policy: ActiveGamePolicy::Resume,
            min_username_len: 3,
            max_username_len: 15,
            scoring: ScoringConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Set the master seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the active game policy.
    #[must_use]
    pub fn with_active_game_policy(mut self, policy: ActiveGamePolicy) -> Self {
        self.active_game_policy = policy;
        self
    }

    /// Set username length bounds (inclusive).
    #[must_use]
    pub fn with_username_bounds(mut self, min: usize, max: usize) -> Self {
        assert!(min <= max, "Username minimum must not exceed maximum");
        self.min_username_len = min;
        self.max_username_len = max;
        self
    }

    /// Set the scoring parameters.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }
}
