//! Game configuration.
//!
//! `GameConfig::default()` reproduces the standard table:
//! - 12 rounds, grouped in sets of 4
//! - four Citizens next to each signature card
//! - the first seat opens as the Emperor side
//!
//! Points per outcome are fixed by the resolution table and are not
//! configurable.

use serde::{Deserialize, Serialize};

use super::PlayerId;
use crate::error::ConfigError;

/// Decisive rounds in a full game.
pub const MAX_ROUNDS: u32 = 12;

/// Decisive rounds between role swaps.
pub const ROUNDS_PER_SET: u32 = 4;

/// Citizens dealt alongside each signature card.
pub const CITIZENS_PER_HAND: usize = 4;

/// Configuration for one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of decisive rounds before the game ends.
    pub max_rounds: u32,

    /// Decisive rounds per set; roles swap at every set boundary.
    pub rounds_per_set: u32,

    /// Citizens dealt alongside the signature card.
    pub citizens_per_hand: usize,

    /// Seat holding the Emperor side during the first set.
    pub first_emperor: PlayerId,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            rounds_per_set: ROUNDS_PER_SET,
            citizens_per_hand: CITIZENS_PER_HAND,
            first_emperor: PlayerId::FIRST,
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of decisive rounds.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the set length.
    #[must_use]
    pub fn with_rounds_per_set(mut self, rounds: u32) -> Self {
        self.rounds_per_set = rounds;
        self
    }

    /// Set the number of Citizens per hand.
    #[must_use]
    pub fn with_citizens_per_hand(mut self, citizens: usize) -> Self {
        self.citizens_per_hand = citizens;
        self
    }

    /// Choose which seat opens as the Emperor side.
    #[must_use]
    pub fn with_first_emperor(mut self, player: PlayerId) -> Self {
        self.first_emperor = player;
        self
    }

    /// Full hand size (signature plus Citizens).
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.citizens_per_hand + 1
    }

    /// Number of sets in a full game, counting a trailing partial set.
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.max_rounds.div_ceil(self.rounds_per_set.max(1))
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::NoRounds);
        }
        if self.rounds_per_set == 0 {
            return Err(ConfigError::EmptySet);
        }
        if self.citizens_per_hand == 0 {
            return Err(ConfigError::NoCitizens);
        }
        Ok(())
    }
}
