//! Role rotation by set.
//!
//! Rounds are grouped into sets of `rounds_per_set`. The configured first
//! Emperor holds the Emperor side on even-indexed sets (0, 2, ...) and the
//! Slave side on odd-indexed sets. Roles therefore swap every time the round
//! counter crosses a set boundary and are never reassigned mid-set.

use crate::cards::Role;
use crate::core::{GameConfig, PlayerId, PlayerMap};

/// 0-based set index for a 1-based round.
#[must_use]
pub fn set_index(config: &GameConfig, round: u32) -> u32 {
    round.saturating_sub(1) / config.rounds_per_set.max(1)
}

/// 1-based set number for display.
#[must_use]
pub fn set_number(config: &GameConfig, round: u32) -> u32 {
    set_index(config, round) + 1
}

/// Seat holding the Emperor side during `round`.
#[must_use]
pub fn emperor_for_round(config: &GameConfig, round: u32) -> PlayerId {
    if set_index(config, round) % 2 == 0 {
        config.first_emperor
    } else {
        config.first_emperor.opponent()
    }
}

/// Role assignment for both seats during `round`.
#[must_use]
pub fn roles_for_round(config: &GameConfig, round: u32) -> PlayerMap<Role> {
    let emperor = emperor_for_round(config, round);
    PlayerMap::new(|p| if p == emperor { Role::Emperor } else { Role::Slave })
}

/// Whether moving from `round` to `round + 1` crosses a set boundary.
#[must_use]
pub fn rotates_after(config: &GameConfig, round: u32) -> bool {
    set_index(config, round) != set_index(config, round + 1)
}
