//! Player actions and the round history.
//!
//! A [`Play`] is what the presentation layer submits: the seat, the card it
//! believes it is playing, and where that card sits in its hand. Carrying
//! both lets the engine reject a card that is not where the caller says.
//!
//! A [`Turn`] names one attempt of one round. Remote callers echo back the
//! turn they were shown so a resent request cannot land in a later attempt.
//!
//! A [`RoundRecord`] is appended for every resolved attempt, draws included.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::PlayerId;
use crate::cards::Card;
use crate::rules::RoundOutcome;

/// A card commitment for the current round.
///
/// ## Example
///
/// ```
/// use ecard::cards::Card;
/// use ecard::core::{Play, PlayerId};
///
/// let play = Play::new(PlayerId::FIRST, Card::Citizen, 1);
/// assert_eq!(play.hand_index, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: Card,
    pub hand_index: usize,
}

impl Play {
    #[must_use]
    pub const fn new(player: PlayerId, card: Card, hand_index: usize) -> Self {
        Self {
            player,
            card,
            hand_index,
        }
    }
}

/// Position within a game: round counter plus draw retries so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Turn {
    pub round: u32,
    pub attempt: u32,
}

impl Turn {
    /// First attempt of the first round.
    pub const OPENING: Turn = Turn::new(1, 0);

    #[must_use]
    pub const fn new(round: u32, attempt: u32) -> Self {
        Self { round, attempt }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "round {} attempt {}", self.round, self.attempt + 1)
    }
}

/// One resolved attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round counter at resolution time (1-based).
    pub round: u32,

    /// Draw retries that preceded this attempt within the round (0-based).
    pub attempt: u32,

    /// Seat that held the Emperor side.
    pub emperor: PlayerId,

    /// Card played by the Emperor side.
    pub emperor_card: Card,

    /// Card played by the Slave side.
    pub slave_card: Card,

    pub outcome: RoundOutcome,
}

impl RoundRecord {
    #[must_use]
    pub fn turn(&self) -> Turn {
        Turn::new(self.round, self.attempt)
    }

    /// Seat that won the attempt, or `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        use crate::cards::Role;

        self.outcome.winner.role().map(|role| match role {
            Role::Emperor => self.emperor,
            Role::Slave => self.emperor.opponent(),
        })
    }

    /// Seat that held the Slave side.
    #[must_use]
    pub fn slave(&self) -> PlayerId {
        self.emperor.opponent()
    }

    /// Card played by `player`.
    #[must_use]
    pub fn card_of(&self, player: PlayerId) -> Card {
        if player == self.emperor {
            self.emperor_card
        } else {
            self.slave_card
        }
    }
}
