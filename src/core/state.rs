//! Game session state.
//!
//! `GameState` owns everything that changes during a game: both hands,
//! both roles, both scores, the round counter, both pending choices and the
//! terminal status. It is a plain value: the engine computes a new state from
//! an old one, and the session layer stores it whole.
//!
//! Round history uses an `im::Vector` so snapshots taken for
//! compare-and-swap clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{RoundRecord, Turn};
use super::config::GameConfig;
use super::player::{PlayerId, PlayerMap};
use crate::cards::{Card, Hand, Role};
use crate::rules::{rotation, GameResult};

/// Whether the game is still being played.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Finished(GameResult),
}

/// Full state of one E-Card game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current round (1-based, never above `max_rounds`).
    pub(crate) round: u32,

    /// Draw retries so far in the current round.
    pub(crate) attempt: u32,

    pub(crate) roles: PlayerMap<Role>,
    pub(crate) hands: PlayerMap<Hand>,
    pub(crate) scores: PlayerMap<u32>,

    /// Cards committed for the current attempt. Hidden from the opponent.
    pub(crate) choices: PlayerMap<Option<Card>>,

    pub(crate) status: Status,

    /// Every resolved attempt, oldest first.
    pub(crate) history: Vector<RoundRecord>,
}

impl GameState {
    /// Fresh game: round 1, zero scores, roles and hands for the first set.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let roles = rotation::roles_for_round(config, 1);
        Self {
            round: 1,
            attempt: 0,
            hands: roles.map(|_, &role| Hand::deal(role, config.citizens_per_hand)),
            roles,
            scores: PlayerMap::with_value(0),
            choices: PlayerMap::with_value(None),
            status: Status::InProgress,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Round and attempt together.
    #[must_use]
    pub fn turn(&self) -> Turn {
        Turn::new(self.round, self.attempt)
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Finished(_))
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match &self.status {
            Status::Finished(result) => Some(result),
            Status::InProgress => None,
        }
    }

    #[must_use]
    pub fn role(&self, player: PlayerId) -> Role {
        self.roles[player]
    }

    #[must_use]
    pub fn roles(&self) -> &PlayerMap<Role> {
        &self.roles
    }

    /// Seat currently holding `role`.
    #[must_use]
    pub fn holder(&self, role: Role) -> PlayerId {
        // Roles are exhaustive over both seats.
        if self.roles[PlayerId::FIRST] == role {
            PlayerId::FIRST
        } else {
            PlayerId::SECOND
        }
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.scores[player]
    }

    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.scores
    }

    /// Committed card for `player`, if any.
    #[must_use]
    pub fn choice(&self, player: PlayerId) -> Option<Card> {
        self.choices[player]
    }

    #[must_use]
    pub fn has_committed(&self, player: PlayerId) -> bool {
        self.choices[player].is_some()
    }

    /// Both seats have a pending choice and the round can be resolved.
    #[must_use]
    pub fn both_committed(&self) -> bool {
        self.choices.values().all(Option::is_some)
    }

    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// The most recently resolved attempt.
    #[must_use]
    pub fn last_record(&self) -> Option<&RoundRecord> {
        self.history.last()
    }

    /// Decisive rounds played so far.
    #[must_use]
    pub fn completed_rounds(&self) -> u32 {
        match self.status {
            Status::Finished(_) => self.round,
            Status::InProgress => self.round - 1,
        }
    }

    /// Seats that still owe a choice this attempt.
    pub fn awaiting(&self) -> impl Iterator<Item = PlayerId> + '_ {
        PlayerId::all().filter(|&p| !self.has_committed(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(&GameConfig::default());

        assert_eq!(state.round(), 1);
        assert_eq!(state.attempt(), 0);
        assert_eq!(state.turn(), Turn::OPENING);
        assert_eq!(state.status(), &Status::InProgress);
        assert_eq!(state.role(PlayerId::FIRST), Role::Emperor);
        assert_eq!(state.role(PlayerId::SECOND), Role::Slave);
        assert_eq!(state.holder(Role::Slave), PlayerId::SECOND);
        assert_eq!(state.completed_rounds(), 0);
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_new_state_hands_fit_roles() {
        let state = GameState::new(&GameConfig::default().with_first_emperor(PlayerId::SECOND));

        for player in PlayerId::all() {
            let hand = state.hand(player);
            assert_eq!(hand.len(), 5);
            assert!(hand.fits_role(state.role(player)));
        }
        assert_eq!(state.hand(PlayerId::SECOND).get(0), Some(Card::Emperor));
    }

    #[test]
    fn test_choices_start_empty() {
        let state = GameState::new(&GameConfig::default());

        assert!(!state.both_committed());
        assert_eq!(state.awaiting().count(), 2);
        assert_eq!(state.choice(PlayerId::FIRST), None);
    }

    #[test]
    fn test_state_serde() {
        let state = GameState::new(&GameConfig::default());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, back);
    }
}
