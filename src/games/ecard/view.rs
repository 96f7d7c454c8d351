//! Player view of game state.
//!
//! `PlayerView` is everything one seat may see at a decision point: its own
//! hand and pending choice, the opponent's hand size and whether the
//! opponent has committed (never which card), scores, round and set
//! position, and the last revealed attempt. It is what the presentation
//! layer renders and what automated agents decide from.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Role};
use crate::core::{GameConfig, GameState, Play, PlayerId, RoundRecord, Status, Turn};
use crate::rules::{rotation, GameResult, RoundWinner};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub player: PlayerId,
    pub role: Role,
    pub hand: Vec<Card>,
    pub opponent_hand_size: usize,

    /// The card this seat committed for the current attempt.
    pub committed: Option<Card>,
    pub opponent_committed: bool,

    pub round: u32,
    pub attempt: u32,
    pub max_rounds: u32,
    pub set_number: u32,
    pub total_sets: u32,

    pub score: u32,
    pub opponent_score: u32,

    /// Most recent resolved attempt, both cards revealed.
    pub last_round: Option<RoundRecord>,
    pub status: Status,
}

impl PlayerView {
    pub(crate) fn new(config: &GameConfig, state: &GameState, player: PlayerId) -> Self {
        let opponent = player.opponent();
        Self {
            player,
            role: state.role(player),
            hand: state.hand(player).cards().to_vec(),
            opponent_hand_size: state.hand(opponent).len(),
            committed: state.choice(player),
            opponent_committed: state.has_committed(opponent),
            round: state.round(),
            attempt: state.attempt(),
            max_rounds: config.max_rounds,
            set_number: rotation::set_number(config, state.round()),
            total_sets: config.total_sets(),
            score: state.score(player),
            opponent_score: state.score(opponent),
            last_round: state.last_record().cloned(),
            status: state.status().clone(),
        }
    }

    /// The attempt this view was taken at; submit it back with a choice.
    #[must_use]
    pub fn turn(&self) -> Turn {
        Turn::new(self.round, self.attempt)
    }

    /// This seat still owes a choice for the current attempt.
    #[must_use]
    pub fn can_play(&self) -> bool {
        self.status == Status::InProgress && self.committed.is_none() && !self.hand.is_empty()
    }

    /// Plays available to this seat.
    #[must_use]
    pub fn legal_plays(&self) -> Vec<Play> {
        if !self.can_play() {
            return vec![];
        }
        self.hand
            .iter()
            .enumerate()
            .map(|(index, &card)| Play::new(self.player, card, index))
            .collect()
    }

    /// One-line status for display, written from this seat's perspective.
    #[must_use]
    pub fn headline(&self) -> String {
        if let Status::Finished(result) = &self.status {
            return match result {
                GameResult::Winner(p) if *p == self.player => {
                    format!("Game over! You win the gamble, {} to {}.", self.score, self.opponent_score)
                }
                GameResult::Winner(_) => format!(
                    "Game over! Your opponent wins the gamble, {} to {}.",
                    self.opponent_score, self.score
                ),
                GameResult::Draw => format!("Game over! No one wins the gamble at {} apiece.", self.score),
            };
        }

        let position = format!(
            "Match {}/{}. Set {}/{}. You are the {}.",
            self.round, self.max_rounds, self.set_number, self.total_sets, self.role
        );
        match (self.committed, self.opponent_committed) {
            (None, _) => format!("{position} Choose your card."),
            (Some(_), false) => format!("{position} Waiting for your opponent."),
            (Some(_), true) => format!("{position} Both cards are down."),
        }
    }

    /// Description of the last revealed attempt, if any.
    #[must_use]
    pub fn last_round_summary(&self) -> Option<String> {
        let record = self.last_round.as_ref()?;
        let emperor = record.emperor_card;
        let slave = record.slave_card;
        Some(match record.outcome.winner {
            RoundWinner::Draw => {
                format!("{emperor} meets {slave}. It's a draw! The cards are discarded.")
            }
            RoundWinner::Side(role) => format!(
                "{emperor} meets {slave}. The {role} wins and gets {} point(s)!",
                record.outcome.points
            ),
        })
    }
}
