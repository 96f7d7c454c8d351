//! Rules engine trait.
//!
//! The engine is written as pure transitions: every operation takes the
//! current state by reference and returns the next state, so a failing call
//! can never leave a half-applied mutation behind. The `*_in_place`
//! conveniences swap the new state in only on success.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, Play, PlayerId, PlayerMap, RoundRecord};
use crate::error::PlayError;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner on cumulative score.
    Winner(PlayerId),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Decide the game from cumulative scores.
    #[must_use]
    pub fn from_scores(scores: &PlayerMap<u32>) -> Self {
        let (first, second) = (scores[PlayerId::FIRST], scores[PlayerId::SECOND]);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_plays`: empty if the player can't act (already committed, game over)
/// - `commit` / `resolve_round`: deterministic and side-effect free
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Initial state for a new game.
    fn new_game(&self) -> GameState;

    /// Plays `player` may submit in `state`.
    fn legal_plays(&self, state: &GameState, player: PlayerId) -> Vec<Play>;

    /// Commit a hidden choice, removing the card from the player's hand.
    fn commit(&self, state: &GameState, play: Play) -> Result<GameState, PlayError>;

    /// Resolve the current attempt once both choices are committed.
    fn resolve_round(&self, state: &GameState) -> Result<(GameState, RoundRecord), PlayError>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Whether `play` would be accepted by [`RulesEngine::commit`].
    fn is_legal(&self, state: &GameState, play: &Play) -> bool {
        self.legal_plays(state, play.player).contains(play)
    }

    /// Commit and replace `state` on success.
    fn commit_in_place(&self, state: &mut GameState, play: Play) -> Result<(), PlayError> {
        *state = self.commit(state, play)?;
        Ok(())
    }

    /// Resolve and replace `state` on success.
    fn resolve_in_place(&self, state: &mut GameState) -> Result<RoundRecord, PlayError> {
        let (next, record) = self.resolve_round(state)?;
        *state = next;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::SECOND);
        assert!(!result.is_winner(PlayerId::FIRST));
        assert!(result.is_winner(PlayerId::SECOND));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(PlayerId::FIRST));
        assert!(!draw.is_winner(PlayerId::SECOND));
    }

    #[test]
    fn test_from_scores() {
        let mut scores = PlayerMap::with_value(3);
        assert_eq!(GameResult::from_scores(&scores), GameResult::Draw);

        scores[PlayerId::SECOND] = 8;
        assert_eq!(GameResult::from_scores(&scores), GameResult::Winner(PlayerId::SECOND));

        scores[PlayerId::FIRST] = 9;
        assert_eq!(GameResult::from_scores(&scores), GameResult::Winner(PlayerId::FIRST));
    }
}
