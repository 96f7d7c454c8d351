//! E-Card rules implementation.

use tracing::{debug, error, info, instrument, trace};

use crate::cards::{Hand, Role};
use crate::core::{GameConfig, GameState, Play, PlayerId, PlayerMap, RoundRecord, Status};
use crate::error::{ConfigError, PlayError};
use crate::rules::{resolve, rotation, GameResult, RulesEngine};

use super::view::PlayerView;

/// The E-Card rules engine.
///
/// Holds only configuration; all game data lives in [`GameState`], which
/// is passed in explicitly on every call.
#[derive(Clone, Debug, Default)]
pub struct ECard {
    config: GameConfig,
}

impl ECard {
    /// Create an engine for a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Reset to a fresh game ("play again").
    #[must_use]
    pub fn restart(&self) -> GameState {
        GameState::new(&self.config)
    }

    /// What `player` may see of `state`.
    #[must_use]
    pub fn view(&self, state: &GameState, player: PlayerId) -> PlayerView {
        PlayerView::new(&self.config, state, player)
    }

    fn deal(&self, roles: &PlayerMap<Role>) -> PlayerMap<Hand> {
        roles.map(|_, &role| Hand::deal(role, self.config.citizens_per_hand))
    }

    /// Close the current round: finish the game or move to the next round
    /// with fresh hands (and rotated roles at a set boundary).
    fn advance(&self, next: &mut GameState) {
        if next.round >= self.config.max_rounds {
            let result = GameResult::from_scores(&next.scores);
            info!(
                ?result,
                first = next.scores[PlayerId::FIRST],
                second = next.scores[PlayerId::SECOND],
                "game finished"
            );
            next.status = Status::Finished(result);
            return;
        }

        if rotation::rotates_after(&self.config, next.round) {
            info!(
                set = rotation::set_number(&self.config, next.round + 1),
                "set complete, roles rotate"
            );
        }

        next.round += 1;
        next.attempt = 0;
        next.roles = rotation::roles_for_round(&self.config, next.round);
        next.hands = self.deal(&next.roles);
    }
}

impl RulesEngine for ECard {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn new_game(&self) -> GameState {
        GameState::new(&self.config)
    }

    fn legal_plays(&self, state: &GameState, player: PlayerId) -> Vec<Play> {
        if state.is_finished() || state.has_committed(player) {
            return vec![];
        }

        state
            .hand(player)
            .cards()
            .iter()
            .enumerate()
            .map(|(index, &card)| Play::new(player, card, index))
            .collect()
    }

    fn commit(&self, state: &GameState, play: Play) -> Result<GameState, PlayError> {
        if state.is_finished() {
            return Err(PlayError::GameFinished);
        }
        if state.has_committed(play.player) {
            return Err(PlayError::DuplicateSubmission { player: play.player });
        }
        if state.hand(play.player).get(play.hand_index) != Some(play.card) {
            return Err(PlayError::InvalidChoice {
                player: play.player,
                card: play.card,
                hand_index: play.hand_index,
            });
        }

        let mut next = state.clone();
        next.choices[play.player] = next.hands[play.player].take(play.hand_index);
        trace!(player = %play.player, round = next.round, "choice committed");
        Ok(next)
    }

    #[instrument(level = "debug", skip_all, fields(round = state.round, attempt = state.attempt))]
    fn resolve_round(&self, state: &GameState) -> Result<(GameState, RoundRecord), PlayError> {
        if state.is_finished() {
            return Err(PlayError::GameFinished);
        }

        let emperor = state.holder(Role::Emperor);
        let (Some(emperor_card), Some(slave_card)) =
            (state.choice(emperor), state.choice(emperor.opponent()))
        else {
            error!("resolution requested before both choices were committed");
            return Err(PlayError::PrematureResolution);
        };

        let outcome = resolve(emperor_card, slave_card).map_err(|err| {
            error!(%err, "card pair outside the resolution table");
            err
        })?;

        let record = RoundRecord {
            round: state.round,
            attempt: state.attempt,
            emperor,
            emperor_card,
            slave_card,
            outcome,
        };

        let mut next = state.clone();
        next.choices = PlayerMap::with_value(None);
        next.history.push_back(record.clone());

        if let Some(winner) = record.winner() {
            next.scores[winner] += outcome.points;
            debug!(%winner, points = outcome.points, "round decided");
        }

        // Unreachable with dealt layouts: Citizens run out before signatures.
        let exhausted = next.hands.values().any(Hand::is_empty);

        if outcome.is_draw() && !exhausted {
            next.attempt += 1;
            debug!("draw, replaying round with remaining hands");
        } else {
            self.advance(&mut next);
        }

        Ok((next, record))
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.result().cloned()
    }
}
