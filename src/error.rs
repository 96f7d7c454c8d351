//! Error types for every layer of the crate.
//!
//! - [`PlayError`]: rules core. Always local and non-fatal; the state a
//!   failing call was given is left untouched.
//! - [`StoreError`]: session storage.
//! - [`LobbyError`]: the collaborator layer seen by the presentation.
//! - [`MatchError`]: automated matches between agents.
//! - [`ConfigError`]: rejected game configuration.

use thiserror::Error;

use crate::cards::Card;
use crate::core::{PlayerId, Turn};
use crate::store::SessionId;

/// Errors raised by the rules engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The submitted card is not at the given position of the player's hand.
    #[error("{player} has no {card} at hand position {hand_index}")]
    InvalidChoice {
        player: PlayerId,
        card: Card,
        hand_index: usize,
    },

    /// The player already committed a card this round.
    #[error("{player} already committed a card this round")]
    DuplicateSubmission { player: PlayerId },

    /// Resolution was attempted before both choices were committed.
    #[error("round resolved before both choices were committed")]
    PrematureResolution,

    /// A card pair outside the resolution table reached the resolver.
    #[error("illegal pairing: emperor side played {emperor_side}, slave side played {slave_side}")]
    IllegalPairing { emperor_side: Card, slave_side: Card },

    /// The game has already ended.
    #[error("game is finished")]
    GameFinished,
}

impl PlayError {
    /// Logic faults indicate a caller or engine bug rather than a bad move.
    #[must_use]
    pub fn is_logic_fault(&self) -> bool {
        matches!(self, PlayError::PrematureResolution | PlayError::IllegalPairing { .. })
    }
}

/// Errors raised by a [`crate::store::SessionStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session {0} not found")]
    NotFound(SessionId),

    #[error("session {0} already exists")]
    AlreadyExists(SessionId),

    /// The record changed since it was read.
    #[error("version conflict on session {id}: expected {expected}, found {actual}")]
    Conflict {
        id: SessionId,
        expected: u64,
        actual: u64,
    },

    #[error("session record codec: {0}")]
    Codec(#[from] bincode::Error),
}

/// Errors surfaced to the presentation layer.
#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("no game with code {0}")]
    SessionNotFound(SessionId),

    #[error("game {0} already has two players")]
    SessionFull(SessionId),

    #[error("you are not seated in game {0}")]
    NotSeated(SessionId),

    #[error("waiting for an opponent to join")]
    WaitingForOpponent,

    /// The submission was made for an attempt that is already over.
    #[error("choice for {submitted} arrived at {current}")]
    StaleTurn { submitted: Turn, current: Turn },

    /// Compare-and-swap kept losing to concurrent writers.
    #[error("session {id} is busy; gave up after {attempts} attempts")]
    Contention { id: SessionId, attempts: u32 },

    #[error(transparent)]
    Play(#[from] PlayError),

    #[error(transparent)]
    Store(StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<StoreError> for LobbyError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => LobbyError::SessionNotFound(id),
            other => LobbyError::Store(other),
        }
    }
}

/// Errors from an automated match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// An agent returned no play while its seat owed one.
    #[error("agent {agent} made no play for {player}")]
    NoPlay { agent: String, player: PlayerId },

    #[error(transparent)]
    Play(#[from] PlayError),
}

/// Rejected [`crate::core::GameConfig`] values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_rounds must be at least 1")]
    NoRounds,

    #[error("rounds_per_set must be at least 1")]
    EmptySet,

    #[error("citizens_per_hand must be at least 1")]
    NoCitizens,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logic_faults() {
        assert!(PlayError::PrematureResolution.is_logic_fault());
        assert!(PlayError::IllegalPairing {
            emperor_side: Card::Slave,
            slave_side: Card::Citizen,
        }
        .is_logic_fault());
        assert!(!PlayError::GameFinished.is_logic_fault());
        assert!(!PlayError::DuplicateSubmission { player: PlayerId::FIRST }.is_logic_fault());
    }

    #[test]
    fn test_store_not_found_maps_to_session_not_found() {
        let id = SessionId::from("ABCDEFGHJK");
        let err: LobbyError = StoreError::NotFound(id.clone()).into();

        assert!(matches!(err, LobbyError::SessionNotFound(found) if found == id));
    }

    #[test]
    fn test_messages() {
        let err = PlayError::InvalidChoice {
            player: PlayerId::SECOND,
            card: Card::Emperor,
            hand_index: 2,
        };
        assert_eq!(err.to_string(), "Player 2 has no Emperor at hand position 2");
    }
}
