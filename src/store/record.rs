//! The stored session record.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameState, PlayerId, PlayerMap};
use crate::error::StoreError;
use crate::identity::PlayerKey;

/// Everything persisted for one session: configuration, seating and the
/// current game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub config: GameConfig,
    pub seats: PlayerMap<Option<PlayerKey>>,
    pub state: GameState,
}

impl SessionRecord {
    /// New record with `host` in the first seat.
    #[must_use]
    pub fn new(config: GameConfig, host: PlayerKey) -> Self {
        let state = GameState::new(&config);
        let mut seats = PlayerMap::with_value(None);
        seats[PlayerId::FIRST] = Some(host);
        Self {
            config,
            seats,
            state,
        }
    }

    /// Seat held by `key`, if any.
    #[must_use]
    pub fn seat_of(&self, key: &PlayerKey) -> Option<PlayerId> {
        self.seats.find(|seat| seat.as_ref() == Some(key))
    }

    /// First unoccupied seat.
    #[must_use]
    pub fn free_seat(&self) -> Option<PlayerId> {
        self.seats.find(Option::is_none)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.free_seat().is_none()
    }

    pub fn encode(&self) -> Result<Vec<u8>, StoreError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, StoreError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// A value tagged with the store version it was read at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Versioned<T> {
    pub version: u64,
    pub value: T,
}

impl<T> Versioned<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Versioned<U> {
        Versioned {
            version: self.version,
            value: f(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seating() {
        let host = PlayerKey::from("host");
        let mut record = SessionRecord::new(GameConfig::default(), host.clone());

        assert_eq!(record.seat_of(&host), Some(PlayerId::FIRST));
        assert_eq!(record.free_seat(), Some(PlayerId::SECOND));
        assert!(!record.is_full());

        record.seats[PlayerId::SECOND] = Some(PlayerKey::from("guest"));
        assert!(record.is_full());
        assert_eq!(record.seat_of(&PlayerKey::from("guest")), Some(PlayerId::SECOND));
        assert_eq!(record.seat_of(&PlayerKey::from("stranger")), None);
    }

    #[test]
    fn test_codec_preserves_record() {
        let record = SessionRecord::new(GameConfig::default().with_max_rounds(4), PlayerKey::from("h"));
        let bytes = record.encode().unwrap();

        assert_eq!(SessionRecord::decode(&bytes).unwrap(), record);
    }

    #[test]
    fn test_decode_garbage_is_codec_error() {
        let err = SessionRecord::decode(&[0xff, 0x01]).unwrap_err();
        assert!(matches!(err, StoreError::Codec(_)));
    }
}
