//! Participant identity.
//!
//! A [`PlayerKey`] is an opaque token the presentation layer keeps for a
//! participant (in a cookie, local storage, a config file). The lobby only
//! compares keys; it never interprets them. Presenting the same key again
//! after a reconnect returns the same seat.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Characters of a key shown by `Display`.
const DISPLAY_PREFIX: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerKey(String);

impl PlayerKey {
    /// Mint a fresh random key.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PlayerKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerKey {
    /// Only a prefix is shown so keys can appear in logs without leaking.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.char_indices().nth(DISPLAY_PREFIX) {
            Some((cut, _)) => write!(f, "{}…", &self.0[..cut]),
            None => f.write_str(&self.0),
        }
    }
}
