//! Session identifiers doubling as human-shareable join codes.
//!
//! Codes are 10 characters of Crockford's Base32 alphabet, which leaves out
//! I, L, O and U so codes survive being read aloud.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use std::fmt;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Length of a generated join code.
pub const JOIN_CODE_LEN: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Generate a random join code from the OS's secure RNG.
    ///
    /// ```
    /// use ecard::store::SessionId;
    ///
    /// let code = SessionId::generate();
    /// assert_eq!(code.as_str().len(), 10);
    /// ```
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = OsRng;
        let dist = Uniform::from(0..CROCKFORD.len());

        let code = (0..JOIN_CODE_LEN)
            .map(|_| CROCKFORD[dist.sample(&mut rng)] as char)
            .collect();
        Self(code)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    /// Codes typed by players are trimmed and upper-cased.
    fn from(value: &str) -> Self {
        Self(value.trim().to_ascii_uppercase())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
