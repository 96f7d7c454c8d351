//! Card symbols and table roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three card symbols. Cards carry no state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Emperor,
    Citizen,
    Slave,
}

impl Card {
    /// Every card symbol, in display order.
    pub const ALL: [Card; 3] = [Card::Emperor, Card::Citizen, Card::Slave];

    /// The role this card is the signature of, if any.
    ///
    /// Citizens belong to both sides and return `None`.
    #[must_use]
    pub const fn signature_of(self) -> Option<Role> {
        match self {
            Card::Emperor => Some(Role::Emperor),
            Card::Slave => Some(Role::Slave),
            Card::Citizen => None,
        }
    }

    /// Whether this is a role-defining card.
    #[must_use]
    pub const fn is_signature(self) -> bool {
        self.signature_of().is_some()
    }

    /// Single-letter code (`E`, `C`, `S`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Card::Emperor => 'E',
            Card::Citizen => 'C',
            Card::Slave => 'S',
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Card::Emperor => "Emperor",
            Card::Citizen => "Citizen",
            Card::Slave => "Slave",
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a card symbol cannot be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown card symbol: {0:?}")]
pub struct ParseCardError(pub String);

impl FromStr for Card {
    type Err = ParseCardError;

    /// Accepts the single-letter code or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "emperor" => Ok(Card::Emperor),
            "c" | "citizen" => Ok(Card::Citizen),
            "s" | "slave" => Ok(Card::Slave),
            _ => Err(ParseCardError(s.to_string())),
        }
    }
}

/// The two asymmetric sides of the table.
///
/// Exactly one seat holds each role at any time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Emperor,
    Slave,
}

impl Role {
    /// The other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Role::Emperor => Role::Slave,
            Role::Slave => Role::Emperor,
        }
    }

    /// The card only this side may hold.
    #[must_use]
    pub const fn signature(self) -> Card {
        match self {
            Role::Emperor => Card::Emperor,
            Role::Slave => Card::Slave,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Emperor => f.write_str("Emperor side"),
            Role::Slave => f.write_str("Slave side"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_round_trip() {
        for role in [Role::Emperor, Role::Slave] {
            assert_eq!(role.signature().signature_of(), Some(role));
        }
        assert_eq!(Card::Citizen.signature_of(), None);
    }

    #[test]
    fn test_opposite_is_involution() {
        assert_eq!(Role::Emperor.opposite(), Role::Slave);
        assert_eq!(Role::Slave.opposite().opposite(), Role::Slave);
    }

    #[test]
    fn test_parse_card() {
        assert_eq!("E".parse::<Card>(), Ok(Card::Emperor));
        assert_eq!(" citizen ".parse::<Card>(), Ok(Card::Citizen));
        assert_eq!("SLAVE".parse::<Card>(), Ok(Card::Slave));
        assert!("king".parse::<Card>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::Slave.to_string(), "Slave");
        assert_eq!(Role::Emperor.to_string(), "Emperor side");
        assert_eq!(Card::Emperor.symbol(), 'E');
    }
}
