//! The round resolution table.
//!
//! Evaluated purely on the (Emperor-side card, Slave-side card) pair:
//!
//! | Emperor side | Slave side | Winner       | Points |
//! |--------------|------------|--------------|--------|
//! | Emperor      | Citizen    | Emperor side | 1      |
//! | Emperor      | Slave      | Slave side   | 5      |
//! | Citizen      | Slave      | Emperor side | 1      |
//! | Citizen      | Citizen    | Draw         | 0      |
//!
//! The Emperor side never holds a Slave and the Slave side never holds an
//! Emperor, so every other pair is an [`PlayError::IllegalPairing`].

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Role};
use crate::error::PlayError;

/// Points for an Emperor-side win.
pub const EMPEROR_WIN_POINTS: u32 = 1;

/// Points for the Slave catching the Emperor.
pub const SLAVE_WIN_POINTS: u32 = 5;

/// Which side took the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundWinner {
    Side(Role),
    Draw,
}

impl RoundWinner {
    /// The winning role, or `None` on a draw.
    #[must_use]
    pub fn role(self) -> Option<Role> {
        match self {
            RoundWinner::Side(role) => Some(role),
            RoundWinner::Draw => None,
        }
    }
}

/// Result of resolving one pair of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub winner: RoundWinner,
    pub points: u32,
}

impl RoundOutcome {
    const fn win(role: Role, points: u32) -> Self {
        Self {
            winner: RoundWinner::Side(role),
            points,
        }
    }

    const DRAW: Self = Self {
        winner: RoundWinner::Draw,
        points: 0,
    };

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner == RoundWinner::Draw
    }

    #[must_use]
    pub fn is_decisive(&self) -> bool {
        !self.is_draw()
    }
}

/// Resolve one round from the card each side committed.
///
/// Total over the whole alphabet: pairs outside the table are reported as
/// [`PlayError::IllegalPairing`] instead of being left undefined.
///
/// ```
/// use ecard::cards::{Card, Role};
/// use ecard::rules::{resolve, RoundWinner};
///
/// let outcome = resolve(Card::Emperor, Card::Slave).unwrap();
/// assert_eq!(outcome.winner, RoundWinner::Side(Role::Slave));
/// assert_eq!(outcome.points, 5);
/// ```
pub fn resolve(emperor_side: Card, slave_side: Card) -> Result<RoundOutcome, PlayError> {
    match (emperor_side, slave_side) {
        (Card::Emperor, Card::Citizen) => Ok(RoundOutcome::win(Role::Emperor, EMPEROR_WIN_POINTS)),
        (Card::Emperor, Card::Slave) => Ok(RoundOutcome::win(Role::Slave, SLAVE_WIN_POINTS)),
        (Card::Citizen, Card::Slave) => Ok(RoundOutcome::win(Role::Emperor, EMPEROR_WIN_POINTS)),
        (Card::Citizen, Card::Citizen) => Ok(RoundOutcome::DRAW),
        (Card::Slave, _) | (_, Card::Emperor) => Err(PlayError::IllegalPairing {
            emperor_side,
            slave_side,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_law() {
        assert_eq!(
            resolve(Card::Emperor, Card::Citizen),
            Ok(RoundOutcome::win(Role::Emperor, 1))
        );
        assert_eq!(resolve(Card::Emperor, Card::Slave), Ok(RoundOutcome::win(Role::Slave, 5)));
        assert_eq!(
            resolve(Card::Citizen, Card::Slave),
            Ok(RoundOutcome::win(Role::Emperor, 1))
        );
        assert_eq!(resolve(Card::Citizen, Card::Citizen), Ok(RoundOutcome::DRAW));
    }

    #[test]
    fn test_illegal_pairs_are_errors() {
        let illegal = [
            (Card::Slave, Card::Citizen),
            (Card::Slave, Card::Slave),
            (Card::Slave, Card::Emperor),
            (Card::Emperor, Card::Emperor),
            (Card::Citizen, Card::Emperor),
        ];

        for (e, s) in illegal {
            assert_eq!(
                resolve(e, s),
                Err(PlayError::IllegalPairing {
                    emperor_side: e,
                    slave_side: s
                }),
                "({e}, {s}) must be illegal"
            );
        }
    }

    #[test]
    fn test_every_pair_is_classified() {
        let mut legal = 0;
        for e in Card::ALL {
            for s in Card::ALL {
                if resolve(e, s).is_ok() {
                    legal += 1;
                }
            }
        }
        assert_eq!(legal, 4);
    }

    #[test]
    fn test_only_slave_side_scores_five() {
        for e in Card::ALL {
            for s in Card::ALL {
                if let Ok(outcome) = resolve(e, s) {
                    if outcome.points == SLAVE_WIN_POINTS {
                        assert_eq!(outcome.winner.role(), Some(Role::Slave));
                        assert_eq!((e, s), (Card::Emperor, Card::Slave));
                    }
                }
            }
        }
    }
}
