//! A player's hand for the current round.
//!
//! Hands are dealt from the holder's role: the signature card first,
//! followed by Citizens. They only shrink during a round (one card per
//! committed choice) and are re-dealt whole when a round is decided.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Role};

/// Cards in a standard hand: one signature plus four Citizens.
pub const HAND_SIZE: usize = 5;

/// Ordered cards held by one player.
///
/// SmallVec keeps the standard five-card layout inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand {
    cards: SmallVec<[Card; HAND_SIZE]>,
}

impl Hand {
    /// Deal a fresh hand for `role`: its signature card plus `citizens` Citizens.
    ///
    /// ```
    /// use ecard::cards::{Card, Hand, Role};
    ///
    /// let hand = Hand::deal(Role::Slave, 4);
    /// assert_eq!(hand.cards(), &[Card::Slave, Card::Citizen, Card::Citizen, Card::Citizen, Card::Citizen]);
    /// ```
    #[must_use]
    pub fn deal(role: Role, citizens: usize) -> Self {
        let mut cards = SmallVec::with_capacity(citizens + 1);
        cards.push(role.signature());
        cards.extend(std::iter::repeat(Card::Citizen).take(citizens));
        Self { cards }
    }

    /// Build a hand from explicit cards.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
        }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// How many copies of `card` the hand holds.
    #[must_use]
    pub fn count(&self, card: Card) -> usize {
        self.cards.iter().filter(|&&c| c == card).count()
    }

    /// Number of signature cards (of either role) in the hand.
    #[must_use]
    pub fn signature_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_signature()).count()
    }

    /// Whether the hand holds nothing foreign to `role`.
    #[must_use]
    pub fn fits_role(&self, role: Role) -> bool {
        !self.contains(role.opposite().signature()) && self.count(role.signature()) <= 1
    }

    /// Remove and return the card at `index`.
    ///
    /// Returns `None` (leaving the hand untouched) if the index is out of range.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Distinct cards in the hand, in first-seen order.
    #[must_use]
    pub fn distinct(&self) -> SmallVec<[Card; 3]> {
        let mut out = SmallVec::new();
        for &card in &self.cards {
            if !out.contains(&card) {
                out.push(card);
            }
        }
        out
    }
}
