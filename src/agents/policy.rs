//! Automated players.
//!
//! Agents decide from a [`PlayerView`] only, so they are bound by the same
//! information limits as a human seat: no peeking at the opponent's hand
//! or pending choice.

use crate::core::{GameRng, Play};
use crate::games::ecard::PlayerView;

/// Chooses a play for one seat.
pub trait Agent: Send + Sync {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Choose a play, or `None` if the view offers none.
    fn choose(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Play>;
}

// =============================================================================
// Random
// =============================================================================

/// Picks uniformly among the cards in hand.
#[derive(Clone, Debug, Default)]
pub struct RandomAgent;

impl Agent for RandomAgent {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Play> {
        let plays = view.legal_plays();
        rng.choose(&plays).copied()
    }
}

// =============================================================================
// Signature
// =============================================================================

/// Holds the signature card back and plays it with a fixed probability
/// on each attempt. Forced to play it once only the signature remains.
#[derive(Clone, Debug)]
pub struct SignatureAgent {
    probability: f64,
}

impl SignatureAgent {
    /// `probability` is clamped to `0.0..=1.0`.
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
        }
    }

    /// Never plays the signature early.
    pub fn cautious() -> Self {
        Self::new(0.0)
    }

    /// Always leads with the signature.
    pub fn bold() -> Self {
        Self::new(1.0)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Agent for SignatureAgent {
    fn name(&self) -> &'static str {
        if self.probability <= 0.0 {
            "cautious"
        } else if self.probability >= 1.0 {
            "bold"
        } else {
            "signature"
        }
    }

    fn choose(&self, view: &PlayerView, rng: &mut GameRng) -> Option<Play> {
        let plays = view.legal_plays();
        let signature = plays.iter().find(|play| play.card.is_signature()).copied();
        let citizen = plays.iter().find(|play| !play.card.is_signature()).copied();

        match (signature, citizen) {
            (Some(signature), Some(citizen)) => {
                Some(if rng.chance(self.probability) { signature } else { citizen })
            }
            (signature, citizen) => signature.or(citizen),
        }
    }
}
