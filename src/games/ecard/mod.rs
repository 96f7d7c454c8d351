//! E-Card, the Emperor/Slave bluffing game.
//!
//! Two seats, asymmetric roles:
//! - the Emperor side holds the Emperor and four Citizens
//! - the Slave side holds the Slave and four Citizens
//! - both commit one card face down, then both are revealed
//! - Citizen against Citizen is a draw and the round is replayed with what
//!   is left in hand; any other pairing decides the round
//! - roles swap every set of four rounds; the game ends after twelve
//!
//! Scores only ever grow. The higher total after the last round wins.

mod game;
mod view;

pub use game::ECard;
pub use view::PlayerView;
