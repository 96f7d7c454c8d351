//! Cards, roles and hands.
//!
//! E-Card uses a three-symbol alphabet. Each side's hand holds exactly one
//! signature card (Emperor or Slave) padded with Citizens.

pub mod card;
pub mod hand;

pub use card::{Card, ParseCardError, Role};
pub use hand::{Hand, HAND_SIZE};
