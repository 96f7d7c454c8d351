//! Core engine types: seats, state, actions, RNG, configuration.
//!
//! These are the building blocks every other module works with. Rules live
//! in `rules` and `games`; this module holds data, not behavior.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use config::{GameConfig, CITIZENS_PER_HAND, MAX_ROUNDS, ROUNDS_PER_SET};
pub use action::{Play, RoundRecord, Turn};
pub use state::{GameState, Status};
