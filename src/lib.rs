//! # ecard
//!
//! Engine for E-Card, a two-player hidden-choice card duel.
//!
//! One seat holds the Emperor side (one Emperor, four Citizens), the other
//! the Slave side (one Slave, four Citizens). Each attempt both seats
//! commit a card in secret; the pair is then revealed and resolved:
//!
//! | Emperor side | Slave side | Result                 |
//! |--------------|------------|------------------------|
//! | Emperor      | Citizen    | Emperor side, 1 point  |
//! | Emperor      | Slave      | Slave side, 5 points   |
//! | Citizen      | Slave      | Emperor side, 1 point  |
//! | Citizen      | Citizen    | draw, replay the round |
//!
//! A game is twelve decisive rounds in sets of four; the sides swap
//! between sets. Most points wins.
//!
//! ## Design
//!
//! - **Pure transitions**: [`RulesEngine::commit`] and
//!   [`RulesEngine::resolve_round`] take a state and return a new one.
//!   A rejected call leaves its input untouched.
//!
//! - **Persistent state**: round history lives in an `im` vector, so
//!   snapshots for the store and for agents are cheap.
//!
//! - **Versioned sessions**: the [`lobby`] runs every update as a
//!   compare-and-swap against a [`store::SessionStore`], which finalizes
//!   each round exactly once under concurrent submissions.
//!
//! ## Modules
//!
//! - `core`: seats, state, plays, RNG, configuration
//! - `cards`: cards, sides and hands
//! - `rules`: resolution table, set rotation and the `RulesEngine` trait
//! - `games`: the E-Card engine and per-seat views
//! - `agents`: automated players and match simulation
//! - `store`: versioned session storage
//! - `lobby`: session creation, seating and submission
//! - `identity`: participant keys

pub mod core;
pub mod cards;
pub mod rules;
pub mod games;
pub mod agents;
pub mod store;
pub mod lobby;
pub mod identity;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameConfig,
    Play, RoundRecord, Turn,
    GameState, Status,
};

pub use crate::cards::{Card, Role, Hand};

pub use crate::rules::{RulesEngine, GameResult, RoundOutcome, RoundWinner};

pub use crate::games::ecard::{ECard, PlayerView};

pub use crate::agents::{Agent, RandomAgent, SignatureAgent, MatchSummary};

pub use crate::store::{SessionStore, MemoryStore, SessionId, Versioned};

pub use crate::lobby::{Lobby, LobbyConfig, SubmitOutcome};

pub use crate::identity::PlayerKey;

pub use crate::error::{PlayError, StoreError, LobbyError, MatchError, ConfigError};
