//! Game rules.
//!
//! - `resolver`: the card-pair resolution table
//! - `rotation`: which seat holds which role in a given round
//! - `engine`: the `RulesEngine` trait games implement
//!
//! `resolver` and `rotation` are free functions of their inputs; the
//! stateful sequencing (commits, draws, round advance, termination) lives in
//! `games::ecard`.

pub mod engine;
pub mod resolver;
pub mod rotation;

pub use engine::{GameResult, RulesEngine};
pub use resolver::{resolve, RoundOutcome, RoundWinner, EMPEROR_WIN_POINTS, SLAVE_WIN_POINTS};
