//! Automated players and match simulation.

mod policy;
mod runner;

pub use policy::{Agent, RandomAgent, SignatureAgent};
pub use runner::{play_match, simulate, MatchSummary, Tally};
