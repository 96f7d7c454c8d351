//! Agent-versus-agent matches.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{GameRng, PlayerId, PlayerMap, RoundRecord};
use crate::error::MatchError;
use crate::games::ecard::ECard;
use crate::rules::{GameResult, RulesEngine};

use super::policy::Agent;

/// Outcome of one complete match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub result: GameResult,
    pub scores: PlayerMap<u32>,
    /// Every resolved attempt, draws included.
    pub history: Vector<RoundRecord>,
}

impl MatchSummary {
    pub fn draws(&self) -> usize {
        self.history.iter().filter(|r| r.outcome.is_draw()).count()
    }
}

/// Play one match to completion.
///
/// Each seat draws from its own stream forked off `rng`, so consecutive
/// matches from the same `rng` differ while a fixed seed replays exactly.
pub fn play_match(
    engine: &ECard,
    agents: PlayerMap<&dyn Agent>,
    rng: &mut GameRng,
) -> Result<MatchSummary, MatchError> {
    let match_rng = rng.fork();
    let mut seat_rngs = PlayerMap::new(|player| match_rng.for_seat(player));
    let mut state = engine.new_game();

    loop {
        if let Some(result) = engine.is_terminal(&state) {
            debug!(?result, attempts = state.history().len(), "match complete");
            return Ok(MatchSummary {
                result,
                scores: *state.scores(),
                history: state.history().clone(),
            });
        }

        for player in PlayerId::all() {
            if state.has_committed(player) {
                continue;
            }
            let agent = agents[player];
            let view = engine.view(&state, player);
            let play = agent
                .choose(&view, &mut seat_rngs[player])
                .ok_or_else(|| MatchError::NoPlay {
                    agent: agent.name().to_string(),
                    player,
                })?;
            state = engine.commit(&state, play)?;
        }

        let (next, record) = engine.resolve_round(&state)?;
        trace!(round = record.round, attempt = record.attempt, outcome = ?record.outcome, "attempt resolved");
        state = next;
    }
}

/// Running totals over many matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub matches: u32,
    pub wins: PlayerMap<u32>,
    pub draws: u32,
    pub points: PlayerMap<u64>,
    /// Drawn attempts across all matches (not drawn matches).
    pub drawn_attempts: u64,
}

impl Tally {
    pub fn record(&mut self, summary: &MatchSummary) {
        self.matches += 1;
        match summary.result {
            GameResult::Winner(player) => self.wins[player] += 1,
            GameResult::Draw => self.draws += 1,
        }
        for (player, &score) in summary.scores.iter() {
            self.points[player] += u64::from(score);
        }
        self.drawn_attempts += summary.draws() as u64;
    }

    /// Share of matches won by `player`.
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        f64::from(self.wins[player]) / f64::from(self.matches)
    }
}

/// Play `games` matches and tally them.
pub fn simulate(
    engine: &ECard,
    agents: PlayerMap<&dyn Agent>,
    games: u32,
    rng: &mut GameRng,
) -> Result<Tally, MatchError> {
    let mut tally = Tally::default();
    for _ in 0..games {
        tally.record(&play_match(engine, agents, rng)?);
    }
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{RandomAgent, SignatureAgent};
    use crate::core::{GameConfig, MAX_ROUNDS};

    #[test]
    fn test_match_runs_to_completion() {
        let engine = ECard::default();
        let random = RandomAgent;
        let summary = play_match(&engine, PlayerMap::new(|_| &random as &dyn Agent), &mut GameRng::new(3)).unwrap();

        let decisive = summary.history.iter().filter(|r| r.outcome.is_decisive()).count();
        assert_eq!(decisive, MAX_ROUNDS as usize);
        assert_eq!(summary.result, GameResult::from_scores(&summary.scores));
    }

    #[test]
    fn test_same_seed_replays() {
        let engine = ECard::default();
        let random = RandomAgent;
        let agents = PlayerMap::new(|_| &random as &dyn Agent);

        let a = play_match(&engine, agents, &mut GameRng::new(99)).unwrap();
        let b = play_match(&engine, agents, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cautious_match_is_deterministic() {
        // Both seats hold their signature to the end: every round draws
        // four times, then the signature meets the last Citizen.
        let engine = ECard::new(GameConfig::default().with_max_rounds(4)).unwrap();
        let cautious = SignatureAgent::cautious();
        let summary = play_match(&engine, PlayerMap::new(|_| &cautious as &dyn Agent), &mut GameRng::new(0)).unwrap();

        assert_eq!(summary.draws(), 4 * 4);
        assert_eq!(summary.history.len(), 4 * 5);
    }

    #[test]
    fn test_tally() {
        let engine = ECard::new(GameConfig::default().with_max_rounds(2)).unwrap();
        let random = RandomAgent;
        let tally = simulate(&engine, PlayerMap::new(|_| &random as &dyn Agent), 10, &mut GameRng::new(5)).unwrap();

        assert_eq!(tally.matches, 10);
        assert_eq!(tally.wins[PlayerId::FIRST] + tally.wins[PlayerId::SECOND] + tally.draws, 10);
    }
}
