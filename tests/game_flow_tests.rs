//! Whole-game flow tests.
//!
//! These drive the engine through the public API only:
//! - Draws replay the round with reduced hands
//! - Decisive attempts score and redeal
//! - Sides swap between sets
//! - The game ends after the configured number of decisive rounds

use ecard::cards::{Card, Role, HAND_SIZE};
use ecard::core::{GameConfig, GameState, Play, PlayerId, Status};
use ecard::games::ecard::ECard;
use ecard::rules::{GameResult, RoundWinner, RulesEngine};
use ecard::PlayError;

const P1: PlayerId = PlayerId::FIRST;
const P2: PlayerId = PlayerId::SECOND;

fn commit(game: &ECard, state: &GameState, player: PlayerId, card: Card) -> GameState {
    let index = state
        .hand(player)
        .cards()
        .iter()
        .position(|&c| c == card)
        .expect("card in hand");
    game.commit(state, Play::new(player, card, index)).unwrap()
}

/// Commit both seats' cards and resolve.
fn attempt(game: &ECard, state: &GameState, first: Card, second: Card) -> GameState {
    let state = commit(game, state, P1, first);
    let state = commit(game, &state, P2, second);
    game.resolve_round(&state).unwrap().0
}

/// Play a round that the Emperor side wins outright.
fn emperor_takes_round(game: &ECard, state: &GameState) -> GameState {
    let emperor = state.holder(Role::Emperor);
    let (first, second) = if emperor == P1 {
        (Card::Emperor, Card::Citizen)
    } else {
        (Card::Citizen, Card::Emperor)
    };
    attempt(game, state, first, second)
}

/// Test a draw followed by a Slave-side win.
#[test]
fn test_draw_then_slave_win() {
    let game = ECard::default();
    let state = game.new_game();

    let state = attempt(&game, &state, Card::Citizen, Card::Citizen);
    assert_eq!(state.round(), 1);
    assert_eq!(state.attempt(), 1);
    assert_eq!(state.hand(P1).len(), 4);
    assert_eq!(state.hand(P2).len(), 4);
    assert_eq!(state.score(P1) + state.score(P2), 0);

    let state = attempt(&game, &state, Card::Emperor, Card::Slave);
    assert_eq!(state.score(P2), 5);
    assert_eq!(state.score(P1), 0);
    assert_eq!(state.round(), 2);
    assert_eq!(state.attempt(), 0);
    assert_eq!(state.hand(P1).len(), HAND_SIZE);
    assert_eq!(state.hand(P2).len(), HAND_SIZE);

    let history: Vec<_> = state.history().iter().map(|r| r.outcome.winner).collect();
    assert_eq!(history, vec![RoundWinner::Draw, RoundWinner::Side(Role::Slave)]);
}

/// Test that the sides swap at each set boundary.
#[test]
fn test_roles_rotate_between_sets() {
    let game = ECard::default();
    let mut state = game.new_game();
    let mut emperors = Vec::new();

    while !state.is_finished() {
        emperors.push(state.holder(Role::Emperor));
        state = emperor_takes_round(&game, &state);
    }

    let expected: Vec<PlayerId> = [P1, P2, P1]
        .into_iter()
        .flat_map(|p| std::iter::repeat(p).take(4))
        .collect();
    assert_eq!(emperors, expected);
}

/// Test that a full game finishes at round twelve with the right winner.
#[test]
fn test_full_game_result() {
    let game = ECard::default();
    let mut state = game.new_game();

    // The Emperor side wins every round: each seat earns one point per
    // round it holds the Emperor, so Player 1 gets 8 and Player 2 gets 4.
    while !state.is_finished() {
        state = emperor_takes_round(&game, &state);
    }

    assert_eq!(state.round(), 12);
    assert_eq!(state.score(P1), 8);
    assert_eq!(state.score(P2), 4);
    assert_eq!(state.status(), &Status::Finished(GameResult::Winner(P1)));
    assert_eq!(game.is_terminal(&state), Some(GameResult::Winner(P1)));
}

/// Test that equal scores end in a draw.
#[test]
fn test_even_game_is_drawn() {
    let game = ECard::new(GameConfig::default().with_max_rounds(8)).unwrap();
    let mut state = game.new_game();

    while !state.is_finished() {
        state = emperor_takes_round(&game, &state);
    }

    assert_eq!(state.score(P1), 4);
    assert_eq!(state.score(P2), 4);
    assert_eq!(state.result(), Some(&GameResult::Draw));
}

/// Test that nothing can be played once the game is over.
#[test]
fn test_finished_game_rejects_plays() {
    let game = ECard::new(GameConfig::default().with_max_rounds(1)).unwrap();
    let state = emperor_takes_round(&game, &game.new_game());

    assert!(state.is_finished());
    assert!(game.legal_plays(&state, P1).is_empty());
    assert_eq!(
        game.commit(&state, Play::new(P1, Card::Emperor, 0)),
        Err(PlayError::GameFinished)
    );
}

/// Test that resolving the same committed state twice gives the same answer.
#[test]
fn test_resolution_is_repeatable() {
    let game = ECard::default();
    let state = commit(&game, &game.new_game(), P1, Card::Emperor);
    let state = commit(&game, &state, P2, Card::Citizen);

    let (a, record_a) = game.resolve_round(&state).unwrap();
    let (b, record_b) = game.resolve_round(&state).unwrap();

    assert_eq!(a, b);
    assert_eq!(record_a, record_b);
    assert_eq!(game.resolve_round(&a), Err(PlayError::PrematureResolution));
}

/// Test that a second seat choosing first makes no difference.
#[test]
fn test_commit_order_is_irrelevant() {
    let game = ECard::default();
    let start = game.new_game();

    let p1_first = commit(&game, &commit(&game, &start, P1, Card::Emperor), P2, Card::Slave);
    let p2_first = commit(&game, &commit(&game, &start, P2, Card::Slave), P1, Card::Emperor);

    assert_eq!(
        game.resolve_round(&p1_first).unwrap(),
        game.resolve_round(&p2_first).unwrap()
    );
}

/// Test that restart returns a fresh opening state.
#[test]
fn test_restart() {
    let game = ECard::default();
    let played = attempt(&game, &game.new_game(), Card::Emperor, Card::Slave);

    let fresh = game.restart();
    assert_ne!(played, fresh);
    assert_eq!(fresh, game.new_game());
    assert_eq!(fresh.round(), 1);
    assert!(fresh.history().is_empty());
}
