//! Property tests for the rules core.
//!
//! Properties tested:
//! - The resolver accepts exactly the four table pairs
//! - Each hand keeps exactly one signature card of its seat's side
//! - Hand size equals a full hand minus the attempts of the current round
//! - Scores never decrease and always equal the points in the history
//! - Every game ends within twelve rounds of at most five attempts

use proptest::prelude::*;

use ecard::cards::{Card, HAND_SIZE};
use ecard::core::{GameState, Play, PlayerId, MAX_ROUNDS};
use ecard::games::ecard::ECard;
use ecard::rules::{resolve, RulesEngine};
use ecard::PlayError;

fn card() -> impl Strategy<Value = Card> {
    prop::sample::select(Card::ALL.to_vec())
}

/// Pick a card by position, wrapping around the hand.
fn play_at(state: &GameState, player: PlayerId, pick: usize) -> Play {
    let hand = state.hand(player);
    let index = pick % hand.len();
    Play::new(player, hand.cards()[index], index)
}

fn check_hands(state: &GameState) -> Result<(), TestCaseError> {
    for player in PlayerId::all() {
        let hand = state.hand(player);
        let role = state.role(player);
        prop_assert_eq!(hand.count(role.signature()), 1);
        prop_assert!(hand.fits_role(role));
        prop_assert_eq!(hand.len(), HAND_SIZE - state.attempt() as usize);
    }
    Ok(())
}

proptest! {
    /// Property: only the four table pairs resolve; the rest are illegal.
    #[test]
    fn prop_resolver_is_total_on_table(emperor_side in card(), slave_side in card()) {
        let in_table = matches!(
            (emperor_side, slave_side),
            (Card::Emperor, Card::Citizen)
                | (Card::Emperor, Card::Slave)
                | (Card::Citizen, Card::Slave)
                | (Card::Citizen, Card::Citizen)
        );

        match resolve(emperor_side, slave_side) {
            Ok(_) => prop_assert!(in_table),
            Err(err) => {
                prop_assert!(!in_table);
                prop_assert_eq!(err, PlayError::IllegalPairing { emperor_side, slave_side });
            }
        }
    }

    /// Property: random play keeps every invariant and always terminates.
    #[test]
    fn prop_random_games_hold_invariants(
        picks in prop::collection::vec((0usize..5, 0usize..5), MAX_ROUNDS as usize * HAND_SIZE)
    ) {
        let game = ECard::default();
        let mut state = game.new_game();
        let mut last_scores = *state.scores();

        for (first, second) in picks {
            if state.is_finished() {
                break;
            }
            check_hands(&state)?;

            let committed = game.commit(&state, play_at(&state, PlayerId::FIRST, first)).unwrap();
            let committed = game.commit(&committed, play_at(&committed, PlayerId::SECOND, second)).unwrap();
            let (next, _) = game.resolve_round(&committed).unwrap();

            for player in PlayerId::all() {
                prop_assert!(next.score(player) >= last_scores[player]);
            }
            prop_assert!(next.round() >= state.round());
            prop_assert!(next.round() <= MAX_ROUNDS);

            last_scores = *next.scores();
            state = next;
        }

        prop_assert!(state.is_finished());
        prop_assert_eq!(state.completed_rounds(), MAX_ROUNDS);

        let awarded: u32 = state.history().iter().map(|r| r.outcome.points).sum();
        prop_assert_eq!(state.score(PlayerId::FIRST) + state.score(PlayerId::SECOND), awarded);
    }

    /// Property: a rejected commit leaves the state untouched.
    #[test]
    fn prop_invalid_commit_is_harmless(index in 0usize..8, wanted in card()) {
        let game = ECard::default();
        let state = game.new_game();
        let player = PlayerId::SECOND;
        let holds = state.hand(player).get(index) == Some(wanted);

        let before = state.clone();
        let result = game.commit(&state, Play::new(player, wanted, index));

        prop_assert_eq!(result.is_ok(), holds);
        prop_assert_eq!(state, before);
    }
}
