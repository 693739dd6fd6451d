//! Property tests for the placement rule and the all-or-nothing guarantee.

use hack_patience::rules::can_place;
use hack_patience::{Action, Card, Deck, Game, MoveError, PileId, DECK_SIZE};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0..DECK_SIZE).prop_map(|i| Deck::build().cards()[i])
}

fn any_pile() -> impl Strategy<Value = PileId> {
    prop_oneof![
        (0u8..9).prop_map(PileId::Cascade),
        (0u8..6).prop_map(PileId::Accumulator),
        Just(PileId::Draw),
        Just(PileId::Discard),
    ]
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::Draw),
        4 => (any_card(), any_pile(), any_pile())
            .prop_map(|(card, from, to)| Action::transfer(card, from, to)),
    ]
}

proptest! {
    #[test]
    fn placement_matches_rank_and_color(card in any_card(), top in any_card()) {
        let expected = match (card.ordinal_value(), top.ordinal_value()) {
            (Some(v), Some(t)) => v + 1 == t && card.is_red() != top.is_red(),
            _ => false,
        };
        prop_assert_eq!(can_place(card, Some(top)), expected);
    }

    #[test]
    fn empty_pile_takes_any_ordinal(card in any_card()) {
        prop_assert_eq!(can_place(card, None), !card.is_special());
    }

    #[test]
    fn arbitrary_actions_keep_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(any_action(), 0..200),
    ) {
        let mut game = Game::with_seed(seed);

        for action in actions {
            let before = game.snapshot();
            match game.apply(&action) {
                Ok(after) => {
                    // Every successful action costs something.
                    prop_assert!(after.energy < before.energy);
                }
                Err(err) => {
                    if before.status.is_terminal() {
                        prop_assert_eq!(err, MoveError::GameOver);
                    }
                    prop_assert_eq!(game.snapshot(), before);
                }
            }
            prop_assert!(game.board().check_integrity().is_ok());
            prop_assert!(game.board().spent().len() <= 1);
        }
    }
}
