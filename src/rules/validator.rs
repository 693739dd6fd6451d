//! Placement rules.
//!
//! One predicate governs both cascades and accumulators: an empty pile takes
//! any ordinal card, otherwise the card must be one rank below the top card
//! and of the opposite color. Accumulators are not suit-locked.

use crate::board::PileKind;
use crate::cards::Card;

/// Can `card` be placed on a pile whose top card is `top`?
///
/// Hack cards are never placed; they fire instead (see the rules engine).
#[must_use]
pub fn can_place(card: Card, top: Option<Card>) -> bool {
    let Some(value) = card.ordinal_value() else {
        return false;
    };
    match top {
        None => true,
        Some(top) => match top.ordinal_value() {
            Some(top_value) => value + 1 == top_value && card.is_red() != top.is_red(),
            None => false,
        },
    }
}

/// Can `card` be placed on a pile of kind `target` whose top card is `top`?
///
/// Only cascades and accumulators accept moves.
#[must_use]
pub fn can_place_on(card: Card, target: PileKind, top: Option<Card>) -> bool {
    match target {
        PileKind::Cascade | PileKind::Accumulator => can_place(card, top),
        PileKind::Draw | PileKind::Discard => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn c(suit: Suit, rank: Rank) -> Card {
        Card::ordinal(suit, rank)
    }

    #[test]
    fn test_empty_pile_takes_any_ordinal() {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(can_place(c(suit, rank), None));
            }
        }
    }

    #[test]
    fn test_descending_alternating() {
        let red_seven = c(Suit::Hearts, Rank::Seven);
        assert!(can_place(c(Suit::Spades, Rank::Six), Some(red_seven)));
        assert!(can_place(c(Suit::Clubs, Rank::Six), Some(red_seven)));
        assert!(!can_place(c(Suit::Diamonds, Rank::Six), Some(red_seven)));
        assert!(!can_place(c(Suit::Spades, Rank::Five), Some(red_seven)));
        assert!(!can_place(c(Suit::Spades, Rank::Eight), Some(red_seven)));
        assert!(!can_place(c(Suit::Spades, Rank::Seven), Some(red_seven)));
    }

    #[test]
    fn test_ace_onto_two() {
        assert!(can_place(c(Suit::Diamonds, Rank::Ace), Some(c(Suit::Clubs, Rank::Two))));
        assert!(!can_place(c(Suit::Diamonds, Rank::King), Some(c(Suit::Clubs, Rank::Ace))));
    }

    #[test]
    fn test_hack_cards_never_placed() {
        let hack = Card::hack(Suit::Hearts);
        assert!(!can_place(hack, None));
        assert!(!can_place(hack, Some(c(Suit::Spades, Rank::King))));
        // Nothing stacks on a hack card either.
        assert!(!can_place(c(Suit::Spades, Rank::King), Some(hack)));
    }

    #[test]
    fn test_same_rule_for_cascades_and_accumulators() {
        let top = Some(c(Suit::Clubs, Rank::Queen));
        let jack = c(Suit::Hearts, Rank::Jack);
        assert!(can_place_on(jack, PileKind::Cascade, top));
        assert!(can_place_on(jack, PileKind::Accumulator, top));
        assert!(!can_place_on(jack, PileKind::Discard, top));
        assert!(!can_place_on(jack, PileKind::Draw, None));
    }
}
