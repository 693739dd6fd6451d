//! Action representation.
//!
//! A player can do exactly two things: draw from the stock, or move the top
//! card of one pile onto another. Moving a hack card is the same action; the
//! rules decide that it fires instead of landing on the target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::PileId;
use crate::cards::Card;

/// A player action.
///
/// ```
/// use hack_patience::board::PileId;
/// use hack_patience::cards::{Card, Rank, Suit};
/// use hack_patience::core::Action;
///
/// let draw = Action::Draw;
/// let play = Action::Move {
///     card: Card::ordinal(Suit::Spades, Rank::Six),
///     from: PileId::Discard,
///     to: PileId::Cascade(2),
/// };
///
/// assert_eq!(draw.to_string(), "draw");
/// assert_eq!(play.to_string(), "6S discard -> cascade-3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the top of the Draw pile onto the Discard pile.
    Draw,
    /// Move `card` (the top of `from`) onto `to`.
    Move { card: Card, from: PileId, to: PileId },
}

impl Action {
    /// Build a move action.
    #[must_use]
    pub const fn transfer(card: Card, from: PileId, to: PileId) -> Self {
        Action::Move { card, from, to }
    }

    /// The card this action moves, if any.
    #[must_use]
    pub fn card(&self) -> Option<Card> {
        match self {
            Action::Draw => None,
            Action::Move { card, .. } => Some(*card),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Draw => write!(f, "draw"),
            Action::Move { card, from, to } => write!(f, "{} {} -> {}", card, from, to),
        }
    }
}

/// Record of an applied action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Position in the game's history (starts at 0).
    pub sequence: u32,

    /// Energy left after the action.
    pub energy_after: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_card_accessor() {
        assert_eq!(Action::Draw.card(), None);

        let hack = Card::hack(Suit::Clubs);
        let action = Action::transfer(hack, PileId::Cascade(0), PileId::Accumulator(1));
        assert_eq!(action.card(), Some(hack));
    }

    #[test]
    fn test_display() {
        let action = Action::transfer(
            Card::ordinal(Suit::Diamonds, Rank::Ten),
            PileId::Accumulator(3),
            PileId::Cascade(6),
        );
        assert_eq!(action.to_string(), "10D accumulator-4 -> cascade-7");
    }

    #[test]
    fn test_record_serde() {
        let record = ActionRecord {
            action: Action::Draw,
            sequence: 3,
            energy_after: 92,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
