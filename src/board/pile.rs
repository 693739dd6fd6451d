//! Piles and pile identifiers.
//!
//! A pile is an ordered stack of cards. Index 0 is the bottom, the last
//! element is the top. Only the top card can be played or compared against.

use std::fmt;
use std::str::FromStr;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::{ACCUMULATOR_COUNT, CASCADE_COUNT};
use crate::core::ParseError;

/// Kind of pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    Cascade,
    Accumulator,
    Draw,
    Discard,
}

/// Logical pile identifier (kind + index).
///
/// Indices are 0-based. The textual form used by `Display` and `FromStr`
/// is 1-based (`cascade-1` .. `cascade-7`, `accumulator-1` .. `accumulator-4`),
/// plus `draw` and `discard`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Cascade(u8),
    Accumulator(u8),
    Draw,
    Discard,
}

impl PileId {
    #[must_use]
    pub const fn kind(self) -> PileKind {
        match self {
            PileId::Cascade(_) => PileKind::Cascade,
            PileId::Accumulator(_) => PileKind::Accumulator,
            PileId::Draw => PileKind::Draw,
            PileId::Discard => PileKind::Discard,
        }
    }

    /// Does this id name a pile that exists on the board?
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            PileId::Cascade(i) => (i as usize) < CASCADE_COUNT,
            PileId::Accumulator(i) => (i as usize) < ACCUMULATOR_COUNT,
            PileId::Draw | PileId::Discard => true,
        }
    }

    /// Can the top card of this pile be moved by a player?
    ///
    /// Draw cards are face down; they reach play only through a draw.
    #[must_use]
    pub const fn is_source(self) -> bool {
        !matches!(self, PileId::Draw)
    }

    /// Can a card be placed on this pile by a move?
    #[must_use]
    pub const fn is_target(self) -> bool {
        matches!(self, PileId::Cascade(_) | PileId::Accumulator(_))
    }

    /// Every pile a card can be moved onto, cascades first.
    pub fn targets() -> impl Iterator<Item = PileId> {
        let cascades = (0..CASCADE_COUNT as u8).map(PileId::Cascade);
        let accumulators = (0..ACCUMULATOR_COUNT as u8).map(PileId::Accumulator);
        cascades.chain(accumulators)
    }

    /// Every pile a card can be moved from.
    pub fn sources() -> impl Iterator<Item = PileId> {
        Self::targets().chain(std::iter::once(PileId::Discard))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Cascade(i) => write!(f, "cascade-{}", u16::from(*i) + 1),
            PileId::Accumulator(i) => write!(f, "accumulator-{}", u16::from(*i) + 1),
            PileId::Draw => write!(f, "draw"),
            PileId::Discard => write!(f, "discard"),
        }
    }
}

impl FromStr for PileId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::Pile(s.to_string());

        let indexed = |rest: &str, count: usize| -> Result<u8, ParseError> {
            let n: usize = rest.parse().map_err(|_| bad())?;
            if (1..=count).contains(&n) {
                Ok((n - 1) as u8)
            } else {
                Err(bad())
            }
        };

        match s {
            "draw" => Ok(PileId::Draw),
            "discard" => Ok(PileId::Discard),
            _ => {
                if let Some(rest) = s.strip_prefix("cascade-") {
                    indexed(rest, CASCADE_COUNT).map(PileId::Cascade)
                } else if let Some(rest) = s.strip_prefix("accumulator-") {
                    indexed(rest, ACCUMULATOR_COUNT).map(PileId::Accumulator)
                } else {
                    Err(bad())
                }
            }
        }
    }
}

/// An ordered stack of cards.
///
/// Backed by `im::Vector`, so cloning a pile for a snapshot is cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<Card>,
}

impl Pile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The top card (last element).
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// Put a card on top.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Remove and return the top card.
    pub fn pop_top(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Remove every card, returning them bottom to top.
    pub fn take_all(&mut self) -> Vector<Card> {
        std::mem::take(&mut self.cards)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }
}

impl FromIterator<Card> for Pile {
    /// Collects cards bottom first.
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_pile_id_display() {
        assert_eq!(PileId::Cascade(0).to_string(), "cascade-1");
        assert_eq!(PileId::Cascade(6).to_string(), "cascade-7");
        assert_eq!(PileId::Accumulator(3).to_string(), "accumulator-4");
        assert_eq!(PileId::Draw.to_string(), "draw");
        assert_eq!(PileId::Discard.to_string(), "discard");
    }

    #[test]
    fn test_pile_id_parse() {
        assert_eq!("cascade-1".parse::<PileId>(), Ok(PileId::Cascade(0)));
        assert_eq!("accumulator-4".parse::<PileId>(), Ok(PileId::Accumulator(3)));
        assert_eq!("draw".parse::<PileId>(), Ok(PileId::Draw));
        assert_eq!("discard".parse::<PileId>(), Ok(PileId::Discard));

        for bad in ["cascade-0", "cascade-8", "accumulator-5", "tableau-1", "cascade-x", ""] {
            assert_eq!(bad.parse::<PileId>(), Err(ParseError::Pile(bad.to_string())));
        }
    }

    #[test]
    fn test_validity() {
        assert!(PileId::Cascade(6).is_valid());
        assert!(!PileId::Cascade(7).is_valid());
        assert!(PileId::Accumulator(3).is_valid());
        assert!(!PileId::Accumulator(4).is_valid());
        assert!(PileId::Draw.is_valid());
    }

    #[test]
    fn test_roles() {
        assert!(!PileId::Draw.is_source());
        assert!(PileId::Discard.is_source());
        assert!(!PileId::Discard.is_target());
        assert!(PileId::Accumulator(0).is_target());

        assert_eq!(PileId::targets().count(), CASCADE_COUNT + ACCUMULATOR_COUNT);
        assert_eq!(PileId::sources().count(), CASCADE_COUNT + ACCUMULATOR_COUNT + 1);
        assert!(PileId::targets().all(|p| p.is_valid() && p.is_target()));
        assert!(PileId::sources().all(|p| p.is_valid() && p.is_source()));
    }

    #[test]
    fn test_pile_lifo() {
        let a = Card::ordinal(Suit::Hearts, Rank::Seven);
        let b = Card::ordinal(Suit::Spades, Rank::Six);

        let mut pile = Pile::new();
        assert!(pile.top().is_none());

        pile.push(a);
        pile.push(b);
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top(), Some(b));

        assert_eq!(pile.pop_top(), Some(b));
        assert_eq!(pile.top(), Some(a));

        let taken = pile.take_all();
        assert_eq!(taken.len(), 1);
        assert!(pile.is_empty());
    }

    #[test]
    fn test_from_iter_bottom_first() {
        let a = Card::ordinal(Suit::Clubs, Rank::Two);
        let b = Card::hack(Suit::Clubs);
        let pile: Pile = [a, b].into_iter().collect();
        assert_eq!(pile.top(), Some(b));
        assert_eq!(pile.iter().next(), Some(&a));
    }
}
