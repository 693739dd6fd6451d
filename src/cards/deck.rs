//! Deck construction.

use super::card::{Card, Rank, Suit};
use crate::core::GameRng;

/// Ordinal cards in a deck.
pub const ORDINAL_CARD_COUNT: usize = 52;

/// Total cards in a deck, hack cards included.
pub const DECK_SIZE: usize = 56;

/// The full 56-card deck: thirteen ranks plus one hack card per suit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the deck in canonical order.
    ///
    /// For each suit: ranks 1 through 13, then that suit's hack card.
    #[must_use]
    pub fn build() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            cards.extend(Rank::ALL.into_iter().map(|rank| Card::ordinal(suit, rank)));
            cards.push(Card::hack(suit));
        }
        Self { cards }
    }

    /// Build the deck and shuffle it.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::build();
        deck.shuffle(rng);
        deck
    }

    /// Shuffle into a uniformly random order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Take the card at the end of the deck.
    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Consume the deck, returning what is left in order.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}
