//! Card model and deck construction.
//!
//! ## Key Types
//!
//! - `Card`: Immutable identity (suit + rank, or a hack card)
//! - `Suit`, `Rank`, `Color`: Card attributes
//! - `Deck`: The 56-card deck and its shuffle

pub mod card;
pub mod deck;

pub use card::{Card, Color, Face, Rank, Suit};
pub use deck::{Deck, DECK_SIZE, ORDINAL_CARD_COUNT};
