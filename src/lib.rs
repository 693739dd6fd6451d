//! # hack-patience
//!
//! Rules engine for a single-player patience game with an energy budget.
//!
//! ## Rules in Brief
//!
//! - 56 cards: 52 ordinal cards plus one **hack** card per suit.
//! - Seven cascades dealt 7, 6, ... 1 cards; 28 cards left in the draw pile.
//! - Drawing costs 2 energy, moving a card costs 1. Energy starts at 100.
//! - A card goes onto an empty cascade or accumulator freely, otherwise onto
//!   a card one rank higher of the opposite color.
//! - The first hack card played recycles the discard pile into the draw
//!   pile, leaves play, and costs 5 energy. Later hacks do nothing.
//! - The game ends when energy reaches zero, or when every ordinal card is
//!   on an accumulator.
//!
//! ## Architecture
//!
//! - **Single mutation surface**: `RulesEngine::apply_action` checks an
//!   action in full before touching the board. Rejections are `MoveError`s
//!   and leave the board unchanged.
//!
//! - **Snapshots**: Piles are `im` vectors, so every call can cheaply return
//!   a `BoardSnapshot` for the presentation layer to render.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, actions, errors
//! - `cards`: Card model and deck
//! - `board`: Piles, board state, snapshots
//! - `rules`: Placement rule, rules engine, terminal evaluation
//! - `game`: Game session handle
//!
//! ```
//! use hack_patience::Game;
//!
//! let mut game = Game::with_seed(42);
//! let snapshot = game.draw_from_stock().unwrap();
//! assert_eq!(snapshot.energy, 98);
//! assert_eq!(snapshot.discard.len(), 1);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    GameRng,
    MoveError, ParseError,
    RulesConfig, ACCUMULATOR_COUNT, CASCADE_COUNT,
};

pub use crate::cards::{Card, Color, Deck, Face, Rank, Suit, DECK_SIZE};

pub use crate::board::{
    Board, BoardLayout, BoardSnapshot, GameStatus, IntegrityError, Pile, PileId, PileKind,
};

pub use crate::rules::{HackRules, RulesEngine};

pub use crate::game::{Game, GameBuilder};
