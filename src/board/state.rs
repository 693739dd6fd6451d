//! Board state: every pile, the energy counter, and the game status.
//!
//! ## Board
//!
//! The single owner of all 56 cards. Every card is in exactly one of:
//! - seven cascades
//! - four accumulators
//! - the draw pile and the discard pile
//! - the spent pile (hack cards that fired and left play)
//!
//! Reads are public. Mutation primitives are crate-private; the rules
//! engine is the only caller, and it gates every one of them.
//!
//! ## BoardSnapshot
//!
//! Plain read-only copy of the board handed to the presentation layer.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::pile::{Pile, PileId};
use crate::cards::{Card, Deck, DECK_SIZE, ORDINAL_CARD_COUNT};
use crate::core::action::{Action, ActionRecord};
use crate::core::config::{ACCUMULATOR_COUNT, CASCADE_COUNT};

/// Lifecycle of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Active,
    /// Every ordinal card sits on an accumulator.
    Won,
    /// Energy ran out.
    GameOver,
}

impl GameStatus {
    /// No further actions are accepted.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

/// A board that no sequence of legal actions could produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("expected 56 cards, found {0}")]
    WrongCount(usize),
    #[error("{0} appears more than once")]
    Duplicate(Card),
    #[error("{0} is missing")]
    Missing(Card),
    #[error("{0} is an ordinal card and cannot be spent")]
    SpentOrdinal(Card),
    #[error("only one hack card can fire, found {0} spent")]
    TooManySpent(usize),
    #[error("{0} cannot rest on an accumulator")]
    SpecialOnAccumulator(Card),
}

/// The complete game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cascades: [Pile; CASCADE_COUNT],
    accumulators: [Pile; ACCUMULATOR_COUNT],
    draw: Pile,
    discard: Pile,
    spent: Pile,
    energy: u32,
    hack_used: bool,
    status: GameStatus,
    history: Vector<ActionRecord>,
}

impl Board {
    /// Deal a deck onto a fresh board.
    ///
    /// Round `r` (0..7) deals one card to each of cascades `0..7 - r`, so
    /// cascade `i` ends up with `7 - i` cards. Cards come off the end of
    /// the deck; the 28 left over become the draw pile, whose top is the
    /// deck's last remaining card.
    #[must_use]
    pub fn deal(mut deck: Deck, energy: u32) -> Self {
        let mut cascades: [Pile; CASCADE_COUNT] = Default::default();

        for round in 0..CASCADE_COUNT {
            for cascade in cascades.iter_mut().take(CASCADE_COUNT - round) {
                if let Some(card) = deck.pop() {
                    cascade.push(card);
                }
            }
        }

        Self {
            cascades,
            accumulators: Default::default(),
            draw: deck.into_cards().into_iter().collect(),
            discard: Pile::new(),
            spent: Pile::new(),
            energy,
            hack_used: false,
            status: GameStatus::Active,
            history: Vector::new(),
        }
    }

    /// Build a board from an explicit layout.
    ///
    /// Used for puzzles and scripted scenarios. The layout must hold each of
    /// the 56 cards exactly once and pass `check_integrity`. A non-empty spent
    /// pile means a hack card has already fired.
    ///
    /// The board starts `Active`; the rules engine settles the real status.
    pub fn from_layout(layout: BoardLayout, energy: u32) -> Result<Self, IntegrityError> {
        let BoardLayout {
            cascades,
            accumulators,
            draw,
            discard,
            spent,
        } = layout;

        let board = Self {
            cascades: cascades.map(Pile::from_iter),
            accumulators: accumulators.map(Pile::from_iter),
            draw: draw.into_iter().collect(),
            discard: discard.into_iter().collect(),
            hack_used: !spent.is_empty(),
            spent: spent.into_iter().collect(),
            energy,
            status: GameStatus::Active,
            history: Vector::new(),
        };
        board.check_integrity()?;
        Ok(board)
    }

    // === Queries ===

    /// Look up a pile. `None` if the id is out of range.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Cascade(i) => self.cascades.get(usize::from(i)),
            PileId::Accumulator(i) => self.accumulators.get(usize::from(i)),
            PileId::Draw => Some(&self.draw),
            PileId::Discard => Some(&self.discard),
        }
    }

    /// Top card of a pile, if the pile exists and is non-empty.
    #[must_use]
    pub fn top_of(&self, id: PileId) -> Option<Card> {
        self.pile(id)?.top()
    }

    #[must_use]
    pub fn cascades(&self) -> &[Pile; CASCADE_COUNT] {
        &self.cascades
    }

    #[must_use]
    pub fn accumulators(&self) -> &[Pile; ACCUMULATOR_COUNT] {
        &self.accumulators
    }

    #[must_use]
    pub fn draw(&self) -> &Pile {
        &self.draw
    }

    #[must_use]
    pub fn discard(&self) -> &Pile {
        &self.discard
    }

    /// Hack cards that have fired.
    #[must_use]
    pub fn spent(&self) -> &Pile {
        &self.spent
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[must_use]
    pub fn hack_used(&self) -> bool {
        self.hack_used
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once energy has run out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.energy == 0
    }

    /// Applied actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Are all ordinal cards on the accumulators?
    #[must_use]
    pub fn accumulators_complete(&self) -> bool {
        let stacked = self
            .accumulators
            .iter()
            .flat_map(|pile| pile.iter())
            .filter(|card| !card.is_special())
            .count();
        stacked == ORDINAL_CARD_COUNT
    }

    /// Every card from every location, including spent hack cards.
    pub fn all_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cascades
            .iter()
            .chain(self.accumulators.iter())
            .chain([&self.draw, &self.discard, &self.spent])
            .flat_map(|pile| pile.iter().copied())
    }

    /// Check that the board is reachable by play.
    ///
    /// - each of the 56 cards is present exactly once
    /// - the spent pile holds at most one card, and only a hack card
    /// - no hack card rests on an accumulator
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        self.check_conservation()?;
        self.check_placement()
    }

    fn check_conservation(&self) -> Result<(), IntegrityError> {
        let mut seen = FxHashSet::default();
        let mut count = 0;
        for card in self.all_cards() {
            count += 1;
            if !seen.insert(card) {
                return Err(IntegrityError::Duplicate(card));
            }
        }
        if count != DECK_SIZE {
            return Err(IntegrityError::WrongCount(count));
        }
        match Deck::build().cards().iter().find(|c| !seen.contains(*c)) {
            Some(card) => Err(IntegrityError::Missing(*card)),
            None => Ok(()),
        }
    }

    fn check_placement(&self) -> Result<(), IntegrityError> {
        if let Some(card) = self.spent.iter().find(|card| !card.is_special()) {
            return Err(IntegrityError::SpentOrdinal(*card));
        }
        if self.spent.len() > 1 {
            return Err(IntegrityError::TooManySpent(self.spent.len()));
        }
        let hack = self
            .accumulators
            .iter()
            .flat_map(|pile| pile.iter())
            .find(|card| card.is_special());
        match hack {
            Some(card) => Err(IntegrityError::SpecialOnAccumulator(*card)),
            None => Ok(()),
        }
    }

    /// Read-only copy for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cascades: self.cascades.iter().map(|p| p.cards().clone()).collect(),
            accumulators: self.accumulators.iter().map(|p| p.cards().clone()).collect(),
            draw: self.draw.cards().clone(),
            discard: self.discard.cards().clone(),
            spent: self.spent.cards().clone(),
            energy: self.energy,
            hack_used: self.hack_used,
            status: self.status,
            moves_made: self.history.len(),
        }
    }

    // === Mutation primitives (gated by the rules engine) ===

    fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Cascade(i) => self.cascades.get_mut(usize::from(i)),
            PileId::Accumulator(i) => self.accumulators.get_mut(usize::from(i)),
            PileId::Draw => Some(&mut self.draw),
            PileId::Discard => Some(&mut self.discard),
        }
    }

    /// Move the top of `from` onto `to`. Returns the moved card.
    pub(crate) fn move_top(&mut self, from: PileId, to: PileId) -> Option<Card> {
        if self.pile(to).is_none() {
            return None;
        }
        let card = self.pile_mut(from)?.pop_top()?;
        if let Some(target) = self.pile_mut(to) {
            target.push(card);
        }
        Some(card)
    }

    /// Take the top of `from` out of play.
    pub(crate) fn retire_top(&mut self, from: PileId) -> Option<Card> {
        let card = self.pile_mut(from)?.pop_top()?;
        self.spent.push(card);
        Some(card)
    }

    /// Put the whole discard pile back on top of the draw pile.
    ///
    /// The discard is reversed so the next draws return its cards in the
    /// order they were originally drawn; the old draw pile follows.
    pub(crate) fn recycle_discard(&mut self) -> usize {
        let recycled = self.discard.take_all();
        let count = recycled.len();
        for card in recycled.into_iter().rev() {
            self.draw.push(card);
        }
        count
    }

    /// Deduct energy, stopping at zero.
    pub(crate) fn spend_energy(&mut self, amount: u32) {
        self.energy = self.energy.saturating_sub(amount);
    }

    pub(crate) fn mark_hack_used(&mut self) {
        self.hack_used = true;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Append an applied action to the history.
    pub(crate) fn record(&mut self, action: Action) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord {
            action,
            sequence,
            energy_after: self.energy,
        });
    }
}

/// Explicit pile contents, each listed bottom to top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub cascades: [Vec<Card>; CASCADE_COUNT],
    pub accumulators: [Vec<Card>; ACCUMULATOR_COUNT],
    pub draw: Vec<Card>,
    pub discard: Vec<Card>,
    pub spent: Vec<Card>,
}

/// Read-only view of a board, for rendering.
///
/// Piles are listed bottom to top.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub cascades: Vec<Vector<Card>>,
    pub accumulators: Vec<Vector<Card>>,
    pub draw: Vector<Card>,
    pub discard: Vector<Card>,
    pub spent: Vector<Card>,
    pub energy: u32,
    pub hack_used: bool,
    pub status: GameStatus,
    pub moves_made: usize,
}

impl BoardSnapshot {
    /// Top card of a pile, as the presentation layer would show it.
    #[must_use]
    pub fn top_of(&self, id: PileId) -> Option<Card> {
        let pile = match id {
            PileId::Cascade(i) => self.cascades.get(usize::from(i))?,
            PileId::Accumulator(i) => self.accumulators.get(usize::from(i))?,
            PileId::Draw => &self.draw,
            PileId::Discard => &self.discard,
        };
        pile.back().copied()
    }
}
