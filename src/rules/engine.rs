//! Rules engine: action checking and application.
//!
//! `RulesEngine` is the single mutation surface for a `Board`. Every action
//! is checked in full before anything is touched, so a rejected action
//! leaves the board exactly as it was.
//!
//! ## Check order
//!
//! 1. Terminal board → `GameOver`
//! 2. Energy gate (draw cost for draws, move cost for any move)
//! 3. Pile ids, source kind, source emptiness, card on top
//! 4. Hack path (one-shot) or ordinary placement rule

use smallvec::SmallVec;
use tracing::debug;

use super::terminal;
use super::validator;
use crate::board::{Board, BoardLayout, GameStatus, IntegrityError, PileId};
use crate::cards::{Card, Deck};
use crate::core::{Action, GameRng, MoveError, RulesConfig};

/// Destinations for a single card (at most every cascade and accumulator).
pub type Targets = SmallVec<[PileId; 11]>;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `check`: Must not mutate; `apply_action` calls it first
/// - `apply_action`: All-or-nothing
/// - `is_terminal`: Return `None` while the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Shuffle a fresh deck and deal it.
    ///
    /// The returned board already carries its evaluated status.
    fn deal(&self, rng: &mut GameRng) -> Board;

    /// Build a board from an explicit layout, with its evaluated status.
    fn board_from_layout(&self, layout: BoardLayout) -> Result<Board, IntegrityError>;

    /// Would `action` succeed on `board`?
    fn check(&self, board: &Board, action: &Action) -> Result<(), MoveError>;

    /// Apply an action to the board.
    fn apply_action(&self, board: &mut Board, action: &Action) -> Result<(), MoveError>;

    /// Check if the game is over.
    ///
    /// Returns `Some(status)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, board: &Board) -> Option<GameStatus> {
        let status = board.status();
        status.is_terminal().then_some(status)
    }

    // === Convenience Methods ===

    /// Every pile `card` could legally be moved onto from `from`.
    fn legal_targets(&self, board: &Board, card: Card, from: PileId) -> Targets {
        PileId::targets()
            .filter(|&to| self.check(board, &Action::transfer(card, from, to)).is_ok())
            .collect()
    }

    /// Enumerate all legal actions.
    ///
    /// A hack card fires wherever it is dropped, so it is listed once, with
    /// the first cascade as its nominal target.
    fn legal_actions(&self, board: &Board) -> Vec<Action> {
        let mut actions = Vec::new();

        if self.check(board, &Action::Draw).is_ok() {
            actions.push(Action::Draw);
        }

        for from in PileId::sources() {
            let Some(card) = board.top_of(from) else {
                continue;
            };
            if card.is_special() {
                let action = Action::transfer(card, from, PileId::Cascade(0));
                if self.check(board, &action).is_ok() {
                    actions.push(action);
                }
            } else {
                for to in self.legal_targets(board, card, from) {
                    actions.push(Action::transfer(card, from, to));
                }
            }
        }

        actions
    }
}

/// The energy-gated patience rules with one-shot hack cards.
#[derive(Clone, Debug, Default)]
pub struct HackRules {
    config: RulesConfig,
}

impl HackRules {
    /// Create rules with the given configuration.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    fn require_energy(board: &Board, required: u32) -> Result<(), MoveError> {
        if board.energy() < required {
            return Err(MoveError::InsufficientEnergy {
                required,
                available: board.energy(),
            });
        }
        Ok(())
    }

    fn check_move(
        &self,
        board: &Board,
        card: Card,
        from: PileId,
        to: PileId,
    ) -> Result<(), MoveError> {
        Self::require_energy(board, self.config.move_cost)?;

        for id in [from, to] {
            if !id.is_valid() {
                return Err(MoveError::UnknownPile(id));
            }
        }
        if !from.is_source() {
            return Err(MoveError::IllegalMove);
        }

        let top = board.top_of(from).ok_or(MoveError::EmptySource(from))?;
        if top != card {
            return Err(MoveError::NotOnTop { card, pile: from });
        }

        if card.is_special() {
            if board.hack_used() {
                return Err(MoveError::SpecialAlreadyUsed);
            }
            return Ok(());
        }

        if from == to || !validator::can_place_on(card, to.kind(), board.top_of(to)) {
            return Err(MoveError::IllegalMove);
        }
        Ok(())
    }

    fn fire_hack(&self, board: &mut Board, from: PileId) {
        board.mark_hack_used();
        board.retire_top(from);
        let recycled = board.recycle_discard();
        board.spend_energy(self.config.hack_cost);
        debug!(recycled, energy = board.energy(), "hack fired");
    }
}

impl RulesEngine for HackRules {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn deal(&self, rng: &mut GameRng) -> Board {
        let mut board = Board::deal(Deck::shuffled(rng), self.config.starting_energy);
        terminal::settle(&mut board, &self.config);
        board
    }

    fn board_from_layout(&self, layout: BoardLayout) -> Result<Board, IntegrityError> {
        let mut board = Board::from_layout(layout, self.config.starting_energy)?;
        terminal::settle(&mut board, &self.config);
        Ok(board)
    }

    fn check(&self, board: &Board, action: &Action) -> Result<(), MoveError> {
        if board.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        match *action {
            Action::Draw => {
                Self::require_energy(board, self.config.draw_cost)?;
                if board.draw().is_empty() {
                    return Err(MoveError::EmptyStock);
                }
                Ok(())
            }
            Action::Move { card, from, to } => self.check_move(board, card, from, to),
        }
    }

    fn apply_action(&self, board: &mut Board, action: &Action) -> Result<(), MoveError> {
        if let Err(err) = self.check(board, action) {
            debug!(%action, reason = %err, energy = board.energy(), "action rejected");
            return Err(err);
        }

        match *action {
            Action::Draw => {
                board.move_top(PileId::Draw, PileId::Discard);
                board.spend_energy(self.config.draw_cost);
            }
            Action::Move { card, from, .. } if card.is_special() => {
                self.fire_hack(board, from);
            }
            Action::Move { from, to, .. } => {
                board.move_top(from, to);
                board.spend_energy(self.config.move_cost);
            }
        }

        board.record(*action);
        debug!(%action, energy = board.energy(), "action applied");
        terminal::settle(board, &self.config);
        debug_assert!(board.check_integrity().is_ok(), "board integrity broken by {}", action);

        Ok(())
    }
}
