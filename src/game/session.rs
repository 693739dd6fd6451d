//! Game session: the handle a presentation layer drives.

use tracing::info;

use crate::board::{Board, BoardLayout, BoardSnapshot, GameStatus, IntegrityError, PileId};
use crate::cards::Card;
use crate::core::{Action, GameRng, MoveError, RulesConfig};
use crate::rules::{HackRules, RulesEngine};

/// A running game.
///
/// Owns the board, the rules, and the RNG used for deals. Every call returns
/// a fresh `BoardSnapshot` on success, so the caller can redraw without
/// reaching into internals.
#[derive(Clone, Debug)]
pub struct Game<R: RulesEngine = HackRules> {
    rules: R,
    board: Board,
    rng: GameRng,
}

/// Builder for creating a `Game`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    seed: Option<u64>,
    config: RulesConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the deal. Without a seed the deal is random.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    fn rng(&self) -> GameRng {
        self.seed.map_or_else(GameRng::from_entropy, GameRng::new)
    }

    /// Shuffle, deal, and start the game.
    pub fn build(self) -> Game {
        let rng = self.rng();
        Game::start(HackRules::new(self.config), rng)
    }

    /// Start from an explicit layout instead of a deal.
    ///
    /// Later calls to `new_game` deal normally.
    pub fn build_from_layout(self, layout: BoardLayout) -> Result<Game, IntegrityError> {
        let rng = self.rng();
        let rules = HackRules::new(self.config);
        let board = rules.board_from_layout(layout)?;
        info!(seed = rng.seed(), status = ?board.status(), "game started from layout");
        Ok(Game { rules, board, rng })
    }
}

impl Game {
    /// Start a game with the standard rules and a random deal.
    pub fn new() -> Self {
        GameBuilder::new().build()
    }

    /// Start a game with the standard rules and a fixed deal.
    pub fn with_seed(seed: u64) -> Self {
        GameBuilder::new().seed(seed).build()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RulesEngine> Game<R> {
    /// Start a game under custom rules.
    pub fn start(rules: R, mut rng: GameRng) -> Self {
        let board = rules.deal(&mut rng);
        info!(seed = rng.seed(), energy = board.energy(), "game started");
        Self { rules, board, rng }
    }

    /// Throw away the current board and deal a new one.
    pub fn new_game(&mut self) -> BoardSnapshot {
        self.board = self.rules.deal(&mut self.rng);
        info!(seed = self.rng.seed(), energy = self.board.energy(), "new game dealt");
        self.board.snapshot()
    }

    /// Move the top of the draw pile onto the discard pile.
    pub fn draw_from_stock(&mut self) -> Result<BoardSnapshot, MoveError> {
        self.apply(&Action::Draw)
    }

    /// Move `card` from the top of `from` onto `to`.
    ///
    /// A hack card fires instead of landing on `to`.
    pub fn attempt_move(
        &mut self,
        card: Card,
        from: PileId,
        to: PileId,
    ) -> Result<BoardSnapshot, MoveError> {
        self.apply(&Action::transfer(card, from, to))
    }

    /// Apply any action.
    pub fn apply(&mut self, action: &Action) -> Result<BoardSnapshot, MoveError> {
        self.rules.apply_action(&mut self.board, action)?;
        Ok(self.board.snapshot())
    }

    /// True once energy has run out.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.board.energy()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Seed of the RNG that dealt this game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Every action that would currently succeed.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.rules.legal_actions(&self.board)
    }
}
