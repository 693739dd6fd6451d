//! Terminal-state evaluation.

use tracing::info;

use crate::board::{Board, GameStatus};
use crate::core::RulesConfig;

/// Status the board should be in right now.
///
/// A completed set of accumulators wins even if the final move spent the
/// last unit of energy.
#[must_use]
pub fn evaluate(board: &Board, config: &RulesConfig) -> GameStatus {
    if config.detect_win && board.accumulators_complete() {
        GameStatus::Won
    } else if board.is_game_over() {
        GameStatus::GameOver
    } else {
        GameStatus::Active
    }
}

/// Re-evaluate after a mutation and store the result.
pub(crate) fn settle(board: &mut Board, config: &RulesConfig) -> GameStatus {
    let status = evaluate(board, config);
    if status != board.status() {
        info!(from = ?board.status(), to = ?status, energy = board.energy(), "status changed");
        board.set_status(status);
    }
    status
}
