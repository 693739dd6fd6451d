//! Rules configuration.
//!
//! The energy economy is data, not code: `RulesConfig` carries the starting
//! budget and the price of every action. The defaults are the standard game.

use serde::{Deserialize, Serialize};

/// Number of cascades on the board.
pub const CASCADE_COUNT: usize = 7;

/// Number of accumulators on the board.
pub const ACCUMULATOR_COUNT: usize = 4;

/// Energy budget and action prices.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Energy at the start of a game.
    pub starting_energy: u32,

    /// Energy spent moving one card from Draw to Discard.
    pub draw_cost: u32,

    /// Energy spent on an ordinary card move. Also the minimum energy
    /// needed to attempt any move, including a hack.
    pub move_cost: u32,

    /// Energy spent when a hack card fires.
    pub hack_cost: u32,

    /// Finish the game as won once every ordinal card sits on an accumulator.
    #[serde(default = "default_detect_win")]
    pub detect_win: bool,
}

fn default_detect_win() -> bool {
    true
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_energy: 100,
            draw_cost: 2,
            move_cost: 1,
            hack_cost: 5,
            detect_win: true,
        }
    }
}

impl RulesConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting energy.
    ///
    /// Panics if `energy` is zero: a game must be playable at all.
    #[must_use]
    pub fn with_starting_energy(mut self, energy: u32) -> Self {
        assert!(energy > 0, "Starting energy must be positive");
        self.starting_energy = energy;
        self
    }

    /// Set the draw cost.
    #[must_use]
    pub fn with_draw_cost(mut self, cost: u32) -> Self {
        self.draw_cost = cost;
        self
    }

    /// Set the ordinary move cost.
    #[must_use]
    pub fn with_move_cost(mut self, cost: u32) -> Self {
        self.move_cost = cost;
        self
    }

    /// Set the hack cost.
    #[must_use]
    pub fn with_hack_cost(mut self, cost: u32) -> Self {
        self.hack_cost = cost;
        self
    }

    /// Turn win detection on or off.
    #[must_use]
    pub fn with_win_detection(mut self, enabled: bool) -> Self {
        self.detect_win = enabled;
        self
    }
}
