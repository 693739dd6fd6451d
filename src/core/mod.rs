//! Core engine types: RNG, configuration, actions, errors.
//!
//! These are the building blocks the board and the rules share.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use config::{RulesConfig, ACCUMULATOR_COUNT, CASCADE_COUNT};
pub use error::{MoveError, ParseError};
pub use rng::GameRng;
