//! Game rules.
//!
//! - `validator`: The placement predicate shared by cascades and accumulators
//! - `engine`: `RulesEngine` trait and the `HackRules` implementation
//! - `terminal`: Win and energy-exhaustion evaluation
//!
//! The board never changes except through `RulesEngine::apply_action`.

pub mod engine;
pub mod terminal;
pub mod validator;

pub use engine::{HackRules, RulesEngine, Targets};
pub use terminal::evaluate;
pub use validator::{can_place, can_place_on};
