//! Game sessions.
//!
//! The external interface: start a game, draw, move, and observe the
//! resulting snapshot. Rendering and input capture live elsewhere and only
//! call into `Game`.

pub mod session;

pub use session::{Game, GameBuilder};
