//! Board state: piles, energy, and game status.
//!
//! ## Key Types
//!
//! - `PileId`: Logical pile identifier (kind + index)
//! - `Pile`: Ordered stack of cards, top last
//! - `Board`: Owner of every pile and the energy counter
//! - `BoardSnapshot`: Read-only copy handed to renderers

pub mod pile;
pub mod state;

pub use pile::{Pile, PileId, PileKind};
pub use state::{Board, BoardLayout, BoardSnapshot, GameStatus, IntegrityError};
