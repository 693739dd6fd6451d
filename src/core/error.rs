//! Error types.
//!
//! Every rejected action is reported as a `MoveError`. All of them are
//! recoverable: a rejected call leaves the board exactly as it was.

use thiserror::Error;

use crate::board::PileId;
use crate::cards::Card;

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("illegal move")]
    IllegalMove,
    #[error("not enough energy: need {required}, have {available}")]
    InsufficientEnergy { required: u32, available: u32 },
    #[error("{0} is empty")]
    EmptySource(PileId),
    #[error("draw pile is empty")]
    EmptyStock,
    #[error("a hack card has already been used")]
    SpecialAlreadyUsed,
    #[error("game is over")]
    GameOver,
    #[error("{card} is not on top of {pile}")]
    NotOnTop { card: Card, pile: PileId },
    #[error("no such pile: {0}")]
    UnknownPile(PileId),
}

/// Failure to parse a card label or pile id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid card label: {0:?}")]
    Card(String),
    #[error("invalid pile id: {0:?}")]
    Pile(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_messages() {
        let err = MoveError::InsufficientEnergy {
            required: 2,
            available: 1,
        };
        assert_eq!(err.to_string(), "not enough energy: need 2, have 1");

        let err = MoveError::NotOnTop {
            card: Card::ordinal(Suit::Hearts, Rank::Seven),
            pile: PileId::Cascade(0),
        };
        assert_eq!(err.to_string(), "7H is not on top of cascade-1");

        assert_eq!(
            MoveError::EmptySource(PileId::Discard).to_string(),
            "discard is empty"
        );
    }
}
