//! Card identity: suit, rank, and the hack flag.
//!
//! Cards are small `Copy` values. A card is either an ordinal card (ranks 1
//! through 13) or one of the four hack cards, one per suit. Hack cards have
//! no rank and never take part in rank comparisons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::ParseError;

/// The four suits, in deck-building order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits, in deck-building order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Red for Hearts and Diamonds, black for Clubs and Spades.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-letter label used in card labels.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    fn from_initial(c: char) -> Option<Suit> {
        Suit::ALL.into_iter().find(|s| s.initial() == c)
    }
}

/// Card color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Ordinal rank, ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, ace first.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordinal value in 1..=13.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank for an ordinal value in 1..=13.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// Label used on the card face: `1`..`10`, `J`, `Q`, `K`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "1",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    fn from_label(label: &str) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.label() == label)
    }
}

/// What is printed on a card besides its suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Ordinal(Rank),
    Hack,
}

/// A playing card. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    face: Face,
}

impl Card {
    /// An ordinary ranked card.
    #[must_use]
    pub const fn ordinal(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            face: Face::Ordinal(rank),
        }
    }

    /// The hack card of a suit.
    #[must_use]
    pub const fn hack(suit: Suit) -> Self {
        Self {
            suit,
            face: Face::Hack,
        }
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn face(self) -> Face {
        self.face
    }

    /// Rank of an ordinal card; `None` for a hack card.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        match self.face {
            Face::Ordinal(rank) => Some(rank),
            Face::Hack => None,
        }
    }

    /// True for the four hack cards.
    #[inline]
    #[must_use]
    pub const fn is_special(self) -> bool {
        matches!(self.face, Face::Hack)
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }

    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self.color(), Color::Red)
    }

    /// Ordinal value in 1..=13, or `None` for a hack card.
    #[inline]
    #[must_use]
    pub const fn ordinal_value(self) -> Option<u8> {
        match self.face {
            Face::Ordinal(rank) => Some(rank.value()),
            Face::Hack => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.face {
            Face::Ordinal(rank) => write!(f, "{}{}", rank.label(), self.suit.initial()),
            Face::Hack => write!(f, "HACK {}", self.suit.initial()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parses the label produced by `Display`: `"7H"`, `"10D"`, `"HACK S"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ParseError::Card(s.to_string());

        if let Some(rest) = s.strip_prefix("HACK ") {
            let mut chars = rest.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) => Suit::from_initial(c).map(Card::hack).ok_or_else(bad),
                _ => Err(bad()),
            };
        }

        let suit_char = s.chars().last().ok_or_else(bad)?;
        let suit = Suit::from_initial(suit_char).ok_or_else(bad)?;
        let rank = Rank::from_label(&s[..s.len() - suit_char.len_utf8()]).ok_or_else(bad)?;
        Ok(Card::ordinal(suit, rank))
    }
}
