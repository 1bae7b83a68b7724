//! Moves as from/to square pairs.

use crate::Square;
use std::fmt;

/// Kind of move, as decided by the applier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    Quiet,
    /// Pawn advanced two ranks from its start rank; sets the en passant target.
    DoublePush,
    Capture,
    CastleKingside,
    CastleQueenside,
}

impl MoveFlag {
    /// Notation of a castling move, `None` for anything else.
    pub const fn castle_notation(self) -> Option<&'static str> {
        match self {
            MoveFlag::CastleKingside => Some("O-O"),
            MoveFlag::CastleQueenside => Some("O-O-O"),
            _ => None,
        }
    }
}

/// A piece transfer from one square to another. Which piece moves is not
/// part of the move; the caller supplies it when applying.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// A transfer from `from` to `to`; the squares are not checked further.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Builds a move from two linear indices, `None` if either is past 63.
    pub const fn from_indices(from: u8, to: u8) -> Option<Self> {
        match (Square::from_index(from), Square::from_index(to)) {
            (Some(from), Some(to)) => Some(Move { from, to }),
            _ => None,
        }
    }

    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Long algebraic text as used by UCI engines, e.g. `e2e4`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }

    /// Parses exactly four characters of long algebraic text.
    pub fn from_uci(text: &str) -> Option<Self> {
        if text.len() != 4 {
            return None;
        }
        let from = Square::from_algebraic(text.get(..2)?)?;
        let to = Square::from_algebraic(text.get(2..)?)?;
        Some(Move { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}
