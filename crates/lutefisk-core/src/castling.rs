//! Castling rights.

use crate::Color;
use std::fmt;

/// FEN letters of the four rights; letter `i` is bit `1 << i`.
const LETTERS: [char; 4] = ['K', 'Q', 'k', 'q'];

/// Which of the four castles are still allowed. Bit order is `KQkq`, low
/// bit first, which is also the order the hash keys use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn bit(color: Color, kingside: bool) -> u8 {
        let shift = color.index() * 2 + if kingside { 0 } else { 1 };
        1 << shift
    }

    /// Reads the FEN castling field: `-`, or any combination of `KQkq`.
    /// Anything else, the empty string included, is `None`.
    pub fn from_fen(field: &str) -> Option<Self> {
        if field == "-" {
            return Some(Self::NONE);
        }
        if field.is_empty() {
            return None;
        }
        field.chars().try_fold(Self::NONE, |rights, c| {
            let i = LETTERS.iter().position(|&l| l == c)?;
            Some(CastlingRights(rights.0 | 1 << i))
        })
    }

    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        self.0 & Self::bit(color, true) != 0
    }

    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        self.0 & Self::bit(color, false) != 0
    }

    /// Drops both rights of `color`.
    pub fn remove_color(&mut self, color: Color) {
        self.0 &= !(Self::bit(color, true) | Self::bit(color, false));
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The four flags in `KQkq` order, low bit first.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        LETTERS
            .iter()
            .enumerate()
            .filter(|(i, _)| self.0 & 1 << i != 0)
            .try_for_each(|(_, c)| write!(f, "{}", c))
    }
}
