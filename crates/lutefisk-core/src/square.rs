//! Board squares.
//!
//! A square is stored as its linear index, counted rank-major from the top
//! left of the board as drawn: a8 = 0, b8 = 1, ..., h8 = 7, a7 = 8, ...,
//! h1 = 63. Ranks and files are the board numbers 1-8 (file 1 = a).
//!
//! Bitboards mirror that order: the bit for index `i` is `63 - i`, so a8 is
//! the most significant bit and h1 the least significant.

use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    pub const A8: Square = Square(0);
    pub const C8: Square = Square(2);
    pub const D8: Square = Square(3);
    pub const E8: Square = Square(4);
    pub const F8: Square = Square(5);
    pub const G8: Square = Square(6);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const B1: Square = Square(57);
    pub const C1: Square = Square(58);
    pub const D1: Square = Square(59);
    pub const E1: Square = Square(60);
    pub const F1: Square = Square(61);
    pub const G1: Square = Square(62);
    pub const H1: Square = Square(63);

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// `None` unless both `rank` and `file` are in 1-8.
    #[inline]
    pub const fn from_rank_file(rank: u8, file: u8) -> Option<Self> {
        if rank < 1 || rank > 8 || file < 1 || file > 8 {
            return None;
        }
        Some(Square((8 - rank) * 8 + file - 1))
    }

    /// The square of a mask with exactly one bit set.
    #[inline]
    pub const fn from_bit(bit: u64) -> Option<Self> {
        if !bit.is_power_of_two() {
            return None;
        }
        Some(Square(63 - bit.trailing_zeros() as u8))
    }

    /// Parses `[a-h][1-8]`. Uppercase files are not accepted.
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        match s.as_bytes() {
            &[f @ b'a'..=b'h', r @ b'1'..=b'8'] => Self::from_rank_file(r - b'0', f - b'a' + 1),
            _ => None,
        }
    }

    /// Linear index, a8 = 0 through h1 = 63.
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Rank number, 1-8.
    #[inline]
    pub const fn rank(self) -> u8 {
        8 - self.0 / 8
    }

    /// File number, 1-8.
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8 + 1
    }

    #[inline]
    pub const fn rank_file(self) -> (u8, u8) {
        (self.rank(), self.file())
    }

    /// File letter, 'a'-'h'.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.0 % 8) as char
    }

    /// Position of this square's bit in a bitboard.
    #[inline]
    pub const fn bit_index(self) -> u8 {
        63 - self.0
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1 << self.bit_index()
    }

    /// The square `ranks` towards rank 8 and `files` towards file h, if it
    /// is on the board.
    pub const fn offset(self, ranks: i8, files: i8) -> Option<Self> {
        let rank = self.rank() as i8 + ranks;
        let file = self.file() as i8 + files;
        if rank < 1 || file < 1 {
            return None;
        }
        Self::from_rank_file(rank as u8, file as u8)
    }

    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
