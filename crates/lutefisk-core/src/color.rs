//! The two sides.

use std::fmt;
use std::ops::Not;

/// A side of the board.
///
/// The discriminant is the color slot in the eight-board snapshot, which is
/// also the side-to-move bit: white = 0, black = 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Color board slot in the snapshot: white 0, black 1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opposite(self) -> Color {
        if matches!(self, Color::White) {
            Color::Black
        } else {
            Color::White
        }
    }

    /// Reads the side-to-move field of a FEN record, in either case.
    pub fn from_fen_field(field: &str) -> Option<Color> {
        match field {
            "w" | "W" => Some(Color::White),
            "b" | "B" => Some(Color::Black),
            _ => None,
        }
    }

    /// Side-to-move letter as written in FEN.
    #[inline]
    pub const fn fen_letter(self) -> char {
        ['w', 'b'][self.index()]
    }

    /// Rank change of one pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        [1, -1][self.index()]
    }

    /// Rank number (1-8) the pawns of this color start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        [2, 7][self.index()]
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Color {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}
