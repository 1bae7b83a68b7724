//! Piece codec: piece types, their FEN letters, and where each one lives in
//! the eight-board snapshot.

use crate::Color;
use std::fmt;

/// Length of a position snapshot: `[white, black, pawns, knights, bishops,
/// rooks, queens, kings]`.
pub const BOARD_COUNT: usize = 8;

/// Lowercase FEN letters, indexed by piece type.
const FEN_LETTERS: [u8; 6] = *b"pnbrqk";

const NAMES: [&str; 6] = ["Pawn", "Knight", "Bishop", "Rook", "Queen", "King"];

/// A piece type, without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Piece types in snapshot order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snapshot slot of this type's bitboard; the two color slots come first.
    #[inline]
    pub const fn board_index(self) -> usize {
        Color::ALL.len() + self.index()
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub const fn to_fen_char(self, color: Color) -> char {
        let letter = FEN_LETTERS[self.index()];
        match color {
            Color::White => letter.to_ascii_uppercase() as char,
            Color::Black => letter as char,
        }
    }

    /// Decodes one of `PNBRQKpnbrqk`.
    pub const fn from_fen_char(c: char) -> Option<(Piece, Color)> {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let lower = (c as u8).to_ascii_lowercase();
        let mut i = 0;
        while i < FEN_LETTERS.len() {
            if FEN_LETTERS[i] == lower {
                return Some((Piece::ALL[i], color));
            }
            i += 1;
        }
        None
    }

    /// Letter written in front of a move, e.g. the `N` of `Nf3`. Pawns have
    /// none.
    #[inline]
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            Piece::Pawn => None,
            _ => Some(self.to_fen_char(Color::White)),
        }
    }
}

/// Snapshot slots `(piece_board, color_board)` touched by a piece of this
/// type and color.
#[inline]
pub const fn board_indices(piece: Piece, color: Color) -> (usize, usize) {
    (piece.board_index(), color.index())
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NAMES[self.index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_decode_to_piece_and_color() {
        let white = "PNBRQK".chars();
        let black = "pnbrqk".chars();
        for (piece, (upper, lower)) in Piece::ALL.into_iter().zip(white.zip(black)) {
            assert_eq!(Piece::from_fen_char(upper), Some((piece, Color::White)));
            assert_eq!(Piece::from_fen_char(lower), Some((piece, Color::Black)));
            assert_eq!(piece.to_fen_char(Color::White), upper);
            assert_eq!(piece.to_fen_char(Color::Black), lower);
        }
    }

    #[test]
    fn non_piece_characters() {
        for c in ['x', 'X', '8', '/', ' ', 'é', 'w'] {
            assert_eq!(Piece::from_fen_char(c), None, "{:?}", c);
        }
    }

    #[test]
    fn move_letters() {
        let letters: Vec<_> = Piece::ALL.iter().map(|p| p.notation_letter()).collect();
        assert_eq!(
            letters,
            [None, Some('N'), Some('B'), Some('R'), Some('Q'), Some('K')]
        );
    }

    #[test]
    fn snapshot_layout() {
        assert_eq!(board_indices(Piece::Pawn, Color::White), (2, 0));
        assert_eq!(board_indices(Piece::Rook, Color::Black), (5, 1));
        let slots: Vec<_> = Piece::ALL.iter().map(|p| p.board_index()).collect();
        assert_eq!(slots, (2..BOARD_COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn names() {
        assert_eq!(Piece::Knight.to_string(), "Knight");
        assert_eq!(Piece::King.to_string(), "King");
    }
}
