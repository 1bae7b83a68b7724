//! Chess position representation.

use lutefisk_core::{board_indices, CastlingRights, Color, Fen, Piece, Square, BOARD_COUNT};
use std::fmt;

use crate::Bitboard;

/// Mutable board state: eight bitboards plus side to move, castling rights,
/// en passant target and the two move counters.
///
/// Board slots follow [`board_indices`]: slot 0 holds every white piece,
/// slot 1 every black piece, slots 2-7 hold pawns, knights, bishops, rooks,
/// queens and kings of both colors. Every occupied square is set in exactly
/// one color slot and exactly one piece slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) boards: [Bitboard; BOARD_COUNT],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// Creates an empty position: no pieces, white to move, no castling
    /// rights, no en passant target, both counters zero.
    pub fn empty() -> Self {
        Position {
            boards: [Bitboard::EMPTY; BOARD_COUNT],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 0,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_fen(Fen::STARTPOS)
    }

    /// Places a piece at `(rank, file)`.
    ///
    /// Setting an already-set bit is a no-op.
    ///
    /// # Panics
    /// Panics if `rank` or `file` is outside 1-8.
    pub fn set_piece(&mut self, piece: Piece, color: Color, rank: u8, file: u8) {
        let sq = square_at(rank, file);
        self.put(sq, piece, color);
    }

    /// Removes a piece from `(rank, file)`.
    ///
    /// Removing a piece that is not there is a no-op.
    ///
    /// # Panics
    /// Panics if `rank` or `file` is outside 1-8.
    pub fn remove_piece(&mut self, piece: Piece, color: Color, rank: u8, file: u8) {
        let sq = square_at(rank, file);
        self.take(sq, piece, color);
    }

    /// Removes whatever piece stands on `(rank, file)` and returns it.
    ///
    /// # Panics
    /// Panics if `rank` or `file` is outside 1-8.
    pub fn clear_square(&mut self, rank: u8, file: u8) -> Option<(Piece, Color)> {
        self.vacate(square_at(rank, file))
    }

    /// Identifies the piece on the square named by a single-bit mask.
    ///
    /// Returns `None` for an empty square or a mask that does not name
    /// exactly one square.
    pub fn identify_piece(&self, bit: u64) -> Option<(Piece, Color)> {
        self.piece_at(Square::from_bit(bit)?)
    }

    /// Returns the piece and color at the given square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        let bb = Bitboard::from_square(sq);

        let color = if (self.boards[Color::White.index()] & bb).any() {
            Color::White
        } else if (self.boards[Color::Black.index()] & bb).any() {
            Color::Black
        } else {
            return None;
        };

        Piece::ALL
            .into_iter()
            .find(|piece| (self.boards[piece.board_index()] & bb).any())
            .map(|piece| (piece, color))
    }

    pub(crate) fn vacate(&mut self, sq: Square) -> Option<(Piece, Color)> {
        let (piece, color) = self.piece_at(sq)?;
        self.take(sq, piece, color);
        Some((piece, color))
    }

    pub(crate) fn put(&mut self, sq: Square, piece: Piece, color: Color) {
        let (piece_board, color_board) = board_indices(piece, color);
        self.boards[piece_board].set(sq);
        self.boards[color_board].set(sq);
    }

    pub(crate) fn take(&mut self, sq: Square, piece: Piece, color: Color) {
        let (piece_board, color_board) = board_indices(piece, color);
        self.boards[piece_board].clear(sq);
        self.boards[color_board].clear(sq);
    }

    /// Returns the side to move.
    #[inline]
    pub fn turn(&self) -> Color {
        self.side_to_move
    }

    /// Returns the castling rights.
    #[inline]
    pub fn castle_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Returns the en passant target square, if any.
    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    /// Returns the halfmove clock.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Returns the fullmove number.
    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Sets the side to move.
    pub fn set_turn(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Replaces all four castling rights at once.
    pub fn set_castle_rights(&mut self, rights: CastlingRights) {
        self.castling = rights;
    }

    /// Sets the square a pawn just skipped over.
    pub fn set_en_passant(&mut self, sq: Square) {
        self.en_passant = Some(sq);
    }

    /// Drops the en passant target, if any.
    pub fn clear_en_passant(&mut self) {
        self.en_passant = None;
    }

    /// Returns a raw copy of the eight bitboards, in [`board_indices`] order.
    pub fn boards(&self) -> [u64; BOARD_COUNT] {
        self.boards.map(|bb| bb.0)
    }

    /// Returns a bitboard of all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.color_board(Color::White) | self.color_board(Color::Black)
    }

    /// Returns a bitboard of every piece of the given color.
    #[inline]
    pub fn color_board(&self, color: Color) -> Bitboard {
        self.boards[color.index()]
    }

    /// Returns a bitboard of pieces of the given type and color.
    #[inline]
    pub fn pieces_of(&self, piece: Piece, color: Color) -> Bitboard {
        self.boards[piece.board_index()] & self.color_board(color)
    }

    /// Checks the occupancy invariant: the piece boards are pairwise
    /// disjoint, the color boards are disjoint, and both unions agree.
    pub fn is_consistent(&self) -> bool {
        let white = self.color_board(Color::White);
        let black = self.color_board(Color::Black);
        if (white & black).any() {
            return false;
        }

        let mut union = Bitboard::EMPTY;
        let mut total = 0;
        for piece in Piece::ALL {
            let bb = self.boards[piece.board_index()];
            union |= bb;
            total += bb.count();
        }
        total == union.count() && (union ^ (white | black)).is_empty()
    }
}

/// Converts rank and file to a square, treating out-of-range input as a
/// programmer error.
fn square_at(rank: u8, file: u8) -> Square {
    match Square::from_rank_file(rank, file) {
        Some(sq) => sq,
        None => panic!("invalid board coordinate: rank {}, file {}", rank, file),
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Draws the board as an 8x8 grid of FEN letters, rank 8 at the top.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1..=8).rev() {
            write!(f, "{} ", rank)?;
            for file in 1..=8 {
                let c = Square::from_rank_file(rank, file)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |(piece, color)| piece.to_fen_char(color));
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "\n   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn piece_at() {
        let pos = Position::startpos();
        assert_eq!(pos.piece_at(Square::E1), Some((Piece::King, Color::White)));
        assert_eq!(pos.piece_at(Square::E8), Some((Piece::King, Color::Black)));
        assert_eq!(pos.piece_at(Square::from_algebraic("e4").unwrap()), None);
    }

    #[test]
    fn identify_piece_by_bit() {
        let pos = Position::startpos();
        assert_eq!(
            pos.identify_piece(Square::D8.bit()),
            Some((Piece::Queen, Color::Black))
        );
        assert_eq!(pos.identify_piece(1 << 30), None);
        assert_eq!(pos.identify_piece(0), None);
        assert_eq!(pos.identify_piece(0b11), None);
    }

    #[test]
    fn set_and_remove_touch_both_boards() {
        let mut pos = Position::empty();
        pos.set_piece(Piece::Knight, Color::Black, 6, 3);
        let c6 = Square::from_algebraic("c6").unwrap();
        assert!(pos.boards[Piece::Knight.board_index()].contains(c6));
        assert!(pos.boards[Color::Black.index()].contains(c6));
        assert!(!pos.boards[Color::White.index()].contains(c6));

        pos.set_piece(Piece::Knight, Color::Black, 6, 3);
        assert_eq!(pos.occupied().count(), 1);

        pos.remove_piece(Piece::Knight, Color::Black, 6, 3);
        assert!(pos.occupied().is_empty());
        assert_eq!(pos.boards(), [0; BOARD_COUNT]);

        pos.remove_piece(Piece::Queen, Color::White, 1, 1);
        assert!(pos.occupied().is_empty());
    }

    #[test]
    fn clear_square_identifies_and_removes() {
        let mut pos = Position::startpos();
        assert_eq!(pos.clear_square(1, 4), Some((Piece::Queen, Color::White)));
        assert_eq!(pos.piece_at(Square::D1), None);
        assert_eq!(pos.clear_square(4, 4), None);
        assert!(pos.is_consistent());
    }

    #[test]
    #[should_panic(expected = "invalid board coordinate")]
    fn set_piece_rejects_off_board() {
        Position::empty().set_piece(Piece::Pawn, Color::White, 9, 1);
    }

    #[test]
    #[should_panic(expected = "invalid board coordinate")]
    fn remove_piece_rejects_off_board() {
        Position::empty().remove_piece(Piece::Pawn, Color::White, 1, 0);
    }

    #[test]
    fn status_mutators_stay_in_their_fields() {
        let mut pos = Position::startpos();
        let e3 = Square::from_algebraic("e3").unwrap();

        pos.set_en_passant(e3);
        assert_eq!(pos.turn(), Color::White);
        assert_eq!(pos.castle_rights(), CastlingRights::ALL);

        pos.set_turn(Color::Black);
        assert_eq!(pos.en_passant_target(), Some(e3));
        assert_eq!(pos.castle_rights(), CastlingRights::ALL);

        pos.set_castle_rights(CastlingRights::from_fen("q").unwrap());
        assert_eq!(pos.turn(), Color::Black);
        assert_eq!(pos.en_passant_target(), Some(e3));

        pos.clear_en_passant();
        assert_eq!(pos.turn(), Color::Black);
        assert_eq!(pos.en_passant_target(), None);
        assert!(pos.castle_rights().can_castle_queenside(Color::Black));
        assert_eq!(pos.occupied().count(), 32);
    }

    #[test]
    fn position_empty() {
        let pos = Position::empty();
        assert_eq!(pos.turn(), Color::White);
        assert!(pos.castle_rights().is_empty());
        assert_eq!(pos.en_passant_target(), None);
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 0);
        assert!(pos.occupied().is_empty());
        assert!(pos.is_consistent());
    }

    #[test]
    fn position_pieces_of() {
        let pos = Position::startpos();
        assert_eq!(pos.pieces_of(Piece::Pawn, Color::White).count(), 8);
        assert_eq!(pos.pieces_of(Piece::Pawn, Color::Black).count(), 8);
        assert_eq!(pos.pieces_of(Piece::King, Color::White).count(), 1);
        assert_eq!(pos.pieces_of(Piece::King, Color::Black).count(), 1);
        assert_eq!(pos.color_board(Color::White).count(), 16);
    }

    #[test]
    fn occupancy_is_the_union_of_color_boards() {
        let mut pos = Position::empty();
        pos.set_piece(Piece::Knight, Color::White, 3, 6);
        pos.set_piece(Piece::Knight, Color::Black, 6, 3);
        pos.set_piece(Piece::Queen, Color::Black, 8, 4);

        let white = pos.color_board(Color::White);
        let black = pos.color_board(Color::Black);
        assert_eq!(pos.occupied(), white | black);
        assert_eq!(pos.occupied().count(), 3);
        assert_eq!(pos.pieces_of(Piece::Knight, Color::Black), Bitboard::from_square(square_at(6, 3)));
        assert_eq!(pos.pieces_of(Piece::Knight, Color::White) & black, Bitboard::EMPTY);
    }

    #[test]
    fn boards_snapshot_layout() {
        let boards = Position::startpos().boards();
        assert_eq!(boards[0], 0x0000_0000_0000_FFFF);
        assert_eq!(boards[1], 0xFFFF_0000_0000_0000);
        assert_eq!(boards[2], 0x00FF_0000_0000_FF00);
        assert_eq!(boards[7], Square::E1.bit() | Square::E8.bit());
    }

    #[test]
    fn inconsistent_boards_are_detected() {
        let mut pos = Position::empty();
        pos.boards[Piece::Rook.board_index()].set(Square::A1);
        assert!(!pos.is_consistent());

        let mut pos = Position::startpos();
        pos.boards[Piece::Queen.board_index()].set(Square::A1);
        assert!(!pos.is_consistent());
    }

    #[test]
    fn display_draws_grid() {
        let text = Position::startpos().to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "8  r n b q k b n r");
        assert_eq!(rows[4], "4  . . . . . . . .");
        assert_eq!(rows[7], "1  R N B Q K B N R");
        assert_eq!(rows[9], "   a b c d e f g h");
    }

    fn any_piece() -> impl Strategy<Value = (Piece, Color)> {
        (0usize..6, any::<bool>()).prop_map(|(p, black)| {
            let color = if black { Color::Black } else { Color::White };
            (Piece::ALL[p], color)
        })
    }

    proptest! {
        #[test]
        fn occupancy_invariant_holds(
            ops in prop::collection::vec((any::<bool>(), any_piece(), 1u8..=8, 1u8..=8), 0..64)
        ) {
            let mut pos = Position::empty();
            for (place, (piece, color), rank, file) in ops {
                // Callers identify a square before touching it, as the
                // move applier does.
                let existing = pos.clear_square(rank, file);
                if place {
                    pos.set_piece(piece, color, rank, file);
                } else if let Some((piece, color)) = existing {
                    pos.set_piece(piece, color, rank, file);
                    pos.remove_piece(piece, color, rank, file);
                }
                prop_assert!(pos.is_consistent());
            }
        }
    }
}
