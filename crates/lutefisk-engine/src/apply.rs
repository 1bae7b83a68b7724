//! Applying a move to a [`Position`].
//!
//! The applier trusts its caller: the moving piece is supplied rather than
//! read from the board, and nothing beyond "the destination does not hold
//! one of the mover's own pieces" is checked. Legality belongs to an
//! external engine.
//!
//! Known limitations kept for FEN compatibility with that engine:
//! castling rights are only cleared when castling is executed, and the
//! halfmove clock is never advanced.

use lutefisk_core::{Color, Move, MoveFlag, Piece, Square};
use std::fmt;
use thiserror::Error;

use crate::Position;

/// Reasons a move is refused. A refused move leaves the position untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Square is occupied by players own piece")]
    OwnPieceOccupied(Square),
}

/// The result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedMove {
    /// The from/to pair as requested.
    pub mov: Move,
    /// The piece that moved.
    pub piece: Piece,
    /// The color of the piece that moved.
    pub color: Color,
    /// What kind of move this turned out to be.
    pub flag: MoveFlag,
    /// The opposing piece removed from the destination, if any.
    pub captured: Option<Piece>,
    /// Simplified algebraic notation, e.g. `Nf3`, `exd5`, `O-O`.
    pub notation: String,
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation)
    }
}

struct Castle {
    color: Color,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
    flag: MoveFlag,
}

static CASTLES: [Castle; 4] = [
    Castle {
        color: Color::White,
        king_from: Square::E1,
        king_to: Square::G1,
        rook_from: Square::H1,
        rook_to: Square::F1,
        flag: MoveFlag::CastleKingside,
    },
    Castle {
        color: Color::White,
        king_from: Square::E1,
        king_to: Square::C1,
        rook_from: Square::A1,
        rook_to: Square::D1,
        flag: MoveFlag::CastleQueenside,
    },
    Castle {
        color: Color::Black,
        king_from: Square::E8,
        king_to: Square::G8,
        rook_from: Square::H8,
        rook_to: Square::F8,
        flag: MoveFlag::CastleKingside,
    },
    Castle {
        color: Color::Black,
        king_from: Square::E8,
        king_to: Square::C8,
        rook_from: Square::A8,
        rook_to: Square::D8,
        flag: MoveFlag::CastleQueenside,
    },
];

impl Position {
    /// Moves `piece` of `color` from `mov.from()` to `mov.to()`.
    ///
    /// Handles captures, the four castling shortcuts, and en passant
    /// bookkeeping, then advances the fullmove number after Black's move
    /// and hands the turn to the other side.
    pub fn apply_move(
        &mut self,
        mov: Move,
        piece: Piece,
        color: Color,
    ) -> Result<AppliedMove, MoveError> {
        let (from, to) = (mov.from(), mov.to());

        let applied = match self.castle_for(from, to, piece, color) {
            Some(castle) => {
                self.clear_en_passant();
                // Castling squares are not checked. The king and rook are
                // lifted only if they are really there, and anything left
                // on the landing squares is overwritten.
                let lifts = [
                    (castle.king_from, Piece::King),
                    (castle.rook_from, Piece::Rook),
                ];
                for (sq, lifted) in lifts {
                    if self.piece_at(sq) == Some((lifted, color)) {
                        self.take(sq, lifted, color);
                    }
                }
                self.vacate(castle.king_to);
                self.vacate(castle.rook_to);
                self.put(castle.king_to, Piece::King, color);
                self.put(castle.rook_to, Piece::Rook, color);
                self.castling.remove_color(color);

                AppliedMove {
                    mov,
                    piece,
                    color,
                    flag: castle.flag,
                    captured: None,
                    notation: castle.flag.castle_notation().unwrap_or_default().to_string(),
                }
            }
            None => {
                let target = self.piece_at(to);
                if matches!(target, Some((_, target_color)) if target_color == color) {
                    tracing::debug!(%mov, "destination holds own piece");
                    return Err(MoveError::OwnPieceOccupied(to));
                }
                self.clear_en_passant();

                let mut flag = MoveFlag::Quiet;
                let mut notation = String::new();
                match (piece.notation_letter(), target) {
                    (Some(letter), _) => notation.push(letter),
                    (None, Some(_)) => notation.push(from.file_char()),
                    (None, None) => {
                        if let Some(passed) = double_step(from, to, color) {
                            self.set_en_passant(passed);
                            flag = MoveFlag::DoublePush;
                        }
                    }
                }

                // The caller names the piece that lands; whatever really
                // stood on the origin is lifted.
                self.vacate(from);
                if let Some((captured, captured_color)) = target {
                    self.take(to, captured, captured_color);
                    notation.push('x');
                    flag = MoveFlag::Capture;
                }
                self.put(to, piece, color);
                notation.push_str(&to.to_algebraic());

                AppliedMove {
                    mov,
                    piece,
                    color,
                    flag,
                    captured: target.map(|(captured, _)| captured),
                    notation,
                }
            }
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opposite();

        tracing::debug!(%mov, notation = %applied.notation, "move applied");
        Ok(applied)
    }

    fn castle_for(
        &self,
        from: Square,
        to: Square,
        piece: Piece,
        color: Color,
    ) -> Option<&'static Castle> {
        if piece != Piece::King {
            return None;
        }
        CASTLES.iter().find(|castle| {
            castle.color == color
                && castle.king_from == from
                && castle.king_to == to
                && match castle.flag {
                    MoveFlag::CastleKingside => self.castling.can_castle_kingside(color),
                    _ => self.castling.can_castle_queenside(color),
                }
        })
    }
}

/// Returns the square a pawn passes over on a double step from its
/// starting rank, or `None` if this is not one.
fn double_step(from: Square, to: Square, color: Color) -> Option<Square> {
    let direction = color.forward();
    if from.rank() != color.pawn_rank() || from.offset(2 * direction, 0) != Some(to)
    {
        return None;
    }
    from.offset(direction, 0)
}
