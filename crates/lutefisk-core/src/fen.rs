//! FEN (Forsyth-Edwards Notation) parsing.
//!
//! Two entry points share one field reader:
//! - [`Fen::parse_lenient`] never fails. Each malformed field falls back to
//!   its default (white to move, no castling, no en passant, zero counter)
//!   and is reported as a warning alongside the result.
//! - [`Fen::parse`] additionally checks the six-field layout and the
//!   8x8 placement grid, and rejects the first problem it finds.

use thiserror::Error;

use crate::{CastlingRights, Color, Piece, Square};

/// A malformed FEN field. The lenient parser reports these as warnings;
/// the strict parser fails on the first one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN has {0} fields, six are required")]
    InvalidPartCount(usize),

    #[error("bad piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("side to move must be w or b, found {0:?}")]
    InvalidActiveColor(String),

    #[error("bad castling field {0:?}")]
    InvalidCastlingRights(String),

    #[error("bad en passant square {0:?}")]
    InvalidEnPassantSquare(String),

    #[error("bad half-move clock {0:?}")]
    InvalidHalfmoveClock(String),

    #[error("bad full-move number {0:?}")]
    InvalidFullmoveNumber(String),
}

/// Parsed FEN data.
///
/// Holds the decoded fields. The engine is responsible for loading this
/// into its bitboard representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    /// Pieces in placement order (a8 first, h1 last).
    pub pieces: Vec<(Square, Piece, Color)>,
    /// Side to move.
    pub side_to_move: Color,
    /// Castling availability.
    pub castling: CastlingRights,
    /// En passant target square.
    pub en_passant: Option<Square>,
    /// Halfmove clock.
    pub halfmove_clock: u32,
    /// Fullmove number.
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// An empty board with every status field at its default.
    pub fn empty() -> Self {
        Fen {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 0,
        }
    }

    /// Parses a FEN string, defaulting every malformed or missing field.
    ///
    /// The placement field is walked with a running square counter: digits
    /// skip squares, `/` is ignored, piece letters are placed, and any other
    /// character is skipped. The remaining whitespace-separated fields are
    /// side to move, castling, en passant, halfmove clock, and fullmove
    /// number; absent trailing fields keep their defaults.
    pub fn parse_lenient(fen: &str) -> (Self, Vec<FenError>) {
        let mut result = Fen::empty();
        let mut warnings = Vec::new();
        let mut fields = fen.split_whitespace();

        if let Some(placement) = fields.next() {
            result.read_placement(placement, &mut warnings);
        }

        if let Some(field) = fields.next() {
            result.side_to_move = Color::from_fen_field(field).unwrap_or_else(|| {
                warnings.push(FenError::InvalidActiveColor(field.to_string()));
                Color::White
            });
        }

        if let Some(field) = fields.next() {
            result.castling = CastlingRights::from_fen(field).unwrap_or_else(|| {
                warnings.push(FenError::InvalidCastlingRights(field.to_string()));
                CastlingRights::NONE
            });
        }

        if let Some(field) = fields.next() {
            if field != "-" {
                result.en_passant = Square::from_algebraic(field);
                if result.en_passant.is_none() {
                    warnings.push(FenError::InvalidEnPassantSquare(field.to_string()));
                }
            }
        }

        if let Some(field) = fields.next() {
            result.halfmove_clock = field.parse().unwrap_or_else(|_| {
                warnings.push(FenError::InvalidHalfmoveClock(field.to_string()));
                0
            });
        }

        if let Some(field) = fields.next() {
            result.fullmove_number = field.parse().unwrap_or_else(|_| {
                warnings.push(FenError::InvalidFullmoveNumber(field.to_string()));
                0
            });
        }

        (result, warnings)
    }

    /// Parses a complete, well-formed six-field FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }
        Self::validate_piece_placement(parts[0])?;

        let (result, warnings) = Self::parse_lenient(fen);
        match warnings.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }

    fn read_placement(&mut self, placement: &str, warnings: &mut Vec<FenError>) {
        let mut index = 0u32;
        for c in placement.chars() {
            match c {
                '1'..='8' => index += c as u32 - '0' as u32,
                '/' => {}
                _ => match Piece::from_fen_char(c) {
                    Some((piece, color)) => {
                        match u8::try_from(index).ok().and_then(Square::from_index) {
                            Some(sq) => self.pieces.push((sq, piece, color)),
                            None => warnings.push(FenError::InvalidPiecePlacement(format!(
                                "{:?} runs past h1",
                                c
                            ))),
                        }
                        index += 1;
                    }
                    None => warnings.push(FenError::InvalidPiecePlacement(format!(
                        "skipped {:?}",
                        c
                    ))),
                },
            }
        }
    }

    /// Checks that the placement is eight `/`-separated rows of exactly
    /// eight squares each, using only digits and piece letters.
    fn validate_piece_placement(placement: &str) -> Result<(), FenError> {
        let bad = |msg: String| Err(FenError::InvalidPiecePlacement(msg));
        let rows = placement.split('/').count();
        if rows != 8 {
            return bad(format!("{} rows instead of 8", rows));
        }

        for (row, rank) in placement.split('/').zip((1..=8).rev()) {
            let mut width = 0;
            for c in row.chars() {
                width += match (c.to_digit(10), Piece::from_fen_char(c)) {
                    (Some(skip), _) => skip,
                    (None, Some(_)) => 1,
                    (None, None) => return bad(format!("{:?} on rank {}", c, rank)),
                };
            }
            if width != 8 {
                return bad(format!("rank {} covers {} squares", rank, width));
            }
        }
        Ok(())
    }
}

impl Default for Fen {
    fn default() -> Self {
        Self::parse_lenient(Self::STARTPOS).0
    }
}
