//! Loading a [`Position`] from FEN text and writing it back.

use lutefisk_core::{Fen, FenError, Square};

use crate::Position;

impl Position {
    /// Creates a position from a FEN string, defaulting malformed fields.
    pub fn from_fen(fen: &str) -> Self {
        let mut position = Position::empty();
        position.setup_board(fen);
        position
    }

    /// Creates a position from a complete, well-formed FEN string.
    pub fn from_fen_strict(fen: &str) -> Result<Self, FenError> {
        let parsed = Fen::parse(fen)?;
        let mut position = Position::empty();
        position.load(parsed);
        Ok(position)
    }

    /// Resets the position and repopulates it from a FEN string.
    ///
    /// Never fails: each malformed field is logged, left at its default,
    /// and returned so the caller can surface it.
    pub fn setup_board(&mut self, fen: &str) -> Vec<FenError> {
        let (parsed, warnings) = Fen::parse_lenient(fen);
        for warning in &warnings {
            tracing::warn!(fen, %warning, "malformed FEN field, using default");
        }
        self.load(parsed);
        tracing::debug!(fen = %self.to_fen(), "board set up");
        warnings
    }

    fn load(&mut self, fen: Fen) {
        *self = Position::empty();
        for (sq, piece, color) in fen.pieces {
            self.put(sq, piece, color);
        }
        self.side_to_move = fen.side_to_move;
        self.castling = fen.castling;
        self.en_passant = fen.en_passant;
        self.halfmove_clock = fen.halfmove_clock;
        self.fullmove_number = fen.fullmove_number;
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();

        // Piece placement
        for rank in (1..=8).rev() {
            let mut empty_count = 0;
            for file in 1..=8 {
                let piece = Square::from_rank_file(rank, file).and_then(|sq| self.piece_at(sq));
                if let Some((piece, color)) = piece {
                    if empty_count > 0 {
                        fen.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    fen.push(piece.to_fen_char(color));
                } else {
                    empty_count += 1;
                }
            }
            if empty_count > 0 {
                fen.push_str(&empty_count.to_string());
            }
            if rank > 1 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.side_to_move.fen_letter());

        fen.push(' ');
        fen.push_str(&self.castling.to_string());

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push(' ');
        fen.push_str(&self.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number.to_string());

        fen
    }
}
