//! A single board session.
//!
//! [`Session`] is the one owner of a [`Position`] and the boundary the
//! rendering layer talks to: it reads piece types and raw bitboards, and
//! mutates only through [`Session::set_fen`] and [`Session::move_piece`].
//! A session is a plain value; a host that shares one between threads must
//! wrap the whole session in a single lock and release it before consulting
//! an external engine.

use lutefisk_core::{Color, Fen, FenError, Move, Piece, Square, BOARD_COUNT};
use std::collections::HashMap;

use crate::{AppliedMove, MoveError, Position};

/// A recorded move in session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMove {
    /// The move as applied.
    pub applied: AppliedMove,
    /// Zobrist hash of the position after the move.
    pub hash_after: u64,
}

/// Board state plus the history needed for display and duplicate detection.
#[derive(Debug, Clone)]
pub struct Session {
    position: Position,
    moves: Vec<SessionMove>,
    seen: HashMap<u64, u32>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session at the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Creates a session from an existing position.
    pub fn from_position(position: Position) -> Self {
        let mut seen = HashMap::new();
        seen.insert(position.zobrist_hash(), 1);
        Session {
            position,
            moves: Vec::new(),
            seen,
        }
    }

    /// Replaces the board with the given FEN and forgets all history.
    ///
    /// Surrounding whitespace is trimmed and empty input means the standard
    /// starting position. Malformed fields are defaulted and returned.
    pub fn set_fen(&mut self, fen: &str) -> Vec<FenError> {
        let fen = match fen.trim() {
            "" => Fen::STARTPOS,
            trimmed => trimmed,
        };
        let warnings = self.position.setup_board(fen);
        self.moves.clear();
        self.seen.clear();
        self.seen.insert(self.position.zobrist_hash(), 1);
        warnings
    }

    /// Returns the current position as FEN text.
    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns a raw snapshot of the eight bitboards.
    pub fn boards(&self) -> [u64; BOARD_COUNT] {
        self.position.boards()
    }

    /// Returns the piece at `(rank, file)`, or `None` for an empty or
    /// off-board square.
    pub fn piece_type(&self, rank: u8, file: u8) -> Option<(Piece, Color)> {
        self.position.piece_at(Square::from_rank_file(rank, file)?)
    }

    /// Returns the en passant target as a linear index.
    pub fn en_passant(&self) -> Option<u8> {
        self.position.en_passant_target().map(Square::index)
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    /// Applies a move and records it.
    ///
    /// On rejection nothing changes, history included.
    pub fn move_piece(
        &mut self,
        mov: Move,
        piece: Piece,
        color: Color,
    ) -> Result<&SessionMove, MoveError> {
        let applied = self.position.apply_move(mov, piece, color)?;
        let hash_after = self.position.zobrist_hash();
        *self.seen.entry(hash_after).or_insert(0) += 1;
        self.moves.push(SessionMove {
            applied,
            hash_after,
        });
        Ok(&self.moves[self.moves.len() - 1])
    }

    /// Returns the moves applied since the last FEN setup.
    pub fn moves(&self) -> &[SessionMove] {
        &self.moves
    }

    /// Returns how many times the current position has occurred since the
    /// last FEN setup, counting the current occurrence.
    pub fn occurrences(&self) -> u32 {
        self.seen
            .get(&self.position.zobrist_hash())
            .copied()
            .unwrap_or(0)
    }
}
