//! Position core for the Lutefisk board viewer.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit board representation
//! - [`Position`] - piece bitboards plus side to move, castling rights,
//!   en passant target and move counters
//! - FEN loading ([`Position::setup_board`]) and writing ([`Position::to_fen`])
//! - Move application with captures, castling and en passant bookkeeping
//!   ([`Position::apply_move`])
//! - Zobrist fingerprints ([`Position::zobrist_hash`])
//! - [`Session`] - the single owner of a position, as seen by a renderer
//!
//! Legal move generation is not part of this crate. Callers hand
//! [`Position::to_fen`] output to an external UCI engine for that.
//!
//! # Architecture
//!
//! Bitboards use a flipped layout: a8 is the most significant bit and h1
//! the least significant, so the bit for linear square index `i` is
//! `63 - i`. Eight boards are kept: one per color and one per piece type.
//!
//! # Example
//!
//! ```
//! use lutefisk_core::{Color, Move, Piece};
//! use lutefisk_engine::Session;
//!
//! let mut session = Session::new();
//! let e2e4 = Move::from_uci("e2e4").unwrap();
//! let recorded = session.move_piece(e2e4, Piece::Pawn, Color::White).unwrap();
//! assert_eq!(recorded.applied.notation, "e4");
//! assert_eq!(
//!     session.fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod apply;
mod bitboard;
mod fen;
mod position;
mod session;
mod zobrist;

pub use apply::{AppliedMove, MoveError};
pub use bitboard::{Bitboard, BitboardIter};
pub use position::Position;
pub use session::{Session, SessionMove};
