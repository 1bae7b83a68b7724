//! Core types for the Lutefisk board viewer.
//!
//! This crate provides the stateless building blocks of the position core:
//! - [`Square`] plus the [`coords`] conversions
//!   between rank/file, linear index, bit mask, algebraic notation and pixels
//! - [`Piece`] and [`Color`] with the FEN piece codec and [`board_indices`]
//! - [`CastlingRights`] and [`Move`]
//! - Lenient and strict FEN field parsing ([`Fen`])

mod castling;
mod color;
pub mod coords;
mod fen;
mod mov;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use color::Color;
pub use fen::{Fen, FenError};
pub use mov::{Move, MoveFlag};
pub use piece::{board_indices, Piece, BOARD_COUNT};
pub use square::Square;
