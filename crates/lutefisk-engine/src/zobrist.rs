//! Position fingerprints.
//!
//! One key per (piece, color, square) plus keys for black to move, each
//! castling right and each en passant file, XORed together. Equal positions
//! hash equal; move counters are left out so repetitions match.

use lutefisk_core::{Color, Piece, Square};

use crate::Position;

const PIECE_KEYS: usize = 6 * 2 * 64;
const BLACK_TO_MOVE: usize = PIECE_KEYS;
const CASTLING: usize = BLACK_TO_MOVE + 1;
const EN_PASSANT: usize = CASTLING + 4;
const KEY_COUNT: usize = EN_PASSANT + 8;

/// Fixed key table, filled at compile time with splitmix64.
static KEYS: [u64; KEY_COUNT] = {
    let mut keys = [0u64; KEY_COUNT];
    let mut state = 0x6C75_7465_6669_736Bu64;
    let mut i = 0;
    while i < KEY_COUNT {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        keys[i] = z ^ (z >> 31);
        i += 1;
    }
    keys
};

#[inline]
fn piece_key(piece: Piece, color: Color, sq: Square) -> u64 {
    KEYS[(piece.index() * 2 + color.index()) * 64 + sq.index() as usize]
}

impl Position {
    /// Computes the fingerprint from scratch.
    pub fn zobrist_hash(&self) -> u64 {
        let mut hash = 0;
        for piece in Piece::ALL {
            for color in Color::ALL {
                for sq in self.pieces_of(piece, color) {
                    hash ^= piece_key(piece, color, sq);
                }
            }
        }

        if self.turn() == Color::Black {
            hash ^= KEYS[BLACK_TO_MOVE];
        }

        let rights = self.castle_rights().raw();
        for i in 0..4 {
            if rights & (1 << i) != 0 {
                hash ^= KEYS[CASTLING + i];
            }
        }

        if let Some(sq) = self.en_passant_target() {
            hash ^= KEYS[EN_PASSANT + sq.file() as usize - 1];
        }

        hash
    }
}
