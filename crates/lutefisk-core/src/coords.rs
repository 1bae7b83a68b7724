//! Conversions between the four square addressing schemes.
//!
//! - rank/file numbers, both 1-8 (rank 1 is White's back rank, file 1 is 'a')
//! - linear index 0-63, `(8 - rank) * 8 + (file - 1)`
//! - bitboard mask, bit `63 - index`
//! - algebraic notation, e.g. `"e4"`
//!
//! Every function is pure. Out-of-range input yields `None` (or an empty
//! string for [`rank_file_to_notation`]); nothing here panics.

use crate::Square;

/// Converts rank and file to a linear index.
#[inline]
pub const fn rank_file_to_index(rank: u8, file: u8) -> Option<u8> {
    match Square::from_rank_file(rank, file) {
        Some(sq) => Some(sq.index()),
        None => None,
    }
}

/// Converts a linear index to `(rank, file)`.
#[inline]
pub const fn index_to_rank_file(index: u8) -> Option<(u8, u8)> {
    match Square::from_index(index) {
        Some(sq) => Some(sq.rank_file()),
        None => None,
    }
}

/// Converts rank and file to a single-bit bitboard mask.
#[inline]
pub const fn rank_file_to_bit(rank: u8, file: u8) -> Option<u64> {
    match Square::from_rank_file(rank, file) {
        Some(sq) => Some(sq.bit()),
        None => None,
    }
}

/// Converts a single-bit mask to `(rank, file)`.
///
/// Masks with zero or several bits set are rejected.
#[inline]
pub const fn bit_to_rank_file(bit: u64) -> Option<(u8, u8)> {
    match Square::from_bit(bit) {
        Some(sq) => Some(sq.rank_file()),
        None => None,
    }
}

/// Converts a linear index to its single-bit mask.
#[inline]
pub const fn index_to_bit(index: u8) -> Option<u64> {
    match Square::from_index(index) {
        Some(sq) => Some(sq.bit()),
        None => None,
    }
}

/// Converts a single-bit mask to its linear index.
#[inline]
pub const fn bit_to_index(bit: u64) -> Option<u8> {
    match Square::from_bit(bit) {
        Some(sq) => Some(sq.index()),
        None => None,
    }
}

/// Parses algebraic notation into `(rank, file)`.
pub const fn notation_to_rank_file(notation: &str) -> Option<(u8, u8)> {
    match Square::from_algebraic(notation) {
        Some(sq) => Some(sq.rank_file()),
        None => None,
    }
}

/// Parses algebraic notation into a linear index.
pub const fn notation_to_index(notation: &str) -> Option<u8> {
    match Square::from_algebraic(notation) {
        Some(sq) => Some(sq.index()),
        None => None,
    }
}

/// Formats rank and file as algebraic notation.
///
/// Returns an empty string when either coordinate is outside 1-8.
pub fn rank_file_to_notation(rank: u8, file: u8) -> String {
    Square::from_rank_file(rank, file)
        .map(Square::to_algebraic)
        .unwrap_or_default()
}

/// Maps a pixel position on the board image to `(rank, file)`.
///
/// Rank 8 is drawn at the top (y = 0) and file a at the left (x = 0).
/// Returns `None` for points outside the board or a zero square size.
pub fn xy_to_rank_file(x: i32, y: i32, square_size: u32) -> Option<(u8, u8)> {
    if x < 0 || y < 0 || square_size == 0 {
        return None;
    }
    let column = x as u32 / square_size;
    let row = y as u32 / square_size;
    if column > 7 || row > 7 {
        return None;
    }
    Some((8 - row as u8, column as u8 + 1))
}

/// Returns the top-left pixel of the square at `(rank, file)`.
pub fn rank_file_to_xy(rank: u8, file: u8, square_size: u32) -> Option<(u32, u32)> {
    Square::from_rank_file(rank, file)?;
    Some((
        (file as u32 - 1) * square_size,
        (8 - rank as u32) * square_size,
    ))
}

/// Returns the top-left pixel of the square at a linear index.
pub fn index_to_xy(index: u8, square_size: u32) -> Option<(u32, u32)> {
    let (rank, file) = index_to_rank_file(index)?;
    rank_file_to_xy(rank, file, square_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn index_corners() {
        assert_eq!(rank_file_to_index(8, 1), Some(0));
        assert_eq!(rank_file_to_index(8, 8), Some(7));
        assert_eq!(rank_file_to_index(1, 1), Some(56));
        assert_eq!(rank_file_to_index(1, 8), Some(63));
        assert_eq!(index_to_rank_file(0), Some((8, 1)));
        assert_eq!(index_to_rank_file(63), Some((1, 8)));
    }

    #[test]
    fn bit_corners() {
        assert_eq!(rank_file_to_bit(8, 1), Some(1 << 63));
        assert_eq!(rank_file_to_bit(8, 8), Some(1 << 56));
        assert_eq!(rank_file_to_bit(1, 1), Some(1 << 7));
        assert_eq!(rank_file_to_bit(1, 8), Some(1));
        assert_eq!(bit_to_rank_file(1 << 7), Some((1, 1)));
        assert_eq!(index_to_bit(0), Some(1 << 63));
        assert_eq!(bit_to_index(1), Some(63));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(rank_file_to_index(0, 1), None);
        assert_eq!(rank_file_to_index(9, 1), None);
        assert_eq!(rank_file_to_bit(1, 0), None);
        assert_eq!(index_to_rank_file(64), None);
        assert_eq!(bit_to_rank_file(0), None);
        assert_eq!(bit_to_rank_file(0b101), None);
        assert_eq!(rank_file_to_notation(0, 5), "");
        assert_eq!(rank_file_to_notation(4, 9), "");
    }

    #[test]
    fn notation() {
        assert_eq!(notation_to_rank_file("e4"), Some((4, 5)));
        assert_eq!(notation_to_rank_file("a1"), Some((1, 1)));
        assert_eq!(notation_to_rank_file("h8"), Some((8, 8)));
        assert_eq!(notation_to_rank_file("e"), None);
        assert_eq!(notation_to_rank_file("e9"), None);
        assert_eq!(notation_to_rank_file("z4"), None);
        assert_eq!(notation_to_index("a8"), Some(0));
        assert_eq!(rank_file_to_notation(4, 5), "e4");
    }

    #[test]
    fn pixel_mapping() {
        assert_eq!(xy_to_rank_file(0, 0, 64), Some((8, 1)));
        assert_eq!(xy_to_rank_file(511, 511, 64), Some((1, 8)));
        assert_eq!(xy_to_rank_file(300, 200, 64), Some((5, 5)));
        assert_eq!(xy_to_rank_file(512, 0, 64), None);
        assert_eq!(xy_to_rank_file(-1, 0, 64), None);
        assert_eq!(xy_to_rank_file(10, 10, 0), None);
        assert_eq!(rank_file_to_xy(8, 1, 64), Some((0, 0)));
        assert_eq!(rank_file_to_xy(1, 8, 64), Some((448, 448)));
        assert_eq!(index_to_xy(63, 10), Some((70, 70)));
    }

    proptest! {
        #[test]
        fn index_inverse(rank in 1u8..=8, file in 1u8..=8) {
            let index = rank_file_to_index(rank, file).unwrap();
            prop_assert_eq!(index_to_rank_file(index), Some((rank, file)));
        }

        #[test]
        fn bit_inverse(rank in 1u8..=8, file in 1u8..=8) {
            let bit = rank_file_to_bit(rank, file).unwrap();
            prop_assert_eq!(bit.count_ones(), 1);
            prop_assert_eq!(bit, 1u64 << (63 - rank_file_to_index(rank, file).unwrap()));
            prop_assert_eq!(bit_to_rank_file(bit), Some((rank, file)));
        }

        #[test]
        fn notation_inverse(rank in 1u8..=8, file in 1u8..=8) {
            let notation = rank_file_to_notation(rank, file);
            prop_assert_eq!(notation.len(), 2);
            prop_assert_eq!(notation_to_rank_file(&notation), Some((rank, file)));
        }

        #[test]
        fn pixel_inverse(rank in 1u8..=8, file in 1u8..=8, size in 1u32..200) {
            let (x, y) = rank_file_to_xy(rank, file, size).unwrap();
            prop_assert_eq!(xy_to_rank_file(x as i32, y as i32, size), Some((rank, file)));
        }
    }
}
