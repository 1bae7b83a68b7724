//! Turning command-line text into board actions.

use lutefisk_core::{coords, Color, Move};
use lutefisk_engine::{MoveError, Session, SessionMove};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayError {
    #[error("not a move in from-to form: {0}")]
    BadMoveText(String),
    #[error("no piece on {0}")]
    EmptySquare(String),
    #[error(transparent)]
    Rejected(#[from] MoveError),
}

/// Plays one move given as UCI text, taking the piece from the origin
/// square. Returns the recorded notation.
pub fn play(session: &mut Session, text: &str) -> Result<String, PlayError> {
    let mov = Move::from_uci(text).ok_or_else(|| PlayError::BadMoveText(text.to_string()))?;
    let (rank, file) = mov.from().rank_file();
    let (piece, color) = session
        .piece_type(rank, file)
        .ok_or_else(|| PlayError::EmptySquare(mov.from().to_algebraic()))?;

    let recorded = session.move_piece(mov, piece, color)?;
    Ok(recorded.applied.notation.clone())
}

/// Parses `X,Y` pixel coordinates for `--click`.
pub fn parse_click(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x.trim().parse().map_err(|_| format!("bad x coordinate '{}'", x))?;
    let y = y.trim().parse().map_err(|_| format!("bad y coordinate '{}'", y))?;
    Ok((x, y))
}

/// Describes what a click at pixel `(x, y)` lands on.
pub fn describe_click(session: &Session, x: i32, y: i32, square_size: u32) -> String {
    let Some((rank, file)) = coords::xy_to_rank_file(x, y, square_size) else {
        return format!("({}, {}) is off the board", x, y);
    };
    let square = coords::rank_file_to_notation(rank, file);
    match session.piece_type(rank, file) {
        Some((piece, color)) => format!("({}, {}) is {}: {} {}", x, y, square, color, piece),
        None => format!("({}, {}) is {}: empty", x, y, square),
    }
}

/// Formats recorded moves as numbered movetext, e.g. `1. e4 e5 2. Nf3`.
///
/// `color` and `fullmove` describe the position the first move was played
/// from; a game that starts with black to move opens with `1...`.
pub fn movetext(moves: &[SessionMove], mut color: Color, mut fullmove: u32) -> String {
    let mut parts = Vec::with_capacity(moves.len() * 2);
    for (i, recorded) in moves.iter().enumerate() {
        match color {
            Color::White => parts.push(format!("{}.", fullmove)),
            Color::Black if i == 0 => parts.push(format!("{}...", fullmove)),
            Color::Black => {}
        }
        parts.push(recorded.applied.notation.clone());
        if color == Color::Black {
            fullmove = fullmove.saturating_add(1);
        }
        color = color.opposite();
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutefisk_core::Square;
    use proptest::prelude::*;

    #[test]
    fn plays_moves_from_the_board() {
        let mut session = Session::new();
        assert_eq!(play(&mut session, "e2e4").unwrap(), "e4");
        assert_eq!(play(&mut session, "d7d5").unwrap(), "d5");
        assert_eq!(play(&mut session, "e4d5").unwrap(), "exd5");
        assert_eq!(play(&mut session, "d8d5").unwrap(), "Qxd5");
    }

    #[test]
    fn reports_bad_text_empty_squares_and_rejections() {
        let mut session = Session::new();
        assert_eq!(
            play(&mut session, "e2"),
            Err(PlayError::BadMoveText("e2".into()))
        );
        assert_eq!(
            play(&mut session, "e4e5"),
            Err(PlayError::EmptySquare("e4".into()))
        );
        assert_eq!(
            play(&mut session, "d1d2"),
            Err(PlayError::Rejected(MoveError::OwnPieceOccupied(
                Square::from_algebraic("d2").unwrap()
            )))
        );
        assert!(session.moves().is_empty());
    }

    #[test]
    fn castle_through_play() {
        let mut session = Session::new();
        session.set_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(play(&mut session, "e1g1").unwrap(), "O-O");
        assert_eq!(play(&mut session, "e8c8").unwrap(), "O-O-O");
        assert_eq!(session.fen(), "2kr3r/8/8/8/8/8/8/R4RK1 w - - 0 2");
    }

    #[test]
    fn click_parsing() {
        assert_eq!(parse_click("10,20"), Ok((10, 20)));
        assert_eq!(parse_click(" -5 , 7"), Ok((-5, 7)));
        assert!(parse_click("10").is_err());
        assert!(parse_click("a,1").is_err());
        assert!(parse_click("1,").is_err());
    }

    #[test]
    fn click_descriptions() {
        let session = Session::new();
        assert_eq!(describe_click(&session, 0, 0, 64), "(0, 0) is a8: Black Rook");
        assert_eq!(describe_click(&session, 300, 300, 64), "(300, 300) is e4: empty");
        assert_eq!(describe_click(&session, 512, 0, 64), "(512, 0) is off the board");
        assert_eq!(describe_click(&session, -1, 0, 64), "(-1, 0) is off the board");
    }

    #[test]
    fn numbered_movetext() {
        let mut session = Session::new();
        for text in ["e2e4", "e7e5", "g1f3"] {
            play(&mut session, text).unwrap();
        }
        assert_eq!(movetext(session.moves(), Color::White, 1), "1. e4 e5 2. Nf3");

        let mut session = Session::new();
        session.set_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
        for text in ["e7e5", "g1f3"] {
            play(&mut session, text).unwrap();
        }
        assert_eq!(movetext(session.moves(), Color::Black, 1), "1... e5 2. Nf3");
    }

    proptest! {
        #[test]
        fn every_square_center_click_names_its_square(index in 0u8..64, size in 8u32..128) {
            let session = Session::new();
            let (x, y) = coords::index_to_xy(index, size).unwrap();
            let notation = coords::rank_file_to_notation(
                8 - index / 8,
                index % 8 + 1,
            );
            let cx = (x + size / 2) as i32;
            let cy = (y + size / 2) as i32;
            let text = describe_click(&session, cx, cy, size);
            let expected = format!("({}, {}) is {}:", cx, cy, notation);
            prop_assert!(text.starts_with(&expected), "{}", text);
        }
    }
}
