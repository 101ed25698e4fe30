//! Board-state string codec (FEN)
//!
//! Decodes the standard six-field notation into a [`Position`] and encodes a
//! position back. `decode(&encode(p)) == p` holds for every decodable position.
//!
//! ```text
//! rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1
//! └──────────── placement ────────────┘ │  │    │  │ └ fullmove number
//!                                        │  │    │  └ halfmove clock
//!                                        │  │    └ en-passant target
//!                                        │  └ castling rights
//!                                        └ side to move
//! ```
//!
//! Decoding trusts the placement beyond structural checks: the only semantic
//! rule enforced is exactly one king per color.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::board::{parse_square, rank_of, square_at, square_name};
use crate::error::{ChessFeaturesError, ChessFeaturesResult};
use crate::position::Position;
use crate::types::*;

/// Parse a six-field board-state string
pub fn decode(text: &str) -> ChessFeaturesResult<Position> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(ChessFeaturesError::malformed(format!(
            "expected 6 fields, found {}",
            fields.len()
        )));
    }

    let board = decode_placement(fields[0])?;
    let side_to_move = match fields[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(ChessFeaturesError::malformed(format!(
                "invalid side to move {other:?}"
            )))
        }
    };
    let castling = decode_castling(fields[2])?;
    let en_passant = decode_en_passant(fields[3])?;
    let halfmove_clock = decode_counter(fields[4], "halfmove clock")?;
    let fullmove_number = decode_counter(fields[5], "fullmove number")?;

    let position = Position {
        board,
        side_to_move,
        castling,
        en_passant,
        halfmove_clock,
        fullmove_number,
    };
    check_kings(&position)?;

    debug!(fen = text, "decoded position");
    Ok(position)
}

/// Serialize a position to its six-field board-state string
pub fn encode(position: &Position) -> String {
    let mut out = String::with_capacity(90);

    for rank in (0..8).rev() {
        let mut empty = 0u8;
        for file in 0..8 {
            match position.piece_at(square_at(file, rank)) {
                Some(piece) => {
                    if empty > 0 {
                        out.push((b'0' + empty) as char);
                        empty = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push((b'0' + empty) as char);
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match position.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    out.push_str(&encode_castling(position.castling));

    out.push(' ');
    match position.en_passant {
        Some(square) => out.push_str(&square_name(square)),
        None => out.push('-'),
    }

    out.push_str(&format!(
        " {} {}",
        position.halfmove_clock, position.fullmove_number
    ));
    out
}

fn decode_placement(field: &str) -> ChessFeaturesResult<Board> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessFeaturesError::malformed(format!(
            "piece placement must have 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = [0i8; 64];
    // Placement lists rank 8 first.
    for (i, rank_text) in ranks.iter().enumerate() {
        let rank = 7 - i as i8;
        let mut file: i8 = 0;
        for c in rank_text.chars() {
            if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                file += skip as i8;
            } else {
                let piece = Piece::from_fen_char(c).ok_or_else(|| {
                    ChessFeaturesError::malformed(format!("unknown piece letter {c:?}"))
                })?;
                if file < 8 {
                    board[square_at(file, rank) as usize] = piece.code();
                }
                file += 1;
            }
            if file > 8 {
                break;
            }
        }
        if file != 8 {
            return Err(ChessFeaturesError::malformed(format!(
                "rank {} describes {} squares instead of 8",
                rank + 1,
                file
            )));
        }
    }
    Ok(board)
}

fn decode_castling(field: &str) -> ChessFeaturesResult<CastlingRights> {
    if field == "-" {
        return Ok(CastlingRights::empty());
    }
    let mut rights = CastlingRights::empty();
    for c in field.chars() {
        let flag = match c {
            'K' => CastlingRights::WHITE_KINGSIDE,
            'Q' => CastlingRights::WHITE_QUEENSIDE,
            'k' => CastlingRights::BLACK_KINGSIDE,
            'q' => CastlingRights::BLACK_QUEENSIDE,
            other => {
                return Err(ChessFeaturesError::malformed(format!(
                    "invalid castling flag {other:?}"
                )))
            }
        };
        if rights.contains(flag) {
            return Err(ChessFeaturesError::malformed(format!(
                "duplicate castling flag {c:?}"
            )));
        }
        rights |= flag;
    }
    Ok(rights)
}

fn encode_castling(rights: CastlingRights) -> String {
    if rights.is_empty() {
        return "-".to_string();
    }
    [
        (CastlingRights::WHITE_KINGSIDE, 'K'),
        (CastlingRights::WHITE_QUEENSIDE, 'Q'),
        (CastlingRights::BLACK_KINGSIDE, 'k'),
        (CastlingRights::BLACK_QUEENSIDE, 'q'),
    ]
    .iter()
    .filter(|(flag, _)| rights.contains(*flag))
    .map(|&(_, c)| c)
    .collect()
}

fn decode_en_passant(field: &str) -> ChessFeaturesResult<Option<Square>> {
    if field == "-" {
        return Ok(None);
    }
    let square = parse_square(field).map_err(|_| {
        ChessFeaturesError::malformed(format!("invalid en-passant square {field:?}"))
    })?;
    // The target always sits behind a pawn that just double-pushed.
    if !matches!(rank_of(square), 2 | 5) {
        return Err(ChessFeaturesError::malformed(format!(
            "en-passant square {field:?} is not on the third or sixth rank"
        )));
    }
    Ok(Some(square))
}

fn decode_counter(field: &str, name: &str) -> ChessFeaturesResult<u32> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChessFeaturesError::malformed(format!(
            "{name} {field:?} is not a non-negative integer"
        )));
    }
    field.parse::<u32>().map_err(|_| {
        ChessFeaturesError::malformed(format!("{name} {field:?} is out of range"))
    })
}

fn check_kings(position: &Position) -> ChessFeaturesResult<()> {
    for color in Color::ALL {
        let kings = position.squares_of(PieceKind::King, color).count();
        if kings != 1 {
            return Err(ChessFeaturesError::malformed(format!(
                "expected exactly one {color} king, found {kings}"
            )));
        }
    }
    Ok(())
}

impl FromStr for Position {
    type Err = ChessFeaturesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_decode_starting_position() {
        let pos = decode(START_FEN).unwrap();
        assert_eq!(pos, Position::starting());
        assert_eq!(encode(&pos), START_FEN);
    }

    #[test]
    fn test_round_trip_keeps_rights_and_counters() {
        let fen = "r3k2r/pp3ppp/8/3pP3/8/8/PPP2PPP/R3K2R w Kq d6 12 34";
        let pos = decode(fen).unwrap();
        assert_eq!(pos.en_passant(), Some(43));
        assert_eq!(pos.halfmove_clock(), 12);
        assert_eq!(pos.fullmove_number(), 34);
        assert_eq!(
            pos.castling_rights(),
            CastlingRights::WHITE_KINGSIDE | CastlingRights::BLACK_QUEENSIDE
        );
        assert_eq!(encode(&pos), fen);
        assert_eq!(decode(&encode(&pos)).unwrap(), pos);
    }

    #[test]
    fn test_rejects_bad_rank_width() {
        let short = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let long = "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let wide = "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        for fen in [short, long, wide] {
            assert_matches!(decode(fen), Err(ChessFeaturesError::MalformedInput { .. }));
        }
    }

    #[test]
    fn test_rejects_unknown_piece_and_side() {
        assert_matches!(
            decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1"),
            Err(ChessFeaturesError::MalformedInput { .. })
        );
        assert_matches!(
            decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
            Err(ChessFeaturesError::MalformedInput { .. })
        );
    }

    #[test]
    fn test_rejects_bad_counters_and_field_count() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - -1 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 x",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        ] {
            assert_matches!(decode(fen), Err(ChessFeaturesError::MalformedInput { .. }));
        }
    }

    #[test]
    fn test_rejects_missing_or_extra_king() {
        assert_matches!(
            decode("rnbq1bnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQ - 0 1"),
            Err(ChessFeaturesError::MalformedInput { reason }) if reason.contains("black king")
        );
        assert_matches!(
            decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBKKBNR w - - 0 1"),
            Err(ChessFeaturesError::MalformedInput { .. })
        );
    }

    #[test]
    fn test_from_str_and_display() {
        let pos: Position = START_FEN.parse().unwrap();
        assert_eq!(pos.to_string(), START_FEN);
    }
}
