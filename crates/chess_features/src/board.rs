//! Board utilities and helper functions
//!
//! Provides fundamental square arithmetic used throughout the crate:
//! - Square validation and indexing
//! - Algebraic square names
//! - Direction stepping without wrap-around

use crate::constants::Direction;
use crate::error::{ChessFeaturesError, ChessFeaturesResult};
use crate::types::*;

/// Convert file and rank to linear square index (0-63)
#[inline]
pub fn square_at(file: i8, rank: i8) -> Square {
    rank * 8 + file
}

/// File (column) of a square, 0 = a-file
#[inline]
pub fn file_of(square: Square) -> i8 {
    square % 8
}

/// Rank (row) of a square, 0 = first rank
#[inline]
pub fn rank_of(square: Square) -> i8 {
    square / 8
}

/// Check if file/rank coordinates are on the board
#[inline]
pub fn is_valid_square(file: i8, rank: i8) -> bool {
    (0..8).contains(&file) && (0..8).contains(&rank)
}

/// Step once from `square` in `dir`, `None` when leaving the board
#[inline]
pub fn step(square: Square, dir: Direction) -> Option<Square> {
    let file = file_of(square) + dir.0;
    let rank = rank_of(square) + dir.1;
    if is_valid_square(file, rank) {
        Some(square_at(file, rank))
    } else {
        None
    }
}

/// Check if a raw board code belongs to `color`
#[inline]
pub fn piece_belongs_to(code: i8, color: Color) -> bool {
    match color {
        Color::White => code > 0,
        Color::Black => code < 0,
    }
}

/// Algebraic name of a square, e.g. `e4`
pub fn square_name(square: Square) -> String {
    let file = (b'a' + file_of(square) as u8) as char;
    let rank = (b'1' + rank_of(square) as u8) as char;
    format!("{file}{rank}")
}

/// Parse an algebraic square name
pub fn parse_square(name: &str) -> ChessFeaturesResult<Square> {
    let invalid = || ChessFeaturesError::InvalidSquare {
        name: name.to_string(),
    };
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }
    let file = bytes[0].wrapping_sub(b'a') as i8;
    let rank = bytes[1].wrapping_sub(b'1') as i8;
    if !is_valid_square(file, rank) {
        return Err(invalid());
    }
    Ok(square_at(file, rank))
}

/// Direction from `from` towards `to` if they share a rank, file or diagonal
pub fn line_direction(from: Square, to: Square) -> Option<Direction> {
    if from == to {
        return None;
    }
    let df = file_of(to) - file_of(from);
    let dr = rank_of(to) - rank_of(from);
    if df == 0 || dr == 0 || df.abs() == dr.abs() {
        Some((df.signum(), dr.signum()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    const F3: Square = 21;

    #[test]
    fn test_square_names() {
        assert_eq!(square_name(A1), "a1");
        assert_eq!(square_name(E4), "e4");
        assert_eq!(square_name(H8), "h8");
        assert_eq!(parse_square("e4"), Ok(E4));
        assert!(parse_square("i9").is_err());
        assert!(parse_square("e").is_err());
    }

    #[test]
    fn test_step_does_not_wrap() {
        assert_eq!(step(H1, E), None, "h1 east must leave the board");
        assert_eq!(step(A1, W), None);
        assert_eq!(step(E4, NE), Some(square_at(5, 4)));
        assert_eq!(step(H8, N), None);
    }

    #[test]
    fn test_line_direction() {
        assert_eq!(line_direction(E1, E8), Some(N));
        assert_eq!(line_direction(A1, H8), Some(NE));
        assert_eq!(line_direction(E1, F3), None, "knight-distance squares share no line");
    }
}
