//! Attack detection and square checking
//!
//! Answers which squares a piece attacks, which pieces of a color attack a
//! square and whether a king is in check. Every feature that talks about
//! "attacked", "defended" or "controlled" squares is built on these queries.
//!
//! ## Algorithm
//!
//! To find the attackers of a square we iterate through the pieces of the
//! attacking color and test whether each one's attack set contains the target.
//! Pawns attack diagonally forward only (never straight ahead); knights and
//! kings use the leaper tables; sliders ray-cast with blocker inclusion.
//!
//! Attack sets do not care about the occupant of the target square, so
//! "squares attacked by white" includes squares holding white pieces. Those
//! are the squares white *defends*.

use crate::bitset::AttackSet;
use crate::position::Position;
use crate::types::*;

use super::sliding::{directions, slider_attacks};
use super::tables::{king_attacks, knight_attacks, pawn_attacks};

/// Squares attacked by the piece standing on `square`
///
/// Empty when the square is empty.
pub fn attacks_from(position: &Position, square: Square) -> AttackSet {
    match position.piece_at(square) {
        Some(piece) => piece_attacks(position, square, piece),
        None => AttackSet::EMPTY,
    }
}

fn piece_attacks(position: &Position, square: Square, piece: Piece) -> AttackSet {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(square, piece.color),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::King => king_attacks(square),
        kind => slider_attacks(position, square, directions(kind)),
    }
}

/// Squares of the pieces of `by_color` that attack `square`
pub fn attackers_of(position: &Position, square: Square, by_color: Color) -> AttackSet {
    position
        .pieces(by_color)
        .filter(|&(from, piece)| piece_attacks(position, from, piece).contains(square))
        .map(|(from, _)| from)
        .collect()
}

/// Check if a square is under attack by pieces of `by_color`
pub fn is_attacked(position: &Position, square: Square, by_color: Color) -> bool {
    position
        .pieces(by_color)
        .any(|(from, piece)| piece_attacks(position, from, piece).contains(square))
}

/// Check if `color`'s king is in check
///
/// A color without a king is never in check.
pub fn in_check(position: &Position, color: Color) -> bool {
    position
        .king_square(color)
        .is_some_and(|king| is_attacked(position, king, color.opposite()))
}

/// Every square attacked by at least one piece of `by_color`
pub fn attacked_squares(position: &Position, by_color: Color) -> AttackSet {
    position
        .pieces(by_color)
        .fold(AttackSet::new(), |acc, (from, piece)| {
            acc | piece_attacks(position, from, piece)
        })
}
