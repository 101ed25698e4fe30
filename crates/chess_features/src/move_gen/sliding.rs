//! Sliding piece attacks (bishops, rooks, queens)
//!
//! Sliding pieces move any number of squares along a direction until blocked.
//! Attacks are computed by ray casting from the origin square:
//!
//! 1. Step once in the direction
//! 2. Add the square to the attack set
//! 3. Stop after the first occupied square (the blocker is attacked, anything
//!    beyond it is not), or at the board edge
//!
//! Ray casting is the reference semantics for every attack and pin query in
//! the crate.

use crate::bitset::AttackSet;
use crate::board::step;
use crate::constants::*;
use crate::position::Position;
use crate::types::*;

use super::push_target;

/// Squares attacked along a single ray, blocker inclusive
pub fn ray_attacks(position: &Position, from: Square, dir: Direction) -> AttackSet {
    let mut attacks = AttackSet::new();
    let mut current = from;
    while let Some(next) = step(current, dir) {
        attacks.insert(next);
        if !position.is_empty(next) {
            break;
        }
        current = next;
    }
    attacks
}

/// Union of [`ray_attacks`] over `dirs`
pub fn slider_attacks(position: &Position, from: Square, dirs: &[Direction]) -> AttackSet {
    dirs.iter()
        .fold(AttackSet::new(), |acc, &dir| acc | ray_attacks(position, from, dir))
}

/// Push pseudo-legal moves for a bishop, rook or queen on `from`
pub(crate) fn slider_moves(position: &Position, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for dst in slider_attacks(position, from, directions(piece.kind)) {
        push_target(position, from, dst, piece.color, moves);
    }
}

/// First occupied square met when walking from `from` along `dir`
pub fn first_occupied(position: &Position, from: Square, dir: Direction) -> Option<Square> {
    let mut current = from;
    while let Some(next) = step(current, dir) {
        if !position.is_empty(next) {
            return Some(next);
        }
        current = next;
    }
    None
}

/// Ray directions for a sliding piece kind, empty for non-sliders
pub fn directions(kind: PieceKind) -> &'static [Direction] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRS,
        PieceKind::Rook => &ROOK_DIRS,
        PieceKind::Queen => &QUEEN_DIRS,
        _ => &[],
    }
}

/// Whether a piece of `kind` slides along `dir`
pub fn slides_along(kind: PieceKind, dir: Direction) -> bool {
    let diagonal = dir.0 != 0 && dir.1 != 0;
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => !diagonal,
        PieceKind::Bishop => diagonal,
        _ => false,
    }
}
