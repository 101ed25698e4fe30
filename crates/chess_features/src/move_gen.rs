//! Attack queries and legal move generation
//!
//! ## Module Organization
//!
//! - `tables` - Precomputed knight, king and pawn attack sets
//! - `sliding` - Ray casting for bishops, rooks and queens
//! - `attack` - Attacked squares, attackers of a square, check detection
//! - `pin` - Absolute pin detection
//! - `pawn`, `knight`, `king` - Per-piece pseudo-legal move generation
//! - `legal` - Simulate-then-test legality filter

mod attack;
mod king;
mod knight;
mod legal;
mod pawn;
mod pin;
mod sliding;
mod tables;

pub use attack::{attacked_squares, attackers_of, attacks_from, in_check, is_attacked};
pub use legal::{legal_moves, legal_moves_for};
pub use pin::is_pinned;
pub use sliding::{first_occupied, ray_attacks};
pub use tables::{king_attacks, knight_attacks, pawn_attacks};

use crate::board::piece_belongs_to;
use crate::position::Position;
use crate::types::*;

/// Push `from -> dst` unless `dst` holds one of `color`'s own pieces
#[inline]
pub(crate) fn push_target(
    position: &Position,
    from: Square,
    dst: Square,
    color: Color,
    moves: &mut Vec<Move>,
) {
    let code = position.code_at(dst);
    if code == 0 {
        moves.push(Move::new(from, dst));
    } else if !piece_belongs_to(code, color) {
        moves.push(Move::with_flags(from, dst, MoveFlags::CAPTURE));
    }
}
