//! Knight move generation
//!
//! Knights move in an L-shape: two squares in one direction, then one square
//! perpendicular. They jump over pieces, so the leaper table is the full set
//! of candidate destinations; only squares holding own pieces are dropped.

use crate::position::Position;
use crate::types::*;

use super::push_target;
use super::tables::knight_attacks;

/// Push pseudo-legal knight moves from `from` onto `moves`
pub(crate) fn knight_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    for dst in knight_attacks(from) {
        push_target(position, from, dst, color, moves);
    }
}
