//! Square control features
//!
//! "Attacked by C" means some piece of color C attacks the square, whatever
//! stands on it. For a square holding one of C's own pieces this is read as
//! "defended by C".

use serde::{Deserialize, Serialize};

use crate::bitset::AttackSet;
use crate::board::rank_of;
use crate::bundle::FeatureValue;
use crate::constants::CENTER_SQUARES;
use crate::move_gen::{attacked_squares, is_attacked, is_pinned, knight_attacks};
use crate::position::Position;
use crate::types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackBalance {
    pub attacked: u32,
    pub defended: u32,
}

impl From<AttackBalance> for FeatureValue {
    fn from(b: AttackBalance) -> Self {
        FeatureValue::record([("attacked", b.attacked), ("defended", b.defended)])
    }
}

/// Central squares (d4, d5, e4, e5) attacked by `color`
pub fn center_control(position: &Position, color: Color) -> u32 {
    CENTER_SQUARES
        .iter()
        .filter(|&&sq| is_attacked(position, sq, color))
        .count() as u32
}

/// Squares in the opponent's half of the board attacked by `color`
pub fn space_advantage(position: &Position, color: Color) -> u32 {
    let enemy_half = match color {
        Color::White => 4..8,
        Color::Black => 0..4,
    };
    attacked_squares(position, color)
        .iter()
        .filter(|&sq| enemy_half.contains(&rank_of(sq)))
        .count() as u32
}

/// Central squares neither occupied by any piece nor attacked by `color`
pub fn weak_squares(position: &Position, color: Color) -> u32 {
    CENTER_SQUARES
        .iter()
        .filter(|&&sq| position.is_empty(sq) && !is_attacked(position, sq, color))
        .count() as u32
}

/// Pairs (knight, square that knight attacks) where the opponent does not
/// attack the square
pub fn outposts(position: &Position, color: Color) -> u32 {
    let enemy_control = attacked_squares(position, color.opposite());
    position
        .squares_of(PieceKind::Knight, color)
        .iter()
        .map(|knight| {
            knight_attacks(knight)
                .iter()
                .filter(|&sq| !enemy_control.contains(sq))
                .count() as u32
        })
        .sum()
}

/// Own pieces attacked by the opponent and defended by no own piece
pub fn threats(position: &Position, color: Color) -> u32 {
    let own = attacked_squares(position, color);
    let enemy = attacked_squares(position, color.opposite());
    own_squares(position, color)
        .iter()
        .filter(|&sq| enemy.contains(sq) && !own.contains(sq))
        .count() as u32
}

/// Own pieces defended by another own piece
pub fn piece_coordination(position: &Position, color: Color) -> u32 {
    own_squares(position, color)
        .intersection(attacked_squares(position, color))
        .count()
}

/// Own pieces (king excluded) pinned to their king
pub fn pinned_pieces(position: &Position, color: Color) -> u32 {
    position
        .pieces(color)
        .filter(|&(sq, piece)| piece.kind != PieceKind::King && is_pinned(position, sq))
        .count() as u32
}

/// How many of `color`'s pieces the opponent attacks, and how many `color`
/// defends
pub fn attacked_vs_defended(position: &Position, color: Color) -> AttackBalance {
    let own = own_squares(position, color);
    AttackBalance {
        attacked: own
            .intersection(attacked_squares(position, color.opposite()))
            .count(),
        defended: own.intersection(attacked_squares(position, color)).count(),
    }
}

fn own_squares(position: &Position, color: Color) -> AttackSet {
    position.pieces(color).map(|(sq, _)| sq).collect()
}
