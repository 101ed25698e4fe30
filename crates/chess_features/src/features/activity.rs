//! Piece activity features: mobility, development and rook placement

use crate::board::{file_of, rank_of};
use crate::move_gen::{attacks_from, legal_moves, legal_moves_for};
use crate::position::Position;
use crate::types::*;

use super::pawns::is_pawnless_file;

/// Number of legal moves for the side to move
pub fn mobility(position: &Position) -> u32 {
    legal_moves(position).len() as u32
}

/// Number of legal moves `color`'s pieces would have with `color` to move
///
/// Independent of whose turn it actually is, so a move by one side leaves
/// the other side's count untouched unless it changes that side's options.
pub fn piece_activity(position: &Position, color: Color) -> u32 {
    legal_moves_for(position, color).len() as u32
}

/// Knights and bishops that have left their own back rank
pub fn development(position: &Position, color: Color) -> u32 {
    [PieceKind::Knight, PieceKind::Bishop]
        .into_iter()
        .flat_map(|kind| position.squares_of(kind, color))
        .filter(|&sq| rank_of(sq) != color.back_rank())
        .count() as u32
}

/// Rooks on files with no pawns of either color
pub fn rook_activity(position: &Position, color: Color) -> u32 {
    count_on_pawnless_files(position, color, &[PieceKind::Rook])
}

/// Rooks and queens on files with no pawns of either color
pub fn open_file_control(position: &Position, color: Color) -> u32 {
    count_on_pawnless_files(position, color, &[PieceKind::Rook, PieceKind::Queen])
}

fn count_on_pawnless_files(position: &Position, color: Color, kinds: &[PieceKind]) -> u32 {
    kinds
        .iter()
        .flat_map(|&kind| position.squares_of(kind, color))
        .filter(|&sq| is_pawnless_file(position, file_of(sq)))
        .count() as u32
}

/// Rooks on the rank one step from promotion
pub fn rook_on_7th_rank(position: &Position, color: Color) -> u32 {
    position
        .squares_of(PieceKind::Rook, color)
        .iter()
        .filter(|&sq| rank_of(sq) == color.seventh_rank())
        .count() as u32
}

/// 1 iff `color` has exactly two rooks and each one attacks the other's square
pub fn connected_rooks(position: &Position, color: Color) -> u32 {
    let rooks: Vec<Square> = position.squares_of(PieceKind::Rook, color).iter().collect();
    match rooks[..] {
        [a, b] => u32::from(
            attacks_from(position, a).contains(b) && attacks_from(position, b).contains(a),
        ),
        _ => 0,
    }
}
