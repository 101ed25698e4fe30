//! Pawn move generation
//!
//! Pawns are the only pieces whose moves depend on color and whose captures
//! differ from their quiet moves:
//!
//! - **Single push**: one square forward onto an empty square
//! - **Double push**: from the starting rank, with both squares empty
//! - **Capture**: diagonally forward onto an enemy piece
//! - **En passant**: diagonally forward onto the recorded en-passant target
//! - **Promotion**: any of the above reaching the last rank, once per
//!   promotion kind

use crate::board::{piece_belongs_to, rank_of, step};
use crate::position::Position;
use crate::types::*;

use super::tables::pawn_attacks;

/// Push pseudo-legal pawn moves from `from` onto `moves`
pub(crate) fn pawn_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let forward = color.forward();

    if let Some(one) = step(from, (0, forward)).filter(|&sq| position.is_empty(sq)) {
        push_with_promotions(moves, Move::new(from, one), color);

        if rank_of(from) == color.pawn_rank() {
            if let Some(two) = step(one, (0, forward)).filter(|&sq| position.is_empty(sq)) {
                moves.push(Move::new(from, two));
            }
        }
    }

    for dst in pawn_attacks(from, color) {
        if piece_belongs_to(position.code_at(dst), color.opposite()) {
            push_with_promotions(moves, Move::with_flags(from, dst, MoveFlags::CAPTURE), color);
        } else if is_en_passant_target(position, dst, color) {
            moves.push(Move::with_flags(
                from,
                dst,
                MoveFlags::CAPTURE | MoveFlags::EN_PASSANT,
            ));
        }
    }
}

/// En passant needs the recorded target, an empty target square and the
/// enemy pawn that just double-pushed standing behind it
fn is_en_passant_target(position: &Position, dst: Square, color: Color) -> bool {
    if position.en_passant() != Some(dst) || position.side_to_move() != color {
        return false;
    }
    let victim = Piece::new(PieceKind::Pawn, color.opposite()).code();
    position.is_empty(dst)
        && step(dst, (0, -color.forward())).is_some_and(|sq| position.code_at(sq) == victim)
}

fn push_with_promotions(moves: &mut Vec<Move>, mv: Move, color: Color) {
    if rank_of(mv.dst) == color.opposite().back_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move {
                promotion: Some(kind),
                ..mv
            });
        }
    } else {
        moves.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::decode;

    fn moves_from(fen: &str, from: Square) -> Vec<Move> {
        let pos = decode(fen).unwrap();
        let color = pos.piece_at(from).unwrap().color;
        let mut moves = Vec::new();
        pawn_moves(&pos, from, color, &mut moves);
        moves
    }

    #[test]
    fn test_single_and_double_push_from_start() {
        let moves = moves_from(crate::constants::START_FEN, 12);
        let dsts: Vec<_> = moves.iter().map(|m| m.dst).collect();
        assert_eq!(dsts, vec![20, 28], "e2 pawn reaches e3 and e4");
    }

    #[test]
    fn test_double_push_needs_both_squares_empty() {
        let moves = moves_from("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1", 12);
        assert!(moves.is_empty(), "blocked pawn has no pushes");
        let moves = moves_from("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1", 12);
        assert_eq!(moves.len(), 1, "only the single push remains");
    }

    #[test]
    fn test_en_passant_only_onto_recorded_target() {
        let fen = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2";
        let moves = moves_from(fen, 36);
        let ep: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].dst, 43);

        let moves = moves_from("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 2", 36);
        assert!(moves.iter().all(|m| !m.is_en_passant()), "no target, no en passant");
    }

    #[test]
    fn test_promotions_generate_every_kind() {
        let moves = moves_from("3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1", 52);
        assert_eq!(moves.len(), 4, "capture on d8 promotes four ways, e8 is blocked");
        assert!(moves.iter().all(|m| m.is_capture() && m.promotion.is_some()));
    }

    #[test]
    fn test_black_pawns_move_down() {
        let moves = moves_from("4k3/3p4/8/8/8/8/8/4K3 b - - 0 1", 51);
        let dsts: Vec<_> = moves.iter().map(|m| m.dst).collect();
        assert_eq!(dsts, vec![43, 35]);
    }
}
