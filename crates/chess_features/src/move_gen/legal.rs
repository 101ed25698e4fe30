//! Legal move filtering
//!
//! Legality is a two-phase filter:
//!
//! 1. Generate pseudo-legal moves for every piece of the moving color
//! 2. Keep a move only if the position after playing it leaves the mover's
//!    king out of check (simulate, then test)
//!
//! The result is sorted by origin square, then destination square, then
//! promotion kind, so two calls on the same position return the same list.

use tracing::trace;

use crate::api::play;
use crate::position::Position;
use crate::types::*;

use super::attack::in_check;
use super::king::king_moves;
use super::knight::knight_moves;
use super::pawn::pawn_moves;
use super::sliding::slider_moves;

/// All legal moves for the side to move
///
/// An empty list means checkmate or stalemate, never an error.
pub fn legal_moves(position: &Position) -> Vec<Move> {
    legal_moves_for(position, position.side_to_move())
}

/// Legal moves `color` would have if it were to move
///
/// The en-passant target only applies to the actual side to move.
pub fn legal_moves_for(position: &Position, color: Color) -> Vec<Move> {
    let view = position.with_side_to_move(color);
    let mut moves = pseudo_legal_moves(&view);
    moves.retain(|mv| !in_check(&play(&view, mv), color));
    moves.sort_by_key(Move::sort_key);
    trace!(%color, count = moves.len(), "generated legal moves");
    moves
}

/// Moves obeying each piece's movement rule for the side to move, which may
/// still leave the king in check
pub(crate) fn pseudo_legal_moves(position: &Position) -> Vec<Move> {
    let color = position.side_to_move();
    let mut moves = Vec::with_capacity(64);
    for (from, piece) in position.pieces(color) {
        match piece.kind {
            PieceKind::Pawn => pawn_moves(position, from, color, &mut moves),
            PieceKind::Knight => knight_moves(position, from, color, &mut moves),
            PieceKind::King => king_moves(position, from, color, &mut moves),
            _ => slider_moves(position, from, piece, &mut moves),
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::decode;
    use crate::move_gen::in_check;

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let pos = Position::starting();
        assert_eq!(legal_moves(&pos).len(), 20);
        assert_eq!(legal_moves_for(&pos, Color::Black).len(), 20);
    }

    #[test]
    fn test_moves_are_sorted() {
        let moves = legal_moves(&Position::starting());
        let keys: Vec<_> = moves.iter().map(Move::sort_key).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(moves[0].to_string(), "b1a3");
    }

    #[test]
    fn test_pinned_knight_cannot_move() {
        let pos = decode("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let moves = legal_moves(&pos);
        assert!(
            moves.iter().all(|m| m.src != 12),
            "pinned knight has no legal move"
        );
        assert!(!moves.is_empty(), "the king can still move");
    }

    #[test]
    fn test_pinned_rook_may_capture_pinner() {
        let pos = decode("4r1k1/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
        let rook_moves: Vec<_> = legal_moves(&pos)
            .into_iter()
            .filter(|m| m.src == 12)
            .map(|m| m.dst)
            .collect();
        assert_eq!(rook_moves, vec![20, 28, 36, 44, 52, 60], "rook stays on the e-file");
    }

    #[test]
    fn test_checkmate_has_no_moves() {
        // Fool's mate
        let pos = decode("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert!(legal_moves(&pos).is_empty());
        assert!(in_check(&pos, Color::White));
    }

    #[test]
    fn test_stalemate_has_no_moves() {
        let pos = decode("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(legal_moves(&pos).is_empty());
        assert!(!in_check(&pos, Color::Black));
    }

    #[test]
    fn test_en_passant_only_for_side_to_move() {
        let pos = decode("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2").unwrap();
        assert!(legal_moves(&pos).iter().any(|m| m.is_en_passant()));
        let black = legal_moves_for(&pos, Color::Black);
        assert!(black.iter().all(|m| !m.is_en_passant()));
    }

    #[test]
    fn test_en_passant_exposing_king_is_illegal() {
        // Both pawns leave the fifth rank, opening the rook onto the king
        let pos = decode("8/8/8/K2pP2r/8/8/8/4k3 w - d6 0 2").unwrap();
        assert!(legal_moves(&pos).iter().all(|m| !m.is_en_passant()));
    }
}
