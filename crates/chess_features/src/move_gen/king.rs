//! King move generation
//!
//! Kings move one square in any direction. Castling is generated here as well
//! and is allowed only when:
//!
//! - The castling right for that wing is still held (rights are tracked as
//!   flags, never by scanning history)
//! - King and rook stand on their original squares
//! - Every square between king and rook is empty
//! - The king is not currently in check
//! - The king does not pass through or land on an attacked square
//!
//! ```text
//!   a b c d e f g h
//!   R . . . K . . R     kingside:  e1 -> g1, rook h1 -> f1
//!       ^ ^ ^ ^ ^       queenside: e1 -> c1, rook a1 -> d1
//! ```

use crate::board::square_at;
use crate::position::Position;
use crate::types::*;

use super::attack::{in_check, is_attacked};
use super::push_target;
use super::tables::king_attacks;

const KING_FILE: i8 = 4;

/// One castling wing, described by files on the back rank
struct Wing {
    right: fn(Color) -> CastlingRights,
    flag: MoveFlags,
    rook_file: i8,
    king_dst_file: i8,
    /// Files that must be empty
    between: &'static [i8],
    /// Files the king crosses or lands on, none of them attacked
    king_path: &'static [i8],
}

const WINGS: [Wing; 2] = [
    Wing {
        right: CastlingRights::kingside,
        flag: MoveFlags::CASTLE_KINGSIDE,
        rook_file: 7,
        king_dst_file: 6,
        between: &[5, 6],
        king_path: &[5, 6],
    },
    Wing {
        right: CastlingRights::queenside,
        flag: MoveFlags::CASTLE_QUEENSIDE,
        rook_file: 0,
        king_dst_file: 2,
        between: &[1, 2, 3],
        king_path: &[3, 2],
    },
];

/// Push pseudo-legal king moves (including castling) from `from` onto `moves`
pub(crate) fn king_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    for dst in king_attacks(from) {
        push_target(position, from, dst, color, moves);
    }
    castling_moves(position, from, color, moves);
}

fn castling_moves(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let rank = color.back_rank();
    if from != square_at(KING_FILE, rank) || !position.has_castling_rights(color) {
        return;
    }
    if in_check(position, color) {
        return;
    }

    let rook = Piece::new(PieceKind::Rook, color).code();
    let enemy = color.opposite();

    for wing in &WINGS {
        if !position.castling_rights().contains((wing.right)(color)) {
            continue;
        }
        if position.code_at(square_at(wing.rook_file, rank)) != rook {
            continue;
        }
        if !wing
            .between
            .iter()
            .all(|&file| position.is_empty(square_at(file, rank)))
        {
            continue;
        }
        if wing
            .king_path
            .iter()
            .any(|&file| is_attacked(position, square_at(file, rank), enemy))
        {
            continue;
        }
        moves.push(Move::with_flags(
            from,
            square_at(wing.king_dst_file, rank),
            wing.flag,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::fen::decode;

    fn king_moves_in(fen: &str) -> Vec<Move> {
        let pos = decode(fen).unwrap();
        let color = pos.side_to_move();
        let from = pos.king_square(color).unwrap();
        let mut moves = Vec::new();
        king_moves(&pos, from, color, &mut moves);
        moves
    }

    #[test]
    fn test_both_castles_available() {
        let moves = king_moves_in("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).map(|m| m.dst).collect();
        assert_eq!(castles, vec![G1, C1]);
    }

    #[test]
    fn test_no_castling_without_rights_or_rook() {
        let moves = king_moves_in("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1");
        assert!(moves.iter().all(|m| !m.is_castle()), "rights are gone");
        let moves = king_moves_in("r3k2r/8/8/8/8/8/8/4K2R w KQkq - 0 1");
        let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).map(|m| m.dst).collect();
        assert_eq!(castles, vec![G1], "a1 rook is missing");
    }

    #[test]
    fn test_no_castling_through_attack_or_out_of_check() {
        // Black rook on f8 covers f1
        let moves = king_moves_in("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).map(|m| m.dst).collect();
        assert_eq!(castles, vec![C1]);

        let moves = king_moves_in("4k3/8/8/8/8/8/8/R3K2r w Q - 0 1");
        assert!(moves.iter().all(|m| !m.is_castle()), "king in check cannot castle");
    }

    #[test]
    fn test_queenside_b_file_may_be_attacked() {
        // b1 is attacked but the king never crosses it
        let moves = king_moves_in("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert!(moves.iter().any(|m| m.dst == C1 && m.is_castle()));
    }

    #[test]
    fn test_queenside_blocked_by_piece_on_b_file() {
        // The knight on b1 sits between king and rook, off the king's path
        let moves = king_moves_in("r3k3/8/8/8/8/8/8/RN2K3 w Q - 0 1");
        assert!(!moves.iter().any(|m| m.dst == C1 && m.is_castle()));
        assert!(moves.iter().all(|m| !m.is_castle()));
    }

    #[test]
    fn test_black_castles_on_eighth_rank() {
        let moves = king_moves_in("r3k2r/8/8/8/8/8/8/4K3 b kq - 0 1");
        let castles: Vec<_> = moves.iter().filter(|m| m.is_castle()).map(|m| m.dst).collect();
        assert_eq!(castles, vec![G8, C8]);
    }
}
