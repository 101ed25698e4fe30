//! Absolute pin detection
//!
//! A piece is pinned when it is the only thing standing between its own king
//! and an enemy slider that moves along the connecting line. Being attacked is
//! not the same thing: an attacked piece with another blocker behind it, or
//! with no king behind it, is not pinned.
//!
//! ```text
//!   K . . N . . r      white knight pinned by the rook
//!   K . . N B . r      not pinned: the bishop also blocks
//!   K . . N . . b      not pinned: bishops do not slide along ranks
//! ```

use crate::board::line_direction;
use crate::position::Position;
use crate::types::*;

use super::sliding::{first_occupied, slides_along};

/// Check if the piece on `square` is pinned to its own king
///
/// Empty squares and kings are never pinned.
pub fn is_pinned(position: &Position, square: Square) -> bool {
    let Some(piece) = position.piece_at(square) else {
        return false;
    };
    if piece.kind == PieceKind::King {
        return false;
    }
    let Some(king) = position.king_square(piece.color) else {
        return false;
    };
    let Some(dir) = line_direction(king, square) else {
        return false;
    };

    // Nothing may stand between the king and the candidate
    if first_occupied(position, king, dir) != Some(square) {
        return false;
    }

    first_occupied(position, square, dir)
        .and_then(|beyond| position.piece_at(beyond))
        .is_some_and(|pinner| pinner.color != piece.color && slides_along(pinner.kind, dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::decode;

    #[test]
    fn test_rook_pins_knight_on_file() {
        let pos = decode("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(is_pinned(&pos, 12), "e2 knight is pinned by the e8 rook");
    }

    #[test]
    fn test_second_blocker_breaks_pin() {
        let pos = decode("4r1k1/8/8/8/4B3/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(!is_pinned(&pos, 12), "e4 bishop shields the knight");
        assert!(!is_pinned(&pos, 28), "knight shields the bishop from the king side");
    }

    #[test]
    fn test_wrong_slider_does_not_pin() {
        let pos = decode("4b1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(!is_pinned(&pos, 12), "bishops do not slide along files");
    }

    #[test]
    fn test_diagonal_pin() {
        let pos = decode("6k1/8/8/q7/8/8/3P4/4K3 w - - 0 1").unwrap();
        assert!(is_pinned(&pos, 11), "d2 pawn pinned by the a5 queen");
        assert!(!is_pinned(&pos, 4), "kings are never pinned");
        assert!(!is_pinned(&pos, 20), "empty squares are never pinned");
    }

    #[test]
    fn test_friendly_slider_does_not_pin() {
        let pos = decode("4R1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        assert!(!is_pinned(&pos, 12));
    }
}
