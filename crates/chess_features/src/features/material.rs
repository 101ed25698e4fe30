//! Material features
//!
//! Counts piece values in whole pawns (pawn 1, knight 3, bishop 3, rook 5,
//! queen 9, king 0).

use crate::position::Position;
use crate::types::*;

/// Sum of piece values for `color`
pub fn material(position: &Position, color: Color) -> u32 {
    position
        .pieces(color)
        .map(|(_, piece)| piece.kind.value())
        .sum()
}

/// White material minus black material
pub fn material_balance(position: &Position) -> i32 {
    material(position, Color::White) as i32 - material(position, Color::Black) as i32
}

/// 1 if `color` holds two or more bishops, else 0
pub fn bishop_pair_bonus(position: &Position, color: Color) -> u32 {
    u32::from(position.squares_of(PieceKind::Bishop, color).count() >= 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::decode;

    #[test]
    fn test_starting_position_material() {
        let pos = Position::starting();
        assert_eq!(material(&pos, Color::White), 39, "8 + 6 + 6 + 10 + 9");
        assert_eq!(material(&pos, Color::White), material(&pos, Color::Black));
        assert_eq!(material_balance(&pos), 0, "Starting position should have 0 material balance");
    }

    #[test]
    fn test_black_up_queen() {
        let pos = decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1").unwrap();
        assert_eq!(material_balance(&pos), -9);
    }

    #[test]
    fn test_kings_carry_no_material() {
        let pos = decode("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(material(&pos, Color::White), 0);
        assert_eq!(material(&pos, Color::Black), 0);
    }

    #[test]
    fn test_bishop_pair() {
        let pos = Position::starting();
        assert_eq!(bishop_pair_bonus(&pos, Color::White), 1);
        let pos = decode("rn1qkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
        assert_eq!(bishop_pair_bonus(&pos, Color::Black), 0);
    }
}
