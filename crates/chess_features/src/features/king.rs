//! King features
//!
//! The king zone is the set of squares adjacent to the king.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{file_of, rank_of, square_at};
use crate::bundle::FeatureValue;
use crate::move_gen::{is_attacked, king_attacks};
use crate::position::Position;
use crate::types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KingSafety {
    Safe,
    Exposed,
}

impl KingSafety {
    pub fn label(self) -> &'static str {
        match self {
            KingSafety::Safe => "Safe",
            KingSafety::Exposed => "Exposed",
        }
    }
}

impl fmt::Display for KingSafety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<KingSafety> for FeatureValue {
    fn from(safety: KingSafety) -> Self {
        FeatureValue::from(safety.label())
    }
}

/// `Safe` iff at most two squares around the king are attacked by the enemy
/// and `color` holds no castling rights, else `Exposed`
///
/// Holding castling rights always reads as `Exposed`, even for a king that is
/// well covered and simply has not castled yet.
pub fn king_safety(position: &Position, color: Color) -> KingSafety {
    let Some(king) = position.king_square(color) else {
        return KingSafety::Exposed;
    };
    let enemy = color.opposite();
    let attacked = king_attacks(king)
        .iter()
        .filter(|&sq| is_attacked(position, sq, enemy))
        .count();

    if attacked <= 2 && !position.has_castling_rights(color) {
        KingSafety::Safe
    } else {
        KingSafety::Exposed
    }
}

/// Whether `color` still holds any castling right
pub fn castling_status(position: &Position, color: Color) -> bool {
    position.has_castling_rights(color)
}

/// Squares around `color`'s king that `color` itself attacks
pub fn king_zone_control(position: &Position, color: Color) -> u32 {
    position.king_square(color).map_or(0, |king| {
        king_attacks(king)
            .iter()
            .filter(|&sq| is_attacked(position, sq, color))
            .count() as u32
    })
}

/// Own pawns on the three files centred on the king, one rank in front of it
pub fn pawn_shield(position: &Position, color: Color) -> u32 {
    let Some(king) = position.king_square(color) else {
        return 0;
    };
    let front = rank_of(king) + color.forward();
    if !(0..8).contains(&front) {
        return 0;
    }
    let own_pawn = Piece::new(PieceKind::Pawn, color).code();
    let file = file_of(king);
    (file - 1..=file + 1)
        .filter(|f| (0..8).contains(f))
        .filter(|&f| position.code_at(square_at(f, front)) == own_pawn)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::decode;

    #[test]
    fn test_castling_rights_mean_exposed() {
        let pos = Position::starting();
        assert_eq!(king_safety(&pos, Color::White), KingSafety::Exposed);
        assert_eq!(king_safety(&pos, Color::Black), KingSafety::Exposed);
        assert!(castling_status(&pos, Color::White));
    }

    #[test]
    fn test_castled_king_is_safe() {
        let pos = decode("r4rk1/ppp2ppp/8/8/8/8/PPP2PPP/R4RK1 w - - 0 1").unwrap();
        assert_eq!(king_safety(&pos, Color::White), KingSafety::Safe);
        assert!(!castling_status(&pos, Color::White));
        assert_eq!(pawn_shield(&pos, Color::White), 3);
        assert_eq!(pawn_shield(&pos, Color::Black), 3);
    }

    #[test]
    fn test_many_attacked_neighbours_is_exposed() {
        // Black queen on g3 covers f2, g2 and h2
        let pos = decode("6k1/8/8/8/8/6q1/8/6K1 w - - 0 1").unwrap();
        assert_eq!(king_safety(&pos, Color::White), KingSafety::Exposed);
    }

    #[test]
    fn test_king_zone_control() {
        let pos = Position::starting();
        // Every square around e1 holds a defended piece
        assert_eq!(king_zone_control(&pos, Color::White), 5);
    }

    #[test]
    fn test_pawn_shield_at_edge() {
        let pos = decode("7k/6pp/8/8/8/8/PP6/K7 w - - 0 1").unwrap();
        assert_eq!(pawn_shield(&pos, Color::White), 2, "a-file king has two shield files");
        assert_eq!(pawn_shield(&pos, Color::Black), 2);
    }

    #[test]
    fn test_serializes_as_label() {
        let value = FeatureValue::from(KingSafety::Safe);
        assert_eq!(value.as_label(), Some("Safe"));
    }
}
