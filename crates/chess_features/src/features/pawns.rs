//! Pawn structure features
//!
//! ```text
//!   doubled   two or more pawns of one color on a file
//!   isolated  a pawn file with no friendly pawn on either neighbouring file
//!   passed    no enemy pawn anywhere ahead on the pawn's own file
//!   backward  no friendly pawn diagonally behind, on a neighbouring file
//! ```
//!
//! Counts for doubled and isolated pawns are per *file*, not per pawn.

use serde::{Deserialize, Serialize};

use crate::board::{file_of, rank_of, square_at, step};
use crate::bundle::FeatureValue;
use crate::position::Position;
use crate::types::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PawnStructure {
    pub doubled: u32,
    pub isolated: u32,
    pub passed: u32,
}

impl From<PawnStructure> for FeatureValue {
    fn from(s: PawnStructure) -> Self {
        FeatureValue::record([
            ("doubled", s.doubled),
            ("isolated", s.isolated),
            ("passed", s.passed),
        ])
    }
}

/// Number of `color` pawns on each file
fn pawns_per_file(position: &Position, color: Color) -> [u32; 8] {
    let mut files = [0u32; 8];
    for square in position.squares_of(PieceKind::Pawn, color) {
        files[file_of(square) as usize] += 1;
    }
    files
}

/// Files holding a `color` pawn with no `color` pawn on an adjacent file
fn isolated_files(files: &[u32; 8]) -> u32 {
    let occupied = |file: i8| (0..8).contains(&file) && files[file as usize] > 0;
    (0..8)
        .filter(|&file| occupied(file) && !occupied(file - 1) && !occupied(file + 1))
        .count() as u32
}

/// No enemy pawn on the pawn's file strictly ahead of it
pub(crate) fn is_passed(position: &Position, square: Square, color: Color) -> bool {
    let enemy_pawn = Piece::new(PieceKind::Pawn, color.opposite()).code();
    let mut current = square;
    while let Some(ahead) = step(current, (0, color.forward())) {
        if position.code_at(ahead) == enemy_pawn {
            return false;
        }
        current = ahead;
    }
    true
}

pub fn pawn_structure(position: &Position, color: Color) -> PawnStructure {
    let files = pawns_per_file(position, color);
    let passed = position
        .squares_of(PieceKind::Pawn, color)
        .iter()
        .filter(|&sq| is_passed(position, sq, color))
        .count() as u32;

    PawnStructure {
        doubled: files.iter().filter(|&&n| n > 1).count() as u32,
        isolated: isolated_files(&files),
        passed,
    }
}

/// Sum over passed pawns of ranks advanced from the starting rank
pub fn passed_pawn_advancement(position: &Position, color: Color) -> u32 {
    position
        .squares_of(PieceKind::Pawn, color)
        .iter()
        .filter(|&sq| is_passed(position, sq, color))
        .map(|sq| ((rank_of(sq) - color.pawn_rank()) * color.forward()).max(0) as u32)
        .sum()
}

/// Pawns with no friendly pawn on an adjacent file one rank behind
pub fn backward_pawns(position: &Position, color: Color) -> u32 {
    let own_pawn = Piece::new(PieceKind::Pawn, color).code();
    let back = -color.forward();
    position
        .squares_of(PieceKind::Pawn, color)
        .iter()
        .filter(|&sq| {
            [(-1, back), (1, back)]
                .iter()
                .filter_map(|&dir| step(sq, dir))
                .all(|support| position.code_at(support) != own_pawn)
        })
        .count() as u32
}

/// Distinct files holding an isolated `color` pawn
pub fn isolated_weakness_clusters(position: &Position, color: Color) -> u32 {
    isolated_files(&pawns_per_file(position, color))
}

/// Whether no pawn of either color stands on `file`
pub(crate) fn is_pawnless_file(position: &Position, file: i8) -> bool {
    (0..8).all(|rank| {
        position
            .piece_at(square_at(file, rank))
            .map_or(true, |piece| piece.kind != PieceKind::Pawn)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::decode;

    #[test]
    fn test_starting_pawn_structure_is_clean() {
        let pos = Position::starting();
        for color in Color::ALL {
            assert_eq!(
                pawn_structure(&pos, color),
                PawnStructure { doubled: 0, isolated: 0, passed: 0 }
            );
            assert_eq!(backward_pawns(&pos, color), 8, "nothing stands behind the starting rank");
        }
    }

    #[test]
    fn test_doubled_and_isolated_count_files() {
        // White: a2 a3 (doubled, isolated a-file), c2 (isolated), e2 f2
        let pos = decode("4k3/8/8/8/8/P7/P1P1PP2/4K3 w - - 0 1").unwrap();
        let s = pawn_structure(&pos, Color::White);
        assert_eq!(s.doubled, 1);
        assert_eq!(s.isolated, 2, "a-file and c-file are isolated");
        assert_eq!(isolated_weakness_clusters(&pos, Color::White), 2);
    }

    #[test]
    fn test_passed_pawns_ignore_other_pieces() {
        // e5 is blocked only by a knight, d4 faces a d7 pawn
        let pos = decode("4k3/3p4/4n3/4P3/3P4/8/8/4K3 w - - 0 1").unwrap();
        let s = pawn_structure(&pos, Color::White);
        assert_eq!(s.passed, 1, "only e5 is passed");
        assert_eq!(passed_pawn_advancement(&pos, Color::White), 3, "e5 advanced three ranks");

        let black = pawn_structure(&pos, Color::Black);
        assert_eq!(black.passed, 0, "d7 faces the d4 pawn");
    }

    #[test]
    fn test_black_passed_pawn_advancement() {
        let pos = decode("4k3/8/8/8/8/p7/8/4K3 b - - 0 1").unwrap();
        assert_eq!(passed_pawn_advancement(&pos, Color::Black), 4, "a3 is four ranks from a7");
    }

    #[test]
    fn test_backward_pawns() {
        // d4 is supported from c3, c3 and e4 have no support behind
        let pos = decode("4k3/8/8/8/3PP3/2P5/8/4K3 w - - 0 1").unwrap();
        assert_eq!(backward_pawns(&pos, Color::White), 2);
    }

    #[test]
    fn test_pawnless_file() {
        let pos = decode("4k3/8/8/8/8/8/3p4/R3K3 w - - 0 1").unwrap();
        assert!(is_pawnless_file(&pos, 0));
        assert!(!is_pawnless_file(&pos, 3), "black pawns count too");
    }
}
