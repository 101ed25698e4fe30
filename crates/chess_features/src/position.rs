//! Immutable position snapshot
//!
//! A [`Position`] is built once (by [`crate::fen::decode`] or by applying a move to
//! another position) and never mutated afterwards. Every query in the crate takes
//! `&Position`, so positions can be shared freely across threads.

use crate::bitset::AttackSet;
use crate::constants::*;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// Standard starting position
    pub fn starting() -> Position {
        let mut board = [0i8; 64];
        let back = [
            W_ROOK, W_KNIGHT, W_BISHOP, W_QUEEN, W_KING, W_BISHOP, W_KNIGHT, W_ROOK,
        ];
        for (file, &code) in back.iter().enumerate() {
            board[file] = code;
            board[8 + file] = W_PAWN;
            board[48 + file] = B_PAWN;
            board[56 + file] = -code;
        }
        Position {
            board,
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        Piece::from_code(self.board[square as usize])
    }

    /// Raw signed board code at a square
    #[inline]
    pub(crate) fn code_at(&self, square: Square) -> i8 {
        self.board[square as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.board[square as usize] == VOID_ID
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// Whether `color` still holds either castling right
    #[inline]
    pub fn has_castling_rights(&self, color: Color) -> bool {
        self.castling.intersects(CastlingRights::for_color(color))
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Square of `color`'s king
    ///
    /// Decoded positions always hold exactly one king per color, so this only
    /// returns `None` for positions assembled by hand inside the crate.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color).code();
        POS_RANGE.clone().find(|&sq| self.board[sq as usize] == king)
    }

    /// All pieces of `color` in ascending square order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        POS_RANGE.clone().filter_map(move |sq| {
            self.piece_at(sq)
                .filter(|piece| piece.color == color)
                .map(|piece| (sq, piece))
        })
    }

    /// Squares holding `kind` pieces of `color`
    pub fn squares_of(&self, kind: PieceKind, color: Color) -> AttackSet {
        let code = Piece::new(kind, color).code();
        POS_RANGE
            .clone()
            .filter(|&sq| self.board[sq as usize] == code)
            .collect()
    }

    /// Every occupied square
    pub fn occupied(&self) -> AttackSet {
        POS_RANGE.clone().filter(|&sq| !self.is_empty(sq)).collect()
    }

    /// Same placement with another side to move
    ///
    /// The en-passant target belongs to the side that was to move, so it is
    /// dropped when the side changes.
    pub(crate) fn with_side_to_move(&self, color: Color) -> Position {
        if color == self.side_to_move {
            return self.clone();
        }
        Position {
            side_to_move: color,
            en_passant: None,
            ..self.clone()
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_layout() {
        let pos = Position::starting();
        assert_eq!(pos.king_square(Color::White), Some(E1));
        assert_eq!(pos.king_square(Color::Black), Some(E8));
        assert_eq!(
            pos.piece_at(D1),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(pos.pieces(Color::White).count(), 16);
        assert_eq!(pos.occupied().count(), 32);
        assert_eq!(pos.squares_of(PieceKind::Rook, Color::Black).count(), 2);
        assert!(pos.has_castling_rights(Color::Black));
    }

    #[test]
    fn test_square_scans_cover_the_whole_board() {
        let pos = Position::starting();
        for _ in 0..2 {
            assert_eq!(pos.king_square(Color::Black), Some(E8), "repeat scans start from a1");
            assert_eq!(pos.occupied().count(), 32);
        }
        let white: Vec<Square> = pos.pieces(Color::White).map(|(sq, _)| sq).collect();
        assert_eq!(white, (0..16).collect::<Vec<Square>>());
        let black = pos.squares_of(PieceKind::Pawn, Color::Black);
        assert!((48..56).all(|sq| black.contains(sq)));
    }

    #[test]
    fn test_with_side_to_move_drops_en_passant() {
        let mut pos = Position::starting();
        pos.en_passant = Some(20);
        let flipped = pos.with_side_to_move(Color::Black);
        assert_eq!(flipped.side_to_move(), Color::Black);
        assert_eq!(flipped.en_passant(), None);
        assert_eq!(pos.with_side_to_move(Color::White), pos);
    }
}
