//! # Core Types - Colors, Pieces, Castling Rights & Moves
//!
//! ## Overview
//!
//! Pieces live on the board as signed `i8` codes (see [`crate::constants`]), which
//! keeps the 64-square array compact and makes ownership tests a sign check. The
//! typed wrappers in this module ([`Color`], [`PieceKind`], [`Piece`]) are what the
//! public API hands out; they convert to and from the raw codes at the boundary.
//!
//! ## Moves
//!
//! A [`Move`] is a freestanding value: source and destination squares, an optional
//! promotion kind and a set of [`MoveFlags`]. It holds no reference to the position
//! it was generated from. Moves are only meaningful for that position by
//! convention, so callers must not replay a move against an unrelated position.
//!
//! `Display` renders a move in UCI coordinate notation (`e2e4`, `e7e8q`, `e1g1`).

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::board::square_name;
use crate::constants::*;

/// Square index 0-63, `file = square % 8`, `rank = square / 8`
pub type Square = i8;
pub type Board = [i8; 64];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign used in the board encoding (+1 white, -1 black)
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank delta of a single pawn step
    #[inline]
    pub fn forward(self) -> i8 {
        self.sign()
    }

    #[inline]
    pub fn back_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank a pawn of this color starts on
    #[inline]
    pub fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank one step away from promotion
    #[inline]
    pub fn seventh_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Color of a raw board code, `None` for an empty square
    #[inline]
    pub fn of_code(code: i8) -> Option<Color> {
        if code > 0 {
            Some(Color::White)
        } else if code < 0 {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion targets in generation order
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub fn id(self) -> i8 {
        self as i8
    }

    pub fn from_id(id: i8) -> Option<PieceKind> {
        match id {
            PAWN_ID => Some(PieceKind::Pawn),
            KNIGHT_ID => Some(PieceKind::Knight),
            BISHOP_ID => Some(PieceKind::Bishop),
            ROOK_ID => Some(PieceKind::Rook),
            QUEEN_ID => Some(PieceKind::Queen),
            KING_ID => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Material value in pawns
    #[inline]
    pub fn value(self) -> u32 {
        FIGURE_VALUE[self as usize]
    }

    /// Lowercase letter used by FEN and UCI promotion suffixes
    #[inline]
    pub fn to_char(self) -> char {
        FIG_CHARS[self as usize]
    }

    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Signed board code for this piece
    #[inline]
    pub fn code(self) -> i8 {
        self.kind.id() * self.color.sign()
    }

    #[inline]
    pub fn from_code(code: i8) -> Option<Piece> {
        let color = Color::of_code(code)?;
        let kind = PieceKind::from_id(code.abs())?;
        Some(Piece { kind, color })
    }

    /// FEN letter: uppercase for white, lowercase for black
    pub fn fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { kind, color })
    }
}

bitflags! {
    /// Remaining castling rights, one flag per color and wing
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CastlingRights: u8 {
        const WHITE_KINGSIDE = 0b0001;
        const WHITE_QUEENSIDE = 0b0010;
        const BLACK_KINGSIDE = 0b0100;
        const BLACK_QUEENSIDE = 0b1000;
    }
}

impl CastlingRights {
    pub fn kingside(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITE_KINGSIDE,
            Color::Black => CastlingRights::BLACK_KINGSIDE,
        }
    }

    pub fn queenside(color: Color) -> CastlingRights {
        match color {
            Color::White => CastlingRights::WHITE_QUEENSIDE,
            Color::Black => CastlingRights::BLACK_QUEENSIDE,
        }
    }

    /// Both wings for one color
    pub fn for_color(color: Color) -> CastlingRights {
        CastlingRights::kingside(color) | CastlingRights::queenside(color)
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MoveFlags: u8 {
        const CAPTURE = 0b0001;
        const EN_PASSANT = 0b0010;
        const CASTLE_KINGSIDE = 0b0100;
        const CASTLE_QUEENSIDE = 0b1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub src: Square,
    pub dst: Square,
    pub promotion: Option<PieceKind>,
    pub flags: MoveFlags,
}

impl Move {
    pub fn new(src: Square, dst: Square) -> Self {
        Move {
            src,
            dst,
            promotion: None,
            flags: MoveFlags::empty(),
        }
    }

    pub fn with_flags(src: Square, dst: Square, flags: MoveFlags) -> Self {
        Move {
            src,
            dst,
            promotion: None,
            flags,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.flags.contains(MoveFlags::CAPTURE)
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flags.contains(MoveFlags::EN_PASSANT)
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.flags
            .intersects(MoveFlags::CASTLE_KINGSIDE | MoveFlags::CASTLE_QUEENSIDE)
    }

    /// Ordering key: origin square, then destination, then promotion kind
    pub(crate) fn sort_key(&self) -> (Square, Square, i8) {
        (self.src, self.dst, self.promotion.map_or(0, PieceKind::id))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.src), square_name(self.dst))?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_code_round_trip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::from_code(piece.code()), Some(piece));
            }
        }
        assert_eq!(Piece::from_code(VOID_ID), None);
    }

    #[test]
    fn test_fen_chars_follow_color_case() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).fen_char(), 'N');
        assert_eq!(Piece::new(PieceKind::Queen, Color::Black).fen_char(), 'q');
        assert_eq!(
            Piece::from_fen_char('K'),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn test_move_display_is_uci() {
        let mut mv = Move::new(52, 60);
        assert_eq!(mv.to_string(), "e7e8");
        mv.promotion = Some(PieceKind::Queen);
        assert_eq!(mv.to_string(), "e7e8q");
    }
}
