//! # Constants - Piece Encoding, Values & Direction Tables
//!
//! ## Board Encoding
//!
//! The board is a flat `[i8; 64]` indexed from a1 (0) to h8 (63), so that
//! `file = square % 8` and `rank = square / 8`. Each cell holds a signed piece id:
//!
//! - Positive values (1-6) are white pieces
//! - Negative values (-1 to -6) are black pieces
//! - Zero is an empty square
//!
//! The sign is the color and the absolute value is the piece kind, which keeps
//! ownership tests down to a single comparison.
//!
//! ## Material Values
//!
//! Feature extraction works in whole pawns rather than centipawns:
//!
//! | Piece  | Value |
//! |--------|-------|
//! | Pawn   | 1     |
//! | Knight | 3     |
//! | Bishop | 3     |
//! | Rook   | 5     |
//! | Queen  | 9     |
//! | King   | 0     |
//!
//! The king carries no material value; its loss ends the game, so it never
//! takes part in a material comparison.
//!
//! ## Direction Tables
//!
//! Directions are `(file_delta, rank_delta)` pairs rather than linear offsets.
//! Linear offsets wrap around the board edge (h1 + 1 == a2), so every step would
//! need a wrap check; with coordinate pairs a step is valid iff both coordinates
//! stay inside `0..8`.
//!
//! ```text
//!   NW  N  NE        (-1,+1) (0,+1) (+1,+1)
//!    W  .  E         (-1, 0)   .    (+1, 0)
//!   SW  S  SE        (-1,-1) (0,-1) (+1,-1)
//! ```

use core::ops::Range;

pub const VOID_ID: i8 = 0;
pub const PAWN_ID: i8 = 1;
pub const KNIGHT_ID: i8 = 2;
pub const BISHOP_ID: i8 = 3;
pub const ROOK_ID: i8 = 4;
pub const QUEEN_ID: i8 = 5;
pub const KING_ID: i8 = 6;

pub const W_PAWN: i8 = PAWN_ID;
pub const W_KNIGHT: i8 = KNIGHT_ID;
pub const W_BISHOP: i8 = BISHOP_ID;
pub const W_ROOK: i8 = ROOK_ID;
pub const W_QUEEN: i8 = QUEEN_ID;
pub const W_KING: i8 = KING_ID;

pub const B_PAWN: i8 = -PAWN_ID;
pub const B_KNIGHT: i8 = -KNIGHT_ID;
pub const B_BISHOP: i8 = -BISHOP_ID;
pub const B_ROOK: i8 = -ROOK_ID;
pub const B_QUEEN: i8 = -QUEEN_ID;
pub const B_KING: i8 = -KING_ID;

pub type Direction = (i8, i8);

pub const N: Direction = (0, 1);
pub const S: Direction = (0, -1);
pub const E: Direction = (1, 0);
pub const W: Direction = (-1, 0);
pub const NE: Direction = (1, 1);
pub const NW: Direction = (-1, 1);
pub const SE: Direction = (1, -1);
pub const SW: Direction = (-1, -1);

pub const ROOK_DIRS: [Direction; 4] = [N, E, S, W];
pub const BISHOP_DIRS: [Direction; 4] = [NE, SE, SW, NW];
pub const QUEEN_DIRS: [Direction; 8] = [N, E, S, W, NE, SE, SW, NW];
pub const KING_DIRS: [Direction; 8] = QUEEN_DIRS;
pub const KNIGHT_DIRS: [Direction; 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

pub const VOID_VALUE: u32 = 0;
pub const PAWN_VALUE: u32 = 1;
pub const KNIGHT_VALUE: u32 = 3;
pub const BISHOP_VALUE: u32 = 3;
pub const ROOK_VALUE: u32 = 5;
pub const QUEEN_VALUE: u32 = 9;
pub const KING_VALUE: u32 = 0;

pub const FIGURE_VALUE: [u32; KING_ID as usize + 1] = [
    VOID_VALUE,
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const A1: i8 = 0;
pub const C1: i8 = 2;
pub const D1: i8 = 3;
pub const E1: i8 = 4;
pub const F1: i8 = 5;
pub const G1: i8 = 6;
pub const H1: i8 = 7;
pub const D4: i8 = 27;
pub const E4: i8 = 28;
pub const D5: i8 = 35;
pub const E5: i8 = 36;
pub const A8: i8 = 56;
pub const C8: i8 = 58;
pub const D8: i8 = 59;
pub const E8: i8 = 60;
pub const F8: i8 = 61;
pub const G8: i8 = 62;
pub const H8: i8 = 63;

pub const CENTER_SQUARES: [i8; 4] = [D4, D5, E4, E5];

pub const POS_RANGE: Range<i8> = 0..64;

pub const FIG_CHARS: [char; 7] = [' ', 'p', 'n', 'b', 'r', 'q', 'k'];
