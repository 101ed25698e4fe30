//! Move application and UCI move parsing
//!
//! Positions are immutable: [`play`] returns a new [`Position`] with the move
//! applied and leaves its input untouched.

use crate::board::{parse_square, rank_of, square_at, step};
use crate::error::{ChessFeaturesError, ChessFeaturesResult};
use crate::move_gen::legal_moves;
use crate::position::Position;
use crate::types::*;

/// Apply a move produced by the move generator for `position`
///
/// Handles captures, en-passant removal, the rook hop on castling, promotion,
/// castling-right updates, the en-passant target after a double push, both
/// counters and the side to move. The move is not validated: a move from an
/// empty square returns the position unchanged.
pub fn play(position: &Position, mv: &Move) -> Position {
    let mut next = position.clone();
    let Some(mover) = position.piece_at(mv.src) else {
        return next;
    };
    let color = mover.color;
    let captured = !position.is_empty(mv.dst) || mv.is_en_passant();

    next.board[mv.src as usize] = 0;
    next.board[mv.dst as usize] = match mv.promotion {
        Some(kind) => Piece::new(kind, color).code(),
        None => mover.code(),
    };

    if mv.is_en_passant() {
        if let Some(victim) = step(mv.dst, (0, -color.forward())) {
            next.board[victim as usize] = 0;
        }
    }

    let rank = color.back_rank();
    let rook_hop = if mv.flags.contains(MoveFlags::CASTLE_KINGSIDE) {
        Some((square_at(7, rank), square_at(5, rank)))
    } else if mv.flags.contains(MoveFlags::CASTLE_QUEENSIDE) {
        Some((square_at(0, rank), square_at(3, rank)))
    } else {
        None
    };
    if let Some((rook_src, rook_dst)) = rook_hop {
        next.board[rook_dst as usize] = next.board[rook_src as usize];
        next.board[rook_src as usize] = 0;
    }

    if mover.kind == PieceKind::King {
        next.castling.remove(CastlingRights::for_color(color));
    }
    next.castling.remove(corner_right(mv.src) | corner_right(mv.dst));

    let is_pawn = mover.kind == PieceKind::Pawn;
    next.en_passant = if is_pawn && (rank_of(mv.dst) - rank_of(mv.src)).abs() == 2 {
        step(mv.src, (0, color.forward()))
    } else {
        None
    };

    next.halfmove_clock = if is_pawn || captured {
        0
    } else {
        position.halfmove_clock.saturating_add(1)
    };
    if color == Color::Black {
        next.fullmove_number = position.fullmove_number.saturating_add(1);
    }
    next.side_to_move = color.opposite();
    next
}

/// Castling right lost when a rook leaves, or is captured on, `square`
fn corner_right(square: Square) -> CastlingRights {
    match square {
        0 => CastlingRights::WHITE_QUEENSIDE,
        7 => CastlingRights::WHITE_KINGSIDE,
        56 => CastlingRights::BLACK_QUEENSIDE,
        63 => CastlingRights::BLACK_KINGSIDE,
        _ => CastlingRights::empty(),
    }
}

/// Resolve UCI coordinate notation (`e2e4`, `e7e8q`, `e1g1`) to a legal move
///
/// # Errors
///
/// [`ChessFeaturesError::InvalidMove`] when the text is not coordinate
/// notation or names no legal move in `position`.
pub fn parse_uci(position: &Position, notation: &str) -> ChessFeaturesResult<Move> {
    let invalid = |reason: &str| ChessFeaturesError::InvalidMove {
        notation: notation.to_string(),
        reason: reason.to_string(),
    };

    if !notation.is_ascii() || !(4..=5).contains(&notation.len()) {
        return Err(invalid("expected 4 or 5 characters of coordinate notation"));
    }
    let src = parse_square(&notation[0..2]).map_err(|_| invalid("bad origin square"))?;
    let dst = parse_square(&notation[2..4]).map_err(|_| invalid("bad destination square"))?;
    let promotion = match notation[4..].chars().next() {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(kind) if PieceKind::PROMOTIONS.contains(&kind) => Some(kind),
            _ => return Err(invalid("bad promotion piece")),
        },
    };

    legal_moves(position)
        .into_iter()
        .find(|mv| mv.src == src && mv.dst == dst && mv.promotion == promotion)
        .ok_or_else(|| invalid("not a legal move in this position"))
}

/// Parse a UCI move and play it
pub fn apply_uci(position: &Position, notation: &str) -> ChessFeaturesResult<Position> {
    let mv = parse_uci(position, notation)?;
    Ok(play(position, &mv))
}
