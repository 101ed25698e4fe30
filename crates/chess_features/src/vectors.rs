//! # Feature Vectors - Fixed-Length Encodings for Learned Models
//!
//! ## Board pattern
//!
//! The board becomes an 8×8×12 one-hot tensor, flattened square by square:
//!
//! ```text
//! index = square * 12 + plane
//!
//! plane   0  1  2  3  4  5 |  6  7  8  9 10 11
//! piece   P  N  B  R  Q  K |  p  n  b  r  q  k
//!         ---- white ----- | ----- black -----
//! ```
//!
//! ## Move sequence
//!
//! The last `max_len` moves, each as its UCI string hashed with 64-bit FNV-1a
//! and reduced to `(hash % 1000) / 1000`, padded with zeros at the end. The
//! hash is fixed, so the same moves always give the same vector.

use serde::{Deserialize, Serialize};

use crate::position::Position;
use crate::style::StyleScores;
use crate::types::*;

pub const BOARD_PATTERN_LEN: usize = 64 * 12;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    pub board_pattern_features: Vec<u8>,
    pub move_sequence_features: Vec<f64>,
    #[serde(flatten)]
    pub style: StyleScores,
    /// Evaluation in pawns from white's point of view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_eval: Option<f64>,
}

/// One-hot piece placement, [`BOARD_PATTERN_LEN`] entries
pub fn board_pattern(position: &Position) -> Vec<u8> {
    let mut pattern = vec![0u8; BOARD_PATTERN_LEN];
    for color in Color::ALL {
        let offset = match color {
            Color::White => 0,
            Color::Black => 6,
        };
        for (square, piece) in position.pieces(color) {
            let plane = piece.kind as usize - 1 + offset;
            pattern[square as usize * 12 + plane] = 1;
        }
    }
    pattern
}

/// Hashed encoding of the last `max_len` moves
pub fn move_sequence(moves: &[Move], max_len: usize) -> Vec<f64> {
    let start = moves.len().saturating_sub(max_len);
    let mut features: Vec<f64> = moves[start..]
        .iter()
        .map(|mv| (fnv1a(mv.to_string().as_bytes()) % 1000) as f64 / 1000.0)
        .collect();
    features.resize(max_len, 0.0);
    features
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}
