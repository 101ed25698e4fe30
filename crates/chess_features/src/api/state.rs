//! Game state queries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::move_gen::{in_check, legal_moves};
use crate::position::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Playing,
    Checkmate,
    Stalemate,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameState::Playing => "playing",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
        })
    }
}

/// Current game state (playing, checkmate, stalemate) for the side to move
pub fn game_state(position: &Position) -> GameState {
    if !legal_moves(position).is_empty() {
        GameState::Playing
    } else if in_check(position, position.side_to_move()) {
        GameState::Checkmate
    } else {
        GameState::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::decode;

    #[test]
    fn test_game_states() {
        assert_eq!(game_state(&Position::starting()), GameState::Playing);

        let mate = decode("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3").unwrap();
        assert_eq!(game_state(&mate), GameState::Checkmate);

        let stalemate = decode("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(game_state(&stalemate), GameState::Stalemate);
    }
}
