//! Public API for playing moves on positions
//!
//! ## Module Organization
//!
//! - `moves` - Move application and UCI parsing (play, parse_uci, apply_uci)
//! - `state` - Game state queries (game_state)

mod moves;
mod state;

pub use moves::{apply_uci, parse_uci, play};
pub use state::{game_state, GameState};
