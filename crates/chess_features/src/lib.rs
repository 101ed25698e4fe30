//! # chess_features - Positional Analysis for Chess Positions
//!
//! Turns a board-state string into a bundle of positional heuristics, broken
//! down per side, and compares bundles of two positions.
//!
//! ## Architecture
//!
//! ```text
//! text ──fen::decode──► Position ──┬── move_gen (attacks, pins, legal moves)
//!                                  │          │
//!                                  └──────────┴──► features::extract ──► FeatureBundle
//!                                                                            │
//!                                                         diff::diff ◄───────┘
//! ```
//!
//! Everything below [`analysis`] is a pure function of immutable inputs. A
//! [`Position`] is never mutated in place; playing a move returns a new one.
//!
//! ## Quick Start
//!
//! ```rust
//! use chess_features::{diff, extract, fen};
//!
//! let before = fen::decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")?;
//! let after = chess_features::api::apply_uci(&before, "e2e4")?;
//!
//! let changed = diff(&extract(&before), &extract(&after));
//! assert!(changed.contains_key("center_control"));
//! # Ok::<(), chess_features::ChessFeaturesError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`fen`] - Board-state string codec
//! - [`move_gen`] - Attack queries, pin detection, legal move generation
//! - [`api`] - Playing moves, UCI parsing, game state
//! - [`features`] - The feature bank and [`extract`]
//! - [`diff`] - Structural comparison of bundles
//! - [`vectors`] - Fixed-length encodings for learned models
//! - [`engine`], [`style`] - Pluggable external collaborators
//! - [`analysis`] - The pipeline combining all of the above

pub mod analysis;
pub mod api;
pub mod bitset;
pub mod board;
pub mod bundle;
pub mod config;
pub mod constants;
pub mod diff;
pub mod engine;
pub mod error;
pub mod features;
pub mod fen;
pub mod move_gen;
pub mod position;
pub mod style;
pub mod types;
pub mod vectors;

pub use analysis::{Analysis, Analyzer};
pub use bitset::AttackSet;
pub use bundle::{FeatureBundle, FeatureValue};
pub use config::AnalysisConfig;
pub use diff::{diff, Diff};
pub use engine::{NoEngine, PositionEvaluator, Score};
pub use error::{ChessFeaturesError, ChessFeaturesResult, EngineError};
pub use features::extract;
pub use position::Position;
pub use style::{NotComputed, StyleScorer, StyleScores};
pub use types::{CastlingRights, Color, Move, MoveFlags, Piece, PieceKind, Square};
pub use vectors::FeatureVector;
