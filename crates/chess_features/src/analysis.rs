//! Analysis pipeline
//!
//! Ties the pieces together for a caller that starts from board-state
//! strings:
//!
//! ```text
//! fen ──decode──► Position ──(optional move)──► Position ──extract──► FeatureBundle
//!                                                   │                     │
//!                                                   ├── evaluator ──► engine_eval (omitted on error)
//!                                                   └── style scorer ◄────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{apply_uci, parse_uci, play};
use crate::bundle::FeatureBundle;
use crate::config::AnalysisConfig;
use crate::diff::{diff, Diff};
use crate::engine::{NoEngine, PositionEvaluator, Score};
use crate::error::{ChessFeaturesResult, EngineError};
use crate::features::extract;
use crate::fen::{decode, encode};
use crate::position::Position;
use crate::style::{NotComputed, StyleScorer, StyleScores};
use crate::vectors::{board_pattern, move_sequence, FeatureVector};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub current_fen: String,
    pub features: FeatureBundle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine_eval: Option<Score>,
    #[serde(skip_serializing_if = "StyleScores::is_empty")]
    pub style: StyleScores,
}

pub struct Analyzer<E = NoEngine, S = NotComputed> {
    config: AnalysisConfig,
    evaluator: E,
    scorer: S,
}

impl Analyzer {
    /// Analyzer with no engine and no style scoring
    pub fn new(config: AnalysisConfig) -> Self {
        Analyzer::with_collaborators(config, NoEngine, NotComputed)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::new(AnalysisConfig::default())
    }
}

impl<E: PositionEvaluator, S: StyleScorer> Analyzer<E, S> {
    pub fn with_collaborators(config: AnalysisConfig, evaluator: E, scorer: S) -> Self {
        Analyzer {
            config,
            evaluator,
            scorer,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Decode `fen`, play `uci_move` on it if given, and analyse the result
    pub fn analyze(&self, fen: &str, uci_move: Option<&str>) -> ChessFeaturesResult<Analysis> {
        let mut position = decode(fen)?;
        if let Some(notation) = uci_move {
            position = apply_uci(&position, notation)?;
        }
        Ok(self.analyze_position(&position))
    }

    /// Analyse an already decoded position
    pub fn analyze_position(&self, position: &Position) -> Analysis {
        let current_fen = encode(position);
        let features = extract(position);
        let engine_eval = self.evaluate(&current_fen);
        let style = self.scorer.score(position, &features);
        debug!(fen = %current_fen, evaluated = engine_eval.is_some(), "analysed position");
        Analysis {
            current_fen,
            features,
            engine_eval,
            style,
        }
    }

    /// Feature changes going from `prev_fen` to `curr_fen`
    pub fn compare(&self, prev_fen: &str, curr_fen: &str) -> ChessFeaturesResult<Diff> {
        let before = extract(&decode(prev_fen)?);
        let after = extract(&decode(curr_fen)?);
        Ok(diff(&before, &after))
    }

    /// Fixed-length encoding of the position reached by playing `uci_moves`
    /// from `fen`, one after another
    pub fn feature_vector(&self, fen: &str, uci_moves: &[&str]) -> ChessFeaturesResult<FeatureVector> {
        let mut position = decode(fen)?;
        let mut moves = Vec::with_capacity(uci_moves.len());
        for notation in uci_moves {
            let mv = parse_uci(&position, notation)?;
            position = play(&position, &mv);
            moves.push(mv);
        }

        let features = extract(&position);
        let engine_eval = self
            .evaluate(&encode(&position))
            .map(|score| score.as_pawns(self.config.mate_score));
        Ok(FeatureVector {
            board_pattern_features: board_pattern(&position),
            move_sequence_features: move_sequence(&moves, self.config.move_history_len),
            style: self.scorer.score(&position, &features),
            engine_eval,
        })
    }

    fn evaluate(&self, fen: &str) -> Option<Score> {
        match self.evaluator.evaluate(fen, self.config.engine_time_budget) {
            Ok(score) => Some(score),
            Err(EngineError::Unavailable) => None,
            Err(err) => {
                warn!(%err, fen, "position evaluation failed, omitting it");
                None
            }
        }
    }
}
